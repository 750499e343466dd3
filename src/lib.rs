//! walletscan - 扫码钱包地址识别
//!
//! 输入二维码 / 条码解出的文本，识别所属网络并提取规范地址。
//! 每个网络都做完整的结构与 checksum 校验，无法识别时返回 UNKNOWN。

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;
pub mod utils;
pub mod validators;

// 重新导出常用类型
pub use domain::{AddressClassification, Network};
pub use error::{RecognitionError, WalletBookError};
pub use service::{classify, AddressRecognizer};

// 统一模块导出
pub mod prelude {
    pub use crate::{
        config::{Config, RecognizerConfig, ValidationMode},
        domain::{AddOutcome, AddressClassification, Network, ScanUri, WalletBook},
        error::{RecognitionError, WalletBookError},
        service::{classify, AddressRecognizer, ScanDecision, ScanSession},
        validators::{AddressValidator, SchemeEntry},
    };
}
