//! Domain 模块
//!
//! 网络标签、扫码文本拆分与钱包簿

pub mod network;
pub mod scan_uri;
pub mod wallet_book;

// 重新导出常用类型
pub use network::{AddressClassification, Network};
pub use scan_uri::ScanUri;
pub use wallet_book::{AddOutcome, WalletBook};
