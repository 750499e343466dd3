//! 地址校验模块
//!
//! 每个网络一个校验器，按规范顺序组成校验表。
//! 识别逻辑只依赖 `AddressValidator`，校验算法可以独立替换或 mock。

use std::{fmt, sync::Arc};

use anyhow::Result;

use crate::domain::Network;

pub mod base58check;
pub mod bitcoin;
pub mod ethereum;
pub mod legacy;
pub mod monero;
pub mod zcash;


pub use base58check::Base58CheckValidator;
pub use bitcoin::UtxoValidator;
pub use ethereum::EthereumValidator;
pub use legacy::LegacyMatcher;
pub use monero::MoneroValidator;
pub use zcash::ZcashValidator;

/// 地址格式校验能力
///
/// - Ok(true): 地址属于该网络
/// - Ok(false): 地址不属于该网络
/// - Err: 校验过程本身失败（识别器会把它当作 Malformed）
pub trait AddressValidator: Send + Sync {
    /// 校验器标识（"bitcoin"、"ethereum"...）
    fn id(&self) -> &'static str;

    fn validate(&self, candidate: &str) -> Result<bool>;
}

/// 校验表条目
#[derive(Clone)]
pub struct SchemeEntry {
    pub network: Network,
    pub validator: Arc<dyn AddressValidator>,
}

impl SchemeEntry {
    pub fn new(network: Network, validator: Arc<dyn AddressValidator>) -> Self {
        Self { network, validator }
    }
}

impl fmt::Debug for SchemeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeEntry")
            .field("network", &self.network)
            .field("validator", &self.validator.id())
            .finish()
    }
}

/// 网络对应的内置校验器
pub fn validator_for(network: Network) -> Option<Arc<dyn AddressValidator>> {
    let validator: Arc<dyn AddressValidator> = match network {
        Network::Btc => Arc::new(UtxoValidator::bitcoin()),
        Network::Eth => Arc::new(EthereumValidator),
        Network::Ltc => Arc::new(UtxoValidator::litecoin()),
        Network::Trx => Arc::new(Base58CheckValidator::tron()),
        Network::Doge => Arc::new(Base58CheckValidator::dogecoin()),
        Network::Dash => Arc::new(Base58CheckValidator::dash()),
        Network::Xrp => Arc::new(Base58CheckValidator::ripple()),
        Network::Zec => Arc::new(ZcashValidator::new()),
        Network::Xmr => Arc::new(MoneroValidator),
        Network::Unknown => return None,
    };
    Some(validator)
}

/// 规范校验表（BTC, ETH, LTC, TRX, DOGE, DASH, XRP, ZEC, XMR）
pub fn canonical_table() -> Vec<SchemeEntry> {
    Network::ALL
        .iter()
        .filter_map(|&network| validator_for(network).map(|v| SchemeEntry::new(network, v)))
        .collect()
}
