//! 网络标签与识别结果
//!
//! 支持的网络是一个封闭集合，新增网络只需扩展 `Network` 与校验表

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// 网络标签
///
/// 序列化为大写符号（`"BTC"`、`"ETH"`、...、`"UNKNOWN"`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Btc,
    Eth,
    Ltc,
    Trx,
    Doge,
    Dash,
    Xrp,
    Zec,
    Xmr,
    /// 无法识别（哨兵值，不可持久化）
    Unknown,
}

impl Network {
    /// 规范校验顺序（先出现者优先）
    pub const ALL: [Network; 9] = [
        Network::Btc,
        Network::Eth,
        Network::Ltc,
        Network::Trx,
        Network::Doge,
        Network::Dash,
        Network::Xrp,
        Network::Zec,
        Network::Xmr,
    ];

    /// 大写符号
    pub fn symbol(&self) -> &'static str {
        match self {
            Network::Btc => "BTC",
            Network::Eth => "ETH",
            Network::Ltc => "LTC",
            Network::Trx => "TRX",
            Network::Doge => "DOGE",
            Network::Dash => "DASH",
            Network::Xrp => "XRP",
            Network::Zec => "ZEC",
            Network::Xmr => "XMR",
            Network::Unknown => "UNKNOWN",
        }
    }

    /// 校验器标识（同时也是该网络的 URI scheme）
    pub fn validator_id(&self) -> &'static str {
        match self {
            Network::Btc => "bitcoin",
            Network::Eth => "ethereum",
            Network::Ltc => "litecoin",
            Network::Trx => "tron",
            Network::Doge => "dogecoin",
            Network::Dash => "dash",
            Network::Xrp => "ripple",
            Network::Zec => "zcash",
            Network::Xmr => "monero",
            Network::Unknown => "unknown",
        }
    }

    /// URI scheme 别名（小写）
    pub fn scheme_aliases(&self) -> &'static [&'static str] {
        match self {
            Network::Btc => &["bitcoin", "btc"],
            Network::Eth => &["ethereum", "eth"],
            Network::Ltc => &["litecoin", "ltc"],
            Network::Trx => &["tron", "trx"],
            Network::Doge => &["dogecoin", "doge"],
            Network::Dash => &["dash"],
            Network::Xrp => &["ripple", "xrp", "xrpl"],
            Network::Zec => &["zcash", "zec"],
            Network::Xmr => &["monero", "xmr"],
            Network::Unknown => &[],
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Network::Unknown)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    /// 接受符号或任一别名，大小写不敏感
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unknown") {
            return Ok(Network::Unknown);
        }
        crate::utils::chain_normalizer::normalize_scheme(trimmed)
            .ok_or_else(|| anyhow::anyhow!("Unsupported network identifier: {}", trimmed))
    }
}

/// 地址识别结果
///
/// 每次扫码新建，不可变；由调用方决定是否持久化
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressClassification {
    pub network: Network,
    pub address: String,
}

impl AddressClassification {
    pub fn new(network: Network, address: impl Into<String>) -> Self {
        Self {
            network,
            address: address.into(),
        }
    }

    pub fn unknown(address: impl Into<String>) -> Self {
        Self::new(Network::Unknown, address)
    }

    pub fn is_unknown(&self) -> bool {
        self.network.is_unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_serialization() {
        let c = AddressClassification::new(Network::Doge, "DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"network":"DOGE","address":"DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L"}"#
        );

        let back: AddressClassification =
            serde_json::from_str(r#"{"network":"UNKNOWN","address":"x"}"#).unwrap();
        assert!(back.is_unknown());
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("BTC".parse::<Network>().unwrap(), Network::Btc);
        assert_eq!("Bitcoin".parse::<Network>().unwrap(), Network::Btc);
        assert_eq!(" xrpl ".parse::<Network>().unwrap(), Network::Xrp);
        assert_eq!("unknown".parse::<Network>().unwrap(), Network::Unknown);
        assert!("solana".parse::<Network>().is_err());
    }

    #[test]
    fn test_canonical_order() {
        let symbols: Vec<&str> = Network::ALL.iter().map(|n| n.symbol()).collect();
        assert_eq!(
            symbols,
            vec!["BTC", "ETH", "LTC", "TRX", "DOGE", "DASH", "XRP", "ZEC", "XMR"]
        );
        assert!(!Network::ALL.contains(&Network::Unknown));
    }
}
