//! 网络标识符标准化模块
//!
//! 统一 URI scheme / 符号 / 别名到 `Network` 的映射（大小写不敏感）

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::Network;

/// 别名注册表（静态初始化，key 为小写）
static SCHEME_REGISTRY: Lazy<HashMap<String, Network>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    for network in Network::ALL {
        // 注册符号
        registry.insert(network.symbol().to_lowercase(), network);

        // 注册校验器标识
        registry.insert(network.validator_id().to_string(), network);

        // 注册所有别名
        for alias in network.scheme_aliases() {
            registry.insert(alias.to_string(), network);
        }
    }
    registry
});

/// 标准化 scheme
///
/// # 示例
/// ```rust
/// # use walletscan::{domain::Network, utils::chain_normalizer::normalize_scheme};
/// assert_eq!(normalize_scheme("TRON"), Some(Network::Trx));
/// assert_eq!(normalize_scheme("bitcoin"), Some(Network::Btc));
/// assert_eq!(normalize_scheme("solana"), None);
/// ```
pub fn normalize_scheme(input: &str) -> Option<Network> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    SCHEME_REGISTRY.get(&trimmed.to_ascii_lowercase()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize_scheme("Ethereum"), Some(Network::Eth));
        assert_eq!(normalize_scheme("ETHEREUM"), Some(Network::Eth));
        assert_eq!(normalize_scheme("eth"), Some(Network::Eth));
        assert_eq!(normalize_scheme("MoNeRo"), Some(Network::Xmr));
    }

    #[test]
    fn test_every_network_registered() {
        for network in Network::ALL {
            assert_eq!(normalize_scheme(network.symbol()), Some(network));
            assert_eq!(normalize_scheme(network.validator_id()), Some(network));
        }
    }

    #[test]
    fn test_rejects_unknown() {
        assert_eq!(normalize_scheme(""), None);
        assert_eq!(normalize_scheme("   "), None);
        assert_eq!(normalize_scheme("unknown"), None);
        assert_eq!(normalize_scheme("https"), None);
    }
}
