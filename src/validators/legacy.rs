//! Legacy 匹配策略（兼容旧版扫码逻辑）
//!
//! 只做 scheme 前缀 / 正则的粗匹配，不校验 checksum，
//! 因此会接受格式正确但 checksum 错误的地址。仅在显式选择 `ValidationMode::Legacy` 时使用。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{AddressClassification, Network};

/// 旧版逻辑识别的 URI scheme
const LEGACY_SCHEMES: &[(&str, Network)] = &[
    ("bitcoin:", Network::Btc),
    ("ethereum:", Network::Eth),
    ("litecoin:", Network::Ltc),
    ("tron:", Network::Trx),
];

const ETH_MIN_LEN: usize = 26;

static BTC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$").expect("legacy BTC pattern is valid")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyMatcher;

impl LegacyMatcher {
    pub fn classify(&self, raw: &str) -> AddressClassification {
        let input = raw.trim();
        let lower = input.to_ascii_lowercase();

        for (prefix, network) in LEGACY_SCHEMES {
            if lower.starts_with(prefix) {
                // 旧版取的是第一个与第二个 `:` 之间的部分
                let address = input.split(':').nth(1).unwrap_or_default().trim();
                if address.is_empty() {
                    return AddressClassification::unknown(address);
                }
                return AddressClassification::new(*network, address);
            }
        }

        if input.starts_with("0x") && input.len() >= ETH_MIN_LEN {
            return AddressClassification::new(Network::Eth, input);
        }

        if BTC_PATTERN.is_match(input) {
            return AddressClassification::new(Network::Btc, input);
        }

        AddressClassification::unknown(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_prefixes() {
        let matcher = LegacyMatcher;

        let c = matcher.classify("TRON:TPL66VK2gCchGhsEjVzj6LgKnFxBRoZRaf");
        assert_eq!(c.network, Network::Trx);
        assert_eq!(c.address, "TPL66VK2gCchGhsEjVzj6LgKnFxBRoZRaf");

        // 第二个冒号之后的内容被丢弃
        let c = matcher.classify("litecoin:LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9:extra");
        assert_eq!(c.network, Network::Ltc);
        assert_eq!(c.address, "LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9");
    }

    #[test]
    fn test_scheme_without_address_is_unknown() {
        let matcher = LegacyMatcher;

        assert_eq!(matcher.classify("bitcoin:"), AddressClassification::unknown(""));
        assert_eq!(matcher.classify("ETHEREUM:   "), AddressClassification::unknown(""));
        assert_eq!(
            matcher.classify("tron::TYASr5UV6HEcXatwdFQfmLVUqQQQMUxHLS"),
            AddressClassification::unknown("")
        );

        for raw in ["bitcoin:", "litecoin: ", "TRON:", "ethereum:  :x"] {
            let c = matcher.classify(raw);
            assert!(c.is_unknown() || !c.address.is_empty(), "input: {:?}", raw);
        }
    }

    #[test]
    fn test_coarse_patterns_accept_bad_checksums() {
        let matcher = LegacyMatcher;

        // 长度够即视为 ETH，不做 hex / checksum 检查
        let c = matcher.classify("0xnot-really-an-ethereum-address");
        assert_eq!(c.network, Network::Eth);

        // 字符集与长度正确但 checksum 错误
        let c = matcher.classify("3J98t1WpEZ73CNmYviecrnyiWrnqRhWNLy");
        assert_eq!(c.network, Network::Btc);
    }

    #[test]
    fn test_unknown() {
        let matcher = LegacyMatcher;
        assert_eq!(
            matcher.classify("  garbage-not-an-address "),
            AddressClassification::unknown("garbage-not-an-address")
        );
        assert_eq!(matcher.classify(""), AddressClassification::unknown(""));
        // 旧版不识别 bech32
        assert!(matcher
            .classify("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq")
            .is_unknown());
    }
}
