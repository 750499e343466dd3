//! 扫码文本拆分
//!
//! `<scheme>:<address>[?params]` → scheme / 候选地址 / 查询参数

use serde::{Deserialize, Serialize};

use crate::{domain::Network, utils::chain_normalizer};

/// 拆分后的扫码文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanUri {
    /// 第一个 `:` 之前的部分（已 trim，空串视为无）
    pub scheme: Option<String>,
    /// 交给校验器的候选地址（已 trim）
    pub candidate: String,
    /// 查询参数，仅在 `strip_query` 时解析
    #[serde(default)]
    pub params: Vec<(String, String)>,
}

impl ScanUri {
    /// 拆分原始扫码文本
    ///
    /// 只有第一个 `:` 是 scheme 分隔符，之后的内容（包括更多的 `:`）全部属于候选地址。
    /// `strip_query` 为 false 时 `?` 后缀保留在候选地址中。
    pub fn parse(raw: &str, strip_query: bool) -> Self {
        let trimmed = raw.trim();

        let (scheme, rest) = match trimmed.split_once(':') {
            Some((scheme, rest)) => {
                let scheme = scheme.trim();
                let scheme = if scheme.is_empty() {
                    None
                } else {
                    Some(scheme.to_string())
                };
                (scheme, rest.trim())
            }
            None => (None, trimmed),
        };

        let (candidate, params) = if strip_query {
            match rest.split_once('?') {
                Some((address, query)) => (address.trim(), parse_query(query)),
                None => (rest, Vec::new()),
            }
        } else {
            (rest, Vec::new())
        };

        Self {
            scheme,
            candidate: candidate.to_string(),
            params,
        }
    }

    /// scheme 指向的网络（大小写不敏感）
    pub fn hinted_network(&self) -> Option<Network> {
        self.scheme
            .as_deref()
            .and_then(chain_normalizer::normalize_scheme)
    }

    /// 查询参数（key 大小写不敏感，取第一个）
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.trim().to_string(), v.trim().to_string()),
            None => (pair.trim().to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_colon() {
        let uri = ScanUri::parse("  0xabc  ", false);
        assert_eq!(uri.scheme, None);
        assert_eq!(uri.candidate, "0xabc");
        assert!(uri.params.is_empty());
    }

    #[test]
    fn test_first_colon_only() {
        let uri = ScanUri::parse("bitcoin:bc1qxyz:amount=1", false);
        assert_eq!(uri.scheme.as_deref(), Some("bitcoin"));
        assert_eq!(uri.candidate, "bc1qxyz:amount=1");
    }

    #[test]
    fn test_whitespace_around_both_sides() {
        let uri = ScanUri::parse(" Litecoin : LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9 ", false);
        assert_eq!(uri.scheme.as_deref(), Some("Litecoin"));
        assert_eq!(uri.candidate, "LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9");
        assert_eq!(uri.hinted_network(), Some(Network::Ltc));
    }

    #[test]
    fn test_empty_scheme_is_absent() {
        let uri = ScanUri::parse(":abc", false);
        assert_eq!(uri.scheme, None);
        assert_eq!(uri.candidate, "abc");

        let uri = ScanUri::parse("", false);
        assert_eq!(uri.scheme, None);
        assert_eq!(uri.candidate, "");
    }

    #[test]
    fn test_query_kept_unless_stripped() {
        let raw = "bitcoin:1BoatSLRHtKNngkdXEeobR76b53LETtpyT?amount=0.5&label=Coffee&flag";

        let kept = ScanUri::parse(raw, false);
        assert!(kept.candidate.ends_with("?amount=0.5&label=Coffee&flag"));

        let stripped = ScanUri::parse(raw, true);
        assert_eq!(stripped.candidate, "1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
        assert_eq!(stripped.param("AMOUNT"), Some("0.5"));
        assert_eq!(stripped.param("label"), Some("Coffee"));
        assert_eq!(stripped.param("flag"), Some(""));
        assert_eq!(stripped.param("message"), None);
    }

    #[test]
    fn test_unknown_scheme_has_no_hint() {
        let uri = ScanUri::parse("https://example.com", false);
        assert_eq!(uri.scheme.as_deref(), Some("https"));
        assert_eq!(uri.candidate, "//example.com");
        assert_eq!(uri.hinted_network(), None);
    }
}
