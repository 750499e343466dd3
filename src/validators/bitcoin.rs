//! Bitcoin 系 UTXO 地址校验（Base58Check legacy + SegWit）

use anyhow::Result;

use super::{AddressValidator, Base58CheckValidator};

/// Base58Check legacy 地址 + 可选的 bech32/bech32m SegWit 地址
#[derive(Debug, Clone)]
pub struct UtxoValidator {
    legacy: Base58CheckValidator,
    /// SegWit HRP（小写），None 表示该网络没有原生 SegWit
    segwit_hrp: Option<&'static str>,
}

impl UtxoValidator {
    pub const fn new(legacy: Base58CheckValidator, segwit_hrp: Option<&'static str>) -> Self {
        Self { legacy, segwit_hrp }
    }

    /// BTC: 1... / 3... / bc1...
    pub const fn bitcoin() -> Self {
        Self::new(Base58CheckValidator::bitcoin(), Some("bc"))
    }

    /// LTC: L... / M... / 3... / ltc1...
    pub const fn litecoin() -> Self {
        Self::new(Base58CheckValidator::litecoin(), Some("ltc"))
    }

    fn validate_segwit(&self, hrp: &str, candidate: &str) -> bool {
        // 前缀不符直接跳过，避免对每个候选都做 bech32 解码
        let prefix_len = hrp.len() + 1;
        let has_prefix = candidate
            .get(..prefix_len)
            .map(|p| p.eq_ignore_ascii_case(&format!("{}1", hrp)))
            .unwrap_or(false);
        if !has_prefix {
            return false;
        }

        // segwit::decode 会同时检查 witness 版本、程序长度以及 bech32 / bech32m 变体
        match bech32::segwit::decode(candidate) {
            Ok((decoded_hrp, _version, _program)) => decoded_hrp.to_lowercase() == hrp,
            Err(_) => false,
        }
    }
}

impl AddressValidator for UtxoValidator {
    fn id(&self) -> &'static str {
        self.legacy.id()
    }

    fn validate(&self, candidate: &str) -> Result<bool> {
        if let Some(hrp) = self.segwit_hrp {
            if self.validate_segwit(hrp, candidate) {
                return Ok(true);
            }
        }
        self.legacy.validate(candidate)
    }
}
