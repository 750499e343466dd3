//! Zcash 地址校验
//!
//! - Transparent: t1 / t3（2 字节版本前缀的 Base58Check）
//! - Sapling: zs1...（bech32，43 字节 payload）

use anyhow::Result;
use bech32::{primitives::decode::CheckedHrpstring, Bech32};

use super::{AddressValidator, Base58CheckValidator};

const SAPLING_HRP: &str = "zs";
const SAPLING_PAYLOAD_LEN: usize = 43;

#[derive(Debug, Clone)]
pub struct ZcashValidator {
    transparent: Base58CheckValidator,
}

impl ZcashValidator {
    pub const fn new() -> Self {
        Self {
            transparent: Base58CheckValidator::zcash_transparent(),
        }
    }

    fn validate_sapling(candidate: &str) -> bool {
        let has_prefix = candidate
            .get(..3)
            .map(|p| p.eq_ignore_ascii_case("zs1"))
            .unwrap_or(false);
        if !has_prefix {
            return false;
        }

        match CheckedHrpstring::new::<Bech32>(candidate) {
            Ok(checked) => {
                checked.hrp().to_lowercase() == SAPLING_HRP
                    && checked.byte_iter().count() == SAPLING_PAYLOAD_LEN
            }
            Err(_) => false,
        }
    }
}

impl Default for ZcashValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressValidator for ZcashValidator {
    fn id(&self) -> &'static str {
        "zcash"
    }

    fn validate(&self, candidate: &str) -> Result<bool> {
        if Self::validate_sapling(candidate) {
            return Ok(true);
        }
        self.transparent.validate(candidate)
    }
}
