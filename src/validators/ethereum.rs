//! Ethereum 地址校验（支持 EIP-55 Checksum）

use anyhow::Result;
use sha3::{Digest, Keccak256};

use super::AddressValidator;

#[derive(Debug, Clone, Copy, Default)]
pub struct EthereumValidator;

impl EthereumValidator {
    /// 验证 EIP-55 Checksum
    /// https://eips.ethereum.org/EIPS/eip-55
    fn verify_eip55_checksum(hex_part: &str) -> bool {
        let hash = Keccak256::digest(hex_part.to_ascii_lowercase().as_bytes());

        hex_part.chars().enumerate().all(|(i, ch)| {
            if !ch.is_ascii_alphabetic() {
                return true;
            }
            let hash_byte = hash[i / 2];
            let hash_nibble = if i % 2 == 0 {
                hash_byte >> 4
            } else {
                hash_byte & 0x0f
            };
            ch.is_ascii_uppercase() == (hash_nibble >= 8)
        })
    }
}

impl AddressValidator for EthereumValidator {
    fn id(&self) -> &'static str {
        "ethereum"
    }

    fn validate(&self, candidate: &str) -> Result<bool> {
        // 1. 基本格式检查
        let Some(hex_part) = candidate.strip_prefix("0x") else {
            return Ok(false);
        };
        if hex_part.len() != 40 {
            return Ok(false);
        }

        // 2. 验证 hex 字符（20 字节）
        if hex::decode(hex_part).is_err() {
            return Ok(false);
        }

        // 3. 全小写 / 全大写视为无 checksum；混合大小写必须满足 EIP-55
        let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper {
            return Ok(Self::verify_eip55_checksum(hex_part));
        }

        Ok(true)
    }
}
