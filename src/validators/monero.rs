//! Monero 地址校验
//!
//! Monero 的 Base58 按 8 字节分块编码（每块 11 个字符，末块按长度表映射），
//! 末尾 4 字节为 Keccak-256 checksum。
//!
//! | tag  | 类型         | 解码长度 | 编码长度 |
//! |------|--------------|----------|----------|
//! | 0x12 | standard     | 69       | 95       |
//! | 0x2a | subaddress   | 69       | 95       |
//! | 0x13 | integrated   | 77       | 106      |

use anyhow::Result;
use sha3::{Digest, Keccak256};

use super::AddressValidator;

const ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// 解码块大小 -> 编码块大小
const ENCODED_BLOCK_SIZES: [usize; 9] = [0, 2, 3, 5, 6, 7, 9, 10, 11];
const FULL_ENCODED_BLOCK_SIZE: usize = 11;

const CHECKSUM_LEN: usize = 4;

const TAG_STANDARD: u8 = 0x12;
const TAG_INTEGRATED: u8 = 0x13;
const TAG_SUBADDRESS: u8 = 0x2a;

#[derive(Debug, Clone, Copy, Default)]
pub struct MoneroValidator;

impl MoneroValidator {
    fn expected_len(tag: u8) -> Option<usize> {
        match tag {
            TAG_STANDARD | TAG_SUBADDRESS => Some(69),
            TAG_INTEGRATED => Some(77),
            _ => None,
        }
    }
}

impl AddressValidator for MoneroValidator {
    fn id(&self) -> &'static str {
        "monero"
    }

    fn validate(&self, candidate: &str) -> Result<bool> {
        if candidate.len() != 95 && candidate.len() != 106 {
            return Ok(false);
        }

        let Some(decoded) = decode(candidate) else {
            return Ok(false);
        };

        let Some(expected_len) = decoded.first().copied().and_then(Self::expected_len) else {
            return Ok(false);
        };
        if decoded.len() != expected_len {
            return Ok(false);
        }

        let (body, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
        let hash = Keccak256::digest(body);
        Ok(hash[..CHECKSUM_LEN] == *checksum)
    }
}

/// Monero 分块 Base58 解码
pub fn decode(encoded: &str) -> Option<Vec<u8>> {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / FULL_ENCODED_BLOCK_SIZE * 8 + 8);

    for chunk in bytes.chunks(FULL_ENCODED_BLOCK_SIZE) {
        let size = ENCODED_BLOCK_SIZES.iter().position(|&n| n == chunk.len())?;
        decode_block(chunk, size, &mut out)?;
    }

    Some(out)
}

fn decode_block(chunk: &[u8], size: usize, out: &mut Vec<u8>) -> Option<()> {
    // 11 位 base58 最大约 2^64.4，用 u128 累加再做溢出检查
    let mut num: u128 = 0;
    for &c in chunk {
        let digit = ALPHABET.iter().position(|&a| a == c)?;
        num = num * 58 + digit as u128;
    }
    if num >= 1u128 << (8 * size) {
        return None;
    }

    let be = (num as u64).to_be_bytes();
    out.extend_from_slice(&be[8 - size..]);
    Some(())
}
