//! Base58Check 地址校验
//!
//! payload = version || hash，末尾 4 字节为 double-SHA256 checksum

use anyhow::Result;

use super::AddressValidator;

/// 按版本前缀与长度校验 Base58Check 地址
#[derive(Debug, Clone)]
pub struct Base58CheckValidator {
    id: &'static str,
    alphabet: &'static bs58::Alphabet,
    /// 允许的版本前缀（可以是多字节，例如 Zcash 的 0x1cb8）
    versions: &'static [&'static [u8]],
    /// 去掉 checksum 后的长度（含版本前缀）
    payload_len: usize,
}

impl Base58CheckValidator {
    pub const fn new(
        id: &'static str,
        versions: &'static [&'static [u8]],
        payload_len: usize,
    ) -> Self {
        Self {
            id,
            alphabet: bs58::Alphabet::BITCOIN,
            versions,
            payload_len,
        }
    }

    pub const fn with_alphabet(mut self, alphabet: &'static bs58::Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Bitcoin legacy: P2PKH 0x00 / P2SH 0x05
    pub const fn bitcoin() -> Self {
        Self::new("bitcoin", &[&[0x00], &[0x05]], 21)
    }

    /// Litecoin: L 0x30 / M 0x32 / legacy P2SH 0x05
    pub const fn litecoin() -> Self {
        Self::new("litecoin", &[&[0x30], &[0x32], &[0x05]], 21)
    }

    /// TRON: 0x41
    pub const fn tron() -> Self {
        Self::new("tron", &[&[0x41]], 21)
    }

    /// Dogecoin: D 0x1e / P2SH 0x16
    pub const fn dogecoin() -> Self {
        Self::new("dogecoin", &[&[0x1e], &[0x16]], 21)
    }

    /// Dash: X 0x4c / P2SH 0x10
    pub const fn dash() -> Self {
        Self::new("dash", &[&[0x4c], &[0x10]], 21)
    }

    /// XRP Ledger classic address（Ripple 字母表）
    pub const fn ripple() -> Self {
        Self::new("ripple", &[&[0x00]], 21).with_alphabet(bs58::Alphabet::RIPPLE)
    }

    /// Zcash transparent: t1 0x1cb8 / t3 0x1cbd
    pub const fn zcash_transparent() -> Self {
        Self::new("zcash", &[&[0x1c, 0xb8], &[0x1c, 0xbd]], 22)
    }

    /// 解码并校验 checksum，返回 payload（含版本前缀）
    pub fn decode(&self, candidate: &str) -> Option<Vec<u8>> {
        // 25 字节 payload 最多编码为 35 个字符，这里留足余量
        if candidate.is_empty() || candidate.len() > 64 {
            return None;
        }

        bs58::decode(candidate)
            .with_alphabet(self.alphabet)
            .with_check(None)
            .into_vec()
            .ok()
    }

    fn accepts_payload(&self, payload: &[u8]) -> bool {
        payload.len() == self.payload_len
            && self
                .versions
                .iter()
                .any(|version| payload.starts_with(version))
    }
}

impl AddressValidator for Base58CheckValidator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn validate(&self, candidate: &str) -> Result<bool> {
        Ok(self
            .decode(candidate)
            .map(|payload| self.accepts_payload(&payload))
            .unwrap_or(false))
    }
}
