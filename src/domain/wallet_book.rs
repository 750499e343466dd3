//! 钱包簿：扫码历史与收藏
//!
//! 只保存已识别的地址（UNKNOWN 一律拒绝），按地址去重。
//! 历史按添加顺序排列。

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    domain::AddressClassification, error::WalletBookError, utils::mask_address,
};

/// `WalletBook::add` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// 地址已存在，历史不变
    AlreadyPresent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBook {
    #[serde(default)]
    history: Vec<AddressClassification>,
    #[serde(default)]
    favorites: Vec<AddressClassification>,
}

impl WalletBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[AddressClassification] {
        &self.history
    }

    pub fn favorites(&self) -> &[AddressClassification] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn contains(&self, address: &str) -> bool {
        self.history.iter().any(|c| c.address == address)
    }

    pub fn is_favorite(&self, address: &str) -> bool {
        self.favorites.iter().any(|c| c.address == address)
    }

    /// 加入历史
    pub fn add(&mut self, classification: AddressClassification) -> Result<AddOutcome, WalletBookError> {
        Self::ensure_recognized(&classification)?;

        if self.contains(&classification.address) {
            debug!(address = %mask_address(&classification.address), "地址已在历史中");
            return Ok(AddOutcome::AlreadyPresent);
        }

        info!(
            network = %classification.network,
            address = %mask_address(&classification.address),
            "新增历史地址"
        );
        self.history.push(classification);
        Ok(AddOutcome::Added)
    }

    /// 切换收藏状态，返回切换后是否为收藏
    pub fn toggle_favorite(
        &mut self,
        classification: &AddressClassification,
    ) -> Result<bool, WalletBookError> {
        Self::ensure_recognized(classification)?;

        if let Some(pos) = self
            .favorites
            .iter()
            .position(|c| c.address == classification.address)
        {
            self.favorites.remove(pos);
            return Ok(false);
        }

        self.favorites.push(classification.clone());
        Ok(true)
    }

    /// 从历史和收藏中移除，返回是否存在过
    pub fn remove(&mut self, address: &str) -> bool {
        let before = self.history.len() + self.favorites.len();
        self.history.retain(|c| c.address != address);
        self.favorites.retain(|c| c.address != address);
        before != self.history.len() + self.favorites.len()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.favorites.clear();
    }

    pub fn to_json(&self) -> Result<String, WalletBookError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从快照恢复，丢弃 UNKNOWN 与重复地址
    pub fn from_json(json: &str) -> Result<Self, WalletBookError> {
        let raw: WalletBook = serde_json::from_str(json)?;
        Ok(Self {
            history: sanitize(raw.history),
            favorites: sanitize(raw.favorites),
        })
    }

    fn ensure_recognized(classification: &AddressClassification) -> Result<(), WalletBookError> {
        if classification.is_unknown() || classification.address.is_empty() {
            return Err(WalletBookError::UnknownNetwork {
                address: classification.address.clone(),
            });
        }
        Ok(())
    }
}

fn sanitize(entries: Vec<AddressClassification>) -> Vec<AddressClassification> {
    let mut out: Vec<AddressClassification> = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_unknown() || entry.address.is_empty() {
            continue;
        }
        if out.iter().any(|c| c.address == entry.address) {
            continue;
        }
        out.push(entry);
    }
    out
}
