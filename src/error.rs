use thiserror::Error;

use crate::domain::Network;

/// 识别过程本身失败（Malformed）
///
/// 由 `AddressRecognizer::recognize` 返回；`classify` 会将其降级为 UNKNOWN
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("input too long: {len} bytes (max {max})")]
    InputTooLong { len: usize, max: usize },

    #[error("validator '{validator}' failed for {network}: {message}")]
    ValidatorFailed {
        network: Network,
        validator: &'static str,
        message: String,
    },
}

impl RecognitionError {
    /// 稳定的错误码
    pub fn code(&self) -> &'static str {
        match self {
            RecognitionError::InputTooLong { .. } => "input_too_long",
            RecognitionError::ValidatorFailed { .. } => "validator_failed",
        }
    }
}

/// 钱包簿（历史 / 收藏）错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletBookError {
    /// UNKNOWN 分类不可持久化，也不可收藏
    #[error("address '{address}' has no recognized network")]
    UnknownNetwork { address: String },

    #[error("invalid wallet book snapshot: {0}")]
    Snapshot(String),
}

impl WalletBookError {
    pub fn code(&self) -> &'static str {
        match self {
            WalletBookError::UnknownNetwork { .. } => "unknown_network",
            WalletBookError::Snapshot(_) => "invalid_snapshot",
        }
    }
}

impl From<serde_json::Error> for WalletBookError {
    fn from(err: serde_json::Error) -> Self {
        WalletBookError::Snapshot(err.to_string())
    }
}
