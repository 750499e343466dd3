//! 扫码会话
//!
//! 摄像头会对同一个二维码连续回调，窗口内重复的内容直接忽略。
//! 时间由调用方传入，会话本身不读时钟。

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{
    domain::{AddOutcome, AddressClassification, WalletBook},
    error::WalletBookError,
    service::recognizer::AddressRecognizer,
    utils::string_utils::is_blank,
};

/// 忽略原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Empty,
    /// 窗口内与上一次接受的内容相同
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanDecision {
    Ignored(IgnoreReason),
    Accepted(AddressClassification),
}

#[derive(Debug, Clone)]
pub struct ScanSession {
    recognizer: AddressRecognizer,
    window: Duration,
    last: Option<(String, Instant)>,
}

impl ScanSession {
    pub fn new(recognizer: AddressRecognizer, window: Duration) -> Self {
        Self {
            recognizer,
            window,
            last: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn recognizer(&self) -> &AddressRecognizer {
        &self.recognizer
    }

    /// 处理一次扫码回调
    pub fn accept(&mut self, value: &str, now: Instant) -> ScanDecision {
        if is_blank(value) {
            return ScanDecision::Ignored(IgnoreReason::Empty);
        }

        if let Some((last_value, at)) = &self.last {
            if last_value == value && now.saturating_duration_since(*at) < self.window {
                debug!("窗口内重复扫码，忽略");
                return ScanDecision::Ignored(IgnoreReason::Duplicate);
            }
        }

        self.last = Some((value.to_string(), now));
        ScanDecision::Accepted(self.recognizer.classify(value))
    }

    /// 写入钱包簿，返回地址是否已存在
    ///
    /// UNKNOWN 不入库，返回错误
    pub fn record(
        &self,
        book: &mut WalletBook,
        classification: AddressClassification,
    ) -> Result<bool, WalletBookError> {
        match book.add(classification) {
            Ok(AddOutcome::Added) => Ok(false),
            Ok(AddOutcome::AlreadyPresent) => Ok(true),
            Err(e) => {
                warn!(code = e.code(), "扫码结果未写入钱包簿: {}", e);
                Err(e)
            }
        }
    }

    /// 清除上一次扫码记录
    pub fn reset(&mut self) {
        self.last = None;
    }
}
