//! 地址识别服务
//!
//! 输入任意扫码文本，输出网络标签 + 规范地址。
//!
//! 识别顺序：
//! 1. 拆分 `<scheme>:<address>`（只认第一个 `:`），两侧 trim
//! 2. scheme 指明已知网络时，先用该网络的校验器
//! 3. 按规范顺序逐个校验，第一个接受的网络胜出
//! 4. 都不接受 → UNKNOWN
//!
//! `recognize` 返回 `Result`，`classify` 永不失败（错误降级为 UNKNOWN）。

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::{
    config::{RecognizerConfig, ValidationMode},
    domain::{AddressClassification, ScanUri},
    error::RecognitionError,
    utils::{mask_address, string_utils::truncate},
    validators::{canonical_table, LegacyMatcher, SchemeEntry},
};

static DEFAULT_RECOGNIZER: Lazy<AddressRecognizer> =
    Lazy::new(|| AddressRecognizer::new(RecognizerConfig::canonical()));

/// 使用规范配置识别（不受环境变量影响）
pub fn classify(raw: &str) -> AddressClassification {
    DEFAULT_RECOGNIZER.classify(raw)
}

/// 地址识别器
///
/// 无内部可变状态，可在多线程间共享
#[derive(Debug, Clone)]
pub struct AddressRecognizer {
    entries: Vec<SchemeEntry>,
    config: RecognizerConfig,
    legacy: LegacyMatcher,
}

impl Default for AddressRecognizer {
    fn default() -> Self {
        Self::new(RecognizerConfig::canonical())
    }
}

impl AddressRecognizer {
    /// 使用内置校验表（按配置过滤网络，顺序不变）
    pub fn new(config: RecognizerConfig) -> Self {
        let enabled = config.enabled_networks();
        let entries = canonical_table()
            .into_iter()
            .filter(|entry| enabled.contains(&entry.network))
            .collect();
        Self::with_entries(entries, config)
    }

    /// 使用自定义校验表（替换 / mock 校验器）
    pub fn with_entries(entries: Vec<SchemeEntry>, config: RecognizerConfig) -> Self {
        Self {
            entries,
            config,
            legacy: LegacyMatcher,
        }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn entries(&self) -> &[SchemeEntry] {
        &self.entries
    }

    /// 识别地址，Malformed 输入返回错误
    pub fn recognize(&self, raw: &str) -> Result<AddressClassification, RecognitionError> {
        if raw.len() > self.config.max_input_len {
            return Err(RecognitionError::InputTooLong {
                len: raw.len(),
                max: self.config.max_input_len,
            });
        }

        let classification = match self.config.mode {
            ValidationMode::Strict => self.recognize_strict(raw)?,
            ValidationMode::Legacy => self.legacy.classify(raw),
        };

        debug!(
            network = %classification.network,
            address = %mask_address(&classification.address),
            mode = ?self.config.mode,
            "地址识别完成"
        );

        Ok(classification)
    }

    /// 识别地址，永不失败
    pub fn classify(&self, raw: &str) -> AddressClassification {
        match self.recognize(raw) {
            Ok(classification) => classification,
            Err(e) => {
                warn!(
                    code = e.code(),
                    error = %e,
                    input = %truncate(raw.trim(), 64),
                    "地址识别失败，降级为 UNKNOWN"
                );
                AddressClassification::unknown(raw.trim())
            }
        }
    }

    /// 拆分扫码文本（不做校验）
    pub fn split(&self, raw: &str) -> ScanUri {
        ScanUri::parse(raw, self.config.strip_query_params)
    }

    fn recognize_strict(&self, raw: &str) -> Result<AddressClassification, RecognitionError> {
        let uri = self.split(raw);
        if uri.candidate.is_empty() {
            return Ok(AddressClassification::unknown(uri.candidate));
        }

        if self.config.prefer_scheme_hint {
            if let Some(hinted) = uri.hinted_network() {
                if let Some(entry) = self.entries.iter().find(|e| e.network == hinted) {
                    if Self::run(entry, &uri.candidate)? {
                        return Ok(AddressClassification::new(hinted, uri.candidate));
                    }
                    debug!(
                        scheme = uri.scheme.as_deref().unwrap_or_default(),
                        "scheme 指向的网络未通过校验，继续按顺序匹配"
                    );
                }
            }
        }

        for entry in &self.entries {
            if Self::run(entry, &uri.candidate)? {
                return Ok(AddressClassification::new(entry.network, uri.candidate));
            }
        }

        Ok(AddressClassification::unknown(uri.candidate))
    }

    fn run(entry: &SchemeEntry, candidate: &str) -> Result<bool, RecognitionError> {
        entry
            .validator
            .validate(candidate)
            .map_err(|e| RecognitionError::ValidatorFailed {
                network: entry.network,
                validator: entry.validator.id(),
                message: e.to_string(),
            })
    }
}
