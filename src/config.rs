//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::{path::Path, str::FromStr, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::Network;

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub recognizer: RecognizerConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 识别策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// 按网络做完整的结构 / checksum 校验（规范行为）
    #[default]
    Strict,
    /// 旧版前缀 + 正则粗匹配，不校验 checksum
    Legacy,
}

impl FromStr for ValidationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationMode::Strict),
            "legacy" => Ok(ValidationMode::Legacy),
            other => anyhow::bail!("SCAN_MODE must be 'strict' or 'legacy', got '{}'", other),
        }
    }
}

/// 识别器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    pub mode: ValidationMode,
    /// 启用的网络（空 = 全部）；校验顺序始终是规范顺序
    pub networks: Vec<Network>,
    /// scheme 指明网络时优先用该网络的校验器
    pub prefer_scheme_hint: bool,
    /// 去掉候选地址中的 `?key=value` 后缀
    pub strip_query_params: bool,
    /// 输入长度上限（字节），超出视为 Malformed
    pub max_input_len: usize,
}

/// 扫码会话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// 相同内容在该窗口内重复扫描会被忽略
    pub debounce_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
    pub enable_file_logging: bool,
    pub log_file_path: Option<String>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            mode: std::env::var("SCAN_MODE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            networks: std::env::var("SCAN_NETWORKS")
                .ok()
                .map(|s| parse_network_list(&s))
                .unwrap_or_default(),
            prefer_scheme_hint: std::env::var("SCAN_PREFER_SCHEME_HINT")
                .ok()
                .map(|v| v == "1")
                .unwrap_or(true),
            strip_query_params: std::env::var("SCAN_STRIP_QUERY")
                .ok()
                .map(|v| v == "1")
                .unwrap_or(false),
            max_input_len: std::env::var("SCAN_MAX_INPUT_LEN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4096),
        }
    }
}

impl RecognizerConfig {
    /// 不读取环境变量的规范配置：strict、全部网络、scheme 优先
    pub fn canonical() -> Self {
        Self {
            mode: ValidationMode::Strict,
            networks: Vec::new(),
            prefer_scheme_hint: true,
            strip_query_params: false,
            max_input_len: 4096,
        }
    }

    /// 实际参与校验的网络（规范顺序）
    pub fn enabled_networks(&self) -> Vec<Network> {
        Network::ALL
            .into_iter()
            .filter(|n| self.networks.is_empty() || self.networks.contains(n))
            .collect()
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: std::env::var("SCAN_DEBOUNCE_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl ScannerConfig {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
            enable_file_logging: std::env::var("LOG_FILE_ENABLED")
                .ok()
                .map(|v| v == "1")
                .unwrap_or(false),
            log_file_path: std::env::var("LOG_FILE_PATH").ok(),
        }
    }
}

/// 解析 "BTC,eth, monero" 形式的网络列表，忽略无法识别的项
fn parse_network_list(raw: &str) -> Vec<Network> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<Network>() {
            Ok(network) => Some(network),
            Err(e) => {
                tracing::warn!("忽略无法识别的网络配置项: {}", e);
                None
            }
        })
        .collect()
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            recognizer: RecognizerConfig::default(),
            scanner: ScannerConfig::default(),
            logging: LoggingConfig::default(),
        })
    }

    /// 从配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高）
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                // 文件中缺失的段落仍由环境变量默认值补齐
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        if self.recognizer.networks.contains(&Network::Unknown) {
            anyhow::bail!("SCAN_NETWORKS must not contain UNKNOWN");
        }

        if self.recognizer.max_input_len == 0 {
            anyhow::bail!("SCAN_MAX_INPUT_LEN must be greater than 0");
        }

        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        Ok(())
    }
}
