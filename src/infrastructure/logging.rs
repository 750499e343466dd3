//! 日志系统配置模块
//! 支持结构化日志、日志级别配置和日志轮转
//!
//! 控制台日志统一写 stderr，stdout 留给识别结果

use std::path::Path;

use tracing::Dispatch;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    EnvFilter, Registry,
};

use crate::config::LoggingConfig;

const LOG_FILE_NAME: &str = "walletscan.log";

/// 初始化日志系统（设置全局 subscriber）
///
/// 开启文件日志时返回 `WorkerGuard`，调用方需持有到进程退出，否则缓冲日志会丢失
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let (dispatch, guard) = build_dispatch(config)?;
    tracing::dispatcher::set_global_default(dispatch)?;
    Ok(guard)
}

/// 按配置组装 subscriber，不做全局注册
pub fn build_dispatch(
    config: &LoggingConfig,
) -> Result<(Dispatch, Option<WorkerGuard>), Box<dyn std::error::Error>> {
    let filter = build_filter(config);

    if config.format == "json" {
        build_json_dispatch(filter, config)
    } else {
        build_text_dispatch(filter, config)
    }
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

fn log_dir(config: &LoggingConfig) -> &Path {
    config
        .log_file_path
        .as_deref()
        .map(Path::new)
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("./logs"))
}

/// JSON格式日志（结构化日志）
fn build_json_dispatch(
    filter: EnvFilter,
    config: &LoggingConfig,
) -> Result<(Dispatch, Option<WorkerGuard>), Box<dyn std::error::Error>> {
    if config.enable_file_logging {
        // 文件日志 + 控制台日志
        let dir = log_dir(config);
        std::fs::create_dir_all(dir)?;

        let (file_writer, guard) = non_blocking(rolling::daily(dir, LOG_FILE_NAME));
        let file_layer = fmt::layer()
            .json()
            .with_writer(file_writer)
            .with_timer(ChronoUtc::rfc_3339());
        let console_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_timer(ChronoUtc::rfc_3339());

        let subscriber = Registry::default()
            .with(filter)
            .with(file_layer)
            .with(console_layer);
        return Ok((Dispatch::new(subscriber), Some(guard)));
    }

    // 仅控制台日志
    let subscriber = Registry::default().with(filter).with(
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_timer(ChronoUtc::rfc_3339()),
    );
    Ok((Dispatch::new(subscriber), None))
}

/// 文本格式日志
fn build_text_dispatch(
    filter: EnvFilter,
    config: &LoggingConfig,
) -> Result<(Dispatch, Option<WorkerGuard>), Box<dyn std::error::Error>> {
    if config.enable_file_logging {
        // 文件日志 + 控制台日志
        let dir = log_dir(config);
        std::fs::create_dir_all(dir)?;

        let (file_writer, guard) = non_blocking(rolling::daily(dir, LOG_FILE_NAME));
        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false);
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(true);

        let subscriber = Registry::default()
            .with(filter)
            .with(file_layer)
            .with(console_layer);
        return Ok((Dispatch::new(subscriber), Some(guard)));
    }

    // 仅控制台日志
    let subscriber = Registry::default().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(true),
    );
    Ok((Dispatch::new(subscriber), None))
}

/// 回退初始化：仅控制台、默认级别，失败时退到 `tracing_subscriber::fmt`
pub fn init_default_logging() {
    let mut config = LoggingConfig::default();
    config.enable_file_logging = false;
    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .try_init();
    }
}
