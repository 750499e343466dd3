//! walletscan 命令行入口
//!
//! 用法：`walletscan [--legacy] [--book] [INPUT ...]`
//! 无参数时逐行读取 stdin。每条结果输出一行 JSON 到 stdout，日志写 stderr。

use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use anyhow::{Context, Result};
use walletscan::{
    config::{Config, ValidationMode},
    domain::WalletBook,
    infrastructure::logging,
    service::{AddressRecognizer, ScanDecision, ScanSession},
};

#[derive(Debug, Default)]
struct CliArgs {
    legacy: bool,
    book: bool,
    inputs: Vec<String>,
}

fn parse_args() -> CliArgs {
    let mut cli = CliArgs::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--legacy" => cli.legacy = true,
            "--book" => cli.book = true,
            "--" => {
                cli.inputs.extend(args.by_ref());
                break;
            }
            _ => cli.inputs.push(arg),
        }
    }

    cli
}

fn main() -> Result<()> {
    // 1. 加载环境变量
    dotenvy::dotenv().ok();

    // 2. 加载配置（CONFIG_PATH 指向 TOML 文件时优先使用文件）
    let config_path = std::env::var("CONFIG_PATH").ok();
    let mut config = Config::from_env_and_file(config_path.as_deref())
        .context("failed to load configuration")?;

    let cli = parse_args();
    if cli.legacy {
        config.recognizer.mode = ValidationMode::Legacy;
    }
    config.validate().context("invalid configuration")?;

    // 3. 初始化日志（guard 需持有到退出），失败时退回控制台日志
    let _log_guard = match logging::init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialize configured logging: {}", e);
            logging::init_default_logging();
            None
        }
    };

    tracing::info!(
        mode = ?config.recognizer.mode,
        networks = ?config.recognizer.enabled_networks(),
        "walletscan started"
    );

    let recognizer = AddressRecognizer::new(config.recognizer.clone());
    let mut session = ScanSession::new(recognizer, config.scanner.debounce_window());
    let mut book = WalletBook::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut handle = |value: &str| -> Result<()> {
        match session.accept(value, Instant::now()) {
            ScanDecision::Accepted(classification) => {
                serde_json::to_writer(&mut out, &classification)?;
                writeln!(out)?;
                if cli.book && !classification.is_unknown() {
                    session.record(&mut book, classification)?;
                }
            }
            ScanDecision::Ignored(reason) => {
                tracing::debug!(?reason, "scan ignored");
            }
        }
        Ok(())
    };

    if cli.inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            handle(&line)?;
        }
    } else {
        for input in &cli.inputs {
            handle(input)?;
        }
    }

    if cli.book {
        writeln!(out, "{}", book.to_json()?)?;
    }

    Ok(())
}
