//! 扫码 → 识别 → 入库 全流程测试

mod common;

use std::{
    io::Write,
    time::{Duration, Instant},
};

use common::VALID_ADDRESSES;
use tempfile::NamedTempFile;
use walletscan::{
    config::Config,
    domain::WalletBook,
    service::{AddressRecognizer, IgnoreReason, ScanDecision, ScanSession},
    Network,
};

#[test]
fn test_scan_flow_populates_book() {
    let mut session = ScanSession::new(AddressRecognizer::default(), Duration::from_secs(3));
    let mut book = WalletBook::new();
    let t0 = Instant::now();

    for (i, (_, address)) in VALID_ADDRESSES.iter().enumerate() {
        let now = t0 + Duration::from_millis(i as u64);
        let ScanDecision::Accepted(c) = session.accept(address, now) else {
            panic!("scan of {} should be accepted", address);
        };
        assert!(!session.record(&mut book, c).unwrap());
    }
    assert_eq!(book.len(), VALID_ADDRESSES.len());

    // 同一地址稍后再扫：窗口外被接受，但钱包簿报告已存在
    let later = t0 + Duration::from_secs(10);
    let ScanDecision::Accepted(c) = session.accept(VALID_ADDRESSES[0].1, later) else {
        panic!("scan outside the window should be accepted");
    };
    assert!(session.record(&mut book, c).unwrap());
    assert_eq!(book.len(), VALID_ADDRESSES.len());

    assert_eq!(
        session.accept(VALID_ADDRESSES[0].1, later + Duration::from_millis(10)),
        ScanDecision::Ignored(IgnoreReason::Duplicate)
    );
}

#[test]
fn test_unknown_never_persisted() {
    let mut session = ScanSession::new(AddressRecognizer::default(), Duration::from_secs(3));
    let mut book = WalletBook::new();

    let ScanDecision::Accepted(c) = session.accept("garbage-not-an-address", Instant::now())
    else {
        panic!("non-empty scan should be accepted");
    };
    assert_eq!(c.network, Network::Unknown);
    assert!(session.record(&mut book, c.clone()).is_err());
    assert!(book.toggle_favorite(&c).is_err());
    assert!(book.is_empty());
}

#[test]
fn test_book_snapshot_persists_to_disk() {
    let recognizer = AddressRecognizer::default();
    let mut book = WalletBook::new();
    for (_, address) in VALID_ADDRESSES.iter().take(3) {
        book.add(recognizer.classify(address)).unwrap();
    }
    let favorite = recognizer.classify(VALID_ADDRESSES[1].1);
    book.toggle_favorite(&favorite).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(book.to_json().unwrap().as_bytes()).unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    let restored = WalletBook::from_json(&content).unwrap();
    assert_eq!(restored, book);
    assert!(restored.is_favorite(VALID_ADDRESSES[1].1));
}

#[test]
fn test_config_file_drives_recognizer() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[recognizer]
mode = "strict"
networks = ["XMR", "ETH"]

[scanner]
debounce_ms = 500
"#
    )
    .unwrap();

    let config = Config::from_env_and_file(Some(file.path())).unwrap();
    assert_eq!(config.scanner.debounce_window(), Duration::from_millis(500));

    let recognizer = AddressRecognizer::new(config.recognizer);
    let networks: Vec<Network> = recognizer.entries().iter().map(|e| e.network).collect();
    assert_eq!(networks, vec![Network::Eth, Network::Xmr]);
    assert!(recognizer
        .classify("1BoatSLRHtKNngkdXEeobR76b53LETtpyT")
        .is_unknown());
}
