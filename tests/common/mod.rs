//! 测试辅助模块
//! 提供各网络的合法地址测试向量

#![allow(dead_code)]

use walletscan::domain::Network;

/// 每个网络至少一个合法主网地址
pub const VALID_ADDRESSES: &[(Network, &str)] = &[
    (Network::Btc, "1BoatSLRHtKNngkdXEeobR76b53LETtpyT"),
    (Network::Btc, "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq"),
    (Network::Eth, "0x32Be343B94f860124dC4fEe278FDCBD38C102D88"),
    (Network::Ltc, "LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9"),
    (Network::Ltc, "ltc1qqypqxpq9qcrsszg2pvxq6rs0zqg3yyc5dyg36p"),
    (Network::Trx, "TYASr5UV6HEcXatwdFQfmLVUqQQQMUxHLS"),
    (Network::Doge, "DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L"),
    (Network::Dash, "XpESxaUmonkq8RaLLp46Brx2K39ggQe226"),
    (Network::Xrp, "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"),
    (Network::Zec, "t1Hxw6JqWMnhDK5jRCieg5bFHM2qt7UtQvu"),
    (
        Network::Zec,
        "zs1qyrqkyq4rg0jg2fwxvur6sj8f3g4vkmqv44x7are06pc3rvjj7w2rf4tkz6m407ye88dxefuw57",
    ),
    (
        Network::Xmr,
        "41jnhtmvtaY9jiE5q6R6r8K97TmXRkh16UYWhTDm6HA4dwuw8v6RXkg4N46GHm5d3aDmTKwz6RDCYPArZdgRkoMWNH9SzFT",
    ),
];

/// legacy P2SH，BTC 与 LTC 的校验器都接受
pub const SHARED_P2SH: &str = "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy";

/// 格式像 TRON 但 checksum 错误
pub const BAD_CHECKSUM_TRON: &str = "TPL66VK2gCchGhsEjVzj6LgKnFxBRoZRaf";
