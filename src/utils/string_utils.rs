//! 字符串工具模块
//! 提供字符串处理相关的工具函数

/// 截断字符串到指定长度（按字符）
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// 检查字符串是否为空或只包含空白字符
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// 日志用地址脱敏：保留首尾各 6 个字符
pub fn mask_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 16 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
        // 多字节字符不能被截断在中间
        assert_eq!(truncate("地址地址地址地址", 5), "地址...");
    }

    #[test]
    fn test_mask_address() {
        assert_eq!(
            mask_address("1BoatSLRHtKNngkdXEeobR76b53LETtpyT"),
            "1BoatS...ETtpyT"
        );
        assert_eq!(mask_address("tiny"), "tiny");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }
}
