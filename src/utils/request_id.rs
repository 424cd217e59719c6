//! 请求标识与日志脱敏工具

use uuid::Uuid;

/// 生成短请求 ID，用于串联同一次生成的日志
pub fn generate_request_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// API 密钥脱敏
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
