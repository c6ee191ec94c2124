//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("cep-lookup/", env!("CARGO_PKG_VERSION"));

/// 创建带超时配置的 HTTP Client
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Failed to build configured HTTP client, using defaults: {e}");
            Client::new()
        })
}

// ============ 邮编处理 ============

/// 只保留 ASCII 数字: "01001-000" -> "01001000"
pub fn digits_only(postal_code: &str) -> String {
    postal_code.chars().filter(char::is_ascii_digit).collect()
}

/// 去掉末尾的 `/`，方便拼接路径
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_hyphen_and_spaces() {
        assert_eq!(digits_only(" 01001-000 "), "01001000");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn base_url_without_trailing_slash() {
        assert_eq!(normalize_base_url("http://localhost:8080/ws/"), "http://localhost:8080/ws");
        assert_eq!(normalize_base_url("https://viacep.com.br/ws"), "https://viacep.com.br/ws");
    }
}
