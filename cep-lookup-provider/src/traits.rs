use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{AddressField, Country, ProviderAddress, ProviderMetadata};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（HTTP 状态码等）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            code: Some(status.to_string()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 查询的邮编（用于 `AddressNotFound` / `InvalidPostalCode`）
    pub postal_code: Option<String>,
}

impl ErrorContext {
    pub fn for_postal_code(postal_code: &str) -> Self {
        Self {
            postal_code: Some(postal_code.to_string()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：地址不存在
    fn not_found(&self, postal_code: &str, raw_message: Option<String>) -> ProviderError {
        ProviderError::AddressNotFound {
            provider: self.provider_name().to_string(),
            postal_code: postal_code.to_string(),
            raw_message,
        }
    }

    /// 快捷方法：邮编格式不被接受
    fn invalid_postal_code(&self, postal_code: &str, raw_message: Option<String>) -> ProviderError {
        ProviderError::InvalidPostalCode {
            provider: self.provider_name().to_string(),
            postal_code: postal_code.to_string(),
            raw_message,
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// 地址查询服务 Trait
///
/// One implementation per postal-code service. A call to [`lookup`](Self::lookup)
/// issues exactly one request; implementations never retry.
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Country this provider answers for.
    fn country(&self) -> Country;

    /// 获取 Provider 元数据（类型级别）
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// Fields that must be non-empty for a response to count as a match.
    ///
    /// A response missing any of them should be treated as "not found" by callers.
    fn required_fields(&self) -> &'static [AddressField];

    /// Looks up the address for `postal_code`.
    ///
    /// # Errors
    /// - [`ProviderError::AddressNotFound`] when the service reports no match
    /// - [`ProviderError::InvalidPostalCode`] when the code cannot be sent or is rejected
    /// - transport and parse variants otherwise
    async fn lookup(&self, postal_code: &str) -> Result<ProviderAddress>;
}
