use serde::{Deserialize, Serialize};

/// Unified error type for all address provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Transport Errors
///
/// The following variants mean the lookup never produced an answer:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`ServiceUnavailable`](Self::ServiceUnavailable): HTTP 5xx from the service
///
/// None of them are retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The service answered but has no address for this postal code.
    AddressNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Postal code that was looked up.
        postal_code: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The service (or the provider itself) rejected the postal code's format.
    InvalidPostalCode {
        /// Provider that produced the error.
        provider: String,
        /// Offending postal code.
        postal_code: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// No provider is compiled in for the requested country.
    UnsupportedCountry {
        /// Country code that was requested.
        country: String,
    },

    /// The service returned a 5xx status.
    ServiceUnavailable {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for statuses not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code (usually the HTTP status), if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::AddressNotFound { .. }
                | Self::InvalidPostalCode { .. }
                | Self::UnsupportedCountry { .. }
        )
    }

    /// Whether the request failed before the service could answer.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::ServiceUnavailable { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::AddressNotFound {
                provider,
                postal_code,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] No address for '{postal_code}': {msg}")
                } else {
                    write!(f, "[{provider}] No address for '{postal_code}'")
                }
            }
            Self::InvalidPostalCode {
                provider,
                postal_code,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid postal code '{postal_code}': {msg}")
                } else {
                    write!(f, "[{provider}] Invalid postal code '{postal_code}'")
                }
            }
            Self::UnsupportedCountry { country } => {
                write!(f, "No address provider available for country '{country}'")
            }
            Self::ServiceUnavailable { provider, status } => {
                write!(f, "[{provider}] Service unavailable (HTTP {status})")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{provider}] Error {code}: {raw_message}")
                } else {
                    write!(f, "[{provider}] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience alias for `std::result::Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
