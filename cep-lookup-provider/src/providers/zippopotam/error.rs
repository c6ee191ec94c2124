//! Zippopotam error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::ZippopotamProvider;

/// Zippopotam answers unknown ZIP codes with `404 {}`.
impl ProviderErrorMapper for ZippopotamProvider {
    fn provider_name(&self) -> &'static str {
        "zippopotam"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let postal_code = context.postal_code.unwrap_or_default();
        match raw.code.as_deref() {
            Some("404") => self.not_found(&postal_code, None),
            Some("400") => self.invalid_postal_code(&postal_code, Some(raw.message)),
            _ => self.unknown_error(raw),
        }
    }
}
