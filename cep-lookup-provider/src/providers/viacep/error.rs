//! ViaCEP error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::ViaCepProvider;

/// ViaCEP status mapping
/// Reference: <https://viacep.com.br/>
///
/// - 400: malformed CEP (not 8 digits)
/// - 200 with `{"erro": true}`: well-formed CEP with no address (handled in `http.rs`)
impl ProviderErrorMapper for ViaCepProvider {
    fn provider_name(&self) -> &'static str {
        "viacep"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let postal_code = context.postal_code.unwrap_or_default();
        match raw.code.as_deref() {
            Some("400") => self.invalid_postal_code(&postal_code, Some(raw.message)),
            Some("404") => self.not_found(&postal_code, Some(raw.message)),
            _ => self.unknown_error(raw),
        }
    }
}
