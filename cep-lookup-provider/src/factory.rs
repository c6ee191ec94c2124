//! Provider factory functions and metadata.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::traits::AddressProvider;
use crate::types::{Country, ProviderMetadata};

#[cfg(feature = "viacep")]
use crate::providers::ViaCepProvider;
#[cfg(feature = "zippopotam")]
use crate::providers::ZippopotamProvider;

/// Creates the [`AddressProvider`] serving `country`.
///
/// The returned provider is wrapped in `Arc<dyn AddressProvider>` for easy sharing
/// across async tasks.
///
/// # Errors
/// [`ProviderError::UnsupportedCountry`] when the matching provider feature is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use cep_lookup_provider::{create_provider, Country};
///
/// let provider = create_provider(Country::Br).unwrap();
/// assert_eq!(provider.id(), "viacep");
/// ```
pub fn create_provider(country: Country) -> Result<Arc<dyn AddressProvider>> {
    match country {
        #[cfg(feature = "viacep")]
        Country::Br => Ok(Arc::new(ViaCepProvider::new())),
        #[cfg(feature = "zippopotam")]
        Country::Us => Ok(Arc::new(ZippopotamProvider::new())),
        #[allow(unreachable_patterns)]
        other => Err(ProviderError::UnsupportedCountry {
            country: other.code().to_string(),
        }),
    }
}

/// Returns metadata for all providers enabled via feature flags.
pub fn get_all_provider_metadata() -> Vec<ProviderMetadata> {
    vec![
        #[cfg(feature = "viacep")]
        ViaCepProvider::metadata(),
        #[cfg(feature = "zippopotam")]
        ZippopotamProvider::metadata(),
    ]
}

#[cfg(all(test, feature = "all-providers"))]
mod tests {
    use super::*;

    #[test]
    fn each_country_has_a_provider() {
        for country in Country::all() {
            let provider = create_provider(*country);
            assert!(
                matches!(&provider, Ok(p) if p.country() == *country),
                "no provider for {country}"
            );
        }
    }

    #[test]
    fn metadata_lists_both_providers() {
        let ids: Vec<String> = get_all_provider_metadata()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["viacep".to_string(), "zippopotam".to_string()]);
    }
}
