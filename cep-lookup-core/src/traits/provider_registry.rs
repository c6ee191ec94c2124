//! Provider registry abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use cep_lookup_provider::{AddressProvider, Country};

/// Provider Registry Trait
///
/// Manages all registered Provider instances, indexed by the country they answer for.
/// Provides a default memory implementation of `InMemoryProviderRegistry`.
#[async_trait]
pub trait ProviderRegistry: Send + Sync {
    /// Register a Provider instance under `provider.country()`
    ///
    /// A provider already registered for that country is replaced.
    async fn register(&self, provider: Arc<dyn AddressProvider>);

    /// Log out Provider
    async fn unregister(&self, country: Country);

    /// Get Provider instance
    async fn get(&self, country: Country) -> Option<Arc<dyn AddressProvider>>;

    /// List all countries with a registered provider
    async fn list_countries(&self) -> Vec<Country>;
}

/// In-memory Provider registry
///
/// Default implementation, available on all platforms.
#[derive(Clone)]
pub struct InMemoryProviderRegistry {
    providers: Arc<RwLock<HashMap<Country, Arc<dyn AddressProvider>>>>,
}

impl InMemoryProviderRegistry {
    /// Create a new memory registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a registry pre-filled with `providers` (later entries win per country)
    #[must_use]
    pub fn with_providers(providers: impl IntoIterator<Item = Arc<dyn AddressProvider>>) -> Self {
        let map = providers
            .into_iter()
            .map(|p| (p.country(), p))
            .collect::<HashMap<_, _>>();
        Self {
            providers: Arc::new(RwLock::new(map)),
        }
    }
}

impl Default for InMemoryProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderRegistry for InMemoryProviderRegistry {
    async fn register(&self, provider: Arc<dyn AddressProvider>) {
        let country = provider.country();
        log::debug!("Registering provider {} for {country}", provider.id());
        self.providers.write().await.insert(country, provider);
    }

    async fn unregister(&self, country: Country) {
        self.providers.write().await.remove(&country);
    }

    async fn get(&self, country: Country) -> Option<Arc<dyn AddressProvider>> {
        self.providers.read().await.get(&country).cloned()
    }

    async fn list_countries(&self) -> Vec<Country> {
        let mut countries: Vec<Country> = self.providers.read().await.keys().copied().collect();
        countries.sort_by_key(|c| Country::all().iter().position(|x| x == c));
        countries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockAddressProvider;

    #[tokio::test]
    async fn register_get_unregister() {
        let registry = InMemoryProviderRegistry::new();
        registry
            .register(Arc::new(MockAddressProvider::new(Country::Us)))
            .await;
        registry
            .register(Arc::new(MockAddressProvider::new(Country::Br)))
            .await;

        assert_eq!(registry.list_countries().await, vec![Country::Br, Country::Us]);
        assert!(registry.get(Country::Br).await.is_some());

        registry.unregister(Country::Br).await;
        assert!(registry.get(Country::Br).await.is_none());
        assert_eq!(registry.list_countries().await, vec![Country::Us]);
    }

    #[tokio::test]
    async fn prefilled_registry() {
        let provider: Arc<dyn AddressProvider> = Arc::new(MockAddressProvider::new(Country::Br));
        let registry = InMemoryProviderRegistry::with_providers([provider]);
        assert_eq!(registry.list_countries().await, vec![Country::Br]);
    }
}
