//! Platform-agnostic application bootstrap for CEP Lookup.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter injection),
//! the storage adapters and `AppConfig` loading.

pub mod adapters;
pub mod config;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cep_lookup_core::error::{CoreError, CoreResult};
use cep_lookup_core::services::{AddressListService, LookupService, ServiceContext};
use cep_lookup_core::traits::{AddressRepository, InMemoryProviderRegistry, ProviderRegistry};
use cep_lookup_core::types::{Country, ListMode, ValidationPolicy};
use cep_lookup_provider::{AddressProvider, create_provider};

use crate::adapters::{InMemoryAddressRepository, JsonFileAddressRepository};
use crate::config::AppConfig;

/// Platform-agnostic application state.
///
/// Holds all services and the `ServiceContext`. Every frontend constructs this
/// once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds the storage adapter and provider registry)
    pub ctx: Arc<ServiceContext>,
    /// Address list service
    pub address_list_service: Arc<AddressListService>,
    /// Lookup service
    pub lookup_service: Arc<LookupService>,
    /// Whether the address list has been loaded
    pub startup_completed: AtomicBool,
}

impl AppState {
    /// Run the startup sequence: load the address list.
    ///
    /// Returns the number of records loaded. A failed load leaves the list empty
    /// and still marks startup as completed.
    pub async fn run_startup(&self) -> CoreResult<usize> {
        let result = self.address_list_service.load().await;
        match &result {
            Ok(count) => log::info!("Startup complete: {count} addresses"),
            Err(e) => log::error!("Failed to load address list: {e}"),
        }
        self.startup_completed.store(true, Ordering::SeqCst);
        result
    }
}

/// Registry with the built-in provider of every supported country.
///
/// Countries whose provider cannot be created are skipped with a warning.
pub fn default_provider_registry() -> InMemoryProviderRegistry {
    let providers: Vec<Arc<dyn AddressProvider>> = Country::all()
        .iter()
        .filter_map(|country| {
            create_provider(*country)
                .inspect_err(|e| log::warn!("No provider for {country}: {e}"))
                .ok()
        })
        .collect();
    InMemoryProviderRegistry::with_providers(providers)
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `address_repository`: where the address list is stored
///
/// # Optional
/// - `provider_registry`: defaults to [`default_provider_registry`]
/// - `list_mode`: defaults to `ListMode::Persisted`
/// - `validation_policy`: defaults to `ValidationPolicy::Brazilian`
pub struct AppStateBuilder {
    address_repository: Option<Arc<dyn AddressRepository>>,
    provider_registry: Option<Arc<dyn ProviderRegistry>>,
    list_mode: ListMode,
    validation_policy: ValidationPolicy,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            address_repository: None,
            provider_registry: None,
            list_mode: ListMode::default(),
            validation_policy: ValidationPolicy::default(),
        }
    }

    /// Builder preset from the loaded configuration.
    ///
    /// Persisted mode stores `addresses.json` in the configured data directory;
    /// sample mode gets an in-memory repository.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let repository: Arc<dyn AddressRepository> = match config.storage_mode {
            ListMode::Persisted => Arc::new(JsonFileAddressRepository::new(config.data_dir())),
            ListMode::Sample => Arc::new(InMemoryAddressRepository::new()),
        };
        Self::new()
            .address_repository(repository)
            .list_mode(config.storage_mode)
            .validation_policy(config.validation_policy)
    }

    #[must_use]
    pub fn address_repository(mut self, repo: Arc<dyn AddressRepository>) -> Self {
        self.address_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn provider_registry(mut self, registry: Arc<dyn ProviderRegistry>) -> Self {
        self.provider_registry = Some(registry);
        self
    }

    #[must_use]
    pub fn list_mode(mut self, mode: ListMode) -> Self {
        self.list_mode = mode;
        self
    }

    #[must_use]
    pub fn validation_policy(mut self, policy: ValidationPolicy) -> Self {
        self.validation_policy = policy;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let address_repository = self.address_repository.ok_or_else(|| {
            CoreError::ValidationError("address_repository is required".to_string())
        })?;
        let provider_registry = self
            .provider_registry
            .unwrap_or_else(|| Arc::new(default_provider_registry()));

        let ctx = Arc::new(ServiceContext::new(address_repository, provider_registry));

        let address_list_service = Arc::new(AddressListService::new(
            Arc::clone(&ctx),
            self.list_mode,
        ));
        let lookup_service = Arc::new(LookupService::new(
            Arc::clone(&ctx),
            Arc::clone(&address_list_service),
            self.validation_policy,
        ));

        Ok(AppState {
            ctx,
            address_list_service,
            lookup_service,
            startup_completed: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
