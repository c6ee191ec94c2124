//! Storage layer abstraction trait definition

mod address_repository;
mod provider_registry;

pub use address_repository::AddressRepository;
pub use provider_registry::{InMemoryProviderRegistry, ProviderRegistry};
