//! CEP Lookup Core Library
//!
//! Provides the business logic of the postal-code lookup workflow:
//! - Address list (`AddressListService`): an ordered, most-recent-first list
//!   of looked-up addresses with write-through persistence
//! - Lookup (`LookupService`): validation, a single provider call and
//!   classification of the outcome
//!
//! Storage and provider lookup are abstracted through traits so the frontend
//! decides where addresses live and which services answer a country.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, FailureKind};
pub use services::{AddressListService, LookupService, ServiceContext};
pub use traits::{AddressRepository, InMemoryProviderRegistry, ProviderRegistry};
pub use types::{AddressBook, AddressRecord, ListMode, LookupRequest, ValidationPolicy};
