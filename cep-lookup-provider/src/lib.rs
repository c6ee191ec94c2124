//! # cep-lookup-provider
//!
//! A small address-lookup abstraction over public postal-code APIs.
//!
//! ## Supported Providers
//!
//! | Provider | Country | Feature Flag | Endpoint |
//! |----------|---------|-------------|----------|
//! | [ViaCEP](https://viacep.com.br/) | `br` | `viacep` | `GET /ws/{cep}/json/` |
//! | [Zippopotam](https://zippopotam.us/) | `us` | `zippopotam` | `GET /us/{zip}` |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)*: Enable all providers listed above.
//! - **`viacep`**: Enable only the ViaCEP provider.
//! - **`zippopotam`**: Enable only the Zippopotam provider.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cep_lookup_provider::{create_provider, AddressProvider, Country};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(Country::Br)?;
//!
//!     let address = provider.lookup("01001-000").await?;
//!     println!("{} - {}, {}/{}", address.street, address.neighborhood, address.locality, address.region);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::AddressNotFound`]: the service has no address for the code
//! - [`ProviderError::InvalidPostalCode`]: the service rejected the code's format
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: transport failure
//!
//! Requests are never retried: every call to [`AddressProvider::lookup`] issues
//! exactly one HTTP request.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_provider, get_all_provider_metadata};

// Re-export core trait only (internal traits are not exported)
pub use traits::AddressProvider;

// Re-export types
pub use types::{AddressField, Country, ProviderAddress, ProviderMetadata};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "viacep")]
pub use providers::ViaCepProvider;

#[cfg(feature = "zippopotam")]
pub use providers::ZippopotamProvider;
