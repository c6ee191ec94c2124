//! Address provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "viacep")]
mod viacep;
#[cfg(feature = "zippopotam")]
mod zippopotam;

#[cfg(feature = "viacep")]
pub use viacep::ViaCepProvider;
#[cfg(feature = "zippopotam")]
pub use zippopotam::ZippopotamProvider;
