//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// How a failure should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    /// The input did not have the shape of a postal code.
    Validation,
    /// The service has no (complete) address for the code.
    NotFound,
    /// The service could not be reached or answered unexpectedly.
    Transport,
    /// The address list could not be read or written.
    Storage,
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Postal code rejected before any lookup
    #[error("Invalid postal code: {0}")]
    InvalidPostalCode(String),

    /// No address (or an incomplete one) for the postal code
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Lookup failed for a reason other than "not found"
    #[error("Lookup failed: {0}")]
    LookupFailed(String),

    /// No provider registered for the country
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error (configuration, builder input)
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, unknown postal code, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidPostalCode(_)
            | Self::AddressNotFound(_)
            | Self::ProviderNotFound(_)
            | Self::ValidationError(_) => true,
            _ => false,
        }
    }

    /// Classifies the error for presentation.
    #[must_use]
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::InvalidPostalCode(_) | Self::ValidationError(_) => FailureKind::Validation,
            Self::AddressNotFound(_) => FailureKind::NotFound,
            Self::LookupFailed(_) | Self::ProviderNotFound(_) => FailureKind::Transport,
            Self::StorageError(_) | Self::SerializationError(_) => FailureKind::Storage,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
