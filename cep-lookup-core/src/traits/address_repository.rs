//! Address list persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::AddressRecord;

/// Address List Warehouse Trait
///
/// The list is stored as one snapshot that every save replaces.
///
/// Platform implementation:
/// - `JsonFileAddressRepository`: `addresses.json` in the data directory
/// - `InMemoryAddressRepository`: process-local, for tests and sample runs
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Read the stored snapshot, most recent first
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    /// `CoreError::SerializationError` when the snapshot cannot be decoded.
    async fn load(&self) -> CoreResult<Option<Vec<AddressRecord>>>;

    /// Replace the stored snapshot
    ///
    /// # Arguments
    /// * `records` - the whole list, most recent first
    async fn save_all(&self, records: &[AddressRecord]) -> CoreResult<()>;
}
