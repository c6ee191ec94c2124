//! 内存地址列表仓库

use async_trait::async_trait;
use cep_lookup_core::CoreResult;
use cep_lookup_core::traits::AddressRepository;
use cep_lookup_core::types::AddressRecord;
use tokio::sync::RwLock;

/// Keeps the snapshot for the lifetime of the process.
#[derive(Default)]
pub struct InMemoryAddressRepository {
    snapshot: RwLock<Option<Vec<AddressRecord>>>,
}

impl InMemoryAddressRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn load(&self) -> CoreResult<Option<Vec<AddressRecord>>> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save_all(&self, records: &[AddressRecord]) -> CoreResult<()> {
        *self.snapshot.write().await = Some(records.to_vec());
        Ok(())
    }
}
