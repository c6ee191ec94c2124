//! 邮编查询服务

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;

use cep_lookup_provider::ProviderError;

use crate::error::{CoreError, CoreResult};
use crate::services::{AddressListService, ServiceContext};
use crate::types::{AddressRecord, LookupRequest, ValidationPolicy};
use crate::utils::validation::validate_postal_code;

/// Marks a lookup as in flight until dropped.
struct BusyGuard<'a> {
    in_flight: &'a AtomicUsize,
}

impl<'a> BusyGuard<'a> {
    fn enter(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self { in_flight }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// 邮编查询服务
///
/// Validates the input, calls the country's provider exactly once and
/// prepends the result to the address list. Nothing is retried.
pub struct LookupService {
    ctx: Arc<ServiceContext>,
    list: Arc<AddressListService>,
    policy: ValidationPolicy,
    in_flight: AtomicUsize,
}

impl LookupService {
    /// 创建查询服务实例
    #[must_use]
    pub fn new(
        ctx: Arc<ServiceContext>,
        list: Arc<AddressListService>,
        policy: ValidationPolicy,
    ) -> Self {
        Self {
            ctx,
            list,
            policy,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Whether a lookup is currently running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// 查询邮编并将结果加入列表
    ///
    /// # Errors
    /// - `InvalidPostalCode`: the input has the wrong shape; no request is sent
    /// - `AddressNotFound`: no address, or one missing a required field
    /// - `LookupFailed` / `ProviderNotFound`: the service could not answer
    /// - `StorageError`: the record was added but the list could not be saved
    pub async fn submit(&self, request: &LookupRequest) -> CoreResult<AddressRecord> {
        let postal_code = validate_postal_code(&request.postal_code, request.country, self.policy)
            .inspect_err(|e| log::warn!("Lookup rejected: {e}"))?;

        let _busy = BusyGuard::enter(&self.in_flight);

        let provider = self.ctx.get_provider(request.country).await?;
        log::info!(
            "Looking up {postal_code} ({}) via {}",
            request.country,
            provider.id()
        );

        let address = provider
            .lookup(&postal_code)
            .await
            .map_err(|e| Self::classify(&postal_code, e))?;

        let missing = address.missing_fields(provider.required_fields());
        if !missing.is_empty() {
            let keys: Vec<&str> = missing.iter().map(|f| f.key()).collect();
            log::warn!(
                "Lookup for {postal_code} returned an incomplete address (missing {})",
                keys.join(", ")
            );
            return Err(CoreError::AddressNotFound(postal_code));
        }

        self.list.add_from_address(address, Utc::now()).await
    }

    fn classify(postal_code: &str, err: ProviderError) -> CoreError {
        let core = match err {
            ProviderError::AddressNotFound { .. } => {
                CoreError::AddressNotFound(postal_code.to_string())
            }
            ProviderError::InvalidPostalCode { .. } => {
                CoreError::InvalidPostalCode(postal_code.to_string())
            }
            other => CoreError::LookupFailed(other.to_string()),
        };

        if core.is_expected() {
            log::warn!("Lookup for {postal_code} failed: {core}");
        } else {
            log::error!("Lookup for {postal_code} failed: {core}");
        }
        core
    }
}
