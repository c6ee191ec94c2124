//! 地址列表服务

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use cep_lookup_provider::ProviderAddress;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{AddressBook, AddressRecord, ListMode};

/// 地址列表服务
///
/// Sole owner of the [`AddressBook`]. In [`ListMode::Persisted`] every change
/// writes the whole list back to the repository; a failed write is returned
/// but the in-memory change stays.
pub struct AddressListService {
    ctx: Arc<ServiceContext>,
    mode: ListMode,
    book: RwLock<AddressBook>,
}

impl AddressListService {
    /// 创建地址列表服务实例（列表为空，需调用 `load`）
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, mode: ListMode) -> Self {
        Self {
            ctx,
            mode,
            book: RwLock::new(AddressBook::new()),
        }
    }

    /// 启动时加载列表，返回记录数
    ///
    /// A snapshot that cannot be read leaves the list empty and the error is returned.
    pub async fn load(&self) -> CoreResult<usize> {
        let book = match self.mode {
            ListMode::Sample => AddressBook::sample(Utc::now()),
            ListMode::Persisted => match self.ctx.address_repository.load().await {
                Ok(Some(records)) => AddressBook::from_records(records),
                Ok(None) => AddressBook::new(),
                Err(e) => {
                    log::warn!("Failed to load address list, starting empty: {e}");
                    *self.book.write().await = AddressBook::new();
                    return Err(e);
                }
            },
        };

        let count = book.len();
        *self.book.write().await = book;
        log::info!("Address list loaded ({:?}): {count} records", self.mode);
        Ok(count)
    }

    /// 在列表头部插入记录，返回实际存储的记录
    ///
    /// An id already in the list is replaced by a fresh one.
    pub async fn add(&self, mut record: AddressRecord) -> CoreResult<AddressRecord> {
        let mut book = self.book.write().await;
        record.id = book.prepend(record.clone());
        self.persist(&book).await?;
        Ok(record)
    }

    /// 由查询结果创建新记录（生成唯一 ID）并插入列表头部
    pub async fn add_from_address(
        &self,
        address: ProviderAddress,
        consulted_at: DateTime<Utc>,
    ) -> CoreResult<AddressRecord> {
        let mut book = self.book.write().await;
        let record = AddressRecord::from_provider(book.fresh_id(), address, consulted_at);
        book.prepend(record.clone());
        log::info!("Added address {} ({})", record.id, record.postal_code);
        self.persist(&book).await?;
        Ok(record)
    }

    /// 删除记录
    ///
    /// Returns `false` (and writes nothing) when no record has `id`.
    pub async fn remove(&self, id: &str) -> CoreResult<bool> {
        let mut book = self.book.write().await;
        if book.remove_by_id(id).is_none() {
            log::debug!("Remove ignored, unknown address id {id}");
            return Ok(false);
        }
        log::info!("Removed address {id}");
        self.persist(&book).await?;
        Ok(true)
    }

    /// 当前列表快照（最新在前）
    pub async fn records(&self) -> Vec<AddressRecord> {
        self.book.read().await.records().to_vec()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.book.read().await.contains_id(id)
    }

    pub async fn len(&self) -> usize {
        self.book.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.book.read().await.is_empty()
    }

    async fn persist(&self, book: &AddressBook) -> CoreResult<()> {
        if !self.mode.is_persisted() {
            return Ok(());
        }
        self.ctx
            .address_repository
            .save_all(book.records())
            .await
            .inspect_err(|e| log::error!("Failed to save address list: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{create_test_context, make_record};

    fn ids(records: &[AddressRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[tokio::test]
    async fn persisted_load_replaces_list() {
        let (ctx, repo, _provider) = create_test_context();
        repo.set_snapshot(Some(vec![make_record("a"), make_record("b")]))
            .await;
        let svc = AddressListService::new(ctx, ListMode::Persisted);

        let count = svc.load().await;
        assert!(matches!(count, Ok(2)));
        assert_eq!(ids(&svc.records().await), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn persisted_load_without_snapshot_is_empty() {
        let (ctx, _repo, _provider) = create_test_context();
        let svc = AddressListService::new(ctx, ListMode::Persisted);

        assert!(matches!(svc.load().await, Ok(0)));
        assert!(svc.is_empty().await);
    }

    #[tokio::test]
    async fn corrupt_snapshot_starts_empty() {
        let (ctx, repo, _provider) = create_test_context();
        repo.set_load_error(Some("expected value at line 1".into()))
            .await;
        let svc = AddressListService::new(ctx, ListMode::Persisted);

        let result = svc.load().await;
        assert!(matches!(result, Err(CoreError::SerializationError(_))));
        assert!(svc.is_empty().await);
    }

    #[tokio::test]
    async fn sample_mode_seeds_without_reading_storage() {
        let (ctx, repo, _provider) = create_test_context();
        repo.set_load_error(Some("must not be read".into())).await;
        let svc = AddressListService::new(ctx, ListMode::Sample);

        assert!(matches!(svc.load().await, Ok(4)));
        assert_eq!(svc.records().await[0].street, "Praça da Sé");
        assert_eq!(repo.load_count(), 0);
    }

    #[tokio::test]
    async fn add_prepends_and_writes_whole_list() {
        let (ctx, repo, _provider) = create_test_context();
        let svc = AddressListService::new(ctx, ListMode::Persisted);

        assert!(svc.add(make_record("a")).await.is_ok());
        assert!(svc.add(make_record("b")).await.is_ok());

        assert_eq!(ids(&svc.records().await), vec!["b", "a"]);
        assert_eq!(repo.save_count(), 2);
        let stored = repo.snapshot().await.unwrap_or_default();
        assert_eq!(ids(&stored), vec!["b", "a"]);
    }

    #[tokio::test]
    async fn add_with_taken_id_gets_fresh_one() {
        let (ctx, _repo, _provider) = create_test_context();
        let svc = AddressListService::new(ctx, ListMode::Persisted);

        assert!(svc.add(make_record("a")).await.is_ok());
        let second = svc.add(make_record("a")).await;

        assert!(matches!(second, Ok(ref r) if r.id != "a"));
        assert_eq!(svc.len().await, 2);
    }

    #[tokio::test]
    async fn remove_known_id() {
        let (ctx, repo, _provider) = create_test_context();
        repo.set_snapshot(Some(vec![
            make_record("a"),
            make_record("b"),
            make_record("c"),
        ]))
        .await;
        let svc = AddressListService::new(ctx, ListMode::Persisted);
        assert!(svc.load().await.is_ok());

        assert!(matches!(svc.remove("b").await, Ok(true)));
        assert_eq!(ids(&svc.records().await), vec!["a", "c"]);
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn remove_unknown_id_does_not_write() {
        let (ctx, repo, _provider) = create_test_context();
        let svc = AddressListService::new(ctx, ListMode::Persisted);
        assert!(svc.add(make_record("a")).await.is_ok());

        assert!(matches!(svc.remove("zzz").await, Ok(false)));
        assert_eq!(svc.len().await, 1);
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn failed_write_keeps_memory_change() {
        let (ctx, repo, _provider) = create_test_context();
        repo.set_save_error(Some("read-only file system".into()))
            .await;
        let svc = AddressListService::new(ctx, ListMode::Persisted);

        let result = svc.add(make_record("a")).await;
        assert!(matches!(result, Err(CoreError::StorageError(_))));
        assert!(svc.contains("a").await);
    }

    #[tokio::test]
    async fn sample_mode_never_writes() {
        let (ctx, repo, _provider) = create_test_context();
        let svc = AddressListService::new(ctx, ListMode::Sample);
        assert!(svc.load().await.is_ok());

        let first = svc.records().await[0].id.clone();
        assert!(svc.add(make_record("a")).await.is_ok());
        assert!(matches!(svc.remove(&first).await, Ok(true)));

        assert_eq!(svc.len().await, 4);
        assert_eq!(repo.save_count(), 0);
    }
}
