//! 地址列表仓库
//!
//! 使用 JSON 文件存储地址列表
//! 实现 cep-lookup-core 的 AddressRepository trait

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cep_lookup_core::traits::AddressRepository;
use cep_lookup_core::types::AddressRecord;
use cep_lookup_core::{CoreError, CoreResult};
use tokio::fs;
use tokio::sync::Mutex;

/// 数据目录下的地址列表文件名
pub const ADDRESSES_FILE_NAME: &str = "addresses.json";

/// 基于 JSON 文件的地址列表仓库
///
/// The file holds a pretty-printed array of records, most recent first.
/// Saves go through a temporary file that is renamed over the previous snapshot.
pub struct JsonFileAddressRepository {
    file: PathBuf,
    /// 串行化写入
    write_lock: Mutex<()>,
}

impl JsonFileAddressRepository {
    /// `data_dir` is created on the first save.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_file(data_dir.as_ref().join(ADDRESSES_FILE_NAME))
    }

    /// Stores the list in `file` instead of `<data dir>/addresses.json`.
    pub fn with_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    /// 确保数据目录存在
    async fn ensure_parent_dir(&self) -> CoreResult<()> {
        if let Some(dir) = self.file.parent()
            && !dir.as_os_str().is_empty()
            && !fs::try_exists(dir).await.unwrap_or(false)
        {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(format!("{}: {e}", dir.display())))?;
        }
        Ok(())
    }
}

#[async_trait]
impl AddressRepository for JsonFileAddressRepository {
    async fn load(&self) -> CoreResult<Option<Vec<AddressRecord>>> {
        let content = match fs::read_to_string(&self.file).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No address list at {}", self.file.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "{}: {e}",
                    self.file.display()
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let records: Vec<AddressRecord> = serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(format!("{}: {e}", self.file.display())))?;

        log::debug!(
            "Loaded {} addresses from {}",
            records.len(),
            self.file.display()
        );
        Ok(Some(records))
    }

    async fn save_all(&self, records: &[AddressRecord]) -> CoreResult<()> {
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        let _guard = self.write_lock.lock().await;
        self.ensure_parent_dir().await?;

        let tmp = self.file.with_extension("json.tmp");
        fs::write(&tmp, content)
            .await
            .map_err(|e| CoreError::StorageError(format!("{}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.file)
            .await
            .map_err(|e| CoreError::StorageError(format!("{}: {e}", self.file.display())))?;

        log::debug!(
            "Saved {} addresses to {}",
            records.len(),
            self.file.display()
        );
        Ok(())
    }
}
