//! Backend 层：在 tokio 运行时上执行 Update 层返回的命令
//!
//! 主循环只负责绘制和按键；查询、删除、保存配置都在后台任务中运行，
//! 结果通过 channel 以 [`BackendMessage`] 的形式送回主循环。

use std::path::PathBuf;
use std::sync::Arc;

use cep_lookup_app::AppState;
use cep_lookup_app::config::AppConfig;
use cep_lookup_core::LookupRequest;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::message::{BackendMessage, Command};

/// 后台服务
pub struct Backend {
    state: Arc<AppState>,
    runtime: Handle,
    tx: UnboundedSender<BackendMessage>,
    config_path: PathBuf,
}

impl Backend {
    /// Returns the backend and the receiving end of its result channel.
    pub fn new(
        state: Arc<AppState>,
        runtime: Handle,
        config_path: PathBuf,
    ) -> (Self, UnboundedReceiver<BackendMessage>) {
        let (tx, rx) = unbounded_channel();
        let backend = Self {
            state,
            runtime,
            tx,
            config_path,
        };
        (backend, rx)
    }

    /// 执行命令（不阻塞主循环）
    pub fn execute(&self, command: Command) {
        match command {
            Command::Lookup(request) => self.spawn_lookup(request),
            Command::Delete { id } => self.spawn_delete(id),
            Command::SaveSettings(config) => self.spawn_save_settings(config),
        }
    }

    fn spawn_lookup(&self, request: LookupRequest) {
        let state = Arc::clone(&self.state);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = state
                .lookup_service
                .submit(&request)
                .await
                .map_err(|e| e.failure_kind());
            let records = state.address_list_service.records().await;
            send(&tx, BackendMessage::LookupFinished { outcome, records });
        });
    }

    fn spawn_delete(&self, id: String) {
        let state = Arc::clone(&self.state);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = state
                .address_list_service
                .remove(&id)
                .await
                .inspect_err(|e| log::error!("Failed to persist removal of {id}: {e}"))
                .map_err(|e| e.failure_kind());
            let records = state.address_list_service.records().await;
            send(&tx, BackendMessage::DeleteFinished { outcome, records });
        });
    }

    fn spawn_save_settings(&self, config: AppConfig) {
        let path = self.config_path.clone();
        let tx = self.tx.clone();
        self.runtime.spawn_blocking(move || {
            let ok = match config.save_to(&path) {
                Ok(()) => true,
                Err(e) => {
                    log::error!("Failed to save settings to {}: {e}", path.display());
                    false
                }
            };
            send(&tx, BackendMessage::SettingsSaved { ok });
        });
    }
}

fn send(tx: &UnboundedSender<BackendMessage>, msg: BackendMessage) {
    if tx.send(msg).is_err() {
        log::debug!("UI loop has exited, dropping backend result");
    }
}
