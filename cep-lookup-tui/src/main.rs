//! CEP Lookup 终端界面
//!
//! 启动顺序：读取配置 → 初始化日志 → 构建服务并加载地址列表 →
//! 进入终端主循环 → 恢复终端。

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;

use cep_lookup_app::AppStateBuilder;
use cep_lookup_app::config::{AppConfig, config_file_path};

use backend::Backend;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 读取配置（终端尚未接管，错误直接打印）
    let config = AppConfig::load()?;
    let _log_guard = init_logging(&config.log_file())?;
    tracing::info!(
        "Starting CEP Lookup ({:?} list, data in {})",
        config.storage_mode,
        config.data_dir().display()
    );

    // 2. 构建服务并加载地址列表
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let state = Arc::new(AppStateBuilder::from_config(&config).build()?);
    let loaded = runtime.block_on(state.run_startup());
    let records = runtime.block_on(state.address_list_service.records());

    let mut app = model::App::new(config, records);
    if let Err(e) = loaded {
        update::startup_failure(&mut app, e.failure_kind());
    }

    let (backend, results) = Backend::new(state, runtime.handle().clone(), config_file_path());

    // 3. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &backend, results);

    // 4. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("CEP Lookup exited");
    result
}
