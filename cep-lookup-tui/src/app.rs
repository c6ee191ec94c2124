//! 主循环

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    mut results: UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI（相对时间列随每一帧刷新）
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 收取后台任务结果
        while let Ok(result) = results.try_recv() {
            dispatch(app, backend, AppMessage::Backend(result));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch(app, backend, msg);
        }
    }

    Ok(())
}

/// 更新状态，并把产生的命令交给后台执行
fn dispatch(app: &mut App, backend: &Backend, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        log::debug!("Dispatching {command:?}");
        backend.execute(command);
    }
}
