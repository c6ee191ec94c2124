//! Message 层
//!
//! 键盘事件被翻译成 [`AppMessage`]；后台任务完成后以
//! [`BackendMessage`] 的形式回到主循环。Update 层消费消息后可能
//! 返回一个 [`Command`]，交给 Backend 执行。

mod app;
mod backend;
mod command;
mod form;
mod modal;
mod table;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use command::Command;
pub use form::FormMessage;
pub use modal::ModalMessage;
pub use table::TableMessage;
