//! Util 层：终端初始化 / 恢复与日志初始化
//!
//! 终端在 raw mode + 备用屏幕中运行，因此日志写入文件而不是 stderr。
//! 无论主循环是否出错，都必须先调用 [`restore_terminal`] 再返回。

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
