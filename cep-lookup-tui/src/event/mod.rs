//! Event 层：把终端事件翻译成消息
//!
//! 弹窗打开时只处理弹窗按键；否则先匹配全局快捷键，
//! 再按焦点面板（表单 / 表格）分发。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
