//! View 层：只读 Model，绘制一帧
//!
//! ```text
//! ┌ 标题栏 ────────────────────────────────┐
//! │ 查询表单（国家 / 邮编 / 查询按钮）     │
//! │ 地址表格                               │
//! └ 状态栏 ────────────────────────────────┘
//! ```
//!
//! 弹窗最后绘制，覆盖在最上层。

mod components;
mod layout;
pub mod theme;

pub use layout::render;
