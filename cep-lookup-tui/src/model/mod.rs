//! Model 层：应用的全部界面状态
//!
//! ```text
//!   Event ──▶ Message ──▶ Update ──▶ Model ──▶ View
//!                            │
//!                            └──▶ Command ──▶ Backend ──▶ cep-lookup-core
//! ```
//!
//! Model 只保存数据，不做 I/O。Backend 的结果以消息形式回到 Update 层。

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{AddressesState, FormField, FormState, Modal, ModalState};
