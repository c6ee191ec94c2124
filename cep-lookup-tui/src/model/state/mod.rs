//! 各面板的状态

mod addresses;
mod form;
mod modal;

pub use addresses::AddressesState;
pub use form::{FormField, FormState};
pub use modal::{Modal, ModalState};
