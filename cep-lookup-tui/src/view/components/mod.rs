//! 界面组件

pub mod address_table;
pub mod form;
pub mod modal;
pub mod statusbar;
