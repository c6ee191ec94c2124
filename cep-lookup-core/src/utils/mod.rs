//! 工具函数模块

pub mod datetime;
pub mod relative_time;
pub mod validation;
