//! Utility modules.

/// Keeps response bodies in logs short.
pub mod log_sanitizer;
