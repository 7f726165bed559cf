//! Structured logging for the statekv contract.
//!
//! All events use target `"statekv"` and carry an `event` field naming the
//! point in the invocation lifecycle (`invoke`, `invalid_request`,
//! `store_failed`, `invoke_succeeded`, ...).
//!
//! The contract never installs a global subscriber; the embedding host
//! configures `tracing` however it likes.
//!
//! Conventions:
//! - `event`: snake_case event name (required)
//! - `contract`: the configured contract name
//! - `op`: operation name as received
//! - Use `%` for Display, `?` for Debug formatting

/// Target for all contract log events.
pub(crate) const STATEKV_TARGET: &str = "statekv";

macro_rules! log_info {
    ($($field:tt)*) => {
        ::tracing::info!(target: $crate::observability::STATEKV_TARGET, $($field)*)
    };
}

macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::STATEKV_TARGET, $($field)*)
    };
}

macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::STATEKV_TARGET, $($field)*)
    };
}

macro_rules! log_error {
    ($($field:tt)*) => {
        ::tracing::error!(target: $crate::observability::STATEKV_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_error;
pub(crate) use log_info;
pub(crate) use log_warn;
