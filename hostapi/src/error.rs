//! Host-side error types for the statekv state store.
//!
//! `HostError` is the error type returned by every `StateStore` and
//! `StateIterator` method. The contract layer reports all of them as
//! internal errors; the variants exist so hosts and tests can tell causes apart.

use statekv_primitives::CompositeKeyError;

/// Error returned by the host state store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// Physical key exceeds the configured maximum length.
    #[error("key too large: {len} bytes exceeds limit of {max}")]
    KeyTooLarge { len: usize, max: usize },

    /// Value exceeds the configured maximum length.
    #[error("value too large: {len} bytes exceeds limit of {max}")]
    ValueTooLarge { len: usize, max: usize },

    /// Writes and deletes require a non-empty physical key.
    #[error("key must not be an empty string")]
    EmptyKey,

    /// Composite key construction failed.
    #[error("invalid composite key: {0}")]
    CompositeKey(#[from] CompositeKeyError),

    /// `next` was called on an iterator that was already closed.
    #[error("iterator is closed")]
    IteratorClosed,

    /// `next` was called on an exhausted iterator, or the backend failed mid-scan.
    #[error("iterator error: {0}")]
    Iterator(String),

    /// Any other backend failure.
    #[error("internal host error: {0}")]
    Internal(String),
}
