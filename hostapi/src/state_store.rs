//! State storage abstraction provided by the host ledger.
//!
//! `StateStore` is the only way the contract touches persisted state. The
//! host owns transactions, isolation, and commit; the contract only issues
//! point reads, writes, deletes, and ordered range scans against it.
//!
//! Implementations:
//! - `MemStore` (this crate): in-memory BTreeMap for tests and local runs
//! - a ledger peer connection, provided by the embedding host

use statekv_primitives::{create_composite_key, KV};
use crate::error::HostError;

/// Cursor over a half-open range of physical keys.
///
/// Holders must call [`close`](StateIterator::close) once they are done,
/// whether or not the range was fully consumed.
pub trait StateIterator {
    /// Returns true if another entry can be pulled.
    fn has_next(&self) -> bool;

    /// Pull the next entry in ascending key order.
    fn next_kv(&mut self) -> Result<KV, HostError>;

    /// Release the cursor. Further `next_kv` calls fail.
    fn close(&mut self) -> Result<(), HostError>;
}

/// Abstraction over the host's ordered key-value state.
///
/// Keys are compared by their UTF-8 bytes, so ordering is plain
/// lexicographic byte order.
pub trait StateStore: Send + Sync {
    /// Get the value for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Write a value, replacing any previous one.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), HostError>;

    /// Open a cursor over `[from, to)`.
    ///
    /// An empty `from` starts at the first key, composite keys included, and
    /// an empty `to` runs to the end of the keyspace. Ledger hosts may start
    /// an empty `from` at U+0001 instead, so callers that care about
    /// composite keys should pass explicit bounds.
    fn range_iterator<'a>(
        &'a self,
        from: &str,
        to: &str,
    ) -> Result<Box<dyn StateIterator + 'a>, HostError>;

    /// Build a composite key from a namespace and key parts.
    ///
    /// Default implementation uses the ledger's composite-key layout; hosts
    /// with a native primitive should override it.
    fn compose_key(&self, namespace: &str, parts: &[&str]) -> Result<String, HostError> {
        Ok(create_composite_key(namespace, parts)?)
    }
}
