//! `statekv-hostapi`: the host state store contract for statekv.
//!
//! This crate defines the interface the contract uses to reach the ledger's
//! state database. It provides:
//!
//! - `StateStore` trait: point get/put/delete, range iteration, composite keys
//! - `StateIterator` trait: cursor over a half-open key range
//! - `MemStore`: in-memory `StateStore` for testing
//! - `StoreConfig`: key/value size limits
//! - `HostError`: host-side error type

pub mod error;
pub mod types;
pub mod state_store;
pub mod mem_store;

// Re-export commonly used types at the crate root.
pub use error::HostError;
pub use types::StoreConfig;
pub use state_store::{StateIterator, StateStore};
pub use mem_store::{MemIterator, MemStore};
