//! `statekv-contract`: a composite-key-addressed key-value contract over a
//! host ledger state store.
//!
//! Four operations are exposed: `put`, `get`, `del`, and `getByRange`. Point
//! operations address values by `(namespace, key)`; range scans address the
//! store's physical keys directly.
//!
//! ## Architecture
//!
//! - [`key_codec`]: (namespace, key) → physical key
//! - [`operation::Operation`]: typed request dispatch
//! - [`handlers`]: put / get / del against the store
//! - [`scanner`]: half-open range scans with guaranteed cursor release
//! - [`Contract`]: per-request entry point, response mapping, logging

pub mod config;
pub mod error;
pub mod key_codec;
pub mod operation;
pub mod handlers;
pub mod scanner;
pub mod contract;

pub(crate) mod observability;

// Re-export key types for convenience
pub use config::ContractConfig;
pub use contract::Contract;
pub use error::{ContractError, ContractResult};
pub use operation::Operation;
pub use scanner::{RangeEntry, RangeScanner, ScopedIterator};
