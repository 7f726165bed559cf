//! `statekv-primitives`: foundational types for the statekv contract layer.
//!
//! This crate provides the status codes, composite-key scheme, invocation
//! envelope, and envelope serialization shared by the host API and the
//! contract.
//!
//! Supports `#![no_std]` (use `default-features = false`).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod types;
pub mod error;
pub mod composite;
pub mod envelope;
pub mod codec;

// Re-export commonly used types at the crate root for convenience.
pub use types::{KV, MAX_KEY_LEN, MAX_VALUE_LEN};
pub use error::{CodecError, CompositeKeyError, StatusCode};
pub use composite::{create_composite_key, split_composite_key};
pub use envelope::{Request, Response};
