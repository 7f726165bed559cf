//! Core constants and small records shared across statekv crates.

use alloc::string::String;
use alloc::vec::Vec;

/// Delimiter that opens a composite key and separates its parts.
pub const COMPOSITE_KEY_NAMESPACE: char = '\u{0}';

/// Lowest code point; reserved as the composite-key delimiter.
pub const MIN_UNICODE_RUNE: char = '\u{0}';

/// Highest code point; reserved as the open end of a partial-key range.
pub const MAX_UNICODE_RUNE: char = '\u{10FFFF}';

/// Default maximum physical key length in bytes.
pub const MAX_KEY_LEN: usize = 1024;

/// Default maximum stored value length in bytes.
pub const MAX_VALUE_LEN: usize = 1024 * 1024; // 1 MiB

// Operation names accepted by the contract dispatcher.
pub const FN_PUT: &str = "put";
pub const FN_GET: &str = "get";
pub const FN_DEL: &str = "del";
pub const FN_GET_BY_RANGE: &str = "getByRange";

/// A key-value pair yielded by a state range iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KV {
    /// Physical key as stored.
    pub key: String,
    /// Raw stored bytes.
    pub value: Vec<u8>,
}

impl KV {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
