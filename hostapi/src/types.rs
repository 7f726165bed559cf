//! Host-side configuration types for the state store.

use statekv_primitives::{MAX_KEY_LEN, MAX_VALUE_LEN};

/// Limits enforced by a state store on writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum length of a physical key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a stored value in bytes.
    pub max_value_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
        }
    }
}
