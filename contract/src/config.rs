//! Contract configuration.

/// Configuration for a [`Contract`](crate::Contract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    /// Name recorded on every log event.
    pub name: String,

    /// Emit a debug event for every entry a range scan returns.
    pub log_entries: bool,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            name: "statekv".to_owned(),
            log_entries: true,
        }
    }
}
