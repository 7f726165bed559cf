//! Range scanning over physical keys.
//!
//! A scan opens a store cursor over `[from, to)`, pulls entries one at a
//! time, and renders them as a JSON array of `{"key", "value"}` records. The
//! cursor lives inside a [`ScopedIterator`], which closes it on every exit
//! path: normal completion, a failed pull, or unwinding.
//!
//! Scans are all-or-nothing. The first failed pull aborts the scan and the
//! entries collected so far are dropped.

use serde::{Deserialize, Serialize};
use statekv_hostapi::{HostError, StateIterator, StateStore};
use statekv_primitives::KV;
use crate::error::{ContractError, ContractResult};
use crate::observability::{log_debug, log_warn};

/// One scanned entry with its value decoded to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub key: String,
    pub value: String,
}

impl From<KV> for RangeEntry {
    fn from(kv: KV) -> Self {
        // Invalid UTF-8 sequences become U+FFFD.
        let value = match String::from_utf8(kv.value) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        };
        Self { key: kv.key, value }
    }
}

/// Owns a store cursor and closes it exactly once.
pub struct ScopedIterator<'a> {
    inner: Box<dyn StateIterator + 'a>,
    closed: bool,
}

impl<'a> ScopedIterator<'a> {
    /// Open a cursor over `[from, to)`.
    pub fn open(store: &'a dyn StateStore, from: &str, to: &str) -> Result<Self, HostError> {
        let inner = store.range_iterator(from, to)?;
        Ok(Self {
            inner,
            closed: false,
        })
    }

    /// Close the cursor now and report the outcome.
    pub fn close(mut self) -> Result<(), HostError> {
        self.release()
    }

    fn release(&mut self) -> Result<(), HostError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.inner.close()
    }
}

impl Iterator for ScopedIterator<'_> {
    type Item = Result<KV, HostError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed || !self.inner.has_next() {
            return None;
        }
        Some(self.inner.next_kv())
    }
}

impl Drop for ScopedIterator<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            log_warn!(event = "iterator_close_failed", error = %err);
        }
    }
}

/// Scans physical key ranges out of a store.
#[derive(Debug, Clone, Default)]
pub struct RangeScanner {
    log_entries: bool,
}

impl RangeScanner {
    pub fn new(log_entries: bool) -> Self {
        Self { log_entries }
    }

    /// Collect every entry in `[from, to)` in ascending key order.
    ///
    /// Bounds are physical keys and are passed to the store unchanged.
    pub fn scan(
        &self,
        store: &dyn StateStore,
        from: &str,
        to: &str,
    ) -> ContractResult<Vec<RangeEntry>> {
        let mut iter = ScopedIterator::open(store, from, to).map_err(|source| {
            ContractError::store(
                format!("unable to get an iterator over the range [{:?}, {:?})", from, to),
                source,
            )
        })?;

        let mut entries = Vec::new();
        for item in &mut iter {
            let kv = item.map_err(|source| {
                ContractError::store("unable to get the next element", source)
            })?;
            let entry = RangeEntry::from(kv);
            if self.log_entries {
                log_debug!(event = "range_entry", key = ?entry.key, value = ?entry.value);
            }
            entries.push(entry);
        }

        if let Err(err) = iter.close() {
            log_warn!(event = "iterator_close_failed", error = %err);
        }
        Ok(entries)
    }
}

/// Scan `[from, to)` with per-entry logging disabled.
pub fn scan(store: &dyn StateStore, from: &str, to: &str) -> ContractResult<Vec<RangeEntry>> {
    RangeScanner::default().scan(store, from, to)
}

/// Render entries as a JSON array. An empty slice renders as `[]`.
pub fn render(entries: &[RangeEntry]) -> ContractResult<Vec<u8>> {
    Ok(serde_json::to_vec(entries)?)
}
