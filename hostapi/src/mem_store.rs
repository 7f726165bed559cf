//! In-memory state store for testing and local runs.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap`, which gives the
//! same ascending byte-order iteration the ledger's state database provides.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound;

use statekv_primitives::KV;
use crate::error::HostError;
use crate::state_store::{StateIterator, StateStore};
use crate::types::StoreConfig;

/// In-memory state store backed by `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    data: BTreeMap<String, Vec<u8>>,
    config: StoreConfig,
}

impl MemStore {
    /// Create a new empty store with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty store with the given limits.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            data: BTreeMap::new(),
            config,
        }
    }

    /// Insert a key-value pair directly, bypassing limits.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.data.insert(key.into(), value.into());
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn check_key(&self, key: &str) -> Result<(), HostError> {
        if key.is_empty() {
            return Err(HostError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(HostError::KeyTooLarge {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        Ok(())
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        // Limits apply to writes only; a key that cannot be stored is simply absent.
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError> {
        self.check_key(key)?;
        if value.len() > self.config.max_value_len {
            return Err(HostError::ValueTooLarge {
                len: value.len(),
                max: self.config.max_value_len,
            });
        }
        self.data.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), HostError> {
        self.check_key(key)?;
        self.data.remove(key);
        Ok(())
    }

    fn range_iterator<'a>(
        &'a self,
        from: &str,
        to: &str,
    ) -> Result<Box<dyn StateIterator + 'a>, HostError> {
        Ok(Box::new(MemIterator::new(&self.data, from, to)))
    }
}

/// Lazy cursor over a `MemStore` range.
///
/// Holds one entry of lookahead so `has_next` does not need `&mut self`.
pub struct MemIterator<'a> {
    range: Option<btree_map::Range<'a, String, Vec<u8>>>,
    lookahead: Option<(&'a String, &'a Vec<u8>)>,
    closed: bool,
}

impl<'a> MemIterator<'a> {
    fn new(data: &'a BTreeMap<String, Vec<u8>>, from: &str, to: &str) -> Self {
        let start = if from.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(from)
        };
        let end = if to.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(to)
        };

        // BTreeMap::range panics on inverted bounds.
        let inverted = !from.is_empty() && !to.is_empty() && from >= to;
        let mut range = if inverted {
            None
        } else {
            Some(data.range::<str, _>((start, end)))
        };
        let lookahead = range.as_mut().and_then(Iterator::next);

        Self {
            range,
            lookahead,
            closed: false,
        }
    }
}

impl StateIterator for MemIterator<'_> {
    fn has_next(&self) -> bool {
        !self.closed && self.lookahead.is_some()
    }

    fn next_kv(&mut self) -> Result<KV, HostError> {
        if self.closed {
            return Err(HostError::IteratorClosed);
        }
        let (key, value) = self
            .lookahead
            .take()
            .ok_or_else(|| HostError::Iterator("no more entries".into()))?;
        self.lookahead = self.range.as_mut().and_then(Iterator::next);
        Ok(KV::new(key.as_str(), value.as_slice()))
    }

    fn close(&mut self) -> Result<(), HostError> {
        self.closed = true;
        self.range = None;
        self.lookahead = None;
        Ok(())
    }
}
