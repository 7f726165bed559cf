//! Shared test helpers for integration tests.
//!
//! Provides a tracing initializer, a store that records every call it
//! receives, and a store whose failures can be scripted.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use statekv_contract::Contract;
use statekv_hostapi::{HostError, MemStore, StateIterator, StateStore};
use statekv_primitives::{Request, Response, KV};

static INIT: Once = Once::new();

/// Initialize tracing for test binaries. Safe to call multiple times.
pub fn init_tracing() {
    INIT.call_once(|| {
        use tracing_subscriber::filter::EnvFilter;
        use tracing_subscriber::fmt;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Invoke `function(args)` on a default contract.
pub fn call(store: &mut dyn StateStore, function: &str, args: &[&str]) -> Response {
    init_tracing();
    Contract::default().invoke(store, &Request::new(function, args.iter().copied()))
}

// ── Recording store ──

/// Wraps a `MemStore` and counts every store call.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub inner: MemStore,
    gets: AtomicUsize,
    puts: AtomicUsize,
    deletes: AtomicUsize,
    ranges: AtomicUsize,
    composes: AtomicUsize,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of calls of any kind.
    pub fn calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
            + self.puts.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
            + self.ranges.load(Ordering::SeqCst)
            + self.composes.load(Ordering::SeqCst)
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn ranges(&self) -> usize {
        self.ranges.load(Ordering::SeqCst)
    }

    pub fn composes(&self) -> usize {
        self.composes.load(Ordering::SeqCst)
    }
}

impl StateStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), HostError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(key)
    }

    fn range_iterator<'a>(
        &'a self,
        from: &str,
        to: &str,
    ) -> Result<Box<dyn StateIterator + 'a>, HostError> {
        self.ranges.fetch_add(1, Ordering::SeqCst);
        self.inner.range_iterator(from, to)
    }

    fn compose_key(&self, namespace: &str, parts: &[&str]) -> Result<String, HostError> {
        self.composes.fetch_add(1, Ordering::SeqCst);
        self.inner.compose_key(namespace, parts)
    }
}

// ── Scripted failures ──

/// Which store calls fail, and how.
#[derive(Debug, Clone, Default)]
pub struct Faults {
    pub get: bool,
    pub put: bool,
    pub delete: bool,
    pub open_range: bool,
    pub compose: bool,
    /// Fail the n-th pull (0-based) of every range iterator.
    pub next_at: Option<usize>,
    pub close: bool,
}

/// A store over fixed data whose calls fail as scripted by `Faults`.
#[derive(Debug, Default)]
pub struct FaultyStore {
    pub inner: MemStore,
    pub faults: Faults,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

impl FaultyStore {
    pub fn new(inner: MemStore, faults: Faults) -> Self {
        Self {
            inner,
            faults,
            ..Self::default()
        }
    }

    /// Number of iterators opened.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Number of iterators closed.
    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    fn fail(what: &str) -> HostError {
        HostError::Internal(format!("injected {} failure", what))
    }
}

impl StateStore for FaultyStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        if self.faults.get {
            return Err(Self::fail("get"));
        }
        self.inner.get(key)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError> {
        if self.faults.put {
            return Err(Self::fail("put"));
        }
        self.inner.put(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), HostError> {
        if self.faults.delete {
            return Err(Self::fail("delete"));
        }
        self.inner.delete(key)
    }

    fn range_iterator<'a>(
        &'a self,
        from: &str,
        to: &str,
    ) -> Result<Box<dyn StateIterator + 'a>, HostError> {
        if self.faults.open_range {
            return Err(Self::fail("range"));
        }

        let mut entries = VecDeque::new();
        let mut it = self.inner.range_iterator(from, to)?;
        while it.has_next() {
            entries.push_back(it.next_kv()?);
        }
        it.close()?;

        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FaultyIterator {
            entries,
            pulled: 0,
            fail_at: self.faults.next_at,
            fail_close: self.faults.close,
            closed: false,
            closes: Arc::clone(&self.closed),
        }))
    }

    fn compose_key(&self, namespace: &str, parts: &[&str]) -> Result<String, HostError> {
        if self.faults.compose {
            return Err(Self::fail("compose"));
        }
        self.inner.compose_key(namespace, parts)
    }
}

struct FaultyIterator {
    entries: VecDeque<KV>,
    pulled: usize,
    fail_at: Option<usize>,
    fail_close: bool,
    closed: bool,
    closes: Arc<AtomicUsize>,
}

impl StateIterator for FaultyIterator {
    fn has_next(&self) -> bool {
        !self.closed && !self.entries.is_empty()
    }

    fn next_kv(&mut self) -> Result<KV, HostError> {
        if self.closed {
            return Err(HostError::IteratorClosed);
        }
        let index = self.pulled;
        self.pulled += 1;
        if self.fail_at == Some(index) {
            return Err(HostError::Iterator(format!("injected failure at entry {}", index)));
        }
        self.entries
            .pop_front()
            .ok_or_else(|| HostError::Iterator("no more entries".into()))
    }

    fn close(&mut self) -> Result<(), HostError> {
        assert!(!self.closed, "iterator closed twice");
        self.closed = true;
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(HostError::Internal("injected close failure".into()));
        }
        Ok(())
    }
}
