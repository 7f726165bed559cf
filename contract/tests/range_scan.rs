//! Range scan tests: ordering, bounds, and cursor release on every path.

mod common;

use std::panic::{self, AssertUnwindSafe};

use statekv_contract::scanner::{render, scan};
use statekv_contract::{ContractError, RangeEntry, ScopedIterator};
use statekv_hostapi::{HostError, MemStore};
use statekv_primitives::StatusCode;

use common::*;

fn seeded(keys: &[&str]) -> MemStore {
    let mut store = MemStore::new();
    for key in keys {
        store.insert(*key, key.to_uppercase().into_bytes());
    }
    store
}

fn keys_of(payload: &[u8]) -> Vec<String> {
    let entries: Vec<RangeEntry> = serde_json::from_slice(payload).unwrap();
    entries.into_iter().map(|e| e.key).collect()
}

// ── Ordering and bounds ──

#[test]
fn test_scan_orders_by_physical_key() {
    let mut store = seeded(&["k2", "k10", "k1", "k3"]);
    let resp = call(&mut store, "getByRange", &["k", "l"]);
    assert_eq!(resp.status, StatusCode::Ok);
    // Byte order, not numeric order.
    assert_eq!(keys_of(&resp.payload), vec!["k1", "k10", "k2", "k3"]);
}

#[test]
fn test_scan_includes_from_excludes_to() {
    let mut store = seeded(&["a", "b", "c"]);
    let resp = call(&mut store, "getByRange", &["a", "c"]);
    assert_eq!(keys_of(&resp.payload), vec!["a", "b"]);

    let resp = call(&mut store, "getByRange", &["b", "b\u{0}"]);
    assert_eq!(keys_of(&resp.payload), vec!["b"]);
}

#[test]
fn test_scan_empty_region_returns_empty_array() {
    let mut store = seeded(&["a", "b"]);
    let resp = call(&mut store, "getByRange", &["m", "n"]);
    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.payload, b"[]");

    let mut empty = MemStore::new();
    let resp = call(&mut empty, "getByRange", &["", ""]);
    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.payload, b"[]");
}

#[test]
fn test_scan_bounds_are_not_namespace_encoded() {
    let mut store = MemStore::new();
    call(&mut store, "put", &["user", "alice", "42"]);

    // Logical keys used as bounds miss the composite physical key.
    let resp = call(&mut store, "getByRange", &["alice", "alicf"]);
    assert_eq!(resp.payload, b"[]");

    let resp = call(&mut store, "getByRange", &["\u{0}user\u{0}a", "\u{0}user\u{0}z"]);
    assert_eq!(keys_of(&resp.payload), vec!["\u{0}user\u{0}alice\u{0}"]);
}

// ── Cursor release ──

#[test]
fn test_iterator_closed_after_success() {
    let store = FaultyStore::new(seeded(&["a", "b", "c"]), Faults::default());
    let entries = scan(&store, "", "").unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(store.opened(), 1);
    assert_eq!(store.closed(), 1);
}

#[test]
fn test_iterator_closed_after_empty_scan() {
    let store = FaultyStore::new(MemStore::new(), Faults::default());
    assert!(scan(&store, "a", "z").unwrap().is_empty());
    assert_eq!(store.closed(), 1);
}

#[test]
fn test_mid_scan_failure_aborts_and_closes() {
    for fail_at in 0..3 {
        let faults = Faults {
            next_at: Some(fail_at),
            ..Faults::default()
        };
        let store = FaultyStore::new(seeded(&["a", "b", "c"]), faults);

        let err = scan(&store, "", "").unwrap_err();
        match &err {
            ContractError::Store { context, source } => {
                assert_eq!(context, "unable to get the next element");
                assert!(matches!(source, HostError::Iterator(_)));
            }
            other => panic!("expected store error, got {:?}", other),
        }
        assert_eq!(err.status(), StatusCode::Internal);
        assert_eq!(store.opened(), 1);
        assert_eq!(store.closed(), 1, "fail_at={}", fail_at);
    }
}

#[test]
fn test_mid_scan_failure_returns_no_partial_payload() {
    let faults = Faults {
        next_at: Some(2),
        ..Faults::default()
    };
    let mut store = FaultyStore::new(seeded(&["a", "b", "c"]), faults);
    let resp = call(&mut store, "getByRange", &["", ""]);
    assert_eq!(resp.status, StatusCode::Internal);
    assert!(resp.payload.is_empty());
    assert!(resp.message.starts_with("unable to get the next element"));
    assert_eq!(store.closed(), 1);
}

#[test]
fn test_open_failure_is_store_error() {
    let faults = Faults {
        open_range: true,
        ..Faults::default()
    };
    let mut store = FaultyStore::new(seeded(&["a"]), faults);
    let resp = call(&mut store, "getByRange", &["a", "b"]);
    assert_eq!(resp.status, StatusCode::Internal);
    assert!(resp
        .message
        .starts_with("unable to get an iterator over the range [\"a\", \"b\")"));
    assert_eq!(store.opened(), 0);
    assert_eq!(store.closed(), 0);
}

#[test]
fn test_close_failure_does_not_discard_results() {
    let faults = Faults {
        close: true,
        ..Faults::default()
    };
    let store = FaultyStore::new(seeded(&["a", "b"]), faults);
    let entries = scan(&store, "", "").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(store.closed(), 1);
}

#[test]
fn test_iterator_closed_when_unwinding() {
    init_tracing();
    let store = FaultyStore::new(seeded(&["a", "b", "c"]), Faults::default());

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut iter = ScopedIterator::open(&store, "", "").unwrap();
        let first = iter.next().unwrap().unwrap();
        assert_eq!(first.key, "a");
        panic!("consumer failed mid-scan");
    }));

    assert!(result.is_err());
    assert_eq!(store.opened(), 1);
    assert_eq!(store.closed(), 1);
}

#[test]
fn test_render_round_trips_through_json() {
    let store = seeded(&["x", "y"]);
    let entries = scan(&store, "", "").unwrap();
    let parsed: Vec<RangeEntry> = serde_json::from_slice(&render(&entries).unwrap()).unwrap();
    assert_eq!(parsed, entries);
    assert_eq!(parsed[0].value, "X");
}
