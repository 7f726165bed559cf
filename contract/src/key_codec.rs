//! Mapping from a (namespace, logical key) pair to a physical store key.
//!
//! An empty namespace stores the key verbatim (flat mode). A non-empty
//! namespace delegates to the store's composite-key primitive with the
//! single key part `[key]`, so keys from different namespaces never collide
//! and each namespace occupies its own contiguous key range.

use statekv_hostapi::StateStore;
use statekv_primitives::types::MAX_UNICODE_RUNE;
use crate::error::{ContractError, ContractResult};

/// Lower bound used for the flat keyspace: skips every composite key,
/// which all begin with U+0000.
const FLAT_KEYSPACE_START: &str = "\u{1}";

/// Encode a logical key into its physical key.
///
/// Fails with `InvalidArgument` if `key` is empty, whatever the namespace.
pub fn encode(store: &dyn StateStore, namespace: &str, key: &str) -> ContractResult<String> {
    if key.is_empty() {
        return Err(ContractError::InvalidArgument(
            "key must be a non-empty string".into(),
        ));
    }

    if namespace.is_empty() {
        return Ok(key.to_owned());
    }

    store
        .compose_key(namespace, &[key])
        .map_err(ContractError::Encoding)
}

/// Physical bounds `[start, end)` covering every key stored under `namespace`.
///
/// `getByRange` takes physical bounds; this gives callers a way to build
/// them without knowing the composite layout. For the empty namespace the
/// bounds start at U+0001 and are unbounded above, so they cover flat keys
/// except those that themselves begin with U+0000. Flat `put` stores such
/// keys verbatim and they sort among the composite keys.
pub fn namespace_bounds(
    store: &dyn StateStore,
    namespace: &str,
) -> ContractResult<(String, String)> {
    if namespace.is_empty() {
        return Ok((FLAT_KEYSPACE_START.to_owned(), String::new()));
    }

    let start = store
        .compose_key(namespace, &[])
        .map_err(ContractError::Encoding)?;
    let mut end = start.clone();
    end.push(MAX_UNICODE_RUNE);
    Ok((start, end))
}
