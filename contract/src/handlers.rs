//! Point operations: put, get, and delete of a single logical key.
//!
//! Each handler encodes the key, then issues exactly one store call.

use statekv_hostapi::StateStore;
use crate::error::{ContractError, ContractResult};
use crate::key_codec;
use crate::observability::log_debug;

/// Store `value` under `(namespace, key)`.
pub fn put(
    store: &mut dyn StateStore,
    namespace: &str,
    key: &str,
    value: &[u8],
) -> ContractResult<()> {
    let physical_key = key_codec::encode(store, namespace, key)?;
    log_debug!(event = "state_put", key = ?physical_key, value_len = value.len());

    store
        .put(&physical_key, value)
        .map_err(|source| ContractError::store("unable to put a key-value pair", source))
}

/// Read the value under `(namespace, key)`.
///
/// A missing value is `NotFound`, distinct from a store failure.
pub fn get(store: &dyn StateStore, namespace: &str, key: &str) -> ContractResult<Vec<u8>> {
    let physical_key = key_codec::encode(store, namespace, key)?;
    log_debug!(event = "state_get", key = ?physical_key);

    let value = store.get(&physical_key).map_err(|source| {
        ContractError::store(format!("unable to get a value for the key {}", key), source)
    })?;

    value.ok_or_else(|| ContractError::NotFound {
        key: key.to_owned(),
    })
}

/// Delete the value under `(namespace, key)`. Missing keys are not an error.
pub fn del(store: &mut dyn StateStore, namespace: &str, key: &str) -> ContractResult<()> {
    let physical_key = key_codec::encode(store, namespace, key)?;
    log_debug!(event = "state_del", key = ?physical_key);

    store.delete(&physical_key).map_err(|source| {
        ContractError::store(
            format!("unable to delete a pair associated with the key {}", key),
            source,
        )
    })
}
