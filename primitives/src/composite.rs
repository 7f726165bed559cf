//! Composite key scheme for the ledger state keyspace.
//!
//! A composite key combines an object type with zero or more attributes:
//!
//! ```text
//! U+0000 objectType U+0000 attr1 U+0000 ... attrN U+0000
//! ```
//!
//! The leading delimiter places every composite key before all simple keys
//! that start with a printable character, and the delimiter after the object
//! type keeps different object types in disjoint ranges: no part may contain
//! U+0000, so one type's keys can never be a prefix of another type's keys.
//! U+10FFFF is also reserved so that `prefix + U+10FFFF` bounds every key
//! sharing `prefix`.

use alloc::string::String;
use alloc::vec::Vec;
use crate::error::CompositeKeyError;
use crate::types::{COMPOSITE_KEY_NAMESPACE, MAX_UNICODE_RUNE, MIN_UNICODE_RUNE};

fn validate_part(part: &str) -> Result<(), CompositeKeyError> {
    for rune in part.chars() {
        if rune == MIN_UNICODE_RUNE || rune == MAX_UNICODE_RUNE {
            return Err(CompositeKeyError::ReservedRune {
                part: String::from(part),
                rune,
            });
        }
    }
    Ok(())
}

/// Build a composite key from an object type and its attributes.
///
/// Fails with `ReservedRune` if any part contains U+0000 or U+10FFFF.
pub fn create_composite_key<S: AsRef<str>>(
    object_type: &str,
    attributes: &[S],
) -> Result<String, CompositeKeyError> {
    validate_part(object_type)?;

    let mut key = String::with_capacity(
        2 + object_type.len()
            + attributes.iter().map(|a| a.as_ref().len() + 1).sum::<usize>(),
    );
    key.push(COMPOSITE_KEY_NAMESPACE);
    key.push_str(object_type);
    key.push(MIN_UNICODE_RUNE);

    for attribute in attributes {
        let attribute = attribute.as_ref();
        validate_part(attribute)?;
        key.push_str(attribute);
        key.push(MIN_UNICODE_RUNE);
    }

    Ok(key)
}

/// Split a composite key back into its object type and attributes.
pub fn split_composite_key(key: &str) -> Result<(String, Vec<String>), CompositeKeyError> {
    let body = key
        .strip_prefix(COMPOSITE_KEY_NAMESPACE)
        .ok_or_else(|| CompositeKeyError::NotComposite(String::from(key)))?;
    let body = body
        .strip_suffix(MIN_UNICODE_RUNE)
        .ok_or_else(|| CompositeKeyError::Malformed(String::from(key)))?;

    let mut parts = body.split(MIN_UNICODE_RUNE).map(String::from);
    // `split` always yields at least one item, even for an empty body.
    let object_type = parts
        .next()
        .ok_or_else(|| CompositeKeyError::Malformed(String::from(key)))?;

    Ok((object_type, parts.collect()))
}
