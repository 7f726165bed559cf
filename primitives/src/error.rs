//! Status codes and error types shared by the statekv crates.

use alloc::string::String;
use core::fmt;

/// Response status codes returned to the host runtime.
///
/// The repr values follow the ledger platform's HTTP-like convention and
/// are what the host sees on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
    Internal = 500,
}

impl StatusCode {
    /// Convert from the `i32` carried in an encoded response.
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            200 => Some(Self::Ok),
            400 => Some(Self::BadRequest),
            404 => Some(Self::NotFound),
            500 => Some(Self::Internal),
            _ => None,
        }
    }

    /// Return the i32 representation of this status.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns true if this is the `Ok` variant.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Composite key construction or parsing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositeKeyError {
    /// A part contains the delimiter or the range-end sentinel.
    ReservedRune { part: String, rune: char },

    /// The key does not start with the composite-key delimiter.
    NotComposite(String),

    /// The key starts with the delimiter but is not terminated properly.
    Malformed(String),
}

impl fmt::Display for CompositeKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedRune { part, rune } => write!(
                f,
                "input string '{}' contains reserved rune U+{:04X}",
                part.escape_debug(),
                *rune as u32
            ),
            Self::NotComposite(key) => {
                write!(f, "key '{}' is not a composite key", key.escape_debug())
            }
            Self::Malformed(key) => {
                write!(f, "malformed composite key '{}'", key.escape_debug())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CompositeKeyError {}

/// Envelope encoding or decoding failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input ended before a field was complete.
    UnexpectedEof,

    /// A string field was not valid UTF-8.
    InvalidUtf8,

    /// The status field carries an unknown code.
    UnknownStatus(i32),

    /// Bytes remained after the last field.
    TrailingBytes(usize),

    /// A length or count does not fit the `u32` prefix.
    TooLarge(usize),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of data"),
            Self::InvalidUtf8 => write!(f, "invalid UTF-8"),
            Self::UnknownStatus(code) => write!(f, "unknown status code: {}", code),
            Self::TrailingBytes(n) => write!(f, "{} trailing bytes after envelope", n),
            Self::TooLarge(n) => write!(f, "length {} exceeds the u32 prefix", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}
