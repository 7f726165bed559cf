//! Invocation boundary types: the request a host runtime delivers and the
//! response the contract hands back.

use alloc::string::String;
use alloc::vec::Vec;
use crate::error::StatusCode;

/// A single contract invocation: an operation name and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    /// Operation name (`put`, `get`, `del`, `getByRange`).
    pub function: String,
    /// Positional string arguments.
    pub args: Vec<String>,
}

impl Request {
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of a contract invocation.
///
/// `payload` is only non-empty on success of operations that return data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub message: String,
    pub payload: Vec<u8>,
}

impl Response {
    /// A 200 response carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            message: String::new(),
            payload,
        }
    }

    /// A non-success response with an explanatory message and no payload.
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}
