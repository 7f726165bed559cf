//! Request decoding into the closed set of contract operations.
//!
//! Each variant carries its typed, positional arguments. Parsing checks the
//! function name and then the argument count; it never touches the store.

use statekv_primitives::types::{FN_DEL, FN_GET, FN_GET_BY_RANGE, FN_PUT};
use statekv_primitives::Request;
use crate::error::{ContractError, ContractResult};

/// A parsed contract operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Store `value` under `(namespace, key)`.
    Put {
        namespace: String,
        key: String,
        value: String,
    },
    /// Read the value under `(namespace, key)`.
    Get { namespace: String, key: String },
    /// Delete the value under `(namespace, key)`.
    Del { namespace: String, key: String },
    /// Scan physical keys in `[from, to)`.
    GetByRange { from: String, to: String },
}

impl Operation {
    /// Decode a request into an operation.
    ///
    /// Unknown function names and wrong argument counts fail with
    /// `InvalidArgument`.
    pub fn parse(request: &Request) -> ContractResult<Self> {
        let args = &request.args;
        match request.function.as_str() {
            FN_PUT => {
                let [namespace, key, value] = take_args(args)?;
                Ok(Self::Put {
                    namespace,
                    key,
                    value,
                })
            }
            FN_GET => {
                let [namespace, key] = take_args(args)?;
                Ok(Self::Get { namespace, key })
            }
            FN_DEL => {
                let [namespace, key] = take_args(args)?;
                Ok(Self::Del { namespace, key })
            }
            FN_GET_BY_RANGE => {
                let [from, to] = take_args(args)?;
                Ok(Self::GetByRange { from, to })
            }
            other => Err(ContractError::InvalidArgument(format!(
                "unknown function name: {}, expected one of {{{}, {}, {}, {}}}",
                other, FN_GET, FN_PUT, FN_DEL, FN_GET_BY_RANGE
            ))),
        }
    }

    /// The function name this operation was parsed from.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Put { .. } => FN_PUT,
            Self::Get { .. } => FN_GET,
            Self::Del { .. } => FN_DEL,
            Self::GetByRange { .. } => FN_GET_BY_RANGE,
        }
    }
}

fn take_args<const N: usize>(args: &[String]) -> ContractResult<[String; N]> {
    <[String; N]>::try_from(args.to_vec())
        .map_err(|args| ContractError::wrong_arg_count(N, args.len()))
}
