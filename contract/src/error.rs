//! Contract error taxonomy and its mapping onto response statuses.

use statekv_hostapi::HostError;
use statekv_primitives::StatusCode;

/// Error produced while handling a single invocation.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Malformed request: wrong argument count, empty key, unknown function.
    #[error("{0}")]
    InvalidArgument(String),

    /// The store could not build a composite key.
    #[error("unable to create a composite key: {0}")]
    Encoding(#[source] HostError),

    /// Any failure reading from or writing to the store.
    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: HostError,
    },

    /// The read succeeded but no value exists for the key.
    #[error("a value for the key {key} not found")]
    NotFound { key: String },

    /// The scan result could not be rendered.
    #[error("unable to marshal the result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ContractError {
    pub fn wrong_arg_count(expected: usize, actual: usize) -> Self {
        Self::InvalidArgument(format!(
            "wrong number of arguments: passed {}, expected {}",
            actual, expected
        ))
    }

    pub fn store(context: impl Into<String>, source: HostError) -> Self {
        Self::Store {
            context: context.into(),
            source,
        }
    }

    /// Response status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BadRequest,
            Self::NotFound { .. } => StatusCode::NotFound,
            Self::Encoding(_) | Self::Store { .. } | Self::Serialization(_) => {
                StatusCode::Internal
            }
        }
    }
}

pub type ContractResult<T> = Result<T, ContractError>;
