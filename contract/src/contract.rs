//! Contract entry point: dispatch one request against a host state store.
//!
//! `Contract::invoke` implements the per-request lifecycle:
//!
//! 1. Parse the request into an [`Operation`] (no store access)
//! 2. Run the operation against the store passed in by the host
//! 3. Convert the outcome into a [`Response`]
//!
//! Each invocation logs one structured event on entry and one on outcome.

use statekv_hostapi::StateStore;
use statekv_primitives::codec::{decode_request, encode_response};
use statekv_primitives::{Request, Response, StatusCode};
use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};
use crate::handlers;
use crate::observability::{log_debug, log_error, log_info, log_warn};
use crate::operation::Operation;
use crate::scanner::{self, RangeScanner};

/// The key-value contract.
///
/// Stateless between invocations: every call receives the store explicitly
/// and nothing is cached.
#[derive(Debug, Clone)]
pub struct Contract {
    config: ContractConfig,
    scanner: RangeScanner,
}

impl Default for Contract {
    fn default() -> Self {
        Self::new(ContractConfig::default())
    }
}

impl Contract {
    pub fn new(config: ContractConfig) -> Self {
        let scanner = RangeScanner::new(config.log_entries);
        Self { config, scanner }
    }

    /// Instantiation hook. Holds no state, so it always succeeds.
    pub fn init(&self) -> Response {
        log_info!(event = "init", contract = %self.config.name);
        Response::success(Vec::new())
    }

    /// Handle one request.
    pub fn invoke(&self, store: &mut dyn StateStore, request: &Request) -> Response {
        log_info!(
            event = "invoke",
            contract = %self.config.name,
            op = %request.function,
            arg_count = request.args.len()
        );

        let operation = match Operation::parse(request) {
            Ok(operation) => operation,
            Err(err) => return self.reject(&request.function, &request.args, err),
        };
        log_debug!(event = "operation", contract = %self.config.name, operation = ?operation);

        match self.execute(store, &operation) {
            Ok(payload) => {
                log_info!(
                    event = "invoke_succeeded",
                    contract = %self.config.name,
                    op = operation.name(),
                    payload_len = payload.len()
                );
                Response::success(payload)
            }
            Err(err) => self.reject(operation.name(), &request.args, err),
        }
    }

    /// Handle one request in its wire encoding, returning the encoded response.
    ///
    /// Undecodable input produces an encoded 400 response. A response too
    /// large to encode is replaced by an encoded 500.
    pub fn invoke_encoded(&self, store: &mut dyn StateStore, request: &[u8]) -> Vec<u8> {
        let response = match decode_request(request) {
            Ok(request) => self.invoke(store, &request),
            Err(err) => self.reject(
                "",
                &[],
                ContractError::InvalidArgument(format!("malformed request: {}", err)),
            ),
        };
        match encode_response(&response) {
            Ok(bytes) => bytes,
            Err(err) => {
                log_error!(event = "encode_failed", contract = %self.config.name, error = %err);
                let fallback = Response::with_status(
                    StatusCode::Internal,
                    format!("unable to encode the response: {}", err),
                );
                // A short message and an empty payload always fit the prefixes.
                encode_response(&fallback).unwrap_or_default()
            }
        }
    }

    fn execute(&self, store: &mut dyn StateStore, operation: &Operation) -> ContractResult<Vec<u8>> {
        match operation {
            Operation::Put {
                namespace,
                key,
                value,
            } => {
                handlers::put(store, namespace, key, value.as_bytes())?;
                Ok(Vec::new())
            }
            Operation::Get { namespace, key } => handlers::get(store, namespace, key),
            Operation::Del { namespace, key } => {
                handlers::del(store, namespace, key)?;
                Ok(Vec::new())
            }
            Operation::GetByRange { from, to } => {
                let entries = self.scanner.scan(store, from, to)?;
                scanner::render(&entries)
            }
        }
    }

    fn reject(&self, op: &str, args: &[String], err: ContractError) -> Response {
        let name = &self.config.name;
        let status = err.status();
        match status {
            StatusCode::BadRequest => {
                log_warn!(event = "invalid_request", contract = %name, op, args = ?args, error = %err)
            }
            StatusCode::NotFound => {
                log_warn!(event = "not_found", contract = %name, op, args = ?args, error = %err)
            }
            _ => log_error!(event = "store_failed", contract = %name, op, args = ?args, error = %err),
        }
        Response::with_status(status, err.to_string())
    }
}
