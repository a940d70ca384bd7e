use crate::constants::{
    FAILURE_EXIT_CODE, NOT_FOUND_MESSAGE, UNEXPECTED_ERROR_MESSAGE, UNREACHABLE_MESSAGE,
};
use log::error;
use std::fmt::Display;
use thiserror::Error;

/// Canonical result of a single request, independent of the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
    Unreachable,
    UnexpectedError,
}

impl Outcome {
    /// User-facing message for failed outcomes
    /// A successful request prints its payload instead
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::Success => None,
            Outcome::NotFound => Some(NOT_FOUND_MESSAGE),
            Outcome::Unreachable => Some(UNREACHABLE_MESSAGE),
            Outcome::UnexpectedError => Some(UNEXPECTED_ERROR_MESSAGE),
        }
    }

    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            _ => FAILURE_EXIT_CODE,
        }
    }
}

/// Failure of a stat/read invocation, already classified at the backend boundary.
/// The payload strings are diagnostics for the log, never shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("server unreachable: {0}")]
    Unreachable(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl FetchError {
    pub fn outcome(&self) -> Outcome {
        match self {
            FetchError::NotFound(_) => Outcome::NotFound,
            FetchError::Unreachable(_) => Outcome::Unreachable,
            FetchError::Unexpected(_) | FetchError::Output(_) => Outcome::UnexpectedError,
        }
    }
}

/// Helper for not found responses
pub fn not_found<E: Display>(msg: &str, e: E) -> FetchError {
    error!("{}: {}", msg, e);
    FetchError::NotFound(format!("{}: {}", msg, e))
}

/// Helper for connection and channel failures
pub fn unreachable<E: Display>(msg: &str, e: E) -> FetchError {
    error!("{}: {}", msg, e);
    FetchError::Unreachable(format!("{}: {}", msg, e))
}

/// Helper for everything else that went wrong while talking to a backend
pub fn unexpected<E: Display>(msg: &str, e: E) -> FetchError {
    error!("{}: {}", msg, e);
    FetchError::Unexpected(format!("{}: {}", msg, e))
}

/// Helper for failures of the output sink
pub fn output_failed(msg: &str, e: std::io::Error) -> FetchError {
    error!("{}: {}", msg, e);
    FetchError::Output(e)
}
