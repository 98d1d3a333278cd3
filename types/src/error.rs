//! Top-level error type shared across crates.

use thiserror::Error;

/// Why a payout could not be submitted.
///
/// Callers of the HTTP endpoint never see the variant, only the message.
#[derive(Debug, Error)]
pub enum PayoutError {
    #[error("invalid address {0}")]
    InvalidAddress(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("{0}")]
    Submission(String),
}
