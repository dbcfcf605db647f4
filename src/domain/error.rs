//! Error type shared by every client operation.
//!
//! The wrapper never recovers from any of these internally; each variant
//! maps to one failure class a caller may want to branch on.

use thiserror::Error;

use super::tx::TxReceipt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QuasarError>;

/// Failure kinds surfaced by the Quasar client.
#[derive(Debug, Error)]
pub enum QuasarError {
    /// An argument could not be turned into ABI call data.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The private key was malformed or could not sign the transaction.
    #[error("signing error: {0}")]
    Signing(String),

    /// The node was unreachable or refused the request.
    #[error("network error: {0}")]
    Network(String),

    /// The transaction was mined but the contract rejected it.
    #[error("transaction {} reverted (block {:?})", .receipt.tx_hash, .receipt.block_number)]
    Reverted {
        /// Receipt as reported by the node.
        receipt: TxReceipt,
    },

    /// The node rejected the call before mining because it would revert
    /// (gas estimation, `eth_call` or submission).
    #[error("execution reverted: {message}")]
    ExecutionReverted {
        /// Error message returned by the node.
        message: String,
    },

    /// Return data did not match the expected ABI.
    #[error("decode error: {0}")]
    Decode(String),

    /// A bounded poll ran out of attempts.
    #[error("timed out waiting for {what} after {attempts} attempts")]
    Timeout {
        /// What was being waited on.
        what: String,
        /// Attempts made before giving up.
        attempts: u32,
    },

    /// Invalid configuration or an unmet harness precondition.
    #[error("configuration error: {0}")]
    Config(String),
}

impl QuasarError {
    /// Wrap any displayable transport error as a network failure.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    /// Whether this error came from the contract rejecting the call,
    /// either in a mined receipt or while the node simulated it.
    pub const fn is_revert(&self) -> bool {
        matches!(self, Self::Reverted { .. } | Self::ExecutionReverted { .. })
    }
}
