//! Transaction-level value types.
//!
//! `TxOptions` is what a caller hands to every state-changing operation,
//! `TxDetails` is the descriptor the wrapper assembles from it, and
//! `TxReceipt` is what comes back once the node has mined it.

use std::fmt;

use alloy::primitives::{Address, B256, Bytes, U256};

/// Per-call sender options for state-changing operations.
///
/// `gas` and `gas_price` default to node estimates when left unset.
/// Without a `private_key` the node is asked to sign for `from`.
#[derive(Clone, Default)]
pub struct TxOptions {
    /// Sending account.
    pub from: Address,
    /// Hex-encoded secp256k1 key controlling `from`.
    pub private_key: Option<String>,
    /// Gas limit.
    pub gas: Option<u64>,
    /// Gas price in wei.
    pub gas_price: Option<u128>,
}

impl TxOptions {
    /// Options for a node-managed (unlocked) account.
    pub fn new(from: Address) -> Self {
        Self {
            from,
            ..Self::default()
        }
    }

    /// Options for a locally signing account.
    pub fn signed(from: Address, private_key: impl Into<String>) -> Self {
        Self {
            from,
            private_key: Some(private_key.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }

    #[must_use]
    pub const fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = Some(gas_price);
        self
    }
}

// Keeps the key out of logs.
impl fmt::Debug for TxOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxOptions")
            .field("from", &self.from)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("gas", &self.gas)
            .field("gas_price", &self.gas_price)
            .finish()
    }
}

/// A fully described transaction, ready for signing or node submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxDetails {
    pub from: Address,
    pub to: Address,
    /// ABI-encoded call data.
    pub data: Bytes,
    /// Native coin attached, in wei.
    pub value: Option<U256>,
    pub gas: Option<u64>,
    pub gas_price: Option<u128>,
    pub nonce: Option<u64>,
    pub chain_id: Option<u64>,
}

impl TxDetails {
    /// Build a descriptor for a call from `opts.from` to `to`.
    pub fn new(opts: &TxOptions, to: Address, data: impl Into<Bytes>) -> Self {
        Self {
            from: opts.from,
            to,
            data: data.into(),
            value: None,
            gas: opts.gas,
            gas_price: opts.gas_price,
            nonce: None,
            chain_id: None,
        }
    }

    /// Attach native coin to the transaction.
    #[must_use]
    pub const fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    /// First four bytes of the call data, if present.
    pub fn selector(&self) -> Option<[u8; 4]> {
        self.data.get(..4).and_then(|s| s.try_into().ok())
    }
}

/// Outcome of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_hash: B256,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    /// Execution status reported by the node.
    pub success: bool,
}
