//! Chain Client Port - Node Interaction Interface
//!
//! The only seam between the Quasar client and an Ethereum node. Every
//! read, estimate, and submission the client performs goes through this
//! trait, which keeps the wrapper testable against mocks and simulated
//! pools.

use alloy::primitives::{Address, Bytes, U256};
use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::tx::{TxDetails, TxReceipt};

/// Minimal JSON-RPC surface required by the client.
///
/// Implementations must not retry on their own; errors surface as
/// `QuasarError::Network` (transport) or `QuasarError::Decode`.
#[async_trait]
pub trait ChainClient: Send + Sync + 'static {
    /// Chain id used for EIP-155 replay protection.
    async fn chain_id(&self) -> Result<u64>;

    /// Native coin balance of `address` in wei.
    async fn balance(&self, address: Address) -> Result<U256>;

    /// Pending nonce for `address`.
    async fn transaction_count(&self, address: Address) -> Result<u64>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> Result<u128>;

    /// Gas the node expects `tx` to consume.
    async fn estimate_gas(&self, tx: &TxDetails) -> Result<u64>;

    /// Read-only `eth_call` against latest state.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes>;

    /// Submit a signed, EIP-2718 encoded transaction and wait for its receipt.
    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxReceipt>;

    /// Ask the node to sign for `tx.from` and wait for the receipt.
    async fn send_transaction(&self, tx: &TxDetails) -> Result<TxReceipt>;

    /// Check if the node connection is healthy.
    async fn is_healthy(&self) -> bool;
}
