//! Ethereum RPC Provider - alloy-rs Connection Management
//!
//! Manages the HTTP connection to the root chain node and implements the
//! `ChainClient` port on top of it. Validates RPC connectivity (and the
//! chain id, when one is configured) at startup.
//!
//! alloy's `ProviderBuilder` returns a deeply nested filler type; it is
//! erased into a `DynProvider` so the adapter's type stays nameable.
//!
//! Nodes report a call that would revert as JSON-RPC error code 3 (geth,
//! anvil) or as a message starting with "execution reverted" (ganache,
//! older clients). Both map to `ExecutionReverted`; every other RPC
//! failure is a `Network` error.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::transports::TransportError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::config::NetworkConfig;
use crate::domain::error::{QuasarError, Result};
use crate::domain::tx::{TxDetails, TxReceipt};
use crate::ports::chain_client::ChainClient;

/// Shared root-chain RPC provider backed by alloy-rs.
///
/// Cheap to clone; all clones share one HTTP connection pool.
#[derive(Clone)]
pub struct RpcProvider {
    /// The alloy HTTP provider (type-erased).
    provider: DynProvider,
}

impl RpcProvider {
    /// Connect to the node named in `config` and query its chain id.
    ///
    /// Fails with `Config` if the URL does not parse or the node reports
    /// a chain id other than `config.expected_chain_id`.
    #[instrument(skip_all, fields(rpc_url = %config.eth_node))]
    pub async fn connect(config: &NetworkConfig) -> Result<Self> {
        let url = config
            .eth_node
            .parse()
            .map_err(|e| QuasarError::Config(format!("invalid eth_node URL: {e}")))?;

        let provider = ProviderBuilder::new().connect_http(url).erased();

        let chain_id = provider.get_chain_id().await.map_err(QuasarError::network)?;

        if let Some(expected) = config.expected_chain_id {
            if chain_id != expected {
                return Err(QuasarError::Config(format!(
                    "expected chain_id={expected}, node reports {chain_id}"
                )));
            }
        }

        info!(chain_id, "Connected to root chain RPC");

        Ok(Self::from_provider(provider))
    }

    /// Wrap an already-built provider (custom transports, mocked clients).
    pub const fn from_provider(provider: DynProvider) -> Self {
        Self { provider }
    }
}

/// JSON-RPC error code for "execution reverted".
const EXECUTION_REVERTED_CODE: i64 = 3;

/// Classify an RPC failure: contract reverts stay distinct from transport
/// and node errors.
fn rpc_error(context: &str, err: &TransportError) -> QuasarError {
    if let Some(payload) = err.as_error_resp() {
        if payload.code == EXECUTION_REVERTED_CODE
            || payload.message.starts_with("execution reverted")
        {
            return QuasarError::ExecutionReverted {
                message: payload.message.to_string(),
            };
        }
    }
    QuasarError::Network(format!("{context}: {err}"))
}

/// Translate a transaction descriptor into an alloy request.
pub(crate) fn to_request(tx: &TxDetails) -> TransactionRequest {
    let mut request = TransactionRequest::default()
        .with_from(tx.from)
        .with_to(tx.to)
        .with_input(tx.data.clone());

    if let Some(value) = tx.value {
        request = request.with_value(value);
    }
    if let Some(gas) = tx.gas {
        request = request.with_gas_limit(gas);
    }
    if let Some(gas_price) = tx.gas_price {
        request = request.with_gas_price(gas_price);
    }
    if let Some(nonce) = tx.nonce {
        request = request.with_nonce(nonce);
    }
    if let Some(chain_id) = tx.chain_id {
        request = request.with_chain_id(chain_id);
    }
    request
}

fn to_receipt(receipt: &TransactionReceipt) -> TxReceipt {
    TxReceipt {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        gas_used: receipt.gas_used,
        success: receipt.status(),
    }
}

#[async_trait]
impl ChainClient for RpcProvider {
    async fn chain_id(&self) -> Result<u64> {
        self.provider.get_chain_id().await.map_err(QuasarError::network)
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        self.provider
            .get_balance(address)
            .await
            .map_err(QuasarError::network)
    }

    async fn transaction_count(&self, address: Address) -> Result<u64> {
        self.provider
            .get_transaction_count(address)
            .pending()
            .await
            .map_err(QuasarError::network)
    }

    async fn gas_price(&self) -> Result<u128> {
        self.provider.get_gas_price().await.map_err(QuasarError::network)
    }

    async fn estimate_gas(&self, tx: &TxDetails) -> Result<u64> {
        self.provider
            .estimate_gas(to_request(tx))
            .await
            .map_err(|e| rpc_error("gas estimation failed", &e))
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        let request = TransactionRequest::default().with_to(to).with_input(data);
        self.provider
            .call(request)
            .await
            .map_err(|e| rpc_error("eth_call failed", &e))
    }

    #[instrument(skip_all, fields(raw_len = raw.len()))]
    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxReceipt> {
        let pending = self
            .provider
            .send_raw_transaction(&raw)
            .await
            .map_err(|e| rpc_error("raw transaction rejected", &e))?;

        debug!(tx_hash = %pending.tx_hash(), "Raw transaction accepted by node");

        let receipt = pending.get_receipt().await.map_err(QuasarError::network)?;
        Ok(to_receipt(&receipt))
    }

    #[instrument(skip_all, fields(from = %tx.from, to = %tx.to))]
    async fn send_transaction(&self, tx: &TxDetails) -> Result<TxReceipt> {
        let pending = self
            .provider
            .send_transaction(to_request(tx))
            .await
            .map_err(|e| rpc_error("transaction rejected", &e))?;

        debug!(tx_hash = %pending.tx_hash(), "Transaction accepted by node");

        let receipt = pending.get_receipt().await.map_err(QuasarError::network)?;
        Ok(to_receipt(&receipt))
    }

    async fn is_healthy(&self) -> bool {
        self.provider.get_block_number().await.is_ok()
    }
}
