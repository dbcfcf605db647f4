//! Gas Oracle - Gas Limit and Price Resolution
//!
//! Fills in whatever the caller left unset on a transaction descriptor:
//! the gas limit comes from `eth_estimateGas`, the gas price from
//! `eth_gasPrice`. When the node cannot quote a price the oracle falls
//! back to a fixed price (1 gwei unless configured) and logs a warning.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::domain::error::Result;
use crate::domain::tx::TxDetails;
use crate::ports::chain_client::ChainClient;

/// Gas price used when the node cannot quote one (1 gwei).
pub const DEFAULT_FALLBACK_GAS_PRICE: u128 = 1_000_000_000;

/// Resolves gas parameters for outgoing transactions.
pub struct GasOracle<C: ChainClient> {
    /// Shared chain client.
    chain: Arc<C>,
    /// Gas price in wei used when `eth_gasPrice` fails.
    fallback_gas_price: u128,
}

impl<C: ChainClient> GasOracle<C> {
    /// Create a new gas oracle with the 1 gwei fallback.
    pub const fn new(chain: Arc<C>) -> Self {
        Self {
            chain,
            fallback_gas_price: DEFAULT_FALLBACK_GAS_PRICE,
        }
    }

    #[must_use]
    pub const fn with_fallback_gas_price(mut self, wei: u128) -> Self {
        self.fallback_gas_price = wei;
        self
    }

    /// Current gas price in wei, or the fallback if the node fails.
    #[instrument(skip(self))]
    pub async fn gas_price(&self) -> u128 {
        match self.chain.gas_price().await {
            Ok(price) => {
                debug!(gas_gwei = to_gwei(price), "Gas price quoted by node");
                price
            }
            Err(e) => {
                warn!(
                    error = %e,
                    fallback_gwei = to_gwei(self.fallback_gas_price),
                    "Error getting gas price, using fallback"
                );
                self.fallback_gas_price
            }
        }
    }

    /// Fill `gas` and `gas_price` on `tx` where unset.
    ///
    /// Estimation errors are returned as-is: a failing estimate usually
    /// means the call would revert.
    pub async fn fill(&self, tx: &mut TxDetails) -> Result<()> {
        if tx.gas.is_none() {
            let estimate = self.chain.estimate_gas(tx).await?;
            debug!(gas = estimate, "Gas estimated");
            tx.gas = Some(estimate);
        }
        if tx.gas_price.is_none() {
            tx.gas_price = Some(self.gas_price().await);
        }
        Ok(())
    }
}

/// Convert wei to gwei for logging (1 gwei = 1e9 wei).
#[allow(clippy::cast_precision_loss)]
fn to_gwei(wei: u128) -> f64 {
    wei as f64 / 1_000_000_000.0
}
