//! Transaction Utility - Sign, Submit, Await Receipt
//!
//! Turns a `TxDetails` into a mined transaction. With a private key the
//! transaction is signed locally and submitted raw; without one the node
//! signs for `from`. Gas is filled by the `GasOracle` when unset.
//!
//! Failure classes stay distinct:
//! - malformed key or key/sender mismatch → `Signing`
//! - transport, nonce, or funds problems → `Network`
//! - receipt with failed status → `Reverted`
//!
//! Nothing here retries.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::adapters::chain::gas::GasOracle;
use crate::adapters::chain::signer::LocalSigner;
use crate::domain::error::{QuasarError, Result};
use crate::domain::tx::{TxDetails, TxReceipt};
use crate::ports::chain_client::ChainClient;

/// Signs and submits transactions through a `ChainClient`.
pub struct TxSender<C: ChainClient> {
    chain: Arc<C>,
    gas: GasOracle<C>,
}

impl<C: ChainClient> TxSender<C> {
    pub fn new(chain: Arc<C>) -> Self {
        let gas = GasOracle::new(Arc::clone(&chain));
        Self { chain, gas }
    }

    /// Use a custom gas oracle (e.g. a configured fallback price).
    pub const fn with_gas_oracle(chain: Arc<C>, gas: GasOracle<C>) -> Self {
        Self { chain, gas }
    }

    pub const fn gas_oracle(&self) -> &GasOracle<C> {
        &self.gas
    }

    /// Send `details`, signing with `private_key` when given, and wait for
    /// the receipt.
    #[instrument(
        skip(self, details, private_key),
        fields(
            from = %details.from,
            to = %details.to,
            selector = ?details.selector().map(alloy::hex::encode_prefixed),
            signed = private_key.is_some(),
        )
    )]
    pub async fn send_tx(
        &self,
        mut details: TxDetails,
        private_key: Option<&str>,
    ) -> Result<TxReceipt> {
        // Parse the key before touching the network. The signer itself
        // rejects a key that does not control `from`.
        let signer = private_key.map(LocalSigner::from_private_key).transpose()?;

        self.gas.fill(&mut details).await?;

        let receipt = match signer {
            Some(signer) => {
                details.nonce = Some(self.chain.transaction_count(details.from).await?);
                details.chain_id = Some(self.chain.chain_id().await?);
                let raw = signer.sign(&details).await?;
                self.chain.send_raw_transaction(raw).await?
            }
            None => self.chain.send_transaction(&details).await?,
        };

        if !receipt.success {
            warn!(
                tx_hash = %receipt.tx_hash,
                block = ?receipt.block_number,
                gas_used = receipt.gas_used,
                "Transaction reverted"
            );
            return Err(QuasarError::Reverted { receipt });
        }

        info!(
            tx_hash = %receipt.tx_hash,
            block = ?receipt.block_number,
            gas_used = receipt.gas_used,
            "Transaction mined"
        );
        Ok(receipt)
    }
}
