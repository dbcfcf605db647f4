//! Faucet - Funding Ephemeral Accounts for Integration Runs
//!
//! A pre-funded account hands out native coin and test tokens to fresh
//! accounts, and takes back what is left once a test is done. Teardown
//! callers are expected to log, not propagate, `return_funds` failures.

use std::sync::Arc;

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use tracing::{info, instrument, warn};

use super::erc20::Erc20;
use super::tx_sender::TxSender;
use crate::adapters::chain::abi::IERC20;
use crate::adapters::chain::signer::Account;
use crate::domain::error::{QuasarError, Result};
use crate::domain::tx::{TxDetails, TxReceipt};
use crate::ports::chain_client::ChainClient;

/// Gas consumed by a plain value transfer.
pub const TRANSFER_GAS: u64 = 21_000;

/// Funds and refunds test accounts from a single faucet account.
pub struct Faucet<C: ChainClient> {
    chain: Arc<C>,
    sender: TxSender<C>,
    account: Account,
    /// Test token handed out by `fund_erc20`, if configured.
    erc20: Option<Address>,
}

impl<C: ChainClient> Faucet<C> {
    pub fn new(chain: Arc<C>, account: Account, erc20: Option<Address>) -> Self {
        let sender = TxSender::new(Arc::clone(&chain));
        Self::with_sender(chain, sender, account, erc20)
    }

    /// Build a faucet that submits through `sender`, e.g. one whose gas
    /// oracle carries the configured fallback price.
    pub const fn with_sender(
        chain: Arc<C>,
        sender: TxSender<C>,
        account: Account,
        erc20: Option<Address>,
    ) -> Self {
        Self {
            chain,
            sender,
            account,
            erc20,
        }
    }

    /// Check the faucet can cover at least `min_eth` wei.
    #[instrument(skip(self), fields(faucet = %self.account.address))]
    pub async fn init(&self, min_eth: U256) -> Result<()> {
        let balance = self.chain.balance(self.account.address).await?;
        if balance < min_eth {
            return Err(QuasarError::Config(format!(
                "faucet {} holds {balance} wei, needs at least {min_eth}",
                self.account.address
            )));
        }

        if let Some(token) = self.erc20 {
            let tokens = Erc20::new(Arc::clone(&self.chain), token)
                .balance_of(self.account.address)
                .await?;
            info!(eth = %balance, erc20 = %tokens, "Faucet ready");
        } else {
            info!(eth = %balance, "Faucet ready");
        }
        Ok(())
    }

    /// Send `amount` wei to `to`.
    #[instrument(skip(self), fields(to = %to, amount = %amount))]
    pub async fn fund_eth(&self, to: Address, amount: U256) -> Result<TxReceipt> {
        let opts = self.account.tx_options().with_gas(TRANSFER_GAS);
        let tx = TxDetails::new(&opts, to, Bytes::new()).with_value(amount);
        self.sender.send_tx(tx, opts.private_key.as_deref()).await
    }

    /// Send `amount` of the configured test token to `to`.
    #[instrument(skip(self), fields(to = %to, amount = %amount))]
    pub async fn fund_erc20(&self, to: Address, amount: U256) -> Result<TxReceipt> {
        let token = self
            .erc20
            .ok_or_else(|| QuasarError::Config("faucet has no ERC20 token configured".into()))?;
        let opts = self.account.tx_options();
        let call = IERC20::transferCall { to, amount };
        let tx = TxDetails::new(&opts, token, call.abi_encode());
        self.sender.send_tx(tx, opts.private_key.as_deref()).await
    }

    /// Send `from`'s remaining test tokens and spare native coin back.
    ///
    /// The ETH refund is the balance minus the transfer's own gas cost;
    /// nothing is sent when the balance cannot cover it.
    #[instrument(skip(self, from), fields(from = %from.address))]
    pub async fn return_funds(&self, from: &Account) -> Result<Vec<TxReceipt>> {
        let mut receipts = Vec::new();
        let opts = from.tx_options();

        if let Some(token) = self.erc20 {
            let tokens = Erc20::new(Arc::clone(&self.chain), token)
                .balance_of(from.address)
                .await?;
            if !tokens.is_zero() {
                let call = IERC20::transferCall {
                    to: self.account.address,
                    amount: tokens,
                };
                let tx = TxDetails::new(&opts, token, call.abi_encode());
                receipts.push(self.sender.send_tx(tx, opts.private_key.as_deref()).await?);
            }
        }

        let balance = self.chain.balance(from.address).await?;
        let gas_price = self.sender.gas_oracle().gas_price().await;
        let fee = U256::from(TRANSFER_GAS) * U256::from(gas_price);

        if balance > fee {
            let refund = balance - fee;
            let opts = opts.with_gas(TRANSFER_GAS).with_gas_price(gas_price);
            let tx = TxDetails::new(&opts, self.account.address, Bytes::new()).with_value(refund);
            receipts.push(self.sender.send_tx(tx, opts.private_key.as_deref()).await?);
            info!(refund = %refund, "Returned funds to faucet");
        } else {
            warn!(balance = %balance, fee = %fee, "Balance too low to cover refund gas");
        }

        Ok(receipts)
    }
}
