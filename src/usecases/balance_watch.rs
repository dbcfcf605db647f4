//! Balance Watcher - Bounded Polling for Balance Finality
//!
//! Integration runs fund accounts and must wait until the node reflects
//! the transfer before continuing. The watcher re-reads a balance at a
//! fixed interval until it equals the target or the attempt budget runs
//! out. A failed read counts as an attempt; there is no other way to
//! cancel a wait.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use tracing::{debug, info, instrument, warn};

use super::erc20::Erc20;
use crate::config::PollingConfig;
use crate::domain::error::{QuasarError, Result};
use crate::ports::chain_client::ChainClient;

/// Fixed-interval, bounded retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 60,
        }
    }
}

impl From<&PollingConfig> for PollPolicy {
    fn from(config: &PollingConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.interval_ms),
            max_attempts: config.max_attempts,
        }
    }
}

/// Waits for account balances to reach expected values.
pub struct BalanceWatcher<C: ChainClient> {
    chain: Arc<C>,
    policy: PollPolicy,
}

impl<C: ChainClient> BalanceWatcher<C> {
    pub const fn new(chain: Arc<C>, policy: PollPolicy) -> Self {
        Self { chain, policy }
    }

    /// Wait until `address` holds exactly `expected` wei.
    #[instrument(skip(self), fields(address = %address, expected = %expected))]
    pub async fn wait_for_eth_balance_eq(&self, address: Address, expected: U256) -> Result<U256> {
        let what = format!("ETH balance of {address} == {expected}");
        self.poll_until_eq(&what, expected, || self.chain.balance(address))
            .await
    }

    /// Wait until `address` holds exactly `expected` units of `token`.
    #[instrument(skip(self), fields(address = %address, token = %token, expected = %expected))]
    pub async fn wait_for_erc20_balance_eq(
        &self,
        address: Address,
        token: Address,
        expected: U256,
    ) -> Result<U256> {
        let erc20 = Erc20::new(Arc::clone(&self.chain), token);
        let what = format!("ERC20 {token} balance of {address} == {expected}");
        self.poll_until_eq(&what, expected, || erc20.balance_of(address))
            .await
    }

    async fn poll_until_eq<F, Fut>(&self, what: &str, expected: U256, mut read: F) -> Result<U256>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<U256>>,
    {
        // Always read at least once, whatever the policy says.
        let max_attempts = self.policy.max_attempts.max(1);
        for attempt in 1..=max_attempts {
            match read().await {
                Ok(current) if current == expected => {
                    info!(attempt, "Balance reached target");
                    return Ok(current);
                }
                Ok(current) => {
                    debug!(attempt, current = %current, "Balance not yet at target");
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Balance read failed");
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.policy.interval).await;
            }
        }

        Err(QuasarError::Timeout {
            what: what.to_string(),
            attempts: max_attempts,
        })
    }
}
