//! ERC-20 reads shared by the pool client and the test harness.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;

use crate::adapters::chain::abi::IERC20;
use crate::domain::error::{QuasarError, Result};
use crate::ports::chain_client::ChainClient;

/// Issue a read-only call and decode its return value.
pub(crate) async fn call_view<C, T>(chain: &C, to: Address, call: &T) -> Result<T::Return>
where
    C: ChainClient + ?Sized,
    T: SolCall,
{
    let out = chain.call(to, call.abi_encode().into()).await?;
    T::abi_decode_returns(&out)
        .map_err(|e| QuasarError::Decode(format!("{}: {e}", T::SIGNATURE)))
}

/// Read-only view of one ERC-20 token.
#[derive(Clone)]
pub struct Erc20<C: ChainClient> {
    chain: Arc<C>,
    token: Address,
}

impl<C: ChainClient> Erc20<C> {
    pub const fn new(chain: Arc<C>, token: Address) -> Self {
        Self { chain, token }
    }

    pub async fn balance_of(&self, owner: Address) -> Result<U256> {
        call_view(self.chain.as_ref(), self.token, &IERC20::balanceOfCall { owner }).await
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        call_view(
            self.chain.as_ref(),
            self.token,
            &IERC20::allowanceCall { owner, spender },
        )
        .await
    }
}
