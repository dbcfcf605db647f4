//! Shared test doubles for the `ChainClient` port.
//!
//! - `MockChain`: mockall mock for per-call expectations.
//! - `SimulatedChain`: an in-memory pool with ETH, one ERC-20 and
//!   1:1 qToken minting, for end-to-end supply/withdraw flows.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use alloy::primitives::{address, Address, Bytes, B256, U256};
use alloy::sol_types::{SolCall, SolValue};
use mockall::mock;

use quasar_client::adapters::chain::abi::{IERC20, IQuasar};
use quasar_client::domain::tx::{TxDetails, TxReceipt};
use quasar_client::ports::chain_client::ChainClient;
use quasar_client::{QuasarError, Result};

// ---- Mock Definitions ----

mock! {
    pub Chain {}

    #[async_trait::async_trait]
    impl ChainClient for Chain {
        async fn chain_id(&self) -> Result<u64>;
        async fn balance(&self, address: Address) -> Result<U256>;
        async fn transaction_count(&self, address: Address) -> Result<u64>;
        async fn gas_price(&self) -> Result<u128>;
        async fn estimate_gas(&self, tx: &TxDetails) -> Result<u64>;
        async fn call(&self, to: Address, data: Bytes) -> Result<Bytes>;
        async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxReceipt>;
        async fn send_transaction(&self, tx: &TxDetails) -> Result<TxReceipt>;
        async fn is_healthy(&self) -> bool;
    }
}

pub const QUASAR: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
pub const TOKEN: Address = address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512");
pub const Q_ETH: Address = address!("9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0");
pub const Q_TOKEN: Address = address!("Cf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9");
pub const OWNER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

pub fn ok_receipt() -> TxReceipt {
    TxReceipt {
        tx_hash: B256::repeat_byte(0x11),
        block_number: Some(1),
        gas_used: 21_000,
        success: true,
    }
}

/// A mock that fills gas parameters with fixed values.
pub fn mock_with_gas() -> MockChain {
    let mut chain = MockChain::new();
    chain.expect_estimate_gas().returning(|_| Ok(100_000));
    chain.expect_gas_price().returning(|| Ok(1_000_000_000));
    chain
}

/// Encoded `tokenData` return tuple.
pub fn token_data_return(q_token: Address, fee: U256) -> Bytes {
    (q_token, U256::from(1), U256::ZERO, U256::ZERO, fee, U256::from(3))
        .abi_encode_params()
        .into()
}

// ---- Simulated pool ----

#[derive(Default, Clone)]
struct SimState {
    eth: HashMap<Address, U256>,
    tokens: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    /// (qToken contract, holder) → balance
    shares: HashMap<(Address, Address), U256>,
    tx_count: u64,
}

/// In-memory stand-in for a node with a deployed pool and token.
///
/// Transactions are accepted only through `send_transaction` (node-side
/// signing); gas is free. Without an explicit gas limit a failing call is
/// caught by estimation, with one it is mined and reverts in the receipt.
pub struct SimulatedChain {
    state: Mutex<SimState>,
    pub bond: U256,
    pub fee: U256,
}

impl SimulatedChain {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SimState::default()),
            bond: U256::from(100_000_000_000_000u64),
            fee: U256::from(500),
        }
    }

    pub fn mint_eth(&self, to: Address, amount: U256) {
        *self.state.lock().unwrap().eth.entry(to).or_default() += amount;
    }

    pub fn mint_tokens(&self, to: Address, amount: U256) {
        *self.state.lock().unwrap().tokens.entry(to).or_default() += amount;
    }

    pub fn eth_of(&self, who: Address) -> U256 {
        self.state.lock().unwrap().eth.get(&who).copied().unwrap_or_default()
    }

    pub fn tokens_of(&self, who: Address) -> U256 {
        self.state.lock().unwrap().tokens.get(&who).copied().unwrap_or_default()
    }

    fn q_token_for(currency: Address) -> Address {
        if currency == Address::ZERO { Q_ETH } else { Q_TOKEN }
    }

    fn execute(state: &mut SimState, tx: &TxDetails) -> std::result::Result<(), String> {
        let value = tx.value.unwrap_or_default();
        let from_eth = state.eth.get(&tx.from).copied().unwrap_or_default();
        if from_eth < value {
            return Err("insufficient funds for value".into());
        }

        if tx.to == QUASAR {
            let data = tx.data.as_ref();
            if let Ok(_call) = IQuasar::addEthCapacityCall::abi_decode(data) {
                *state.eth.entry(tx.from).or_default() -= value;
                *state.eth.entry(QUASAR).or_default() += value;
                *state.shares.entry((Q_ETH, tx.from)).or_default() += value;
                return Ok(());
            }
            if let Ok(call) = IQuasar::addTokenCapacityCall::abi_decode(data) {
                let allowance = state.allowances.entry((tx.from, QUASAR)).or_default();
                if *allowance < call.amount {
                    return Err("allowance exceeded".into());
                }
                let held = state.tokens.entry(tx.from).or_default();
                if *held < call.amount {
                    return Err("token balance exceeded".into());
                }
                *held -= call.amount;
                *state.allowances.entry((tx.from, QUASAR)).or_default() -= call.amount;
                *state.tokens.entry(QUASAR).or_default() += call.amount;
                *state.shares.entry((Q_TOKEN, tx.from)).or_default() += call.amount;
                return Ok(());
            }
            if let Ok(call) = IQuasar::withdrawFundsCall::abi_decode(data) {
                let q_token = Self::q_token_for(call.token);
                let shares = state.shares.entry((q_token, tx.from)).or_default();
                if *shares < call.amount {
                    return Err("not enough qTokens".into());
                }
                *shares -= call.amount;
                let ledger = if call.token == Address::ZERO { &mut state.eth } else { &mut state.tokens };
                *ledger.entry(QUASAR).or_default() -= call.amount;
                *ledger.entry(tx.from).or_default() += call.amount;
                return Ok(());
            }
            return Err("unknown pool method".into());
        }

        if tx.to == TOKEN {
            let data = tx.data.as_ref();
            if let Ok(call) = IERC20::approveCall::abi_decode(data) {
                state.allowances.insert((tx.from, call.spender), call.amount);
                return Ok(());
            }
            if let Ok(call) = IERC20::transferCall::abi_decode(data) {
                let held = state.tokens.entry(tx.from).or_default();
                if *held < call.amount {
                    return Err("token balance exceeded".into());
                }
                *held -= call.amount;
                *state.tokens.entry(call.to).or_default() += call.amount;
                return Ok(());
            }
            return Err("unknown token method".into());
        }

        // Plain value transfer.
        *state.eth.entry(tx.from).or_default() -= value;
        *state.eth.entry(tx.to).or_default() += value;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ChainClient for SimulatedChain {
    async fn chain_id(&self) -> Result<u64> {
        Ok(1337)
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        Ok(self.eth_of(address))
    }

    async fn transaction_count(&self, _address: Address) -> Result<u64> {
        Ok(self.state.lock().unwrap().tx_count)
    }

    async fn gas_price(&self) -> Result<u128> {
        Ok(0)
    }

    /// Dry-runs the transaction on a copy of the state, like a node
    /// simulating it: a failing call is reported as a revert up front.
    async fn estimate_gas(&self, tx: &TxDetails) -> Result<u64> {
        let mut scratch = self.state.lock().unwrap().clone();
        match Self::execute(&mut scratch, tx) {
            Ok(()) => Ok(100_000),
            Err(reason) if reason.starts_with("insufficient funds") => {
                Err(QuasarError::Network(reason))
            }
            Err(reason) => Err(QuasarError::ExecutionReverted {
                message: format!("execution reverted: {reason}"),
            }),
        }
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        let state = self.state.lock().unwrap();
        let data = data.as_ref();

        let out = if to == QUASAR {
            if IQuasar::bondValueCall::abi_decode(data).is_ok() {
                self.bond.abi_encode()
            } else if IQuasar::safeBlockMarginCall::abi_decode(data).is_ok() {
                U256::from(10).abi_encode()
            } else if IQuasar::quasarOwnerCall::abi_decode(data).is_ok() {
                OWNER.abi_encode()
            } else if let Ok(call) = IQuasar::tokenDataCall::abi_decode(data) {
                token_data_return(Self::q_token_for(call.token), self.fee).to_vec()
            } else {
                return Err(QuasarError::Network("execution reverted".into()));
            }
        } else if let Ok(call) = IERC20::balanceOfCall::abi_decode(data) {
            let balance = if to == TOKEN {
                state.tokens.get(&call.owner).copied()
            } else {
                state.shares.get(&(to, call.owner)).copied()
            };
            balance.unwrap_or_default().abi_encode()
        } else if let Ok(call) = IERC20::allowanceCall::abi_decode(data) {
            state
                .allowances
                .get(&(call.owner, call.spender))
                .copied()
                .unwrap_or_default()
                .abi_encode()
        } else {
            return Err(QuasarError::Network("execution reverted".into()));
        };

        Ok(out.into())
    }

    async fn send_raw_transaction(&self, _raw: Bytes) -> Result<TxReceipt> {
        Err(QuasarError::Network("simulator only accepts node-signed transactions".into()))
    }

    async fn send_transaction(&self, tx: &TxDetails) -> Result<TxReceipt> {
        let mut state = self.state.lock().unwrap();
        state.tx_count += 1;
        let tx_hash = B256::from(U256::from(state.tx_count));

        match Self::execute(&mut state, tx) {
            Ok(()) => Ok(TxReceipt {
                tx_hash,
                block_number: Some(state.tx_count),
                gas_used: 50_000,
                success: true,
            }),
            Err(reason) if reason.starts_with("insufficient funds") => {
                Err(QuasarError::Network(reason))
            }
            Err(_) => Ok(TxReceipt {
                tx_hash,
                block_number: Some(state.tx_count),
                gas_used: 50_000,
                success: false,
            }),
        }
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}
