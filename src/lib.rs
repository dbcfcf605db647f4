//! Quasar Client: library root
//!
//! Typed client for the Quasar fast-exit liquidity pool: ABI-encoded
//! calls, local or node-side signing, and on-chain reads, plus the
//! faucet and balance-polling helpers used by integration runs.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
pub mod usecases;

pub use adapters::chain::{Account, RpcProvider};
pub use domain::{Currency, QuasarError, Result, TxOptions, TxReceipt};
pub use usecases::{QuasarClient, TxSender};
