//! Use Cases Layer - Application Logic
//!
//! Orchestrates domain types with the `ChainClient` port.
//!
//! Use cases:
//! - `TxSender`: sign, submit, and await transactions
//! - `QuasarClient`: typed access to every pool entry point
//! - `Erc20`: token balance and allowance reads
//! - `BalanceWatcher`: bounded polling until a balance settles
//! - `Faucet`: funding and refunding ephemeral test accounts

pub mod balance_watch;
pub mod erc20;
pub mod faucet;
pub mod quasar;
pub mod tx_sender;

pub use balance_watch::{BalanceWatcher, PollPolicy};
pub use erc20::Erc20;
pub use faucet::Faucet;
pub use quasar::QuasarClient;
pub use tx_sender::TxSender;
