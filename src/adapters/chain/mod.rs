//! Chain Adapters - Root Chain Interaction Layer
//!
//! Provides on-chain access via alloy-rs for:
//! - HTTP RPC provider implementing the `ChainClient` port
//! - Quasar and ERC-20 ABI bindings
//! - Local transaction signing and ephemeral accounts
//! - Gas limit / price resolution

pub mod abi;
pub mod gas;
pub mod provider;
pub mod signer;

pub use gas::GasOracle;
pub use provider::RpcProvider;
pub use signer::{Account, LocalSigner};
