//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces the use cases require from the outside world.
//! Adapters implement these traits.
//!
//! Port categories:
//! - `ChainClient`: JSON-RPC access to an Ethereum node

pub mod chain_client;

pub use chain_client::ChainClient;
