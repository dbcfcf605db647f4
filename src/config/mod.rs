//! Configuration Module - TOML-based Client Configuration
//!
//! Loads and validates configuration from `config.toml`, with environment
//! variable overrides for anything deployment-specific (node URL, contract
//! addresses, faucet key). Contract addresses are always configured,
//! never hardcoded.

pub mod loader;

use alloy::primitives::Address;
use anyhow::Context;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Logging setup.
  #[serde(default)]
  pub client: ClientConfig,
  /// Root chain node.
  #[serde(default)]
  pub network: NetworkConfig,
  /// Deployed contract addresses.
  #[serde(default)]
  pub contracts: ContractConfig,
  /// Transaction defaults.
  #[serde(default)]
  pub transactions: TransactionConfig,
  /// Balance polling used by integration runs.
  #[serde(default)]
  pub polling: PollingConfig,
  /// Faucet used by integration runs.
  #[serde(default)]
  pub faucet: FaucetConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Emit JSON lines instead of human-readable output.
  #[serde(default)]
  pub json_logs: bool,
}

/// Root chain node configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
  /// HTTP JSON-RPC endpoint.
  #[serde(default = "default_eth_node")]
  pub eth_node: String,
  /// Refuse to connect if the node reports a different chain id.
  pub expected_chain_id: Option<u64>,
}

/// Contract addresses, as hex strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractConfig {
  /// Quasar pool contract.
  #[serde(default)]
  pub quasar: String,
  /// ERC-20 token used by token-capacity flows.
  pub erc20: Option<String>,
}

/// Defaults applied to outgoing transactions.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionConfig {
  /// Gas price (wei) used when the node cannot quote one.
  #[serde(default = "default_fallback_gas_price")]
  pub fallback_gas_price_wei: u64,
}

/// Bounded balance polling.
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
  /// Delay between attempts (milliseconds).
  #[serde(default = "default_poll_interval")]
  pub interval_ms: u64,
  /// Attempts before giving up.
  #[serde(default = "default_poll_attempts")]
  pub max_attempts: u32,
}

/// Faucet account configuration.
#[derive(Clone, Default, Deserialize)]
pub struct FaucetConfig {
  /// Hex private key of the pre-funded faucet account.
  pub private_key: Option<String>,
  /// Minimum faucet balance (wei, decimal string) required to start.
  #[serde(default)]
  pub min_eth_balance_wei: Option<String>,
}

// Keeps the key out of logs.
impl std::fmt::Debug for FaucetConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FaucetConfig")
      .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
      .field("min_eth_balance_wei", &self.min_eth_balance_wei)
      .finish()
  }
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      log_level: default_log_level(),
      json_logs: false,
    }
  }
}

impl Default for NetworkConfig {
  fn default() -> Self {
    Self {
      eth_node: default_eth_node(),
      expected_chain_id: None,
    }
  }
}

impl Default for TransactionConfig {
  fn default() -> Self {
    Self {
      fallback_gas_price_wei: default_fallback_gas_price(),
    }
  }
}

impl Default for PollingConfig {
  fn default() -> Self {
    Self {
      interval_ms: default_poll_interval(),
      max_attempts: default_poll_attempts(),
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_eth_node() -> String {
  "http://127.0.0.1:8545".to_string()
}

const fn default_fallback_gas_price() -> u64 {
  1_000_000_000 // 1 gwei
}

const fn default_poll_interval() -> u64 {
  1_000
}

const fn default_poll_attempts() -> u32 {
  60
}

impl AppConfig {
  /// Parsed Quasar contract address.
  pub fn quasar_address(&self) -> anyhow::Result<Address> {
    parse_address("contracts.quasar", &self.contracts.quasar)
  }

  /// Parsed ERC-20 test token address, if configured.
  pub fn erc20_address(&self) -> anyhow::Result<Option<Address>> {
    self
      .contracts
      .erc20
      .as_deref()
      .map(|s| parse_address("contracts.erc20", s))
      .transpose()
  }
}

fn parse_address(field: &str, value: &str) -> anyhow::Result<Address> {
  value
    .trim()
    .parse()
    .with_context(|| format!("{field} is not a valid address: {value:?}"))
}
