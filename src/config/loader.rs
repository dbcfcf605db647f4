//! Configuration Loader - File Loading, Env Overrides and Validation
//!
//! Handles loading `config.toml`, applying environment overrides, and
//! validating the result with clear error messages.
//!
//! Recognised environment variables:
//! - `ETH_NODE`
//! - `QUASAR_CONTRACT_ADDRESS`
//! - `ERC20_CONTRACT_ADDRESS`
//! - `FAUCET_PRIVATE_KEY`
//! - `LOG_LEVEL`

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load, override from env, and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let mut config = parse_config(&content)?;
  apply_env_overrides(&mut config, |key| std::env::var(key).ok());
  validate_config(&config)?;

  info!(
    eth_node = %config.network.eth_node,
    quasar = %config.contracts.quasar,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Build configuration from defaults plus environment variables only.
pub fn load_from_env() -> Result<AppConfig> {
  let mut config = AppConfig::default();
  apply_env_overrides(&mut config, |key| std::env::var(key).ok());
  validate_config(&config)?;
  Ok(config)
}

/// Parse TOML without touching the environment.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  toml::from_str(content).with_context(|| "Failed to parse config.toml")
}

/// Overlay values from `lookup` (normally `std::env::var`).
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
  F: Fn(&str) -> Option<String>,
{
  let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

  if let Some(node) = lookup("ETH_NODE") {
    config.network.eth_node = node;
  }
  if let Some(quasar) = lookup("QUASAR_CONTRACT_ADDRESS") {
    config.contracts.quasar = quasar;
  }
  if let Some(erc20) = lookup("ERC20_CONTRACT_ADDRESS") {
    config.contracts.erc20 = Some(erc20);
  }
  if let Some(key) = lookup("FAUCET_PRIVATE_KEY") {
    config.faucet.private_key = Some(key);
  }
  if let Some(level) = lookup("LOG_LEVEL") {
    config.client.log_level = level;
  }
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.network.eth_node.is_empty(),
    "network.eth_node must not be empty"
  );
  anyhow::ensure!(
    !config.contracts.quasar.is_empty(),
    "contracts.quasar must be set (or QUASAR_CONTRACT_ADDRESS)"
  );
  config.quasar_address()?;
  config.erc20_address()?;

  anyhow::ensure!(
    config.polling.max_attempts > 0,
    "polling.max_attempts must be positive"
  );
  anyhow::ensure!(
    config.transactions.fallback_gas_price_wei > 0,
    "transactions.fallback_gas_price_wei must be positive"
  );

  if let Some(min) = &config.faucet.min_eth_balance_wei {
    min
      .parse::<alloy::primitives::U256>()
      .with_context(|| format!("faucet.min_eth_balance_wei is not a number: {min:?}"))?;
  }

  Ok(())
}
