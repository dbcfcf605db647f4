//! Local Signing - Private Keys and Ephemeral Accounts
//!
//! Parses secp256k1 keys, signs legacy (EIP-155) transactions built from a
//! `TxDetails`, and generates throwaway accounts for integration runs.

use alloy::eips::eip2718::Encodable2718;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes};
use alloy::signers::local::PrivateKeySigner;

use super::provider::to_request;
use crate::domain::error::{QuasarError, Result};
use crate::domain::tx::{TxDetails, TxOptions};

/// Signs transactions with a single in-memory key.
#[derive(Clone)]
pub struct LocalSigner {
    signer: PrivateKeySigner,
}

impl LocalSigner {
    /// Parse a hex private key, with or without a `0x` prefix.
    pub fn from_private_key(key: &str) -> Result<Self> {
        let signer = key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|e| QuasarError::Signing(format!("malformed private key: {e}")))?;
        Ok(Self { signer })
    }

    /// Address controlled by this key.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign `tx` and return its EIP-2718 encoding.
    ///
    /// `tx` must be complete: nonce, gas, gas price and chain id set.
    pub async fn sign(&self, tx: &TxDetails) -> Result<Bytes> {
        if tx.from != self.address() {
            return Err(QuasarError::Signing(format!(
                "key controls {} but transaction is from {}",
                self.address(),
                tx.from
            )));
        }

        let wallet = EthereumWallet::from(self.signer.clone());
        let envelope = to_request(tx)
            .build(&wallet)
            .await
            .map_err(|e| QuasarError::Signing(e.to_string()))?;

        Ok(envelope.encoded_2718().into())
    }
}

/// An externally owned account with its key, as used by test runs.
#[derive(Clone)]
pub struct Account {
    pub address: Address,
    /// `0x`-prefixed hex private key.
    pub private_key: String,
}

impl Account {
    /// Generate a fresh random account.
    pub fn random() -> Self {
        Self::from_signer(&PrivateKeySigner::random())
    }

    pub fn from_private_key(key: &str) -> Result<Self> {
        let signer = LocalSigner::from_private_key(key)?;
        Ok(Self::from_signer(&signer.signer))
    }

    fn from_signer(signer: &PrivateKeySigner) -> Self {
        Self {
            address: signer.address(),
            private_key: alloy::hex::encode_prefixed(signer.to_bytes()),
        }
    }

    /// Transaction options that sign locally with this account's key.
    pub fn tx_options(&self) -> TxOptions {
        TxOptions::signed(self.address, self.private_key.clone())
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
