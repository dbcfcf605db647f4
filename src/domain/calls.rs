//! Argument records for the pool's state-changing entry points.
//!
//! Field order mirrors the contract's positional parameters. Byte fields
//! carry RLP-encoded child-chain transactions and Merkle proofs exactly as
//! the child chain hands them out; the client never inspects them.

use alloy::primitives::{Address, Bytes, U256};

use super::currency::Currency;

/// `obtainTicket` arguments. The bond is attached automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObtainTicket {
    pub utxo_pos: U256,
    pub rlp_output_creation_tx: Bytes,
    pub output_creation_tx_inclusion_proof: Bytes,
}

/// `claim` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub utxo_pos: U256,
    pub utxo_pos_quasar_owner: U256,
    pub rlp_tx_to_quasar_owner: Bytes,
    pub tx_to_quasar_owner_inclusion_proof: Bytes,
}

/// `ifeClaim` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfeClaim {
    pub utxo_pos: U256,
    pub in_flight_claim_tx: Bytes,
}

/// `challengeIfeClaim` arguments.
///
/// The contract also expects `keccak256(sender)` as a trailing argument;
/// the client appends it from the transaction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeIfeClaim {
    pub utxo_pos: U256,
    pub rlp_challenge_tx: Bytes,
    pub challenge_tx_input_index: u16,
    pub challenge_tx_witness: Bytes,
    pub other_input_index: u16,
    pub other_input_creation_tx: Bytes,
}

/// `repayOwedToken` arguments. Currency defaults to the native coin, in
/// which case `amount` is also attached as value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepayOwedToken {
    pub amount: U256,
    pub currency: Currency,
}

impl RepayOwedToken {
    pub fn eth(amount: U256) -> Self {
        Self {
            amount,
            currency: Currency::Eth,
        }
    }

    pub fn token(token: Address, amount: U256) -> Self {
        Self {
            amount,
            currency: Currency::Erc20(token),
        }
    }
}

/// Per-token record kept by the pool (`tokenData(address)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenData {
    /// Pool-share token minted to suppliers.
    pub q_token: Address,
    pub exchange_rate: U256,
    pub total_supplied: U256,
    pub pool_supply: U256,
    /// Fee charged per ticket.
    pub quasar_fee: U256,
    pub pool_fee: U256,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repay_defaults_to_eth() {
        let repay = RepayOwedToken {
            amount: U256::from(10),
            ..Default::default()
        };
        assert!(repay.currency.is_native());
        assert!(!RepayOwedToken::token(Address::repeat_byte(3), U256::from(1)).currency.is_native());
    }
}
