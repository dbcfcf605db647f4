//! Token identifiers used as keys into the pool's per-token state.
//!
//! The pool contract indexes everything by address, with the zero address
//! standing in for the native coin.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;

use super::error::QuasarError;

/// Sentinel address the pool uses for the native coin.
pub const ETH_CURRENCY: Address = Address::ZERO;

/// A pool currency: the native coin or an ERC-20 token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    /// Native coin (ETH), keyed by the zero address.
    #[default]
    Eth,
    /// ERC-20 token at the given contract address.
    Erc20(Address),
}

impl Currency {
    /// Map a contract-side address key back to a currency.
    pub fn from_address(address: Address) -> Self {
        if address == ETH_CURRENCY {
            Self::Eth
        } else {
            Self::Erc20(address)
        }
    }

    /// Address key used in contract calls.
    pub const fn address(&self) -> Address {
        match self {
            Self::Eth => ETH_CURRENCY,
            Self::Erc20(address) => *address,
        }
    }

    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Eth)
    }
}

impl From<Address> for Currency {
    fn from(address: Address) -> Self {
        Self::from_address(address)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eth => write!(f, "ETH"),
            Self::Erc20(address) => write!(f, "ERC20({address})"),
        }
    }
}

impl FromStr for Currency {
    type Err = QuasarError;

    /// Accepts `ETH` (any case) or a hex contract address.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("eth") {
            return Ok(Self::Eth);
        }
        s.parse::<Address>()
            .map(Self::from_address)
            .map_err(|e| QuasarError::Encoding(format!("invalid currency address {s:?}: {e}")))
    }
}
