//! Domain layer - value types for talking to the Quasar pool.
//!
//! Nothing here performs I/O. Types are plain data built on alloy
//! primitives so they can cross the port boundary unchanged.

pub mod calls;
pub mod currency;
pub mod error;
pub mod tx;

pub use calls::{ChallengeIfeClaim, Claim, IfeClaim, ObtainTicket, RepayOwedToken, TokenData};
pub use currency::{Currency, ETH_CURRENCY};
pub use error::{QuasarError, Result};
pub use tx::{TxDetails, TxOptions, TxReceipt};
