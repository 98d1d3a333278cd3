//! Fundamental types for campaign payouts.
//!
//! This crate defines the values shared across every other crate in the workspace:
//! the caller-supplied recipient address, the fixed reward amount, the payout
//! request/receipt pair, the signing key wrapper and the common error type.

pub mod address;
pub mod amount;
pub mod error;
pub mod keys;
pub mod payout;

pub use address::RecipientAddress;
pub use amount::WeiAmount;
pub use error::PayoutError;
pub use keys::SecretKey;
pub use payout::{PayoutReceipt, PayoutRequest};

pub use ethers::types::{Address, TxHash, U256};
