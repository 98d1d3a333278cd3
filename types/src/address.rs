//! Recipient address as supplied by the caller.

use ethers::types::Address;
use std::fmt;

use crate::PayoutError;

/// The address an influencer asked to be paid at.
///
/// Kept as the raw text from the request path. No format check happens when
/// the value is created; it is only parsed into a 20-byte [`Address`] when the
/// contract call is encoded, so a malformed address fails the payout itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecipientAddress(String);

impl RecipientAddress {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Parse into an account identifier. Accepts hex with or without `0x`,
    /// in any letter case. Checksums are not enforced.
    pub fn parse(&self) -> Result<Address, PayoutError> {
        self.0
            .trim()
            .parse::<Address>()
            .map_err(|e| PayoutError::InvalidAddress(format!("{}: {e}", self.0)))
    }
}

impl fmt::Display for RecipientAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecipientAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for RecipientAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
