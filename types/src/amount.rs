//! Reward amounts in wei.
//!
//! Amounts are arbitrary-precision unsigned integers (`U256`) in the smallest
//! unit of the native currency, matching the contract's `uint256` parameter.

use ethers::types::U256;
use std::fmt;

/// An amount of wei.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeiAmount(U256);

impl WeiAmount {
    /// The fixed campaign reward: 10^15 wei (0.001 ETH).
    pub const REWARD: Self = Self(U256([1_000_000_000_000_000, 0, 0, 0]));

    pub fn raw(&self) -> U256 {
        self.0
    }
}

impl fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_is_one_thousandth_of_an_ether() {
        assert_eq!(WeiAmount::REWARD.raw(), U256::exp10(15));
        assert_eq!(WeiAmount::REWARD.to_string(), "1000000000000000");
    }
}
