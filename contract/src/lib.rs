//! Typed binding for the deployed campaign contract.
//!
//! The contract exposes four functions:
//! - `company()`: the brand that funds the campaign
//! - `participants(address)`: whether an address has joined
//! - `participate()`: join the campaign
//! - `sendPrize(address,uint256)`: pay a reward out of the campaign budget
//!
//! The payout service only ever calls `sendPrize`. The rest are bound so the
//! binding matches the deployed ABI.

use ethers::contract::abigen;

pub mod gas;

pub use gas::StaticGas;

abigen!(
    CampaignContract,
    r#"[
        function company() external view returns (address)
        function participants(address) external view returns (bool)
        function participate() external
        function sendPrize(address influencer, uint256 amount) external
    ]"#
);
