//! The single value that flows through a payout: request in, receipt out.

use ethers::types::{Address, TxHash};

use crate::{RecipientAddress, WeiAmount};

/// A request to pay one recipient.
///
/// Lives for one HTTP request only; nothing about it is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoutRequest {
    pub recipient: RecipientAddress,
    pub amount: WeiAmount,
}

impl PayoutRequest {
    /// Build a request for the fixed campaign reward.
    ///
    /// This is the only constructor the request handler uses, so the amount
    /// can never come from caller input.
    pub fn fixed_reward(recipient: impl Into<RecipientAddress>) -> Self {
        Self {
            recipient: recipient.into(),
            amount: WeiAmount::REWARD,
        }
    }
}

/// Acknowledgment that the node accepted a payout transaction.
///
/// The transaction is submitted, not necessarily mined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoutReceipt {
    pub recipient: Address,
    pub amount: WeiAmount,
    pub tx_hash: TxHash,
}
