//! Nullable payout client: record payouts without touching a chain.

use campaign_payout::PayoutClient;
use campaign_types::{PayoutError, PayoutReceipt, PayoutRequest, TxHash};
use std::sync::Mutex;

/// A test payout client that records submissions instead of sending them.
///
/// Addresses are parsed exactly as the real client parses them, so malformed
/// input fails the same way. Transaction hashes are `1, 2, 3, ...` in
/// submission order.
pub struct NullPayoutClient {
    /// Every payout "submitted" so far.
    submitted: Mutex<Vec<PayoutReceipt>>,
    /// When set, every call fails with this message and records nothing.
    failure: Mutex<Option<String>>,
}

impl NullPayoutClient {
    pub fn new() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Create a client whose every submission fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        let client = Self::new();
        client.fail_with(Some(message.into()));
        client
    }

    /// Set or clear the failure returned by subsequent submissions.
    pub fn fail_with(&self, message: Option<String>) {
        *self.failure.lock().unwrap() = message;
    }

    /// Get all recorded payouts (for assertions).
    pub fn submitted(&self) -> Vec<PayoutReceipt> {
        self.submitted.lock().unwrap().clone()
    }

    /// Clear all state.
    pub fn reset(&self) {
        self.submitted.lock().unwrap().clear();
        self.failure.lock().unwrap().take();
    }

    fn submit(&self, request: PayoutRequest) -> Result<PayoutReceipt, PayoutError> {
        let recipient = request.recipient.parse()?;
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(PayoutError::Submission(message));
        }

        let mut submitted = self.submitted.lock().unwrap();
        let receipt = PayoutReceipt {
            recipient,
            amount: request.amount,
            tx_hash: TxHash::from_low_u64_be(submitted.len() as u64 + 1),
        };
        submitted.push(receipt.clone());
        Ok(receipt)
    }
}

impl Default for NullPayoutClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PayoutClient for NullPayoutClient {
    async fn trigger_reward(&self, request: PayoutRequest) -> Result<PayoutReceipt, PayoutError> {
        self.submit(request)
    }
}
