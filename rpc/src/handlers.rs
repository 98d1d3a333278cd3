//! RPC request handlers.

use axum::extract::{Path, State};
use campaign_payout::PayoutClient;
use campaign_types::PayoutRequest;
use std::sync::Arc;
use tracing::{error, info};

use crate::RpcState;

/// `POST /api/campaign/verify/{influencerAddress}`
///
/// Pays the fixed reward to the address in the path. There is no view-count
/// check; calling this endpoint is the trigger. The address is passed through
/// untouched and only fails if it cannot be encoded into the contract call.
pub async fn verify_and_pay<P: PayoutClient>(
    State(state): State<Arc<RpcState<P>>>,
    Path(influencer_address): Path<String>,
) -> String {
    info!(recipient = %influencer_address, "payout requested");
    let request = PayoutRequest::fixed_reward(influencer_address.as_str());

    match state.payout_client.trigger_reward(request).await {
        Ok(receipt) => {
            info!(
                recipient = %influencer_address,
                tx_hash = ?receipt.tx_hash,
                "payout triggered"
            );
            format!("Success! Payout triggered for: {influencer_address}")
        }
        Err(e) => {
            error!(recipient = %influencer_address, "payout failed: {e}");
            format!("Error: {e}")
        }
    }
}
