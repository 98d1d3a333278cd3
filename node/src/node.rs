//! Service lifecycle: connect once, serve, drain.

use campaign_payout::{EthPayoutClient, PayoutClient};
use campaign_rpc::{RpcServer, RpcState};
use std::sync::Arc;

use crate::{NodeConfig, NodeError, ShutdownController};

/// The running payout service.
///
/// The payout client is built before the HTTP listener binds and is shared
/// read-only by every request for the life of the process.
pub struct CampaignNode<P = EthPayoutClient> {
    config: NodeConfig,
    payout_client: Arc<P>,
    shutdown: ShutdownController,
}

impl CampaignNode<EthPayoutClient> {
    /// Connect to the Ethereum node and bind the contract.
    ///
    /// Fails fast on missing or malformed web3 settings, so a misconfigured
    /// service never starts accepting payout requests.
    pub async fn new(config: NodeConfig) -> Result<Self, NodeError> {
        let payout_client = EthPayoutClient::connect(&config.web3).await?;
        Ok(Self::with_client(config, Arc::new(payout_client)))
    }
}

impl<P: PayoutClient> CampaignNode<P> {
    pub fn with_client(config: NodeConfig, payout_client: Arc<P>) -> Self {
        Self {
            config,
            payout_client,
            shutdown: ShutdownController::new(),
        }
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn payout_client(&self) -> &Arc<P> {
        &self.payout_client
    }

    /// Serve HTTP until a shutdown signal, then finish in-flight requests.
    pub async fn start(&self) -> Result<(), NodeError> {
        let state = Arc::new(RpcState::new(Arc::clone(&self.payout_client)));
        let server = RpcServer::with_state(self.config.http_addr(), state);

        tracing::info!("starting campaign payout service on {}", self.config.http_addr());

        let serve = server.start(self.shutdown.signalled());
        tokio::pin!(serve);

        tokio::select! {
            result = &mut serve => return result.map_err(NodeError::from),
            _ = self.shutdown.wait_for_signal() => {}
        }

        tracing::info!("shutdown signal received, draining in-flight requests");
        serve.await?;
        Ok(())
    }

    /// Trigger shutdown programmatically.
    pub fn stop(&self) {
        self.shutdown.shutdown();
    }
}
