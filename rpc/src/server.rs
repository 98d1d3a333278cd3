//! Axum-based HTTP server.

use axum::{routing::post, Router};
use campaign_payout::PayoutClient;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::{error::RpcError, handlers};

/// Shared, read-only state handed to every request.
pub struct RpcState<P> {
    /// Built once at startup; never replaced.
    pub payout_client: Arc<P>,
}

impl<P> RpcState<P> {
    pub fn new(payout_client: Arc<P>) -> Self {
        Self { payout_client }
    }
}

/// Build the router. Any origin may call the API.
pub fn router<P: PayoutClient>(state: Arc<RpcState<P>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/campaign/verify/:influencer_address",
            post(handlers::verify_and_pay::<P>),
        )
        .layer(cors)
        .with_state(state)
}

pub struct RpcServer<P> {
    pub addr: SocketAddr,
    pub state: Arc<RpcState<P>>,
}

impl<P: PayoutClient> RpcServer<P> {
    pub fn with_state(addr: SocketAddr, state: Arc<RpcState<P>>) -> Self {
        Self { addr, state }
    }

    /// Serve until `shutdown` resolves, then finish in-flight requests.
    pub async fn start<F>(self, shutdown: F) -> Result<(), RpcError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("HTTP server listening on {}", listener.local_addr()?);

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))
    }
}
