use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("payout client error: {0}")]
    Payout(#[from] campaign_types::PayoutError),

    #[error("HTTP server error: {0}")]
    Rpc(#[from] campaign_rpc::RpcError),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
