//! HTTP API for the campaign payout service.
//!
//! Provides one endpoint:
//! - `POST /api/campaign/verify/{influencerAddress}`: pay the fixed reward
//!
//! Responses are plain text and always `200 OK`; failures are reported in
//! the body as `Error: <message>`.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use server::{router, RpcServer, RpcState};
