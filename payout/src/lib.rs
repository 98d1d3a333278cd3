//! Payout client for the campaign contract.
//!
//! [`PayoutClient`] is the seam between the HTTP handler and the chain. The
//! production implementation, [`EthPayoutClient`], is built once at startup
//! and shared read-only for the lifetime of the process.

pub mod client;
pub mod config;

pub use client::{EthPayoutClient, PayoutClient};
pub use config::Web3Config;
