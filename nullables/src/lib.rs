//! Nullable infrastructure for deterministic testing.
//!
//! The chain is the only external dependency of the payout service, and it is
//! abstracted behind [`campaign_payout::PayoutClient`]. This crate provides a
//! test-friendly implementation that:
//! - Records payouts instead of signing and sending them
//! - Returns deterministic transaction hashes
//! - Can be told to fail, to exercise error paths
//!
//! Usage: hand a [`NullPayoutClient`] to the router instead of the real client.

pub mod payout;

pub use payout::NullPayoutClient;
