//! Campaign payout service node.
//!
//! The node is the process-level coordinator that:
//! - Loads configuration from TOML
//! - Connects the payout client once, before accepting requests
//! - Serves the HTTP API until SIGINT/SIGTERM
//! - Drains in-flight requests on shutdown

pub mod config;
pub mod error;
pub mod logging;
pub mod node;
pub mod shutdown;

pub use config::NodeConfig;
pub use error::NodeError;
pub use logging::{init_logging, LogFormat};
pub use node::CampaignNode;
pub use shutdown::ShutdownController;
