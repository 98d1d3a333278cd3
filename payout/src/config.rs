//! Connection settings for the Ethereum node and contract.

use campaign_types::SecretKey;
use serde::{Deserialize, Serialize};

/// The `[web3]` section of the service configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct Web3Config {
    /// JSON-RPC endpoint of an Ethereum-compatible node.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Private key that signs payout transactions. Never written back out.
    #[serde(default, skip_serializing)]
    pub private_key: Option<SecretKey>,

    /// Address of the deployed campaign contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,

    /// Chain id for EIP-155 signing. Queried from the node when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

fn default_rpc_url() -> String {
    "http://127.0.0.1:8545".to_string()
}

impl Default for Web3Config {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            private_key: None,
            contract_address: None,
            chain_id: None,
        }
    }
}
