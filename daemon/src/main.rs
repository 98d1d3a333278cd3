//! Campaign payout daemon: entry point for running the payout service.

use campaign_node::{CampaignNode, LogFormat, NodeConfig};
use campaign_types::SecretKey;
use clap::{Args, Parser};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "campaign-daemon", about = "Campaign payout HTTP service")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "CAMPAIGN_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Default)]
struct Overrides {
    /// Interface to bind the HTTP server to.
    #[arg(long, env = "CAMPAIGN_LISTEN_ADDR")]
    listen_addr: Option<IpAddr>,

    /// HTTP server port.
    #[arg(long, env = "CAMPAIGN_HTTP_PORT")]
    http_port: Option<u16>,

    /// JSON-RPC endpoint of the Ethereum node.
    #[arg(long, env = "CAMPAIGN_RPC_URL")]
    rpc_url: Option<String>,

    /// Hex private key that signs payouts.
    #[arg(long, env = "CAMPAIGN_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Address of the deployed campaign contract.
    #[arg(long, env = "CAMPAIGN_CONTRACT_ADDRESS")]
    contract_address: Option<String>,

    /// Chain id for transaction signing (queried from the node when unset).
    #[arg(long, env = "CAMPAIGN_CHAIN_ID")]
    chain_id: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CAMPAIGN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CAMPAIGN_LOG_FORMAT")]
    log_format: Option<String>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the payout service.
    Run,
    /// Print the effective configuration (private key omitted) and exit.
    PrintConfig,
}

impl Overrides {
    fn apply(self, config: &mut NodeConfig) {
        if let Some(addr) = self.listen_addr {
            config.listen_addr = addr;
        }
        if let Some(port) = self.http_port {
            config.http_port = port;
        }
        if let Some(url) = self.rpc_url {
            config.web3.rpc_url = url;
        }
        if let Some(key) = self.private_key {
            config.web3.private_key = Some(SecretKey::new(key));
        }
        if let Some(address) = self.contract_address {
            config.web3.contract_address = Some(address);
        }
        if let Some(chain_id) = self.chain_id {
            config.web3.chain_id = Some(chain_id);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
    }
}

fn load_config(path: Option<&PathBuf>, overrides: Overrides) -> anyhow::Result<NodeConfig> {
    let mut config = match path {
        Some(path) => NodeConfig::from_toml_file(path)?,
        None => NodeConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref(), cli.overrides)?;

    match cli.command {
        Command::PrintConfig => {
            print!("{}", config.to_toml_string()?);
        }
        Command::Run => {
            let format: LogFormat = config.log_format.parse()?;
            campaign_node::init_logging(format, &config.log_level)?;
            if let Some(path) = &cli.config {
                tracing::info!("Loaded config from {}", path.display());
            }

            let node = CampaignNode::new(config).await?;
            tracing::info!(
                rpc_url = %node.config().web3.rpc_url,
                signer = ?node.payout_client().signer_address(),
                "payout client ready"
            );

            // Returns once a shutdown signal has stopped the HTTP server.
            node.start().await?;
            tracing::info!("campaign daemon exited cleanly");
        }
    }

    Ok(())
}
