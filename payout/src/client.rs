//! Submitting `sendPrize` transactions.

use campaign_contract::{CampaignContract, StaticGas};
use campaign_types::{PayoutError, PayoutReceipt, PayoutRequest};
use ethers::{
    middleware::{NonceManagerMiddleware, SignerMiddleware},
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, BlockNumber},
};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info};

use crate::Web3Config;

/// Pays a campaign reward to one recipient.
///
/// Implementations must be safe to share across concurrent requests.
pub trait PayoutClient: Send + Sync + 'static {
    /// Submit a payout and return once the node has accepted the transaction.
    ///
    /// Does not wait for the transaction to be mined.
    fn trigger_reward(
        &self,
        request: PayoutRequest,
    ) -> impl Future<Output = Result<PayoutReceipt, PayoutError>> + Send;
}

/// Nonces are counted locally after the first lookup, so consecutive payouts
/// get consecutive nonces even before earlier ones are mined.
type SignedClient = NonceManagerMiddleware<SignerMiddleware<Provider<Http>, LocalWallet>>;

/// [`PayoutClient`] backed by a JSON-RPC node and a local signing key.
pub struct EthPayoutClient {
    contract: CampaignContract<SignedClient>,
}

impl EthPayoutClient {
    /// Build the provider, signer and contract binding.
    ///
    /// Talks to the node only when `chain_id` is not configured.
    pub async fn connect(config: &Web3Config) -> Result<Self, PayoutError> {
        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
            .map_err(|e| PayoutError::Config(format!("invalid rpc url {}: {e}", config.rpc_url)))?;

        let key = config
            .private_key
            .as_ref()
            .ok_or_else(|| PayoutError::Config("private key is not set".into()))?;
        let wallet = key
            .expose()
            .parse::<LocalWallet>()
            .map_err(|e| PayoutError::Config(format!("invalid private key: {e}")))?;

        let contract_address = config
            .contract_address
            .as_deref()
            .ok_or_else(|| PayoutError::Config("contract address is not set".into()))?
            .trim()
            .parse::<Address>()
            .map_err(|e| PayoutError::Config(format!("invalid contract address: {e}")))?;

        let chain_id = match config.chain_id {
            Some(id) => id,
            None => provider
                .get_chainid()
                .await
                .map_err(|e| PayoutError::Connection(e.to_string()))?
                .as_u64(),
        };

        let wallet = wallet.with_chain_id(chain_id);
        let signer = wallet.address();
        let signed = SignerMiddleware::new(provider, wallet);
        let client = Arc::new(NonceManagerMiddleware::new(signed, signer));
        let contract = CampaignContract::new(contract_address, client);

        info!(
            contract = ?contract_address,
            signer = ?signer,
            chain_id,
            "connected to campaign contract"
        );

        Ok(Self { contract })
    }

    pub fn contract_address(&self) -> Address {
        self.contract.address()
    }

    pub fn signer_address(&self) -> Address {
        self.contract.client().inner().address()
    }
}

impl PayoutClient for EthPayoutClient {
    async fn trigger_reward(&self, request: PayoutRequest) -> Result<PayoutReceipt, PayoutError> {
        let recipient = request.recipient.parse()?;
        info!(recipient = %request.recipient, amount = %request.amount, "processing reward");

        // The first nonce is read at `pending` and counted locally from there.
        let call = StaticGas::SEPOLIA
            .apply(self.contract.send_prize(recipient, request.amount.raw()))
            .block(BlockNumber::Pending);
        debug!(tx = ?call.tx, "submitting sendPrize");

        let tx_hash = call
            .send()
            .await
            .map_err(|e| PayoutError::Submission(e.to_string()))?
            .tx_hash();

        info!(tx_hash = ?tx_hash, "payout transaction submitted");
        Ok(PayoutReceipt {
            recipient,
            amount: request.amount,
            tx_hash,
        })
    }
}
