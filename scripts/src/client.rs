//! The network-facing side of the deploy scripts.
//!
//! [`TokenClient`] is everything the deploy flow needs from a chain: submit a
//! contract creation and wait for it to confirm, then read ERC-20 metadata.
//! [`RpcClient`] implements it over JSON-RPC with `alloy`.

use std::str::FromStr;

use alloy::{
    network::{ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    constants::NUM_DEPLOY_CONFIRMATIONS, errors::ScriptError, solidity::IERC20Metadata,
};

/// The chain operations used to deploy a token and read it back
#[async_trait]
pub trait TokenClient: Send + Sync {
    /// Submit a contract creation transaction with the given init code and
    /// wait for it to be confirmed, returning the new contract's address
    async fn deploy(&self, init_code: Bytes) -> Result<Address, ScriptError>;

    /// Read the token's name
    async fn name(&self, token: Address) -> Result<String, ScriptError>;

    /// Read the token's symbol
    async fn symbol(&self, token: Address) -> Result<String, ScriptError>;

    /// Read the token's decimals
    async fn decimals(&self, token: Address) -> Result<u8, ScriptError>;

    /// Read the token's raw total supply
    async fn total_supply(&self, token: Address) -> Result<U256, ScriptError>;
}

/// A [`TokenClient`] talking to a node over HTTP JSON-RPC
#[derive(Clone)]
pub struct RpcClient {
    provider: DynProvider,
    confirmations: u64,
}

impl RpcClient {
    /// Wrap a provider, waiting for the default number of confirmations on deploy
    pub fn new(provider: DynProvider) -> Self {
        Self {
            provider,
            confirmations: NUM_DEPLOY_CONFIRMATIONS,
        }
    }
}

/// Sets up the client with which to deploy and query contracts.
///
/// Without a private key the client has no signer attached; deployments
/// then fail when the node refuses the unsigned transaction. If the network
/// declares a chain ID, the endpoint must report the same one.
pub async fn setup_client(
    rpc_url: &str,
    priv_key: Option<&str>,
    expected_chain_id: Option<u64>,
) -> Result<RpcClient, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let provider = match priv_key {
        Some(priv_key) => {
            let signer = PrivateKeySigner::from_str(priv_key)
                .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
            info!(deployer = %signer.address(), "using deployer account");
            DynProvider::new(ProviderBuilder::new().wallet(signer).connect_http(url))
        }
        None => {
            warn!("no private key provided, deployments will not be signed");
            DynProvider::new(ProviderBuilder::new().connect_http(url))
        }
    };

    let chain_id = check_chain_id(&provider, expected_chain_id).await?;
    info!(rpc_url, chain_id, "connected to network");

    Ok(RpcClient::new(provider))
}

/// Query the chain ID reported by the endpoint, failing if it differs from
/// `expected` when one is given
pub async fn check_chain_id(
    provider: &DynProvider,
    expected: Option<u64>,
) -> Result<u64, ScriptError> {
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    match expected {
        Some(expected) if expected != chain_id => Err(ScriptError::ChainIdMismatch(format!(
            "expected {expected}, endpoint reports {chain_id}"
        ))),
        _ => Ok(chain_id),
    }
}

/// Extract the created contract's address from a deployment receipt
fn deployed_address(receipt: &impl ReceiptResponse) -> Result<Address, ScriptError> {
    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "transaction {} reverted",
            receipt.transaction_hash()
        )));
    }

    receipt.contract_address().ok_or_else(|| {
        ScriptError::ContractDeployment(format!(
            "receipt of {} has no contract address",
            receipt.transaction_hash()
        ))
    })
}

#[async_trait]
impl TokenClient for RpcClient {
    async fn deploy(&self, init_code: Bytes) -> Result<Address, ScriptError> {
        let tx = TransactionRequest::default().with_deploy_code(init_code);

        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        info!(tx_hash = %pending_tx.tx_hash(), "deployment transaction submitted");

        let receipt = pending_tx
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        info!(block = ?receipt.block_number(), "deployment transaction mined");

        deployed_address(&receipt)
    }

    async fn name(&self, token: Address) -> Result<String, ScriptError> {
        IERC20Metadata::new(token, &self.provider)
            .name()
            .call()
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }

    async fn symbol(&self, token: Address) -> Result<String, ScriptError> {
        IERC20Metadata::new(token, &self.provider)
            .symbol()
            .call()
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }

    async fn decimals(&self, token: Address) -> Result<u8, ScriptError> {
        IERC20Metadata::new(token, &self.provider)
            .decimals()
            .call()
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }

    async fn total_supply(&self, token: Address) -> Result<U256, ScriptError> {
        IERC20Metadata::new(token, &self.provider)
            .totalSupply()
            .call()
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, U64},
        providers::{DynProvider, ProviderBuilder},
        rpc::types::TransactionReceipt,
        transports::mock::Asserter,
    };
    use serde_json::{json, Value};

    use super::{check_chain_id, deployed_address};
    use crate::errors::ScriptError;

    fn mocked_provider(asserter: &Asserter) -> DynProvider {
        DynProvider::new(ProviderBuilder::new().connect_mocked_client(asserter.clone()))
    }

    fn receipt(status: &str, contract_address: Value) -> TransactionReceipt {
        serde_json::from_value(json!({
            "type": "0x2",
            "status": status,
            "cumulativeGasUsed": "0x5208",
            "logs": [],
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionHash": format!("0x{}", "ab".repeat(32)),
            "transactionIndex": "0x0",
            "blockHash": format!("0x{}", "cd".repeat(32)),
            "blockNumber": "0x1",
            "gasUsed": "0x5208",
            "effectiveGasPrice": "0x3b9aca00",
            "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "to": null,
            "contractAddress": contract_address,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_chain_id_matches() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(38888u64));

        let chain_id = check_chain_id(&mocked_provider(&asserter), Some(38888)).await.unwrap();
        assert_eq!(chain_id, 38888);
    }

    #[tokio::test]
    async fn test_chain_id_mismatch() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(31337u64));

        let err = check_chain_id(&mocked_provider(&asserter), Some(38888)).await.unwrap_err();
        assert!(matches!(err, ScriptError::ChainIdMismatch(_)));
    }

    #[tokio::test]
    async fn test_any_chain_id_accepted_without_expectation() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(31337u64));

        assert_eq!(check_chain_id(&mocked_provider(&asserter), None).await.unwrap(), 31337);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("connection refused");

        let err = check_chain_id(&mocked_provider(&asserter), None).await.unwrap_err();
        assert!(matches!(err, ScriptError::ClientInitialization(_)));
    }

    #[test]
    fn test_successful_receipt() {
        let receipt = receipt("0x1", json!("0x5fbdb2315678afecb367f032d93f642f64180aa3"));
        assert_eq!(
            deployed_address(&receipt).unwrap(),
            address!("5fbdb2315678afecb367f032d93f642f64180aa3")
        );
    }

    #[test]
    fn test_reverted_receipt() {
        let receipt = receipt("0x0", json!("0x5fbdb2315678afecb367f032d93f642f64180aa3"));
        let err = deployed_address(&receipt).unwrap_err();
        assert!(matches!(err, ScriptError::ContractDeployment(msg) if msg.contains("reverted")));
    }

    #[test]
    fn test_receipt_without_contract_address() {
        let receipt = receipt("0x1", Value::Null);
        let err = deployed_address(&receipt).unwrap_err();
        assert!(matches!(err, ScriptError::ContractDeployment(_)));
    }
}
