//! A stub chain used to drive the deploy flow without a node

use std::{
    collections::HashMap,
    fs,
    path::Path,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};

use alloy::primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use token_scripts::{client::TokenClient, errors::ScriptError};

/// The creation bytecode written into every test artifact
pub const TEST_BYTECODE: [u8; 5] = [0x60, 0x80, 0x60, 0x40, 0x52];

/// The decimals reported by every stub token
pub const TEST_DECIMALS: u8 = 18;

const SUPPLY_CONSTRUCTOR_ABI: &str = r#"[
    {
        "type": "constructor",
        "stateMutability": "nonpayable",
        "inputs": [{ "name": "initialSupply", "type": "uint256", "internalType": "uint256" }]
    },
    {
        "type": "function",
        "name": "totalSupply",
        "stateMutability": "view",
        "inputs": [],
        "outputs": [{ "name": "", "type": "uint256", "internalType": "uint256" }]
    }
]"#;

const NO_ARG_CONSTRUCTOR_ABI: &str = r#"[
    {
        "type": "function",
        "name": "deposit",
        "stateMutability": "payable",
        "inputs": [],
        "outputs": []
    }
]"#;

/// Write Hardhat-style artifacts for the known tokens under `root`
pub fn write_token_artifacts(root: &Path) {
    for template in ["Milk", "MNT", "YachtCoin"] {
        write_artifact(root, template, SUPPLY_CONSTRUCTOR_ABI);
    }
    write_artifact(root, "WAIGO", NO_ARG_CONSTRUCTOR_ABI);
}

fn write_artifact(root: &Path, template: &str, abi: &str) {
    let dir = root.join("contracts").join(format!("{template}.sol"));
    fs::create_dir_all(&dir).unwrap();
    let artifact = format!(
        r#"{{ "_format": "hh-sol-artifact-1", "contractName": "{template}", "abi": {abi}, "bytecode": "0x6080604052" }}"#
    );
    fs::write(dir.join(format!("{template}.json")), artifact).unwrap();
}

/// A chain that accepts (or rejects) deployments in memory.
///
/// Deployed tokens mint their constructor supply scaled by [`TEST_DECIMALS`],
/// like an OpenZeppelin ERC-20 would.
#[derive(Default)]
pub struct StubClient {
    reject_deploy: bool,
    reject_reads: bool,
    nonce: AtomicU64,
    deployments: Mutex<HashMap<Address, Bytes>>,
    submitted: Mutex<Vec<Bytes>>,
}

impl StubClient {
    /// A stub that confirms every deployment
    pub fn new() -> Self {
        Self::default()
    }

    /// A stub whose network rejects every deployment
    pub fn rejecting() -> Self {
        Self {
            reject_deploy: true,
            ..Default::default()
        }
    }

    /// A stub that confirms deployments but fails every contract read
    pub fn failing_reads() -> Self {
        Self {
            reject_reads: true,
            ..Default::default()
        }
    }

    /// The init code of every submitted deployment, in order
    pub fn submitted(&self) -> Vec<Bytes> {
        self.submitted.lock().unwrap().clone()
    }

    fn init_code(&self, token: Address) -> Result<Bytes, ScriptError> {
        if self.reject_reads {
            return Err(ScriptError::ContractInteraction("execution reverted".to_string()));
        }
        self.deployments
            .lock()
            .unwrap()
            .get(&token)
            .cloned()
            .ok_or_else(|| ScriptError::ContractInteraction(format!("no code at {token}")))
    }
}

#[async_trait]
impl TokenClient for StubClient {
    async fn deploy(&self, init_code: Bytes) -> Result<Address, ScriptError> {
        self.submitted.lock().unwrap().push(init_code.clone());
        if self.reject_deploy {
            return Err(ScriptError::ContractDeployment("insufficient funds for gas".to_string()));
        }

        let nonce = self.nonce.fetch_add(1, Ordering::SeqCst);
        let address = Address::left_padding_from(&(nonce + 1).to_be_bytes());
        self.deployments.lock().unwrap().insert(address, init_code);
        Ok(address)
    }

    async fn name(&self, token: Address) -> Result<String, ScriptError> {
        self.init_code(token).map(|_| "Stub Token".to_string())
    }

    async fn symbol(&self, token: Address) -> Result<String, ScriptError> {
        self.init_code(token).map(|_| "STUB".to_string())
    }

    async fn decimals(&self, token: Address) -> Result<u8, ScriptError> {
        self.init_code(token).map(|_| TEST_DECIMALS)
    }

    async fn total_supply(&self, token: Address) -> Result<U256, ScriptError> {
        let init_code = self.init_code(token)?;
        let args = &init_code[TEST_BYTECODE.len()..];
        let whole_tokens = if args.is_empty() { U256::ZERO } else { U256::from_be_slice(args) };
        Ok(whole_tokens * U256::from(10u64).pow(U256::from(TEST_DECIMALS)))
    }
}
