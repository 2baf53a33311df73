//! Constants used in the deploy scripts

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The initial supply passed to the `Milk` constructor, in whole tokens
pub const MILK_INITIAL_SUPPLY: u128 = 10_000_000_000;

/// The initial supply passed to the `MNT` constructor, in whole tokens
pub const MNT_INITIAL_SUPPLY: u128 = 1_000_000_000_000;

/// The initial supply passed to the `YachtCoin` constructor, in whole tokens
pub const YACHT_COIN_INITIAL_SUPPLY: u128 = 100_000_000;

/// The environment variable holding the deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// The environment variable selecting the target network
pub const NETWORK_ENV_VAR: &str = "NETWORK";

/// The network used when none is selected
pub const DEFAULT_NETWORK: &str = "localhost";

/// The directory compiled contract artifacts are read from by default
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The directory inside the artifacts tree holding compiler build info,
/// which never contains contract artifacts
pub const BUILD_INFO_DIR: &str = "build-info";

/// The extension of a contract artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The default `tracing` filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// The deployments key in the deployments file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// Name of the AIIGO testnet
pub const AIIGO_NETWORK: &str = "aiigo";

/// RPC URL of the AIIGO testnet
pub const AIIGO_RPC_URL: &str = "https://testnet.aiigo.org";

/// Chain ID of the AIIGO testnet
pub const AIIGO_CHAIN_ID: u64 = 38888;

/// RPC URL of a local development node
pub const LOCALHOST_RPC_URL: &str = "http://127.0.0.1:8545";

/// Optimizer runs the token contracts are compiled with
pub const OPTIMIZER_RUNS: u32 = 200;

/// Solidity compiler versions the token contracts are compiled with
pub const SOLC_VERSIONS: [&str; 2] = ["0.7.6", "0.8.19"];
