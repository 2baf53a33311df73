//! The table of networks the scripts can deploy to.
//!
//! A built-in table covers the AIIGO testnet and a local development node;
//! a TOML file can add networks or override the built-in entries:
//!
//! ```toml
//! [networks.aiigo]
//! url = "https://testnet.aiigo.org"
//! chain_id = 38888
//! ```

use std::{collections::BTreeMap, fs, io::Write, path::Path};

use serde::Deserialize;

use crate::{
    constants::{
        AIIGO_CHAIN_ID, AIIGO_NETWORK, AIIGO_RPC_URL, DEFAULT_NETWORK, LOCALHOST_RPC_URL,
        OPTIMIZER_RUNS, SOLC_VERSIONS,
    },
    errors::ScriptError,
};

/// The connection parameters of a single network
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    /// The RPC endpoint URL
    pub url: String,
    /// The expected chain ID, checked against the endpoint when set
    #[serde(default)]
    pub chain_id: Option<u64>,
}

/// A mapping from network name to connection parameters
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NetworkTable {
    /// The configured networks, keyed by name
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkConfig>,
}

impl Default for NetworkTable {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            AIIGO_NETWORK.to_string(),
            NetworkConfig {
                url: AIIGO_RPC_URL.to_string(),
                chain_id: Some(AIIGO_CHAIN_ID),
            },
        );
        networks.insert(
            DEFAULT_NETWORK.to_string(),
            NetworkConfig {
                url: LOCALHOST_RPC_URL.to_string(),
                chain_id: None,
            },
        );

        Self { networks }
    }
}

impl NetworkTable {
    /// Parse a network table from TOML
    pub fn from_toml(contents: &str) -> Result<Self, ScriptError> {
        toml::from_str(contents).map_err(|e| ScriptError::ConfigParsing(e.to_string()))
    }

    /// Build the network table, layering the entries of the config file at
    /// `path` (if any) over the built-in networks
    pub fn load(path: Option<&Path>) -> Result<Self, ScriptError> {
        let mut table = Self::default();
        if let Some(path) = path {
            let contents =
                fs::read_to_string(path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;
            table.networks.extend(Self::from_toml(&contents)?.networks);
        }

        Ok(table)
    }

    /// Look up a network by name
    pub fn get(&self, name: &str) -> Result<&NetworkConfig, ScriptError> {
        self.networks.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.networks.keys().map(String::as_str).collect();
            ScriptError::UnknownNetwork(format!("{name} (known: {})", known.join(", ")))
        })
    }

    /// Print the network table and the compiler settings the token artifacts
    /// are expected to have been built with
    pub fn write_summary(&self, out: &mut impl Write) -> Result<(), ScriptError> {
        let mut lines = vec!["Networks:".to_string()];
        for (name, network) in &self.networks {
            let chain_id = network.chain_id.map_or("any".to_string(), |id| id.to_string());
            lines.push(format!("  {name}: {} (chain ID: {chain_id})", network.url));
        }
        lines.push("Compiler settings:".to_string());
        for version in SOLC_VERSIONS {
            lines.push(format!("  solc {version}, optimizer enabled, {OPTIMIZER_RUNS} runs"));
        }

        for line in lines {
            writeln!(out, "{line}").map_err(|e| ScriptError::WriteFile(e.to_string()))?;
        }
        Ok(())
    }
}
