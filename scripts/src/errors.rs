//! Definitions of errors that can occur during the execution of the token deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the token deploy scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The selected network is not present in the network table
    UnknownNetwork(String),
    /// Error parsing the network configuration file
    ConfigParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// The connected endpoint reports a different chain ID than configured
    ChainIdMismatch(String),
    /// No compiled artifact exists for the requested template
    TemplateNotFound(String),
    /// Error parsing a compilation artifact
    ArtifactParsing(String),
    /// Error constructing constructor calldata
    CalldataConstruction(String),
    /// Error submitting or confirming a deployment
    ContractDeployment(String),
    /// Error calling a method on a deployed contract
    ContractInteraction(String),
    /// Error reading a file
    ReadFile(String),
    /// Error writing a file or the deployment report
    WriteFile(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownNetwork(s) => write!(f, "unknown network: {}", s),
            ScriptError::ConfigParsing(s) => write!(f, "error parsing config: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ChainIdMismatch(s) => write!(f, "chain ID mismatch: {}", s),
            ScriptError::TemplateNotFound(s) => write!(f, "template not found: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::ReadFile(s) => write!(f, "error reading file: {}", s),
            ScriptError::WriteFile(s) => write!(f, "error writing file: {}", s),
        }
    }
}

impl Error for ScriptError {}
