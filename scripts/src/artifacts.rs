//! Resolution of contract templates into deployable compilation artifacts.
//!
//! Artifacts are the JSON files emitted by the contract toolchain. Both the
//! Hardhat layout (`artifacts/contracts/Milk.sol/Milk.json`, bytecode as a hex
//! string) and the Foundry layout (`out/Milk.sol/Milk.json`, bytecode under
//! `bytecode.object`) are understood.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    hex,
    json_abi::JsonAbi,
    primitives::{Bytes, U256},
};
use serde_json::Value;
use tracing::debug;

use crate::{
    constants::{ARTIFACT_EXTENSION, BUILD_INFO_DIR},
    errors::ScriptError,
    utils::encode_constructor_args,
};

/// A compiled contract template
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// The template name
    pub name: String,
    /// The contract ABI
    pub abi: JsonAbi,
    /// The contract creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from the contents of its JSON file
    pub fn from_json(name: &str, contents: &str) -> Result<Self, ScriptError> {
        let artifact: Value = serde_json::from_str(contents)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{name}: {e}")))?;

        let abi_json = artifact
            .get("abi")
            .cloned()
            .ok_or_else(|| ScriptError::ArtifactParsing(format!("{name}: missing `abi`")))?;
        let abi: JsonAbi = serde_json::from_value(abi_json)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{name}: {e}")))?;

        // Hardhat stores the bytecode as a string, Foundry nests it under `object`
        let bytecode_hex = match artifact.get("bytecode") {
            Some(Value::String(s)) => s.as_str(),
            Some(Value::Object(obj)) => obj.get("object").and_then(Value::as_str).unwrap_or(""),
            _ => "",
        };
        let bytecode = hex::decode(bytecode_hex)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{name}: {e}")))?;
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{name}: artifact has no bytecode, is it an interface or abstract contract?"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            abi,
            bytecode: bytecode.into(),
        })
    }

    /// The number of inputs the contract's constructor takes
    pub fn constructor_input_count(&self) -> usize {
        self.abi.constructor.as_ref().map_or(0, |c| c.inputs.len())
    }

    /// Build the init code for deploying this contract, i.e. the creation
    /// bytecode followed by the ABI-encoded constructor arguments
    pub fn init_code(&self, constructor_args: &[U256]) -> Result<Bytes, ScriptError> {
        let expected = self.constructor_input_count();
        if expected != constructor_args.len() {
            return Err(ScriptError::CalldataConstruction(format!(
                "{} constructor takes {} argument(s), got {}",
                self.name,
                expected,
                constructor_args.len()
            )));
        }

        let mut init_code = self.bytecode.to_vec();
        init_code.extend(encode_constructor_args(constructor_args));
        Ok(init_code.into())
    }
}

/// A directory tree of compilation artifacts
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store reading artifacts from under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a template name into its compiled artifact
    pub fn resolve(&self, template_name: &str) -> Result<ContractArtifact, ScriptError> {
        let file_name = format!("{template_name}.{ARTIFACT_EXTENSION}");
        let mut matches = Vec::new();
        collect_artifact_files(&self.root, &file_name, &mut matches)?;
        matches.sort();

        let path = match matches.as_slice() {
            [] => {
                return Err(ScriptError::TemplateNotFound(format!(
                    "{template_name} (searched {})",
                    self.root.display()
                )))
            }
            [path] => path,
            _ => {
                let paths: Vec<String> = matches.iter().map(|p| p.display().to_string()).collect();
                return Err(ScriptError::ArtifactParsing(format!(
                    "multiple artifacts named {template_name}: {}",
                    paths.join(", ")
                )));
            }
        };

        debug!(template = template_name, path = %path.display(), "resolved artifact");
        let contents = fs::read_to_string(path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;
        ContractArtifact::from_json(template_name, &contents)
    }
}

/// Recursively collect the files under `dir` named `file_name`, skipping build info
fn collect_artifact_files(
    dir: &Path,
    file_name: &str,
    matches: &mut Vec<PathBuf>,
) -> Result<(), ScriptError> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| ScriptError::ReadFile(e.to_string()))? {
        let path = entry.map_err(|e| ScriptError::ReadFile(e.to_string()))?.path();
        if path.is_dir() {
            if path.file_name().is_some_and(|name| name == BUILD_INFO_DIR) {
                continue;
            }
            collect_artifact_files(&path, file_name, matches)?;
        } else if path.file_name().is_some_and(|name| name == file_name) {
            matches.push(path);
        }
    }

    Ok(())
}
