//! Utilities for the deploy scripts.

use std::{fs, io::ErrorKind, path::Path};

use alloy::primitives::{
    utils::{ParseUnits, Unit},
    Address, U256,
};
use alloy_sol_types::SolValue;
use json::JsonValue;

use crate::{constants::DEPLOYMENTS_KEY, errors::ScriptError};

/// Format a raw token amount as a decimal string with `decimals` fractional digits.
///
/// Trailing fractional zeros are trimmed, keeping at least one digit after the
/// point, so `10^21` with 18 decimals renders as `1000.0`.
pub fn format_token_amount(amount: U256, decimals: u8) -> Result<String, ScriptError> {
    let unit = Unit::new(decimals).ok_or_else(|| {
        ScriptError::ContractInteraction(format!("unsupported decimals value: {decimals}"))
    })?;
    let formatted = ParseUnits::U256(amount).format_units(unit);

    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    Ok(format!("{integer}.{fraction}"))
}

/// Check the outcome of loading a `.env` file.
///
/// A missing file is fine since the environment may be set directly, but a file
/// that fails to parse would silently drop the variables it defines.
pub fn check_env_file<T>(result: Result<T, dotenvy::Error>) -> Result<(), ScriptError> {
    match result {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ScriptError::ConfigParsing(format!(".env: {e}"))),
    }
}

/// ABI-encode a sequence of `uint256` constructor arguments
pub fn encode_constructor_args(args: &[U256]) -> Vec<u8> {
    args.iter().flat_map(|arg| arg.abi_encode()).collect()
}

/// Read and parse a JSON file
pub fn get_json_from_file(file_path: &Path) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadFile(e.to_string()))
}

/// Record a deployed contract's address under `contract_key` in the deployments file,
/// creating the file if it does not exist
pub fn write_deployed_address(
    file_path: &Path,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    if !file_path.exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteFile(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteFile(e.to_string()))
}
