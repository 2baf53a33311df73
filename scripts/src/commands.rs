//! Implementations of the deploy scripts

use std::{io::Write, path::Path};

use tracing::{error, info, warn};

use crate::{
    artifacts::ArtifactStore,
    client::TokenClient,
    errors::ScriptError,
    types::{DeployedToken, DeploymentRequest, TokenMetadata},
    utils::{format_token_amount, write_deployed_address},
};

/// Deploy a token contract and read back its metadata.
///
/// Resolves the template, submits the deployment, waits for confirmation and
/// only then queries the contract. Nothing is retried; the first error aborts.
pub async fn deploy_token<C: TokenClient + ?Sized>(
    client: &C,
    artifacts: &ArtifactStore,
    request: &DeploymentRequest,
) -> Result<DeployedToken, ScriptError> {
    info!("Deploying {}...", request.label);

    let artifact = artifacts.resolve(&request.template_name)?;
    let init_code = artifact.init_code(&request.constructor_args)?;

    let address = client.deploy(init_code).await?;
    info!(template = %request.template_name, address = %address, "contract deployed");

    let name = client.name(address).await?;
    let symbol = client.symbol(address).await?;
    let decimals = client.decimals(address).await?;
    let total_supply = if request.has_supply() {
        Some(client.total_supply(address).await?)
    } else {
        None
    };

    Ok(DeployedToken {
        address,
        metadata: TokenMetadata {
            name,
            symbol,
            decimals,
            total_supply,
        },
    })
}

/// Print the human-readable report of a deployed token
pub fn write_report(
    out: &mut impl Write,
    label: &str,
    token: &DeployedToken,
) -> Result<(), ScriptError> {
    let metadata = &token.metadata;
    let mut lines = vec![
        format!("{label} deployed to: {:#x}", token.address),
        "Token details:".to_string(),
        format!("  Name: {}", metadata.name),
        format!("  Symbol: {}", metadata.symbol),
        format!("  Decimals: {}", metadata.decimals),
    ];
    if let Some(total_supply) = metadata.total_supply {
        let formatted = format_token_amount(total_supply, metadata.decimals)?;
        lines.push(format!("  Total Supply: {formatted}"));
    }

    // Render everything before writing so a formatting error prints nothing
    let report = lines.join("\n") + "\n";
    out.write_all(report.as_bytes()).map_err(|e| ScriptError::WriteFile(e.to_string()))
}

/// Deploy a token, print the report, and optionally record its address
pub async fn deploy_and_report<C: TokenClient + ?Sized>(
    client: &C,
    artifacts: &ArtifactStore,
    request: DeploymentRequest,
    deployments_path: Option<&Path>,
    out: &mut impl Write,
) -> Result<DeployedToken, ScriptError> {
    let token = deploy_token(client, artifacts, &request).await?;
    write_report(out, &request.label, &token)?;

    if let Some(path) = deployments_path {
        if let Err(e) = write_deployed_address(path, &request.template_name, token.address) {
            warn!(
                path = %path.display(),
                address = %token.address,
                "{} is deployed but could not be recorded",
                request.template_name
            );
            return Err(e);
        }
        info!(path = %path.display(), "recorded deployment");
    }

    Ok(token)
}

/// Map the outcome of a script run to its process exit status, logging any error
pub fn exit_status<T>(result: &Result<T, ScriptError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            error!("{e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, U256};

    use super::{exit_status, write_report};
    use crate::{
        errors::ScriptError,
        types::{DeployedToken, TokenMetadata},
    };

    fn deployed(total_supply: Option<U256>, decimals: u8) -> DeployedToken {
        DeployedToken {
            address: address!("5fbdb2315678afecb367f032d93f642f64180aa3"),
            metadata: TokenMetadata {
                name: "Yacht Coin".to_string(),
                symbol: "YTC".to_string(),
                decimals,
                total_supply,
            },
        }
    }

    #[test]
    fn test_report_with_supply() {
        let supply = U256::from(100_000_000u64) * U256::from(10u64).pow(U256::from(18u64));
        let mut out = Vec::new();
        write_report(&mut out, "Yacht Coin (YTC) contract", &deployed(Some(supply), 18)).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Yacht Coin (YTC) contract deployed to: 0x5fbdb2315678afecb367f032d93f642f64180aa3\n\
             Token details:\n  \
             Name: Yacht Coin\n  \
             Symbol: YTC\n  \
             Decimals: 18\n  \
             Total Supply: 100000000.0\n"
        );
    }

    #[test]
    fn test_report_without_supply() {
        let mut out = Vec::new();
        write_report(&mut out, "WAIGO contract", &deployed(None, 18)).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(!report.contains("Total Supply"));
        assert_eq!(report.lines().count(), 5);
    }

    #[test]
    fn test_report_formatting_error_prints_nothing() {
        let mut out: Vec<u8> = Vec::new();
        let res = write_report(&mut out, "Broken", &deployed(Some(U256::from(1u64)), 100));

        assert!(res.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&Ok::<(), ScriptError>(())), 0);
        assert_eq!(exit_status::<()>(&Err(ScriptError::ContractDeployment("rejected".into()))), 1);
    }
}
