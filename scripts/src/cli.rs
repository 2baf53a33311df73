//! Definitions of CLI arguments and commands for deploy scripts

use std::{io::Write, path::PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::{
    artifacts::ArtifactStore,
    client::setup_client,
    commands::deploy_and_report,
    config::NetworkTable,
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_NETWORK, NETWORK_ENV_VAR, PRIVATE_KEY_ENV_VAR},
    errors::ScriptError,
    types::{DeploymentRequest, Token},
};

/// Deploy token contracts and print their on-chain metadata
#[derive(Parser)]
pub struct Cli {
    /// Name of the network to deploy to
    #[arg(short, long, env = NETWORK_ENV_VAR, default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// RPC URL overriding the one configured for the network
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Private key of the deployer
    #[arg(short, long, env = PRIVATE_KEY_ENV_VAR, hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Path to a TOML file adding or overriding networks
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a JSON file in which to record deployed addresses
    #[arg(short, long)]
    pub deployments_path: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Run the selected command, printing its report to `out`
    pub async fn run(self, out: &mut impl Write) -> Result<(), ScriptError> {
        let networks = NetworkTable::load(self.config.as_deref())?;
        let Some(request) = self.command.deployment_request() else {
            return networks.write_summary(out);
        };

        let network = networks.get(&self.network)?;
        let rpc_url = self.rpc_url.as_deref().unwrap_or(&network.url);
        let client = setup_client(rpc_url, self.priv_key.as_deref(), network.chain_id).await?;

        let artifacts = ArtifactStore::new(self.artifacts);
        deploy_and_report(&client, &artifacts, request, self.deployments_path.as_deref(), out)
            .await?;
        Ok(())
    }
}

/// The commands supported by the scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy one of the known tokens
    Deploy(DeployArgs),
    /// Deploy an arbitrary contract template
    DeployTemplate(DeployTemplateArgs),
    /// List the configured networks
    Networks,
}

impl Command {
    /// The deployment this command performs, if any
    pub fn deployment_request(self) -> Option<DeploymentRequest> {
        match self {
            Command::Deploy(args) => Some(args.token.deployment_request()),
            Command::DeployTemplate(args) => {
                let label = args.label.unwrap_or_else(|| format!("{} contract", args.template));
                Some(DeploymentRequest::new(args.template, label, args.initial_supply))
            }
            Command::Networks => None,
        }
    }
}

/// Deploy a known token with its fixed constructor arguments
#[derive(Args)]
pub struct DeployArgs {
    /// The token to deploy
    #[arg(short, long)]
    pub token: Token,
}

/// Deploy a contract template taking zero or one initial-supply argument
#[derive(Args)]
pub struct DeployTemplateArgs {
    /// Name of the compiled contract template
    #[arg(short, long)]
    pub template: String,

    /// Initial supply passed to the constructor, in whole tokens
    #[arg(short, long)]
    pub initial_supply: Option<u128>,

    /// Label used in logs and the report, defaults to "<template> contract"
    #[arg(short, long)]
    pub label: Option<String>,
}
