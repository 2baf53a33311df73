//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy::primitives::{Address, U256};
use clap::ValueEnum;

use crate::constants::{MILK_INITIAL_SUPPLY, MNT_INITIAL_SUPPLY, YACHT_COIN_INITIAL_SUPPLY};

/// The token contracts with a dedicated deploy command
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// The Milk token
    Milk,
    /// The MNT token
    Mnt,
    /// The Yacht Coin (YTC) token
    YachtCoin,
    /// The wrapped AIGO token, deployed without constructor arguments
    Waigo,
}

impl Token {
    /// The name of the compiled contract template for this token
    pub fn template_name(&self) -> &'static str {
        match self {
            Token::Milk => "Milk",
            Token::Mnt => "MNT",
            Token::YachtCoin => "YachtCoin",
            Token::Waigo => "WAIGO",
        }
    }

    /// The human-readable label used in logs and the deployment report
    pub fn label(&self) -> &'static str {
        match self {
            Token::Milk => "Milk token contract",
            Token::Mnt => "MNT token contract",
            Token::YachtCoin => "Yacht Coin (YTC) contract",
            Token::Waigo => "WAIGO contract",
        }
    }

    /// The initial supply passed to the constructor, if the token takes one
    pub fn initial_supply(&self) -> Option<u128> {
        match self {
            Token::Milk => Some(MILK_INITIAL_SUPPLY),
            Token::Mnt => Some(MNT_INITIAL_SUPPLY),
            Token::YachtCoin => Some(YACHT_COIN_INITIAL_SUPPLY),
            Token::Waigo => None,
        }
    }

    /// Build the deployment request for this token
    pub fn deployment_request(&self) -> DeploymentRequest {
        DeploymentRequest::new(self.template_name(), self.label(), self.initial_supply())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Milk => write!(f, "milk"),
            Token::Mnt => write!(f, "mnt"),
            Token::YachtCoin => write!(f, "yacht-coin"),
            Token::Waigo => write!(f, "waigo"),
        }
    }
}

/// A request to deploy one contract from a named template.
///
/// Built right before submission and consumed by the deploy flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// The name of the compiled contract template
    pub template_name: String,
    /// The label used in logs and the deployment report
    pub label: String,
    /// The constructor arguments, in order
    pub constructor_args: Vec<U256>,
}

impl DeploymentRequest {
    /// Create a request taking either no constructor arguments or a single
    /// initial supply, in whole tokens
    pub fn new(
        template_name: impl Into<String>,
        label: impl Into<String>,
        initial_supply: Option<u128>,
    ) -> Self {
        Self {
            template_name: template_name.into(),
            label: label.into(),
            constructor_args: initial_supply.map(U256::from).into_iter().collect(),
        }
    }

    /// Whether the deployed token reports a total supply.
    ///
    /// Only tokens minted with an initial supply report one; the wrapped
    /// asset starts out empty.
    pub fn has_supply(&self) -> bool {
        !self.constructor_args.is_empty()
    }
}

/// The identity fields of a deployed token, read back from the chain
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMetadata {
    /// The token name
    pub name: String,
    /// The token symbol
    pub symbol: String,
    /// The number of fractional digits in the token's display amount
    pub decimals: u8,
    /// The raw total supply, if the token reports one
    pub total_supply: Option<U256>,
}

/// A token contract whose deployment has been confirmed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedToken {
    /// The address of the deployed contract
    pub address: Address,
    /// The metadata read from the contract after confirmation
    pub metadata: TokenMetadata,
}
