//! Scripts for deploying the token contracts and reporting their on-chain metadata.

#![deny(missing_docs)]

pub mod artifacts;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
mod solidity;
pub mod types;
pub mod utils;
