use std::path::PathBuf;

use aa_guard::{resolve_create_address, try_resolve_counterfactual_address};
use alloy_primitives::{hex, Address};
use clap::Parser;
use tracing::debug;

use super::{load_input, print_output, AddressCmdError, LogArgs, Result};

/// Compute the CREATE2 address of an account before it is deployed
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded factory address (20 bytes)
    #[arg(long = "factory", value_name = "ADDRESS")]
    pub factory: String,

    /// Hex-encoded salt (32 bytes)
    #[arg(long = "salt", value_name = "SALT")]
    pub salt: String,

    /// Hex-encoded init code
    #[arg(long = "init-code", value_name = "HEX", required_unless_present = "init_code_file")]
    pub init_code: Option<String>,

    /// File containing the hex-encoded init code. Use `-` for stdin.
    #[arg(long = "init-code-file", value_name = "FILE", conflicts_with = "init_code")]
    pub init_code_file: Option<PathBuf>,

    /// Print the address as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Logging configuration
    #[command(flatten)]
    pub log_args: LogArgs,
}

impl Cmd {
    /// Execute the address command
    pub async fn run(&self) -> Result<()> {
        print_output(&self.resolve()?, self.json)
    }

    /// Resolve the address given on the command line.
    pub fn resolve(&self) -> Result<Address> {
        let factory = hex::decode(self.factory.trim())?;
        let salt = hex::decode(self.salt.trim())?;
        let init_code = load_input(self.init_code.as_deref(), self.init_code_file.as_deref())?
            .ok_or_else(|| {
                AddressCmdError::InvalidInput(
                    "--init-code or --init-code-file is required".to_string(),
                )
            })?;
        let init_code = hex::decode(init_code.trim())?;
        debug!(init_code_len = init_code.len(), "Resolving counterfactual address");
        Ok(try_resolve_counterfactual_address(&factory, &salt, &init_code)?)
    }
}

/// Compute the CREATE address of a contract, e.g. a keyless factory deployment
#[derive(Parser, Debug)]
pub struct CreateCmd {
    /// Deploying account
    #[arg(long = "deployer", value_name = "ADDRESS")]
    pub deployer: Address,

    /// Nonce of the deploying transaction
    #[arg(long = "nonce", default_value_t = 0)]
    pub nonce: u64,

    /// Print the address as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Logging configuration
    #[command(flatten)]
    pub log_args: LogArgs,
}

impl CreateCmd {
    /// Execute the create-address command
    pub async fn run(&self) -> Result<()> {
        print_output(&resolve_create_address(self.deployer, self.nonce), self.json)
    }
}
