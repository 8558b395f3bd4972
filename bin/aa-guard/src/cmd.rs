use clap::Parser;

use crate::common::{LogArgs, Result};

/// Main command enumeration for the aa-guard CLI tool
#[derive(Parser, Debug)]
#[command(infer_subcommands = true, version)]
pub enum MainCmd {
    /// Decode a revert payload
    Decode(crate::decode::Cmd),
    /// Compute the intrinsic gas cost of calldata
    CalldataGas(crate::calldata::Cmd),
    /// Check an opcode trace against the validation-phase policy
    Validate(crate::validate::Cmd),
    /// Compute a counterfactual CREATE2 address
    Address(crate::address::Cmd),
    /// Compute a CREATE address
    CreateAddress(crate::address::CreateCmd),
}

impl MainCmd {
    /// Logging configuration of the selected command
    pub fn log_args(&self) -> &LogArgs {
        match self {
            Self::Decode(cmd) => &cmd.log_args,
            Self::CalldataGas(cmd) => &cmd.log_args,
            Self::Validate(cmd) => &cmd.log_args,
            Self::Address(cmd) => &cmd.log_args,
            Self::CreateAddress(cmd) => &cmd.log_args,
        }
    }

    /// Execute the main command
    pub async fn run(&self) -> Result<()> {
        self.log_args().init()?;
        match self {
            Self::Decode(cmd) => cmd.run().await,
            Self::CalldataGas(cmd) => cmd.run().await,
            Self::Validate(cmd) => cmd.run().await,
            Self::Address(cmd) => cmd.run().await,
            Self::CreateAddress(cmd) => cmd.run().await,
        }
    }
}
