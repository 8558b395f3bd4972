use std::{fmt, path::PathBuf};

use aa_guard::CalldataCost;
use clap::Parser;
use serde::Serialize;

use super::{load_input, print_output, CalldataCmdError, LogArgs, Result};

/// Compute the intrinsic gas cost of calldata
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded calldata
    #[arg(value_name = "DATA")]
    pub data: Option<String>,

    /// File containing the hex-encoded calldata. Use `-` for stdin.
    #[arg(long = "file", value_name = "FILE", conflicts_with = "data")]
    pub file: Option<PathBuf>,

    /// Print the byte counts and cost as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Logging configuration
    #[command(flatten)]
    pub log_args: LogArgs,
}

/// Calldata cost report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalldataReport {
    /// Byte composition of the payload
    #[serde(flatten)]
    pub cost: CalldataCost,
    /// Intrinsic gas cost
    pub gas: u64,
}

impl From<CalldataCost> for CalldataReport {
    fn from(cost: CalldataCost) -> Self {
        Self { cost, gas: cost.gas() }
    }
}

impl fmt::Display for CalldataReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gas)
    }
}

impl Cmd {
    /// Execute the calldata-gas command
    pub async fn run(&self) -> Result<()> {
        print_output(&self.report()?, self.json)
    }

    /// Price the calldata given on the command line.
    pub fn report(&self) -> Result<CalldataReport> {
        let data = load_input(self.data.as_deref(), self.file.as_deref())?.ok_or_else(|| {
            CalldataCmdError::InvalidInput("calldata or --file is required".to_string())
        })?;
        Ok(CalldataCost::from_hex(&data)?.into())
    }
}
