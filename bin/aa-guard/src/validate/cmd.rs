use std::path::PathBuf;

use aa_guard::{OpcodeTraceValidator, Trace, ValidationOutcome};
use alloy_primitives::B256;
use clap::Parser;
use tracing::info;

use super::{load_trace, print_output, LogArgs, Result, RpcArgs, TraceSource, ValidateError};

/// Check an opcode trace against the validation-phase policy
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Trace file: a JSON array of `{op, depth}` records or a geth struct-log frame. Use `-` for
    /// stdin.
    #[arg(long = "trace", value_name = "FILE", required_unless_present = "tx")]
    pub trace: Option<PathBuf>,

    /// Transaction whose trace is fetched with `debug_traceTransaction`
    #[arg(long = "tx", value_name = "TX_HASH", conflicts_with = "trace")]
    pub tx: Option<B256>,

    /// Also police the secondary phase
    #[arg(long = "check-secondary")]
    pub check_secondary: bool,

    /// Print the outcome as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// RPC configuration
    #[command(flatten)]
    pub rpc_args: RpcArgs,

    /// Logging configuration
    #[command(flatten)]
    pub log_args: LogArgs,
}

impl Cmd {
    /// Execute the validate command
    pub async fn run(&self) -> Result<()> {
        let outcome = match (&self.trace, self.tx) {
            (Some(path), _) => self.validate(&load_trace(path)?)?,
            (None, Some(tx_hash)) => {
                self.validate_tx(self.rpc_args.trace_source()?, tx_hash).await?
            }
            (None, None) => {
                return Err(ValidateError::InvalidInput("--trace or --tx is required".to_string()))
            }
        };
        print_output(&outcome, self.json)?;
        if outcome.is_valid() {
            Ok(())
        } else {
            Err(ValidateError::ValidationFailed)
        }
    }

    /// Fetch the trace of `tx_hash` from `source` and validate it.
    pub async fn validate_tx(
        &self,
        source: impl TraceSource,
        tx_hash: B256,
    ) -> Result<ValidationOutcome> {
        let trace = source.fetch_trace(tx_hash).await?;
        self.validate(&trace)
    }

    /// Validate a trace with the configured policy.
    pub fn validate(&self, trace: &Trace) -> Result<ValidationOutcome> {
        let outcome =
            OpcodeTraceValidator::new().check_secondary_phase(self.check_secondary).validate(trace)?;
        info!(len = trace.len(), valid = outcome.is_valid(), "Validated trace");
        Ok(outcome)
    }
}
