use std::path::PathBuf;

use aa_guard::{DecodeMode, DecodedOutcome, RevertDecoder};
use clap::Parser;
use tracing::debug;

use super::{load_input, print_output, DecodeCmdError, LogArgs, Result};

/// Decode a revert payload
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded revert payload
    #[arg(value_name = "PAYLOAD")]
    pub payload: Option<String>,

    /// File containing the hex-encoded payload. Use `-` for stdin.
    #[arg(long = "file", value_name = "FILE", conflicts_with = "payload")]
    pub file: Option<PathBuf>,

    /// Fail on payloads with an unrecognised selector instead of reporting them as unknown
    #[arg(long = "strict")]
    pub strict: bool,

    /// Print the outcome as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Logging configuration
    #[command(flatten)]
    pub log_args: LogArgs,
}

impl Cmd {
    /// Execute the decode command
    pub async fn run(&self) -> Result<()> {
        let outcome = self.decode()?;
        print_output(&outcome, self.json)
    }

    /// Decode the payload given on the command line.
    pub fn decode(&self) -> Result<DecodedOutcome> {
        let payload = load_input(self.payload.as_deref(), self.file.as_deref())?.ok_or_else(|| {
            DecodeCmdError::InvalidInput("a payload or --file is required".to_string())
        })?;
        let decoder = RevertDecoder::new(DecodeMode::from_strict(self.strict));
        debug!(hex_len = payload.trim().len(), mode = ?decoder.mode(), "Decoding revert payload");
        Ok(decoder.decode_hex(&payload)?)
    }
}
