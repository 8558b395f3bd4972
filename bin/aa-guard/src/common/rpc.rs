//! Fetching opcode traces from a node

use std::{fmt, future::Future};

use aa_guard::Trace;
use alloy_primitives::B256;
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_types_trace::geth::{DefaultFrame, GethDebugTracingOptions};
use auto_impl::auto_impl;
use clap::Parser;
use tracing::debug;

use super::{CliError, Result};

/// Source of opcode traces for mined transactions.
#[auto_impl(&, Box, Arc)]
pub trait TraceSource: Send + Sync {
    /// Fetch the opcode trace of `tx_hash`.
    fn fetch_trace(&self, tx_hash: B256) -> impl Future<Output = Result<Trace>> + Send;
}

/// RPC configuration arguments
#[derive(Parser, Debug, Clone)]
pub struct RpcArgs {
    /// RPC URL to fetch traces from
    #[arg(long = "rpc", env = "AA_GUARD_RPC", default_value = "http://localhost:8545")]
    pub rpc: String,
}

impl RpcArgs {
    /// Create a trace source for the configured endpoint.
    pub fn trace_source(&self) -> Result<RpcTraceSource> {
        RpcTraceSource::new(&self.rpc)
    }
}

/// [`TraceSource`] backed by `debug_traceTransaction` with the default struct logger.
#[derive(Clone)]
pub struct RpcTraceSource {
    rpc: String,
    provider: DynProvider,
}

impl RpcTraceSource {
    /// Create a trace source for the node at `rpc`.
    pub fn new(rpc: &str) -> Result<Self> {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(rpc.parse().map_err(|e| {
                CliError::InvalidInput(format!("Invalid RPC URL '{rpc}': {e}"))
            })?)
            .erased();
        Ok(Self { rpc: rpc.to_string(), provider })
    }

    /// The node endpoint.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }
}

impl fmt::Debug for RpcTraceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcTraceSource").field("rpc", &self.rpc).finish_non_exhaustive()
    }
}

impl TraceSource for RpcTraceSource {
    async fn fetch_trace(&self, tx_hash: B256) -> Result<Trace> {
        debug!(%tx_hash, rpc = %self.rpc, "Fetching trace");
        let frame: DefaultFrame = self
            .provider
            .raw_request(
                "debug_traceTransaction".into(),
                (tx_hash, GethDebugTracingOptions::default()),
            )
            .await?;
        debug!(len = frame.struct_logs.len(), failed = frame.failed, "Fetched trace");
        Ok(Trace::from(&frame))
    }
}
