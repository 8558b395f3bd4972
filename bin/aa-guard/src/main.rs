//! `aa-guard` CLI tool for account-abstraction test suites
//!
//! Decodes revert payloads, validates opcode traces of the validation phases, and computes
//! deployment addresses and calldata costs.

use aa_guard_cli::{CliError, MainCmd};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    set_thread_panic_hook();
    MainCmd::parse().run().await.inspect_err(|e| eprintln!("Error: {e}"))
}

/// Sets thread panic hook, useful for having tests that panic.
fn set_thread_panic_hook() {
    use std::{
        backtrace::Backtrace,
        panic::{set_hook, take_hook},
        process::exit,
    };
    let orig_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        eprintln!("Custom backtrace: {}", Backtrace::capture());
        orig_hook(panic_info);
        exit(1);
    }));
}
