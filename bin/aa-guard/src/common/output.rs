//! Result printing for aa-guard commands

use std::fmt::Display;

use serde::Serialize;

use super::Result;

/// Print `value` to stdout, as pretty JSON if `json` is set and with its `Display` form otherwise.
pub fn print_output<T: Serialize + Display>(value: &T, json: bool) -> Result<()> {
    println!("{}", render(value, json)?);
    Ok(())
}

/// Render `value` the way [`print_output`] prints it.
pub fn render<T: Serialize + Display>(value: &T, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(value.to_string())
    }
}
