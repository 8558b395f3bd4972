//! Input loading utilities for aa-guard

use std::{fs, io::Read, path::Path};

use super::Result;

/// Read the whole input. A path of `-` reads stdin.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Load a hex-encoded input from an argument or a file. If the file is a dash (-), read from stdin.
/// Priority: arg > file. Returns `None` if neither is provided.
///
/// The text is returned as is and decoded by the library entry point that consumes it.
pub fn load_input(arg: Option<&str>, file: Option<&Path>) -> Result<Option<String>> {
    match (arg, file) {
        (Some(arg), _) => Ok(Some(arg.to_string())),
        (None, Some(file)) => read_input(file).map(Some),
        (None, None) => Ok(None),
    }
}
