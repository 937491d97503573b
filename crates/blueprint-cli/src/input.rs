//! Reading text from a file or stdin.

use std::io::Read;
use std::path::Path;

use blueprint_core::{Error, Result};

/// Read the whole input. `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            tracing::debug!(path = %p.display(), "Reading input file");
            std::fs::read_to_string(p).map_err(|e| Error::io_with_path(e, p))
        }
        _ => {
            tracing::debug!("Reading input from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
