//! Command implementations.

pub mod deps;
pub mod generate;
pub mod toolchain;

use std::io::Read;

use anyhow::{Context, Result};

use wafgen::export::{ExportInput, ExportSession};

use crate::cli::ExportArgs;

/// Load the export input document (`-` reads stdin).
pub fn load_input(args: &ExportArgs) -> Result<ExportInput> {
    let json = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read export input from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read export input: {}", args.input.display()))?
    };

    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse export input: {}", args.input.display()))
}

/// Build the export session from common arguments.
pub fn session(args: &ExportArgs) -> Result<ExportSession> {
    let base_dir = match &args.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to get current directory")?,
    };
    Ok(ExportSession::new(args.out_dir.clone()).with_base_dir(base_dir))
}
