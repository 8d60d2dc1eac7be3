//! `wafgen toolchain` - settings and global config only.

use anyhow::Result;

use wafgen::export::toolchain;

use crate::cli::ExportArgs;

pub fn execute(args: ExportArgs) -> Result<()> {
    let input = super::load_input(&args)?;
    let mut session = super::session(&args)?;

    let path = toolchain::generate(&mut session, &input.graph, &input.settings, &input.conf)?;
    println!("wrote {}", path.display());
    Ok(())
}
