//! `wafgen deps` - host dependency variables only.

use anyhow::Result;

use wafgen::export::deps;

use crate::cli::ExportArgs;

pub fn execute(args: ExportArgs) -> Result<()> {
    let input = super::load_input(&args)?;
    let mut session = super::session(&args)?;

    let path = deps::generate(&mut session, &input.graph)?;
    println!("wrote {}", path.display());
    Ok(())
}
