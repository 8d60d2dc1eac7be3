//! `wafgen generate` - the combined generator.

use anyhow::Result;

use wafgen::export;

use crate::cli::ExportArgs;

pub fn execute(args: ExportArgs) -> Result<()> {
    let input = super::load_input(&args)?;
    let mut session = super::session(&args)?;

    let path = export::generate_combined(&mut session, &input)?;
    println!("wrote {}", path.display());
    Ok(())
}
