//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Wafgen - a Conan dependency and toolchain generator for waf
#[derive(Parser)]
#[command(name = "wafgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the combined dependency + toolchain file (conan_waf_config.py)
    Generate(ExportArgs),

    /// Write host dependency variables only (conan_dependencies.py)
    Deps(ExportArgs),

    /// Write settings and global config only (conan_toolchain.py)
    Toolchain(ExportArgs),
}

/// Arguments shared by all export commands.
#[derive(Args)]
pub struct ExportArgs {
    /// JSON document with the resolved graph, settings and config
    /// (`-` reads from stdin)
    #[arg(short, long, default_value = "conan_export.json")]
    pub input: PathBuf,

    /// Directory the generated file is written into
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Base directory relative package paths are resolved against
    /// (defaults to the current directory)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,
}
