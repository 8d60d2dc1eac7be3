//! The export passes: dependency projection and settings serialization.
//!
//! Three generators mirror the three files a consumer may ask for:
//! - `deps` writes `conan_dependencies.py` (host dependencies only)
//! - `toolchain` writes `conan_toolchain.py` (settings + global config)
//! - the combined generator writes `conan_waf_config.py` with both

pub mod deps;
pub mod session;
pub mod toolchain;

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::dependency::DependencyGraph;
use crate::core::settings::{BuildConf, SettingsSnapshot};

pub use session::{ExportError, ExportSession};

/// Name of the combined generator output.
pub const COMBINED_FILE: &str = "conan_waf_config.py";

/// Everything one invocation consumes from the package manager.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportInput {
    pub graph: DependencyGraph,
    pub settings: SettingsSnapshot,
    pub conf: BuildConf,
}

/// Run the combined generator: dependency variables for both scopes plus
/// the settings blob, in a single ConfigSet file.
pub fn generate_combined(session: &mut ExportSession, input: &ExportInput) -> Result<PathBuf> {
    session.claim("Waf")?;

    let mut record = deps::record(&input.graph, session.base_dir(), deps::DepsMode::Combined)?;
    record.merge(toolchain::record(
        &input.graph,
        &input.settings,
        &input.conf,
    ));

    session.write(COMBINED_FILE, &record.serialize())
}
