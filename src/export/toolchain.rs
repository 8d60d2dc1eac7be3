//! The settings exporter.
//!
//! Serializes the active profile and global build flags without
//! interpretation; the waf-side tool applies the settings-to-flags
//! translation at configure time. Also discovers waf tools distributed
//! inside build-scope packages (via their `WAF_TOOLS` build environment
//! variable) so wscripts can load them without caring about versioning.

use std::path::{Path, PathBuf};

use anyhow::Result;
use indexmap::IndexMap;

use crate::configset::{OutputRecord, Value};
use crate::core::dependency::{DependencyGraph, Scope};
use crate::core::settings::{BuildConf, SettingsSnapshot};

use super::session::ExportSession;

/// Name of the toolchain generator output.
pub const TOOLCHAIN_FILE: &str = "conan_toolchain.py";

/// Run the toolchain generator, writing the settings ConfigSet file.
pub fn generate(
    session: &mut ExportSession,
    graph: &DependencyGraph,
    settings: &SettingsSnapshot,
    conf: &BuildConf,
) -> Result<PathBuf> {
    session.claim("WafToolchain")?;
    let record = record(graph, settings, conf);
    session.write(TOOLCHAIN_FILE, &record.serialize())
}

/// Project settings and global config into an output record.
pub fn record(
    graph: &DependencyGraph,
    settings: &SettingsSnapshot,
    conf: &BuildConf,
) -> OutputRecord {
    let mut out = OutputRecord::new();

    let mut blob = IndexMap::new();
    for (key, value) in settings.iter() {
        blob.insert(key.to_string(), Value::from(value));
    }
    out.set_global("CONAN_SETTINGS", Value::Dict(blob));

    let mut config = IndexMap::new();
    config.insert("CFLAGS".to_string(), Value::str_list(conf.cflags.clone()));
    config.insert(
        "CXXFLAGS".to_string(),
        Value::str_list(conf.cxxflags.clone()),
    );
    config.insert("DEFINES".to_string(), Value::str_list(conf.defines.clone()));
    config.insert("LINKFLAGS".to_string(), Value::str_list(conf.linkflags()));
    out.set_global("CONAN_CONFIG", Value::Dict(config));

    out.set_global("DEP_SYS_PATHS", Value::str_list(waftool_paths(graph)));

    out
}

/// Collect directories of waf tools contributed by build dependencies.
///
/// `WAF_TOOLS` holds space-separated paths; a file entry contributes its
/// parent directory, a directory entry itself. Nonexistent entries are
/// warned about and skipped.
pub fn waftool_paths(graph: &DependencyGraph) -> Vec<String> {
    let mut out = Vec::new();

    for req in graph.in_scope(Scope::Build) {
        let Some(tools) = req.package.buildenv.get("WAF_TOOLS") else {
            continue;
        };

        for entry in tools.split(' ').filter(|e| !e.is_empty()) {
            let path = Path::new(entry);
            if !path.exists() {
                tracing::warn!(entry, package = %req.package.name, "waf tool entry not found");
                continue;
            }
            let dir = if path.is_file() {
                path.parent().unwrap_or(path)
            } else {
                path
            };
            out.push(dir.display().to_string());
        }
    }

    out
}
