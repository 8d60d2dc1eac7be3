//! The per-node compiler/linker attribute bundle.
//!
//! This is the typed equivalent of Conan's `cpp_info`: every attribute the
//! exporter ever reads is a named field, all default-empty. Field names
//! match Conan's JSON serialization so a graph document deserializes
//! directly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A path-valued attribute that Conan reports either as a single path or
/// as a list of paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathProp {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl Default for PathProp {
    fn default() -> Self {
        PathProp::Many(Vec::new())
    }
}

impl PathProp {
    /// True when there is no path at all.
    pub fn is_empty(&self) -> bool {
        match self {
            PathProp::One(_) => false,
            PathProp::Many(paths) => paths.is_empty(),
        }
    }

    /// All paths, regardless of shape.
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            PathProp::One(p) => std::slice::from_ref(p),
            PathProp::Many(paths) => paths,
        }
    }
}

impl From<Vec<PathBuf>> for PathProp {
    fn from(paths: Vec<PathBuf>) -> Self {
        PathProp::Many(paths)
    }
}

/// Compiler/linker metadata for one package or component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CppInfo {
    /// Include directories (emitted verbatim as `INCLUDES`)
    pub includedirs: Vec<String>,

    /// Library search directories (`LIBPATH`, absolutized)
    pub libdirs: PathProp,

    /// Binary directories (`BINPATH`, absolutized; build-scope entries feed
    /// the build tool search path)
    pub bindirs: PathProp,

    /// Source directories (`SRCPATH`, absolutized)
    pub srcdirs: PathProp,

    /// Resource directories (`RESPATH`, absolutized)
    pub resdirs: PathProp,

    /// Build directories (`BUILDPATH`, absolutized)
    pub builddirs: PathProp,

    /// macOS framework search directories (`FRAMEWORKPATH`, absolutized)
    pub frameworkdirs: PathProp,

    /// Libraries built by this node
    pub libs: Vec<String>,

    /// System libraries
    pub system_libs: Vec<String>,

    /// Pre-built object files
    pub objects: Vec<String>,

    /// Preprocessor defines
    pub defines: Vec<String>,

    /// C compiler flags
    pub cflags: Vec<String>,

    /// C++ compiler flags
    pub cxxflags: Vec<String>,

    /// Linker flags for shared libraries
    pub sharedlinkflags: Vec<String>,

    /// Linker flags for executables
    pub exelinkflags: Vec<String>,

    /// macOS frameworks (`FRAMEWORK`)
    pub frameworks: Vec<String>,

    /// Raw references this node requires (component or `pkg::comp` form)
    pub requires: Vec<String>,
}
