//! The resolved dependency graph as handed over by the package manager.
//!
//! Conan resolves two independent graphs per build configuration: host
//! dependencies (linked into the target) and build dependencies (tools that
//! run on the build machine, e.g. code generators). The two never share
//! nodes and are exported into separate namespaces.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::cpp_info::CppInfo;

/// Which environment a requirement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Target-platform dependency
    Host,
    /// Build-machine (cross tool) dependency
    Build,
}

/// One resolved requirement edge from the root conanfile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    /// True for `tool_requires` (build-machine) dependencies
    #[serde(default)]
    pub build: bool,

    /// The package this requirement resolved to
    pub package: ResolvedPackage,
}

impl Requirement {
    /// The scope this requirement belongs to.
    pub fn scope(&self) -> Scope {
        if self.build {
            Scope::Build
        } else {
            Scope::Host
        }
    }
}

/// A resolved package and its exported metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPackage {
    /// Package reference name (may contain hyphens)
    pub name: String,

    /// Package-level cpp_info (aggregate when components exist)
    #[serde(default)]
    pub cpp_info: CppInfo,

    /// Component name -> component cpp_info, in declaration order
    #[serde(default)]
    pub components: IndexMap<String, CppInfo>,

    /// Declared build environment variables (`buildenv_info`)
    #[serde(default)]
    pub buildenv: IndexMap<String, String>,
}

impl ResolvedPackage {
    /// Whether this package declares sub-components.
    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }
}

/// The full resolved graph for one build configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// Direct and transitive requirements, in resolution order
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

impl DependencyGraph {
    /// Iterate requirements belonging to the given scope.
    pub fn in_scope(&self, scope: Scope) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter().filter(move |r| r.scope() == scope)
    }
}
