//! Dep-map construction from the resolved graph.
//!
//! One `DepNode` per package or package-component, keyed by use-name in an
//! insertion-ordered map so that emission order follows resolution order.
//! Host and build requirements build two independent maps; a use-name only
//! has to be unique within its own map.

use indexmap::IndexMap;

use crate::core::cpp_info::CppInfo;
use crate::core::dependency::{DependencyGraph, Scope};
use crate::core::usename::UseName;

use super::errors::GraphError;

/// One emittable dependency node.
#[derive(Debug, Clone)]
pub struct DepNode {
    /// Normalized symbolic identifier, unique within the map
    pub usename: UseName,

    /// Use-names this node directly depends on
    pub requires: Vec<UseName>,

    /// Compiler/linker metadata, passed through from the graph
    pub cpp_info: CppInfo,

    /// The package this node belongs to (itself for package-level nodes)
    pub package: UseName,
}

/// An insertion-ordered map of use-name -> node for one resolution pass.
pub type DepMap = IndexMap<UseName, DepNode>;

/// Build the dep-map for one scope of the resolved graph.
///
/// A package with components contributes one node per component plus an
/// aggregate node for the whole package whose requires list the component
/// use-names in declaration order. A package without components contributes
/// a single node carrying whatever the graph reports as its requires.
pub fn build_depmap(graph: &DependencyGraph, scope: Scope) -> Result<DepMap, GraphError> {
    let mut map = DepMap::new();

    for req in graph.in_scope(scope) {
        let pkg = &req.package;
        let pkg_name = UseName::normalize(&pkg.name, None)?;

        if pkg.has_components() {
            let mut comp_names = Vec::with_capacity(pkg.components.len());

            for (comp_name, cpp_info) in &pkg.components {
                let usename = UseName::normalize(comp_name, Some(&pkg.name))?;
                tracing::debug!(node = %usename, package = %pkg_name, "component node");
                comp_names.push(usename.clone());
                map.insert(
                    usename.clone(),
                    DepNode {
                        usename,
                        requires: normalize_requires(&cpp_info.requires, &pkg.name)?,
                        cpp_info: cpp_info.clone(),
                        package: pkg_name.clone(),
                    },
                );
            }

            // aggregate node standing for "pkg::pkg"
            map.insert(
                pkg_name.clone(),
                DepNode {
                    usename: pkg_name.clone(),
                    requires: comp_names,
                    cpp_info: pkg.cpp_info.clone(),
                    package: pkg_name,
                },
            );
        } else {
            tracing::debug!(node = %pkg_name, "package node");
            map.insert(
                pkg_name.clone(),
                DepNode {
                    usename: pkg_name.clone(),
                    requires: normalize_requires(&pkg.cpp_info.requires, &pkg.name)?,
                    cpp_info: pkg.cpp_info.clone(),
                    package: pkg_name,
                },
            );
        }
    }

    Ok(map)
}

fn normalize_requires(raw: &[String], parent: &str) -> Result<Vec<UseName>, GraphError> {
    raw.iter()
        .map(|r| UseName::normalize(r, Some(parent)).map_err(GraphError::from))
        .collect()
}
