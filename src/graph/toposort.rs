//! Per-node topological ordering.
//!
//! Every node in a dep-map gets its own full transitive `use` list, so the
//! sorter runs once per root with fresh visitation state. The lists are not
//! slices of one global order: each call computes an independent closure.

use std::collections::HashSet;

use crate::core::usename::UseName;

use super::builder::{DepMap, DepNode};
use super::errors::GraphError;

/// Compute the dependency-first ordering of all nodes reachable from
/// `root`, root last, each node exactly once.
///
/// Requirements with no node in `map` are skipped: they were either
/// satisfied outside the currently-resolved scope or are genuinely missing,
/// and the two are indistinguishable here.
pub fn toposort<'a>(map: &'a DepMap, root: &'a DepNode) -> Result<Vec<&'a DepNode>, GraphError> {
    let mut visited: HashSet<&UseName> = HashSet::new();
    let mut in_progress: HashSet<&UseName> = HashSet::new();
    let mut out = Vec::new();

    visit(map, root, &mut visited, &mut in_progress, &mut out)?;

    Ok(out)
}

fn visit<'a>(
    map: &'a DepMap,
    node: &'a DepNode,
    visited: &mut HashSet<&'a UseName>,
    in_progress: &mut HashSet<&'a UseName>,
    out: &mut Vec<&'a DepNode>,
) -> Result<(), GraphError> {
    if visited.contains(&node.usename) {
        return Ok(());
    }
    if in_progress.contains(&node.usename) {
        return Err(GraphError::CyclicDependency {
            usename: node.usename.as_str().to_string(),
            requires: node
                .requires
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
        });
    }

    in_progress.insert(&node.usename);
    for req in &node.requires {
        match map.get(req) {
            Some(dep) => visit(map, dep, visited, in_progress, out)?,
            None => {
                // out-of-scope or missing; deliberately tolerated
                tracing::debug!(node = %node.usename, requires = %req, "skipping unresolved require");
            }
        }
    }
    in_progress.remove(&node.usename);
    visited.insert(&node.usename);
    out.push(node);

    Ok(())
}
