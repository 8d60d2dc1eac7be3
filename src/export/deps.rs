//! The dependency exporter and attribute projector.
//!
//! For every node the projector emits the waf environment variables its
//! task generators consume (`LIB_<use>`, `INCLUDES_<use>`, ...), plus
//! `CONAN_USE_<use>`: the node's full transitive dependency order, which
//! the waf-side tool splices into `use` lists at configure time.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::configset::{OutputRecord, Value};
use crate::core::cpp_info::PathProp;
use crate::core::dependency::{DependencyGraph, Scope};
use crate::graph::builder::{build_depmap, DepNode};
use crate::graph::errors::GraphError;
use crate::graph::toposort::toposort;
use crate::util::fs::absolutize;

use super::session::ExportSession;

/// Name of the dependency-only generator output.
pub const DEPS_FILE: &str = "conan_dependencies.py";

/// Which scopes a dependency record covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepsMode {
    /// Host dependencies only; host bindirs accumulate into `CONAN_BINPATH`
    HostOnly,
    /// Host and build scopes; build bindirs accumulate into
    /// `CONAN_BUILD_BIN_PATH` and build-scope keys get a `build_` prefix
    Combined,
}

/// Run the dependency generator, writing the host-scope ConfigSet file.
pub fn generate(session: &mut ExportSession, graph: &DependencyGraph) -> Result<PathBuf> {
    session.claim("WafDeps")?;
    let record = record(graph, session.base_dir(), DepsMode::HostOnly)?;
    session.write(DEPS_FILE, &record.serialize())
}

/// Project the dependency graph into an output record.
pub fn record(
    graph: &DependencyGraph,
    base_dir: &Path,
    mode: DepsMode,
) -> Result<OutputRecord, GraphError> {
    let mut out = OutputRecord::new();
    out.set_global("ALL_CONAN_PACKAGES", Value::List(Vec::new()));
    if mode == DepsMode::Combined {
        out.set_global("ALL_CONAN_PACKAGES_BUILD", Value::List(Vec::new()));
    }

    let scopes: &[Scope] = match mode {
        DepsMode::HostOnly => &[Scope::Host],
        DepsMode::Combined => &[Scope::Host, Scope::Build],
    };

    for &scope in scopes {
        let map = build_depmap(graph, scope)?;
        for node in map.values() {
            // every node is its own root: each use list is an
            // independently computed transitive closure
            let use_list = toposort(&map, node)?;
            project_node(&mut out, node, &use_list, scope, mode, base_dir);
        }
    }

    Ok(out)
}

fn project_node(
    out: &mut OutputRecord,
    node: &DepNode,
    use_list: &[&DepNode],
    scope: Scope,
    mode: DepsMode,
    base_dir: &Path,
) {
    // build-scope nodes share the final namespace with host nodes, so the
    // prefix is applied here at emission time, never in the dep map
    let name = match scope {
        Scope::Host => node.usename.as_str().to_string(),
        Scope::Build => node.usename.build_prefixed(),
    };
    tracing::debug!(node = %name, deps = use_list.len(), "projecting node");

    let use_names: Vec<String> = use_list
        .iter()
        .map(|d| match scope {
            Scope::Host => d.usename.as_str().to_string(),
            Scope::Build => d.usename.build_prefixed(),
        })
        .collect();
    out.set_attr(&name, "CONAN_USE", Value::str_list(use_names));

    match scope {
        Scope::Host => out.push_global_list("ALL_CONAN_PACKAGES", &name),
        Scope::Build => out.push_global_list("ALL_CONAN_PACKAGES_BUILD", &name),
    }

    let info = &node.cpp_info;

    // static/shared libs, then system libs, then objects; no dedup
    let mut libs = info.libs.clone();
    libs.extend(info.system_libs.iter().cloned());
    libs.extend(info.objects.iter().cloned());
    out.set_attr(&name, "LIB", Value::str_list(libs));

    // waf's default C/C++ tasks don't distinguish exelink from sharedlink,
    // so the two flag sets collapse into one deduplicated LINKFLAGS
    let mut linkflags = Vec::new();
    for flag in info.sharedlinkflags.iter().chain(&info.exelinkflags) {
        if !linkflags.contains(flag) {
            linkflags.push(flag.clone());
        }
    }
    out.set_attr(&name, "LINKFLAGS", Value::str_list(linkflags));

    out.set_attr(&name, "CFLAGS", Value::str_list(info.cflags.clone()));
    out.set_attr(&name, "CXXFLAGS", Value::str_list(info.cxxflags.clone()));
    out.set_attr(&name, "INCLUDES", Value::str_list(info.includedirs.clone()));
    out.set_attr(&name, "DEFINES", Value::str_list(info.defines.clone()));
    out.set_attr(&name, "FRAMEWORK", Value::str_list(info.frameworks.clone()));

    set_path(out, &name, "LIBPATH", &info.libdirs, base_dir);
    set_path(out, &name, "FRAMEWORKPATH", &info.frameworkdirs, base_dir);
    set_path(out, &name, "SRCPATH", &info.srcdirs, base_dir);
    set_path(out, &name, "RESPATH", &info.resdirs, base_dir);
    set_path(out, &name, "BUILDPATH", &info.builddirs, base_dir);
    let bindirs = set_path(out, &name, "BINPATH", &info.bindirs, base_dir);

    // bindirs feed the executable-discovery path of the matching scope
    match (mode, scope) {
        (DepsMode::HostOnly, Scope::Host) => out.extend_global_set("CONAN_BINPATH", bindirs),
        (DepsMode::Combined, Scope::Build) => {
            out.extend_global_set("CONAN_BUILD_BIN_PATH", bindirs)
        }
        _ => {}
    }
}

/// Emit a path-valued attribute, absolutized. A scalar input emits a scalar
/// absolute path, a list emits a list. Returns the absolute paths either
/// way for accumulation.
fn set_path(
    out: &mut OutputRecord,
    name: &str,
    attr: &str,
    prop: &PathProp,
    base_dir: &Path,
) -> Vec<String> {
    let abs: Vec<String> = prop
        .paths()
        .iter()
        .map(|p| absolutize(base_dir, p).display().to_string())
        .collect();

    match prop {
        PathProp::One(_) => out.set_attr(name, attr, Value::Str(abs[0].clone())),
        PathProp::Many(_) => out.set_attr(name, attr, Value::str_list(abs.clone())),
    }

    abs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cpp_info::CppInfo;
    use crate::core::dependency::{Requirement, ResolvedPackage};
    use indexmap::IndexMap;

    fn req(name: &str, build: bool, cpp_info: CppInfo) -> Requirement {
        Requirement {
            build,
            package: ResolvedPackage {
                name: name.to_string(),
                cpp_info,
                components: IndexMap::new(),
                buildenv: IndexMap::new(),
            },
        }
    }

    fn libs(names: &[&str]) -> CppInfo {
        CppInfo {
            libs: names.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_foo_bar_projection() {
        let graph = DependencyGraph {
            requirements: vec![
                req("foo", false, libs(&["foo"])),
                req(
                    "bar",
                    false,
                    CppInfo {
                        libs: vec!["bar".to_string()],
                        requires: vec!["foo::foo".to_string()],
                        ..Default::default()
                    },
                ),
            ],
        };

        let out = record(&graph, Path::new("/b"), DepsMode::Combined).unwrap();

        assert_eq!(out.attr("foo", "LIB"), Some(&Value::str_list(["foo"])));
        assert_eq!(out.attr("bar", "LIB"), Some(&Value::str_list(["bar"])));
        assert_eq!(
            out.attr("bar", "CONAN_USE"),
            Some(&Value::str_list(["foo", "bar"]))
        );
        assert_eq!(
            out.global("ALL_CONAN_PACKAGES"),
            Some(&Value::str_list(["foo", "bar"]))
        );
    }

    #[test]
    fn test_empty_attributes_are_omitted() {
        let graph = DependencyGraph {
            requirements: vec![req("foo", false, libs(&["foo"]))],
        };

        let out = record(&graph, Path::new("/b"), DepsMode::Combined).unwrap();
        assert!(out.attr("foo", "DEFINES").is_none());
        assert!(out.attr("foo", "LINKFLAGS").is_none());
        assert!(out.attr("foo", "LIBPATH").is_none());
    }

    #[test]
    fn test_lib_concat_order_no_dedup() {
        let graph = DependencyGraph {
            requirements: vec![req(
                "foo",
                false,
                CppInfo {
                    libs: vec!["a".to_string(), "m".to_string()],
                    system_libs: vec!["m".to_string()],
                    objects: vec!["extra.o".to_string()],
                    ..Default::default()
                },
            )],
        };

        let out = record(&graph, Path::new("/b"), DepsMode::Combined).unwrap();
        assert_eq!(
            out.attr("foo", "LIB"),
            Some(&Value::str_list(["a", "m", "m", "extra.o"]))
        );
    }

    #[test]
    fn test_linkflags_union_dedup() {
        let graph = DependencyGraph {
            requirements: vec![req(
                "foo",
                false,
                CppInfo {
                    libs: vec!["foo".to_string()],
                    sharedlinkflags: vec!["-Wl,-z".to_string(), "-s".to_string()],
                    exelinkflags: vec!["-s".to_string()],
                    ..Default::default()
                },
            )],
        };

        let out = record(&graph, Path::new("/b"), DepsMode::Combined).unwrap();
        assert_eq!(
            out.attr("foo", "LINKFLAGS"),
            Some(&Value::str_list(["-Wl,-z", "-s"]))
        );
    }

    #[test]
    fn test_build_scope_prefix_and_bin_path() {
        let graph = DependencyGraph {
            requirements: vec![req(
                "protoc",
                true,
                CppInfo {
                    bindirs: vec![PathBuf::from("bin")].into(),
                    ..Default::default()
                },
            )],
        };

        let out = record(&graph, Path::new("/pkg"), DepsMode::Combined).unwrap();

        assert_eq!(
            out.global("ALL_CONAN_PACKAGES_BUILD"),
            Some(&Value::str_list(["build_protoc"]))
        );
        assert_eq!(
            out.attr("build_protoc", "BINPATH"),
            Some(&Value::str_list(["/pkg/bin"]))
        );
        assert_eq!(
            out.attr("build_protoc", "CONAN_USE"),
            Some(&Value::str_list(["build_protoc"]))
        );
        match out.global("CONAN_BUILD_BIN_PATH") {
            Some(Value::Set(set)) => assert!(set.contains("/pkg/bin")),
            other => panic!("unexpected value: {other:?}"),
        }
        // host list stays empty but present
        assert_eq!(out.global("ALL_CONAN_PACKAGES"), Some(&Value::List(vec![])));
    }

    #[test]
    fn test_scalar_path_emits_scalar() {
        let graph = DependencyGraph {
            requirements: vec![req(
                "foo",
                false,
                CppInfo {
                    libdirs: PathProp::One(PathBuf::from("lib")),
                    ..Default::default()
                },
            )],
        };

        let out = record(&graph, Path::new("/pkg"), DepsMode::Combined).unwrap();
        assert_eq!(
            out.attr("foo", "LIBPATH"),
            Some(&Value::Str("/pkg/lib".to_string()))
        );
    }

    #[test]
    fn test_host_only_mode_accumulates_binpath() {
        let graph = DependencyGraph {
            requirements: vec![
                req(
                    "tool",
                    false,
                    CppInfo {
                        bindirs: vec![PathBuf::from("bin")].into(),
                        ..Default::default()
                    },
                ),
                req("builder", true, libs(&["b"])),
            ],
        };

        let out = record(&graph, Path::new("/pkg"), DepsMode::HostOnly).unwrap();

        match out.global("CONAN_BINPATH") {
            Some(Value::Set(set)) => assert!(set.contains("/pkg/bin")),
            other => panic!("unexpected value: {other:?}"),
        }
        // build scope is not exported in host-only mode
        assert!(out.global("ALL_CONAN_PACKAGES_BUILD").is_none());
        assert!(out.attr("build_builder", "LIB").is_none());
    }

    #[test]
    fn test_component_cycle_aborts() {
        let mut components = IndexMap::new();
        components.insert(
            "a".to_string(),
            CppInfo {
                requires: vec!["b".to_string()],
                ..Default::default()
            },
        );
        components.insert(
            "b".to_string(),
            CppInfo {
                requires: vec!["a".to_string()],
                ..Default::default()
            },
        );

        let graph = DependencyGraph {
            requirements: vec![Requirement {
                build: false,
                package: ResolvedPackage {
                    name: "pkg".to_string(),
                    cpp_info: CppInfo::default(),
                    components,
                    buildenv: IndexMap::new(),
                },
            }],
        };

        let err = record(&graph, Path::new("/b"), DepsMode::Combined).unwrap_err();
        assert!(matches!(err, GraphError::CyclicDependency { .. }));
    }
}
