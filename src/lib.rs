//! Wafgen - a Conan dependency and toolchain generator for waf
//!
//! This crate translates a resolved Conan dependency graph and the active
//! build profile into waf `ConfigSet` files. Dependencies in waf are wired
//! up with "use" names: the built-in C/C++ task generators pick up compiler
//! flags and linker inputs from environment variables following a naming
//! convention (`LIB_openssl`, `INCLUDES_openssl`, ...). Wafgen emits those
//! variables for every Conan package and component, plus the serialized
//! build profile for a waf tool to interpret at configure time.

pub mod configset;
pub mod core;
pub mod export;
pub mod graph;
pub mod translate;
pub mod util;

pub use crate::core::cpp_info::{CppInfo, PathProp};
pub use crate::core::dependency::{DependencyGraph, Requirement, ResolvedPackage, Scope};
pub use crate::core::settings::{BuildConf, SettingsSnapshot};
pub use crate::core::usename::UseName;

pub use crate::configset::{OutputRecord, Value};
pub use crate::export::session::ExportSession;
pub use crate::graph::builder::{DepMap, DepNode};
