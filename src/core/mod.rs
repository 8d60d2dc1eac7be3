//! Core data structures for wafgen.
//!
//! This module contains the foundational types used throughout wafgen:
//! - Normalized use names (the waf-side symbolic identifiers)
//! - Typed cpp_info attribute bundles
//! - The resolved dependency graph as handed over by Conan
//! - The immutable settings snapshot and global build configuration

pub mod cpp_info;
pub mod dependency;
pub mod settings;
pub mod usename;

pub use cpp_info::CppInfo;
pub use dependency::{DependencyGraph, Requirement, ResolvedPackage, Scope};
pub use settings::{BuildConf, SettingsSnapshot};
pub use usename::UseName;
