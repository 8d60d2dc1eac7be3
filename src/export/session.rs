//! Per-configuration export session.
//!
//! The session carries the output/base directories and remembers which
//! generators already ran, so the same export cannot silently run twice
//! for one build configuration. The original relied on the host runtime's
//! duplicate-generator check; here the state is explicit and local.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;
use crate::util::fs;

/// Error during export bookkeeping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("generator `{generator}` already ran for this configuration")]
    DuplicateInvocation { generator: String },
}

impl ExportError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ExportError::DuplicateInvocation { generator } => {
                Diagnostic::error(format!(
                    "generator `{}` already ran for this configuration",
                    generator
                ))
                .with_suggestion(
                    "Invoke each generator at most once per build configuration".to_string(),
                )
            }
        }
    }
}

/// State for one export invocation.
#[derive(Debug)]
pub struct ExportSession {
    /// Directory the generated files are written into
    out_dir: PathBuf,

    /// Base directory relative paths in the graph are resolved against
    base_dir: PathBuf,

    /// Generators that already ran in this session
    ran: HashSet<String>,
}

impl ExportSession {
    /// Create a session writing into `out_dir`, resolving relative paths
    /// against `out_dir` as well.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        let out_dir = out_dir.into();
        let base_dir = out_dir.clone();
        ExportSession {
            out_dir,
            base_dir,
            ran: HashSet::new(),
        }
    }

    /// Override the base directory for path absolutization.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Register a generator run, failing fast on a duplicate. Nothing is
    /// written before this check passes.
    pub fn claim(&mut self, generator: &str) -> Result<(), ExportError> {
        if !self.ran.insert(generator.to_string()) {
            return Err(ExportError::DuplicateInvocation {
                generator: generator.to_string(),
            });
        }
        Ok(())
    }

    /// Write a generated file into the output directory.
    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf> {
        let path = self.out_dir.join(filename);
        fs::write_string(&path, content)?;
        tracing::debug!(file = %path.display(), bytes = content.len(), "wrote generator output");
        Ok(path)
    }
}
