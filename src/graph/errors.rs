//! Graph error types and diagnostics.

use thiserror::Error;

use crate::core::usename::UseNameError;
use crate::util::diagnostic::Diagnostic;

/// Error during graph construction or ordering.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("cyclic dependencies at `{usename}`")]
    CyclicDependency {
        usename: String,
        requires: Vec<String>,
    },

    #[error(transparent)]
    InvalidName(#[from] UseNameError),
}

impl GraphError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            GraphError::CyclicDependency { usename, requires } => {
                Diagnostic::error(format!(
                    "cyclic dependencies detected at `{}`",
                    usename
                ))
                .with_context(format!("`{}` requires: {}", usename, requires.join(", ")))
                .with_suggestion(
                    "Break the cycle by restructuring the package's component requires"
                        .to_string(),
                )
            }

            GraphError::InvalidName(err) => err.to_diagnostic(),
        }
    }
}
