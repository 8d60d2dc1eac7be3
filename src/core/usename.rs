//! Use-name normalization.
//!
//! Conan references come in three shapes:
//! - `<pkg>::<pkg>` refers to ALL components of a package
//! - `<comp>` refers to a component in the current package
//! - `<pkg>::<comp>` refers to a component in another package
//!
//! Waf `use` identifiers are flat symbols, so all of these collapse into a
//! single namespace: qualified names join with `_`, bare component names
//! get their parent package prefixed, and hyphens (legal in Conan package
//! names, not in waf env keys) become underscores.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Separator for package-qualified references.
const QUALIFIER: &str = "::";

/// Error produced by use-name normalization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UseNameError {
    #[error("invalid qualified reference `{reference}`")]
    InvalidReference { reference: String },
}

impl UseNameError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            UseNameError::InvalidReference { reference } => {
                Diagnostic::error(format!("invalid qualified reference `{}`", reference))
                    .with_context(
                        "both sides of `::` must be non-empty in a qualified reference"
                            .to_string(),
                    )
                    .with_suggestion(
                        "Check the `requires` entries of the originating package recipe"
                            .to_string(),
                    )
            }
        }
    }
}

/// A normalized waf use-name, unique within one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UseName(String);

impl UseName {
    /// Normalize a raw reference name into a use-name.
    ///
    /// `parent` is the owning package name, supplied when normalizing a
    /// bare component name. Normalization is idempotent: feeding an
    /// already-normalized name back in returns it unchanged.
    pub fn normalize(raw: &str, parent: Option<&str>) -> Result<UseName, UseNameError> {
        let name = if raw.contains(QUALIFIER) {
            let parts: Vec<&str> = raw.split(QUALIFIER).collect();
            if parts.iter().any(|p| p.is_empty()) {
                return Err(UseNameError::InvalidReference {
                    reference: raw.to_string(),
                });
            }
            if parts.len() == 2 && parts[0] == parts[1] {
                // pkg::pkg means "all components", collapse to the package
                parts[0].to_string()
            } else {
                parts.join("_")
            }
        } else if let Some(parent) = parent {
            format!("{}_{}", parent, raw)
        } else {
            raw.to_string()
        };

        Ok(UseName(name.replace('-', "_")))
    }

    /// The use-name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `build_`-prefixed form used for build-scope emission.
    pub fn build_prefixed(&self) -> String {
        format!("build_{}", self.0)
    }
}

impl fmt::Display for UseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
