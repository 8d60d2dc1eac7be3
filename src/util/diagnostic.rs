//! User-friendly diagnostic messages.
//!
//! Every error surfaced to the user should carry the root cause, the
//! conflicting facts, and a suggested fix. Errors are unrecoverable at the
//! point raised; the host build halts on the first one.

use std::fmt;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Error,
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Warning,
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add a context line.
    pub fn with_context(mut self, context: String) -> Self {
        self.context.push(context);
        self
    }

    /// Add a suggested fix.
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// Format for terminal output. `color` enables ANSI severity coloring.
    pub fn format(&self, color: bool) -> String {
        let mut out = String::new();

        if color {
            let code = match self.severity {
                Severity::Error => "31",
                Severity::Warning => "33",
            };
            out.push_str(&format!(
                "\x1b[{}m{}\x1b[0m: {}\n",
                code, self.severity, self.message
            ));
        } else {
            out.push_str(&format!("{}: {}\n", self.severity, self.message));
        }

        for line in &self.context {
            out.push_str(&format!("  note: {}\n", line));
        }

        for suggestion in &self.suggestions {
            out.push_str(&format!("  help: {}\n", suggestion));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}
