//! Settings-to-flags translation tables.
//!
//! These are the lookups the waf-side tool applies at configure time:
//! architecture to `DEST_CPU`, OS to `DEST_OS`, compiler identity to waf
//! tool names, language standard and build variant to flag bundles. All
//! tables are static; arch and OS pass unmapped values through, compiler
//! and cppstd lookups fail fast on unknown input.

pub mod build_type;
pub mod compiler;
pub mod cppstd;
pub mod platform;

use thiserror::Error;

use crate::core::settings::SettingsSnapshot;
use crate::util::diagnostic::Diagnostic;

pub use build_type::{BuildTypeFlags, CompilerFamily};

/// Error from a required table lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unknown compiler `{compiler}`")]
    UnknownCompiler { compiler: String },

    #[error("unknown C++ standard `{cppstd}` for compiler family `{family}`")]
    UnknownCppstd { family: String, cppstd: String },
}

impl TranslateError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TranslateError::UnknownCompiler { compiler } => {
                Diagnostic::error(format!("unknown compiler `{}`", compiler))
                    .with_suggestion(
                        "Select the toolchain manually via CC/CXX environment variables"
                            .to_string(),
                    )
            }

            TranslateError::UnknownCppstd { family, cppstd } => Diagnostic::error(format!(
                "no `{}` flag for C++ standard `{}`",
                family, cppstd
            ))
            .with_suggestion("Pick a cppstd value the compiler family supports".to_string()),
        }
    }
}

/// The translated view of a settings snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedSettings {
    /// waf `DEST_CPU`
    pub dest_cpu: Option<String>,
    /// waf `DEST_OS`
    pub dest_os: Option<String>,
    /// C++ compiler flags (ABI, standard, build variant)
    pub cxxflags: Vec<String>,
    /// Linker flags (build variant)
    pub linkflags: Vec<String>,
}

/// Translate a full snapshot the way the waf tool does at configure time.
pub fn apply(settings: &SettingsSnapshot) -> Result<AppliedSettings, TranslateError> {
    let mut out = AppliedSettings {
        dest_cpu: settings.arch().map(platform::dest_cpu),
        dest_os: settings.os().map(platform::dest_os),
        ..Default::default()
    };

    out.cxxflags.extend(compiler::abi_cxxflags(settings));

    if let (Some(comp), Some(std)) = (settings.compiler(), settings.cppstd()) {
        out.cxxflags.extend(cppstd::cxxflags(comp, std)?);
    }

    if let Some(variant) = settings.build_type() {
        let family = CompilerFamily::from_settings(settings);
        let flags = build_type::flags(variant, family);
        out.cxxflags.extend(flags.cxxflags);
        out.linkflags.extend(flags.linkflags);
    }

    Ok(out)
}
