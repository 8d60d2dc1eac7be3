//! Build-variant flag bundles.

use crate::core::settings::SettingsSnapshot;

/// Which flag dialect the build-variant table uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerFamily {
    /// MSVC-style flags; also used for clang targeting Windows
    Msvc,
    /// GCC-style flags, used for everything else
    Gnu,
}

impl CompilerFamily {
    /// Pick the dialect for a settings snapshot: msvc, or clang on
    /// Windows, gets MSVC flags; everything else gets GCC flags.
    pub fn from_settings(settings: &SettingsSnapshot) -> CompilerFamily {
        let compiler = settings.compiler();
        let windows = settings.os().is_some_and(|os| os.contains("Windows"));

        if compiler == Some("msvc") || (windows && compiler == Some("clang")) {
            CompilerFamily::Msvc
        } else {
            CompilerFamily::Gnu
        }
    }
}

/// Compiler and linker flags for one build variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildTypeFlags {
    pub cxxflags: Vec<String>,
    pub linkflags: Vec<String>,
}

/// Optimization/debug flag bundle for a Conan `build_type`. Unknown
/// variants yield no flags, matching the original's passthrough.
pub fn flags(build_type: &str, family: CompilerFamily) -> BuildTypeFlags {
    let (cxxflags, linkflags): (&[&str], &[&str]) = match family {
        CompilerFamily::Msvc => match build_type {
            // /Zi generates PDBs, /Od disables optimizations
            "Debug" => (&["/Zi", "/Od"], &["/debug"]),
            // /incremental:no is smaller output, functionally equivalent
            "Release" => (&["/O2", "/DNDEBUG"], &["/incremental:no"]),
            "RelWithDebInfo" => (&["/Zi", "/O2", "/DNDEBUG"], &["/debug"]),
            "MinSizeRel" => (&["/O1", "/DNDEBUG"], &["/incremental:no"]),
            _ => (&[], &[]),
        },
        CompilerFamily::Gnu => match build_type {
            "Debug" => (&["-g", "-O0"], &[]),
            "Release" => (&["-O3", "-DNDEBUG"], &[]),
            "RelWithDebInfo" => (&["-g", "-O2", "-DNDEBUG"], &[]),
            "MinSizeRel" => (&["-Os", "-DNDEBUG"], &[]),
            _ => (&[], &[]),
        },
    };

    BuildTypeFlags {
        cxxflags: cxxflags.iter().map(|f| f.to_string()).collect(),
        linkflags: linkflags.iter().map(|f| f.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gnu_variants() {
        assert_eq!(flags("Debug", CompilerFamily::Gnu).cxxflags, vec!["-g", "-O0"]);
        assert_eq!(
            flags("Release", CompilerFamily::Gnu).cxxflags,
            vec!["-O3", "-DNDEBUG"]
        );
        assert_eq!(
            flags("RelWithDebInfo", CompilerFamily::Gnu).cxxflags,
            vec!["-g", "-O2", "-DNDEBUG"]
        );
        assert_eq!(
            flags("MinSizeRel", CompilerFamily::Gnu).cxxflags,
            vec!["-Os", "-DNDEBUG"]
        );
        assert!(flags("Release", CompilerFamily::Gnu).linkflags.is_empty());
    }

    #[test]
    fn test_msvc_variants() {
        let debug = flags("Debug", CompilerFamily::Msvc);
        assert_eq!(debug.cxxflags, vec!["/Zi", "/Od"]);
        assert_eq!(debug.linkflags, vec!["/debug"]);

        let release = flags("Release", CompilerFamily::Msvc);
        assert_eq!(release.cxxflags, vec!["/O2", "/DNDEBUG"]);
        assert_eq!(release.linkflags, vec!["/incremental:no"]);
    }

    #[test]
    fn test_family_selection() {
        let msvc = SettingsSnapshot::from_pairs([("compiler", "msvc")]);
        assert_eq!(CompilerFamily::from_settings(&msvc), CompilerFamily::Msvc);

        let clang_win =
            SettingsSnapshot::from_pairs([("os", "Windows"), ("compiler", "clang")]);
        assert_eq!(
            CompilerFamily::from_settings(&clang_win),
            CompilerFamily::Msvc
        );

        let clang_linux =
            SettingsSnapshot::from_pairs([("os", "Linux"), ("compiler", "clang")]);
        assert_eq!(
            CompilerFamily::from_settings(&clang_linux),
            CompilerFamily::Gnu
        );
    }

    #[test]
    fn test_unknown_variant_is_empty() {
        assert_eq!(flags("Profile", CompilerFamily::Gnu), BuildTypeFlags::default());
    }
}
