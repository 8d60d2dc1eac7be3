//! Compiler identity mapping and ABI flags.

use crate::core::settings::SettingsSnapshot;

use super::TranslateError;

/// Waf tool names for a Conan compiler identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerNames {
    /// C++ tool name (e.g. `gxx`), if waf ships one
    pub cxx: Option<&'static str>,
    /// C tool name (e.g. `gcc`), if waf ships one
    pub cc: Option<&'static str>,
}

/// Map a Conan compiler identity to the waf tool names used for
/// auto-detection. The names are waf tool modules (see `waflib/Tools` and
/// `waflib/extras`). Unknown compilers fail fast; they can still be
/// configured manually via CC/CXX environment variables.
pub fn compiler_names(compiler: &str) -> Result<CompilerNames, TranslateError> {
    let (cxx, cc) = match compiler {
        "clang" | "apple-clang" => (Some("clangxx"), Some("clang")),
        "gcc" => (Some("gxx"), Some("gcc")),
        "msvc" => (Some("msvc"), Some("msvc")),
        "sun-cc" => (Some("suncxx"), Some("suncc")),
        "intel-cc" => (Some("icpc"), Some("icc")),
        "qcc" | "mcst-lcc" => (None, None),
        other => {
            return Err(TranslateError::UnknownCompiler {
                compiler: other.to_string(),
            })
        }
    };
    Ok(CompilerNames { cxx, cc })
}

/// ABI-affecting C++ flags derived from compiler sub-settings: the GCC
/// libstdc++ dual-ABI define and the MSVC CRT selection.
pub fn abi_cxxflags(settings: &SettingsSnapshot) -> Vec<String> {
    let mut out = Vec::new();

    if settings.threads().is_some() || settings.exception().is_some() {
        // TODO: translate MinGW threads/exception models once a profile
        // using them shows up
        tracing::warn!("MinGW threads/exception settings are not translated");
    }

    match settings.libcxx() {
        Some("libstdc++") => out.push("-D_GLIBCXX_USE_CXX11_ABI=0".to_string()),
        Some("libstdc++11") => out.push("-D_GLIBCXX_USE_CXX11_ABI=1".to_string()),
        _ => {}
    }

    if let (Some(runtime), Some(runtime_type)) = (settings.runtime(), settings.runtime_type()) {
        let mut flag = String::from("M");
        flag.push(if runtime == "dynamic" { 'D' } else { 'T' });
        if runtime_type == "Debug" {
            flag.push('d');
        }
        out.push(format!("/{}", flag));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_compilers() {
        assert_eq!(compiler_names("gcc").unwrap().cxx, Some("gxx"));
        assert_eq!(compiler_names("apple-clang").unwrap().cc, Some("clang"));
        assert_eq!(compiler_names("qcc").unwrap().cxx, None);
    }

    #[test]
    fn test_unknown_compiler_fails() {
        assert_eq!(
            compiler_names("tcc"),
            Err(TranslateError::UnknownCompiler {
                compiler: "tcc".to_string()
            })
        );
    }

    #[test]
    fn test_libcxx_abi_defines() {
        let old = SettingsSnapshot::from_pairs([("compiler.libcxx", "libstdc++")]);
        assert_eq!(abi_cxxflags(&old), vec!["-D_GLIBCXX_USE_CXX11_ABI=0"]);

        let new = SettingsSnapshot::from_pairs([("compiler.libcxx", "libstdc++11")]);
        assert_eq!(abi_cxxflags(&new), vec!["-D_GLIBCXX_USE_CXX11_ABI=1"]);

        let libcpp = SettingsSnapshot::from_pairs([("compiler.libcxx", "libc++")]);
        assert!(abi_cxxflags(&libcpp).is_empty());
    }

    #[test]
    fn test_msvc_crt_flags() {
        let cases = [
            ("dynamic", "Release", "/MD"),
            ("dynamic", "Debug", "/MDd"),
            ("static", "Release", "/MT"),
            ("static", "Debug", "/MTd"),
        ];
        for (runtime, runtime_type, expected) in cases {
            let settings = SettingsSnapshot::from_pairs([
                ("compiler.runtime", runtime),
                ("compiler.runtime_type", runtime_type),
            ]);
            assert_eq!(abi_cxxflags(&settings), vec![expected]);
        }
    }
}
