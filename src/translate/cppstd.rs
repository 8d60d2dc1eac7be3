//! Language-standard flag tables.

use super::TranslateError;

/// GCC-style standards: two-token `--std <value>` form.
const GCC_TABLE: &[(&str, &[&str])] = &[
    ("98", &["--std", "c++98"]),
    ("gnu98", &["--std", "gnu++98"]),
    ("11", &["--std", "c++11"]),
    ("gnu11", &["--std", "gnu++11"]),
    ("14", &["--std", "c++14"]),
    ("gnu14", &["--std", "gnu++14"]),
    ("17", &["--std", "c++17"]),
    ("gnu17", &["--std", "gnu++17"]),
    ("20", &["--std", "c++20"]),
    ("gnu20", &["--std", "gnu++20"]),
    ("23", &["--std", "c++23"]),
    ("gnu23", &["--std", "gnu++23"]),
];

const MSVC_TABLE: &[(&str, &[&str])] = &[
    ("14", &["/std:c++14"]),
    ("17", &["/std:c++17"]),
    ("20", &["/std:c++20"]),
    ("23", &["/std:latest"]),
];

/// C++ standard flags for the given compiler identity. Compilers without
/// their own table use the gcc one (clang and friends accept it); a value
/// missing from the selected table is an error.
pub fn cxxflags(compiler: &str, cppstd: &str) -> Result<Vec<String>, TranslateError> {
    let (family, table) = match compiler {
        "msvc" => ("msvc", MSVC_TABLE),
        _ => ("gcc", GCC_TABLE),
    };

    table
        .iter()
        .find(|(std, _)| *std == cppstd)
        .map(|(_, flags)| flags.iter().map(|f| f.to_string()).collect())
        .ok_or_else(|| TranslateError::UnknownCppstd {
            family: family.to_string(),
            cppstd: cppstd.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcc_two_token_form() {
        assert_eq!(cxxflags("gcc", "17").unwrap(), vec!["--std", "c++17"]);
        assert_eq!(cxxflags("gcc", "gnu20").unwrap(), vec!["--std", "gnu++20"]);
    }

    #[test]
    fn test_msvc_single_token_form() {
        assert_eq!(cxxflags("msvc", "20").unwrap(), vec!["/std:c++20"]);
        assert_eq!(cxxflags("msvc", "23").unwrap(), vec!["/std:latest"]);
    }

    #[test]
    fn test_unknown_family_falls_back_to_gcc() {
        assert_eq!(cxxflags("clang", "14").unwrap(), vec!["--std", "c++14"]);
        assert_eq!(
            cxxflags("intel-cc", "gnu11").unwrap(),
            vec!["--std", "gnu++11"]
        );
    }

    #[test]
    fn test_missing_entry_is_an_error() {
        assert_eq!(
            cxxflags("msvc", "gnu17"),
            Err(TranslateError::UnknownCppstd {
                family: "msvc".to_string(),
                cppstd: "gnu17".to_string()
            })
        );
        assert!(cxxflags("gcc", "26").is_err());
    }
}
