//! The build profile snapshot and global build configuration.
//!
//! Settings are captured once per invocation and passed through to waf
//! uninterpreted; the flag translation in [`crate::translate`] reads the
//! same snapshot on the consumer side.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Immutable key-value snapshot of the active Conan profile.
///
/// Keys follow Conan's flat serialization (`os`, `arch`, `compiler`,
/// `compiler.cppstd`, `build_type`, ...). Never mutated after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsSnapshot {
    values: IndexMap<String, String>,
}

impl SettingsSnapshot {
    /// Create a snapshot from key-value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        SettingsSnapshot {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a raw setting value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterate all settings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn os(&self) -> Option<&str> {
        self.get("os")
    }

    pub fn os_version(&self) -> Option<&str> {
        self.get("os.version")
    }

    pub fn os_subsystem(&self) -> Option<&str> {
        self.get("os.subsystem")
    }

    pub fn os_api_level(&self) -> Option<&str> {
        self.get("os.api_level")
    }

    pub fn os_sdk(&self) -> Option<&str> {
        self.get("os.sdk")
    }

    pub fn os_sdk_version(&self) -> Option<&str> {
        self.get("os.sdk_version")
    }

    pub fn arch(&self) -> Option<&str> {
        self.get("arch")
    }

    pub fn compiler(&self) -> Option<&str> {
        self.get("compiler")
    }

    pub fn compiler_version(&self) -> Option<&str> {
        self.get("compiler.version")
    }

    pub fn cppstd(&self) -> Option<&str> {
        self.get("compiler.cppstd")
    }

    pub fn libcxx(&self) -> Option<&str> {
        self.get("compiler.libcxx")
    }

    pub fn runtime(&self) -> Option<&str> {
        self.get("compiler.runtime")
    }

    pub fn runtime_type(&self) -> Option<&str> {
        self.get("compiler.runtime_type")
    }

    pub fn threads(&self) -> Option<&str> {
        self.get("compiler.threads")
    }

    pub fn exception(&self) -> Option<&str> {
        self.get("compiler.exception")
    }

    pub fn build_type(&self) -> Option<&str> {
        self.get("build_type")
    }
}

/// Global build-wide flags from the `tools.build:*` configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConf {
    pub cflags: Vec<String>,
    pub cxxflags: Vec<String>,
    pub defines: Vec<String>,
    pub sharedlinkflags: Vec<String>,
    pub exelinkflags: Vec<String>,
}

impl BuildConf {
    /// The combined link flags as waf consumes them: exe flags first, then
    /// shared flags, concatenated without dedup.
    pub fn linkflags(&self) -> Vec<String> {
        let mut out = self.exelinkflags.clone();
        out.extend(self.sharedlinkflags.iter().cloned());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let settings = SettingsSnapshot::from_pairs([
            ("os", "Linux"),
            ("arch", "x86_64"),
            ("compiler", "gcc"),
            ("compiler.cppstd", "17"),
            ("build_type", "Release"),
        ]);

        assert_eq!(settings.os(), Some("Linux"));
        assert_eq!(settings.cppstd(), Some("17"));
        assert_eq!(settings.runtime(), None);
    }

    #[test]
    fn test_conf_linkflags_order() {
        let conf = BuildConf {
            exelinkflags: vec!["-Wl,-a".to_string()],
            sharedlinkflags: vec!["-Wl,-b".to_string()],
            ..Default::default()
        };
        assert_eq!(conf.linkflags(), vec!["-Wl,-a", "-Wl,-b"]);
    }
}
