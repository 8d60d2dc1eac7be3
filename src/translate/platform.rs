//! Architecture and OS mapping.

/// Conan arch values grouped by waf `DEST_CPU` family, from Conan's
/// settings.yml crossed with `waflib.Tools.c_config.MACRO_TO_DEST_CPU`.
const ARCH_MAP: &[(&str, &[&str])] = &[
    ("x86_64", &["x86_64"]),
    ("x86", &["x86"]),
    ("mips", &["mips", "mips64"]),
    ("sparc", &["sparc", "sparcv9"]),
    (
        "arm",
        &[
            "armv4", "armv4i", "armv5el", "armv5hf", "armv6", "armv7", "armv7hf", "armv7s",
            "armv7k", "armv8", "armv8_32", "armv8.3",
        ],
    ),
    ("powerpc", &["ppc32be", "ppc32", "ppc64le", "ppc64"]),
    ("sh", &["sh4le"]),
    ("s390", &["s390"]),
    ("s390x", &["s390x"]),
    ("xtensa", &["xtensalx6", "xtensalx106", "xtensalx7"]),
    (
        "e2k",
        &["e2k-v2", "e2k-v3", "e2k-v4", "e2k-v5", "e2k-v6", "e2k-v7"],
    ),
    // conan arches with no waf family (avr, asm.js, wasm, ...) fall through
];

/// Map a Conan arch to the waf `DEST_CPU` family. Unmapped values pass
/// through verbatim; the original arch is always available to consumers in
/// the settings blob.
pub fn dest_cpu(arch: &str) -> String {
    for (family, arches) in ARCH_MAP {
        if arches.contains(&arch) {
            return (*family).to_string();
        }
    }
    arch.to_string()
}

/// Map a Conan OS name to waf's `unversioned_sys_platform()` vocabulary:
/// two hard renames, lowercase passthrough for everything else.
pub fn dest_os(os: &str) -> String {
    match os {
        "Macos" => "darwin".to_string(),
        "Windows" => "win32".to_string(),
        other => other.to_lowercase(),
    }
}
