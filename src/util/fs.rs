//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Write a string to a file, creating parent directories if needed.
/// Fully overwrites any previous file of the same name.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Make a path absolute against `base` (left alone if already absolute).
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolutize() {
        let base = Path::new("/work/build");
        assert_eq!(
            absolutize(base, Path::new("include")),
            PathBuf::from("/work/build/include")
        );
        assert_eq!(
            absolutize(base, Path::new("/opt/lib")),
            PathBuf::from("/opt/lib")
        );
    }

    #[test]
    fn test_write_and_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.py");

        write_string(&path, "X = 'y'\n").unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "X = 'y'\n");
    }
}
