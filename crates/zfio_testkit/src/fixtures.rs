//! Scratch files for stream tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory removed on drop.
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Creates a new empty scratch directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Root of the directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the directory.
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Path of `name` inside the directory, as a string.
    pub fn path_str(&self, name: &str) -> String {
        self.join(name)
            .to_str()
            .expect("Temp path is not valid UTF-8")
            .to_string()
    }

    /// Reads the whole file `name` without any decoding.
    pub fn read_raw(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.join(name)).expect("Failed to read scratch file")
    }
}

impl Default for ScratchDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Every file name suffix and mode combination that reaches a working
/// backend: `(file name, write mode, read mode)`.
pub fn backend_cases() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("plain.txt", "w", "r"),
        ("data.txt.gz", "w", "r"),
        ("data-gz", "w.gz", "r.gz"),
        ("data.txt.bz2", "w", "r"),
        ("data-bz2", "w.bz2", "r.bz2"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_paths_live_inside() {
        let dir = ScratchDir::new();
        let p = dir.path_str("x.gz");
        assert!(p.starts_with(dir.path().to_str().unwrap()));
        assert!(p.ends_with("x.gz"));
    }

    #[test]
    fn scratch_dir_is_removed() {
        let dir = ScratchDir::new();
        let root = dir.path().to_path_buf();
        std::fs::write(dir.join("f"), b"1").unwrap();
        assert_eq!(dir.read_raw("f"), b"1");
        drop(dir);
        assert!(!root.exists());
    }

    #[test]
    fn cases_cover_both_selection_methods() {
        let cases = backend_cases();
        assert!(cases.iter().any(|(name, _, _)| name.ends_with(".gz")));
        assert!(cases.iter().any(|(_, mode, _)| mode.ends_with(".gz")));
        assert!(cases.iter().any(|(name, _, _)| name.ends_with(".bz2")));
        assert!(cases.iter().any(|(_, mode, _)| mode.ends_with(".bz2")));
    }
}
