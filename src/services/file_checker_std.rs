use std::path::Path;

use crate::ports::FileChecker;

/// Existence check backed by the process filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileChecker;

impl FileChecker for StdFileChecker {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_existing_and_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("pipelines.yaml");
        std::fs::write(&file, "config: {}\n").unwrap();

        let checker = StdFileChecker;
        assert!(checker.exists(&file));
        assert!(!checker.exists(&dir.path().join("absent.yaml")));
    }
}
