use std::path::Path;

/// Non-throwing filesystem existence check.
pub trait FileChecker {
    fn exists(&self, path: &Path) -> bool;
}
