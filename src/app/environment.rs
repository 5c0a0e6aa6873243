//! The `environment add` command: validate a new environment name against
//! an existing pipelines folder.

use std::io;
use std::path::Path;

use crate::domain::{AppError, validate_name};
use crate::ports::FileChecker;

pub fn add<F: FileChecker>(
    files: &F,
    env_name: &str,
    pipelines_folder: &Path,
) -> Result<(), AppError> {
    validate_name(env_name)?;

    if !files.exists(pipelines_folder) {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("pipelines folder {} does not exist", pipelines_folder.display()),
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedChecker(bool);

    impl FileChecker for FixedChecker {
        fn exists(&self, _path: &Path) -> bool {
            self.0
        }
    }

    #[test]
    fn valid_name_and_existing_folder_are_accepted() {
        assert!(add(&FixedChecker(true), "new-env", Path::new("pipelines")).is_ok());
    }

    #[test]
    fn invalid_env_name_is_rejected() {
        let err = add(&FixedChecker(true), "New_Env", Path::new("pipelines")).unwrap_err();
        assert!(err.to_string().contains("New_Env"));
    }

    #[test]
    fn missing_pipelines_folder_is_rejected() {
        let err = add(&FixedChecker(false), "new-env", Path::new("missing")).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
