//! gitopsctl: interactively bootstrap GitOps pipeline configuration for a
//! Kubernetes continuous-delivery workflow.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

pub use app::bootstrap::{BootstrapAnswers, BootstrapOptions};
pub use app::session::{Disposition, ErrorHandler};
pub use domain::AppError;

use services::StdFileChecker;

/// Run the interactive bootstrap wizard and return the collected answers.
pub fn bootstrap(opts: BootstrapOptions) -> Result<BootstrapAnswers, AppError> {
    app::bootstrap::run(opts)
}

/// Validate a new environment name against an existing pipelines folder.
pub fn environment_add(env_name: &str, pipelines_folder: &Path) -> Result<(), AppError> {
    app::environment::add(&StdFileChecker, env_name, pipelines_folder)
}
