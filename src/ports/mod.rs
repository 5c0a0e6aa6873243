//! Traits at the seams between the interactive session and its collaborators.

mod file_checker;
mod git_host;
mod prompts;
mod sealed_secrets;

pub use file_checker::FileChecker;
pub use git_host::{GitHostClient, GitHostConnector, Repository};
pub use prompts::PromptPort;
pub use sealed_secrets::{SealedSecretsClient, SealedSecretsError};
