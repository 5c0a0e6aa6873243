//! Concrete adapters for the collaborator ports.

mod file_checker_std;
mod git_host_http;
mod sealed_secrets_http;
mod terminal_prompts;

pub use file_checker_std::StdFileChecker;
pub use git_host_http::{HttpGitHost, HttpGitHostConnector};
pub use sealed_secrets_http::HttpSealedSecrets;
pub use terminal_prompts::TerminalPrompts;
