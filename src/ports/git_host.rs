use serde::Deserialize;

use crate::domain::AppError;

/// Repository metadata returned by the hosting service.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub full_name: String,
    #[serde(default)]
    pub private: bool,
}

/// A connected git hosting client, bound to one repository URL and token.
pub trait GitHostClient {
    /// Fetch repository metadata by its `org/name` path.
    fn find_repository(&self, full_name: &str) -> Result<Repository, AppError>;
}

/// Builds git hosting clients from a repository URL and an access token.
///
/// Construction validates the URL form and credentials shape; it does not
/// perform network I/O.
pub trait GitHostConnector {
    type Client: GitHostClient;

    fn connect(&self, repo_url: &str, token: &str) -> Result<Self::Client, AppError>;
}
