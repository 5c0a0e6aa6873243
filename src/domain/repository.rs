//! Deriving an `org/name` repository path from a hosting URL.

use url::Url;

use super::AppError;

/// Derive the short `org/name` form of a repository from its URL.
///
/// Strips a `.git` suffix when present. Fails when the URL path does not
/// contain exactly an organization and a repository segment.
pub fn repo_full_name(url: &Url) -> Result<String, AppError> {
    let path = url.path().trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let mut segments = path.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(org), Some(name), None) if !org.is_empty() && !name.is_empty() => {
            Ok(format!("{org}/{name}"))
        }
        _ => Err(AppError::RepoName { url: url.to_string() }),
    }
}
