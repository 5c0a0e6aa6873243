//! Git hosting client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

use crate::domain::AppError;
use crate::ports::{GitHostClient, GitHostConnector, Repository};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Builds [`HttpGitHost`] clients against a GitHub-style repositories API.
#[derive(Debug, Clone)]
pub struct HttpGitHostConnector {
    api_base: Url,
}

impl HttpGitHostConnector {
    pub fn new() -> Self {
        let api_base = Url::parse(DEFAULT_API_BASE).expect("default API base URL is valid");
        Self { api_base }
    }

    /// Point the connector at a different API endpoint, e.g. a GitHub
    /// Enterprise installation or a test server.
    pub fn with_api_base(api_base: Url) -> Self {
        Self { api_base }
    }
}

impl Default for HttpGitHostConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHostConnector for HttpGitHostConnector {
    type Client = HttpGitHost;

    fn connect(&self, repo_url: &str, token: &str) -> Result<HttpGitHost, AppError> {
        let parsed = Url::parse(repo_url)
            .map_err(|source| AppError::UrlParse { url: repo_url.to_string(), source })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::GitHost(format!(
                "unsupported URL scheme {:?} in {repo_url}",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(AppError::GitHost(format!("no host in repository URL {repo_url}")));
        }
        if token.trim().is_empty() {
            return Err(AppError::GitHost("the access token must not be empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| AppError::GitHost("the access token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("gitopsctl"));

        let client = Client::builder()
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::GitHost(format!("failed to create HTTP client: {e}")))?;

        Ok(HttpGitHost { api_base: self.api_base.clone(), client })
    }
}

/// HTTP client for a git hosting repositories API, bound to one token.
#[derive(Clone)]
pub struct HttpGitHost {
    api_base: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHost").field("api_base", &self.api_base).finish()
    }
}

impl GitHostClient for HttpGitHost {
    fn find_repository(&self, full_name: &str) -> Result<Repository, AppError> {
        let endpoint = self
            .api_base
            .join(&format!("repos/{full_name}"))
            .map_err(|e| AppError::GitHost(format!("invalid repository endpoint: {e}")))?;

        let response = self
            .client
            .get(endpoint)
            .send()
            .map_err(|e| AppError::GitHost(format!("repository lookup failed: {e}")))?;

        match response.status() {
            status if status.is_success() => response
                .json::<Repository>()
                .map_err(|e| AppError::GitHost(format!("malformed repository response: {e}"))),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                Err(AppError::GitHost(format!("repository {full_name} is not accessible")))
            }
            status => {
                Err(AppError::GitHost(format!("repository lookup failed with status {status}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_rejects_unparsable_url() {
        let connector = HttpGitHostConnector::new();
        let err = connector.connect("://nope", "token").unwrap_err();
        assert!(err.to_string().contains("://nope"));
    }

    #[test]
    fn connect_rejects_non_http_scheme() {
        let connector = HttpGitHostConnector::new();
        let err = connector.connect("ftp://example.com/org/repo", "token").unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn connect_rejects_empty_token() {
        let connector = HttpGitHostConnector::new();
        assert!(connector.connect("https://github.com/org/repo", "  ").is_err());
    }

    #[test]
    fn finds_repository_via_api() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/repos/org/gitops")
            .match_header("authorization", "Bearer s3cret")
            .with_status(200)
            .with_body(r#"{"full_name": "org/gitops", "private": true}"#)
            .create();

        let connector =
            HttpGitHostConnector::with_api_base(Url::parse(&server.url()).unwrap());
        let client = connector.connect("https://github.com/org/gitops", "s3cret").unwrap();
        let repo = client.find_repository("org/gitops").unwrap();

        mock.assert();
        assert_eq!(repo.full_name, "org/gitops");
        assert!(repo.private);
    }

    #[test]
    fn unauthorized_lookup_fails() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/repos/org/gitops").with_status(401).create();

        let connector =
            HttpGitHostConnector::with_api_base(Url::parse(&server.url()).unwrap());
        let client = connector.connect("https://github.com/org/gitops", "bad").unwrap();
        assert!(client.find_repository("org/gitops").is_err());
    }
}
