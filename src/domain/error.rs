use std::io;

use thiserror::Error;

/// Library-wide error type for gitopsctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A candidate resource name violates DNS (RFC 1123) label rules.
    #[error("{name} is not a valid name: {reasons}")]
    InvalidName { name: String, reasons: String },

    /// The completed prefix pushes the derived environment name past the limit.
    #[error("the prefix {prefix} must be less than 58 characters")]
    PrefixTooLong { prefix: String },

    /// A provided secret is non-empty but shorter than the minimum.
    #[error("the secret length should be 16 or more characters")]
    SecretTooShort,

    /// The service repository URL could not be parsed.
    #[error("failed to parse the provided URL {url:?}")]
    UrlParse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// No `org/name` repository path could be derived from the URL.
    #[error("failed to get the repository name from {url:?}")]
    RepoName { url: String },

    /// The access token was rejected for the named repository.
    #[error("the token passed is incorrect for repository {repository}")]
    TokenRejected { repository: String },

    /// Git hosting client construction or transport failure.
    #[error("{0}")]
    GitHost(String),

    /// The sealed-secrets service is absent from the chosen namespace.
    #[error("the given service {service:?} is not installed in the right namespace {namespace:?}")]
    ServiceNotFound { service: String, namespace: String },

    /// Sealed-secrets lookup failed for a reason other than a missing service.
    #[error("sealed secrets could not be configured successfully")]
    SealedSecretsFailed,

    /// The user aborted an interactive prompt (e.g. Ctrl-C).
    #[error("prompt interrupted")]
    Interrupted,
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
                AppError::Interrupted
            }
            dialoguer::Error::IO(io_err) => AppError::Io(io_err),
        }
    }
}

impl AppError {
    /// True when the error represents a user-initiated prompt abort.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, AppError::Interrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_io_error_maps_to_interrupt() {
        let err: AppError =
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "read interrupted"))
                .into();
        assert!(err.is_interrupt());
    }

    #[test]
    fn other_io_error_stays_io() {
        let err: AppError =
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "gone")).into();
        assert!(!err.is_interrupt());
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn token_rejected_message_names_the_repository() {
        let err = AppError::TokenRejected { repository: "org/gitops".into() };
        assert_eq!(err.to_string(), "the token passed is incorrect for repository org/gitops");
    }
}
