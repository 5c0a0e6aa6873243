use thiserror::Error;

use crate::domain::NamespacedService;

/// Failure modes of a sealed-secrets public-key lookup.
///
/// `ServiceNotFound` is a structured signal so callers never have to match
/// on message text to detect a missing service.
#[derive(Debug, Error)]
pub enum SealedSecretsError {
    #[error("services {name:?} not found in namespace {namespace:?}")]
    ServiceNotFound { name: String, namespace: String },

    #[error("cannot fetch certificate: {0}")]
    Transport(String),
}

/// Client for the in-cluster sealed-secrets controller.
pub trait SealedSecretsClient {
    /// Fetch the controller's public key material (PEM) for sealing secrets.
    fn fetch_public_key(&self, service: &NamespacedService) -> Result<String, SealedSecretsError>;
}
