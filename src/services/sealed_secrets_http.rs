//! Sealed-secrets controller client implementation using reqwest.
//!
//! The controller's public key is served by the sealed-secrets service
//! behind the Kubernetes API server's service proxy, at `/v1/cert.pem`.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::NamespacedService;
use crate::ports::{SealedSecretsClient, SealedSecretsError};

const FETCH_TIMEOUT_SECS: u64 = 10;

/// Client that resolves the sealed-secrets public key through the cluster's
/// API-server service proxy.
#[derive(Clone)]
pub struct HttpSealedSecrets {
    api_server: Url,
    client: Client,
}

impl std::fmt::Debug for HttpSealedSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSealedSecrets").field("api_server", &self.api_server).finish()
    }
}

impl HttpSealedSecrets {
    pub fn new(api_server: Url) -> Result<Self, SealedSecretsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| SealedSecretsError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { api_server, client })
    }

    fn cert_endpoint(&self, service: &NamespacedService) -> Result<Url, SealedSecretsError> {
        let path = format!(
            "api/v1/namespaces/{}/services/http:{}:/proxy/v1/cert.pem",
            service.namespace, service.name
        );
        self.api_server
            .join(&path)
            .map_err(|e| SealedSecretsError::Transport(format!("invalid proxy endpoint: {e}")))
    }
}

impl SealedSecretsClient for HttpSealedSecrets {
    fn fetch_public_key(&self, service: &NamespacedService) -> Result<String, SealedSecretsError> {
        let endpoint = self.cert_endpoint(service)?;

        let response = self
            .client
            .get(endpoint)
            .send()
            .map_err(|e| SealedSecretsError::Transport(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                response.text().map_err(|e| SealedSecretsError::Transport(e.to_string()))
            }
            StatusCode::NOT_FOUND => Err(SealedSecretsError::ServiceNotFound {
                name: service.name.clone(),
                namespace: service.namespace.clone(),
            }),
            status => {
                Err(SealedSecretsError::Transport(format!("certificate fetch returned {status}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> NamespacedService {
        NamespacedService::new("sealed-secrets-controller", "kube-system")
    }

    #[test]
    fn fetches_certificate_from_service_proxy() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock(
                "GET",
                "/api/v1/namespaces/kube-system/services/http:sealed-secrets-controller:/proxy/v1/cert.pem",
            )
            .with_status(200)
            .with_body("-----BEGIN CERTIFICATE-----")
            .create();

        let client = HttpSealedSecrets::new(Url::parse(&server.url()).unwrap()).unwrap();
        let pem = client.fetch_public_key(&service()).unwrap();

        mock.assert();
        assert!(pem.starts_with("-----BEGIN CERTIFICATE-----"));
    }

    #[test]
    fn missing_service_yields_structured_not_found() {
        let mut server = mockito::Server::new();
        server
            .mock(
                "GET",
                "/api/v1/namespaces/kube-system/services/http:sealed-secrets-controller:/proxy/v1/cert.pem",
            )
            .with_status(404)
            .create();

        let client = HttpSealedSecrets::new(Url::parse(&server.url()).unwrap()).unwrap();
        let err = client.fetch_public_key(&service()).unwrap_err();
        assert!(matches!(err, SealedSecretsError::ServiceNotFound { .. }));
    }

    #[test]
    fn server_error_yields_transport_failure() {
        let mut server = mockito::Server::new();
        server
            .mock(
                "GET",
                "/api/v1/namespaces/kube-system/services/http:sealed-secrets-controller:/proxy/v1/cert.pem",
            )
            .with_status(500)
            .create();

        let client = HttpSealedSecrets::new(Url::parse(&server.url()).unwrap()).unwrap();
        let err = client.fetch_public_key(&service()).unwrap_err();
        assert!(matches!(err, SealedSecretsError::Transport(_)));
    }
}
