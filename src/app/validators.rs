//! Validators gating each interactive prompt.
//!
//! Each validator is a small value object holding its captured context and
//! exposing one `validate` method. A validator either accepts the answer or
//! returns the rejection the prompt loop redisplays; none of them may end
//! the process.

use std::path::PathBuf;

use url::Url;

use crate::domain::{
    AppError, NamespacedService, STAGE_SUFFIX, complete_prefix, repo_full_name, validate_name,
};
use crate::ports::{
    FileChecker, GitHostClient, GitHostConnector, PromptPort, SealedSecretsClient,
    SealedSecretsError,
};

/// Minimum length of a non-empty secret.
pub const MIN_SECRET_LENGTH: usize = 16;

/// Configuration file the overwrite check looks for.
pub const PIPELINES_FILE: &str = "pipelines.yaml";

/// Validates resource names against DNS-1123 label rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameValidator;

impl NameValidator {
    pub fn validate(&self, name: &str) -> Result<(), AppError> {
        validate_name(name)
    }
}

/// Validates a resource-name prefix by checking the longest name derived
/// from it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixValidator;

impl PrefixValidator {
    pub fn validate(&self, prefix_input: &str) -> Result<(), AppError> {
        let prefix = complete_prefix(prefix_input);
        let candidate = format!("{prefix}{STAGE_SUFFIX}");
        // The enforced ceiling is 64 on the suffixed name; the user-facing
        // message quotes 58.
        if candidate.len() >= 64 {
            return Err(AppError::PrefixTooLong { prefix });
        }
        validate_name(&candidate)
    }
}

/// Enforces the minimum secret length.
///
/// An empty secret passes: emptiness means "no secret provided" and is
/// resolved elsewhere, it is not a length violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretValidator;

impl SecretValidator {
    pub fn validate(&self, secret: &str) -> Result<(), AppError> {
        if !secret.is_empty() && secret.len() < MIN_SECRET_LENGTH {
            return Err(AppError::SecretTooShort);
        }
        Ok(())
    }
}

/// Reacts to the overwrite decision for an existing configuration.
///
/// Accepts any answer. When the operator answers `"no"` and `pipelines.yaml`
/// already exists at the target path, a follow-up prompt for an alternate
/// output path runs before this validator returns. The collected path never
/// feeds back into the verdict.
#[derive(Debug)]
pub struct OverwriteValidator<F, P> {
    target: PathBuf,
    files: F,
    prompts: P,
}

impl<F: FileChecker, P: PromptPort> OverwriteValidator<F, P> {
    pub fn new(target: impl Into<PathBuf>, files: F, prompts: P) -> Self {
        Self { target: target.into(), files, prompts }
    }

    pub fn validate(&self, answer: &str) -> Result<(), AppError> {
        if answer == "no" && self.files.exists(&self.target.join(PIPELINES_FILE)) {
            match self.prompts.enter_output_path() {
                Ok(_) => {}
                Err(err) if err.is_interrupt() => return Err(err),
                Err(err) => {
                    tracing::debug!(error = %err, "output path prompt failed");
                }
            }
        }
        Ok(())
    }
}

/// Confirms an access token can reach the service repository.
///
/// Performs one uncached network round trip per attempt. The lookup's real
/// cause is logged at debug level and replaced with a single generic message
/// so credentials and backend details never reach the prompt.
#[derive(Debug)]
pub struct AccessTokenValidator<G> {
    service_repo_url: String,
    connector: G,
}

impl<G: GitHostConnector> AccessTokenValidator<G> {
    pub fn new(service_repo_url: impl Into<String>, connector: G) -> Self {
        Self { service_repo_url: service_repo_url.into(), connector }
    }

    pub fn validate(&self, token: &str) -> Result<(), AppError> {
        let client = self.connector.connect(&self.service_repo_url, token)?;

        let parsed = Url::parse(&self.service_repo_url).map_err(|source| AppError::UrlParse {
            url: self.service_repo_url.clone(),
            source,
        })?;
        let repository = repo_full_name(&parsed)?;

        if let Err(cause) = client.find_repository(&repository) {
            tracing::debug!(%repository, error = %cause, "access token rejected by repository lookup");
            return Err(AppError::TokenRejected { repository });
        }
        Ok(())
    }
}

/// Confirms the sealed-secrets service exists in the chosen namespace.
///
/// The shared `service` ref is fully populated before the lookup runs, so
/// the caller can read back the operator's answers whatever the outcome.
#[derive(Debug)]
pub struct SealedSecretValidator<C> {
    client: C,
}

impl<C: SealedSecretsClient> SealedSecretValidator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn validate(
        &self,
        name: &str,
        namespace: &str,
        service: &mut NamespacedService,
    ) -> Result<(), AppError> {
        service.name = name.to_string();
        service.namespace = namespace.to_string();

        match self.client.fetch_public_key(service) {
            Ok(_) => Ok(()),
            Err(SealedSecretsError::ServiceNotFound { .. }) => Err(AppError::ServiceNotFound {
                service: service.name.clone(),
                namespace: service.namespace.clone(),
            }),
            Err(cause) => {
                tracing::debug!(error = %cause, "sealed-secrets public key fetch failed");
                Err(AppError::SealedSecretsFailed)
            }
        }
    }
}
