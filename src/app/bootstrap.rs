//! Interactive bootstrap wizard for GitOps pipeline configuration.
//!
//! One synchronous prompt session: each answer is gated by its validator and
//! re-requested on rejection. Errors that escape the session are classified
//! by [`super::session::ErrorHandler`]; nothing in here ends the process.

use std::path::PathBuf;

use dialoguer::{Confirm, Input, Password};
use url::Url;

use crate::domain::{AppError, NamespacedService, complete_prefix};
use crate::ports::FileChecker;
use crate::services::{HttpGitHostConnector, HttpSealedSecrets, StdFileChecker, TerminalPrompts};

use super::validators::{
    AccessTokenValidator, NameValidator, OverwriteValidator, PIPELINES_FILE, PrefixValidator,
    SealedSecretValidator, SecretValidator,
};

/// Answers preset on the command line; anything absent is prompted for.
#[derive(Debug, Default)]
pub struct BootstrapOptions {
    pub gitops_repo_url: Option<String>,
    pub service_repo_url: Option<String>,
    pub output_path: Option<PathBuf>,
    pub api_server: Option<Url>,
}

/// Everything the wizard collected, ready for pipeline generation.
#[derive(Debug)]
pub struct BootstrapAnswers {
    pub gitops_repo_url: String,
    pub service_repo_url: String,
    pub access_token: String,
    pub prefix: Option<String>,
    pub webhook_secret: Option<String>,
    pub output_path: PathBuf,
    pub commit_status_tracker: bool,
    pub sealed_secrets: Option<NamespacedService>,
}

pub fn run(opts: BootstrapOptions) -> Result<BootstrapAnswers, AppError> {
    let gitops_repo_url = match opts.gitops_repo_url {
        Some(url) => url,
        None => enter_repo_url("Provide the URL for your GitOps repository")?,
    };
    let service_repo_url = match opts.service_repo_url {
        Some(url) => url,
        None => enter_repo_url("Provide the URL for your service repository")?,
    };

    let access_token = enter_access_token(&service_repo_url)?;
    let prefix = enter_prefix()?;
    let webhook_secret = enter_webhook_secret()?;
    let output_path = enter_output_path(opts.output_path)?;

    let commit_status_tracker = Confirm::new()
        .with_prompt("Install the commit-status tracker?")
        .default(true)
        .interact()?;

    let sealed_secrets = match opts.api_server {
        Some(api_server) => enter_sealed_secrets(api_server)?,
        None => None,
    };

    Ok(BootstrapAnswers {
        gitops_repo_url,
        service_repo_url,
        access_token,
        prefix,
        webhook_secret,
        output_path,
        commit_status_tracker,
        sealed_secrets,
    })
}

fn enter_repo_url(prompt: &str) -> Result<String, AppError> {
    let url: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            Url::parse(input)
                .map(|_| ())
                .map_err(|e| format!("failed to parse the provided URL {input:?}: {e}"))
        })
        .interact_text()?;
    Ok(url)
}

fn enter_access_token(service_repo_url: &str) -> Result<String, AppError> {
    let validator = AccessTokenValidator::new(service_repo_url, HttpGitHostConnector::new());
    loop {
        let token = Password::new()
            .with_prompt("Provide the access token for the service repository")
            .interact()?;
        match validator.validate(&token) {
            Ok(()) => return Ok(token),
            Err(err) => eprintln!("✗ {err}"),
        }
    }
}

fn enter_prefix() -> Result<Option<String>, AppError> {
    let wanted = Confirm::new()
        .with_prompt("Add a prefix to generated resource names?")
        .default(false)
        .interact()?;
    if !wanted {
        return Ok(None);
    }

    let validator = PrefixValidator;
    let prefix: String = Input::new()
        .with_prompt("Provide the prefix")
        .validate_with(|input: &String| validator.validate(input))
        .interact_text()?;
    Ok(Some(complete_prefix(&prefix)))
}

fn enter_webhook_secret() -> Result<Option<String>, AppError> {
    let validator = SecretValidator;
    loop {
        let secret = Password::new()
            .with_prompt("Provide a secret for webhook validation (leave empty to skip)")
            .allow_empty_password(true)
            .interact()?;
        match validator.validate(&secret) {
            Ok(()) if secret.is_empty() => return Ok(None),
            Ok(()) => return Ok(Some(secret)),
            Err(err) => eprintln!("✗ {err}"),
        }
    }
}

fn enter_output_path(preset: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let path = match preset {
        Some(path) => path,
        None => {
            let raw: String = Input::new()
                .with_prompt("Provide a path to write GitOps resources")
                .default(".".to_string())
                .interact_text()?;
            PathBuf::from(raw)
        }
    };

    let files = StdFileChecker;
    let config = path.join(PIPELINES_FILE);
    if files.exists(&config) {
        let validator = OverwriteValidator::new(path.clone(), files, TerminalPrompts);
        let answer: String = Input::new()
            .with_prompt(format!(
                "{} already exists at {}, do you want to overwrite it? (yes/no)",
                PIPELINES_FILE,
                path.display()
            ))
            .default("yes".to_string())
            .interact_text()?;
        // The validator accepts any answer; an interrupt from the follow-up
        // prompt is the only error it can raise.
        validator.validate(&answer)?;
    }

    Ok(path)
}

fn enter_sealed_secrets(api_server: Url) -> Result<Option<NamespacedService>, AppError> {
    let installed = Confirm::new()
        .with_prompt("Is the sealed-secrets controller installed on the cluster?")
        .default(true)
        .interact()?;
    if !installed {
        return Ok(None);
    }

    let client = HttpSealedSecrets::new(api_server).map_err(|cause| {
        tracing::debug!(error = %cause, "failed to build sealed-secrets client");
        AppError::SealedSecretsFailed
    })?;
    let validator = SealedSecretValidator::new(client);
    let names = NameValidator;

    let mut service = NamespacedService::default();
    loop {
        let name: String = Input::new()
            .with_prompt("Provide the name of the sealed-secrets service")
            .validate_with(|input: &String| names.validate(input))
            .interact_text()?;
        let namespace: String = Input::new()
            .with_prompt("Provide the namespace of the sealed-secrets service")
            .default("kube-system".to_string())
            .validate_with(|input: &String| names.validate(input))
            .interact_text()?;

        match validator.validate(&name, &namespace, &mut service) {
            Ok(()) => return Ok(Some(service)),
            Err(err) => eprintln!("✗ {err}"),
        }
    }
}
