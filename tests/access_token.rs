//! Access-token validation against a stand-in hosting API.

use url::Url;

use gitopsctl::app::validators::AccessTokenValidator;
use gitopsctl::services::HttpGitHostConnector;

// The repository lives on the hosting site; only the API base points at the
// mock server.
const SERVICE_REPO_URL: &str = "https://github.com/org/gitops";

#[test]
fn valid_token_is_accepted() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/repos/org/gitops")
        .with_status(200)
        .with_body(r#"{"full_name": "org/gitops", "private": true}"#)
        .create();

    let connector = HttpGitHostConnector::with_api_base(Url::parse(&server.url()).unwrap());
    let validator = AccessTokenValidator::new(SERVICE_REPO_URL, connector);

    assert!(validator.validate("a-working-token").is_ok());
    mock.assert();
}

#[test]
fn rejected_token_names_the_repository_and_hides_the_cause() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/repos/org/gitops")
        .with_status(401)
        .with_body(r#"{"message": "Bad credentials"}"#)
        .create();

    let connector = HttpGitHostConnector::with_api_base(Url::parse(&server.url()).unwrap());
    let validator = AccessTokenValidator::new(SERVICE_REPO_URL, connector);

    let err = validator.validate("a-bad-token").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("org/gitops"));
    assert!(!message.contains("Bad credentials"));
    assert!(!message.contains("401"));
}

#[test]
fn each_attempt_repeats_the_round_trip() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/repos/org/gitops")
        .with_status(200)
        .with_body(r#"{"full_name": "org/gitops"}"#)
        .expect(2)
        .create();

    let connector = HttpGitHostConnector::with_api_base(Url::parse(&server.url()).unwrap());
    let validator = AccessTokenValidator::new(SERVICE_REPO_URL, connector);

    assert!(validator.validate("token-one-is-long").is_ok());
    assert!(validator.validate("token-two-is-long").is_ok());
    mock.assert();
}
