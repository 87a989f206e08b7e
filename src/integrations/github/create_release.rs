use log::debug;
use miette::Diagnostic;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    Client, StatusCode,
};
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::{app_config::GitHub, release::ReleaseRequest};

/// The error code GitHub uses when a release for the tag is already there.
const ALREADY_EXISTS: &str = "already_exists";

/// How a create-release call ended without failing.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// GitHub answered `201 Created`. The decoded body, if it could be decoded.
    Created(Option<CreatedRelease>),
    /// A release for this tag was already published.
    AlreadyExists,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedRelease {
    pub(crate) id: u64,
    pub(crate) html_url: Option<String>,
}

/// A GitHub validation failure, e.g. `{"message": "Validation Failed", "errors": [{"code": "already_exists"}]}`.
#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    code: Option<String>,
}

/// Send exactly one request to create `release`. Nothing is retried.
pub(crate) async fn create_release(
    release: &ReleaseRequest,
    github: &GitHub,
    client: &Client,
) -> Result<Outcome, Error> {
    let url = releases_url(github);
    debug!("Creating {} {} at {url}", release.kind(), release.tag_name);
    let token_header = format!("token {}", github.token.expose_secret());

    let response = client
        .post(&url)
        .header(ACCEPT, "application/vnd.github+json")
        .header(AUTHORIZATION, token_header)
        .json(release)
        .send()
        .await
        .map_err(Error::Transport)?;

    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            debug!("Could not read the {status} response body: {err}");
            String::new()
        }
    };
    if status == StatusCode::CREATED {
        let created = match serde_json::from_str::<CreatedRelease>(&body) {
            Ok(created) => Some(created),
            Err(err) => {
                debug!("Could not decode the created release: {err}");
                None
            }
        };
        return Ok(Outcome::Created(created));
    }
    if already_exists(&body) {
        return Ok(Outcome::AlreadyExists);
    }
    Err(Error::Status {
        status: status.to_string(),
        body,
    })
}

fn releases_url(github: &GitHub) -> String {
    let GitHub {
        api_url,
        repository,
        ..
    } = github;
    format!(
        "{api}/repos/{owner}/{repo}/releases",
        api = api_url.trim_end_matches('/'),
        owner = repository.owner,
        repo = repository.name,
    )
}

/// Whether a failed response means the release is already there.
///
/// The structured error code is checked first. Bodies that aren't shaped like a GitHub
/// validation error fall back to a plain substring search, which can misfire on unrelated
/// text that happens to contain the code.
fn already_exists(body: &str) -> bool {
    if let Ok(api_error) = serde_json::from_str::<ApiError>(body) {
        if api_error
            .errors
            .iter()
            .any(|detail| detail.code.as_deref() == Some(ALREADY_EXISTS))
        {
            return true;
        }
    }
    let found = body.contains(ALREADY_EXISTS);
    if found {
        debug!("Matched `{ALREADY_EXISTS}` in unstructured response text");
    }
    found
}

#[derive(Debug, Diagnostic, thiserror::Error)]
pub(crate) enum Error {
    #[error("could not build an HTTP client: {0}")]
    #[diagnostic(code(github::client))]
    Client(reqwest::Error),
    #[error("{0}")]
    #[diagnostic(
        code(github::api_request_error),
        help(
            "There was a problem communicating with GitHub, this may be a network issue or a permissions issue."
        )
    )]
    Transport(reqwest::Error),
    #[error("{status}: {body}")]
    #[diagnostic(
        code(github::create_release),
        help("GitHub refused to create the release. Check the token's permissions and the repository name.")
    )]
    Status { status: String, body: String },
}
