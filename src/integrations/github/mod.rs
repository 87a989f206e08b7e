use std::time::Duration;

use reqwest::Client;

pub(crate) use create_release::{create_release, Error as CreateReleaseError, Outcome};

mod create_release;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A client for talking to GitHub. `timeout` bounds the whole request; there are no retries.
pub(crate) fn client(timeout: Option<Duration>) -> Result<Client, CreateReleaseError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(CreateReleaseError::Client)
}
