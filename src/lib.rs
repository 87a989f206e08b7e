use std::io::stdout;

use clap::Parser;
use log::info;
use miette::Diagnostic;

use crate::{
    app_config::{Config, Verbose},
    cli::Args,
    integrations::{
        git::{self, tag_message, GitCli, TagReader},
        github::{self, create_release, Outcome},
    },
    release::ReleaseRequest,
};

mod app_config;
mod cli;
mod integrations;
mod preview;
mod release;

/// Parse the command line, then publish a release for the requested tag.
///
/// A release that already exists on GitHub counts as success.
///
/// ## Errors
/// 1. No token was given, neither with `-t` nor in `GITHUB_TOKEN`
/// 2. The tag's message could not be read with `git`
/// 3. GitHub did not create the release
pub async fn run() -> miette::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = Config::try_from(args).map_err(Error::from)?;

    let release = prepare_release(&GitCli::new(config.work_dir.clone()), &config.tag)?;
    publish(&config, &release).await?;
    Ok(())
}

/// `-v` shows `info`, otherwise only warnings. `RUST_LOG` takes precedence over both.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn prepare_release(reader: &impl TagReader, tag: &str) -> Result<ReleaseRequest, Error> {
    let body = tag_message(reader, tag).map_err(Error::Extraction)?;
    Ok(ReleaseRequest::for_tag(tag, body))
}

async fn publish(config: &Config, release: &ReleaseRequest) -> Result<(), Error> {
    if let Verbose::Yes = config.verbose {
        preview::verbose(release, &mut stdout()).map_err(Error::Stdout)?;
    }
    if config.dry_run {
        preview::dry_run(release, &config.github.repository, &mut stdout())
            .map_err(Error::Stdout)?;
        return Ok(());
    }

    let client = github::client(config.timeout).map_err(Error::Publish)?;
    match create_release(release, &config.github, &client)
        .await
        .map_err(Error::Publish)?
    {
        Outcome::Created(Some(created)) => info!(
            "Created release {} ({})",
            created.id,
            created.html_url.as_deref().unwrap_or(&release.tag_name)
        ),
        Outcome::Created(None) => info!("Created release {}", release.tag_name),
        Outcome::AlreadyExists => info!("*** Release already exists"),
    }
    Ok(())
}

#[derive(Debug, Diagnostic, thiserror::Error)]
pub(crate) enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] app_config::Error),
    #[error("Getting tag message: {0}")]
    #[diagnostic(forward(0))]
    Extraction(git::Error),
    #[error("Failed to create release: {0}")]
    #[diagnostic(forward(0))]
    Publish(github::CreateReleaseError),
    #[error("Error writing to stdout: {0}")]
    #[diagnostic(code(createrel::stdout))]
    Stdout(#[source] std::io::Error),
}
