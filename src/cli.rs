use std::path::PathBuf;

use clap::Parser;

use crate::app_config::Repository;

/// Create a GitHub release from the message of an annotated git tag.
///
/// The release is named after the tag, and is marked as a pre-release when the tag contains a
/// hyphen (for example `v1.2.0-rc1`).
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// The repository to publish to, as `owner/repo`.
    #[arg(value_name = "OWNER/REPO")]
    pub(crate) repository: Repository,

    /// An existing annotated tag whose message becomes the release body.
    pub(crate) tag: String,

    /// GitHub token.
    #[arg(short = 't', long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Print the release before publishing it, and note when it already exists.
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Print what would be created instead of calling GitHub.
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Base URL of the GitHub API, for GitHub Enterprise.
    #[arg(long, value_name = "URL", default_value = "https://api.github.com")]
    pub(crate) api_url: String,

    /// Give up on the API request after this many seconds. 0 waits forever.
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub(crate) timeout: u64,

    /// Read the tag from the repository in this directory.
    #[arg(short = 'C', value_name = "PATH")]
    pub(crate) work_dir: Option<PathBuf>,
}
