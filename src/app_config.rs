use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use miette::Diagnostic;
use secrecy::SecretString;

use crate::cli::Args;

/// Everything one run needs, resolved once from the command line and environment.
#[derive(Debug)]
pub(crate) struct Config {
    pub(crate) github: GitHub,
    pub(crate) tag: String,
    pub(crate) verbose: Verbose,
    pub(crate) dry_run: bool,
    /// `None` means the request may take as long as it takes.
    pub(crate) timeout: Option<Duration>,
    pub(crate) work_dir: Option<PathBuf>,
}

/// Where and as whom to publish.
#[derive(Debug)]
pub(crate) struct GitHub {
    pub(crate) api_url: String,
    pub(crate) repository: Repository,
    pub(crate) token: SecretString,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Verbose {
    Yes,
    No,
}

impl From<bool> for Verbose {
    fn from(verbose: bool) -> Self {
        if verbose {
            Verbose::Yes
        } else {
            Verbose::No
        }
    }
}

/// A repository on GitHub, `owner/name`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Repository {
    pub(crate) owner: String,
    pub(crate) name: String,
}

impl FromStr for Repository {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: (*owner).to_string(),
                name: (*name).to_string(),
            }),
            _ => Err(Error::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl TryFrom<Args> for Config {
    type Error = Error;

    /// The token comes from `-t` or, when that's missing, `GITHUB_TOKEN`. An empty one is an error.
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let token = args
            .token
            .filter(|token| !token.is_empty())
            .ok_or(Error::MissingToken)?;
        let timeout = (args.timeout > 0).then(|| Duration::from_secs(args.timeout));

        Ok(Self {
            github: GitHub {
                api_url: args.api_url,
                repository: args.repository,
                token: SecretString::from(token),
            },
            tag: args.tag,
            verbose: args.verbose.into(),
            dry_run: args.dry_run,
            timeout,
            work_dir: args.work_dir,
        })
    }
}

#[derive(Debug, Diagnostic, thiserror::Error)]
pub(crate) enum Error {
    #[error("Please export GITHUB_TOKEN=\"<your token here>\" or use the -t flag")]
    #[diagnostic(
        code(app_config::missing_token),
        help("Create a token at https://github.com/settings/tokens with permission to write releases.")
    )]
    MissingToken,
    #[error("{0} is not a repository, expected owner/repo")]
    #[diagnostic(code(app_config::invalid_repository))]
    InvalidRepository(String),
}
