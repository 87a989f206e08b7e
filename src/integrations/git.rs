use std::{path::PathBuf, process::ExitStatus};

use execute::command_args;
use log::debug;
use miette::Diagnostic;

/// Git sets the message of a tag off from its metadata with this much indentation.
const BODY_INDENT: &str = "    ";

/// Source of raw tag listings, so tests can run without a real repository.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait TagReader {
    /// The full listing of `tag`: name and subject on the first line, then the indented message.
    fn read_tag_annotation(&self, tag: &str) -> Result<String, Error>;
}

/// Reads tags by running the `git` executable.
#[derive(Clone, Debug, Default)]
pub(crate) struct GitCli {
    work_dir: Option<PathBuf>,
}

impl GitCli {
    pub(crate) fn new(work_dir: Option<PathBuf>) -> Self {
        Self { work_dir }
    }
}

impl TagReader for GitCli {
    fn read_tag_annotation(&self, tag: &str) -> Result<String, Error> {
        let mut command = command_args!("git", "tag", "-n99", "-l", tag);
        if let Some(work_dir) = &self.work_dir {
            command.current_dir(work_dir);
        }
        debug!("Running {command:?}");

        let output = command.output().map_err(Error::Spawn)?;
        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(Error::Listing {
                status: output.status,
                output: combined.trim_end().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Get the message of `tag`, formatted for use as a release body.
pub(crate) fn tag_message(reader: &impl TagReader, tag: &str) -> Result<String, Error> {
    let listing = reader.read_tag_annotation(tag)?;
    // `git tag -l` succeeds with no output when nothing matches
    if listing.trim().is_empty() {
        return Err(Error::TagNotFound(tag.to_string()));
    }
    Ok(release_body(&listing))
}

/// Turn a `git tag -n99` listing into plain text.
///
/// The first line (tag name and subject) is dropped, one level of body indentation is removed,
/// and blank lines before the first line of content are skipped. Every emitted line ends in `\n`.
pub(crate) fn release_body(listing: &str) -> String {
    let mut body = String::new();
    for line in listing.lines().skip(1) {
        let line = line.strip_prefix(BODY_INDENT).unwrap_or(line);
        if body.is_empty() && line.is_empty() {
            continue;
        }
        body.push_str(line);
        body.push('\n');
    }
    body
}

#[derive(Debug, Diagnostic, thiserror::Error)]
pub(crate) enum Error {
    #[error("could not run git: {0}")]
    #[diagnostic(
        code(git::spawn),
        help("Make sure git is installed and available on your PATH.")
    )]
    Spawn(#[source] std::io::Error),
    #[error("`git tag` failed with {status}: {output}")]
    #[diagnostic(
        code(git::tag_listing),
        help("Make sure you are in a Git repository and that you have permission to access it.")
    )]
    Listing { status: ExitStatus, output: String },
    #[error("no tag named {0} was found")]
    #[diagnostic(
        code(git::tag_not_found),
        help("Create the tag locally (or fetch it) before publishing a release for it.")
    )]
    TagNotFound(String),
}
