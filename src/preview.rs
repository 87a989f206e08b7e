use std::io::{self, Write};

use crate::{app_config::Repository, release::ReleaseRequest};

/// What `-v` prints before publishing: a pre-release marker, the tag, then the body.
pub(crate) fn verbose(release: &ReleaseRequest, out: &mut impl Write) -> io::Result<()> {
    if release.prerelease {
        writeln!(out, "*** Pre-release ***")?;
    }
    writeln!(out, "{}", release.tag_name)?;
    writeln!(out)?;
    writeln!(out, "{}", release.body)
}

/// Describe the release that a real run would create.
pub(crate) fn dry_run(
    release: &ReleaseRequest,
    repository: &Repository,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        out,
        "Would create a {} on GitHub for {} with name {} and tag {} and body:\n{}",
        release.kind(),
        repository,
        release.name,
        release.tag_name,
        release.body
    )
}
