use serde::{Deserialize, Serialize};

/// A release to create, in the shape the GitHub releases endpoint expects.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct ReleaseRequest {
    pub(crate) tag_name: String,
    pub(crate) name: String,
    pub(crate) body: String,
    /// true to create a draft (unpublished) release, false to create a published one.
    pub(crate) draft: bool,
    pub(crate) prerelease: bool,
}

impl ReleaseRequest {
    /// A published release named after its tag.
    pub(crate) fn for_tag(tag: &str, body: String) -> Self {
        Self {
            tag_name: tag.to_string(),
            name: tag.to_string(),
            body,
            draft: false,
            prerelease: is_prerelease(tag),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        if self.prerelease {
            "prerelease"
        } else {
            "release"
        }
    }
}

/// Any hyphen anywhere in the tag marks a pre-release (`v1.2.0-rc1`).
///
/// This is a naming convention, not a semantic version parse, so a tag like
/// `release-candidate` counts as a pre-release too.
pub(crate) fn is_prerelease(tag: &str) -> bool {
    tag.contains('-')
}
