//! `Release`, `ReleaseList`, `Artifact` and `Issue`: a component's version
//! history.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::enums::{ArtifactKind, Checksum, ReleaseKind, ReleaseListKind, ReleaseUrgency, Size};
use crate::markup::Description;
use crate::DateTime;

/// Resolves an externally-referenced release list's bytes. External
/// release fetches are opt-in per load, and no HTTP client ships with this
/// crate; the fetch itself is an injected seam rather than a bundled
/// client, so a caller wires in whatever HTTP stack (or local
/// sibling-file reader) it already uses.
pub trait ReleaseFetcher: Send + Sync {
    /// Fetches `url`'s bytes, respecting `timeout`. The returned bytes are
    /// expected to be a standalone `<releases>` XML document, matching the
    /// `releases/<id>.releases.xml` sibling-file convention.
    fn fetch(&self, url: &Url, timeout: Duration) -> std::io::Result<Vec<u8>>;
}

/// A bug or advisory referenced by a `<release>`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// The upstream kind of the issue (`generic` or `cve`).
    pub kind: IssueKind,
    /// The bug/CVE identifier.
    pub id: String,
    /// An optional link to the issue.
    pub url: Option<Url>,
}

/// Which kind of tracker an `Issue` was filed in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum IssueKind {
    Generic,
    Cve,
}

impl Default for IssueKind {
    fn default() -> Self {
        IssueKind::Generic
    }
}

/// A single downloadable unit of a release (source tarball, binary
/// package, …).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    /// Whether this artifact is source or binary.
    pub kind: ArtifactKind,
    /// The target platform triplet, when the artifact is platform-specific.
    pub platform: Option<String>,
    /// Which bundle format the artifact is packaged in, if any.
    pub bundle_kind: Option<String>,
    /// The download locations, first preferred.
    pub locations: Vec<Url>,
    /// Checksums of the downloaded artifact.
    pub checksums: Vec<Checksum>,
    /// Declared sizes (download and/or installed).
    pub sizes: Vec<Size>,
    /// The filename to save the artifact as, if declared.
    pub filename: Option<String>,
}

impl Artifact {
    /// Builds an artifact with no locations, checksums or sizes yet.
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            platform: None,
            bundle_kind: None,
            locations: Vec::new(),
            checksums: Vec::new(),
            sizes: Vec::new(),
            filename: None,
        }
    }
}

/// A single entry in a component's version history.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Release {
    /// The released version string.
    pub version: String,
    /// Whether this is a stable release, a development snapshot, etc.
    pub kind: ReleaseKind,
    /// When the release was made.
    pub timestamp: Option<DateTime>,
    /// When the release reaches end-of-life, if declared.
    pub timestamp_eol: Option<DateTime>,
    /// How urgently users should apply this release.
    pub urgency: ReleaseUrgency,
    /// The locale-tagged release notes.
    pub description: Description,
    /// A link to more information about this specific release.
    pub url: Option<Url>,
    /// Issues fixed by this release.
    pub issues: Vec<Issue>,
    /// Downloadable artifacts for this release.
    pub artifacts: Vec<Artifact>,
}

impl Release {
    /// Builds a bare stable release with no timestamp or artifacts yet.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            kind: ReleaseKind::default(),
            timestamp: None,
            timestamp_eol: None,
            urgency: ReleaseUrgency::default(),
            description: Description::default(),
            url: None,
            issues: Vec::new(),
            artifacts: Vec::new(),
        }
    }
}

/// A component's `<releases>` list: either embedded directly, or a pointer
/// at an external document the pool resolves lazily through a
/// `ReleaseFetcher`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ReleaseList {
    /// Embedded entries, present up front. Always empty for a purely
    /// external list until a `ReleaseFetcher` has resolved it.
    pub entries: Vec<Release>,
    /// The external document URL, when `kind` is `External`.
    pub external_url: Option<Url>,
    /// Set by the Pool's Refine step when a `ReleaseFetcher` attempted to
    /// resolve `external_url` and failed; the list stays `External` rather
    /// than failing the whole load.
    pub errored: bool,
}

impl ReleaseList {
    /// What kind of release list this is: `External` when an
    /// `external_url` is set and no entries have been embedded, `Embedded`
    /// otherwise.
    pub fn kind(&self) -> ReleaseListKind {
        if self.external_url.is_some() && self.entries.is_empty() {
            ReleaseListKind::External
        } else {
            ReleaseListKind::Embedded
        }
    }

    /// Whether this list still needs a `ReleaseFetcher` to resolve its
    /// entries.
    pub fn needs_fetch(&self) -> bool {
        self.kind() == ReleaseListKind::External
    }

    /// The most recent release by declared version ordering
    /// (`rpmvercmp`-style comparison), if any.
    pub fn latest(&self) -> Option<&Release> {
        self.entries
            .iter()
            .max_by(|a, b| crate::version::compare(&a.version, &b.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_list_with_only_external_url_needs_fetch() {
        let list = ReleaseList {
            entries: Vec::new(),
            external_url: Some(Url::parse("https://example.com/releases.xml").unwrap()),
            errored: false,
        };
        assert!(list.needs_fetch());
    }

    #[test]
    fn embedded_entries_never_need_fetch() {
        let list = ReleaseList {
            entries: vec![Release::new("1.0")],
            external_url: None,
            errored: false,
        };
        assert!(!list.needs_fetch());
        assert_eq!(list.latest().unwrap().version, "1.0");
    }

    #[test]
    fn latest_picks_highest_version() {
        let list = ReleaseList {
            entries: vec![Release::new("1.2"), Release::new("1.10"), Release::new("1.3")],
            external_url: None,
            errored: false,
        };
        assert_eq!(list.latest().unwrap().version, "1.10");
    }

    #[test]
    fn errored_list_still_needs_fetch_but_is_flagged() {
        let list = ReleaseList {
            entries: Vec::new(),
            external_url: Some(Url::parse("https://example.com/releases.xml").unwrap()),
            errored: true,
        };
        assert!(list.needs_fetch());
        assert!(list.errored);
    }
}
