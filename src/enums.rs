//! Small fieldless (or near-fieldless) vocabulary types shared by several
//! modules, collected in one file rather than scattered as one-off enums
//! across the types that use them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, ToString};
use url::Url;

/// Whether a `<release>` `<artifact>` carries source or binary bits.
#[derive(Clone, Copy, Debug, ToString, EnumString, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Source,
    Binary,
}

/// A packaging format a component is distributed as.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Bundle {
    Limba(String),
    Flatpak {
        #[serde(skip_serializing_if = "Option::is_none")]
        runtime: Option<String>,
        sdk: String,
        #[serde(rename = "$value", default)]
        id: String,
    },
    Snap(String),
    AppImage(String),
    Tarball(String),
    /// A bundle kind this implementation doesn't special-case, retained
    /// verbatim with its reference string.
    Unknown(String, String),
}

/// A checksum accompanying a `<release>` `<artifact>`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[serde(tag = "type", content = "$value")]
pub enum Checksum {
    Sha1(String),
    Sha256(String),
    Blake2b(String),
    Blake2s(String),
}

/// The `type` attribute on the root `<component>` element.
#[derive(Clone, Copy, Debug, ToString, EnumString, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ComponentKind {
    Generic,
    #[serde(alias = "desktop")]
    DesktopApplication,
    #[serde(alias = "console")]
    ConsoleApplication,
    #[serde(alias = "webapp")]
    WebApplication,
    Service,
    Addon,
    Runtime,
    Font,
    Codec,
    #[serde(rename = "inputmethod")]
    InputMethod,
    #[serde(alias = "operating-system")]
    OperatingSystem,
    Firmware,
    Driver,
    Localization,
    Repository,
    IconTheme,
}

impl Default for ComponentKind {
    fn default() -> Self {
        ComponentKind::Generic
    }
}

/// A single icon reference, one variant per icon kind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Icon {
    Stock(String),
    Cached {
        path: PathBuf,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scale: Option<u32>,
    },
    Remote {
        url: Url,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scale: Option<u32>,
    },
    Local {
        path: PathBuf,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },
}

/// Which role a screenshot image plays.
#[derive(Clone, Copy, Debug, ToString, EnumString, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Source,
    Thumbnail,
}

/// A feature a component advertises support for, used by software centers
/// to surface quality badges.
#[derive(Clone, Copy, Debug, ToString, EnumString, Deserialize, Serialize, PartialEq, Eq)]
pub enum Kudo {
    AppMenu,
    HiDpiIcon,
    HighContrast,
    ModernToolkit,
    Notifications,
    SearchProvider,
    UserDocs,
}

/// How a component is launched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Launchable {
    DesktopId(String),
    Service(String),
    Url(Url),
    CockpitManifest(String),
    Unknown(String),
}

/// A project-related link, one variant per url kind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ProjectUrl {
    Homepage(Url),
    BugTracker(Url),
    Faq(Url),
    Help(Url),
    Donation(Url),
    Translate(Url),
    Contact(Url),
    VcsBrowser(Url),
    ContributeUrl(Url),
    Unknown(Url),
}

/// How urgently users should apply a `<release>`.
#[derive(Clone, Copy, Debug, ToString, EnumString, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseUrgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for ReleaseUrgency {
    fn default() -> Self {
        ReleaseUrgency::Medium
    }
}

/// Whether a `<release>` is released, upcoming, or a development snapshot.
#[derive(Clone, Copy, Debug, ToString, EnumString, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseKind {
    Stable,
    Development,
    Snapshot,
}

impl Default for ReleaseKind {
    fn default() -> Self {
        ReleaseKind::Stable
    }
}

/// Whether a `<releases>` list is embedded directly or points at an
/// external document the pool fetches lazily.
#[derive(Clone, Copy, Debug, ToString, EnumString, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseListKind {
    Embedded,
    External,
}

impl Default for ReleaseListKind {
    fn default() -> Self {
        ReleaseListKind::Embedded
    }
}

/// A declared download/installed size, in bytes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "$value", rename_all = "kebab-case")]
pub enum Size {
    Download(u64),
    Installed(u64),
}

/// Whether a firmware `<provides>` entry is flashed onto the device or
/// loaded into memory each boot.
#[derive(Clone, Copy, Debug, ToString, EnumString, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FirmwareKind {
    Flashed,
    Runtime,
}

/// Which user session a `<dbus>` `<provides>` entry is registered on.
#[derive(Clone, Copy, Debug, ToString, EnumString, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DBusScope {
    System,
    User,
}

/// A single `<provides>` entry, one variant per provide kind.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Provide {
    Library(PathBuf),
    Binary(String),
    Font(String),
    Modalias(String),
    Firmware {
        #[serde(rename = "type")]
        kind: FirmwareKind,
        #[serde(rename = "$value")]
        item: String,
    },
    Python2(String),
    Python3(String),
    DBus {
        #[serde(rename = "type")]
        scope: DBusScope,
        #[serde(rename = "$value")]
        name: String,
    },
    Id(String),
    Codec(String),
    MimeType(String),
}

/// The `merge` attribute on a `<component>` element, governing how the
/// pool combines it with an existing entry sharing its data id.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MergeKind {
    /// No merge directive; the pool's priority/tiebreak rules decide.
    None,
    /// Copy empty scalars and union-append list/set/map/locale-table fields
    /// from this component onto the existing one.
    Append,
    /// Overwrite every non-empty field of the existing component.
    Replace,
    /// Delete the existing entry outright and stop merging for this id.
    #[serde(rename = "remove-component")]
    RemoveComponent,
}

impl MergeKind {
    /// Parses the `merge` attribute value as found on a `<component>`
    /// element; unrecognized values fall back to `None` rather than erroring,
    /// matching the codec's general leniency toward unknown attribute values.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "append" => MergeKind::Append,
            "replace" => MergeKind::Replace,
            "remove-component" => MergeKind::RemoveComponent,
            _ => MergeKind::None,
        }
    }

    /// Renders back to the attribute string used on emit.
    pub fn as_str(self) -> &'static str {
        match self {
            MergeKind::None => "none",
            MergeKind::Append => "append",
            MergeKind::Replace => "replace",
            MergeKind::RemoveComponent => "remove-component",
        }
    }
}

impl Default for MergeKind {
    fn default() -> Self {
        MergeKind::None
    }
}

/// A `<translation>` entry naming which translation framework a component
/// uses.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case", tag = "type", content = "$value")]
pub enum Translation {
    Gettext(String),
    Qt(String),
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provide_firmware_shape() {
        let p = Provide::Firmware {
            kind: FirmwareKind::Runtime,
            item: "ipw2200-bss.fw".into(),
        };
        assert_eq!(
            p,
            Provide::Firmware {
                kind: FirmwareKind::Runtime,
                item: "ipw2200-bss.fw".into()
            }
        );
    }

    #[test]
    fn component_kind_defaults_to_generic() {
        assert_eq!(ComponentKind::default(), ComponentKind::Generic);
    }

    #[test]
    fn merge_kind_roundtrips_through_as_str() {
        for kind in [MergeKind::None, MergeKind::Append, MergeKind::Replace, MergeKind::RemoveComponent] {
            assert_eq!(MergeKind::parse(kind.as_str()), kind);
        }
    }

    #[test]
    fn merge_kind_parse_defaults_unknown_to_none() {
        assert_eq!(MergeKind::parse("bogus"), MergeKind::None);
    }
}
