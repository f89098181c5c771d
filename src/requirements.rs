//! `Relation`: the shared shape backing `requires`/`recommends`/`supports`.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::id::AppId;

/// Which of the three relation lists a `Relation` was declared under.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RelationKind {
    /// An absolute requirement; the component cannot function without it.
    Requires,
    /// A soft requirement; functionality degrades gracefully without it.
    Recommends,
    /// A capability the component can take advantage of if present.
    Supports,
}

/// How a versioned relation item compares against the system's value.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Compare {
    /// Equal to.
    Eq,
    /// Not equal to.
    Ne,
    /// Less than.
    Lt,
    /// Less than or equal to.
    Le,
    /// Greater than.
    Gt,
    /// Greater than or equal to.
    Ge,
}

impl Default for Compare {
    fn default() -> Self {
        Self::Ge
    }
}

impl TryFrom<&str> for Compare {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "eq" => Ok(Self::Eq),
            "ne" => Ok(Self::Ne),
            "lt" => Ok(Self::Lt),
            "le" => Ok(Self::Le),
            "gt" => Ok(Self::Gt),
            "ge" => Ok(Self::Ge),
            _ => Err(ParseError::invalid_value(value, "compare", "relation")),
        }
    }
}

/// Which side of a display a `DisplayLength` measurement refers to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DisplaySide {
    /// The display's shorter edge.
    Shortest,
    /// The display's longer edge.
    Longest,
}

impl Default for DisplaySide {
    fn default() -> Self {
        Self::Shortest
    }
}

impl TryFrom<&str> for DisplaySide {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "shortest" => Ok(Self::Shortest),
            "longest" => Ok(Self::Longest),
            _ => Err(ParseError::invalid_value(value, "side", "display_length")),
        }
    }
}

/// A `<display_length>` value: either a named bucket or a pixel count.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DisplayLengthValue {
    /// <= ~360px, watches and other tiny displays.
    Xsmall,
    /// < ~768px, phones and small phablets.
    Small,
    /// >= ~768px, tablets and laptops.
    Medium,
    /// >= ~1024px, desktop monitors.
    Large,
    /// >= ~3840px, televisions and projected displays.
    Xlarge,
    /// An exact pixel count.
    Value(u32),
}

impl TryFrom<&str> for DisplayLengthValue {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "xsmall" => Ok(Self::Xsmall),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "xlarge" => Ok(Self::Xlarge),
            other => other
                .parse::<u32>()
                .map(Self::Value)
                .map_err(|_| ParseError::invalid_value(other, "$value", "display_length")),
        }
    }
}

/// Which way of controlling the software a `Control` item names.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    /// Mouse, trackpad or other pointing devices.
    Pointing,
    /// Physical or on-screen keyboard.
    Keyboard,
    /// Console / command-line interface.
    Console,
    /// Graphics tablet.
    Tablet,
    /// Touch surfaces.
    Touch,
    /// Game controllers.
    Gamepad,
    /// TV remote control.
    TvRemote,
    /// Voice recognition/activation.
    Voice,
    /// Computer-vision based input.
    Vision,
}

impl TryFrom<&str> for Control {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pointing" => Ok(Self::Pointing),
            "keyboard" => Ok(Self::Keyboard),
            "console" => Ok(Self::Console),
            "tablet" => Ok(Self::Tablet),
            "touch" => Ok(Self::Touch),
            "gamepad" => Ok(Self::Gamepad),
            "tv-remote" => Ok(Self::TvRemote),
            "voice" => Ok(Self::Voice),
            "vision" => Ok(Self::Vision),
            _ => Err(ParseError::invalid_value(value, "type", "control")),
        }
    }
}

/// The typed value carried by a `Relation`, one variant per `item_kind`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RelationItem {
    /// A dependency on another component, by id.
    Id(AppId),
    /// A kernel modalias glob.
    Modalias(String),
    /// A minimum kernel name/version (`value` holds the kernel name).
    Kernel(String),
    /// A minimum amount of memory, in MiB.
    Memory(u64),
    /// A firmware requirement, by name.
    Firmware(String),
    /// A supported input control method.
    Control(Control),
    /// A minimum/maximum display length.
    DisplayLength {
        /// Named bucket or pixel value.
        value: DisplayLengthValue,
        /// Which edge of the display is measured.
        side: DisplaySide,
    },
    /// Whether an internet connection is required (`value` is `true`/`false`,
    /// or `"offline-only"` in the upstream vocabulary, retained verbatim).
    Internet(String),
    /// A hardware requirement, free-form.
    Hardware(String),
}

/// A single `requires`/`recommends`/`supports` entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Relation {
    /// Which list this relation was declared under.
    pub kind: RelationKind,
    /// The typed requirement itself.
    pub item: RelationItem,
    /// The version comparison, when the item is a versioned dependency.
    pub compare: Compare,
    /// The version string compared against, when applicable.
    pub version: Option<String>,
}

impl Relation {
    /// Builds a relation with the default (`Ge`) comparison and no version.
    pub fn new(kind: RelationKind, item: RelationItem) -> Self {
        Self {
            kind,
            item,
            compare: Compare::default(),
            version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_length_value_parses_named_buckets_and_pixels() {
        assert_eq!(DisplayLengthValue::try_from("small").unwrap(), DisplayLengthValue::Small);
        assert_eq!(DisplayLengthValue::try_from("360").unwrap(), DisplayLengthValue::Value(360));
        assert!(DisplayLengthValue::try_from("bogus").is_err());
    }

    #[test]
    fn control_parses_known_values() {
        assert_eq!(Control::try_from("keyboard").unwrap(), Control::Keyboard);
        assert!(Control::try_from("nonsense").is_err());
    }
}
