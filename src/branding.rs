//! Brand colors associated with a component, used by software centers to
//! theme a detail page.

use serde::{Deserialize, Serialize};

/// Which color-scheme a `BrandColor` targets.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Suited for a light UI theme.
    Light,
    /// Suited for a dark UI theme.
    Dark,
}

/// Which role a `BrandColor` plays (`<color type="primary">` is the only
/// standard value; other values are retained verbatim).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BrandColorKind {
    /// The component's primary brand color.
    Primary,
    /// A brand-color kind this implementation doesn't special-case.
    Other(String),
}

impl From<&str> for BrandColorKind {
    fn from(value: &str) -> Self {
        match value {
            "primary" => Self::Primary,
            other => Self::Other(other.to_string()),
        }
    }
}

impl BrandColorKind {
    /// The wire representation of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Primary => "primary",
            Self::Other(s) => s,
        }
    }
}

/// A single `(kind, scheme_preference, colorcode)` tuple.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BrandColor {
    /// The role this color plays.
    pub kind: BrandColorKind,
    /// Which theme this color is meant for.
    pub scheme: ColorScheme,
    /// The color value, typically `#rrggbb`.
    pub value: String,
}

/// A component's branding: a flat list of brand colors, queried by
/// `(kind, scheme)`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Branding {
    /// The brand colors declared for this component.
    pub colors: Vec<BrandColor>,
}

impl Branding {
    /// Whether no brand colors are declared, used to skip emitting an
    /// empty `branding` block.
    pub fn is_default(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the most specific color matching `kind` and `scheme`: an
    /// exact `(kind, scheme)` match first, else any color of that `kind`
    /// regardless of scheme.
    pub fn color(&self, kind: &BrandColorKind, scheme: ColorScheme) -> Option<&BrandColor> {
        self.colors
            .iter()
            .find(|c| &c.kind == kind && c.scheme == scheme)
            .or_else(|| self.colors.iter().find(|c| &c.kind == kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_scheme_match_wins_over_fallback() {
        let branding = Branding {
            colors: vec![
                BrandColor {
                    kind: BrandColorKind::Primary,
                    scheme: ColorScheme::Light,
                    value: "#ffffff".into(),
                },
                BrandColor {
                    kind: BrandColorKind::Primary,
                    scheme: ColorScheme::Dark,
                    value: "#000000".into(),
                },
            ],
        };
        let found = branding
            .color(&BrandColorKind::Primary, ColorScheme::Dark)
            .unwrap();
        assert_eq!(found.value, "#000000");
    }

    #[test]
    fn falls_back_to_any_scheme_for_the_kind() {
        let branding = Branding {
            colors: vec![BrandColor {
                kind: BrandColorKind::Primary,
                scheme: ColorScheme::Light,
                value: "#ffffff".into(),
            }],
        };
        let found = branding
            .color(&BrandColorKind::Primary, ColorScheme::Dark)
            .unwrap();
        assert_eq!(found.value, "#ffffff");
    }
}
