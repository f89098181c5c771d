//! OARS content ratings and the minimum-age computation derived from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How intensely a `ContentRating` attribute applies.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ContentState {
    /// The content is absent.
    None,
    /// Present, but infrequent or stylized.
    Mild,
    /// Present and noticeable.
    Moderate,
    /// Present and pronounced.
    Intense,
}

impl Default for ContentState {
    fn default() -> Self {
        Self::None
    }
}

impl ContentState {
    fn parse(raw: &str) -> Self {
        match raw {
            "mild" => Self::Mild,
            "moderate" => Self::Moderate,
            "intense" => Self::Intense,
            _ => Self::None,
        }
    }
}

/// One `{kind, values: id -> rating}` entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentRating {
    /// The OARS spec version this rating was declared against
    /// (`oars-1.0`, `oars-1.1`).
    pub kind: String,
    /// `content_attribute` id -> its declared intensity.
    pub values: BTreeMap<String, ContentState>,
}

impl ContentRating {
    /// Builds an empty rating for the given OARS version.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            values: BTreeMap::new(),
        }
    }

    /// Records a single attribute's intensity, parsing the wire-format
    /// string (`none`/`mild`/`moderate`/`intense`).
    pub fn set_attribute(&mut self, id: impl Into<String>, value: &str) {
        self.values.insert(id.into(), ContentState::parse(value));
    }

    /// The minimum suggested age for this rating, computed from the OARS
    /// age-mapping table (a representative subset of the real-world
    /// table): the highest age implied by any declared attribute, or `0`
    /// if every attribute is `none`/absent.
    pub fn minimum_age(&self) -> u32 {
        self.values
            .iter()
            .map(|(id, state)| attribute_age(id, *state))
            .max()
            .unwrap_or(0)
    }
}

/// Per-attribute age thresholds for each non-`none` intensity, transcribed
/// from the well-known OARS 1.1 mapping used by the reference
/// implementation. Attributes not listed here fall back to a generic
/// mild/moderate/intense -> 13/16/18 ladder.
fn attribute_age(id: &str, state: ContentState) -> u32 {
    if state == ContentState::None {
        return 0;
    }
    let ladder: [u32; 3] = match id {
        "violence-cartoon" => [3, 4, 9],
        "violence-fantasy" => [3, 7, 12],
        "violence-realistic" => [4, 9, 14],
        "violence-bloodshed" => [9, 11, 18],
        "violence-sexual" => [18, 18, 18],
        "drugs-alcohol" => [11, 13, 16],
        "drugs-narcotics" => [12, 14, 17],
        "drugs-tobacco" => [10, 12, 15],
        "sex-nudity" => [12, 14, 17],
        "sex-themes" => [13, 15, 18],
        "language-profanity" => [8, 11, 14],
        "language-discrimination" => [9, 10, 11],
        "social-chat" => [4, 13, 13],
        "money-gambling" => [7, 16, 18],
        "money-purchasing" => [12, 15, 15],
        _ => [13, 16, 18],
    };
    match state {
        ContentState::None => 0,
        ContentState::Mild => ladder[0],
        ContentState::Moderate => ladder[1],
        ContentState::Intense => ladder[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rating_has_no_minimum_age() {
        let rating = ContentRating::new("oars-1.1");
        assert_eq!(rating.minimum_age(), 0);
    }

    #[test]
    fn minimum_age_is_the_max_across_attributes() {
        let mut rating = ContentRating::new("oars-1.1");
        rating.set_attribute("violence-cartoon", "mild");
        rating.set_attribute("language-profanity", "intense");
        assert_eq!(rating.minimum_age(), 14);
    }
}
