//! `Agreement` and `Review`: component-attribute types with no fixed wire
//! shape in either codec. Kept as reachable data types with best-effort
//! parsing; their absence from a document is never an error. See
//! `DESIGN.md` for the Open Question resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::translatable::TranslatableString;

/// The kind of agreement a user is asked to accept (EULA, privacy policy,
/// …).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AgreementKind {
    /// An end-user license agreement.
    Eula,
    /// A privacy policy.
    Privacy,
    /// A generic or unrecognized agreement kind, retained verbatim.
    Other(String),
}

impl From<&str> for AgreementKind {
    fn from(value: &str) -> Self {
        match value {
            "eula" => Self::Eula,
            "privacy" => Self::Privacy,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A single section of an agreement (`<agreement_section>`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgreementSection {
    /// The section identifier.
    pub id: String,
    /// The locale-tagged section title.
    pub name: Option<TranslatableString>,
    /// The locale-tagged section body.
    pub description: Option<TranslatableString>,
}

/// An agreement a component asks the user to accept before use.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Agreement {
    /// Which kind of agreement this is.
    pub kind: AgreementKind,
    /// The agreement's own version string, if the upstream declares one.
    pub version: Option<String>,
    /// The agreement's sections, in document order.
    pub sections: Vec<AgreementSection>,
}

/// A minimal placeholder for ODRS-style user reviews, with no fixed wire
/// shape in either codec; consumers needing reviews populate this
/// out-of-band, treating such external collaborators as out of scope for
/// the core.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// An opaque review identifier, meaningful to whatever out-of-band
    /// source populated this review.
    pub id: String,
    /// Free-form key/value data carried alongside the review.
    pub custom: BTreeMap<String, String>,
}
