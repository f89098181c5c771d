//! The project or team responsible for a component.

use serde::{Deserialize, Serialize};

use crate::translatable::TranslatableString;

/// `{id, name[locale]}`: a reverse-DNS developer id alongside the
/// locale-tagged display name, rather than a bare translatable string.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Developer {
    /// A reverse-DNS identifier for the developer/project, distinct from
    /// the component id (`<developer id="...">`).
    pub id: Option<String>,
    /// The locale-tagged display name.
    pub name: TranslatableString,
}

impl Developer {
    /// Builds a developer with only the untranslated display name set.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: TranslatableString::with_default(name),
        }
    }

    /// Whether neither an id nor any name translation is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_empty()
    }
}
