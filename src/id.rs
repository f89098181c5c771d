use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A component identifier, reverse-DNS style (`org.gnome.gedit`).
///
/// Validation here is intentionally permissive: the reverse-DNS grammar is
/// a recommendation enforced by external linters, not something this crate
/// rejects documents over. An id is only refused when it's empty, since an
/// empty id can never be a valid primary key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppId(pub String);

impl AppId {
    /// The component id with the legacy `.desktop` suffix stripped, if
    /// present. Some distributions still emit ids of the legacy
    /// `name.desktop` form; comparisons against modern reverse-DNS ids
    /// should fall back to this form.
    pub fn without_desktop_suffix(&self) -> &str {
        self.0.strip_suffix(".desktop").unwrap_or(&self.0)
    }
}

impl TryFrom<&str> for AppId {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(ParseError::missing_value("id"));
        }
        Ok(AppId(value.to_string()))
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        AppId(value.to_string())
    }
}

impl From<String> for AppId {
    fn from(value: String) -> Self {
        AppId(value)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_app_id() {
        let app_id = AppId::try_from("org.gnome.app");
        assert!(app_id.is_ok());
    }

    #[test]
    fn empty_app_id_is_rejected() {
        assert!(AppId::try_from("").is_err());
    }

    #[test]
    fn strips_legacy_desktop_suffix() {
        let app_id = AppId::from("firefox.desktop");
        assert_eq!(app_id.without_desktop_suffix(), "firefox");
    }
}
