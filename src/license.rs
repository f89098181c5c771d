use serde::{Deserialize, Serialize};

use crate::spdx;

/// A SPDX license expression.
/// See the list of commonly found licenses [https://spdx.org/licenses/](https://spdx.org/licenses/).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct License(pub String);

impl License {
    /// Whether every license-id token in this expression looks like a
    /// syntactically valid SPDX identifier (`MIT`, `LicenseRef-…`, or a
    /// `GFDL-1.3-only`-style id) once boolean operators are stripped out.
    ///
    /// This is a syntax check, not a check against the SPDX license list:
    /// the list itself is an external, frequently-updated collaborator
    /// (see [`spdx`]).
    pub fn is_valid(&self) -> bool {
        spdx::is_syntactically_valid(&self.0)
    }
}

impl From<String> for License {
    fn from(l: String) -> Self {
        Self(l)
    }
}

impl From<&str> for License {
    fn from(l: &str) -> Self {
        Self(l.to_string())
    }
}

impl ToString for License {
    fn to_string(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_license_is_valid() {
        assert!(License::from("MIT").is_valid());
        assert!(License::from("CC0-1.0 AND LGPL-2.1-or-later").is_valid());
    }

    #[test]
    fn unbalanced_parens_are_invalid() {
        assert!(!License::from("(MIT AND CC0-1.0").is_valid());
    }
}
