//! `Collection`: a single catalog document (the `<components>` root style),
//! kept as a thin single-file codec entry point over the `xml` module, for
//! callers that want one document rather than the full `Pool`.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[cfg(feature = "gzip")]
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::error::ParseError;
use crate::id::AppId;

/// A parsed catalog document: the format version, the origin it was
/// collected from, and its components.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// The catalog format version (the root `<components version="...">`
    /// attribute).
    pub version: String,
    /// The catalog's origin (distro name, Flathub remote name, …).
    pub origin: Option<String>,
    /// The components carried by this document.
    pub components: Vec<Component>,
}

impl Collection {
    /// Parses a catalog document from an XML file on disk.
    pub fn from_path(path: PathBuf) -> Result<Self, ParseError> {
        let file = BufReader::new(File::open(path)?);
        let element = xmltree::Element::parse(file)?;
        crate::xml::collection_from_element(&element)
    }

    #[cfg(feature = "gzip")]
    /// Parses a catalog document from a gzip-compressed XML file.
    pub fn from_gzipped(path: PathBuf) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        let element = xmltree::Element::parse(GzDecoder::new(file))?;
        crate::xml::collection_from_element(&element)
    }

    /// Returns every component matching `id`.
    pub fn find_by_id(&self, id: AppId) -> Vec<&Component> {
        self.components.iter().filter(|c| c.id == id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translatable::TranslatableString;

    #[test]
    fn find_by_id_filters_components() {
        let collection = Collection {
            version: "0.14".into(),
            origin: Some("flathub".into()),
            components: vec![Component {
                id: AppId::from("org.gnome.gedit"),
                name: TranslatableString::with_default("gedit"),
                ..Default::default()
            }],
        };
        assert_eq!(collection.find_by_id(AppId::from("org.gnome.gedit")).len(), 1);
        assert_eq!(collection.find_by_id(AppId::from("org.gnome.nautilus")).len(), 0);
    }
}
