use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[cfg(feature = "gzip")]
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};

use crate::agreement::{Agreement, Review};
use crate::branding::Branding;
use crate::category::Category;
use crate::content_rating::ContentRating;
use crate::developer::Developer;
use crate::enums::{Bundle, ComponentKind, Icon, Kudo, Launchable, MergeKind, ProjectUrl, Provide, Translation};
use crate::error::ParseError;
use crate::id::AppId;
use crate::language::Language;
use crate::license::License;
use crate::markup::Description;
use crate::release::ReleaseList;
use crate::requirements::Relation;
use crate::screenshot::Screenshot;
use crate::translatable::{TranslatableList, TranslatableString};

/// A component is the description of a single piece of software: an
/// application, a runtime, a font, a firmware blob, … as found in a
/// `metainfo.xml` file or as one entry of a catalog collection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Component {
    /// The component type.
    #[serde(default, rename = "type")]
    pub kind: ComponentKind,
    /// Unique identifier for this component.
    pub id: AppId,
    /// A human-readable name.
    pub name: TranslatableString,
    /// A short summary of the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<TranslatableString>,
    /// A long, locale-tagged description of this component, parsed into the
    /// normalized markup tree.
    #[serde(default, skip_serializing_if = "Description::is_empty")]
    pub description: Description,

    /// The license of the component itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_license: Option<License>,
    /// The license the metadata document is released under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_license: Option<License>,
    /// The upstream project umbrella this component belongs to (GNOME, KDE,
    /// XFCE, MATE, LXDE, …).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_group: Option<String>,
    /// The project/team responsible for the component.
    #[serde(default, skip_serializing_if = "Developer::is_empty")]
    pub developer: Developer,

    /// Desktop environments this component is essential for.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub compulsory_for_desktop: BTreeSet<String>,
    /// The components this one extends (an addon targeting a parent
    /// application).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<AppId>,
    /// Components this one suggests installing alongside it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggests: Vec<AppId>,
    /// Components this one replaces (a rename/rebrand), used by the pool's
    /// merge step to reconcile history.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replaces: Vec<AppId>,
    /// Free-form tags, outside the category taxonomy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Absolute requirements of the component.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Relation>,
    /// Soft requirements of the component.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommends: Vec<Relation>,
    /// Optional capabilities the component can take advantage of.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supports: Vec<Relation>,

    /// The icons of the component.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<Icon>,
    /// Screenshots, composed of images and/or videos.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<Screenshot>,
    /// Web URLs (homepage, bug tracker, donation, …).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<ProjectUrl>,
    /// Brand colors used by software centers to theme the detail page.
    #[serde(default, skip_serializing_if = "Branding::is_default")]
    pub branding: Branding,

    /// Used by distributors to contact the project; not for user display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_contact: Option<String>,

    /// The categories this component is associated with.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    /// Possible methods to launch the software.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub launchables: Vec<Launchable>,

    /// The binary package name(s) providing this component, a distributor
    /// concern.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pkgnames: Vec<String>,
    /// The source package name, a distributor concern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_pkgname: Option<String>,
    /// 3rd-party sources to grab the component from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundles: Vec<Bundle>,

    /// The component's version history.
    #[serde(default, skip_serializing_if = "is_empty_release_list")]
    pub releases: ReleaseList,

    /// The languages supported by the component, with their translation
    /// completion percentage.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
    /// The MIME types the component supports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mimetypes: Vec<String>,
    /// Defines the "awesomeness" of a component for software center ranking.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kudos: Vec<Kudo>,
    /// Keywords to help the user find the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<TranslatableList>,

    /// Age ratings for the component, one entry per ratings body (OARS
    /// versions, or other rating schemes carried verbatim).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_ratings: Vec<ContentRating>,
    /// Agreements (EULA, privacy policy, …) a user must accept before use.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agreements: Vec<Agreement>,
    /// Out-of-band user reviews, populated by a consumer rather than parsed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,

    /// Public interfaces the component provides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provides: Vec<Provide>,
    /// Translation domains used by the component.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<Translation>,

    /// The repository scope this component was collected from (`system` or
    /// `user`), part of the pool primary key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// The bundle system that shipped this metadata (`package`, `flatpak`,
    /// `snap`, …), part of the pool primary key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_kind: Option<String>,
    /// Which catalog this component came from (distro name, Flathub remote
    /// name, …), part of the pool primary key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// The branch this component was published on, part of the pool
    /// primary key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// The target architecture this component's artifacts were built for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    /// The source's declared priority, used by the pool to pick a merge
    /// winner when two sources disagree on the same data id.
    #[serde(default)]
    pub priority: i32,
    /// When the component reaches end-of-life (distinct from a specific
    /// release's EOL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_eol: Option<crate::DateTime>,

    /// Custom, free-form metadata key/value pairs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Option<String>>,

    /// The `merge` directive carried by this document, consumed by
    /// `Pool::insert` and otherwise inert.
    #[serde(default, skip_serializing_if = "is_default_merge")]
    pub merge: MergeKind,
}

fn is_default_merge(merge: &MergeKind) -> bool {
    *merge == MergeKind::None
}

fn is_empty_release_list(list: &ReleaseList) -> bool {
    list.entries.is_empty() && list.external_url.is_none()
}

impl Component {
    /// Parses a `Component` from a `metainfo.xml` file on disk.
    pub fn from_path(path: PathBuf) -> Result<Self, ParseError> {
        let file = BufReader::new(File::open(path)?);
        let element = xmltree::Element::parse(file)?;
        crate::xml::component_from_element(&element)
    }

    #[cfg(feature = "gzip")]
    /// Parses a `Component` from a gzip-compressed `metainfo.xml` file.
    pub fn from_gzipped(path: PathBuf) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        let element = xmltree::Element::parse(GzDecoder::new(file))?;
        crate::xml::component_from_element(&element)
    }

    #[cfg(feature = "gzip")]
    /// Parses a `Component` from gzip-compressed bytes.
    pub fn from_gzipped_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let element = xmltree::Element::parse(GzDecoder::new(bytes))?;
        crate::xml::component_from_element(&element)
    }

    /// Computes the pool's primary key for this component: `scope/bundle_kind/
    /// origin/id/branch`, with missing segments replaced by `*`, and
    /// `architecture` substituted for a blank `bundle_kind`/`scope` segment
    /// only where the upstream data truly carries no value.
    pub fn data_id(&self) -> String {
        let seg = |value: &Option<String>| value.as_deref().unwrap_or("*");
        format!(
            "{}/{}/{}/{}/{}",
            seg(&self.scope),
            seg(&self.bundle_kind),
            seg(&self.origin),
            self.id,
            seg(&self.branch)
        )
    }

    /// Whether this component satisfies the minimum required fields for a
    /// valid document: a non-empty `id` and a non-empty `name`.
    pub fn is_valid(&self) -> bool {
        !self.id.0.trim().is_empty() && !self.name.is_empty()
    }

    /// Whether this component is an addon for `parent_id` (declares it via
    /// `extends`).
    pub fn extends_component(&self, parent_id: &AppId) -> bool {
        self.extends.contains(parent_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ComponentKind;

    fn minimal(id: &str) -> Component {
        Component {
            id: AppId::from(id),
            name: TranslatableString::with_default("Foo Bar"),
            ..Default::default()
        }
    }

    #[test]
    fn data_id_substitutes_star_for_missing_segments() {
        let component = minimal("com.example.foobar");
        assert_eq!(component.data_id(), "*/*/*/com.example.foobar/*");
    }

    #[test]
    fn data_id_includes_declared_segments() {
        let mut component = minimal("com.example.foobar");
        component.scope = Some("system".into());
        component.bundle_kind = Some("flatpak".into());
        component.origin = Some("flathub".into());
        component.branch = Some("stable".into());
        assert_eq!(
            component.data_id(),
            "system/flatpak/flathub/com.example.foobar/stable"
        );
    }

    #[test]
    fn empty_id_or_name_is_invalid() {
        let mut component = minimal("com.example.foobar");
        assert!(component.is_valid());
        component.name = TranslatableString::default();
        assert!(!component.is_valid());
    }

    #[test]
    fn default_kind_is_generic() {
        let component = minimal("com.example.foobar");
        assert_eq!(component.kind, ComponentKind::Generic);
    }

    #[test]
    fn extends_component_checks_the_extends_list() {
        let mut component = minimal("org.gnome.gedit_code_assistance");
        component.extends.push(AppId::from("org.gnome.gedit"));
        assert!(component.extends_component(&AppId::from("org.gnome.gedit")));
        assert!(!component.extends_component(&AppId::from("org.gnome.nautilus")));
    }
}
