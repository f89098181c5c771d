//! # appstream
//!
//! AppStream is a cross-distro effort for enhancing the metadata available
//! about software components in the Linux and free-software ecosystem. One
//! of the project's goals is to make building software-center applications
//! possible, and make interaction with the package sources of a
//! distribution smarter. AppStream provides specifications for
//! meta-information which is shipped by upstream projects and can be
//! consumed by other software.
//!
//! This crate covers the metadata core: the typed `Component` data model,
//! both on-disk serializations (metainfo/catalog XML and DEP-11 YAML), and
//! an in-memory `Pool` that loads many catalog files, deduplicates by
//! component identifier with well-defined priority rules, maintains
//! indices, and answers queries (by id, kind, category, provided item,
//! launchable, bundle, extends, free-text search).
//!
//! Specifications: [https://www.freedesktop.org/software/appstream/docs/](https://www.freedesktop.org/software/appstream/docs/)
//!
//! The `chrono` or `time` crates can be used to represent dates. `chrono` is
//! the default. To use `time` instead, turn off default features and enable
//! the `time` feature:
//! ```toml
//! [dependencies]
//! appstream = { version = "*", default-features = false, features = ["time"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use appstream::{
//!     builders::{ComponentBuilder, ReleaseBuilder},
//!     enums::{ProjectUrl, Provide},
//!     AppId, Component, ParseError, TranslatableString,
//! };
//! use url::Url;
//!
//! fn main() -> Result<(), ParseError> {
//!     let xml = r"<?xml version='1.0' encoding='UTF-8'?>
//!                     <component>
//!                         <id>com.example.foobar</id>
//!                         <name>Foo Bar</name>
//!                         <summary>A foo-ish bar</summary>
//!                         <url type='homepage'>http://www.example.org</url>
//!                         <metadata_license>CC0-1.0</metadata_license>
//!                         <provides>
//!                           <library>libfoobar.so.2</library>
//!                           <font>foo.ttf</font>
//!                           <binary>foobar</binary>
//!                         </provides>
//!                         <releases>
//!                           <release version='1.2'/>
//!                         </releases>
//!                         <developer_name>FooBar Team</developer_name>
//!                     </component>";
//!     let element = xmltree::Element::parse(xml.as_bytes())?;
//!     let c1 = appstream::xml::component_from_element(&element)?;
//!
//!     let c2 = ComponentBuilder::default()
//!         .id(AppId::from("com.example.foobar"))
//!         .name(TranslatableString::with_default("Foo Bar"))
//!         .metadata_license("CC0-1.0")
//!         .summary(TranslatableString::with_default("A foo-ish bar"))
//!         .url(ProjectUrl::Homepage(Url::parse("http://www.example.org")?))
//!         .developer_name(TranslatableString::with_default("FooBar Team"))
//!         .provide(Provide::Library("libfoobar.so.2".into()))
//!         .provide(Provide::Font("foo.ttf".into()))
//!         .provide(Provide::Binary("foobar".into()))
//!         .release(ReleaseBuilder::new("1.2").build())
//!         .build();
//!
//!     assert_eq!(c1.id, c2.id);
//!     assert_eq!(c1.name, c2.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! The library can parse a collection of components as well:
//! ```no_run
//! use appstream::{AppId, Collection, Component};
//!
//! fn main() -> Result<(), appstream::ParseError> {
//!     let collection = Collection::from_path(
//!         "/var/lib/flatpak/appstream/flathub/x86_64/active/appstream.xml".into(),
//!     )?;
//!     #[cfg(feature = "gzip")]
//!     let collection = Collection::from_gzipped(
//!         "/var/lib/flatpak/appstream/flathub/x86_64/active/appstream.xml.gz".into(),
//!     )?;
//!
//!     // Find a specific application by id.
//!     println!("{:#?}", collection.find_by_id(AppId::from("org.gnome.design.Contrast")));
//!
//!     // Find the list of gedit plugins.
//!     collection
//!         .components
//!         .iter()
//!         .filter(|c| c.extends_component(&AppId::from("org.gnome.gedit")))
//!         .collect::<Vec<&Component>>();
//!
//!     Ok(())
//! }
//! ```
//!
//! Loading many sources into a queryable [`pool::Pool`]:
//! ```no_run
//! use appstream::pool::{Pool, Source};
//! use appstream::Context;
//! use appstream::AppId;
//!
//! let pool = Pool::new();
//! let report = pool.load(vec![Source::xml(
//!     std::fs::read("/var/lib/flatpak/appstream/flathub/x86_64/active/appstream.xml").unwrap(),
//!     Context::new("C").origin("flathub"),
//! )]);
//! println!("inserted {} components", report.inserted);
//! let _ = pool.by_id(&AppId::from("org.gnome.gedit"));
//! ```
#![deny(missing_docs)]

#[macro_use]
extern crate cfg_if;

/// An injected taxonomy of XDG category names.
pub mod category;
/// Various helpers to build any appstream type.
pub mod builders;
mod agreement;
mod arch;
mod branding;
mod collection;
mod component;
mod content_rating;
/// Per-load/per-emit configuration.
pub mod context;
mod developer;
/// Various enumerations used in the appstream types.
pub mod enums;
mod error;
mod id;
mod language;
mod license;
/// A normalized AST for the subset of markup AppStream descriptions carry.
pub mod markup;
/// The in-memory component pool: merging, indexing, querying.
pub mod pool;
mod release;
mod requirements;
/// Free-text search: tokenization and scoring.
pub mod search;
mod screenshot;
/// SPDX license-expression syntax checking.
pub mod spdx;
mod translatable;
/// RPM-style version comparison.
pub mod version;
/// The XML codec (metainfo and catalog dialects).
pub mod xml;
/// The YAML (DEP-11) codec.
pub mod yaml;

pub use agreement::{Agreement, AgreementKind, AgreementSection, Review};
pub use arch::is_compatible_with_host;
pub use branding::{Branding, BrandColor, BrandColorKind, ColorScheme};
pub use category::Category;
pub use collection::Collection;
pub use component::Component;
pub use content_rating::{ContentRating, ContentState};
pub use context::Context;
pub use developer::Developer;
pub use error::{Diagnostic, LoadReport, ParseError};
pub use id::AppId;
pub use language::Language;
pub use license::License;
pub use release::{Artifact, Release, ReleaseFetcher, ReleaseList};
pub use requirements::{Compare, Control, DisplayLengthValue, DisplaySide, Relation, RelationItem};
pub use screenshot::{Image, Screenshot, Video};
pub use translatable::{TranslatableList, TranslatableString};
pub use url;
pub use xmltree;

cfg_if! {
    if #[cfg(feature = "time")] {
        /// The time module DateTime re-export
        pub use time::OffsetDateTime as DateTime;
    } else {
        use chrono::{DateTime as ChronoDateTime, Utc};
        /// The chrono module DateTime re-export
        pub type DateTime = ChronoDateTime<Utc>;
    }
}

#[cfg(test)]
#[inline]
fn date(year: i32, month: u8, day: u8) -> DateTime {
    cfg_if! {
        if #[cfg(feature = "time")] {
            return time::Date::from_calendar_date(year, time::Month::try_from(month).unwrap(), day).unwrap().midnight().assume_utc();
        } else {
            use chrono::TimeZone;
            return Utc.with_ymd_and_hms(year, month.into(), day.into(), 0, 0, 0).unwrap();
        }
    }
}

#[cfg(test)]
#[inline]
fn timestamp(timestamp: &str) -> DateTime {
    cfg_if! {
        if #[cfg(feature = "time")] {
            use time::macros::format_description;
            let format = format_description!("[unix_timestamp]");
            return DateTime::parse(timestamp, &format).unwrap()
        } else {
            use chrono::TimeZone;
            return Utc.datetime_from_str(timestamp, "%s").unwrap();
        }
    }
}
