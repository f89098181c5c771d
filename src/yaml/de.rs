//! Parses a `Component` (and everything it carries) out of a DEP-11
//! catalog document YAML node.
//!
//! DEP-11 is a multi-document YAML stream: document 0 is the catalog
//! header (`File`, `Version`, `Origin`, …), every subsequent document is
//! one component keyed by CamelCase top-level keys.

use std::collections::BTreeMap;
use std::str::FromStr;

use xmltree::Element;
use yaml_rust::Yaml;

use crate::agreement::{Agreement, AgreementKind, AgreementSection};
use crate::branding::{BrandColor, BrandColorKind, Branding, ColorScheme};
use crate::builders::ComponentBuilder;
use crate::category::Category;
use crate::content_rating::ContentRating;
use crate::context::Context;
use crate::developer::Developer;
use crate::enums::{
    Bundle, ComponentKind, DBusScope, FirmwareKind, Icon, ImageKind, Launchable, Provide,
    ReleaseKind, Translation,
};
use crate::error::ParseError;
use crate::id::AppId;
use crate::language::Language;
use crate::markup::{Description, Markup};
use crate::release::{Release, ReleaseList};
use crate::requirements::{
    Compare, Control, DisplayLengthValue, DisplaySide, Relation, RelationItem, RelationKind,
};
use crate::screenshot::{Image, Screenshot, ScreenshotKind};
use crate::translatable::{TranslatableList, TranslatableString};

/// The catalog header carried by document 0 of a DEP-11 stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct CatalogHeader {
    pub version: String,
    pub origin: Option<String>,
    pub media_baseurl: Option<String>,
    pub architecture: Option<String>,
    pub priority: i32,
}

pub(crate) fn header_from_yaml(doc: &Yaml) -> CatalogHeader {
    CatalogHeader {
        version: doc["Version"].as_str().unwrap_or_default().to_string(),
        origin: doc["Origin"].as_str().map(str::to_string),
        media_baseurl: doc["MediaBaseUrl"].as_str().map(str::to_string),
        architecture: doc["Architecture"].as_str().map(str::to_string),
        priority: doc["Priority"].as_i64().unwrap_or(0) as i32,
    }
}

fn hash_entries(y: &Yaml) -> Vec<(&str, &Yaml)> {
    match y {
        Yaml::Hash(map) => map.iter().filter_map(|(k, v)| k.as_str().map(|s| (s, v))).collect(),
        _ => Vec::new(),
    }
}

fn array_entries(y: &Yaml) -> &[Yaml] {
    match y {
        Yaml::Array(items) => items.as_slice(),
        _ => &[],
    }
}

fn str_list(y: &Yaml) -> Vec<String> {
    array_entries(y).iter().filter_map(Yaml::as_str).map(str::to_string).collect()
}

fn as_u32(y: &Yaml) -> Option<u32> {
    y.as_i64().map(|v| v as u32)
}

/// Wraps an HTML-like description fragment in a synthetic root and parses
/// it through the same `<p>`/`<ul>`/`<ol>` tree the XML codec builds,
/// rather than duplicating that walk here.
fn markup_from_html_like(raw: &str) -> Markup {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Markup::default();
    }
    let wrapped = format!("<desc>{trimmed}</desc>");
    match Element::parse(wrapped.as_bytes()) {
        Ok(element) => crate::xml::parse_markup_blocks(&element),
        Err(_) => Markup::paragraph(trimmed),
    }
}

/// Retains only the locale keys `retained_locale` keeps for `ctx`, applying
/// the same exact/language-stripped/`C` resolution rule the XML codec uses
/// so the two codecs discard the same `x-test`/`xx`/empty locales and the
/// same already-superseded `C` fallback.
fn translatable_string_from_yaml(y: &Yaml, ctx: &Context) -> TranslatableString {
    let mut result = TranslatableString::default();
    let mut translated_seen = false;
    for (locale, value) in hash_entries(y) {
        if let Some(text) = value.as_str() {
            if crate::xml::retained_locale(ctx, locale, &mut translated_seen) {
                result.set(locale, text.trim());
            }
        }
    }
    result
}

fn translatable_list_from_yaml(y: &Yaml, ctx: &Context) -> TranslatableList {
    let mut result = TranslatableList::default();
    let mut translated_seen = false;
    for (locale, value) in hash_entries(y) {
        if crate::xml::retained_locale(ctx, locale, &mut translated_seen) {
            result.set(locale, str_list(value));
        }
    }
    result
}

fn description_from_yaml(y: &Yaml, ctx: &Context) -> Description {
    let mut result = Description::new();
    let mut translated_seen = false;
    for (locale, value) in hash_entries(y) {
        if let Some(text) = value.as_str() {
            if crate::xml::retained_locale(ctx, locale, &mut translated_seen) {
                result.insert(locale.to_string(), markup_from_html_like(text));
            }
        }
    }
    result
}

fn developer_from_yaml(doc: &Yaml, ctx: &Context) -> Developer {
    let developer_node = &doc["Developer"];
    if !matches!(developer_node, Yaml::BadValue) {
        return Developer {
            id: developer_node["id"].as_str().map(str::to_string),
            name: translatable_string_from_yaml(&developer_node["name"], ctx),
        };
    }
    let name_node = &doc["DeveloperName"];
    if !matches!(name_node, Yaml::BadValue) {
        return Developer {
            id: None,
            name: translatable_string_from_yaml(name_node, ctx),
        };
    }
    Developer::default()
}

fn urls_from_yaml(y: &Yaml, ctx: &Context) -> Vec<crate::enums::ProjectUrl> {
    use crate::enums::ProjectUrl;
    let mut urls = Vec::new();
    for (key, value) in hash_entries(y) {
        let Some(raw) = value.as_str() else { continue };
        let Ok(url) = url::Url::parse(&ctx.resolve_url(raw)) else { continue };
        urls.push(match key {
            "homepage" => ProjectUrl::Homepage(url),
            "bugtracker" => ProjectUrl::BugTracker(url),
            "faq" => ProjectUrl::Faq(url),
            "help" => ProjectUrl::Help(url),
            "donation" => ProjectUrl::Donation(url),
            "translate" => ProjectUrl::Translate(url),
            "contact" => ProjectUrl::Contact(url),
            "vcs-browser" => ProjectUrl::VcsBrowser(url),
            "contribute" => ProjectUrl::ContributeUrl(url),
            _ => ProjectUrl::Unknown(url),
        });
    }
    urls
}

fn icons_from_yaml(y: &Yaml, ctx: &Context) -> Vec<Icon> {
    let mut icons = Vec::new();
    for (key, value) in hash_entries(y) {
        match key {
            "stock" => {
                if let Some(name) = value.as_str() {
                    icons.push(Icon::Stock(name.to_string()));
                }
            }
            // The legacy dialect wrote `cached` as a bare filename; the
            // current one writes a list of per-size hashes.
            "cached" => {
                if let Some(name) = value.as_str() {
                    icons.push(Icon::Cached {
                        path: name.into(),
                        width: None,
                        height: None,
                        scale: None,
                    });
                } else {
                    for entry in array_entries(value) {
                        let Some(name) = entry["name"].as_str() else { continue };
                        icons.push(Icon::Cached {
                            path: name.into(),
                            width: as_u32(&entry["width"]),
                            height: as_u32(&entry["height"]),
                            scale: as_u32(&entry["scale"]),
                        });
                    }
                }
            }
            "local" => {
                for entry in array_entries(value) {
                    let Some(name) = entry["name"].as_str() else { continue };
                    icons.push(Icon::Local {
                        path: name.into(),
                        width: as_u32(&entry["width"]),
                        height: as_u32(&entry["height"]),
                    });
                }
            }
            "remote" => {
                for entry in array_entries(value) {
                    let Some(raw_url) = entry["url"].as_str() else { continue };
                    let Ok(url) = url::Url::parse(&ctx.resolve_url(raw_url)) else { continue };
                    icons.push(Icon::Remote {
                        url,
                        width: as_u32(&entry["width"]),
                        height: as_u32(&entry["height"]),
                        scale: as_u32(&entry["scale"]),
                    });
                }
            }
            _ => {}
        }
    }
    icons
}

fn bundles_from_yaml(y: &Yaml) -> Vec<Bundle> {
    array_entries(y)
        .iter()
        .filter_map(|entry| {
            let kind = entry["type"].as_str()?;
            let id = entry["id"].as_str().unwrap_or_default().to_string();
            Some(match kind {
                "limba" => Bundle::Limba(id),
                "flatpak" => Bundle::Flatpak {
                    runtime: entry["runtime"].as_str().map(str::to_string),
                    sdk: entry["sdk"].as_str().unwrap_or_default().to_string(),
                    id,
                },
                "snap" => Bundle::Snap(id),
                "appimage" => Bundle::AppImage(id),
                "tarball" => Bundle::Tarball(id),
                other => Bundle::Unknown(other.to_string(), id),
            })
        })
        .collect()
}

fn provides_from_yaml(y: &Yaml) -> Vec<Provide> {
    let mut provides = Vec::new();
    for (key, value) in hash_entries(y) {
        match key {
            "libraries" => provides.extend(str_list(value).into_iter().map(|v| Provide::Library(v.into()))),
            "binaries" => provides.extend(str_list(value).into_iter().map(Provide::Binary)),
            "fonts" => provides.extend(str_list(value).into_iter().map(Provide::Font)),
            "modaliases" => provides.extend(str_list(value).into_iter().map(Provide::Modalias)),
            "python2" => provides.extend(str_list(value).into_iter().map(Provide::Python2)),
            "python3" => provides.extend(str_list(value).into_iter().map(Provide::Python3)),
            "mimetypes" => provides.extend(str_list(value).into_iter().map(Provide::MimeType)),
            "firmware" => {
                for entry in array_entries(value) {
                    let kind = entry["type"].as_str();
                    let item = entry["guid"].as_str().or_else(|| entry["fname"].as_str());
                    if let (Some(kind), Some(item)) = (kind, item) {
                        let kind = if kind == "flashed" { FirmwareKind::Flashed } else { FirmwareKind::Runtime };
                        provides.push(Provide::Firmware { kind, item: item.to_string() });
                    }
                }
            }
            "dbus" => {
                for entry in array_entries(value) {
                    let scope = entry["type"].as_str();
                    let name = entry["service"].as_str();
                    if let (Some(scope), Some(name)) = (scope, name) {
                        let scope = if scope == "system" { DBusScope::System } else { DBusScope::User };
                        provides.push(Provide::DBus { scope, name: name.to_string() });
                    }
                }
            }
            _ => {}
        }
    }
    provides
}

fn image_from_yaml(y: &Yaml, kind: ImageKind, ctx: &Context) -> Option<Image> {
    let raw_url = y["url"].as_str()?;
    let url = url::Url::parse(&ctx.resolve_url(raw_url)).ok()?;
    Some(Image {
        kind,
        url,
        width: as_u32(&y["width"]),
        height: as_u32(&y["height"]),
        scale: None,
        locale: y["lang"].as_str().map(str::to_string),
    })
}

fn screenshots_from_yaml(y: &Yaml, ctx: &Context) -> Vec<Screenshot> {
    array_entries(y)
        .iter()
        .map(|entry| {
            let mut screenshot = Screenshot::new();
            screenshot.kind = if entry["default"].as_str() == Some("yes") {
                ScreenshotKind::Default
            } else {
                ScreenshotKind::Extra
            };
            if !matches!(entry["caption"], Yaml::BadValue) {
                let caption = translatable_string_from_yaml(&entry["caption"], ctx);
                if !caption.is_empty() {
                    screenshot.caption = Some(caption);
                }
            }
            if let Some(image) = image_from_yaml(&entry["source-image"], ImageKind::Source, ctx) {
                screenshot.images.push(image);
            }
            for thumb in array_entries(&entry["thumbnails"]) {
                if let Some(image) = image_from_yaml(thumb, ImageKind::Thumbnail, ctx) {
                    screenshot.images.push(image);
                }
            }
            screenshot
        })
        .collect()
}

fn timestamp_from_unix(secs: i64) -> Option<crate::DateTime> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "time")] {
            time::OffsetDateTime::from_unix_timestamp(secs).ok()
        } else {
            use chrono::TimeZone;
            chrono::Utc.timestamp_opt(secs, 0).single()
        }
    }
}

fn timestamp_from_iso_date(raw: &str) -> Option<crate::DateTime> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "time")] {
            time::Date::parse(raw, &time::macros::format_description!("[year]-[month]-[day]"))
                .ok()
                .map(|d| d.midnight().assume_utc())
        } else {
            use chrono::TimeZone;
            chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| chrono::Utc.from_utc_datetime(&dt))
        }
    }
}

fn releases_from_yaml(y: &Yaml, ctx: &Context) -> ReleaseList {
    let entries = array_entries(y)
        .iter()
        .map(|entry| {
            let version = entry["version"].as_str().unwrap_or_default().to_string();
            let mut release = Release::new(version);
            release.kind = match entry["type"].as_str() {
                Some("development") => ReleaseKind::Development,
                Some("snapshot") => ReleaseKind::Snapshot,
                _ => ReleaseKind::Stable,
            };
            release.timestamp = entry["unix-timestamp"]
                .as_i64()
                .and_then(timestamp_from_unix)
                .or_else(|| entry["date"].as_str().and_then(timestamp_from_iso_date));
            if !matches!(entry["description"], Yaml::BadValue) {
                release.description = description_from_yaml(&entry["description"], ctx);
            }
            release
        })
        .collect();
    ReleaseList { entries, external_url: None, errored: false }
}

fn languages_from_yaml(y: &Yaml) -> Vec<Language> {
    array_entries(y)
        .iter()
        .filter_map(|entry| {
            let locale = entry["locale"].as_str()?.to_string();
            Some(Language { locale, percentage: as_u32(&entry["percentage"]) })
        })
        .collect()
}

fn suggests_from_yaml(y: &Yaml) -> Vec<AppId> {
    array_entries(y)
        .iter()
        .flat_map(|entry| str_list(&entry["ids"]).into_iter().map(AppId::from))
        .collect()
}

fn launchables_from_yaml(y: &Yaml) -> Vec<Launchable> {
    let mut launchables = Vec::new();
    for (key, value) in hash_entries(y) {
        for item in str_list(value) {
            launchables.push(match key {
                "desktop-id" => Launchable::DesktopId(item),
                "service" => Launchable::Service(item),
                "cockpit-manifest" => Launchable::CockpitManifest(item),
                "url" => url::Url::parse(&item).map(Launchable::Url).unwrap_or(Launchable::Unknown(item)),
                _ => Launchable::Unknown(item),
            });
        }
    }
    launchables
}

fn content_ratings_from_yaml(y: &Yaml) -> Vec<ContentRating> {
    hash_entries(y)
        .into_iter()
        .map(|(kind, attrs)| {
            let mut rating = ContentRating::new(kind);
            for (attr, value) in hash_entries(attrs) {
                if let Some(state) = value.as_str() {
                    rating.set_attribute(attr, state);
                }
            }
            rating
        })
        .collect()
}

fn branding_from_yaml(y: &Yaml) -> Branding {
    let colors = array_entries(y)
        .iter()
        .filter_map(|entry| {
            let kind = entry["type"].as_str()?;
            let scheme = match entry["scheme_preference"].as_str() {
                Some("dark") => ColorScheme::Dark,
                _ => ColorScheme::Light,
            };
            let value = entry["value"].as_str()?.to_string();
            Some(BrandColor { kind: BrandColorKind::from(kind), scheme, value })
        })
        .collect();
    Branding { colors }
}

fn translations_from_yaml(y: &Yaml) -> Vec<Translation> {
    array_entries(y)
        .iter()
        .filter_map(|entry| {
            let kind = entry["type"].as_str()?;
            let id = entry["id"].as_str().unwrap_or_default().to_string();
            Some(match kind {
                "gettext" => Translation::Gettext(id),
                "qt" => Translation::Qt(id),
                _ => Translation::Unknown,
            })
        })
        .collect()
}

fn agreements_from_yaml(y: &Yaml, ctx: &Context) -> Vec<Agreement> {
    array_entries(y)
        .iter()
        .filter_map(|entry| {
            let kind = entry["type"].as_str()?;
            let sections = array_entries(&entry["sections"])
                .iter()
                .map(|section| AgreementSection {
                    id: section["id"].as_str().unwrap_or_default().to_string(),
                    name: Some(translatable_string_from_yaml(&section["name"], ctx)).filter(|n| !n.is_empty()),
                    description: Some(translatable_string_from_yaml(&section["description"], ctx))
                        .filter(|d| !d.is_empty()),
                })
                .collect();
            Some(Agreement {
                kind: AgreementKind::from(kind),
                version: entry["version"].as_str().map(str::to_string),
                sections,
            })
        })
        .collect()
}

fn relations_from_yaml(y: &Yaml, kind: RelationKind) -> Vec<Relation> {
    array_entries(y)
        .iter()
        .filter_map(|entry| {
            let item_kind = entry["type"].as_str()?;
            let value = entry["value"].as_str().unwrap_or_default();
            let item = match item_kind {
                "id" => RelationItem::Id(AppId::from(value)),
                "modalias" => RelationItem::Modalias(value.to_string()),
                "kernel" => RelationItem::Kernel(value.to_string()),
                "memory" => RelationItem::Memory(value.parse().unwrap_or_default()),
                "firmware" => RelationItem::Firmware(value.to_string()),
                "control" => RelationItem::Control(Control::try_from(value).ok()?),
                "display_length" => RelationItem::DisplayLength {
                    value: DisplayLengthValue::try_from(value).ok()?,
                    side: entry["side"]
                        .as_str()
                        .and_then(|s| DisplaySide::try_from(s).ok())
                        .unwrap_or_default(),
                },
                "internet" => RelationItem::Internet(value.to_string()),
                "hardware" => RelationItem::Hardware(value.to_string()),
                _ => return None,
            };
            let mut relation = Relation::new(kind, item);
            relation.compare = entry["compare"].as_str().and_then(|c| Compare::try_from(c).ok()).unwrap_or_default();
            relation.version = entry["version"].as_str().map(str::to_string);
            Some(relation)
        })
        .collect()
}

fn custom_from_yaml(y: &Yaml) -> BTreeMap<String, Option<String>> {
    hash_entries(y).into_iter().map(|(k, v)| (k.to_string(), v.as_str().map(str::to_string))).collect()
}

/// Parses one component document from a DEP-11 YAML stream, keyed by its
/// CamelCase vocabulary.
pub(crate) fn component_from_yaml(doc: &Yaml, ctx: &Context) -> Result<crate::component::Component, ParseError> {
    let id = doc["ID"].as_str().ok_or_else(|| ParseError::missing_tag("ID"))?;

    let mut builder = ComponentBuilder::default().id(AppId::from(id));

    if let Some(kind) = doc["Type"].as_str() {
        if let Ok(kind) = ComponentKind::from_str(kind) {
            builder = builder.kind(kind);
        }
    }

    let name = translatable_string_from_yaml(&doc["Name"], ctx);
    builder = builder.name(name);

    if !matches!(doc["Summary"], Yaml::BadValue) {
        builder = builder.summary(translatable_string_from_yaml(&doc["Summary"], ctx));
    }
    if let Some(license) = doc["ProjectLicense"].as_str() {
        builder = builder.project_license(license);
    }
    if let Some(group) = doc["ProjectGroup"].as_str() {
        builder = builder.project_group(group);
    }
    builder = builder.developer(developer_from_yaml(doc, ctx));

    if let Some(source) = doc["SourcePackage"].as_str() {
        builder = builder.source_pkgname(source);
    }
    if let Some(pkgname) = doc["Package"].as_str() {
        builder = builder.pkgname(pkgname.to_string());
    }
    for extends in str_list(&doc["Extends"]) {
        builder = builder.extend(AppId::from(extends));
    }
    for desktop in str_list(&doc["CompulsoryForDesktops"]) {
        builder = builder.compulsory_for_desktop(desktop);
    }
    for category in str_list(&doc["Categories"]) {
        builder = builder.category(Category::from(category));
    }
    if !matches!(doc["Keywords"], Yaml::BadValue) {
        builder = builder.keywords(translatable_list_from_yaml(&doc["Keywords"], ctx));
    }
    for url in urls_from_yaml(&doc["Url"], ctx) {
        builder = builder.url(url);
    }
    for icon in icons_from_yaml(&doc["Icon"], ctx) {
        builder = builder.icon(icon);
    }
    for bundle in bundles_from_yaml(&doc["Bundles"]) {
        builder = builder.bundle(bundle);
    }
    for launchable in launchables_from_yaml(&doc["Launchable"]) {
        builder = builder.launchable(launchable);
    }
    for provide in provides_from_yaml(&doc["Provides"]) {
        builder = builder.provide(provide);
    }
    for screenshot in screenshots_from_yaml(&doc["Screenshots"], ctx) {
        builder = builder.screenshot(screenshot);
    }
    for rating in content_ratings_from_yaml(&doc["ContentRating"]) {
        builder = builder.content_rating(rating);
    }
    for language in languages_from_yaml(&doc["Languages"]) {
        builder = builder.language(language);
    }
    for id in suggests_from_yaml(&doc["Suggests"]) {
        builder = builder.suggest(id);
    }
    for tag in str_list(&doc["Tags"]) {
        builder = builder.tag(tag);
    }
    builder = builder.branding(branding_from_yaml(&doc["Branding"]));
    for translation in translations_from_yaml(&doc["Translation"]) {
        builder = builder.translation(translation);
    }
    for id in str_list(&doc["Replaces"]) {
        builder = builder.replace(AppId::from(id));
    }
    for agreement in agreements_from_yaml(&doc["Agreement"], ctx) {
        builder = builder.agreement(agreement);
    }
    for relation in relations_from_yaml(&doc["Requires"], RelationKind::Requires) {
        builder = builder.requires(relation);
    }
    for relation in relations_from_yaml(&doc["Recommends"], RelationKind::Recommends) {
        builder = builder.recommends(relation);
    }
    for relation in relations_from_yaml(&doc["Supports"], RelationKind::Supports) {
        builder = builder.supports(relation);
    }
    for (key, value) in custom_from_yaml(&doc["Custom"]) {
        builder = builder.metadata(key, value);
    }
    if let Some(priority) = doc["Priority"].as_i64() {
        builder = builder.priority(priority as i32);
    }

    let mut component = builder.build();
    component.description = description_from_yaml(&doc["Description"], ctx);
    component.releases = releases_from_yaml(&doc["Releases"], ctx);
    Ok(component)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_doc(yaml: &str) -> Yaml {
        yaml_rust::YamlLoader::load_from_str(yaml).unwrap().remove(0)
    }

    #[test]
    fn parses_minimal_component() {
        let doc = load_doc(
            "ID: org.example.Foo\nName:\n  C: Foo\nSummary:\n  C: A sample app\n",
        );
        let component = component_from_yaml(&doc, &Context::default()).unwrap();
        assert_eq!(component.id, AppId::from("org.example.Foo"));
        assert_eq!(component.name.default_value(), Some("Foo"));
    }

    #[test]
    fn parses_description_into_markup() {
        let doc = load_doc(
            "ID: org.example.Foo\nName:\n  C: Foo\nDescription:\n  C: \"<p>Hello world.</p>\"\n",
        );
        let component = component_from_yaml(&doc, &Context::default()).unwrap();
        let markup = component.description.get("C").unwrap();
        assert_eq!(markup.to_plain_text(), "Hello world.");
    }

    #[test]
    fn parses_releases_with_unix_timestamp() {
        let doc = load_doc(
            "ID: org.example.Foo\nName:\n  C: Foo\nReleases:\n  - version: \"1.0\"\n    unix-timestamp: 1000000\n",
        );
        let component = component_from_yaml(&doc, &Context::default()).unwrap();
        assert_eq!(component.releases.entries.len(), 1);
        assert!(component.releases.entries[0].timestamp.is_some());
    }

    #[test]
    fn name_drops_locales_not_matching_the_target_and_always_discards_x_test() {
        let doc = load_doc(
            "ID: org.example.Foo\nName:\n  C: Foo\n  de: Fuh\n  x-test: Test\n",
        );
        let component = component_from_yaml(&doc, &Context::new("de")).unwrap();
        assert_eq!(component.name.default_value(), Some("Fuh"));
        assert!(component.name.get("x-test").is_none());
        assert!(component.name.get("C").is_none());
    }

    #[test]
    fn name_under_all_locale_keeps_every_translation_except_discarded_ones() {
        let doc = load_doc(
            "ID: org.example.Foo\nName:\n  C: Foo\n  de: Fuh\n  x-test: Test\n",
        );
        let component = component_from_yaml(&doc, &Context::new(crate::translatable::ALL_LOCALES)).unwrap();
        assert!(component.name.get("C").is_some());
        assert!(component.name.get("de").is_some());
        assert!(component.name.get("x-test").is_none());
    }
}
