//! Serializes a `Component`/`Collection` back into a DEP-11 YAML stream, the
//! mirror of `de.rs`'s CamelCase key vocabulary. Independent of
//! `crate::xml::ser` (different output shape — `Yaml` nodes, not
//! `xmltree::Element`s) except for two small reused pieces: `sorted_locales`
//! for deterministic locale ordering and `markup_blocks` to render a
//! description's AST into the HTML-like fragment DEP-11 embeds as a string.

use std::collections::BTreeMap;

use xmltree::{Element, XMLNode};
use yaml_rust::yaml::Hash as YamlHash;
use yaml_rust::{Yaml, YamlEmitter};

use crate::agreement::{Agreement, AgreementKind};
use crate::branding::{Branding, ColorScheme};
use crate::component::Component;
use crate::content_rating::{ContentRating, ContentState};
use crate::context::Context;
use crate::developer::Developer;
use crate::enums::{Bundle, DBusScope, FirmwareKind, Icon, ImageKind, Launchable, Provide, ReleaseKind, Translation};
use crate::language::Language;
use crate::markup::{Description, Markup};
use crate::release::ReleaseList;
use crate::requirements::{Compare, Control, DisplayLengthValue, DisplaySide, Relation, RelationItem};
use crate::screenshot::{Image, Screenshot};
use crate::translatable::{TranslatableList, TranslatableString};

fn hash(pairs: Vec<(&str, Yaml)>) -> Yaml {
    let mut map = YamlHash::new();
    for (key, value) in pairs {
        map.insert(Yaml::String(key.to_string()), value);
    }
    Yaml::Hash(map)
}

fn str_array(items: impl IntoIterator<Item = String>) -> Yaml {
    Yaml::Array(items.into_iter().map(Yaml::String).collect())
}

/// Dumps a single YAML document. `YamlEmitter::dump` prefixes every call
/// with `"---\n"`, so concatenating one `dump` per document produces a
/// valid multi-document stream without any extra bookkeeping here.
fn dump(doc: &Yaml) -> String {
    let mut out = String::new();
    let _ = YamlEmitter::new(&mut out).dump(doc);
    out.push('\n');
    out
}

/// Builds and dumps the DEP-11 header document (`File`/`Version`/`Origin`/
/// `MediaBaseUrl`/`Architecture`/`Priority`) from `ctx`.
pub(crate) fn header_to_yaml_string(ctx: &Context) -> String {
    let mut pairs = vec![
        ("File", Yaml::String("DEP-11".to_string())),
        ("Version", Yaml::String(ctx.version().as_str().to_string())),
    ];
    if let Some(origin) = ctx.origin_str() {
        pairs.push(("Origin", Yaml::String(origin.to_string())));
    }
    if let Some(baseurl) = ctx.media_baseurl_str() {
        pairs.push(("MediaBaseUrl", Yaml::String(baseurl.to_string())));
    }
    if let Some(arch) = ctx.arch() {
        pairs.push(("Architecture", Yaml::String(arch.to_string())));
    }
    if ctx.priority_value() != 0 {
        pairs.push(("Priority", Yaml::Integer(ctx.priority_value() as i64)));
    }
    dump(&hash(pairs))
}

fn translatable_string_to_yaml(value: &TranslatableString) -> Yaml {
    let mut map = YamlHash::new();
    for (locale, text) in crate::xml::sorted_locales(&value.0) {
        map.insert(Yaml::String(locale.to_string()), Yaml::String(text.clone()));
    }
    Yaml::Hash(map)
}

fn translatable_list_to_yaml(value: &TranslatableList) -> Yaml {
    let mut map = YamlHash::new();
    for (locale, items) in crate::xml::sorted_locales(&value.0) {
        map.insert(Yaml::String(locale.to_string()), str_array(items.iter().cloned()));
    }
    Yaml::Hash(map)
}

/// Renders a description's block tree to the HTML-like fragment DEP-11
/// stores as a plain string, reusing `crate::xml::markup_blocks` to build
/// the `<p>`/`<ul>`/`<ol>` tree and stripping the synthetic wrapper tag
/// back off, the reverse of `de::markup_from_html_like`'s `<desc>` wrap.
fn markup_to_html_like(markup: &Markup) -> String {
    if markup.is_empty() {
        return String::new();
    }
    let mut wrapper = Element::new("desc");
    for block in crate::xml::markup_blocks(&markup.0) {
        wrapper.children.push(XMLNode::Element(block));
    }
    let mut bytes = Vec::new();
    let _ = wrapper.write_with_config(&mut bytes, xmltree::EmitterConfig::new().write_document_declaration(false));
    let xml = String::from_utf8_lossy(&bytes).into_owned();
    xml.strip_prefix("<desc>").and_then(|s| s.strip_suffix("</desc>")).unwrap_or(&xml).to_string()
}

fn description_to_yaml(description: &Description) -> Yaml {
    let mut map = YamlHash::new();
    for (locale, markup) in crate::xml::sorted_locales(description) {
        map.insert(Yaml::String(locale.to_string()), Yaml::String(markup_to_html_like(markup)));
    }
    Yaml::Hash(map)
}

fn developer_to_yaml(developer: &Developer) -> Yaml {
    let mut pairs = Vec::new();
    if let Some(id) = &developer.id {
        pairs.push(("id", Yaml::String(id.clone())));
    }
    pairs.push(("name", translatable_string_to_yaml(&developer.name)));
    hash(pairs)
}

fn urls_to_yaml(urls: &[crate::enums::ProjectUrl]) -> Yaml {
    use crate::enums::ProjectUrl;
    let mut map = YamlHash::new();
    for url in urls {
        let (key, value) = match url {
            ProjectUrl::Homepage(u) => ("homepage", u),
            ProjectUrl::BugTracker(u) => ("bugtracker", u),
            ProjectUrl::Faq(u) => ("faq", u),
            ProjectUrl::Help(u) => ("help", u),
            ProjectUrl::Donation(u) => ("donation", u),
            ProjectUrl::Translate(u) => ("translate", u),
            ProjectUrl::Contact(u) => ("contact", u),
            ProjectUrl::VcsBrowser(u) => ("vcs-browser", u),
            ProjectUrl::ContributeUrl(u) => ("contribute", u),
            ProjectUrl::Unknown(u) => ("unknown", u),
        };
        map.insert(Yaml::String(key.to_string()), Yaml::String(value.to_string()));
    }
    Yaml::Hash(map)
}

fn icons_to_yaml(icons: &[Icon]) -> Yaml {
    let mut stock = Vec::new();
    let mut cached = Vec::new();
    let mut local = Vec::new();
    let mut remote = Vec::new();
    for icon in icons {
        match icon {
            Icon::Stock(name) => stock.push(name.clone()),
            Icon::Cached { path, width, height, scale } => {
                let mut pairs = vec![("name", Yaml::String(path.to_string_lossy().into_owned()))];
                if let Some(w) = width {
                    pairs.push(("width", Yaml::Integer(*w as i64)));
                }
                if let Some(h) = height {
                    pairs.push(("height", Yaml::Integer(*h as i64)));
                }
                if let Some(s) = scale {
                    pairs.push(("scale", Yaml::Integer(*s as i64)));
                }
                cached.push(hash(pairs));
            }
            Icon::Local { path, width, height } => {
                let mut pairs = vec![("name", Yaml::String(path.to_string_lossy().into_owned()))];
                if let Some(w) = width {
                    pairs.push(("width", Yaml::Integer(*w as i64)));
                }
                if let Some(h) = height {
                    pairs.push(("height", Yaml::Integer(*h as i64)));
                }
                local.push(hash(pairs));
            }
            Icon::Remote { url, width, height, scale } => {
                let mut pairs = vec![("url", Yaml::String(url.to_string()))];
                if let Some(w) = width {
                    pairs.push(("width", Yaml::Integer(*w as i64)));
                }
                if let Some(h) = height {
                    pairs.push(("height", Yaml::Integer(*h as i64)));
                }
                if let Some(s) = scale {
                    pairs.push(("scale", Yaml::Integer(*s as i64)));
                }
                remote.push(hash(pairs));
            }
        }
    }
    let mut map = YamlHash::new();
    if !stock.is_empty() {
        map.insert(Yaml::String("stock".to_string()), Yaml::Array(stock.into_iter().map(Yaml::String).collect()));
    }
    if !cached.is_empty() {
        map.insert(Yaml::String("cached".to_string()), Yaml::Array(cached));
    }
    if !local.is_empty() {
        map.insert(Yaml::String("local".to_string()), Yaml::Array(local));
    }
    if !remote.is_empty() {
        map.insert(Yaml::String("remote".to_string()), Yaml::Array(remote));
    }
    Yaml::Hash(map)
}

fn bundles_to_yaml(bundles: &[Bundle]) -> Yaml {
    Yaml::Array(
        bundles
            .iter()
            .map(|bundle| {
                let (kind, id, runtime, sdk): (&str, String, Option<String>, Option<String>) = match bundle {
                    Bundle::Limba(id) => ("limba", id.clone(), None, None),
                    Bundle::Flatpak { runtime, sdk, id } => ("flatpak", id.clone(), runtime.clone(), Some(sdk.clone())),
                    Bundle::Snap(id) => ("snap", id.clone(), None, None),
                    Bundle::AppImage(id) => ("appimage", id.clone(), None, None),
                    Bundle::Tarball(id) => ("tarball", id.clone(), None, None),
                    Bundle::Unknown(kind, id) => (kind.as_str(), id.clone(), None, None),
                };
                let mut pairs = vec![("type", Yaml::String(kind.to_string())), ("id", Yaml::String(id))];
                if let Some(runtime) = runtime {
                    pairs.push(("runtime", Yaml::String(runtime)));
                }
                if let Some(sdk) = sdk {
                    pairs.push(("sdk", Yaml::String(sdk)));
                }
                hash(pairs)
            })
            .collect(),
    )
}

/// `Launchable::Unknown` carries no record of the original hash key it was
/// read under, so it is dropped on emit rather than guessed at.
fn launchables_to_yaml(launchables: &[Launchable]) -> Yaml {
    let mut desktop_id = Vec::new();
    let mut service = Vec::new();
    let mut cockpit_manifest = Vec::new();
    let mut url = Vec::new();
    for launchable in launchables {
        match launchable {
            Launchable::DesktopId(v) => desktop_id.push(v.clone()),
            Launchable::Service(v) => service.push(v.clone()),
            Launchable::CockpitManifest(v) => cockpit_manifest.push(v.clone()),
            Launchable::Url(u) => url.push(u.to_string()),
            Launchable::Unknown(_) => {}
        }
    }
    let mut map = YamlHash::new();
    if !desktop_id.is_empty() {
        map.insert(Yaml::String("desktop-id".to_string()), str_array(desktop_id));
    }
    if !service.is_empty() {
        map.insert(Yaml::String("service".to_string()), str_array(service));
    }
    if !cockpit_manifest.is_empty() {
        map.insert(Yaml::String("cockpit-manifest".to_string()), str_array(cockpit_manifest));
    }
    if !url.is_empty() {
        map.insert(Yaml::String("url".to_string()), str_array(url));
    }
    Yaml::Hash(map)
}

/// `Provide::Id`/`Provide::Codec` have no DEP-11 key in `de.rs`'s
/// vocabulary, so (symmetrically) neither has one here.
fn provides_to_yaml(provides: &[Provide]) -> Yaml {
    let mut libraries = Vec::new();
    let mut binaries = Vec::new();
    let mut fonts = Vec::new();
    let mut modaliases = Vec::new();
    let mut python2 = Vec::new();
    let mut python3 = Vec::new();
    let mut mimetypes = Vec::new();
    let mut firmware = Vec::new();
    let mut dbus = Vec::new();
    for provide in provides {
        match provide {
            Provide::Library(v) => libraries.push(v.to_string_lossy().into_owned()),
            Provide::Binary(v) => binaries.push(v.clone()),
            Provide::Font(v) => fonts.push(v.clone()),
            Provide::Modalias(v) => modaliases.push(v.clone()),
            Provide::Python2(v) => python2.push(v.clone()),
            Provide::Python3(v) => python3.push(v.clone()),
            Provide::MimeType(v) => mimetypes.push(v.clone()),
            Provide::Firmware { kind, item } => {
                let kind_str = if *kind == FirmwareKind::Flashed { "flashed" } else { "runtime" };
                firmware.push(hash(vec![
                    ("type", Yaml::String(kind_str.to_string())),
                    ("fname", Yaml::String(item.clone())),
                ]));
            }
            Provide::DBus { scope, name } => {
                let scope_str = if *scope == DBusScope::System { "system" } else { "user" };
                dbus.push(hash(vec![
                    ("type", Yaml::String(scope_str.to_string())),
                    ("service", Yaml::String(name.clone())),
                ]));
            }
            Provide::Id(_) | Provide::Codec(_) => {}
        }
    }
    let mut map = YamlHash::new();
    if !libraries.is_empty() {
        map.insert(Yaml::String("libraries".to_string()), str_array(libraries));
    }
    if !binaries.is_empty() {
        map.insert(Yaml::String("binaries".to_string()), str_array(binaries));
    }
    if !fonts.is_empty() {
        map.insert(Yaml::String("fonts".to_string()), str_array(fonts));
    }
    if !modaliases.is_empty() {
        map.insert(Yaml::String("modaliases".to_string()), str_array(modaliases));
    }
    if !python2.is_empty() {
        map.insert(Yaml::String("python2".to_string()), str_array(python2));
    }
    if !python3.is_empty() {
        map.insert(Yaml::String("python3".to_string()), str_array(python3));
    }
    if !mimetypes.is_empty() {
        map.insert(Yaml::String("mimetypes".to_string()), str_array(mimetypes));
    }
    if !firmware.is_empty() {
        map.insert(Yaml::String("firmware".to_string()), Yaml::Array(firmware));
    }
    if !dbus.is_empty() {
        map.insert(Yaml::String("dbus".to_string()), Yaml::Array(dbus));
    }
    Yaml::Hash(map)
}

fn image_to_yaml(image: &Image) -> Yaml {
    let mut pairs = vec![("url", Yaml::String(image.url.to_string()))];
    if let Some(w) = image.width {
        pairs.push(("width", Yaml::Integer(w as i64)));
    }
    if let Some(h) = image.height {
        pairs.push(("height", Yaml::Integer(h as i64)));
    }
    if let Some(locale) = &image.locale {
        pairs.push(("lang", Yaml::String(locale.clone())));
    }
    hash(pairs)
}

fn screenshots_to_yaml(screenshots: &[Screenshot]) -> Yaml {
    Yaml::Array(
        screenshots
            .iter()
            .map(|screenshot| {
                let mut pairs = Vec::new();
                if screenshot.is_default() {
                    pairs.push(("default", Yaml::String("yes".to_string())));
                }
                if let Some(caption) = &screenshot.caption {
                    if !caption.is_empty() {
                        pairs.push(("caption", translatable_string_to_yaml(caption)));
                    }
                }
                if let Some(source) = screenshot.images.iter().find(|i| i.kind == ImageKind::Source) {
                    pairs.push(("source-image", image_to_yaml(source)));
                }
                let thumbnails: Vec<Yaml> = screenshot
                    .images
                    .iter()
                    .filter(|i| i.kind == ImageKind::Thumbnail)
                    .map(image_to_yaml)
                    .collect();
                if !thumbnails.is_empty() {
                    pairs.push(("thumbnails", Yaml::Array(thumbnails)));
                }
                hash(pairs)
            })
            .collect(),
    )
}

fn content_state_to_str(state: ContentState) -> &'static str {
    match state {
        ContentState::None => "none",
        ContentState::Mild => "mild",
        ContentState::Moderate => "moderate",
        ContentState::Intense => "intense",
    }
}

fn content_ratings_to_yaml(ratings: &[ContentRating]) -> Yaml {
    let mut map = YamlHash::new();
    for rating in ratings {
        let mut attrs = YamlHash::new();
        for (id, state) in &rating.values {
            attrs.insert(Yaml::String(id.clone()), Yaml::String(content_state_to_str(*state).to_string()));
        }
        map.insert(Yaml::String(rating.kind.clone()), Yaml::Hash(attrs));
    }
    Yaml::Hash(map)
}

fn languages_to_yaml(languages: &[Language]) -> Yaml {
    Yaml::Array(
        languages
            .iter()
            .map(|language| {
                let mut pairs = vec![("locale", Yaml::String(language.locale.clone()))];
                if let Some(percentage) = language.percentage {
                    pairs.push(("percentage", Yaml::Integer(percentage as i64)));
                }
                hash(pairs)
            })
            .collect(),
    )
}

fn suggests_to_yaml(ids: &[crate::id::AppId]) -> Yaml {
    Yaml::Array(vec![hash(vec![("ids", str_array(ids.iter().map(|id| id.0.clone())))])])
}

fn branding_to_yaml(branding: &Branding) -> Yaml {
    Yaml::Array(
        branding
            .colors
            .iter()
            .map(|color| {
                let scheme = match color.scheme {
                    ColorScheme::Dark => "dark",
                    ColorScheme::Light => "light",
                };
                hash(vec![
                    ("type", Yaml::String(color.kind.as_str().to_string())),
                    ("scheme_preference", Yaml::String(scheme.to_string())),
                    ("value", Yaml::String(color.value.clone())),
                ])
            })
            .collect(),
    )
}

fn translations_to_yaml(translations: &[Translation]) -> Yaml {
    Yaml::Array(
        translations
            .iter()
            .filter_map(|translation| match translation {
                Translation::Gettext(id) => Some(("gettext", id.clone())),
                Translation::Qt(id) => Some(("qt", id.clone())),
                Translation::Unknown => None,
            })
            .map(|(kind, id)| hash(vec![("type", Yaml::String(kind.to_string())), ("id", Yaml::String(id))]))
            .collect(),
    )
}

fn agreements_to_yaml(agreements: &[Agreement]) -> Yaml {
    Yaml::Array(
        agreements
            .iter()
            .map(|agreement| {
                let kind = match &agreement.kind {
                    AgreementKind::Eula => "eula".to_string(),
                    AgreementKind::Privacy => "privacy".to_string(),
                    AgreementKind::Other(s) => s.clone(),
                };
                let mut pairs = vec![("type", Yaml::String(kind))];
                if let Some(version) = &agreement.version {
                    pairs.push(("version", Yaml::String(version.clone())));
                }
                if !agreement.sections.is_empty() {
                    let sections = agreement
                        .sections
                        .iter()
                        .map(|section| {
                            let mut section_pairs = vec![("id", Yaml::String(section.id.clone()))];
                            if let Some(name) = &section.name {
                                section_pairs.push(("name", translatable_string_to_yaml(name)));
                            }
                            if let Some(description) = &section.description {
                                section_pairs.push(("description", translatable_string_to_yaml(description)));
                            }
                            hash(section_pairs)
                        })
                        .collect();
                    pairs.push(("sections", Yaml::Array(sections)));
                }
                hash(pairs)
            })
            .collect(),
    )
}

fn control_to_str(control: Control) -> &'static str {
    match control {
        Control::Pointing => "pointing",
        Control::Keyboard => "keyboard",
        Control::Console => "console",
        Control::Tablet => "tablet",
        Control::Touch => "touch",
        Control::Gamepad => "gamepad",
        Control::TvRemote => "tv-remote",
        Control::Voice => "voice",
        Control::Vision => "vision",
    }
}

fn compare_to_str(compare: Compare) -> &'static str {
    match compare {
        Compare::Eq => "eq",
        Compare::Ne => "ne",
        Compare::Lt => "lt",
        Compare::Le => "le",
        Compare::Gt => "gt",
        Compare::Ge => "ge",
    }
}

fn display_side_to_str(side: DisplaySide) -> &'static str {
    match side {
        DisplaySide::Shortest => "shortest",
        DisplaySide::Longest => "longest",
    }
}

fn display_length_value_to_string(value: &DisplayLengthValue) -> String {
    match value {
        DisplayLengthValue::Xsmall => "xsmall".to_string(),
        DisplayLengthValue::Small => "small".to_string(),
        DisplayLengthValue::Medium => "medium".to_string(),
        DisplayLengthValue::Large => "large".to_string(),
        DisplayLengthValue::Xlarge => "xlarge".to_string(),
        DisplayLengthValue::Value(px) => px.to_string(),
    }
}

fn relation_to_yaml(relation: &Relation) -> Yaml {
    let mut pairs = Vec::new();
    match &relation.item {
        RelationItem::Id(id) => {
            pairs.push(("type", Yaml::String("id".to_string())));
            pairs.push(("value", Yaml::String(id.0.clone())));
        }
        RelationItem::Modalias(v) => {
            pairs.push(("type", Yaml::String("modalias".to_string())));
            pairs.push(("value", Yaml::String(v.clone())));
        }
        RelationItem::Kernel(v) => {
            pairs.push(("type", Yaml::String("kernel".to_string())));
            pairs.push(("value", Yaml::String(v.clone())));
        }
        RelationItem::Memory(v) => {
            pairs.push(("type", Yaml::String("memory".to_string())));
            pairs.push(("value", Yaml::String(v.to_string())));
        }
        RelationItem::Firmware(v) => {
            pairs.push(("type", Yaml::String("firmware".to_string())));
            pairs.push(("value", Yaml::String(v.clone())));
        }
        RelationItem::Control(c) => {
            pairs.push(("type", Yaml::String("control".to_string())));
            pairs.push(("value", Yaml::String(control_to_str(*c).to_string())));
        }
        RelationItem::DisplayLength { value, side } => {
            pairs.push(("type", Yaml::String("display_length".to_string())));
            pairs.push(("value", Yaml::String(display_length_value_to_string(value))));
            pairs.push(("side", Yaml::String(display_side_to_str(*side).to_string())));
        }
        RelationItem::Internet(v) => {
            pairs.push(("type", Yaml::String("internet".to_string())));
            pairs.push(("value", Yaml::String(v.clone())));
        }
        RelationItem::Hardware(v) => {
            pairs.push(("type", Yaml::String("hardware".to_string())));
            pairs.push(("value", Yaml::String(v.clone())));
        }
    }
    if relation.compare != Compare::default() {
        pairs.push(("compare", Yaml::String(compare_to_str(relation.compare).to_string())));
    }
    if let Some(version) = &relation.version {
        pairs.push(("version", Yaml::String(version.clone())));
    }
    hash(pairs)
}

fn relations_to_yaml(relations: &[Relation]) -> Yaml {
    Yaml::Array(relations.iter().map(relation_to_yaml).collect())
}

fn custom_to_yaml(metadata: &BTreeMap<String, Option<String>>) -> Yaml {
    let mut map = YamlHash::new();
    for (key, value) in metadata {
        map.insert(Yaml::String(key.clone()), value.clone().map(Yaml::String).unwrap_or(Yaml::Null));
    }
    Yaml::Hash(map)
}

fn releases_to_yaml(list: &ReleaseList) -> Yaml {
    Yaml::Array(
        list.entries
            .iter()
            .map(|release| {
                let mut pairs = vec![("version", Yaml::String(release.version.clone()))];
                let kind = match release.kind {
                    ReleaseKind::Development => Some("development"),
                    ReleaseKind::Snapshot => Some("snapshot"),
                    ReleaseKind::Stable => None,
                };
                if let Some(kind) = kind {
                    pairs.push(("type", Yaml::String(kind.to_string())));
                }
                if let Some(timestamp) = &release.timestamp {
                    pairs.push(("unix-timestamp", Yaml::Integer(crate::xml::timestamp_to_unix(timestamp))));
                }
                if !release.description.is_empty() {
                    pairs.push(("description", description_to_yaml(&release.description)));
                }
                hash(pairs)
            })
            .collect(),
    )
}

/// Builds the full CamelCase-keyed document for one component, the
/// counterpart to `de::component_from_yaml`.
pub(crate) fn component_to_yaml(component: &Component, _ctx: &Context) -> Yaml {
    let mut pairs: Vec<(&str, Yaml)> = vec![
        ("ID", Yaml::String(component.id.0.clone())),
        ("Type", Yaml::String(component.kind.to_string())),
        ("Name", translatable_string_to_yaml(&component.name)),
    ];

    if let Some(summary) = &component.summary {
        pairs.push(("Summary", translatable_string_to_yaml(summary)));
    }
    if !component.description.is_empty() {
        pairs.push(("Description", description_to_yaml(&component.description)));
    }
    if let Some(license) = &component.project_license {
        pairs.push(("ProjectLicense", Yaml::String(license.to_string())));
    }
    if let Some(group) = &component.project_group {
        pairs.push(("ProjectGroup", Yaml::String(group.clone())));
    }
    if !component.developer.is_empty() {
        pairs.push(("Developer", developer_to_yaml(&component.developer)));
    }
    if let Some(source) = &component.source_pkgname {
        pairs.push(("SourcePackage", Yaml::String(source.clone())));
    }
    if let Some(pkgname) = component.pkgnames.first() {
        pairs.push(("Package", Yaml::String(pkgname.clone())));
    }
    if !component.extends.is_empty() {
        pairs.push(("Extends", str_array(component.extends.iter().map(|id| id.0.clone()))));
    }
    if !component.compulsory_for_desktop.is_empty() {
        pairs.push(("CompulsoryForDesktops", str_array(component.compulsory_for_desktop.iter().cloned())));
    }
    if !component.categories.is_empty() {
        pairs.push(("Categories", str_array(component.categories.iter().map(|c| c.0.clone()))));
    }
    if let Some(keywords) = &component.keywords {
        if !keywords.is_empty() {
            pairs.push(("Keywords", translatable_list_to_yaml(keywords)));
        }
    }
    if !component.urls.is_empty() {
        pairs.push(("Url", urls_to_yaml(&component.urls)));
    }
    if !component.icons.is_empty() {
        pairs.push(("Icon", icons_to_yaml(&component.icons)));
    }
    if !component.bundles.is_empty() {
        pairs.push(("Bundles", bundles_to_yaml(&component.bundles)));
    }
    if !component.launchables.is_empty() {
        pairs.push(("Launchable", launchables_to_yaml(&component.launchables)));
    }
    if !component.provides.is_empty() {
        pairs.push(("Provides", provides_to_yaml(&component.provides)));
    }
    if !component.screenshots.is_empty() {
        pairs.push(("Screenshots", screenshots_to_yaml(&component.screenshots)));
    }
    if !component.content_ratings.is_empty() {
        pairs.push(("ContentRating", content_ratings_to_yaml(&component.content_ratings)));
    }
    if !component.languages.is_empty() {
        pairs.push(("Languages", languages_to_yaml(&component.languages)));
    }
    if !component.suggests.is_empty() {
        pairs.push(("Suggests", suggests_to_yaml(&component.suggests)));
    }
    if !component.tags.is_empty() {
        pairs.push(("Tags", str_array(component.tags.iter().cloned())));
    }
    if !component.branding.is_default() {
        pairs.push(("Branding", branding_to_yaml(&component.branding)));
    }
    if !component.translations.is_empty() {
        pairs.push(("Translation", translations_to_yaml(&component.translations)));
    }
    if !component.replaces.is_empty() {
        pairs.push(("Replaces", str_array(component.replaces.iter().map(|id| id.0.clone()))));
    }
    if !component.agreements.is_empty() {
        pairs.push(("Agreement", agreements_to_yaml(&component.agreements)));
    }
    if !component.requires.is_empty() {
        pairs.push(("Requires", relations_to_yaml(&component.requires)));
    }
    if !component.recommends.is_empty() {
        pairs.push(("Recommends", relations_to_yaml(&component.recommends)));
    }
    if !component.supports.is_empty() {
        pairs.push(("Supports", relations_to_yaml(&component.supports)));
    }
    if !component.metadata.is_empty() {
        pairs.push(("Custom", custom_to_yaml(&component.metadata)));
    }
    if !component.releases.entries.is_empty() {
        pairs.push(("Releases", releases_to_yaml(&component.releases)));
    }
    if component.priority != 0 {
        pairs.push(("Priority", Yaml::Integer(component.priority as i64)));
    }

    hash(pairs)
}

/// Serializes `components` as a DEP-11 stream: `ctx`'s header document,
/// then one document per component.
pub(crate) fn emit_stream(components: &[Component], ctx: &Context) -> String {
    let mut out = header_to_yaml_string(ctx);
    for component in components {
        out.push_str(&dump(&component_to_yaml(component, ctx)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ComponentBuilder;
    use crate::id::AppId;

    fn sample() -> Component {
        ComponentBuilder::default()
            .id(AppId::from("org.example.Foo"))
            .name(TranslatableString::with_default("Foo"))
            .summary(TranslatableString::with_default("A sample app"))
            .build()
    }

    #[test]
    fn emits_id_name_and_summary_keys() {
        let yaml = dump(&component_to_yaml(&sample(), &Context::default()));
        assert!(yaml.contains("ID:"));
        assert!(yaml.contains("org.example.Foo"));
        assert!(yaml.contains("Name:"));
        assert!(yaml.contains("Summary:"));
    }

    #[test]
    fn header_carries_origin_and_priority() {
        let ctx = Context::default().origin("flathub".to_string()).priority(5);
        let header = header_to_yaml_string(&ctx);
        assert!(header.contains("Origin:"));
        assert!(header.contains("flathub"));
        assert!(header.contains("Priority:"));
    }

    #[test]
    fn emit_stream_concatenates_header_and_documents() {
        let out = emit_stream(&[sample()], &Context::default());
        assert_eq!(out.matches("---").count(), 2);
    }
}
