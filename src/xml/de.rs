//! Parses a `Component` (and everything it carries) out of an
//! `xmltree::Element` DOM, for both the metainfo (`<component>`) and
//! catalog (`<components><component>…</component></components>`) dialects.
//!
//! Every locale-tagged element is read through [`retained_locale`], which
//! implements the four-step retention rule in one place rather than
//! duplicating it per field.

use std::str::FromStr;

use xmltree::{Element, XMLNode};

use crate::agreement::{Agreement, AgreementKind, AgreementSection};
use crate::branding::{BrandColor, BrandColorKind, Branding, ColorScheme};
use crate::builders::ComponentBuilder;
use crate::category::Category;
use crate::content_rating::ContentRating;
use crate::context::{Context, FormatStyle};
use crate::developer::Developer;
use crate::enums::{
    ArtifactKind, Bundle, Checksum, ComponentKind, DBusScope, FirmwareKind, Icon, ImageKind,
    Kudo, Launchable, ProjectUrl, Provide, ReleaseKind, ReleaseListKind, ReleaseUrgency, Size,
    Translation,
};
use crate::error::ParseError;
use crate::id::AppId;
use crate::language::Language;
use crate::license::License;
use crate::markup::{Block, Description, Inline, Markup};
use crate::release::{Artifact, Issue, IssueKind, Release, ReleaseList};
use crate::requirements::{Compare, Control, DisplayLengthValue, DisplaySide, Relation, RelationItem, RelationKind};
use crate::screenshot::{Image, Screenshot, ScreenshotKind, Video, VideoCodec, VideoContainer};
use crate::translatable::{is_discarded_locale, language_only, TranslatableList, TranslatableString, ALL_LOCALES, DEFAULT_LOCALE};

/// Whether a value tagged `locale` should be kept given `ctx`'s target
/// locale and whether a translated (non-`"C"`) value has already been
/// retained for this field:
/// `"ALL"` keeps everything; otherwise an exact or language-stripped match
/// is always kept, and the untranslated `"C"` value is kept only until a
/// translated match has been seen.
pub(crate) fn retained_locale(ctx: &Context, locale: &str, translated_seen: &mut bool) -> bool {
    if is_discarded_locale(locale) {
        return false;
    }
    if ctx.locale() == ALL_LOCALES {
        return true;
    }
    if locale == ctx.locale() || language_only(locale) == language_only(ctx.locale()) {
        *translated_seen = true;
        return true;
    }
    locale == DEFAULT_LOCALE && !*translated_seen
}

fn lang_of(e: &Element) -> String {
    e.attributes
        .get("xml:lang")
        .cloned()
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

fn text_of(e: &Element) -> String {
    e.get_text().map(|s| s.into_owned()).unwrap_or_default()
}

fn children_named<'a>(e: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    e.children.iter().filter_map(XMLNode::as_element).filter(move |c| c.name == name)
}

/// Collects a locale-tagged short string from every `tag`-named child of
/// `parent`, honoring `ctx`'s retention rule.
fn collect_translatable_string(parent: &Element, tag: &str, ctx: &Context) -> TranslatableString {
    let mut out = TranslatableString::default();
    let mut translated_seen = false;
    for child in children_named(parent, tag) {
        let locale = lang_of(child);
        if retained_locale(ctx, &locale, &mut translated_seen) {
            out.set(&locale, text_of(child));
        }
    }
    out
}

/// Collects a locale-tagged keyword list from `<keywords><keyword xml:lang=…>`
/// children, honoring `ctx`'s retention rule.
fn collect_keywords(parent: &Element, ctx: &Context) -> Option<TranslatableList> {
    let keywords_el = parent.children.iter().find_map(|n| {
        let e = n.as_element()?;
        (e.name == "keywords").then_some(e)
    })?;
    let mut out = TranslatableList::default();
    let mut translated_seen = false;
    for kw in children_named(keywords_el, "keyword") {
        let locale = lang_of(kw);
        if retained_locale(ctx, &locale, &mut translated_seen) {
            out.push(&locale, text_of(kw));
        }
    }
    Some(out).filter(|list| !list.is_empty())
}

fn parse_inline_run(e: &Element) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for node in &e.children {
        match node {
            XMLNode::Text(text) => inlines.push(Inline::Text(text.trim().to_string())),
            XMLNode::Element(child) if child.name == "em" => {
                inlines.push(Inline::Emphasis(text_of(child)))
            }
            XMLNode::Element(child) if child.name == "code" => {
                inlines.push(Inline::Code(text_of(child)))
            }
            _ => {}
        }
    }
    if inlines.is_empty() {
        inlines.push(Inline::Text(text_of(e)));
    }
    inlines
}

pub(crate) fn parse_markup_blocks(container: &Element) -> Markup {
    let mut blocks = Vec::new();
    for node in container.children.iter().filter_map(XMLNode::as_element) {
        match node.name.as_str() {
            "p" => blocks.push(Block::Paragraph(parse_inline_run(node))),
            "ul" => blocks.push(Block::UnorderedList(
                children_named(node, "li").map(parse_inline_run).collect(),
            )),
            "ol" => blocks.push(Block::OrderedList(
                children_named(node, "li").map(parse_inline_run).collect(),
            )),
            _ => {}
        }
    }
    Markup(blocks)
}

/// Parses every `<description>` child of `component_el` into the locale ->
/// markup map. Metainfo and catalog documents nest locales differently: a
/// metainfo document carries one `<description>` whose `<p>`/`<ul>`/`<ol>`
/// children each declare their own `xml:lang` (default `"C"`); a catalog
/// document instead repeats `<description xml:lang=…>` once per locale,
/// with that locale implicitly applying to every child underneath it.
fn parse_description(component_el: &Element, style: FormatStyle, ctx: &Context) -> Description {
    let mut out = Description::new();
    let mut translated_seen = false;
    for description_el in children_named(component_el, "description") {
        match style {
            FormatStyle::Metainfo => {
                // Group this block's children by their own `xml:lang`.
                let mut by_locale: std::collections::BTreeMap<String, Vec<Block>> =
                    std::collections::BTreeMap::new();
                for node in description_el.children.iter().filter_map(XMLNode::as_element) {
                    let locale = lang_of(node);
                    let block = match node.name.as_str() {
                        "p" => Some(Block::Paragraph(parse_inline_run(node))),
                        "ul" => Some(Block::UnorderedList(
                            children_named(node, "li").map(parse_inline_run).collect(),
                        )),
                        "ol" => Some(Block::OrderedList(
                            children_named(node, "li").map(parse_inline_run).collect(),
                        )),
                        _ => None,
                    };
                    if let Some(block) = block {
                        by_locale.entry(locale).or_default().push(block);
                    }
                }
                for (locale, blocks) in by_locale {
                    if retained_locale(ctx, &locale, &mut translated_seen) {
                        out.insert(locale, Markup(blocks));
                    }
                }
            }
            FormatStyle::Catalog => {
                let locale = lang_of(description_el);
                if retained_locale(ctx, &locale, &mut translated_seen) {
                    out.insert(locale, parse_markup_blocks(description_el));
                }
            }
        }
    }
    out
}

fn parse_license(e: &Element) -> License {
    License::from(text_of(e))
}

fn parse_icon(e: &Element, ctx: &Context) -> Result<Icon, ParseError> {
    let width = attr_u32(e, "width");
    let height = attr_u32(e, "height");
    let scale = attr_u32(e, "scale");
    let value = text_of(e);
    Ok(match e.attributes.get("type").map(String::as_str) {
        Some("stock") => Icon::Stock(value),
        Some("remote") | None if value.contains("://") => Icon::Remote {
            url: crate::xml::resolve_url(&value, ctx)?,
            width,
            height,
            scale,
        },
        Some("remote") => Icon::Remote {
            url: crate::xml::resolve_url(&value, ctx)?,
            width,
            height,
            scale,
        },
        Some("local") => Icon::Local { path: value.into(), width, height },
        Some("cached") | None => Icon::Cached { path: value.into(), width, height, scale },
        Some(_) => Icon::Cached { path: value.into(), width, height, scale },
    })
}

fn attr_u32(e: &Element, name: &str) -> Option<u32> {
    e.attributes.get(name).and_then(|v| v.parse().ok())
}

fn parse_image(e: &Element, ctx: &Context) -> Result<Image, ParseError> {
    let kind = match e.attributes.get("type").map(String::as_str) {
        Some("thumbnail") => ImageKind::Thumbnail,
        _ => ImageKind::Source,
    };
    Ok(Image {
        kind,
        url: crate::xml::resolve_url(&text_of(e), ctx)?,
        width: attr_u32(e, "width"),
        height: attr_u32(e, "height"),
        scale: attr_u32(e, "scale"),
        locale: e.attributes.get("xml:lang").cloned(),
    })
}

fn parse_video(e: &Element, ctx: &Context) -> Result<Video, ParseError> {
    let codec = e.attributes.get("codec").and_then(|c| match c.as_str() {
        "vp9" => Some(VideoCodec::Vp9),
        "av1" => Some(VideoCodec::Av1),
        _ => None,
    });
    let container = e.attributes.get("container").and_then(|c| match c.as_str() {
        "mkv" => Some(VideoContainer::Mkv),
        "webm" => Some(VideoContainer::Webm),
        _ => None,
    });
    Ok(Video {
        url: crate::xml::resolve_url(&text_of(e), ctx)?,
        width: attr_u32(e, "width"),
        height: attr_u32(e, "height"),
        codec,
        container,
        locale: e.attributes.get("xml:lang").cloned(),
    })
}

fn parse_screenshot(e: &Element, ctx: &Context) -> Result<Screenshot, ParseError> {
    let kind = match e.attributes.get("type").map(String::as_str) {
        Some("default") => ScreenshotKind::Default,
        _ => ScreenshotKind::Extra,
    };
    // A legacy bare `<screenshot>url</screenshot>` with no element children
    // degrades to one source image.
    if !e.children.iter().any(|n| n.as_element().is_some()) {
        let url = text_of(e);
        if !url.is_empty() {
            return Ok(Screenshot {
                kind,
                caption: None,
                environment: None,
                images: vec![Image {
                    kind: ImageKind::Source,
                    url: crate::xml::resolve_url(&url, ctx)?,
                    width: None,
                    height: None,
                    scale: None,
                    locale: None,
                }],
                videos: Vec::new(),
            });
        }
    }

    let caption = children_named(e, "caption").next().map(|c| {
        let mut ts = TranslatableString::default();
        ts.set(&lang_of(c), text_of(c));
        ts
    });
    let mut images = Vec::new();
    for img in children_named(e, "image") {
        images.push(parse_image(img, ctx)?);
    }
    let mut videos = Vec::new();
    for vid in children_named(e, "video") {
        videos.push(parse_video(vid, ctx)?);
    }
    Ok(Screenshot {
        kind,
        caption,
        environment: e.attributes.get("environment").cloned(),
        images,
        videos,
    })
}

fn parse_provides(provides_el: &Element) -> Vec<Provide> {
    let mut out = Vec::new();
    for child in provides_el.children.iter().filter_map(XMLNode::as_element) {
        let value = text_of(child);
        match child.name.as_str() {
            "library" => out.push(Provide::Library(value.into())),
            "binary" => out.push(Provide::Binary(value)),
            "font" => out.push(Provide::Font(value)),
            "modalias" => out.push(Provide::Modalias(value)),
            "mediatype" | "mimetype" => out.push(Provide::MimeType(value)),
            "python2" => out.push(Provide::Python2(value)),
            "python3" => out.push(Provide::Python3(value)),
            "id" => out.push(Provide::Id(value)),
            "codec" => out.push(Provide::Codec(value)),
            "dbus" => {
                let scope = match child.attributes.get("type").map(String::as_str) {
                    Some("user") => DBusScope::User,
                    _ => DBusScope::System,
                };
                out.push(Provide::DBus { scope, name: value });
            }
            "firmware" => {
                let kind = match child.attributes.get("type").map(String::as_str) {
                    Some("flashed") => FirmwareKind::Flashed,
                    _ => FirmwareKind::Runtime,
                };
                out.push(Provide::Firmware { kind, item: value });
            }
            _ => {}
        }
    }
    out
}

fn parse_bundle(e: &Element) -> Result<Bundle, ParseError> {
    let value = text_of(e);
    Ok(match e.attributes.get("type").map(String::as_str) {
        Some("limba") => Bundle::Limba(value),
        Some("snap") => Bundle::Snap(value),
        Some("appimage") => Bundle::AppImage(value),
        Some("tarball") | Some("cabinet") => Bundle::Tarball(value),
        Some("flatpak") => Bundle::Flatpak {
            runtime: e.attributes.get("runtime").cloned(),
            sdk: e.attributes.get("sdk").cloned().unwrap_or_default(),
            id: value,
        },
        Some(other) => Bundle::Unknown(other.to_string(), value),
        None => return Err(ParseError::missing_attribute("type", "bundle")),
    })
}

fn parse_launchable(e: &Element) -> Result<Launchable, ParseError> {
    let value = text_of(e);
    Ok(match e.attributes.get("type").map(String::as_str) {
        Some("desktop-id") => Launchable::DesktopId(value),
        Some("service") => Launchable::Service(value),
        Some("cockpit-manifest") => Launchable::CockpitManifest(value),
        Some("url") => Launchable::Url(url::Url::parse(&value)?),
        _ => Launchable::Unknown(value),
    })
}

fn parse_project_url(e: &Element) -> Result<ProjectUrl, ParseError> {
    let url = url::Url::parse(&text_of(e))?;
    Ok(match e.attributes.get("type").map(String::as_str) {
        Some("homepage") => ProjectUrl::Homepage(url),
        Some("bugtracker") => ProjectUrl::BugTracker(url),
        Some("faq") => ProjectUrl::Faq(url),
        Some("help") => ProjectUrl::Help(url),
        Some("donation") => ProjectUrl::Donation(url),
        Some("translate") => ProjectUrl::Translate(url),
        Some("contact") => ProjectUrl::Contact(url),
        Some("vcs-browser") => ProjectUrl::VcsBrowser(url),
        Some("contribute") => ProjectUrl::ContributeUrl(url),
        _ => ProjectUrl::Unknown(url),
    })
}

fn parse_checksum(e: &Element) -> Option<Checksum> {
    let value = text_of(e);
    match e.attributes.get("type").map(String::as_str) {
        Some("sha1") => Some(Checksum::Sha1(value)),
        Some("sha256") => Some(Checksum::Sha256(value)),
        Some("blake2b") => Some(Checksum::Blake2b(value)),
        Some("blake2s") => Some(Checksum::Blake2s(value)),
        _ => None,
    }
}

fn parse_artifact(e: &Element) -> Result<Artifact, ParseError> {
    let kind = match e.attributes.get("type").map(String::as_str) {
        Some("binary") => ArtifactKind::Binary,
        _ => ArtifactKind::Source,
    };
    let mut artifact = Artifact::new(kind);
    artifact.platform = e.attributes.get("platform").cloned();
    artifact.bundle_kind = e.attributes.get("bundle").cloned();
    for loc in children_named(e, "location") {
        artifact.locations.push(url::Url::parse(&text_of(loc))?);
    }
    for checksum in children_named(e, "checksum") {
        if let Some(c) = parse_checksum(checksum) {
            artifact.checksums.push(c);
        }
    }
    for size in children_named(e, "size") {
        let value: u64 = text_of(size).parse().unwrap_or_default();
        match size.attributes.get("type").map(String::as_str) {
            Some("installed") => artifact.sizes.push(Size::Installed(value)),
            _ => artifact.sizes.push(Size::Download(value)),
        }
    }
    if let Some(filename) = children_named(e, "filename").next() {
        artifact.filename = Some(text_of(filename));
    }
    Ok(artifact)
}

fn parse_timestamp(raw: &str) -> Option<crate::DateTime> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "time")] {
            if let Ok(secs) = raw.parse::<i64>() {
                return time::OffsetDateTime::from_unix_timestamp(secs).ok();
            }
            time::Date::parse(raw, &time::macros::format_description!("[year]-[month]-[day]"))
                .ok()
                .map(|d| d.midnight().assume_utc())
        } else {
            use chrono::TimeZone;
            if let Ok(secs) = raw.parse::<i64>() {
                return chrono::Utc.timestamp_opt(secs, 0).single();
            }
            chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| chrono::Utc.from_utc_datetime(&dt))
        }
    }
}

fn parse_release(e: &Element) -> Result<Release, ParseError> {
    let version = e.attributes.get("version").cloned().unwrap_or_default();
    let mut release = Release::new(version);
    release.kind = match e.attributes.get("type").map(String::as_str) {
        Some("development") => ReleaseKind::Development,
        Some("snapshot") => ReleaseKind::Snapshot,
        _ => ReleaseKind::Stable,
    };
    release.urgency = match e.attributes.get("urgency").map(String::as_str) {
        Some("low") => ReleaseUrgency::Low,
        Some("high") => ReleaseUrgency::High,
        Some("critical") => ReleaseUrgency::Critical,
        _ => ReleaseUrgency::Medium,
    };
    if let Some(raw) = e.attributes.get("timestamp").or_else(|| e.attributes.get("date")) {
        release.timestamp = parse_timestamp(raw);
    }
    if let Some(raw) = e.attributes.get("date_eol") {
        release.timestamp_eol = parse_timestamp(raw);
    }
    for description_el in children_named(e, "description") {
        release.description.insert(lang_of(description_el), parse_markup_blocks(description_el));
    }
    for url_el in children_named(e, "url") {
        release.url = Some(url::Url::parse(&text_of(url_el))?);
    }
    if let Some(issues_el) = children_named(e, "issues").next() {
        for issue_el in children_named(issues_el, "issue") {
            let kind = match issue_el.attributes.get("type").map(String::as_str) {
                Some("cve") => IssueKind::Cve,
                _ => IssueKind::Generic,
            };
            let url = issue_el
                .attributes
                .get("url")
                .map(|u| url::Url::parse(u))
                .transpose()?;
            release.issues.push(Issue { kind, id: text_of(issue_el), url });
        }
    }
    if let Some(artifacts_el) = children_named(e, "artifacts").next() {
        for artifact_el in children_named(artifacts_el, "artifact") {
            release.artifacts.push(parse_artifact(artifact_el)?);
        }
    }
    Ok(release)
}

fn parse_release_list(e: &Element, ctx: &Context) -> Result<ReleaseList, ParseError> {
    let mut list = ReleaseList::default();
    if let Some(url) = e.attributes.get("url") {
        list.external_url = Some(crate::xml::resolve_url(url, ctx)?);
    }
    for release_el in children_named(e, "release") {
        list.entries.push(parse_release(release_el)?);
    }
    Ok(list)
}

/// Parses the standalone `<releases>` root document a `ReleaseFetcher`
/// resolves an external release list to (either the HTTP response body or
/// the sibling `releases/<id>.releases.xml` file). Shares `parse_release`
/// with the inline `<releases>` element nested in a component document.
pub(crate) fn parse_external_release_document(bytes: &[u8]) -> Result<Vec<Release>, ParseError> {
    let root = Element::parse(bytes)?;
    if root.name != "releases" {
        return Err(ParseError::schema(&root.name, "external release document root must be <releases>"));
    }
    children_named(&root, "release").map(parse_release).collect()
}

fn parse_relation_item(e: &Element) -> Result<RelationItem, ParseError> {
    let value = text_of(e);
    Ok(match e.name.as_str() {
        "id" => RelationItem::Id(AppId::from(value)),
        "modalias" => RelationItem::Modalias(value),
        "kernel" => RelationItem::Kernel(value),
        "memory" => RelationItem::Memory(value.parse().unwrap_or_default()),
        "firmware" => RelationItem::Firmware(value),
        "control" => RelationItem::Control(Control::try_from(value.as_str())?),
        "display_length" => RelationItem::DisplayLength {
            value: DisplayLengthValue::try_from(value.as_str())?,
            side: e
                .attributes
                .get("side")
                .map(|s| DisplaySide::try_from(s.as_str()))
                .transpose()?
                .unwrap_or_default(),
        },
        "internet" => RelationItem::Internet(value),
        "hardware" => RelationItem::Hardware(value),
        other => return Err(ParseError::invalid_tag(other)),
    })
}

fn parse_relation_block(e: &Element, kind: RelationKind) -> Result<Vec<Relation>, ParseError> {
    let mut out = Vec::new();
    for child in e.children.iter().filter_map(XMLNode::as_element) {
        let item = parse_relation_item(child)?;
        let compare = child
            .attributes
            .get("compare")
            .map(|c| Compare::try_from(c.as_str()))
            .transpose()?
            .unwrap_or_default();
        let version = child.attributes.get("version").cloned();
        out.push(Relation { kind, item, compare, version });
    }
    Ok(out)
}

fn parse_content_rating(e: &Element) -> ContentRating {
    let mut rating = ContentRating::new(e.attributes.get("type").cloned().unwrap_or_default());
    for attr in children_named(e, "content_attribute") {
        if let Some(id) = attr.attributes.get("id") {
            rating.set_attribute(id.clone(), &text_of(attr));
        }
    }
    rating
}

fn parse_branding(e: &Element) -> Branding {
    let mut colors = Vec::new();
    for color_el in children_named(e, "color") {
        let kind = color_el
            .attributes
            .get("type")
            .map(|t| BrandColorKind::from(t.as_str()))
            .unwrap_or(BrandColorKind::Other(String::new()));
        let scheme = match color_el.attributes.get("scheme_preference").map(String::as_str) {
            Some("dark") => ColorScheme::Dark,
            _ => ColorScheme::Light,
        };
        colors.push(BrandColor { kind, scheme, value: text_of(color_el) });
    }
    Branding { colors }
}

fn parse_custom(e: &Element) -> std::collections::BTreeMap<String, Option<String>> {
    let mut out = std::collections::BTreeMap::new();
    for value_el in children_named(e, "value") {
        if let Some(key) = value_el.attributes.get("key") {
            let text = text_of(value_el);
            out.insert(key.clone(), if text.is_empty() { None } else { Some(text) });
        }
    }
    out
}

fn parse_languages(e: &Element) -> Vec<Language> {
    children_named(e, "lang")
        .map(|lang_el| Language {
            locale: text_of(lang_el),
            percentage: lang_el.attributes.get("percentage").and_then(|p| p.parse().ok()),
        })
        .collect()
}

fn parse_agreement(e: &Element) -> Agreement {
    let kind = e
        .attributes
        .get("type")
        .map(|t| AgreementKind::from(t.as_str()))
        .unwrap_or(AgreementKind::Other(String::new()));
    let sections = children_named(e, "agreement_section")
        .map(|section_el| {
            let mut name = None;
            let mut description = None;
            if let Some(name_el) = children_named(section_el, "name").next() {
                name = Some(TranslatableString::with_default(text_of(name_el)));
            }
            if let Some(desc_el) = children_named(section_el, "description").next() {
                description = Some(TranslatableString::with_default(text_of(desc_el)));
            }
            AgreementSection {
                id: section_el.attributes.get("id").cloned().unwrap_or_default(),
                name,
                description,
            }
        })
        .collect();
    Agreement { kind, version: e.attributes.get("version").cloned(), sections }
}

use crate::component::Component;

/// Parses a single `<requires>`/`<recommends>`/`<supports>` block into its
/// `Relation` list, for callers (the pool's relation-compare helpers) that
/// want to parse one relation block in isolation rather than a whole
/// component.
pub(crate) fn relation_from_element(e: &Element, kind: RelationKind) -> Result<Vec<Relation>, ParseError> {
    parse_relation_block(e, kind)
}

/// Parses a single `<component>` element into a `Component`, applying
/// `ctx`'s locale retention and media base URL resolution throughout.
pub(crate) fn component_from_element_with_context(e: &Element, ctx: &Context) -> Result<Component, ParseError> {
    if e.name != "component" {
        return Err(ParseError::schema(&e.name, "expected a <component> element"));
    }

    let id_el = e.get_child("id").ok_or_else(|| ParseError::missing_tag("id"))?;
    let id = AppId::try_from(text_of(id_el).as_str())?;

    let name = collect_translatable_string(e, "name", ctx);
    let summary = collect_translatable_string(e, "summary", ctx);
    let keywords = collect_keywords(e, ctx);

    let developer_name = collect_translatable_string(e, "developer_name", ctx);
    let mut developer = Developer { id: None, name: developer_name };
    if let Some(developer_el) = children_named(e, "developer").next() {
        developer.id = developer_el.attributes.get("id").cloned();
        let name_from_block = collect_translatable_string(developer_el, "name", ctx);
        if !name_from_block.is_empty() {
            developer.name = name_from_block;
        }
    }

    let mut builder = ComponentBuilder::default().id(id).name(name);
    if !summary.is_empty() {
        builder = builder.summary(summary);
    }
    builder = builder.developer(developer);
    if let Some(keywords) = keywords {
        builder = builder.keywords(keywords);
    }

    if let Some(kind) = e.attributes.get("type") {
        if let Ok(kind) = ComponentKind::from_str(kind) {
            builder = builder.kind(kind);
        }
    }
    if let Some(merge) = e.attributes.get("merge") {
        builder = builder.merge(crate::enums::MergeKind::parse(merge));
    }

    // ComponentBuilder only exposes a single-locale `description` setter;
    // set every retained locale directly through the underlying map.
    let mut component = builder.build();
    component.description = parse_description(e, ctx.style(), ctx);

    if let Some(license_el) = children_named(e, "project_license").next() {
        component.project_license = Some(parse_license(license_el));
    }
    if let Some(license_el) = children_named(e, "metadata_license").next() {
        component.metadata_license = Some(parse_license(license_el));
    }
    if let Some(group_el) = children_named(e, "project_group").next() {
        component.project_group = Some(text_of(group_el));
    }
    if let Some(contact_el) = children_named(e, "update_contact").next() {
        component.update_contact = Some(text_of(contact_el));
    }
    if let Some(source_el) = children_named(e, "source_pkgname").next() {
        component.source_pkgname = Some(text_of(source_el));
    }
    for pkgname_el in children_named(e, "pkgname") {
        component.pkgnames.push(text_of(pkgname_el));
    }

    for compulsory_el in children_named(e, "compulsory_for_desktop") {
        component.compulsory_for_desktop.insert(text_of(compulsory_el));
    }

    if let Some(extends_el) = children_named(e, "extends").next() {
        for id_el in children_named(extends_el, "id") {
            component.extends.push(AppId::from(text_of(id_el)));
        }
    }
    if let Some(replaces_el) = children_named(e, "replaces").next() {
        for id_el in children_named(replaces_el, "id") {
            component.replaces.push(AppId::from(text_of(id_el)));
        }
    }
    for suggests_el in children_named(e, "suggests") {
        for id_el in children_named(suggests_el, "id") {
            component.suggests.push(AppId::from(text_of(id_el)));
        }
    }
    if let Some(categories_el) = children_named(e, "categories").next() {
        for category_el in children_named(categories_el, "category") {
            component.categories.push(Category::from(text_of(category_el)));
        }
    }
    if let Some(tags_el) = children_named(e, "tags").next() {
        for tag_el in children_named(tags_el, "tag") {
            component.tags.push(text_of(tag_el));
        }
    }
    for url_el in children_named(e, "url") {
        component.urls.push(parse_project_url(url_el)?);
    }
    for icon_el in children_named(e, "icon") {
        component.icons.push(parse_icon(icon_el, ctx)?);
    }
    if let Some(screenshots_el) = children_named(e, "screenshots").next() {
        let mut seen_default = false;
        for screenshot_el in children_named(screenshots_el, "screenshot") {
            let mut screenshot = parse_screenshot(screenshot_el, ctx)?;
            if screenshot.kind == ScreenshotKind::Default {
                if seen_default {
                    log::warn!(
                        "component {} declares more than one default screenshot, keeping the first",
                        component.id
                    );
                    screenshot.kind = ScreenshotKind::Extra;
                } else {
                    seen_default = true;
                }
            }
            component.screenshots.push(screenshot);
        }
    }
    if let Some(provides_el) = children_named(e, "provides").next() {
        component.provides.extend(parse_provides(provides_el));
    }
    if let Some(mimetypes_el) = children_named(e, "mimetypes").next() {
        for mimetype_el in children_named(mimetypes_el, "mimetype") {
            // Legacy top-level `<mimetypes><mimetype>` normalizes to the
            // same `Provide::MimeType` a `<provides><mediatype>` produces,
            // so round-tripping always emits `<mediatype>` and never
            // double-stores the value.
            component.provides.push(Provide::MimeType(text_of(mimetype_el)));
        }
    }
    for bundle_el in children_named(e, "bundle") {
        component.bundles.push(parse_bundle(bundle_el)?);
    }
    for launchable_el in children_named(e, "launchable") {
        component.launchables.push(parse_launchable(launchable_el)?);
    }
    for releases_el in children_named(e, "releases") {
        let parsed = parse_release_list(releases_el, ctx)?;
        component.releases.entries.extend(parsed.entries);
        component.releases.external_url = component.releases.external_url.take().or(parsed.external_url);
    }
    for requires_el in children_named(e, "requires") {
        component.requires.extend(parse_relation_block(requires_el, RelationKind::Requires)?);
    }
    for recommends_el in children_named(e, "recommends") {
        component.recommends.extend(parse_relation_block(recommends_el, RelationKind::Recommends)?);
    }
    for supports_el in children_named(e, "supports") {
        component.supports.extend(parse_relation_block(supports_el, RelationKind::Supports)?);
    }
    for ratings_el in children_named(e, "content_rating") {
        component.content_ratings.push(parse_content_rating(ratings_el));
    }
    if let Some(branding_el) = children_named(e, "branding").next() {
        component.branding = parse_branding(branding_el);
    }
    if let Some(custom_el) = children_named(e, "custom").next() {
        component.metadata = parse_custom(custom_el);
    }
    if let Some(languages_el) = children_named(e, "languages").next() {
        component.languages = parse_languages(languages_el);
    }
    for translation_el in children_named(e, "translation") {
        let value = text_of(translation_el);
        component.translations.push(match translation_el.attributes.get("type").map(String::as_str) {
            Some("qt") => Translation::Qt(value),
            Some("gettext") => Translation::Gettext(value),
            _ => Translation::Unknown,
        });
    }
    for agreement_el in children_named(e, "agreement") {
        component.agreements.push(parse_agreement(agreement_el));
    }
    for kudo_el in children_named(e, "kudos").flat_map(|k| children_named(k, "kudo")) {
        if let Ok(kudo) = Kudo::from_str(&text_of(kudo_el)) {
            component.kudos.push(kudo);
        }
    }
    if let Some(eol_el) = children_named(e, "date_eol").next() {
        component.date_eol = parse_timestamp(&text_of(eol_el));
    }

    Ok(component)
}
