//! Serializes a `Component` (and everything it carries) back into an
//! `xmltree::Element` DOM, the symmetrical operation to `de.rs`: fixed
//! child order, locale-tagged elements sorted `C` first then
//! lexicographic, default-valued flags omitted, catalog root attributes
//! only emitted when set.

use xmltree::{Element, EmitterConfig, XMLNode};

use crate::agreement::{Agreement, AgreementKind};
use crate::branding::{Branding, ColorScheme};
use crate::component::Component;
use crate::context::{Context, FormatStyle};
use crate::enums::{
    Bundle, Checksum, ComponentKind, DBusScope, FirmwareKind, Icon, ImageKind, Launchable,
    ProjectUrl, Provide, ReleaseKind, ReleaseUrgency, Size, Translation,
};
use crate::markup::{Block, Inline, Markup};
use crate::release::{Artifact, Issue, IssueKind, Release};
use crate::requirements::{Compare, Relation, RelationItem};
use crate::screenshot::{Image, Screenshot, ScreenshotKind, Video};
use crate::translatable::{TranslatableList, TranslatableString, DEFAULT_LOCALE};

fn elem(name: &str) -> Element {
    Element::new(name)
}

/// Converts a parsed `crate::DateTime` back to the unix-seconds form
/// `timestamp`/`date_eol` attributes are emitted in, the reverse of
/// `de::parse_timestamp`.
pub(crate) fn timestamp_to_unix(value: &crate::DateTime) -> i64 {
    cfg_if::cfg_if! {
        if #[cfg(feature = "time")] {
            value.unix_timestamp()
        } else {
            value.timestamp()
        }
    }
}

fn text_elem(name: &str, text: impl Into<String>) -> Element {
    let mut e = elem(name);
    e.children.push(XMLNode::Text(text.into()));
    e
}

fn push_text(parent: &mut Element, name: &str, text: impl Into<String>) {
    parent.children.push(XMLNode::Element(text_elem(name, text)));
}

fn push_attr(e: &mut Element, name: &str, value: impl Into<String>) {
    e.attributes.insert(name.to_string(), value.into());
}

fn push_opt_attr(e: &mut Element, name: &str, value: &Option<impl ToString>) {
    if let Some(v) = value {
        push_attr(e, name, v.to_string());
    }
}

/// Iterates a `BTreeMap<Locale, T>`-shaped table in the required emit
/// order: the untranslated `"C"` value first, then every other
/// locale lexicographically (`BTreeMap` already sorts lexicographically;
/// `"C"` sorts before lowercase locale tags in ASCII order in the common
/// case, but we make the rule explicit rather than rely on that
/// coincidence).
pub(crate) fn sorted_locales<'a, T>(table: &'a std::collections::BTreeMap<String, T>) -> Vec<(&'a str, &'a T)> {
    let mut entries: Vec<(&str, &T)> = table.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_by_key(|(locale, _)| (*locale != DEFAULT_LOCALE, *locale));
    entries
}

fn push_translatable_string(parent: &mut Element, tag: &str, value: &TranslatableString, locale_filter: &str) {
    for (locale, text) in sorted_locales(&value.0) {
        if locale_filter != crate::translatable::ALL_LOCALES && locale != locale_filter && locale != DEFAULT_LOCALE {
            continue;
        }
        let mut e = text_elem(tag, text.clone());
        if locale != DEFAULT_LOCALE {
            push_attr(&mut e, "xml:lang", locale);
        }
        parent.children.push(XMLNode::Element(e));
    }
}

fn push_translatable_list(parent: &mut Element, value: &TranslatableList) {
    if value.is_empty() {
        return;
    }
    let mut keywords_el = elem("keywords");
    for (locale, items) in sorted_locales(&value.0) {
        for item in items {
            let mut e = text_elem("keyword", item.clone());
            if locale != DEFAULT_LOCALE {
                push_attr(&mut e, "xml:lang", locale);
            }
            keywords_el.children.push(XMLNode::Element(e));
        }
    }
    parent.children.push(XMLNode::Element(keywords_el));
}

fn inline_run(container: &mut Element, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => container.children.push(XMLNode::Text(text.clone())),
            Inline::Emphasis(text) => {
                container.children.push(XMLNode::Element(text_elem("em", text.clone())))
            }
            Inline::Code(text) => {
                container.children.push(XMLNode::Element(text_elem("code", text.clone())))
            }
        }
    }
}

pub(crate) fn markup_blocks(blocks: &[Block]) -> Vec<Element> {
    blocks
        .iter()
        .map(|block| match block {
            Block::Paragraph(inlines) => {
                let mut p = elem("p");
                inline_run(&mut p, inlines);
                p
            }
            Block::UnorderedList(items) => {
                let mut ul = elem("ul");
                for item in items {
                    let mut li = elem("li");
                    inline_run(&mut li, item);
                    ul.children.push(XMLNode::Element(li));
                }
                ul
            }
            Block::OrderedList(items) => {
                let mut ol = elem("ol");
                for item in items {
                    let mut li = elem("li");
                    inline_run(&mut li, item);
                    ol.children.push(XMLNode::Element(li));
                }
                ol
            }
        })
        .collect()
}

/// Emits `component.description`, honoring the metainfo/catalog nesting
/// difference: metainfo packs every locale's blocks, each
/// tagged `xml:lang`, into a single `<description>`; catalog repeats
/// `<description xml:lang=…>` once per locale.
fn push_description(parent: &mut Element, component: &Component, style: FormatStyle) {
    if component.description.is_empty() {
        return;
    }
    match style {
        FormatStyle::Metainfo => {
            let mut description_el = elem("description");
            for (locale, markup) in sorted_locales(&component.description) {
                for mut block in markup_blocks(&markup.0) {
                    if locale != DEFAULT_LOCALE {
                        push_attr(&mut block, "xml:lang", locale);
                    }
                    description_el.children.push(XMLNode::Element(block));
                }
            }
            parent.children.push(XMLNode::Element(description_el));
        }
        FormatStyle::Catalog => {
            for (locale, markup) in sorted_locales(&component.description) {
                let mut description_el = elem("description");
                if locale != DEFAULT_LOCALE {
                    push_attr(&mut description_el, "xml:lang", locale);
                }
                for block in markup_blocks(&markup.0) {
                    description_el.children.push(XMLNode::Element(block));
                }
                parent.children.push(XMLNode::Element(description_el));
            }
        }
    }
}

fn icon_to_element(icon: &Icon) -> Element {
    match icon {
        Icon::Stock(name) => {
            let mut e = text_elem("icon", name.clone());
            push_attr(&mut e, "type", "stock");
            e
        }
        Icon::Cached { path, width, height, scale } => {
            let mut e = text_elem("icon", path.to_string_lossy().into_owned());
            push_attr(&mut e, "type", "cached");
            push_opt_attr(&mut e, "width", width);
            push_opt_attr(&mut e, "height", height);
            push_opt_attr(&mut e, "scale", scale);
            e
        }
        Icon::Remote { url, width, height, scale } => {
            let mut e = text_elem("icon", url.to_string());
            push_attr(&mut e, "type", "remote");
            push_opt_attr(&mut e, "width", width);
            push_opt_attr(&mut e, "height", height);
            push_opt_attr(&mut e, "scale", scale);
            e
        }
        Icon::Local { path, width, height } => {
            let mut e = text_elem("icon", path.to_string_lossy().into_owned());
            push_attr(&mut e, "type", "local");
            push_opt_attr(&mut e, "width", width);
            push_opt_attr(&mut e, "height", height);
            e
        }
    }
}

fn image_to_element(image: &Image) -> Element {
    let mut e = text_elem("image", image.url.to_string());
    push_attr(&mut e, "type", if image.kind == ImageKind::Thumbnail { "thumbnail" } else { "source" });
    push_opt_attr(&mut e, "width", &image.width);
    push_opt_attr(&mut e, "height", &image.height);
    push_opt_attr(&mut e, "scale", &image.scale);
    if let Some(locale) = &image.locale {
        push_attr(&mut e, "xml:lang", locale.clone());
    }
    e
}

fn video_to_element(video: &Video) -> Element {
    let mut e = text_elem("video", video.url.to_string());
    if let Some(codec) = video.codec {
        push_attr(&mut e, "codec", match codec {
            crate::screenshot::VideoCodec::Vp9 => "vp9",
            crate::screenshot::VideoCodec::Av1 => "av1",
        });
    }
    if let Some(container) = video.container {
        push_attr(&mut e, "container", match container {
            crate::screenshot::VideoContainer::Mkv => "mkv",
            crate::screenshot::VideoContainer::Webm => "webm",
        });
    }
    push_opt_attr(&mut e, "width", &video.width);
    push_opt_attr(&mut e, "height", &video.height);
    if let Some(locale) = &video.locale {
        push_attr(&mut e, "xml:lang", locale.clone());
    }
    e
}

fn screenshot_to_element(screenshot: &Screenshot) -> Element {
    let mut e = elem("screenshot");
    push_attr(&mut e, "type", if screenshot.kind == ScreenshotKind::Default { "default" } else { "extra" });
    if let Some(environment) = &screenshot.environment {
        push_attr(&mut e, "environment", environment.clone());
    }
    if let Some(caption) = &screenshot.caption {
        push_translatable_string(&mut e, "caption", caption, crate::translatable::ALL_LOCALES);
    }
    for image in &screenshot.images {
        e.children.push(XMLNode::Element(image_to_element(image)));
    }
    for video in &screenshot.videos {
        e.children.push(XMLNode::Element(video_to_element(video)));
    }
    e
}

fn bundle_to_element(bundle: &Bundle) -> Element {
    match bundle {
        Bundle::Limba(id) => {
            let mut e = text_elem("bundle", id.clone());
            push_attr(&mut e, "type", "limba");
            e
        }
        Bundle::Flatpak { runtime, sdk, id } => {
            let mut e = text_elem("bundle", id.clone());
            push_attr(&mut e, "type", "flatpak");
            if let Some(runtime) = runtime {
                push_attr(&mut e, "runtime", runtime.clone());
            }
            push_attr(&mut e, "sdk", sdk.clone());
            e
        }
        Bundle::Snap(id) => {
            let mut e = text_elem("bundle", id.clone());
            push_attr(&mut e, "type", "snap");
            e
        }
        Bundle::AppImage(id) => {
            let mut e = text_elem("bundle", id.clone());
            push_attr(&mut e, "type", "appimage");
            e
        }
        Bundle::Tarball(id) => {
            let mut e = text_elem("bundle", id.clone());
            push_attr(&mut e, "type", "tarball");
            e
        }
        Bundle::Unknown(kind, id) => {
            let mut e = text_elem("bundle", id.clone());
            push_attr(&mut e, "type", kind.clone());
            e
        }
    }
}

fn launchable_to_element(launchable: &Launchable) -> Element {
    let (kind, value) = match launchable {
        Launchable::DesktopId(v) => ("desktop-id", v.clone()),
        Launchable::Service(v) => ("service", v.clone()),
        Launchable::Url(u) => ("url", u.to_string()),
        Launchable::CockpitManifest(v) => ("cockpit-manifest", v.clone()),
        Launchable::Unknown(v) => ("unknown", v.clone()),
    };
    let mut e = text_elem("launchable", value);
    push_attr(&mut e, "type", kind);
    e
}

fn project_url_to_element(url: &ProjectUrl) -> Element {
    let (kind, value) = match url {
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
    let mut e = text_elem("url", value.to_string());
    push_attr(&mut e, "type", kind);
    e
}

fn checksum_to_element(checksum: &Checksum) -> Element {
    let (kind, value) = match checksum {
        Checksum::Sha1(v) => ("sha1", v),
        Checksum::Sha256(v) => ("sha256", v),
        Checksum::Blake2b(v) => ("blake2b", v),
        Checksum::Blake2s(v) => ("blake2s", v),
    };
    let mut e = text_elem("checksum", value.clone());
    push_attr(&mut e, "type", kind);
    e
}

fn size_to_element(size: &Size) -> Element {
    let (kind, value) = match size {
        Size::Download(v) => ("download", *v),
        Size::Installed(v) => ("installed", *v),
    };
    let mut e = text_elem("size", value.to_string());
    push_attr(&mut e, "type", kind);
    e
}

fn artifact_to_element(artifact: &Artifact) -> Element {
    let mut e = elem("artifact");
    push_attr(&mut e, "type", if artifact.kind == crate::enums::ArtifactKind::Binary { "binary" } else { "source" });
    if let Some(platform) = &artifact.platform {
        push_attr(&mut e, "platform", platform.clone());
    }
    if let Some(bundle_kind) = &artifact.bundle_kind {
        push_attr(&mut e, "bundle", bundle_kind.clone());
    }
    for location in &artifact.locations {
        push_text(&mut e, "location", location.to_string());
    }
    for checksum in &artifact.checksums {
        e.children.push(XMLNode::Element(checksum_to_element(checksum)));
    }
    for size in &artifact.sizes {
        e.children.push(XMLNode::Element(size_to_element(size)));
    }
    if let Some(filename) = &artifact.filename {
        push_text(&mut e, "filename", filename.clone());
    }
    e
}

fn issue_to_element(issue: &Issue) -> Element {
    let mut e = text_elem("issue", issue.id.clone());
    push_attr(&mut e, "type", if issue.kind == IssueKind::Cve { "cve" } else { "generic" });
    if let Some(url) = &issue.url {
        push_attr(&mut e, "url", url.to_string());
    }
    e
}

fn release_to_element(release: &Release) -> Element {
    let mut e = elem("release");
    push_attr(&mut e, "version", release.version.clone());
    push_attr(&mut e, "type", match release.kind {
        ReleaseKind::Stable => "stable",
        ReleaseKind::Development => "development",
        ReleaseKind::Snapshot => "snapshot",
    });
    if release.urgency != ReleaseUrgency::Medium {
        push_attr(&mut e, "urgency", match release.urgency {
            ReleaseUrgency::Low => "low",
            ReleaseUrgency::Medium => "medium",
            ReleaseUrgency::High => "high",
            ReleaseUrgency::Critical => "critical",
        });
    }
    if let Some(timestamp) = &release.timestamp {
        push_attr(&mut e, "timestamp", timestamp_to_unix(timestamp).to_string());
    }
    if let Some(timestamp_eol) = &release.timestamp_eol {
        push_attr(&mut e, "date_eol", timestamp_to_unix(timestamp_eol).to_string());
    }
    for (locale, markup) in sorted_locales(&release.description) {
        let mut description_el = elem("description");
        if locale != DEFAULT_LOCALE {
            push_attr(&mut description_el, "xml:lang", locale);
        }
        for block in markup_blocks(&markup.0) {
            description_el.children.push(XMLNode::Element(block));
        }
        e.children.push(XMLNode::Element(description_el));
    }
    if let Some(url) = &release.url {
        let mut url_el = text_elem("url", url.to_string());
        push_attr(&mut url_el, "type", "details");
        e.children.push(XMLNode::Element(url_el));
    }
    if !release.issues.is_empty() {
        let mut issues_el = elem("issues");
        for issue in &release.issues {
            issues_el.children.push(XMLNode::Element(issue_to_element(issue)));
        }
        e.children.push(XMLNode::Element(issues_el));
    }
    if !release.artifacts.is_empty() {
        let mut artifacts_el = elem("artifacts");
        for artifact in &release.artifacts {
            artifacts_el.children.push(XMLNode::Element(artifact_to_element(artifact)));
        }
        e.children.push(XMLNode::Element(artifacts_el));
    }
    e
}

fn control_to_str(control: crate::requirements::Control) -> &'static str {
    use crate::requirements::Control;
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

fn relation_to_element(relation: &Relation) -> Element {
    let mut e = match &relation.item {
        RelationItem::Id(id) => text_elem("id", id.to_string()),
        RelationItem::Modalias(v) => text_elem("modalias", v.clone()),
        RelationItem::Kernel(v) => text_elem("kernel", v.clone()),
        RelationItem::Memory(v) => text_elem("memory", v.to_string()),
        RelationItem::Firmware(v) => text_elem("firmware", v.clone()),
        RelationItem::Control(v) => text_elem("control", control_to_str(*v)),
        RelationItem::DisplayLength { value, side } => {
            let value_str = match value {
                crate::requirements::DisplayLengthValue::Xsmall => "xsmall".to_string(),
                crate::requirements::DisplayLengthValue::Small => "small".to_string(),
                crate::requirements::DisplayLengthValue::Medium => "medium".to_string(),
                crate::requirements::DisplayLengthValue::Large => "large".to_string(),
                crate::requirements::DisplayLengthValue::Xlarge => "xlarge".to_string(),
                crate::requirements::DisplayLengthValue::Value(px) => px.to_string(),
            };
            let mut e = text_elem("display_length", value_str);
            push_attr(&mut e, "side", match side {
                crate::requirements::DisplaySide::Shortest => "shortest",
                crate::requirements::DisplaySide::Longest => "longest",
            });
            e
        }
        RelationItem::Internet(v) => text_elem("internet", v.clone()),
        RelationItem::Hardware(v) => text_elem("hardware", v.clone()),
    };
    if relation.compare != Compare::default() {
        push_attr(&mut e, "compare", compare_to_str(relation.compare));
    }
    if let Some(version) = &relation.version {
        push_attr(&mut e, "version", version.clone());
    }
    e
}

fn relation_block(tag: &str, relations: &[Relation]) -> Option<Element> {
    if relations.is_empty() {
        return None;
    }
    let mut block = elem(tag);
    for relation in relations {
        block.children.push(XMLNode::Element(relation_to_element(relation)));
    }
    Some(block)
}

fn agreement_to_element(agreement: &Agreement) -> Element {
    let mut e = elem("agreement");
    push_attr(&mut e, "type", match &agreement.kind {
        AgreementKind::Eula => "eula",
        AgreementKind::Privacy => "privacy",
        AgreementKind::Other(s) => s,
    });
    if let Some(version) = &agreement.version {
        push_attr(&mut e, "version", version.clone());
    }
    for section in &agreement.sections {
        let mut section_el = elem("agreement_section");
        push_attr(&mut section_el, "id", section.id.clone());
        if let Some(name) = &section.name {
            push_translatable_string(&mut section_el, "name", name, crate::translatable::ALL_LOCALES);
        }
        if let Some(description) = &section.description {
            push_translatable_string(&mut section_el, "description", description, crate::translatable::ALL_LOCALES);
        }
        e.children.push(XMLNode::Element(section_el));
    }
    e
}

fn branding_to_element(branding: &Branding) -> Element {
    let mut e = elem("branding");
    for color in &branding.colors {
        let mut color_el = text_elem("color", color.value.clone());
        push_attr(&mut color_el, "type", color.kind.as_str());
        push_attr(&mut color_el, "scheme_preference", match color.scheme {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        });
        e.children.push(XMLNode::Element(color_el));
    }
    e
}

fn provides_to_element(provides: &[Provide]) -> Element {
    let mut e = elem("provides");
    for provide in provides {
        let child = match provide {
            Provide::Library(v) => text_elem("library", v.to_string_lossy().into_owned()),
            Provide::Binary(v) => text_elem("binary", v.clone()),
            Provide::Font(v) => text_elem("font", v.clone()),
            Provide::Modalias(v) => text_elem("modalias", v.clone()),
            Provide::Firmware { kind, item } => {
                let mut fw = text_elem("firmware", item.clone());
                push_attr(&mut fw, "type", if *kind == FirmwareKind::Flashed { "flashed" } else { "runtime" });
                fw
            }
            Provide::Python2(v) => text_elem("python2", v.clone()),
            Provide::Python3(v) => text_elem("python3", v.clone()),
            Provide::DBus { scope, name } => {
                let mut dbus = text_elem("dbus", name.clone());
                push_attr(&mut dbus, "type", if *scope == DBusScope::User { "user" } else { "system" });
                dbus
            }
            Provide::Id(v) => text_elem("id", v.clone()),
            Provide::Codec(v) => text_elem("codec", v.clone()),
            Provide::MimeType(v) => text_elem("mediatype", v.clone()),
        };
        e.children.push(XMLNode::Element(child));
    }
    e
}

fn translation_to_element(translation: &Translation) -> Element {
    match translation {
        Translation::Gettext(id) => {
            let mut e = text_elem("translation", id.clone());
            push_attr(&mut e, "type", "gettext");
            e
        }
        Translation::Qt(id) => {
            let mut e = text_elem("translation", id.clone());
            push_attr(&mut e, "type", "qt");
            e
        }
        Translation::Unknown => elem("translation"),
    }
}

/// Builds the `<component>` element for `component`, following a fixed
/// child order.
pub(crate) fn component_to_element(component: &Component, ctx: &Context) -> Element {
    let mut e = elem("component");
    if component.kind != ComponentKind::Generic {
        push_attr(&mut e, "type", component.kind.to_string());
    }
    if component.merge != crate::enums::MergeKind::None {
        push_attr(&mut e, "merge", component.merge.as_str());
    }

    push_text(&mut e, "id", component.id.to_string());
    push_translatable_string(&mut e, "name", &component.name, crate::translatable::ALL_LOCALES);
    if let Some(summary) = &component.summary {
        push_translatable_string(&mut e, "summary", summary, crate::translatable::ALL_LOCALES);
    }
    push_description(&mut e, component, ctx.style());

    if let Some(license) = &component.project_license {
        push_text(&mut e, "project_license", license.0.clone());
    }
    if let Some(license) = &component.metadata_license {
        push_text(&mut e, "metadata_license", license.0.clone());
    }
    if let Some(group) = &component.project_group {
        push_text(&mut e, "project_group", group.clone());
    }
    if !component.developer.is_empty() {
        if let Some(name) = component.developer.name.default_value() {
            push_text(&mut e, "developer_name", name.to_string());
        }
    }
    for url in &component.urls {
        e.children.push(XMLNode::Element(project_url_to_element(url)));
    }
    for icon in &component.icons {
        e.children.push(XMLNode::Element(icon_to_element(icon)));
    }
    if !component.screenshots.is_empty() {
        let mut screenshots_el = elem("screenshots");
        for screenshot in &component.screenshots {
            screenshots_el.children.push(XMLNode::Element(screenshot_to_element(screenshot)));
        }
        e.children.push(XMLNode::Element(screenshots_el));
    }
    if !component.provides.is_empty() {
        e.children.push(XMLNode::Element(provides_to_element(&component.provides)));
    }
    for bundle in &component.bundles {
        e.children.push(XMLNode::Element(bundle_to_element(bundle)));
    }
    for launchable in &component.launchables {
        e.children.push(XMLNode::Element(launchable_to_element(launchable)));
    }
    if component.releases.kind() != crate::enums::ReleaseListKind::Embedded || !component.releases.entries.is_empty() {
        let mut releases_el = elem("releases");
        if let Some(url) = &component.releases.external_url {
            push_attr(&mut releases_el, "url", url.to_string());
        }
        for release in &component.releases.entries {
            releases_el.children.push(XMLNode::Element(release_to_element(release)));
        }
        e.children.push(XMLNode::Element(releases_el));
    }
    if let Some(requires) = relation_block("requires", &component.requires) {
        e.children.push(XMLNode::Element(requires));
    }
    if let Some(recommends) = relation_block("recommends", &component.recommends) {
        e.children.push(XMLNode::Element(recommends));
    }
    if let Some(supports) = relation_block("supports", &component.supports) {
        e.children.push(XMLNode::Element(supports));
    }
    for rating in &component.content_ratings {
        let mut rating_el = elem("content_rating");
        push_attr(&mut rating_el, "type", rating.kind.clone());
        for (id, state) in &rating.values {
            let mut attr_el = text_elem("content_attribute", format!("{state:?}").to_lowercase());
            push_attr(&mut attr_el, "id", id.clone());
            rating_el.children.push(XMLNode::Element(attr_el));
        }
        e.children.push(XMLNode::Element(rating_el));
    }
    if !component.branding.is_default() {
        e.children.push(XMLNode::Element(branding_to_element(&component.branding)));
    }
    if !component.metadata.is_empty() {
        let mut custom_el = elem("custom");
        for (key, value) in &component.metadata {
            let mut value_el = elem("value");
            push_attr(&mut value_el, "key", key.clone());
            if let Some(value) = value {
                value_el.children.push(XMLNode::Text(value.clone()));
            }
            custom_el.children.push(XMLNode::Element(value_el));
        }
        e.children.push(XMLNode::Element(custom_el));
    }
    if !component.languages.is_empty() {
        let mut languages_el = elem("languages");
        for language in &component.languages {
            let mut lang_el = text_elem("lang", language.locale.clone());
            if let Some(percentage) = language.percentage {
                push_attr(&mut lang_el, "percentage", percentage.to_string());
            }
            languages_el.children.push(XMLNode::Element(lang_el));
        }
        e.children.push(XMLNode::Element(languages_el));
    }
    for translation in &component.translations {
        e.children.push(XMLNode::Element(translation_to_element(translation)));
    }
    for agreement in &component.agreements {
        e.children.push(XMLNode::Element(agreement_to_element(agreement)));
    }
    if let Some(keywords) = &component.keywords {
        push_translatable_list(&mut e, keywords);
    }
    if !component.categories.is_empty() {
        let mut categories_el = elem("categories");
        for category in &component.categories {
            push_text(&mut categories_el, "category", category.0.clone());
        }
        e.children.push(XMLNode::Element(categories_el));
    }
    for desktop in &component.compulsory_for_desktop {
        push_text(&mut e, "compulsory_for_desktop", desktop.clone());
    }
    if !component.extends.is_empty() {
        let mut extends_el = elem("extends");
        for id in &component.extends {
            push_text(&mut extends_el, "id", id.to_string());
        }
        e.children.push(XMLNode::Element(extends_el));
    }
    if !component.replaces.is_empty() {
        let mut replaces_el = elem("replaces");
        for id in &component.replaces {
            push_text(&mut replaces_el, "id", id.to_string());
        }
        e.children.push(XMLNode::Element(replaces_el));
    }
    if !component.suggests.is_empty() {
        let mut suggests_el = elem("suggests");
        push_attr(&mut suggests_el, "type", "upstream");
        for id in &component.suggests {
            push_text(&mut suggests_el, "id", id.to_string());
        }
        e.children.push(XMLNode::Element(suggests_el));
    }
    if !component.tags.is_empty() {
        let mut tags_el = elem("tags");
        for tag in &component.tags {
            push_text(&mut tags_el, "tag", tag.clone());
        }
        e.children.push(XMLNode::Element(tags_el));
    }
    for pkgname in &component.pkgnames {
        push_text(&mut e, "pkgname", pkgname.clone());
    }
    if let Some(source_pkgname) = &component.source_pkgname {
        push_text(&mut e, "source_pkgname", source_pkgname.clone());
    }
    if let Some(contact) = &component.update_contact {
        push_text(&mut e, "update_contact", contact.clone());
    }
    if let Some(date_eol) = &component.date_eol {
        push_text(&mut e, "date_eol", timestamp_to_unix(date_eol).to_string());
    }

    e
}

fn write_element(element: &Element) -> String {
    let mut bytes = Vec::new();
    let _ = element.write_with_config(
        &mut bytes,
        EmitterConfig::new().write_document_declaration(true).perform_indent(true),
    );
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Serializes a single `Component` as a standalone metainfo document.
pub(crate) fn emit_component(component: &Component, ctx: &Context) -> String {
    write_element(&component_to_element(component, ctx))
}

/// Serializes `components` as a catalog `<components>` document, applying
/// `ctx`'s declared version/origin/media_baseurl/architecture/priority as
/// root attributes.
pub(crate) fn emit_document(components: &[Component], ctx: &Context) -> String {
    let mut root = elem("components");
    push_attr(&mut root, "version", ctx.version().as_str());
    if let Some(origin) = ctx.origin_str() {
        push_attr(&mut root, "origin", origin);
    }
    if let Some(baseurl) = ctx.media_baseurl_str() {
        push_attr(&mut root, "media_baseurl", baseurl);
    }
    if let Some(arch) = ctx.arch() {
        push_attr(&mut root, "architecture", arch);
    }
    if ctx.priority_value() != 0 {
        push_attr(&mut root, "priority", ctx.priority_value().to_string());
    }
    for component in components {
        root.children.push(XMLNode::Element(component_to_element(component, ctx)));
    }
    write_element(&root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ComponentBuilder;
    use crate::id::AppId;

    #[test]
    fn emits_id_and_name() {
        let component = ComponentBuilder::default()
            .id(AppId::from("com.example.foobar"))
            .name(TranslatableString::with_default("Foo Bar"))
            .build();
        let xml = emit_component(&component, &Context::default());
        assert!(xml.contains("<id>com.example.foobar</id>"));
        assert!(xml.contains("<name>Foo Bar</name>"));
    }

    #[test]
    fn catalog_root_carries_origin_and_version() {
        let component = ComponentBuilder::default()
            .id(AppId::from("org.x"))
            .name(TranslatableString::with_default("X"))
            .build();
        let ctx = Context::default().origin("flathub");
        let xml = emit_document(&[component], &ctx);
        assert!(xml.contains(r#"origin="flathub""#));
        assert!(xml.contains("<components"));
    }
}
