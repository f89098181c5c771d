//! Chainable builders for the data model's composite types:
//! `#[must_use]` setters returning `Self`, a final `.build()` producing
//! the value.

use std::collections::{BTreeMap, BTreeSet};

use url::Url;

use crate::agreement::{Agreement, Review};
use crate::branding::Branding;
use crate::category::Category;
use crate::collection::Collection;
use crate::component::Component;
use crate::content_rating::ContentRating;
use crate::developer::Developer;
use crate::enums::{
    ArtifactKind, Bundle, Checksum, ComponentKind, Icon, Kudo, Launchable, MergeKind, ProjectUrl,
    Provide, Size, Translation,
};
use crate::id::AppId;
use crate::language::Language;
use crate::license::License;
use crate::markup::{Description, Markup};
use crate::release::{Artifact, Issue, Release, ReleaseList};
use crate::requirements::Relation;
use crate::screenshot::{Image, Screenshot, Video};
use crate::translatable::{TranslatableList, TranslatableString};
use crate::DateTime;

/// Builds an `Artifact`.
#[derive(Default, Debug)]
pub struct ArtifactBuilder {
    platform: Option<String>,
    bundle_kind: Option<String>,
    kind: Option<ArtifactKind>,
    sizes: Vec<Size>,
    locations: Vec<Url>,
    checksums: Vec<Checksum>,
    filename: Option<String>,
}

impl ArtifactBuilder {
    /// Starts building an artifact of the given kind.
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Sets the artifact kind.
    #[must_use]
    pub fn kind(mut self, kind: ArtifactKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the target platform triplet.
    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Sets the bundle format this artifact is packaged in.
    #[must_use]
    pub fn bundle_kind(mut self, bundle_kind: impl Into<String>) -> Self {
        self.bundle_kind = Some(bundle_kind.into());
        self
    }

    /// Adds a download location.
    #[must_use]
    pub fn url(mut self, url: Url) -> Self {
        self.locations.push(url);
        self
    }

    /// Adds a checksum.
    #[must_use]
    pub fn checksum(mut self, checksum: Checksum) -> Self {
        self.checksums.push(checksum);
        self
    }

    /// Adds a declared size.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.sizes.push(size);
        self
    }

    /// Sets the filename to save the artifact as.
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Builds the `Artifact`.
    pub fn build(self) -> Artifact {
        Artifact {
            kind: self.kind.expect("an artifact requires a kind"),
            platform: self.platform,
            bundle_kind: self.bundle_kind,
            locations: self.locations,
            checksums: self.checksums,
            sizes: self.sizes,
            filename: self.filename,
        }
    }
}

/// Builds an `Issue`.
#[derive(Default, Debug)]
pub struct IssueBuilder {
    kind: crate::release::IssueKind,
    id: String,
    url: Option<Url>,
}

impl IssueBuilder {
    /// Starts building an issue with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the issue kind.
    #[must_use]
    pub fn kind(mut self, kind: crate::release::IssueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the issue url.
    #[must_use]
    pub fn url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// Builds the `Issue`.
    pub fn build(self) -> Issue {
        Issue {
            kind: self.kind,
            id: self.id,
            url: self.url,
        }
    }
}

/// Builds a `Release`.
#[derive(Default, Debug)]
pub struct ReleaseBuilder {
    version: String,
    kind: crate::enums::ReleaseKind,
    timestamp: Option<DateTime>,
    timestamp_eol: Option<DateTime>,
    urgency: crate::enums::ReleaseUrgency,
    description: Description,
    url: Option<Url>,
    issues: Vec<Issue>,
    artifacts: Vec<Artifact>,
}

impl ReleaseBuilder {
    /// Starts building a release with the given version string.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    /// Sets whether this is a stable release, development snapshot, etc.
    #[must_use]
    pub fn kind(mut self, kind: crate::enums::ReleaseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the release timestamp.
    #[must_use]
    pub fn date(mut self, date: DateTime) -> Self {
        self.timestamp = Some(date);
        self
    }

    /// Sets the release's end-of-life timestamp.
    #[must_use]
    pub fn date_eol(mut self, date: DateTime) -> Self {
        self.timestamp_eol = Some(date);
        self
    }

    /// Sets the update urgency.
    #[must_use]
    pub fn urgency(mut self, urgency: crate::enums::ReleaseUrgency) -> Self {
        self.urgency = urgency;
        self
    }

    /// Sets the untranslated release notes.
    #[must_use]
    pub fn description(mut self, markup: Markup) -> Self {
        self.description.insert(crate::translatable::DEFAULT_LOCALE.to_string(), markup);
        self
    }

    /// Sets the release notes for a specific locale.
    #[must_use]
    pub fn description_for_locale(mut self, locale: &str, markup: Markup) -> Self {
        self.description.insert(locale.to_string(), markup);
        self
    }

    /// Sets a link to more information about this release.
    #[must_use]
    pub fn url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// Adds a fixed issue.
    #[must_use]
    pub fn issue(mut self, issue: Issue) -> Self {
        self.issues.push(issue);
        self
    }

    /// Adds a downloadable artifact.
    #[must_use]
    pub fn artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    /// Builds the `Release`.
    pub fn build(self) -> Release {
        Release {
            version: self.version,
            kind: self.kind,
            timestamp: self.timestamp,
            timestamp_eol: self.timestamp_eol,
            urgency: self.urgency,
            description: self.description,
            url: self.url,
            issues: self.issues,
            artifacts: self.artifacts,
        }
    }
}

/// Builds an `Image`.
#[derive(Debug)]
pub struct ImageBuilder {
    kind: crate::enums::ImageKind,
    url: Url,
    width: Option<u32>,
    height: Option<u32>,
    scale: Option<u32>,
    locale: Option<String>,
}

impl ImageBuilder {
    /// Starts building a source image at `url`.
    pub fn new(url: Url) -> Self {
        Self {
            kind: crate::enums::ImageKind::Source,
            url,
            width: None,
            height: None,
            scale: None,
            locale: None,
        }
    }

    /// Sets whether this is the source image or a thumbnail.
    #[must_use]
    pub fn kind(mut self, kind: crate::enums::ImageKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the image width.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the image height.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the HiDPI scale factor.
    #[must_use]
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets the locale this image's UI text is in.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Builds the `Image`.
    pub fn build(self) -> Image {
        Image {
            kind: self.kind,
            url: self.url,
            width: self.width,
            height: self.height,
            scale: self.scale,
            locale: self.locale,
        }
    }
}

/// Builds a `Video`.
#[derive(Debug)]
pub struct VideoBuilder {
    url: Url,
    width: Option<u32>,
    height: Option<u32>,
    codec: Option<crate::screenshot::VideoCodec>,
    container: Option<crate::screenshot::VideoContainer>,
    locale: Option<String>,
}

impl VideoBuilder {
    /// Starts building a video at `url`.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            width: None,
            height: None,
            codec: None,
            container: None,
            locale: None,
        }
    }

    /// Sets the video width.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the video height.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the video codec.
    #[must_use]
    pub fn codec(mut self, codec: crate::screenshot::VideoCodec) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Sets the container format.
    #[must_use]
    pub fn container(mut self, container: crate::screenshot::VideoContainer) -> Self {
        self.container = Some(container);
        self
    }

    /// Builds the `Video`.
    pub fn build(self) -> Video {
        Video {
            url: self.url,
            width: self.width,
            height: self.height,
            codec: self.codec,
            container: self.container,
            locale: self.locale,
        }
    }
}

/// Builds a `Screenshot`.
#[derive(Default, Debug)]
pub struct ScreenshotBuilder {
    is_default: bool,
    caption: Option<TranslatableString>,
    environment: Option<String>,
    images: Vec<Image>,
    videos: Vec<Video>,
}

impl ScreenshotBuilder {
    /// Starts building an extra (non-default) screenshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether this screenshot should lead the gallery.
    #[must_use]
    pub fn set_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Sets the untranslated caption.
    #[must_use]
    pub fn caption(mut self, caption: TranslatableString) -> Self {
        self.caption = Some(caption);
        self
    }

    /// Sets the environment the screenshot was captured in.
    #[must_use]
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Adds a source image or thumbnail.
    #[must_use]
    pub fn image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    /// Sets all images at once.
    #[must_use]
    pub fn images(mut self, images: Vec<Image>) -> Self {
        self.images = images;
        self
    }

    /// Adds a screencast video.
    #[must_use]
    pub fn video(mut self, video: Video) -> Self {
        self.videos.push(video);
        self
    }

    /// Builds the `Screenshot`.
    pub fn build(self) -> Screenshot {
        Screenshot {
            kind: if self.is_default {
                crate::screenshot::ScreenshotKind::Default
            } else {
                crate::screenshot::ScreenshotKind::Extra
            },
            caption: self.caption,
            environment: self.environment,
            images: self.images,
            videos: self.videos,
        }
    }
}

/// Builds a `Language`.
#[derive(Debug)]
pub struct LanguageBuilder {
    locale: String,
    percentage: Option<u32>,
}

impl LanguageBuilder {
    /// Starts building a language entry for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            percentage: None,
        }
    }

    /// Sets the translation completion percentage.
    #[must_use]
    pub fn percentage(mut self, percentage: u32) -> Self {
        self.percentage = Some(percentage);
        self
    }

    /// Builds the `Language`.
    pub fn build(self) -> Language {
        Language {
            locale: self.locale,
            percentage: self.percentage,
        }
    }
}

/// Builds a `Component`.
#[derive(Default, Debug)]
pub struct ComponentBuilder {
    kind: ComponentKind,
    id: Option<AppId>,
    name: Option<TranslatableString>,
    summary: Option<TranslatableString>,
    description: Description,
    project_license: Option<License>,
    metadata_license: Option<License>,
    project_group: Option<String>,
    developer: Developer,
    compulsory_for_desktop: BTreeSet<String>,
    extends: Vec<AppId>,
    suggests: Vec<AppId>,
    replaces: Vec<AppId>,
    tags: Vec<String>,
    requires: Vec<Relation>,
    recommends: Vec<Relation>,
    supports: Vec<Relation>,
    icons: Vec<Icon>,
    screenshots: Vec<Screenshot>,
    urls: Vec<ProjectUrl>,
    branding: Branding,
    update_contact: Option<String>,
    categories: Vec<Category>,
    launchables: Vec<Launchable>,
    pkgnames: Vec<String>,
    source_pkgname: Option<String>,
    bundles: Vec<Bundle>,
    releases: Vec<Release>,
    external_releases_url: Option<Url>,
    languages: Vec<Language>,
    mimetypes: Vec<String>,
    kudos: Vec<Kudo>,
    keywords: Option<TranslatableList>,
    content_ratings: Vec<ContentRating>,
    agreements: Vec<Agreement>,
    reviews: Vec<Review>,
    provides: Vec<Provide>,
    translations: Vec<Translation>,
    scope: Option<String>,
    bundle_kind: Option<String>,
    origin: Option<String>,
    branch: Option<String>,
    architecture: Option<String>,
    priority: i32,
    date_eol: Option<DateTime>,
    metadata: BTreeMap<String, Option<String>>,
    merge: MergeKind,
}

macro_rules! vec_setter {
    ($single:ident, $plural:ident, $field:ident, $ty:ty) => {
        /// Adds a single entry.
        #[must_use]
        pub fn $single(mut self, value: $ty) -> Self {
            self.$field.push(value);
            self
        }

        /// Sets every entry at once.
        #[must_use]
        pub fn $plural(mut self, values: Vec<$ty>) -> Self {
            self.$field = values;
            self
        }
    };
}

impl ComponentBuilder {
    /// Sets the component id.
    #[must_use]
    pub fn id(mut self, id: AppId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the component kind.
    #[must_use]
    pub fn kind(mut self, kind: ComponentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: TranslatableString) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the summary.
    #[must_use]
    pub fn summary(mut self, summary: TranslatableString) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Sets the untranslated description.
    #[must_use]
    pub fn description(mut self, markup: Markup) -> Self {
        self.description.insert(crate::translatable::DEFAULT_LOCALE.to_string(), markup);
        self
    }

    /// Sets the project's own license.
    #[must_use]
    pub fn project_license(mut self, license: impl Into<String>) -> Self {
        self.project_license = Some(License::from(license.into()));
        self
    }

    /// Sets the metadata document's license.
    #[must_use]
    pub fn metadata_license(mut self, license: impl Into<String>) -> Self {
        self.metadata_license = Some(License::from(license.into()));
        self
    }

    /// Sets the upstream project umbrella.
    #[must_use]
    pub fn project_group(mut self, group: impl Into<String>) -> Self {
        self.project_group = Some(group.into());
        self
    }

    /// Sets the developer's display name (untranslated).
    #[must_use]
    pub fn developer_name(mut self, name: TranslatableString) -> Self {
        self.developer.name = name;
        self
    }

    /// Sets the full `Developer`.
    #[must_use]
    pub fn developer(mut self, developer: Developer) -> Self {
        self.developer = developer;
        self
    }

    /// Marks a desktop environment this component is essential for.
    #[must_use]
    pub fn compulsory_for_desktop(mut self, desktop: impl Into<String>) -> Self {
        self.compulsory_for_desktop.insert(desktop.into());
        self
    }

    /// Adds an extended component id.
    #[must_use]
    pub fn extend(mut self, id: AppId) -> Self {
        self.extends.push(id);
        self
    }

    vec_setter!(suggest, suggestions, suggests, AppId);
    vec_setter!(replace, replaces_all, replaces, AppId);
    vec_setter!(tag, tags_all, tags, String);
    vec_setter!(requires, requires_all, requires, Relation);
    vec_setter!(recommends, recommends_all, recommends, Relation);
    vec_setter!(supports, supports_all, supports, Relation);
    vec_setter!(icon, icons_all, icons, Icon);
    vec_setter!(screenshot, screenshots_all, screenshots, Screenshot);
    vec_setter!(url, urls_all, urls, ProjectUrl);
    vec_setter!(category, categories_all, categories, Category);
    vec_setter!(launchable, launchables_all, launchables, Launchable);
    vec_setter!(pkgname, pkgnames_all, pkgnames, String);
    vec_setter!(bundle, bundles_all, bundles, Bundle);
    vec_setter!(release, releases_all, releases, Release);
    vec_setter!(language, languages_all, languages, Language);
    vec_setter!(mimetype, mimetypes_all, mimetypes, String);
    vec_setter!(kudo, kudos_all, kudos, Kudo);
    vec_setter!(content_rating, content_ratings_all, content_ratings, ContentRating);
    vec_setter!(agreement, agreements_all, agreements, Agreement);
    vec_setter!(review, reviews_all, reviews, Review);
    vec_setter!(provide, provides_all, provides, Provide);
    vec_setter!(translation, translations_all, translations, Translation);

    /// Sets the branding colors.
    #[must_use]
    pub fn branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    /// Sets the distributor contact address.
    #[must_use]
    pub fn update_contact(mut self, contact: impl Into<String>) -> Self {
        self.update_contact = Some(contact.into());
        self
    }

    /// Sets the source package name.
    #[must_use]
    pub fn source_pkgname(mut self, name: impl Into<String>) -> Self {
        self.source_pkgname = Some(name.into());
        self
    }

    /// Points the release list at an external document instead of
    /// embedding entries directly.
    #[must_use]
    pub fn external_releases_url(mut self, url: Url) -> Self {
        self.external_releases_url = Some(url);
        self
    }

    /// Sets the keywords.
    #[must_use]
    pub fn keywords(mut self, keywords: TranslatableList) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Sets the repository scope (`system`/`user`).
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the bundle system kind (part of the pool's primary key).
    #[must_use]
    pub fn bundle_kind(mut self, kind: impl Into<String>) -> Self {
        self.bundle_kind = Some(kind.into());
        self
    }

    /// Sets the catalog origin.
    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Sets the publishing branch.
    #[must_use]
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Sets the target architecture.
    #[must_use]
    pub fn architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    /// Sets the source priority, used by the pool's merge tiebreak.
    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the component's own end-of-life timestamp.
    #[must_use]
    pub fn date_eol(mut self, date: DateTime) -> Self {
        self.date_eol = Some(date);
        self
    }

    /// Adds a custom metadata entry.
    #[must_use]
    pub fn metadata(mut self, key: String, value: Option<String>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Sets the `merge` directive consumed by the pool's insert algorithm.
    #[must_use]
    pub fn merge(mut self, merge: MergeKind) -> Self {
        self.merge = merge;
        self
    }

    /// Builds the `Component`. Panics if `id` or `name` were never set: a
    /// `Component` without those two fields cannot be constructed.
    pub fn build(self) -> Component {
        Component {
            kind: self.kind,
            id: self.id.expect("a component requires an id"),
            name: self.name.expect("a component requires a name"),
            summary: self.summary,
            description: self.description,
            project_license: self.project_license,
            metadata_license: self.metadata_license,
            project_group: self.project_group,
            developer: self.developer,
            compulsory_for_desktop: self.compulsory_for_desktop,
            extends: self.extends,
            suggests: self.suggests,
            replaces: self.replaces,
            tags: self.tags,
            requires: self.requires,
            recommends: self.recommends,
            supports: self.supports,
            icons: self.icons,
            screenshots: self.screenshots,
            urls: self.urls,
            branding: self.branding,
            update_contact: self.update_contact,
            categories: self.categories,
            launchables: self.launchables,
            pkgnames: self.pkgnames,
            source_pkgname: self.source_pkgname,
            bundles: self.bundles,
            releases: ReleaseList {
                entries: self.releases,
                external_url: self.external_releases_url,
                errored: false,
            },
            languages: self.languages,
            mimetypes: self.mimetypes,
            kudos: self.kudos,
            keywords: self.keywords,
            content_ratings: self.content_ratings,
            agreements: self.agreements,
            reviews: self.reviews,
            provides: self.provides,
            translations: self.translations,
            scope: self.scope,
            bundle_kind: self.bundle_kind,
            origin: self.origin,
            branch: self.branch,
            architecture: self.architecture,
            priority: self.priority,
            date_eol: self.date_eol,
            metadata: self.metadata,
            merge: self.merge,
        }
    }
}

/// Builds a `Collection`.
#[derive(Default, Debug)]
pub struct CollectionBuilder {
    version: String,
    origin: Option<String>,
    components: Vec<Component>,
}

impl CollectionBuilder {
    /// Starts building a collection targeting the given catalog format
    /// version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    /// Sets the catalog's origin.
    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Adds a component to the collection.
    #[must_use]
    pub fn component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Builds the `Collection`.
    pub fn build(self) -> Collection {
        Collection {
            version: self.version,
            origin: self.origin,
            components: self.components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_builder_requires_id_and_name() {
        let component = ComponentBuilder::default()
            .id(AppId::from("com.example.foobar"))
            .name(TranslatableString::with_default("Foo Bar"))
            .summary(TranslatableString::with_default("A foo-ish bar"))
            .build();
        assert_eq!(component.id, AppId::from("com.example.foobar"));
        assert!(component.is_valid());
    }

    #[test]
    fn release_builder_builds_minimal_release() {
        let release = ReleaseBuilder::new("1.2").build();
        assert_eq!(release.version, "1.2");
        assert!(release.artifacts.is_empty());
    }
}
