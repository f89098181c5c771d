//! Per-load configuration: locale, target format and media base URL.

/// Which AppStream document dialect a load or emit call should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormatStyle {
    /// A single-component `<component>` metainfo document, as shipped next
    /// to an application (`/usr/share/metainfo/*.appdata.xml`).
    #[default]
    Metainfo,
    /// A `<components>` catalog document bundling many components, as
    /// produced by a distribution's metadata generator.
    Catalog,
}

/// The AppStream specification version a document declares conformance to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
#[allow(non_camel_case_types)]
pub enum FormatVersion {
    V0_8,
    V0_10,
    V0_12,
    V0_14,
    #[default]
    V1_0,
}

impl FormatVersion {
    /// Parses the `version` attribute found on catalog/collection roots.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "0.6" | "0.7" | "0.8" => Some(Self::V0_8),
            "0.9" | "0.10" => Some(Self::V0_10),
            "0.11" | "0.12" => Some(Self::V0_12),
            "0.13" | "0.14" => Some(Self::V0_14),
            "0.15" | "0.16" | "1.0" => Some(Self::V1_0),
            _ => None,
        }
    }

    /// Renders back to the attribute string used on emit.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V0_8 => "0.8",
            Self::V0_10 => "0.10",
            Self::V0_12 => "0.12",
            Self::V0_14 => "0.14",
            Self::V1_0 => "1.0",
        }
    }
}

/// Immutable bundle of settings that influence how a document is parsed or
/// emitted: the locale to prefer, the dialect, the declared format version,
/// an `origin`/`priority` pair inherited from the catalog header, the host
/// architecture for `Pool` arch-preference tiebreaks, and a base URL that
/// relative icon/screenshot URLs are resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    locale: String,
    format_style: FormatStyle,
    format_version: FormatVersion,
    origin: Option<String>,
    architecture: Option<String>,
    media_baseurl: Option<String>,
    priority: i32,
    filename: Option<String>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            locale: detect_locale(),
            format_style: FormatStyle::default(),
            format_version: FormatVersion::default(),
            origin: None,
            architecture: None,
            media_baseurl: None,
            priority: 0,
            filename: None,
        }
    }
}

impl Context {
    /// Starts building a `Context` for the given locale.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// Sets the dialect a load/emit call should target.
    #[must_use]
    pub fn format_style(mut self, style: FormatStyle) -> Self {
        self.format_style = style;
        self
    }

    /// Sets the declared format version.
    #[must_use]
    pub fn format_version(mut self, version: FormatVersion) -> Self {
        self.format_version = version;
        self
    }

    /// Sets the catalog `origin` this document came from.
    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Sets the architecture this document's components target.
    #[must_use]
    pub fn architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    /// Sets the base URL relative media references are resolved against.
    #[must_use]
    pub fn media_baseurl(mut self, url: impl Into<String>) -> Self {
        self.media_baseurl = Some(url.into());
        self
    }

    /// Sets the load priority this document's components are inserted with.
    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Records the path this document was loaded from, used to resolve
    /// sibling files such as `releases/<id>.releases.xml`.
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// The preferred locale for this load/emit call.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The dialect this call targets.
    pub fn style(&self) -> FormatStyle {
        self.format_style
    }

    /// The declared format version.
    pub fn version(&self) -> FormatVersion {
        self.format_version
    }

    /// The catalog origin, if any.
    pub fn origin_str(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// The target architecture, if any.
    pub fn arch(&self) -> Option<&str> {
        self.architecture.as_deref()
    }

    /// The media base URL, if any.
    pub fn media_baseurl_str(&self) -> Option<&str> {
        self.media_baseurl.as_deref()
    }

    /// The load priority.
    pub fn priority_value(&self) -> i32 {
        self.priority
    }

    /// The source path, if known.
    pub fn filename_str(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Resolves a possibly-relative media URL against `media_baseurl`.
    ///
    /// Absolute URLs (anything `url::Url::parse` accepts on its own) are
    /// returned unchanged; otherwise the value is joined onto the base URL
    /// when one is configured.
    pub fn resolve_url(&self, raw: &str) -> String {
        if url::Url::parse(raw).is_ok() {
            return raw.to_string();
        }
        match &self.media_baseurl {
            // Plain concatenation, not `Url::join`: `join` follows RFC-3986
            // relative-reference rules and drops the base's last path
            // segment when it has no trailing slash
            // (`https://cdn.example/m`.join("img/1.png") ==
            // `https://cdn.example/img/1.png`), which is not what a media
            // base URL means here.
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), raw),
            None => raw.to_string(),
        }
    }
}

/// Guesses a default locale from the environment. This is the only place in
/// the crate that reads an environment variable; it's a best-effort default,
/// not configuration loading.
fn detect_locale() -> String {
    std::env::var("LANG")
        .ok()
        .and_then(|v| v.split('.').next().map(str::to_string))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "C".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_media_url() {
        let ctx = Context::new("C").media_baseurl("https://example.com/media/");
        assert_eq!(
            ctx.resolve_url("icons/foo.png"),
            "https://example.com/media/icons/foo.png"
        );
    }

    #[test]
    fn resolves_relative_media_url_against_base_with_no_trailing_slash() {
        let ctx = Context::new("C").media_baseurl("https://cdn.example/m");
        assert_eq!(
            ctx.resolve_url("img/1.png"),
            "https://cdn.example/m/img/1.png"
        );
    }

    #[test]
    fn leaves_absolute_media_url_untouched() {
        let ctx = Context::new("C").media_baseurl("https://example.com/media/");
        assert_eq!(
            ctx.resolve_url("https://cdn.example.org/foo.png"),
            "https://cdn.example.org/foo.png"
        );
    }

    #[test]
    fn format_version_roundtrips() {
        for v in ["0.8", "0.10", "0.12", "0.14", "1.0"] {
            assert_eq!(FormatVersion::parse(v).unwrap().as_str(), v);
        }
    }
}
