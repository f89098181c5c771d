//! `Screenshot`, `Image` and `Video`: visual previews of a component.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::enums::ImageKind;
use crate::translatable::TranslatableString;

/// Whether a screenshot is the one to lead with, or supplementary.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScreenshotKind {
    Default,
    Extra,
}

impl Default for ScreenshotKind {
    fn default() -> Self {
        ScreenshotKind::Extra
    }
}

/// A single screenshot, with its untranslated caption, a declared source
/// image plus any thumbnails, and optionally a video in lieu of, or
/// alongside, the images.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Screenshot {
    /// Whether this is the lead screenshot.
    pub kind: ScreenshotKind,
    /// The locale-tagged caption.
    pub caption: Option<TranslatableString>,
    /// The environment (desktop, GNOME Shell theme, …) the screenshot was
    /// taken in, if declared.
    pub environment: Option<String>,
    /// The source image plus any thumbnails, in document order.
    pub images: Vec<Image>,
    /// Screencast videos, in document order.
    pub videos: Vec<Video>,
}

impl Screenshot {
    /// Builds an empty `Extra` screenshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this screenshot should lead the gallery.
    pub fn is_default(&self) -> bool {
        self.kind == ScreenshotKind::Default
    }
}

/// A single screenshot image.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// Whether this is the full-size source image or a generated
    /// thumbnail.
    pub kind: ImageKind,
    /// Where to fetch the image.
    pub url: Url,
    /// The image's width in pixels, if declared.
    pub width: Option<u32>,
    /// The image's height in pixels, if declared.
    pub height: Option<u32>,
    /// The HiDPI scale factor this image was rendered at, if declared.
    pub scale: Option<u32>,
    /// The locale this image was captured in, if it contains
    /// locale-specific UI text.
    pub locale: Option<String>,
}

impl Image {
    /// Builds a source image at `url` with no size metadata.
    pub fn source(url: Url) -> Self {
        Self {
            kind: ImageKind::Source,
            url,
            width: None,
            height: None,
            scale: None,
            locale: None,
        }
    }
}

/// The video codec of a `Video` screencast.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VideoCodec {
    Vp9,
    Av1,
}

/// The container format of a `Video` screencast.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VideoContainer {
    Mkv,
    Webm,
}

/// A screencast accompanying (or in place of) a screenshot's images.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Video {
    /// Where to fetch the video.
    pub url: Url,
    /// The video's width in pixels, if declared.
    pub width: Option<u32>,
    /// The video's height in pixels, if declared.
    pub height: Option<u32>,
    /// The video codec, when recognized.
    pub codec: Option<VideoCodec>,
    /// The container format, when recognized.
    pub container: Option<VideoContainer>,
    /// The locale this video's on-screen text is in, if any.
    pub locale: Option<String>,
}

impl Video {
    /// Builds a video with no size or codec metadata.
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screenshot_kind_is_extra() {
        assert_eq!(Screenshot::new().kind, ScreenshotKind::Extra);
        assert!(!Screenshot::new().is_default());
    }

    #[test]
    fn source_image_has_no_size_by_default() {
        let image = Image::source(Url::parse("https://example.org/a.png").unwrap());
        assert_eq!(image.kind, ImageKind::Source);
        assert!(image.width.is_none());
    }
}
