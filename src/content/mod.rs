//! What a window displays, independent of where it sits.

mod render;

use std::fmt;

pub use render::{LinkTarget, RenderedContent, UNSUPPORTED_MESSAGE, render_content};

/// Tag of a [`ContentDescriptor`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Text,
    Image,
    Gif,
    Video,
    Link,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Text,
        ContentKind::Image,
        ContentKind::Gif,
        ContentKind::Video,
        ContentKind::Link,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
            ContentKind::Gif => "gif",
            ContentKind::Video => "video",
            ContentKind::Link => "link",
        }
    }

    /// Parse a wire tag. Matching is exact, as the tags are lowercase.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of renderable contents. Each variant carries exactly the
/// fields its presentation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentDescriptor {
    Text {
        title: String,
        content: String,
    },
    Image {
        title: String,
        src: String,
        alt: String,
    },
    Gif {
        title: String,
        src: String,
    },
    Video {
        title: String,
        src: String,
        poster: Option<String>,
    },
    Link {
        title: String,
        path: String,
        description: String,
    },
}

impl ContentDescriptor {
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Text {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn image(
        title: impl Into<String>,
        src: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self::Image {
            title: title.into(),
            src: src.into(),
            alt: alt.into(),
        }
    }

    pub fn gif(title: impl Into<String>, src: impl Into<String>) -> Self {
        Self::Gif {
            title: title.into(),
            src: src.into(),
        }
    }

    pub fn video(
        title: impl Into<String>,
        src: impl Into<String>,
        poster: Option<String>,
    ) -> Self {
        Self::Video {
            title: title.into(),
            src: src.into(),
            poster,
        }
    }

    pub fn link(
        title: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::Link {
            title: title.into(),
            path: path.into(),
            description: description.into(),
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Text { .. } => ContentKind::Text,
            Self::Image { .. } => ContentKind::Image,
            Self::Gif { .. } => ContentKind::Gif,
            Self::Video { .. } => ContentKind::Video,
            Self::Link { .. } => ContentKind::Link,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Text { title, .. }
            | Self::Image { title, .. }
            | Self::Gif { title, .. }
            | Self::Video { title, .. }
            | Self::Link { title, .. } => title,
        }
    }
}

/// Content as carried by a window definition.
///
/// Definitions can come from loosely typed data, so a window may name a tag
/// outside the closed set. Such content is kept as `Unsupported` and renders
/// as a placeholder instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowContent {
    Known(ContentDescriptor),
    Unsupported { kind: String, title: String },
}

impl WindowContent {
    pub fn unsupported(kind: impl Into<String>, title: impl Into<String>) -> Self {
        Self::Unsupported {
            kind: kind.into(),
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Known(descriptor) => descriptor.title(),
            Self::Unsupported { title, .. } => title,
        }
    }

    pub fn descriptor(&self) -> Option<&ContentDescriptor> {
        match self {
            Self::Known(descriptor) => Some(descriptor),
            Self::Unsupported { .. } => None,
        }
    }
}

impl From<ContentDescriptor> for WindowContent {
    fn from(value: ContentDescriptor) -> Self {
        Self::Known(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_kind() {
        for kind in ContentKind::ALL {
            assert_eq!(ContentKind::from_tag(kind.as_str()), Some(kind));
        }
        assert_eq!(ContentKind::from_tag("audio"), None);
        assert_eq!(ContentKind::from_tag("Text"), None);
    }

    #[test]
    fn descriptor_reports_kind_and_title() {
        let link = ContentDescriptor::link("Visit Store", "/collections/all", "Shop");
        assert_eq!(link.kind(), ContentKind::Link);
        assert_eq!(link.title(), "Visit Store");
        let content: WindowContent = link.into();
        assert_eq!(content.title(), "Visit Store");
        assert!(content.descriptor().is_some());
    }

    #[test]
    fn unsupported_content_keeps_its_title() {
        let content = WindowContent::unsupported("audio", "Podcast");
        assert_eq!(content.title(), "Podcast");
        assert!(content.descriptor().is_none());
    }
}
