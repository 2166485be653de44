//! Window definitions as supplied by the hosting page.
//!
//! Definitions arrive as loosely typed JSON. A window whose content names an
//! unknown type, or lacks a field its type requires, still loads: its content
//! becomes [`WindowContent::Unsupported`] and renders as a placeholder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indoc::indoc;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::content::{ContentDescriptor, WindowContent};
use crate::layout::{Point, Size};
use crate::window::WindowDefinition;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read window definitions from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed window definitions: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDefinition {
    id: String,
    title: String,
    #[serde(default)]
    content: Value,
    default_position: Option<Point>,
    default_size: Option<Size>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawContent {
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

impl From<RawContent> for ContentDescriptor {
    fn from(raw: RawContent) -> Self {
        match raw {
            RawContent::Text { title, content } => ContentDescriptor::Text { title, content },
            RawContent::Image { title, src, alt } => ContentDescriptor::Image { title, src, alt },
            RawContent::Gif { title, src } => ContentDescriptor::Gif { title, src },
            RawContent::Video { title, src, poster } => {
                ContentDescriptor::Video { title, src, poster }
            }
            RawContent::Link {
                title,
                path,
                description,
            } => ContentDescriptor::Link {
                title,
                path,
                description,
            },
        }
    }
}

impl RawDefinition {
    fn into_definition(self) -> WindowDefinition {
        let content = parse_content(&self.id, &self.title, self.content);
        let mut definition = WindowDefinition::new(self.id, self.title, content);
        if let Some(position) = self.default_position {
            definition.initial_position = position;
        }
        if let Some(size) = self.default_size {
            definition.initial_size = size;
        }
        definition
    }
}

/// Content without its own title inherits the window title.
fn parse_content(window_id: &str, window_title: &str, mut value: Value) -> WindowContent {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    if let Value::Object(map) = &mut value {
        map.entry("title")
            .or_insert_with(|| Value::String(window_title.to_owned()));
    }
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(window_title)
        .to_owned();
    match serde_json::from_value::<RawContent>(value) {
        Ok(raw) => WindowContent::Known(raw.into()),
        Err(err) => {
            tracing::debug!(window_id, kind = %kind, error = %err, "unsupported window content");
            WindowContent::Unsupported { kind, title }
        }
    }
}

/// Parse a JSON array of window definitions.
pub fn from_json_str(json: &str) -> Result<Vec<WindowDefinition>, DefinitionError> {
    let raw: Vec<RawDefinition> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(RawDefinition::into_definition).collect())
}

pub fn load_from_path(path: &Path) -> Result<Vec<WindowDefinition>, DefinitionError> {
    let json = fs::read_to_string(path).map_err(|source| DefinitionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let definitions = from_json_str(&json)?;
    tracing::info!(path = %path.display(), count = definitions.len(), "loaded window definitions");
    Ok(definitions)
}

/// The storefront's explore page: a welcome note, a featured image, a
/// release preview and a link into the shop.
pub fn sample_definitions() -> Vec<WindowDefinition> {
    let welcome = indoc! {"
        Welcome to the Explore page of ModaMosaic.
        Drag windows around and resize them to explore our content!"};
    vec![
        WindowDefinition::new(
            "window1",
            "Welcome to ModaMosaic",
            ContentDescriptor::text("Welcome Message", welcome),
        )
        .with_position(50, 50)
        .with_size(350, 200),
        WindowDefinition::new(
            "window2",
            "Featured Collection",
            ContentDescriptor::image(
                "Featured Collection",
                "/images/sample/collection.jpg",
                "Featured clothing collection",
            ),
        )
        .with_position(150, 120)
        .with_size(400, 350),
        WindowDefinition::new(
            "window3",
            "Latest Release",
            ContentDescriptor::gif("Latest Release Preview", "/images/sample/release.gif"),
        )
        .with_position(450, 80)
        .with_size(320, 320),
        WindowDefinition::new(
            "window4",
            "Shop Now",
            ContentDescriptor::link(
                "Visit Store",
                "/collections/all",
                "Check out our latest products and collections",
            ),
        )
        .with_position(250, 250)
        .with_size(300, 200),
    ]
}
