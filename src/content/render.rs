use std::ops::Range;

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::{ContentDescriptor, ContentKind, WindowContent};
use crate::theme;

pub const UNSUPPORTED_MESSAGE: &str = "Unsupported content type";
const VIDEO_CONTROLS: &str = "▶ play   ❚❚ pause   ■ stop";

/// Rows of rendered content that navigate somewhere when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub path: String,
    pub lines: Range<usize>,
}

/// Presentation of one window's content, ready to be drawn into a body area.
#[derive(Debug, Clone)]
pub struct RenderedContent {
    text: Text<'static>,
    wrap: bool,
    alignment: Alignment,
    link: Option<LinkTarget>,
}

impl RenderedContent {
    fn centered(lines: Vec<Line<'static>>) -> Self {
        Self {
            text: Text::from(lines),
            wrap: false,
            alignment: Alignment::Center,
            link: None,
        }
    }

    pub fn text(&self) -> &Text<'static> {
        &self.text
    }

    /// Whether long lines wrap (only literal text does; media and links are
    /// laid out one logical line per row so link rows stay addressable).
    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn link(&self) -> Option<&LinkTarget> {
        self.link.as_ref()
    }

    /// Navigation path behind `line`, if that line is part of a link.
    pub fn link_at(&self, line: usize) -> Option<&str> {
        self.link
            .as_ref()
            .filter(|link| link.lines.contains(&line))
            .map(|link| link.path.as_str())
    }

    pub fn line_count(&self) -> usize {
        self.text.lines.len()
    }

    pub fn plain_lines(&self) -> Vec<String> {
        self.text
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }
}

/// Map content to its presentation. Pure, and total over every input:
/// content outside the closed set becomes a placeholder.
pub fn render_content(content: &WindowContent) -> RenderedContent {
    match content {
        WindowContent::Known(descriptor) => render_descriptor(descriptor),
        WindowContent::Unsupported { kind, .. } => placeholder(kind),
    }
}

fn render_descriptor(descriptor: &ContentDescriptor) -> RenderedContent {
    match descriptor {
        ContentDescriptor::Text { content, .. } => literal_text(content),
        ContentDescriptor::Image { title, src, alt } => {
            let caption = if alt.trim().is_empty() { title } else { alt };
            let mut lines = media_header(ContentKind::Image, src);
            lines.push(Line::default());
            lines.push(caption_line(caption));
            RenderedContent::centered(lines)
        }
        ContentDescriptor::Gif { title, src } => {
            let mut lines = media_header(ContentKind::Gif, src);
            lines.push(Line::default());
            lines.push(caption_line(title));
            RenderedContent::centered(lines)
        }
        ContentDescriptor::Video { title, src, poster } => {
            let mut lines = media_header(ContentKind::Video, src);
            if let Some(poster) = poster {
                lines.push(Line::from(vec![
                    Span::styled("poster ", muted()),
                    Span::styled(poster.clone(), muted().add_modifier(Modifier::ITALIC)),
                ]));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                VIDEO_CONTROLS,
                Style::default()
                    .fg(theme::controls_fg())
                    .bg(theme::controls_bg()),
            )));
            lines.push(Line::default());
            lines.push(caption_line(title));
            RenderedContent::centered(lines)
        }
        ContentDescriptor::Link {
            title,
            path,
            description,
        } => {
            let lines = vec![
                Line::from(Span::styled(
                    title.clone(),
                    Style::default()
                        .fg(theme::link_fg())
                        .add_modifier(Modifier::UNDERLINED),
                )),
                Line::from(Span::styled(format!("→ {path}"), muted())),
                Line::default(),
                caption_line(description),
            ];
            let mut rendered = RenderedContent::centered(lines);
            rendered.link = Some(LinkTarget {
                path: path.clone(),
                lines: 0..2,
            });
            rendered
        }
    }
}

fn literal_text(content: &str) -> RenderedContent {
    let lines: Vec<Line<'static>> = content
        .split('\n')
        .map(|line| Line::from(line.strip_suffix('\r').unwrap_or(line).to_owned()))
        .collect();
    RenderedContent {
        text: Text::from(lines),
        wrap: true,
        alignment: Alignment::Left,
        link: None,
    }
}

fn placeholder(kind: &str) -> RenderedContent {
    let kind = if kind.is_empty() { "untyped" } else { kind };
    RenderedContent::centered(vec![
        Line::from(Span::styled(
            UNSUPPORTED_MESSAGE,
            Style::default()
                .fg(theme::placeholder_fg())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("({kind})"), muted())),
    ])
}

fn media_header(kind: ContentKind, src: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!(" {kind} "),
            Style::default()
                .fg(theme::badge_fg())
                .bg(theme::badge_bg())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(src.to_owned(), muted())),
    ]
}

fn caption_line(caption: &str) -> Line<'static> {
    Line::from(caption.to_owned())
}

fn muted() -> Style {
    Style::default().fg(theme::muted_fg())
}
