//! Style constants consumed by measurement and sizing.
//!
//! Styles are supplied from outside the engine; nothing here is computed.
//! [`StyleSheet`] is the stock [`StyleResolver`] and can be loaded from JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::content::{ContentKind, ATTACHMENT_TAG, IMAGE_TAG, TEXT_TAG, TITLE_TAG};
use crate::errors::ConfigError;
use crate::types::Padding;

/// Resolves read-only style constants for nodes.
pub trait StyleResolver: Send + Sync {
    /// Style of a node with the given content kind.
    fn node_style(&self, kind: &ContentKind) -> NodeStyle;

    /// Values shared by every node regardless of kind.
    fn shared(&self) -> &SharedStyle;
}

/// Values shared by every node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedStyle {
    /// Padding around a node's title text
    pub title_padding: Padding,
    /// Widest a title line may get before it wraps
    pub max_title_width: f64,
    /// Height of one wrapped title line
    pub title_line_height: f64,
    /// Font size of attachment file names, also their line height
    pub file_name_font_size: f64,
}

impl Default for SharedStyle {
    fn default() -> Self {
        Self {
            title_padding: Padding::symmetric(8.0, 12.0),
            max_title_width: 200.0,
            title_line_height: 20.0,
            file_name_font_size: 14.0,
        }
    }
}

/// Title font settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleStyle {
    pub font_size: f64,
}

/// Geometry of the content area below the title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStyle {
    /// Width of one item (image, attachment card, text column)
    pub single_width: f64,
    /// Height of one item or one text line
    pub single_height: f64,
    /// Gap before each item after the first
    pub margin_left: f64,
    pub padding: Padding,
    /// Horizontal inset, applied on both sides
    pub x: f64,
    /// Vertical inset
    pub y: f64,
}

/// Body text settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBoxStyle {
    pub font_size: f64,
    /// Wrap width
    pub width: f64,
}

/// Attachment file name settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNameStyle {
    /// Wrap width
    pub width: f64,
}

/// Fully resolved style of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub title: TitleStyle,
    pub content: ContentStyle,
    pub text: TextBoxStyle,
    pub file_name: FileNameStyle,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            title: TitleStyle { font_size: 14.0 },
            content: ContentStyle::default(),
            text: TextBoxStyle { font_size: 14.0, width: 200.0 },
            file_name: FileNameStyle { width: 160.0 },
        }
    }
}

/// A style sheet keyed by `content_type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub shared: SharedStyle,
    /// Style for nodes whose tag has no entry in `kinds`
    pub fallback: NodeStyle,
    pub kinds: IndexMap<String, NodeStyle>,
}

impl StyleSheet {
    /// A sheet with no per-kind entries.
    pub fn empty() -> Self {
        Self {
            shared: SharedStyle::default(),
            fallback: NodeStyle::default(),
            kinds: IndexMap::new(),
        }
    }

    /// Load a sheet from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the style of one kind.
    pub fn with_kind(mut self, kind: &ContentKind, style: NodeStyle) -> Self {
        if let Some(tag) = kind.tag() {
            self.kinds.insert(tag.to_string(), style);
        }
        self
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        let base = NodeStyle::default();
        let mut kinds = IndexMap::new();

        kinds.insert(
            TITLE_TAG.to_string(),
            NodeStyle {
                title: TitleStyle { font_size: 16.0 },
                ..base.clone()
            },
        );
        kinds.insert(
            TEXT_TAG.to_string(),
            NodeStyle {
                content: ContentStyle {
                    single_width: 200.0,
                    single_height: 20.0,
                    margin_left: 0.0,
                    padding: Padding::uniform(8.0),
                    x: 4.0,
                    y: 4.0,
                },
                ..base.clone()
            },
        );
        kinds.insert(
            IMAGE_TAG.to_string(),
            NodeStyle {
                content: ContentStyle {
                    single_width: 60.0,
                    single_height: 60.0,
                    margin_left: 8.0,
                    padding: Padding::uniform(6.0),
                    x: 4.0,
                    y: 4.0,
                },
                ..base.clone()
            },
        );
        kinds.insert(
            ATTACHMENT_TAG.to_string(),
            NodeStyle {
                content: ContentStyle {
                    single_width: 180.0,
                    single_height: 40.0,
                    margin_left: 0.0,
                    padding: Padding::uniform(6.0),
                    x: 4.0,
                    y: 4.0,
                },
                file_name: FileNameStyle { width: 140.0 },
                ..base.clone()
            },
        );

        Self {
            shared: SharedStyle::default(),
            fallback: base,
            kinds,
        }
    }
}

impl StyleResolver for StyleSheet {
    fn node_style(&self, kind: &ContentKind) -> NodeStyle {
        kind.tag()
            .and_then(|tag| self.kinds.get(tag))
            .unwrap_or(&self.fallback)
            .clone()
    }

    fn shared(&self) -> &SharedStyle {
        &self.shared
    }
}
