//! Content kinds.
//!
//! The `content_type` data field selects which measurement and sizing rules
//! apply to a node.

use std::fmt;

/// Tag of a plain topic whose title wraps into lines.
pub const TITLE_TAG: &str = "content.builtin.title";
/// Tag of a node carrying a text block.
pub const TEXT_TAG: &str = "content.builtin.text";
/// Tag of a node carrying a row of images.
pub const IMAGE_TAG: &str = "content.builtin.image";
/// Tag of a node carrying a file attachment.
pub const ATTACHMENT_TAG: &str = "content.builtin.attachment";

/// The kind of content a node carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ContentKind {
    Title,
    Text,
    Image,
    Attachment,
    /// A tag this engine has no rules for. Boxes stay untouched.
    Other(String),
    /// No `content_type` field.
    #[default]
    Unspecified,
}

impl ContentKind {
    /// Map a `content_type` tag to its kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            TITLE_TAG => ContentKind::Title,
            TEXT_TAG => ContentKind::Text,
            IMAGE_TAG => ContentKind::Image,
            ATTACHMENT_TAG => ContentKind::Attachment,
            other => ContentKind::Other(other.to_string()),
        }
    }

    /// The `content_type` tag, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            ContentKind::Title => Some(TITLE_TAG),
            ContentKind::Text => Some(TEXT_TAG),
            ContentKind::Image => Some(IMAGE_TAG),
            ContentKind::Attachment => Some(ATTACHMENT_TAG),
            ContentKind::Other(tag) => Some(tag.as_str()),
            ContentKind::Unspecified => None,
        }
    }

    /// Whether this is one of the built-in kinds with sizing rules.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, ContentKind::Other(_) | ContentKind::Unspecified)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().unwrap_or("<none>"))
    }
}
