//! Mind-map nodes.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;
use smallvec::SmallVec;

use crate::content::ContentKind;
use crate::style::{NodeStyle, StyleResolver};
use crate::types::{Bounds, Point, Size};

/// Arena identifier of a node, unique within one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The data mapping of a node plus the line lists derived from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeData {
    fields: IndexMap<String, Value>,
    /// Wrapped title lines (title nodes)
    pub title_list: Vec<String>,
    /// Wrapped body lines (text nodes)
    pub content_list: Vec<String>,
    /// Wrapped file name lines (attachment nodes), blanks kept
    pub file_name_list: Vec<String>,
}

impl NodeData {
    pub const CONTENT_TYPE: &'static str = "content_type";
    pub const TITLE: &'static str = "title";
    pub const CONTENT: &'static str = "content";
    pub const NODE_ID: &'static str = "node_id";

    pub fn new() -> Self {
        Self::default()
    }

    /// Store one field.
    pub fn set_data(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Iterate over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn content_type(&self) -> ContentKind {
        match self.get(Self::CONTENT_TYPE).and_then(Value::as_str) {
            Some(tag) => ContentKind::from_tag(tag),
            None => ContentKind::Unspecified,
        }
    }

    /// The title text, empty when absent or not a string.
    pub fn title(&self) -> &str {
        self.get(Self::TITLE).and_then(Value::as_str).unwrap_or("")
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.set_data(Self::TITLE, Value::String(title.into()));
    }

    /// The content payload as text, if it is a string.
    pub fn content_text(&self) -> Option<&str> {
        self.get(Self::CONTENT).and_then(Value::as_str)
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.set_data(Self::CONTENT, Value::String(content.into()));
    }

    /// Whether a non-empty content payload is present.
    pub fn has_content(&self) -> bool {
        match self.get(Self::CONTENT) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(_)) => true,
        }
    }

    /// The content payload decoded as a list.
    ///
    /// Image and attachment payloads arrive either as a JSON list or as a
    /// string holding a serialized list. Anything else yields `None`.
    pub fn serialized_content(&self) -> Option<Vec<Value>> {
        match self.get(Self::CONTENT)? {
            Value::Array(items) => Some(items.clone()),
            Value::String(s) => serde_json::from_str::<Vec<Value>>(s).ok(),
            _ => None,
        }
    }

    /// External identity of the node, read from the `node_id` field.
    pub fn node_id(&self) -> Option<String> {
        match self.get(Self::NODE_ID)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// A node in the mind-map tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 4]>,
    pub data: NodeData,
    /// Resolved from the content kind at every [`Node::init`]
    pub style: NodeStyle,
    pub title_box: Size,
    pub content_box: Size,
    /// Written by the layout algorithm
    pub position: Point,
    dirty: bool,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            parent: None,
            children: SmallVec::new(),
            data: NodeData::new(),
            style: NodeStyle::default(),
            title_box: Size::ZERO,
            content_box: Size::ZERO,
            position: Point::ORIGIN,
            dirty: true,
        }
    }

    pub fn with_data(mut self, data: NodeData) -> Self {
        self.data = data;
        self
    }

    pub fn content_type(&self) -> ContentKind {
        self.data.content_type()
    }

    /// Prepare the node for a layout pass.
    ///
    /// Geometry and derived line lists are cleared and the style is resolved
    /// again from the current content kind.
    pub fn init(&mut self, styles: &dyn StyleResolver) {
        self.style = styles.node_style(&self.data.content_type());
        self.title_box = Size::ZERO;
        self.content_box = Size::ZERO;
        self.position = Point::ORIGIN;
        self.data.title_list.clear();
        self.data.content_list.clear();
        self.data.file_name_list.clear();
    }

    /// Rectangle the node occupies: title stacked above content.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_parts(
            self.position,
            Size::new(
                self.title_box.width.max(self.content_box.width),
                self.title_box.height + self.content_box.height,
            ),
        )
    }

    /// Whether this node's rectangle intersects another's.
    pub fn overlaps(&self, other: &Node) -> bool {
        self.bounds().intersects(&other.bounds())
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Called by the render layer once it has redrawn the node.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
