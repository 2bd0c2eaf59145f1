//! Core types for mind-map layout.
//!
//! This crate provides the foundational types used across the other
//! mindmap crates:
//! - Geometry value types (sizes, points, bounds, paddings, probe boxes)
//! - Content kinds and the per-kind style sheet
//! - Nodes, the node arena and the builder that fills it from raw data
//! - Error types

pub mod builder;
pub mod content;
pub mod errors;
pub mod node;
pub mod style;
pub mod tree;
pub mod types;

pub use builder::{build_tree, parse_tree};
pub use content::ContentKind;
pub use errors::*;
pub use node::{Node, NodeData, NodeId};
pub use style::{
    ContentStyle, FileNameStyle, NodeStyle, SharedStyle, StyleResolver, StyleSheet,
    TextBoxStyle, TitleStyle,
};
pub use tree::MindTree;
pub use types::*;
