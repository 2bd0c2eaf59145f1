//! Sizing and layout dispatch for mind-map node trees.
//!
//! This crate turns a tree of content nodes into positioned geometry.
//!
//! # Architecture
//!
//! 1. **Build**: the raw nested data becomes a [`MindTree`]
//! 2. **Measure**: every title, text body and file name is measured or
//!    wrapped by the host through a [`TextMeasurer`]
//! 3. **Size**: content and title boxes follow from the measurements
//! 4. **Lay out**: the selected [`LayoutAlgorithm`] writes positions
//! 5. **Notify**: a `layout` command goes out on the [`CommandBus`]
//!
//! # Example
//!
//! ```ignore
//! use mindmap_layout::{LayoutRegistry, LayoutServices, NodeTree, TreeOptions};
//! use mindmap_measure::EstimatingMeasurer;
//!
//! let mut registry = LayoutRegistry::new();
//! registry.register("mindmap", my_layout);
//!
//! let services = LayoutServices::new(EstimatingMeasurer::new(), registry);
//! let mut tree = NodeTree::from_json(source, services, TreeOptions::default())?;
//! pollster::block_on(tree.calc_position())?;
//!
//! for node in tree.all_node() {
//!     println!("{}: {:?}", node.id, node.bounds());
//! }
//! ```

mod events;
mod node_tree;
mod options;
mod overlap;
mod registry;
mod sizer;

pub use events::{BusEvent, CommandBus, LAYOUT_COMMAND};
pub use node_tree::{LayoutServices, NodeTree};
pub use options::TreeOptions;
pub use overlap::{has_overlap, overlapping_pair};
pub use registry::{LayoutAlgorithm, LayoutRegistry};
pub use sizer::{size_all, size_node};

pub use mindmap_core::{LayoutError, MindMapError, MindTree, Node, NodeId};
pub use mindmap_measure::TextMeasurer;
