//! The tree facade that drives a full layout pass.

use std::sync::Arc;

use log::{debug, warn};
use mindmap_core::{
    build_tree, BuildError, LayoutError, MindTree, Node, NodeId, StyleResolver, StyleSheet,
};
use mindmap_measure::{measure_all, TextMeasurer};
use serde_json::Value;

use crate::events::{CommandBus, LAYOUT_COMMAND};
use crate::options::TreeOptions;
use crate::overlap;
use crate::registry::{LayoutAlgorithm, LayoutRegistry};
use crate::sizer::size_all;

/// External collaborators of a [`NodeTree`].
#[derive(Clone)]
pub struct LayoutServices {
    /// Host text measurement
    pub measurer: Arc<dyn TextMeasurer>,
    /// Style constants per content kind
    pub styles: Arc<dyn StyleResolver>,
    /// Available layout algorithms
    pub registry: Arc<LayoutRegistry>,
    /// Where completion commands go
    pub bus: Arc<CommandBus>,
}

impl LayoutServices {
    /// Services with the default style sheet and a fresh command bus.
    pub fn new(measurer: impl TextMeasurer + 'static, registry: LayoutRegistry) -> Self {
        Self {
            measurer: Arc::new(measurer),
            styles: Arc::new(StyleSheet::default()),
            registry: Arc::new(registry),
            bus: Arc::new(CommandBus::new()),
        }
    }

    pub fn with_styles(mut self, styles: impl StyleResolver + 'static) -> Self {
        self.styles = Arc::new(styles);
        self
    }

    pub fn with_bus(mut self, bus: Arc<CommandBus>) -> Self {
        self.bus = bus;
        self
    }
}

impl std::fmt::Debug for LayoutServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutServices")
            .field("registry", &self.registry)
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}

/// A mind map: its node tree plus everything needed to lay it out.
pub struct NodeTree {
    tree: MindTree,
    services: LayoutServices,
    options: TreeOptions,
    layout_name: String,
    layout: Option<Arc<dyn LayoutAlgorithm>>,
}

impl NodeTree {
    /// Build the tree from raw data and select the configured layout.
    ///
    /// No measurement happens here; call [`NodeTree::calc_position`].
    pub fn new(
        raw: &Value,
        services: LayoutServices,
        options: TreeOptions,
    ) -> Result<Self, BuildError> {
        let tree = build_tree(raw)?;
        debug!("built tree with {} nodes", tree.len());

        let mut node_tree = Self {
            tree,
            services,
            layout_name: String::new(),
            layout: None,
            options,
        };
        let initial = node_tree.options.layout.clone();
        node_tree.select_layout(initial);
        Ok(node_tree)
    }

    /// Parse JSON text and build the tree from it.
    pub fn from_json(
        json: &str,
        services: LayoutServices,
        options: TreeOptions,
    ) -> Result<Self, BuildError> {
        let raw: Value = serde_json::from_str(json)?;
        Self::new(&raw, services, options)
    }

    /// Bind the algorithm used by the next pass.
    ///
    /// An unknown name is accepted here and reported when a pass runs.
    pub fn select_layout(&mut self, name: impl Into<String>) {
        self.layout_name = name.into();
        self.layout = self.services.registry.get(&self.layout_name);
        if self.layout.is_none() {
            debug!("layout {:?} is not registered", self.layout_name);
        }
    }

    /// Name of the selected layout.
    pub fn layout_name(&self) -> &str {
        &self.layout_name
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn services(&self) -> &LayoutServices {
        &self.services
    }

    /// The root node. Only `None` if a layout algorithm emptied the tree.
    pub fn root(&self) -> Option<&Node> {
        self.tree.root()
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.tree.root_id()
    }

    pub fn tree(&self) -> &MindTree {
        &self.tree
    }

    /// Direct access to the nodes, e.g. for a render layer clearing dirty
    /// flags.
    pub fn tree_mut(&mut self) -> &mut MindTree {
        &mut self.tree
    }

    /// Every node in pre-order, collected fresh on each call.
    pub fn all_node(&self) -> Vec<&Node> {
        self.tree.nodes()
    }

    /// Reset every node's geometry and resolve its style.
    pub fn init_all_node(&mut self) {
        let styles = self.services.styles.clone();
        self.tree.for_each_mut(|node| node.init(styles.as_ref()));
    }

    /// Run a full layout pass.
    ///
    /// Every node is re-initialized, all texts are measured concurrently,
    /// boxes are sized once every measurement has landed, the selected
    /// algorithm places the nodes, and a `layout` command is emitted with the
    /// root's `node_id`.
    ///
    /// If any measurement fails no node is sized and the pass returns
    /// [`LayoutError::Measurement`] listing every failure. The exclusive
    /// borrow keeps a second pass from starting before this one finishes.
    pub async fn calc_position(&mut self) -> Result<(), LayoutError> {
        debug!(
            "layout pass over {} nodes with {:?}",
            self.tree.len(),
            self.layout_name
        );
        self.init_all_node();

        let styles = self.services.styles.clone();
        let shared = styles.shared();
        let settings = self.options.measure_settings();

        let measured = match measure_all(
            &mut self.tree,
            self.services.measurer.as_ref(),
            &settings,
            shared,
        )
        .await
        {
            Ok(measured) => measured,
            Err(failures) => {
                warn!("layout pass aborted: {failures}");
                return Err(failures.into());
            }
        };

        measured.apply(&mut self.tree, shared);
        size_all(&mut self.tree, shared);

        let layout = self.layout.clone().ok_or_else(|| LayoutError::UnknownLayout {
            name: self.layout_name.clone(),
        })?;
        layout.init(&mut self.tree);

        let root = self.tree.root().ok_or(LayoutError::EmptyTree)?;
        debug!("layout pass finished for root {}", root.id);
        self.services.bus.emit(LAYOUT_COMMAND, root.data.node_id());
        Ok(())
    }

    /// Whether any two nodes overlap after layout.
    pub fn layout_is_overlap(&self) -> bool {
        overlap::has_overlap(&self.all_node())
    }
}

impl std::fmt::Debug for NodeTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeTree")
            .field("nodes", &self.tree.len())
            .field("layout", &self.layout_name)
            .field("options", &self.options)
            .finish()
    }
}
