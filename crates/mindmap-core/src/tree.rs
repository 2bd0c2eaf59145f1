//! The node arena.
//!
//! A [`MindTree`] owns every node of one mind map. Nodes link to each other
//! by [`NodeId`]; the tree has exactly one root once anything is added.

use std::collections::HashMap;

use crate::node::{Node, NodeId};
use crate::types::Bounds;

/// All nodes of one mind map.
#[derive(Debug, Clone, Default)]
pub struct MindTree {
    /// All nodes in the tree, indexed by ID
    nodes: HashMap<NodeId, Node>,
    root: Option<NodeId>,
    /// Counter for generating unique IDs
    next_id: u64,
    /// Mapping from external `node_id` values to arena IDs
    external_ids: HashMap<String, NodeId>,
}

impl MindTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Install the root node, replacing the whole tree.
    pub fn set_root(&mut self, mut node: Node) -> NodeId {
        let id = node.id;
        node.parent = None;
        self.nodes.clear();
        self.external_ids.clear();
        self.index(&node);
        self.nodes.insert(id, node);
        self.root = Some(id);
        id
    }

    /// Append a child to a parent, after its existing children.
    ///
    /// Returns `None` if the parent is not in the tree.
    pub fn add_child(&mut self, parent_id: NodeId, mut node: Node) -> Option<NodeId> {
        let id = node.id;
        self.nodes.get_mut(&parent_id)?.children.push(id);
        node.parent = Some(parent_id);
        self.index(&node);
        self.nodes.insert(id, node);
        Some(id)
    }

    fn index(&mut self, node: &Node) {
        if let Some(external) = node.data.node_id() {
            self.external_ids.insert(external, node.id);
        }
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.and_then(|id| self.nodes.get(&id))
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Get a node by its external `node_id`.
    pub fn find_by_node_id(&self, node_id: &str) -> Option<&Node> {
        self.external_ids
            .get(node_id)
            .and_then(|id| self.nodes.get(id))
    }

    pub fn parent(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)?.parent.and_then(|p| self.nodes.get(&p))
    }

    /// Get children of a node, in order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|n| n.children.iter())
            .filter_map(|child_id| self.nodes.get(child_id))
    }

    /// Number of edges between a node and the root.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut node = self.nodes.get(&id)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = self.nodes.get(&parent)?;
            depth += 1;
        }
        Some(depth)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Visit every node in pre-order: parent first, children in order.
    pub fn traverse<'a>(&'a self, mut visit: impl FnMut(&'a Node)) {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            visit(node);
            stack.extend(node.children.iter().rev().copied());
        }
    }

    /// IDs of every node in pre-order.
    pub fn preorder_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.nodes.len());
        self.traverse(|node| ids.push(node.id));
        ids
    }

    /// Every node in pre-order.
    ///
    /// Built fresh on every call.
    pub fn nodes(&self) -> Vec<&Node> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        self.traverse(|node| nodes.push(node));
        nodes
    }

    /// Apply `f` to every node in pre-order.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut Node)) {
        for id in self.preorder_ids() {
            if let Some(node) = self.nodes.get_mut(&id) {
                f(node);
            }
        }
    }

    /// Get the total bounds of all nodes.
    pub fn content_bounds(&self) -> Bounds {
        let mut result: Option<Bounds> = None;
        self.traverse(|node| {
            let bounds = node.bounds();
            result = Some(match result {
                Some(acc) => acc.union(&bounds),
                None => bounds,
            });
        });
        result.unwrap_or_default()
    }
}
