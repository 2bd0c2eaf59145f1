//! Building a [`MindTree`] from raw nested data.
//!
//! Raw nodes have the shape `{ "data": { ... }, "children": [ ... ] }`.
//! `children` may be absent. Every data key is copied onto the node in input
//! order, and children are attached in input order.

use serde_json::{Map, Value};

use crate::errors::BuildError;
use crate::node::{Node, NodeData, NodeId};
use crate::tree::MindTree;

/// Parse JSON text and build a tree from it.
pub fn parse_tree(json: &str) -> Result<MindTree, BuildError> {
    let raw: Value = serde_json::from_str(json)?;
    build_tree(&raw)
}

/// Build a whole tree from a raw root node.
pub fn build_tree(raw: &Value) -> Result<MindTree, BuildError> {
    let mut tree = MindTree::new();
    build(&mut tree, raw, None, "root")?;
    Ok(tree)
}

/// Build the subtree described by `raw` under `parent` and return its root.
///
/// Without a parent the subtree becomes the tree's root, replacing anything
/// already there. The raw node is checked before any node is created.
pub fn build(
    tree: &mut MindTree,
    raw: &Value,
    parent: Option<NodeId>,
    path: &str,
) -> Result<NodeId, BuildError> {
    let (fields, children) = split_raw(raw, path)?;

    let mut data = NodeData::new();
    for (field, value) in fields {
        data.set_data(field.clone(), value.clone());
    }

    let node = Node::new(tree.next_id()).with_data(data);
    let id = match parent {
        Some(parent_id) => tree.add_child(parent_id, node).ok_or_else(|| {
            BuildError::malformed(path, format!("parent {parent_id} is not in the tree"))
        })?,
        None => tree.set_root(node),
    };

    for (index, child) in children.iter().enumerate() {
        build(tree, child, Some(id), &format!("{path}.children[{index}]"))?;
    }

    Ok(id)
}

fn split_raw<'a>(
    raw: &'a Value,
    path: &str,
) -> Result<(&'a Map<String, Value>, &'a [Value]), BuildError> {
    let object = raw
        .as_object()
        .ok_or_else(|| BuildError::malformed(path, "node is not an object"))?;

    let fields = match object.get("data") {
        Some(Value::Object(fields)) => fields,
        Some(_) => return Err(BuildError::malformed(path, "`data` is not an object")),
        None => return Err(BuildError::malformed(path, "missing `data`")),
    };

    let children: &[Value] = match object.get("children") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(children)) => children,
        Some(_) => return Err(BuildError::malformed(path, "`children` is not a list")),
    };

    Ok((fields, children))
}
