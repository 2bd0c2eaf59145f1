//! Overlap detection between laid-out nodes.
//!
//! A pairwise O(n²) scan. It is a diagnostic used by tests and debugging
//! tools, not part of the layout pass, so no spatial index is kept.

use mindmap_core::{Node, NodeId};

/// First pair of nodes whose rectangles intersect, scanning `i < j`.
pub fn overlapping_pair(nodes: &[&Node]) -> Option<(NodeId, NodeId)> {
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            if a.overlaps(b) {
                return Some((a.id, b.id));
            }
        }
    }
    None
}

/// Whether any two nodes' rectangles intersect.
pub fn has_overlap(nodes: &[&Node]) -> bool {
    overlapping_pair(nodes).is_some()
}
