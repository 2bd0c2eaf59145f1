//! Content and title box sizing.
//!
//! Runs after every measurement of a pass has landed. Each content kind has
//! its own formula; kinds without one keep zero-sized boxes.

use mindmap_core::{ContentKind, MindTree, Node, SharedStyle};

/// Compute the boxes of one node from its measured lines and its style.
pub fn size_node(node: &mut Node, shared: &SharedStyle) {
    let content = &node.style.content;
    let padding = &content.padding;

    match node.data.content_type() {
        ContentKind::Image => {
            let count = if node.data.has_content() {
                node.data.serialized_content().map_or(0, |items| items.len())
            } else {
                0
            };
            node.content_box.width = (count + 1) as f64 * (content.single_width + content.margin_left)
                - content.margin_left
                + padding.horizontal()
                + 2.0 * content.x;
            node.content_box.height = content.single_height + padding.vertical() + content.y;
        }
        ContentKind::Attachment => {
            let lines = node.data.file_name_list.len();
            let body = if lines > 2 {
                shared.file_name_font_size * lines as f64
            } else {
                content.single_height
            };
            node.content_box.width =
                content.single_width + padding.horizontal() + 2.0 * content.x + 10.0;
            node.content_box.height = body + padding.vertical() + content.y;
        }
        ContentKind::Text => {
            node.content_box.width = content.single_width + padding.horizontal() + 2.0 * content.x;
            node.content_box.height = content.single_height * node.data.content_list.len() as f64
                + padding.vertical()
                + content.y;
        }
        ContentKind::Title => {
            let pads = shared.title_padding;
            if node.title_box.width > shared.max_title_width {
                node.title_box.width = shared.max_title_width + pads.horizontal();
            }
            node.title_box.height =
                shared.title_line_height * node.data.title_list.len() as f64 + pads.vertical();
        }
        ContentKind::Other(_) | ContentKind::Unspecified => {}
    }
}

/// Size every node, then mark every node dirty.
pub fn size_all(tree: &mut MindTree, shared: &SharedStyle) {
    tree.for_each_mut(|node| size_node(node, shared));
    tree.for_each_mut(Node::mark_dirty);
}
