//! Property tests over generated trees.

mod common;

use common::{services, Fixed};
use mindmap_core::SharedStyle;
use mindmap_layout::{NodeTree, TreeOptions};
use proptest::prelude::*;
use serde_json::{json, Value};

const KINDS: &[&str] = &[
    "content.builtin.title",
    "content.builtin.text",
    "content.builtin.image",
    "content.builtin.attachment",
    "content.custom.video",
];

fn raw_node() -> impl Strategy<Value = Value> {
    let leaf = ("[a-z \n]{0,40}", prop::sample::select(KINDS), "[a-z ]{0,80}").prop_map(
        |(title, kind, content)| {
            json!({ "data": { "title": title, "content_type": kind, "content": content } })
        },
    );
    leaf.prop_recursive(3, 32, 4, |inner| {
        ("[a-z ]{0,40}", prop::sample::select(KINDS), prop::collection::vec(inner, 0..4)).prop_map(
            |(title, kind, children)| {
                json!({ "data": { "title": title, "content_type": kind }, "children": children })
            },
        )
    })
}

fn count(raw: &Value) -> usize {
    1 + raw["children"]
        .as_array()
        .map_or(0, |children| children.iter().map(count).sum())
}

fn snapshot(tree: &NodeTree) -> Vec<String> {
    tree.all_node()
        .iter()
        .map(|node| format!("{:?} {:?} {:?}", node.title_box, node.content_box, node.position))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_one_node_per_input_node(raw in raw_node()) {
        let tree = NodeTree::new(&raw, services(Fixed::default()), TreeOptions::default()).unwrap();
        prop_assert_eq!(tree.all_node().len(), count(&raw));
    }

    #[test]
    fn test_second_pass_changes_nothing(raw in raw_node()) {
        let mut tree = NodeTree::new(&raw, services(Fixed::default()), TreeOptions::default()).unwrap();
        pollster::block_on(tree.calc_position()).unwrap();
        let first = snapshot(&tree);
        pollster::block_on(tree.calc_position()).unwrap();
        prop_assert_eq!(snapshot(&tree), first);
    }

    #[test]
    fn test_titles_are_never_blank(raw in raw_node()) {
        let mut tree = NodeTree::new(&raw, services(Fixed::default()), TreeOptions::default()).unwrap();
        pollster::block_on(tree.calc_position()).unwrap();
        for node in tree.all_node() {
            prop_assert!(!node.data.title().is_empty());
            prop_assert!(node.title_box.width > 0.0);
        }
    }

    #[test]
    fn test_title_nodes_stay_within_max_width(raw in raw_node()) {
        let shared = SharedStyle::default();
        let limit = shared.max_title_width + shared.title_padding.horizontal();
        let mut tree = NodeTree::new(&raw, services(Fixed::default()), TreeOptions::default()).unwrap();
        pollster::block_on(tree.calc_position()).unwrap();
        for node in tree.all_node() {
            if node.data.content_type() == mindmap_core::ContentKind::Title {
                prop_assert!(node.title_box.width <= limit);
                prop_assert!(!node.data.title_list.is_empty());
            }
        }
    }
}
