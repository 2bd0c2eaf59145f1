//! Layout pass benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mindmap_core::{parse_tree, Point};
use mindmap_layout::{LayoutRegistry, LayoutServices, MindTree, NodeTree, TreeOptions};
use mindmap_measure::EstimatingMeasurer;
use serde_json::{json, Value};

fn wide_tree(branches: usize, leaves: usize) -> Value {
    let children: Vec<Value> = (0..branches)
        .map(|b| {
            let leaves: Vec<Value> = (0..leaves)
                .map(|l| {
                    json!({ "data": {
                        "title": format!("Leaf {b}.{l}"),
                        "content_type": "content.builtin.text",
                        "content": "A short note that wraps onto a couple of lines."
                    } })
                })
                .collect();
            json!({
                "data": { "title": format!("Branch {b}"), "content_type": "content.builtin.title" },
                "children": leaves
            })
        })
        .collect();
    json!({
        "data": { "title": "Central topic", "content_type": "content.builtin.title" },
        "children": children
    })
}

fn column(tree: &mut MindTree) {
    let mut y = 0.0;
    for id in tree.preorder_ids() {
        if let Some(node) = tree.get_mut(id) {
            node.position = Point::new(0.0, y);
            y += node.bounds().height;
        }
    }
}

fn services() -> LayoutServices {
    let mut registry = LayoutRegistry::new();
    registry.register("mindmap", column);
    LayoutServices::new(EstimatingMeasurer::new(), registry)
}

fn build_wide(c: &mut Criterion) {
    let source = wide_tree(20, 10).to_string();
    c.bench_function("build_wide", |b| b.iter(|| parse_tree(black_box(&source))));
}

fn layout_wide(c: &mut Criterion) {
    let raw = wide_tree(20, 10);
    let mut tree = NodeTree::new(&raw, services(), TreeOptions::default()).unwrap();
    c.bench_function("layout_wide", |b| {
        b.iter(|| pollster::block_on(tree.calc_position()).unwrap())
    });
}

fn overlap_wide(c: &mut Criterion) {
    let raw = wide_tree(20, 10);
    let mut tree = NodeTree::new(&raw, services(), TreeOptions::default()).unwrap();
    pollster::block_on(tree.calc_position()).unwrap();
    c.bench_function("overlap_wide", |b| b.iter(|| black_box(tree.layout_is_overlap())));
}

criterion_group!(benches, build_wide, layout_wide, overlap_wide);
criterion_main!(benches);
