use criterion::{black_box, criterion_group, criterion_main, Criterion};
use domedit_tree::{
    copy_node_in_tree, find_node_by_id, merge_styles, unwrap_node_in_tree, wrap_node_in_tree,
    Node, SequentialIds, Tree,
};

/// `fanout` children per node, `levels` deep; ids are "n<counter>"
fn generate(fanout: usize, levels: usize) -> Tree {
    fn build(counter: &mut usize, fanout: usize, levels: usize) -> Node {
        *counter += 1;
        let mut node = Node::new(format!("n{}", counter), "div").with_style("padding", "1rem");
        if levels > 0 {
            node = node.with_children((0..fanout).map(|_| build(counter, fanout, levels - 1)).collect::<Vec<_>>());
        }
        node
    }

    let mut counter = 0;
    Node::root("div")
        .with_children((0..fanout).map(|_| build(&mut counter, fanout, levels)).collect::<Vec<_>>())
        .into_tree()
}

fn last_id(tree: &Tree) -> String {
    tree.ids().last().map(|id| id.to_string()).unwrap_or_default()
}

fn search(c: &mut Criterion) {
    let tree = generate(4, 5);
    let target = last_id(&tree);

    c.bench_function("find_node_by_id_last", |b| {
        b.iter(|| find_node_by_id(black_box(&tree), black_box(&target)))
    });
}

fn update(c: &mut Criterion) {
    let tree = generate(4, 5);
    let target = last_id(&tree);

    c.bench_function("merge_styles_deep_leaf", |b| {
        b.iter(|| merge_styles(black_box(&tree), &target, [("color", "red")]))
    });
}

fn structural(c: &mut Criterion) {
    let tree = generate(4, 5);
    let target = last_id(&tree);

    c.bench_function("wrap_deep_leaf", |b| {
        let mut ids = SequentialIds::from_seed("bench");
        b.iter(|| wrap_node_in_tree(black_box(&tree), &target, "span", &mut ids))
    });

    c.bench_function("unwrap_deep_leaf", |b| {
        b.iter(|| unwrap_node_in_tree(black_box(&tree), &target))
    });

    c.bench_function("copy_top_level_subtree", |b| {
        let mut ids = SequentialIds::from_seed("bench");
        b.iter(|| copy_node_in_tree(black_box(&tree), "n1", &mut ids))
    });
}

criterion_group!(benches, search, update, structural);
criterion_main!(benches);
