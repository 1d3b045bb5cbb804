// File: crates/plot-core/tests/layout.rs
// Purpose: Validate network-architecture layout counts, placement, and containment.

use plot_core::{layout_network, NetworkDiagram, RectF, RenderOptions};

fn counts(layer_sizes: &[u32]) -> (usize, usize) {
    let nodes: usize = layer_sizes.iter().map(|&s| s as usize).sum();
    let edges: usize = layer_sizes
        .windows(2)
        .map(|w| w[0] as usize * w[1] as usize)
        .sum();
    (nodes, edges)
}

#[test]
fn node_and_edge_counts() {
    for sizes in [
        vec![3u32, 5, 2],
        vec![1, 1],
        vec![4, 4, 4, 4],
        vec![1, 10, 10, 1],
        vec![7, 1, 7],
    ] {
        let layout = layout_network(&sizes, RectF::unit());
        let (want_nodes, want_edges) = counts(&sizes);
        assert_eq!(layout.nodes.len(), want_nodes, "nodes for {:?}", sizes);
        assert_eq!(layout.edges.len(), want_edges, "edges for {:?}", sizes);
    }
}

#[test]
fn three_five_two_has_ten_nodes_and_twenty_five_edges() {
    let layout = layout_network(&[3, 5, 2], RectF::unit());
    assert_eq!(layout.nodes.len(), 10);
    assert_eq!(layout.edges.len(), 25);
}

#[test]
fn centers_stay_inside_bounds() {
    let bounds = RectF::from_ltrb(-2.0, 5.0, 8.0, 1.0);
    for sizes in [vec![2u32, 9], vec![1, 1, 1], vec![6, 2, 6, 3]] {
        let layout = layout_network(&sizes, bounds);
        for node in &layout.nodes {
            assert!(
                bounds.contains(node.x, node.y),
                "node ({}, {}) escaped {:?} for {:?}",
                node.x, node.y, bounds, sizes
            );
        }
    }
}

#[test]
fn placement_follows_spacing_rules() {
    let bounds = RectF::from_ltrb(0.0, 1.0, 1.0, 0.0);
    let sizes = [3u32, 5, 2];
    let layout = layout_network(&sizes, bounds);

    let v = bounds.height() / 5.0; // widest layer
    let h = bounds.width() / 2.0; // L - 1 columns

    // First node of the first layer: x at the left edge, y at layer top.
    let first = layout.nodes[0];
    let want_y = v * (3.0 - 1.0) * 0.5 + 0.5; // layer_top for a 3-node layer
    assert!((first.x - 0.0).abs() < 1e-12);
    assert!((first.y - want_y).abs() < 1e-12);
    assert!((first.radius - v / 4.0).abs() < 1e-12);

    // Middle column sits one h_spacing over and spans the full height.
    let middle: Vec<_> = layout.nodes.iter().filter(|n| (n.x - h).abs() < 1e-12).collect();
    assert_eq!(middle.len(), 5);
    let ys: Vec<f64> = middle.iter().map(|n| n.y).collect();
    for pair in ys.windows(2) {
        assert!((pair[0] - pair[1] - v).abs() < 1e-12, "uneven vertical spacing");
    }

    // A single-column layer is vertically centered.
    let last: Vec<_> = layout.nodes.iter().filter(|n| (n.x - 1.0).abs() < 1e-12).collect();
    assert_eq!(last.len(), 2);
    let mid = (last[0].y + last[1].y) * 0.5;
    assert!((mid - 0.5).abs() < 1e-12);
}

#[test]
fn edges_connect_adjacent_columns_only() {
    let layout = layout_network(&[2, 3, 2], RectF::unit());
    let h = 0.5;
    for e in &layout.edges {
        let dx = e.to.0 - e.from.0;
        assert!((dx - h).abs() < 1e-12, "edge must span exactly one column");
    }
}

#[test]
fn degenerate_inputs_produce_empty_layout() {
    assert!(layout_network(&[], RectF::unit()).nodes.is_empty());
    assert!(layout_network(&[4], RectF::unit()).nodes.is_empty());
    assert!(layout_network(&[3, 0, 2], RectF::unit()).edges.is_empty());
}

#[test]
fn layout_is_reproducible() {
    let a = layout_network(&[3, 5, 2], RectF::unit());
    let b = layout_network(&[3, 5, 2], RectF::unit());
    assert_eq!(a.nodes, b.nodes);
    assert_eq!(a.edges, b.edges);
}

#[test]
fn diagram_renders_png_bytes() {
    let diagram = NetworkDiagram::new("NN Architecture", vec![3, 5, 2]);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = diagram.render_to_png_bytes(&opts).expect("render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
