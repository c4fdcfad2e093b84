use graphpad::geometry::math::{loop_anchor, seg_distance_sq};
use graphpad::model::Item;
use graphpad::Graph;

const CENTER: (f32, f32) = (0.0, 0.0);

fn pick(g: &Graph, x: f32, y: f32) -> Option<Item> {
    g.pick(x, y, CENTER.0, CENTER.1)
}

#[test]
fn node_beats_overlapping_edge() {
    let mut g = Graph::new();
    let a = g.add_node(0.0, 0.0);
    let b = g.add_node(100.0, 0.0);
    g.add_edge(a, b).unwrap();
    // (25, 0) lies on the segment and within node a's radius.
    assert_eq!(pick(&g, 25.0, 0.0), Some(Item::Node { id: a }));
}

#[test]
fn topmost_of_two_overlapping_nodes_wins() {
    let mut g = Graph::new();
    let _older = g.add_node(0.0, 0.0);
    let newer = g.add_node(20.0, 0.0);
    // Both circles cover (10, 0); the later-created node draws on top.
    assert_eq!(pick(&g, 10.0, 0.0), Some(Item::Node { id: newer }));
}

#[test]
fn topmost_of_two_parallel_edges_wins() {
    let mut g = Graph::new();
    let a = g.add_node(0.0, 0.0);
    let b = g.add_node(200.0, 0.0);
    let _e1 = g.add_edge(a, b).unwrap();
    let e2 = g.add_edge(a, b).unwrap();
    assert_eq!(pick(&g, 100.0, 5.0), Some(Item::Edge { id: e2 }));
}

#[test]
fn edge_hit_respects_range() {
    let mut g = Graph::new();
    let a = g.add_node(0.0, 0.0);
    let b = g.add_node(200.0, 0.0);
    let e = g.add_edge(a, b).unwrap();
    assert_eq!(pick(&g, 100.0, 9.0), Some(Item::Edge { id: e }));
    assert_eq!(pick(&g, 100.0, 11.0), None);
}

#[test]
fn self_loop_hits_at_its_anchor_circle() {
    let mut g = Graph::new();
    let n = g.add_node(200.0, 0.0);
    let e = g.add_edge(n, n).unwrap();
    // Anchor sits on the node boundary away from the view center: (230, 0).
    assert_eq!(pick(&g, 255.0, 0.0), Some(Item::Edge { id: e }));
    // Inside the node circle the node itself wins.
    assert_eq!(pick(&g, 225.0, 0.0), Some(Item::Node { id: n }));
    assert_eq!(pick(&g, 265.0, 0.0), None);
}

#[test]
fn miss_returns_none() {
    let mut g = Graph::new();
    g.add_node(0.0, 0.0);
    assert_eq!(pick(&g, 500.0, 500.0), None);
}

#[test]
fn segment_distance_clamps_to_endpoints() {
    // Beyond the far endpoint: distance to (100, 0), not the infinite line.
    let (d2, t) = seg_distance_sq(150.0, 40.0, 0.0, 0.0, 100.0, 0.0);
    assert_eq!(t, 1.0);
    assert_eq!(d2, 50.0 * 50.0 + 40.0 * 40.0);

    let (d2, t) = seg_distance_sq(-30.0, 0.0, 0.0, 0.0, 100.0, 0.0);
    assert_eq!(t, 0.0);
    assert_eq!(d2, 900.0);
}

#[test]
fn zero_length_segment_degenerates_to_point_distance() {
    let (d2, t) = seg_distance_sq(13.0, 14.0, 10.0, 10.0, 10.0, 10.0);
    assert_eq!(t, 0.0);
    assert_eq!(d2, 9.0 + 16.0);
}

#[test]
fn loop_anchor_is_antipodal_to_the_reference() {
    let (ax, ay) = loop_anchor(100.0, 100.0, 30.0, 0.0, 0.0);
    let expect = 100.0 + 30.0 * std::f32::consts::FRAC_1_SQRT_2;
    assert!((ax - expect).abs() < 1e-3);
    assert!((ay - expect).abs() < 1e-3);
}

#[test]
fn loop_anchor_at_reference_center_falls_back_upward() {
    // Node exactly on the reference point: no direction to normalize.
    let (ax, ay) = loop_anchor(5.0, 5.0, 30.0, 5.0, 5.0);
    assert_eq!((ax, ay), (5.0, -25.0));
}
