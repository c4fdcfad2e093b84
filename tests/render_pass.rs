use graphpad::model::{Color, Item};
use graphpad::{Editor, Graph, Modifiers, Renderer};

#[derive(Clone, Copy, Debug, PartialEq)]
enum DrawOp {
    Clear,
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        fill: Option<Color>,
        highlighted: bool,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        highlighted: bool,
    },
    Curve {
        cx: f32,
        cy: f32,
        highlighted: bool,
    },
}

#[derive(Default)]
struct Recorder {
    ops: Vec<DrawOp>,
}

impl Renderer for Recorder {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }
    fn draw_circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        fill: Option<Color>,
        _stroke_width: f32,
        _stroke: Color,
        highlighted: bool,
    ) {
        self.ops.push(DrawOp::Circle {
            x,
            y,
            radius,
            fill,
            highlighted,
        });
    }
    fn draw_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        _stroke_width: f32,
        color: Color,
        highlighted: bool,
    ) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            highlighted,
        });
    }
    fn draw_quadratic_curve(
        &mut self,
        _x1: f32,
        _y1: f32,
        cx: f32,
        cy: f32,
        _x2: f32,
        _y2: f32,
        _stroke_width: f32,
        _color: Color,
        highlighted: bool,
    ) {
        self.ops.push(DrawOp::Curve { cx, cy, highlighted });
    }
}

fn circle_at(rec: &Recorder, i: usize) -> (f32, Option<Color>, bool) {
    match rec.ops[i] {
        DrawOp::Circle { x, fill, highlighted, .. } => (x, fill, highlighted),
        ref op => panic!("expected a circle at {}, got {:?}", i, op),
    }
}

#[test]
fn pass_clears_then_draws_edges_under_nodes() {
    let mut g = Graph::new();
    let a = g.add_node(0.0, 0.0);
    let b = g.add_node(100.0, 0.0);
    g.add_edge(a, b).unwrap();
    g.clear_selection();

    let mut rec = Recorder::default();
    g.draw(&mut rec, 0.0, 0.0);

    assert_eq!(rec.ops.len(), 4);
    assert_eq!(rec.ops[0], DrawOp::Clear);
    assert_eq!(
        rec.ops[1],
        DrawOp::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 100.0,
            y2: 0.0,
            color: Color::Black,
            highlighted: false,
        }
    );
    // Nodes draw after edges, filled.
    assert_eq!(circle_at(&rec, 2).1, Some(Color::Black));
    assert_eq!(circle_at(&rec, 3).1, Some(Color::Black));
}

#[test]
fn selected_items_are_highlighted() {
    let mut g = Graph::new();
    let a = g.add_node(0.0, 0.0);
    let b = g.add_node(100.0, 0.0);
    let e = g.add_edge(a, b).unwrap();
    g.clear_selection();
    g.select(Item::Node { id: a });
    g.select(Item::Edge { id: e });

    let mut rec = Recorder::default();
    g.draw(&mut rec, 0.0, 0.0);

    match rec.ops[1] {
        DrawOp::Line { highlighted, .. } => assert!(highlighted),
        ref op => panic!("expected the edge line, got {:?}", op),
    }
    let (x, _, highlighted) = circle_at(&rec, 2);
    assert_eq!(x, 0.0);
    assert!(highlighted);
    let (x, _, highlighted) = circle_at(&rec, 3);
    assert_eq!(x, 100.0);
    assert!(!highlighted);
}

#[test]
fn self_loops_draw_as_unfilled_circles() {
    let mut g = Graph::new();
    let n = g.add_node(200.0, 0.0);
    g.add_edge(n, n).unwrap();
    g.clear_selection();

    let mut rec = Recorder::default();
    g.draw(&mut rec, 0.0, 0.0);

    assert_eq!(
        rec.ops[1],
        DrawOp::Circle {
            x: 230.0,
            y: 0.0,
            radius: 30.0,
            fill: None,
            highlighted: false,
        }
    );
    // The node itself still draws on top, filled.
    let (x, fill, _) = circle_at(&rec, 2);
    assert_eq!(x, 200.0);
    assert!(fill.is_some());
}

#[test]
fn parallel_edges_draw_as_curves() {
    let mut g = Graph::new();
    let a = g.add_node(0.0, 0.0);
    let b = g.add_node(100.0, 0.0);
    g.add_edge(a, b).unwrap();
    g.add_edge(a, b).unwrap();
    g.clear_selection();

    let mut rec = Recorder::default();
    g.draw(&mut rec, 0.0, 0.0);

    assert_eq!(rec.ops[1], DrawOp::Curve { cx: 50.0, cy: 40.0, highlighted: false });
    assert_eq!(rec.ops[2], DrawOp::Curve { cx: 50.0, cy: -40.0, highlighted: false });
}

#[test]
fn editor_draw_anchors_loops_to_its_view_center() {
    let mut ed = Editor::new();
    ed.set_view_center(0.0, 0.0);
    ed.double_click(200.0, 0.0);
    // Alt-click the selected node: a self-loop.
    ed.pointer_down(200.0, 0.0, Modifiers { shift: false, alt: true });

    let mut rec = Recorder::default();
    ed.draw(&mut rec);

    let loop_circle = rec.ops.iter().any(|op| match *op {
        DrawOp::Circle { x, y, fill: None, .. } => x == 230.0 && y == 0.0,
        _ => false,
    });
    assert!(loop_circle, "expected the loop circle at (230, 0)");
}
