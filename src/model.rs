use serde::{Deserialize, Serialize};

// Creation-time defaults; all three are mutable per item afterwards.
pub const NODE_RADIUS: f32 = 30.0;
pub const EDGE_RANGE: f32 = 10.0;
pub const EDGE_STROKE_WIDTH: f32 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Orange,
    Purple,
    Yellow,
}

// Fixed letter binding for the recolor key action.
pub fn color_for_key(key: char) -> Option<Color> {
    match key {
        'k' => Some(Color::Black),
        'r' => Some(Color::Red),
        'g' => Some(Color::Green),
        'b' => Some(Color::Blue),
        'o' => Some(Color::Orange),
        'p' => Some(Color::Purple),
        'y' => Some(Color::Yellow),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub id: u32,
    pub start: u32, // node ids; start == end is a self-loop
    pub end: u32,
    pub range: f32, // hit-test slack around the stroke (px)
    pub stroke_width: f32,
    pub color: Color,
}

impl Edge {
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }
}

// Selection/pick handle. Ids are unique across nodes and edges (one shared
// counter), so id equality is item identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Node { id: u32 },
    Edge { id: u32 },
}

impl Item {
    pub fn id(&self) -> u32 {
        match *self {
            Item::Node { id } | Item::Edge { id } => id,
        }
    }
}
