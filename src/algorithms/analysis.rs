use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::model::Item;
use crate::Graph;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bipartiteness {
    Unknown,
    Yes,
    No,
}

impl Bipartiteness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bipartiteness::Unknown => "unknown",
            Bipartiteness::Yes => "yes",
            Bipartiteness::No => "no",
        }
    }
}

// Sum over all edges of endpoints owned by selected nodes. Start and end
// count separately, so a self-loop on a selected node contributes 2.
pub fn selected_degree_impl(g: &Graph) -> u32 {
    let picked: HashSet<u32> = g
        .selected
        .iter()
        .filter_map(|it| match *it {
            Item::Node { id } => Some(id),
            Item::Edge { .. } => None,
        })
        .collect();
    let mut sum = 0u32;
    for e in &g.edges {
        if picked.contains(&e.start) {
            sum += 1;
        }
        if picked.contains(&e.end) {
            sum += 1;
        }
    }
    sum
}

// Two-coloring by BFS from the first edge's start node, over undirected
// adjacency. Yes requires the colored set to span every node: a
// disconnected graph reports No even when the reached component is
// two-colorable. Zero edges is Unknown.
pub fn bipartiteness_impl(g: &Graph) -> Bipartiteness {
    let root = match g.edges.first() {
        Some(e) => e.start,
        None => return Bipartiteness::Unknown,
    };
    let mut adjacency: HashMap<u32, Vec<u32>> = HashMap::new();
    for e in &g.edges {
        adjacency.entry(e.start).or_default().push(e.end);
        adjacency.entry(e.end).or_default().push(e.start);
    }
    let mut side: HashMap<u32, bool> = HashMap::new();
    let mut queue = VecDeque::new();
    side.insert(root, false);
    queue.push_back(root);
    while let Some(id) = queue.pop_front() {
        let here = side[&id];
        if let Some(next) = adjacency.get(&id) {
            for &other in next {
                match side.get(&other) {
                    Some(&s) if s == here => return Bipartiteness::No,
                    Some(_) => {}
                    None => {
                        side.insert(other, !here);
                        queue.push_back(other);
                    }
                }
            }
        }
    }
    if side.len() == g.nodes.len() {
        Bipartiteness::Yes
    } else {
        Bipartiteness::No
    }
}
