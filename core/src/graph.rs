use crate::registry::{Artist, ArtistSnapshot};
use crate::source::Mbid;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbid: Option<Mbid>,
    pub listened: bool,
    pub relatedness_count: u32,
    /// Distinct incident edges
    pub degree: usize,
}

/// Undirected edge between two node names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    /// Adjacency entries collapsed into this edge. A bidirectional link
    /// contributes one entry from each side.
    pub weight: u32,
}

impl GraphEdge {
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ArtistGraph {
    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }

    pub fn listened_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.listened).count()
    }

    pub fn related_count(&self) -> usize {
        self.nodes.len() - self.listened_count()
    }
}

/// Projects a snapshot into nodes and edges.
///
/// Neighbor names missing from the snapshot were pruned and are skipped.
/// With `prune_enabled` an edge is only drawn towards a neighbor that was
/// listened or has more than one neighbor entry of its own, and related-only
/// nodes left without edges are dropped afterwards. Listened artists always
/// stay. Parallel and reverse entries for the same pair collapse into one
/// edge; self links are ignored.
pub fn build(snapshot: &ArtistSnapshot, prune_enabled: bool) -> ArtistGraph {
    let mut edges: Vec<GraphEdge> = Vec::new();
    let mut edge_slots: FxHashMap<(&str, &str), usize> = FxHashMap::default();
    let mut skipped_dangling = 0usize;

    for artist in snapshot.iter() {
        for neighbor_name in &artist.neighbors {
            let Some(neighbor) = snapshot.get(neighbor_name) else {
                skipped_dangling += 1;
                continue;
            };

            if neighbor.name == artist.name {
                continue;
            }

            if prune_enabled && !is_admissible_neighbor(neighbor) {
                continue;
            }

            let key = pair_key(&artist.name, &neighbor.name);
            match edge_slots.entry(key) {
                Entry::Occupied(slot) => edges[*slot.get()].weight += 1,
                Entry::Vacant(slot) => {
                    slot.insert(edges.len());
                    edges.push(GraphEdge {
                        source: artist.name.clone(),
                        target: neighbor.name.clone(),
                        weight: 1,
                    });
                }
            }
        }
    }

    let degrees = count_degrees(&edges);
    let nodes: Vec<GraphNode> = snapshot
        .iter()
        .map(|artist| to_node(artist, degrees.get(artist.name.as_str()).copied().unwrap_or(0)))
        .filter(|node| !prune_enabled || node.listened || node.degree > 0)
        .collect();

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        skipped_dangling,
        prune_enabled,
        "assembled artist graph"
    );

    ArtistGraph { nodes, edges }
}

fn is_admissible_neighbor(neighbor: &Artist) -> bool {
    neighbor.listened || neighbor.neighbors.len() > 1
}

fn pair_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

fn count_degrees(edges: &[GraphEdge]) -> FxHashMap<&str, usize> {
    let mut degrees: FxHashMap<&str, usize> = FxHashMap::default();
    for edge in edges {
        *degrees.entry(edge.source.as_str()).or_default() += 1;
        *degrees.entry(edge.target.as_str()).or_default() += 1;
    }
    degrees
}

fn to_node(artist: &Artist, degree: usize) -> GraphNode {
    GraphNode {
        name: artist.name.clone(),
        mbid: artist.external_id.clone(),
        listened: artist.listened,
        relatedness_count: artist.relatedness_count,
        degree,
    }
}
