#![cfg(test)]
//! Shared assertion helpers, predicates and random generators for the
//! algorithm tests.

use std::collections::HashSet;

use quickcheck::{Arbitrary, Gen};

use crate::graph::{EdgeId, Graph, GraphBuilder, VertexId};
use crate::path::Path;
use crate::search::shortest_paths;

/// True if consecutive edges (including the wrap-around pair) share an
/// endpoint and no edge repeats.
pub fn is_closed_edge_walk(graph: &Graph, circuit: &[EdgeId]) -> bool {
    let distinct: HashSet<_> = circuit.iter().collect();
    if distinct.len() != circuit.len() {
        return false;
    }
    (0..circuit.len()).all(|i| {
        let next = circuit[(i + 1) % circuit.len()];
        edges_share_endpoint(graph, circuit[i], next)
    })
}

/// Panics unless `circuit` is a full Eulerian circuit of `graph`.
pub fn assert_euler_circuit(graph: &Graph, circuit: &[EdgeId]) {
    assert_eq!(
        circuit.len(),
        graph.num_edges(),
        "circuit must use every edge exactly once"
    );
    assert!(
        is_closed_edge_walk(graph, circuit),
        "circuit edges must chain into a closed walk"
    );
}

fn edges_share_endpoint(graph: &Graph, a: EdgeId, b: EdgeId) -> bool {
    let (a1, a2) = graph.edge_ends(a);
    let (b1, b2) = graph.edge_ends(b);
    a1 == b1 || a1 == b2 || a2 == b1 || a2 == b2
}

/// True if the path repeats no vertex and every consecutive pair is
/// connected in `graph`.
pub fn is_simple_path(graph: &Graph, path: &Path) -> bool {
    let vertices = path.vertices();
    let distinct: HashSet<_> = vertices.iter().collect();
    if distinct.len() != vertices.len() {
        return false;
    }
    vertices
        .windows(2)
        .all(|pair| graph.get_connection(pair[0], pair[1]).is_some())
}

pub fn assert_simple_path(graph: &Graph, path: &Path) {
    assert!(
        is_simple_path(graph, path),
        "not a simple path: {}",
        path.display(graph)
    );
}

/// True if no two members of `set` are adjacent in `graph`.
pub fn is_independent(graph: &Graph, set: &HashSet<VertexId>) -> bool {
    let members: Vec<_> = set.iter().copied().collect();
    members.iter().enumerate().all(|(i, &a)| {
        members[i + 1..]
            .iter()
            .all(|&b| graph.get_connection(a, b).is_none())
    })
}

pub fn assert_independent(graph: &Graph, set: &HashSet<VertexId>) {
    assert!(is_independent(graph, set), "set members are adjacent");
}

/// Maximum independent-set size by subset enumeration.  Only for small
/// graphs (at most ~16 vertices).
pub fn brute_force_independent_max(graph: &Graph) -> usize {
    let vertices: Vec<_> = graph.vertex_ids().collect();
    assert!(vertices.len() <= 16, "brute force is exponential");
    let mut best = 0;
    for mask in 0u32..(1 << vertices.len()) {
        let chosen: Vec<_> = vertices
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &v)| v)
            .collect();
        let independent = chosen.iter().enumerate().all(|(i, &a)| {
            chosen[i + 1..]
                .iter()
                .all(|&b| graph.get_connection(a, b).is_none())
        });
        if independent {
            best = best.max(chosen.len());
        }
    }
    best
}

/// Diameter (in edges) of a unit-weight tree, via the classic double sweep.
pub fn tree_diameter(graph: &Graph) -> usize {
    let first = graph.vertex_ids().next().expect("tree has a vertex");
    let sweep = shortest_paths(graph, first);
    let far = *sweep
        .iter()
        .max_by_key(|(_, info)| info.distance)
        .expect("sweep includes the start")
        .0;
    shortest_paths(graph, far)
        .values()
        .map(|info| info.distance as usize)
        .max()
        .unwrap_or(0)
}

fn add_vertices(builder: &mut GraphBuilder, n: usize) -> Vec<VertexId> {
    (0..n)
        .map(|i| {
            builder
                .add_vertex(format!("n{}", i))
                .expect("generated names are unique")
        })
        .collect()
}

/// An arbitrary small graph: random vertices and random edges, possibly
/// disconnected, possibly edge-less.
#[derive(Clone, Debug)]
pub struct ArbGraph(pub Graph);

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 9;
        let mut builder = GraphBuilder::new();
        let ids = add_vertices(&mut builder, num_vertices);
        if ids.len() >= 2 {
            for _ in 0..usize::arbitrary(g) % 14 {
                let a = ids[usize::arbitrary(g) % ids.len()];
                let b = ids[usize::arbitrary(g) % ids.len()];
                if a != b {
                    // Re-picking an existing pair is rejected; skip it.
                    let _ = builder.add_connection(a, b);
                }
            }
        }
        ArbGraph(builder.build())
    }
}

/// An arbitrary small connected graph with varied weights: a random
/// spanning tree plus extra edges.
#[derive(Clone, Debug)]
pub struct ArbConnectedGraph(pub Graph);

impl Arbitrary for ArbConnectedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = 1 + usize::arbitrary(g) % 8;
        let mut builder = GraphBuilder::new();
        let ids = add_vertices(&mut builder, num_vertices);
        for i in 1..ids.len() {
            let parent = ids[usize::arbitrary(g) % i];
            let weight = 1 + (u32::arbitrary(g) % 4);
            builder
                .add_weighted_connection(parent, ids[i], weight)
                .expect("tree edges are fresh pairs");
        }
        for _ in 0..usize::arbitrary(g) % (num_vertices + 1) {
            let a = ids[usize::arbitrary(g) % ids.len()];
            let b = ids[usize::arbitrary(g) % ids.len()];
            if a != b {
                let _ = builder.add_weighted_connection(a, b, 1 + (u32::arbitrary(g) % 4));
            }
        }
        ArbConnectedGraph(builder.build())
    }
}

/// An arbitrary forest of at most 12 vertices (small enough for brute
/// force): each vertex either starts a new component or attaches to an
/// earlier vertex.
#[derive(Clone, Debug)]
pub struct ArbForest(pub Graph);

impl Arbitrary for ArbForest {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 13;
        let mut builder = GraphBuilder::new();
        let ids = add_vertices(&mut builder, num_vertices);
        for i in 1..ids.len() {
            if usize::arbitrary(g) % 4 != 0 {
                let parent = ids[usize::arbitrary(g) % i];
                builder
                    .add_connection(parent, ids[i])
                    .expect("tree edges are fresh pairs");
            }
        }
        ArbForest(builder.build())
    }
}

/// An arbitrary unit-weight tree with at least one vertex.
#[derive(Clone, Debug)]
pub struct ArbTree(pub Graph);

impl Arbitrary for ArbTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = 1 + usize::arbitrary(g) % 9;
        let mut builder = GraphBuilder::new();
        let ids = add_vertices(&mut builder, num_vertices);
        for i in 1..ids.len() {
            let parent = ids[usize::arbitrary(g) % i];
            builder
                .add_connection(parent, ids[i])
                .expect("tree edges are fresh pairs");
        }
        ArbTree(builder.build())
    }
}
