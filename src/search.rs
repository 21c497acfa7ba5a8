//! Traversal primitives shared by the algorithm modules: an iterative
//! depth-first iterator, connected-component discovery, and single-source
//! shortest paths.

use std::collections::{HashMap, HashSet};

use pathfinding::prelude::dijkstra_all;

use crate::graph::{EdgeId, Graph, VertexId};

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Depth-first iterator over the vertices reachable from one or more start
/// vertices.  Uses an explicit stack, so traversal depth is not limited by
/// the call stack; visited state is local to the iterator.
pub struct DfsIterator<'g> {
    graph: &'g Graph,
    visited: HashSet<VertexId>,
    stack: Vec<VertexId>,
}

impl<'g> DfsIterator<'g> {
    pub fn new(graph: &'g Graph, start: Vec<VertexId>) -> Self {
        let mut stack = start;
        stack.reverse();
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack,
        }
    }
}

impl Iterator for DfsIterator<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vid) = self.stack.pop() {
            if self.visited.insert(vid) {
                let mut neighbors: Vec<_> =
                    self.graph.connections(vid).map(|(n, _)| n).collect();
                neighbors.reverse();
                self.stack.extend(neighbors);
                return Some(vid);
            }
        }
        None
    }
}

/// Gets the first-discovered vertex of every connected component, in
/// vertex-enumeration order.  One depth-first sweep over the whole vertex
/// set; the component count is `component_roots(g).len()`.
pub fn component_roots(graph: &Graph) -> Vec<VertexId> {
    let mut visited = HashSet::with_capacity(graph.num_vertices());
    let mut roots = Vec::new();
    for v in graph.vertex_ids() {
        if visited.contains(&v) {
            continue;
        }
        roots.push(v);
        visited.extend(DfsIterator::new(graph, vec![v]));
    }
    roots
}

/// Per-vertex result of [`shortest_paths`]: the distance from the source and
/// the `(predecessor, edge)` step on the best discovered path.  `prev` is
/// `None` exactly for the source; unreachable vertices do not appear in the
/// result map at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortestPathInfo {
    pub distance: u32,
    pub prev: Option<(VertexId, EdgeId)>,
}

/// Finds shortest paths from `start` to every reachable vertex using
/// Dijkstra's algorithm, treating edge weights as distances.
pub fn shortest_paths(graph: &Graph, start: VertexId) -> HashMap<VertexId, ShortestPathInfo> {
    let parents = dijkstra_all(&start, |&v| -> Vec<(VertexId, u32)> {
        graph
            .connections(v)
            .map(|(neighbor, edge)| (neighbor, graph.edge_weight(edge)))
            .collect()
    });

    let mut result = HashMap::with_capacity(parents.len() + 1);
    result.insert(
        start,
        ShortestPathInfo {
            distance: 0,
            prev: None,
        },
    );
    for (v, (parent, distance)) in parents {
        let edge = graph
            .get_connection(parent, v)
            .expect("predecessor steps follow existing edges");
        result.insert(
            v,
            ShortestPathInfo {
                distance,
                prev: Some((parent, edge)),
            },
        );
    }
    result
}
