//! Longest-simple-path search.

use std::collections::BinaryHeap;

use tracing::debug;

use crate::graph::Graph;
use crate::path::Path;

/// Finds a simple path with the maximum number of edges.
///
/// Best-first search over partial paths: the frontier starts with one
/// single-vertex path per vertex and always expands the longest known
/// partial path, extending it by every neighbor of its last vertex not
/// already on the path.  The ordering is a heuristic that surfaces long
/// paths early; the search is still exhaustive, so the result is a true
/// maximum.  Among several maximum-length paths, whichever the search
/// discovers first is returned.
///
/// A graph with no vertices yields the empty path; an edge-less graph
/// yields a trivial single-vertex path.  Worst-case cost is O(V!) — there
/// is no polynomial algorithm for this problem — so callers needing
/// bounded latency must cap the input size themselves.
pub fn longest_simple_path(graph: &Graph) -> Path {
    let Some(first) = graph.vertex_ids().next() else {
        return Path::empty();
    };

    let mut best = Path::new(first);
    let mut frontier: BinaryHeap<Path> = graph.vertex_ids().map(Path::new).collect();

    while let Some(current) = frontier.pop() {
        if current.len() > best.len() {
            best = current.clone();
        }
        let last = current.last().expect("frontier paths are never empty");
        for (neighbor, _) in graph.connections(last) {
            if !current.contains(neighbor) {
                frontier.push(current.extended(neighbor));
            }
        }
    }

    debug!(len = best.len(), "longest simple path found");
    best
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::graph::GraphBuilder;
    use crate::test_support::{assert_simple_path, is_simple_path, tree_diameter, ArbTree};

    #[test]
    fn test_empty_graph_yields_empty_path() {
        let graph = GraphBuilder::new().build();
        let path = longest_simple_path(&graph);
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
    }

    #[test]
    fn test_edgeless_graph_yields_trivial_path() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex("A").unwrap();
        builder.add_vertex("B").unwrap();
        let graph = builder.build();
        let path = longest_simple_path(&graph);
        assert_eq!(path.len(), 0);
        assert_eq!(path.vertices().len(), 1);
    }

    #[test]
    fn test_line_is_followed_end_to_end() {
        let mut builder = GraphBuilder::new();
        let ids: Vec<_> = (0..6)
            .map(|i| builder.add_vertex(format!("n{}", i)).unwrap())
            .collect();
        for pair in ids.windows(2) {
            builder.add_connection(pair[0], pair[1]).unwrap();
        }
        let graph = builder.build();

        let path = longest_simple_path(&graph);
        assert_eq!(path.len(), 5);
        assert_simple_path(&graph, &path);
    }

    #[test]
    fn test_cycle_drops_exactly_one_edge() {
        let n = 7;
        let mut builder = GraphBuilder::new();
        let ids: Vec<_> = (0..n)
            .map(|i| builder.add_vertex(format!("n{}", i)).unwrap())
            .collect();
        for i in 0..n {
            builder.add_connection(ids[i], ids[(i + 1) % n]).unwrap();
        }
        let graph = builder.build();

        let path = longest_simple_path(&graph);
        assert_eq!(path.len(), n - 1);
        assert_simple_path(&graph, &path);
    }

    #[test]
    fn test_branching_tree_picks_the_long_arm() {
        // Root with a short arm (1 edge) and two long arms (3 edges each);
        // the best path runs arm to arm through the root.
        let mut builder = GraphBuilder::new();
        let root = builder.add_vertex("root").unwrap();
        let short = builder.add_vertex("s0").unwrap();
        builder.add_connection(root, short).unwrap();
        for arm in 0..2 {
            let mut prev = root;
            for i in 0..3 {
                let v = builder.add_vertex(format!("a{}_{}", arm, i)).unwrap();
                builder.add_connection(prev, v).unwrap();
                prev = v;
            }
        }
        let graph = builder.build();

        let path = longest_simple_path(&graph);
        assert_eq!(path.len(), 6);
        assert_simple_path(&graph, &path);
    }

    #[test]
    fn test_disconnected_graph_searches_all_components() {
        // Short line first, longer line second; the answer lives in the
        // second component even though the first vertex is elsewhere.
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let b = builder.add_vertex("B").unwrap();
        builder.add_connection(a, b).unwrap();
        let ids: Vec<_> = (0..4)
            .map(|i| builder.add_vertex(format!("n{}", i)).unwrap())
            .collect();
        for pair in ids.windows(2) {
            builder.add_connection(pair[0], pair[1]).unwrap();
        }
        let graph = builder.build();

        let path = longest_simple_path(&graph);
        assert_eq!(path.len(), 3);
        assert_simple_path(&graph, &path);
    }

    #[quickcheck]
    fn prop_tree_longest_path_is_the_diameter(arb: ArbTree) -> bool {
        let graph = arb.0;
        let path = longest_simple_path(&graph);
        is_simple_path(&graph, &path) && path.len() == tree_diameter(&graph)
    }
}
