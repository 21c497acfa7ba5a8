//! Maximum independent set on forests via tree dynamic programming.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::GraphError;
use crate::graph::{Graph, VertexId};
use crate::search::component_roots;

/// Finds the largest set of mutually non-adjacent vertices in a forest.
///
/// The input must be acyclic; a cycle yields [`GraphError::NotAForest`].
/// Empty or edge-less graphs yield an empty set.  Each connected component
/// is rooted at its first-discovered vertex and solved by tree DP: for a
/// vertex `v`, either skip `v` and take the best sets of its children, or
/// take `v` together with the best sets of its grandchildren.  The larger
/// candidate wins; on a tie the candidate containing `v` is kept, so among
/// equal-size maxima the result favors vertices that appear earlier in the
/// vertex enumeration (components are visited in that order).  Results are
/// memoized per vertex, and the answer is the union over all component
/// roots.
pub fn largest_independent_vertex_set(graph: &Graph) -> Result<HashSet<VertexId>, GraphError> {
    if graph.num_vertices() == 0 || graph.num_edges() == 0 {
        return Ok(HashSet::new());
    }

    let roots = component_roots(graph);
    // With self-loops and parallel edges excluded by the builder, the graph
    // is acyclic iff every component is a tree: |E| = |V| - #components.
    if graph.num_edges() != graph.num_vertices() - roots.len() {
        return Err(GraphError::NotAForest);
    }
    debug!(components = roots.len(), "solving independent set on forest");

    let mut memo: HashMap<VertexId, HashSet<VertexId>> = HashMap::new();
    let mut result = HashSet::new();
    for root in roots {
        result.extend(best_set(graph, &mut memo, None, root));
    }
    Ok(result)
}

/// The best independent set for the subtree rooted at `v`, entered from
/// `parent` (or from nowhere, for a component root).
fn best_set(
    graph: &Graph,
    memo: &mut HashMap<VertexId, HashSet<VertexId>>,
    parent: Option<VertexId>,
    v: VertexId,
) -> HashSet<VertexId> {
    if let Some(cached) = memo.get(&v) {
        return cached.clone();
    }

    let with_children = children_union(graph, memo, parent, v);

    let mut with_grandchildren = HashSet::from([v]);
    for (child, _) in graph.connections(v) {
        if Some(child) == parent {
            continue;
        }
        with_grandchildren.extend(children_union(graph, memo, Some(v), child));
    }

    // Take v unless skipping it is strictly better.
    let chosen = if with_children.len() > with_grandchildren.len() {
        with_children
    } else {
        with_grandchildren
    };
    memo.insert(v, chosen.clone());
    chosen
}

/// Union of the best sets of `v`'s children, excluding the edge back to
/// `parent`.  Subtrees of a tree are disjoint, so the union never loses
/// elements to overlap.
fn children_union(
    graph: &Graph,
    memo: &mut HashMap<VertexId, HashSet<VertexId>>,
    parent: Option<VertexId>,
    v: VertexId,
) -> HashSet<VertexId> {
    let mut union = HashSet::new();
    for (child, _) in graph.connections(v) {
        if Some(child) == parent {
            continue;
        }
        union.extend(best_set(graph, memo, Some(v), child));
    }
    union
}
