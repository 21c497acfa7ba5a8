//! Eulerian-circuit discovery.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::graph::{EdgeId, Graph, VertexId};

/// Finds an Eulerian circuit: a closed walk using every edge exactly once.
///
/// A circuit exists iff the graph is non-empty and every vertex has even
/// degree; if the precondition fails, or there are no vertices or no edges,
/// the result is an empty sequence.  That is the documented "no circuit"
/// answer, not an error.  Connectivity is not checked: on a disconnected
/// graph with all-even degrees the walk covers only the component of the
/// first vertex.
///
/// The sequence is assembled in pop order, so it is reversed relative to
/// the direction the walk was traced.  Consecutive edges still share an
/// endpoint, and the first and last edges share one too, so the result is a
/// closed walk either way; reverse it if strict trace order matters.
///
/// Hierholzer's algorithm with an explicit vertex stack; the graph itself
/// is never mutated, only a transient copy of its edge set is consumed.
/// O(V + E) amortized.
pub fn find_euler_loop(graph: &Graph) -> Vec<EdgeId> {
    if graph.num_vertices() == 0 || graph.num_edges() == 0 {
        return Vec::new();
    }
    if graph.vertex_ids().any(|v| graph.degree(v) % 2 != 0) {
        debug!("odd-degree vertex present; no Euler circuit");
        return Vec::new();
    }

    let mut remaining: HashSet<EdgeId> = graph.edge_ids().collect();
    let mut stack: Vec<VertexId> = vec![graph
        .vertex_ids()
        .next()
        .expect("graph has at least one vertex")];
    let mut circuit = Vec::with_capacity(graph.num_edges());

    while let Some(&current) = stack.last() {
        let unused = graph
            .connections(current)
            .find(|(_, edge)| remaining.contains(edge));
        match unused {
            Some((neighbor, edge)) => {
                trace!(?current, ?neighbor, ?edge, "following unused edge");
                remaining.remove(&edge);
                stack.push(neighbor);
            }
            None => {
                stack.pop();
                if let Some(&top) = stack.last() {
                    let edge = graph
                        .get_connection(current, top)
                        .expect("adjacent stack vertices are connected");
                    circuit.push(edge);
                }
            }
        }
    }

    debug!(edges = circuit.len(), "Euler circuit found");
    circuit
}
