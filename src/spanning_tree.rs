//! Spanning-tree extraction via the shortest-path primitive.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::{Graph, GraphBuilder, VertexId};
use crate::search::shortest_paths;

/// Builds a spanning tree of the graph as a new [`Graph`].
///
/// Runs [`shortest_paths`] from the first vertex and, for every vertex with
/// a predecessor, copies both endpoints (once each) and the connecting edge
/// with its *original* weight into a fresh builder.  A connected input with
/// V vertices therefore yields V vertices and V - 1 edges.  Empty or
/// edge-less input yields an empty graph; a disconnected input spans only
/// the component containing the first vertex.
///
/// Known limitation, kept on purpose: this is a shortest-path tree, which
/// coincides with a minimum spanning tree only when edge weights are
/// uniform (for unweighted input it degenerates to a BFS tree).  For
/// general weights the result may differ from a Kruskal/Prim tree.
pub fn minimum_spanning_tree(graph: &Graph) -> Graph {
    let mut builder = GraphBuilder::new();
    let Some(root) = graph.vertex_ids().next() else {
        return builder.build();
    };
    if graph.num_edges() == 0 {
        return builder.build();
    }

    debug!(root = graph.vertex_name(root), "building spanning tree");
    let info = shortest_paths(graph, root);
    let mut mapped: HashMap<VertexId, VertexId> = HashMap::new();

    for v in graph.vertex_ids() {
        let Some((parent, edge)) = info.get(&v).and_then(|i| i.prev) else {
            continue;
        };
        let new_parent = intern(&mut builder, &mut mapped, graph, parent);
        let new_v = intern(&mut builder, &mut mapped, graph, v);
        builder
            .add_weighted_connection(new_parent, new_v, graph.edge_weight(edge))
            .expect("predecessor edges are unique per vertex");
    }
    builder.build()
}

fn intern(
    builder: &mut GraphBuilder,
    mapped: &mut HashMap<VertexId, VertexId>,
    graph: &Graph,
    v: VertexId,
) -> VertexId {
    if let Some(&id) = mapped.get(&v) {
        return id;
    }
    let id = builder
        .add_vertex(graph.vertex_name(v))
        .expect("source vertex names are unique");
    mapped.insert(v, id);
    id
}
