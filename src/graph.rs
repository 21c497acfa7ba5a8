//! The graph model: an immutable, undirected, weighted graph of named
//! vertices, built once through [`GraphBuilder`] and queried thereafter.
//!
//! Vertices and edges live in arenas owned by the graph and are addressed by
//! the stable handles [`VertexId`] and [`EdgeId`].  Adjacency is stored as an
//! index from vertex id to a list of `(neighbor, edge)` pairs, so neighbor
//! lookup is O(1) amortized and there is no cyclic ownership between
//! vertices and edges.  Traversal bookkeeping (visited sets and the like)
//! lives with each algorithm, never on the vertices, so independent callers
//! can traverse the same graph without interfering with each other.
//!
//! Enumeration order is insertion order everywhere.  The algorithms in this
//! crate lean on that: "the first vertex" seeds the Euler walk and the
//! spanning tree, and the independent-set tie-break prefers vertices that
//! appear earlier in the enumeration.

use std::collections::HashMap;
use std::fmt::{self, Debug};

use crate::error::GraphError;

/// Stable handle to a vertex of a [`Graph`].
///
/// Handles are only meaningful for the graph (or builder) that issued them;
/// a handle from an unrelated graph will panic or address an unrelated
/// vertex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Stable handle to an edge of a [`Graph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct VertexRecord {
    name: String,
}

#[derive(Clone, Debug)]
struct EdgeRecord {
    begin: VertexId,
    end: VertexId,
    weight: u32,
}

/// An immutable undirected graph.
///
/// Invariants, established by the builder:
/// - every edge's endpoints are registered vertices;
/// - no self-loops;
/// - at most one edge between any pair of vertices;
/// - the adjacency index is consistent with the edge arena.
///
/// All query methods are pure.  No algorithm in this crate mutates a graph;
/// the Euler finder works on a private copy of the edge set.
#[derive(Clone)]
pub struct Graph {
    vertices: Vec<VertexRecord>,
    edges: Vec<EdgeRecord>,
    by_name: HashMap<String, VertexId>,
    adjacency: Vec<Vec<(VertexId, EdgeId)>>,
}

impl Graph {
    /// Gets an iterator over all vertex handles in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Gets an iterator over all edge handles in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Looks a vertex up by name.
    pub fn get(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    /// Gets the name of a vertex.
    pub fn vertex_name(&self, id: VertexId) -> &str {
        &self.vertices[id.0].name
    }

    /// Gets an iterator over the `(neighbor, edge)` pairs incident to a
    /// vertex, in edge-insertion order.  Empty for an isolated vertex.
    pub fn connections(&self, v: VertexId) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.adjacency[v.0].iter().copied()
    }

    /// Gets the number of edges incident to a vertex.
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency[v.0].len()
    }

    /// Gets the edge between two vertices, if any.  Symmetric in its
    /// arguments.
    pub fn get_connection(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.adjacency[a.0]
            .iter()
            .find(|(neighbor, _)| *neighbor == b)
            .map(|(_, edge)| *edge)
    }

    /// Gets both endpoints of an edge, in the order they were passed to the
    /// builder.
    pub fn edge_ends(&self, e: EdgeId) -> (VertexId, VertexId) {
        let record = &self.edges[e.0];
        (record.begin, record.end)
    }

    pub fn edge_weight(&self, e: EdgeId) -> u32 {
        self.edges[e.0].weight
    }

    /// Given one endpoint of an edge, returns the other.  Panics if `v` is
    /// not an endpoint of `e`.
    pub fn other_end(&self, e: EdgeId, v: VertexId) -> VertexId {
        let (begin, end) = self.edge_ends(e);
        if v == begin {
            end
        } else if v == end {
            begin
        } else {
            panic!("{:?} is not an endpoint of {:?}", v, e);
        }
    }
}

impl Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = self
            .edges
            .iter()
            .map(|e| {
                format!(
                    "{} -- {} ({})",
                    self.vertices[e.begin.0].name, self.vertices[e.end.0].name, e.weight
                )
            })
            .collect::<Vec<_>>();
        f.debug_struct("Graph")
            .field(
                "vertices",
                &self.vertices.iter().map(|v| &v.name).collect::<Vec<_>>(),
            )
            .field("edges", &edges)
            .finish()
    }
}

/// Accumulates vertices and undirected weighted connections, then produces
/// an immutable [`Graph`].  Construction is the only mutating phase; the
/// builder is consumed by [`GraphBuilder::build`].
#[derive(Default)]
pub struct GraphBuilder {
    vertices: Vec<VertexRecord>,
    edges: Vec<EdgeRecord>,
    by_name: HashMap<String, VertexId>,
    adjacency: Vec<Vec<(VertexId, EdgeId)>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex and returns its handle.  Names are unique;
    /// re-adding an existing name is rejected rather than overwritten, so
    /// construction is deterministic.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId, GraphError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GraphError::DuplicateVertex(name));
        }
        let id = VertexId(self.vertices.len());
        self.by_name.insert(name.clone(), id);
        self.vertices.push(VertexRecord { name });
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Registers an undirected edge of weight 1 between two vertices.
    pub fn add_connection(&mut self, begin: VertexId, end: VertexId) -> Result<EdgeId, GraphError> {
        self.add_weighted_connection(begin, end, 1)
    }

    /// Registers an undirected weighted edge between two already-registered
    /// vertices, amending the adjacency of both endpoints.  Self-loops,
    /// unknown endpoints and already-connected pairs are rejected.
    pub fn add_weighted_connection(
        &mut self,
        begin: VertexId,
        end: VertexId,
        weight: u32,
    ) -> Result<EdgeId, GraphError> {
        if begin.0 >= self.vertices.len() || end.0 >= self.vertices.len() {
            return Err(self.invalid_edge(begin, end, "endpoint is not registered"));
        }
        if begin == end {
            return Err(self.invalid_edge(begin, end, "self-loops are not allowed"));
        }
        if self.adjacency[begin.0].iter().any(|(n, _)| *n == end) {
            return Err(self.invalid_edge(begin, end, "vertices are already connected"));
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeRecord { begin, end, weight });
        self.adjacency[begin.0].push((end, id));
        self.adjacency[end.0].push((begin, id));
        Ok(id)
    }

    /// Consumes the builder and produces the finished graph.
    pub fn build(self) -> Graph {
        Graph {
            vertices: self.vertices,
            edges: self.edges,
            by_name: self.by_name,
            adjacency: self.adjacency,
        }
    }

    fn invalid_edge(&self, begin: VertexId, end: VertexId, reason: &'static str) -> GraphError {
        GraphError::InvalidEdge {
            begin: self.label(begin),
            end: self.label(end),
            reason,
        }
    }

    fn label(&self, id: VertexId) -> String {
        self.vertices
            .get(id.0)
            .map(|v| v.name.clone())
            .unwrap_or_else(|| format!("#{}", id.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = GraphBuilder::new().build();
        assert!(graph.is_empty());
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.vertex_ids().count(), 0);
    }

    #[test]
    fn test_vertices_enumerate_in_insertion_order() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let b = builder.add_vertex("B").unwrap();
        let c = builder.add_vertex("C").unwrap();
        let graph = builder.build();
        assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(graph.vertex_name(b), "B");
        assert_eq!(graph.get("C"), Some(c));
        assert_eq!(graph.get("D"), None);
    }

    #[test]
    fn test_duplicate_vertex_is_rejected() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex("A").unwrap();
        assert_eq!(
            builder.add_vertex("A"),
            Err(GraphError::DuplicateVertex("A".to_string()))
        );
    }

    #[test]
    fn test_connections_and_degree() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let b = builder.add_vertex("B").unwrap();
        let c = builder.add_vertex("C").unwrap();
        let ab = builder.add_connection(a, b).unwrap();
        let ac = builder.add_weighted_connection(a, c, 7).unwrap();
        let graph = builder.build();

        assert_eq!(
            graph.connections(a).collect::<Vec<_>>(),
            vec![(b, ab), (c, ac)]
        );
        assert_eq!(graph.degree(a), 2);
        assert_eq!(graph.degree(b), 1);
        assert_eq!(graph.edge_weight(ab), 1);
        assert_eq!(graph.edge_weight(ac), 7);
        assert_eq!(graph.edge_ends(ab), (a, b));
    }

    #[test]
    fn test_get_connection_is_symmetric() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let b = builder.add_vertex("B").unwrap();
        let c = builder.add_vertex("C").unwrap();
        let ab = builder.add_connection(a, b).unwrap();
        let graph = builder.build();

        assert_eq!(graph.get_connection(a, b), Some(ab));
        assert_eq!(graph.get_connection(b, a), Some(ab));
        assert_eq!(graph.get_connection(a, c), None);
    }

    #[test]
    fn test_other_end() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let b = builder.add_vertex("B").unwrap();
        let ab = builder.add_connection(a, b).unwrap();
        let graph = builder.build();

        assert_eq!(graph.other_end(ab, a), b);
        assert_eq!(graph.other_end(ab, b), a);
    }

    #[test]
    fn test_self_loop_is_rejected() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        assert!(matches!(
            builder.add_connection(a, a),
            Err(GraphError::InvalidEdge { .. })
        ));
    }

    #[test]
    fn test_unknown_endpoint_is_rejected() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let stray = VertexId(42);
        assert!(matches!(
            builder.add_connection(a, stray),
            Err(GraphError::InvalidEdge { .. })
        ));
    }

    #[test]
    fn test_parallel_edge_is_rejected() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let b = builder.add_vertex("B").unwrap();
        builder.add_connection(a, b).unwrap();
        assert!(matches!(
            builder.add_connection(b, a),
            Err(GraphError::InvalidEdge { .. })
        ));
        let graph = builder.build();
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.degree(a), 1);
    }
}
