//! Error types shared by the graph builder and the algorithms.

/// Errors raised by graph construction and by algorithms with input
/// preconditions.  All of these represent programmer or input errors, not
/// transient conditions; none are retried.  Algorithms given empty or
/// edge-less graphs do not error, they return the documented trivial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex with this name is already registered.
    #[error("vertex {0:?} is already in the graph")]
    DuplicateVertex(String),

    /// The requested connection is not allowed: a self-loop, an endpoint
    /// that is not registered with this builder, or a pair of vertices that
    /// is already connected.
    #[error("edge {begin} -- {end} rejected: {reason}")]
    InvalidEdge {
        begin: String,
        end: String,
        reason: &'static str,
    },

    /// The independent-set solver requires an acyclic input.
    #[error("graph contains a cycle where a forest is required")]
    NotAForest,
}
