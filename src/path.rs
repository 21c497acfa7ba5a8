//! A simple path: an ordered sequence of vertices with no repetition.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::{self, Debug};

use crate::graph::{Graph, VertexId};

/// A simple path through a graph.  Grown one adjacent vertex at a time via
/// [`Path::extended`]; membership checks are O(1).
///
/// Paths order by edge count (then by vertex sequence, for a total order),
/// so a `BinaryHeap<Path>` pops the longest known path first.  Equality
/// compares the vertex sequence only.
#[derive(Clone)]
pub struct Path {
    vertices: Vec<VertexId>,
    members: HashSet<VertexId>,
}

impl Path {
    /// The empty path: no vertices, length 0.
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// A trivial path holding a single vertex.
    pub fn new(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            members: HashSet::from([start]),
        }
    }

    /// The ordered vertex sequence.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// The number of edges in the path.  Zero for empty and single-vertex
    /// paths.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// True if the path holds no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn first(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.members.contains(&v)
    }

    /// Returns a new path extended by one vertex.  The caller is responsible
    /// for picking a neighbor of the last vertex; repeating a vertex already
    /// on the path is a bug.
    pub fn extended(&self, next: VertexId) -> Self {
        debug_assert!(!self.contains(next), "path vertices must not repeat");
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.push(next);
        let mut members = self.members.clone();
        members.insert(next);
        Self { vertices, members }
    }

    /// Renders the path as vertex names for diagnostics.
    pub fn display(&self, graph: &Graph) -> String {
        self.vertices
            .iter()
            .map(|&v| graph.vertex_name(v))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Eq for Path {}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.vertices.cmp(&other.vertices))
    }
}

impl Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("vertices", &self.vertices)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn test_empty_path() {
        let path = Path::empty();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.first(), None);
        assert_eq!(path.last(), None);
    }

    #[test]
    fn test_single_vertex_path() {
        let v = VertexId(0);
        let path = Path::new(v);
        assert!(!path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.first(), Some(v));
        assert_eq!(path.last(), Some(v));
        assert!(path.contains(v));
    }

    #[test]
    fn test_extended_grows_by_one() {
        let path = Path::new(VertexId(0))
            .extended(VertexId(1))
            .extended(VertexId(2));
        assert_eq!(path.len(), 2);
        assert_eq!(
            path.vertices(),
            &[VertexId(0), VertexId(1), VertexId(2)]
        );
        assert!(path.contains(VertexId(1)));
        assert!(!path.contains(VertexId(3)));
    }

    #[test]
    fn test_extended_leaves_original_untouched() {
        let short = Path::new(VertexId(0));
        let long = short.extended(VertexId(1));
        assert_eq!(short.len(), 0);
        assert_eq!(long.len(), 1);
    }

    #[test]
    fn test_heap_pops_longest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Path::new(VertexId(0)));
        heap.push(Path::new(VertexId(1)).extended(VertexId(2)).extended(VertexId(3)));
        heap.push(Path::new(VertexId(4)).extended(VertexId(5)));
        assert_eq!(heap.pop().unwrap().len(), 2);
        assert_eq!(heap.pop().unwrap().len(), 1);
        assert_eq!(heap.pop().unwrap().len(), 0);
    }
}
