//! An in-memory undirected-graph engine and four classical graph
//! algorithms on top of it:
//!
//! - [`find_euler_loop`]: Eulerian-circuit discovery (Hierholzer);
//! - [`minimum_spanning_tree`]: spanning-tree extraction via shortest paths;
//! - [`largest_independent_vertex_set`]: maximum independent set on forests;
//! - [`longest_simple_path`]: exhaustive best-first longest-path search.
//!
//! Graphs are built once through [`GraphBuilder`] and immutable afterwards;
//! vertices are identified by unique names and addressed through stable
//! [`VertexId`] / [`EdgeId`] handles.  All operations are single-threaded
//! and synchronous, and the algorithms never mutate their input.
//!
//! ```
//! use walkabout::{GraphBuilder, find_euler_loop};
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex("A")?;
//! let b = builder.add_vertex("B")?;
//! let c = builder.add_vertex("C")?;
//! builder.add_connection(a, b)?;
//! builder.add_connection(b, c)?;
//! builder.add_connection(c, a)?;
//! let graph = builder.build();
//!
//! let circuit = find_euler_loop(&graph);
//! assert_eq!(circuit.len(), graph.num_edges());
//! # Ok::<(), walkabout::GraphError>(())
//! ```

pub mod error;
pub mod euler;
pub mod graph;
pub mod independent_set;
pub mod longest_path;
pub mod path;
pub mod search;
pub mod spanning_tree;

mod test_support;

pub use error::GraphError;
pub use euler::find_euler_loop;
pub use graph::{EdgeId, Graph, GraphBuilder, VertexId};
pub use independent_set::largest_independent_vertex_set;
pub use longest_path::longest_simple_path;
pub use path::Path;
pub use search::{component_roots, shortest_paths, DfsIterator, ShortestPathInfo};
pub use spanning_tree::minimum_spanning_tree;
