//! Link state shortest path trees over small undirected weighted graphs
//!
//! ```
//! use linkstate::{Graph, compute_tree, report};
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 1u32).unwrap();
//! graph.add_edge(1, 2, 2u32).unwrap();
//!
//! let tree = compute_tree(&graph, 0).unwrap();
//! let paths = report(&tree, &graph);
//! assert_eq!(paths[1].path, vec![0, 1, 2]);
//! assert_eq!(paths[1].cost, 3);
//! ```

pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod input;
pub mod report;
pub mod session;
mod collections;

pub use errors::{GraphError, InputError};
pub use graph::{Graph, Vertex, VertexId};
pub use graph_algos::link_state::{FrontierCandidate, LinkState, compute_tree};
pub use graph_algos::shortest_path_tree::ShortestPathTree;
pub use report::{PathReport, report};
