pub mod link_state;
pub mod shortest_path_tree;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

/// Type alias for the node map backing the shortest path tree
/// N: Node - vertex on the graph
/// C: Cost of reaching the node from the source
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the source
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index stored for the root of a tree
pub(crate) const NO_PARENT: usize = usize::MAX;
