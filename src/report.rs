use crate::graph::{Graph, VertexId};
use crate::graph_algos::shortest_path_tree::ShortestPathTree;

use std::fmt::{self, Debug, Display};
use num_traits::Zero;
use log::warn;


/// Path and cost from the source to one vertex
#[derive(Clone, Debug, PartialEq)]
pub struct PathReport<C> {
    pub vertex: VertexId,
    pub path: Vec<VertexId>, // source first, `vertex` last; empty when unreachable
    pub cost: C,
}

impl<C> PathReport<C> {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// `shortest path to node 3 is 0->1->2->3 with cost 4.0`
/// Cost uses Debug formatting so whole floats keep their fractional part
impl<C: Debug> Display for PathReport<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shortest path to node {} is ", self.vertex)?;
        for (i, vertex) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, " with cost {:?}", self.cost)
    }
}


/// One report per vertex of `graph` except the source, in ascending vertex id order
/// A vertex missing from the tree (disconnected graph) gets an empty path at cost zero
pub fn report<C>(tree: &ShortestPathTree<C>, graph: &Graph<C>) -> Vec<PathReport<C>>
where
    C: Zero + PartialOrd + Copy + Debug,
{
    let source = tree.source();

    graph
        .vertices()
        .iter()
        .map(|vertex| vertex.id())
        .filter(|&vertex| vertex != source)
        .map(|vertex| match (tree.path_to(vertex), tree.cost(vertex)) {
            (Some(path), Some(cost)) => PathReport { vertex, path, cost },
            _ => {
                warn!("vertex {vertex} is not reachable from source {source}");
                PathReport { vertex, path: Vec::new(), cost: C::zero() }
            }
        })
        .collect()
}
