use crate::errors::GraphError;
use crate::graph::{Graph, VertexId};
use super::shortest_path_tree::ShortestPathTree;

use std::fmt::Debug;
use num_traits::Zero;
use log::{debug, trace, warn};


/// Unvisited vertex reachable in one hop from a node already in the tree
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierCandidate<C> {
    pub vertex: VertexId,
    pub predecessor: VertexId,
    pub cost: C, // cost from the source through the predecessor
}


/// Link state shortest path tree construction
/// Grows the tree one vertex per round: every round rescans the whole tree,
/// asks each tree node for its cheapest unvisited neighbor and attaches the
/// cheapest of those answers.
/// Ties are broken differently at the two levels:
/// 1. Within one node's neighbors the later neighbor wins an equal cost
/// 2. Across tree nodes the first node in depth first order wins an equal cost
/// Both rules shape which predecessor ends up on a path, so the scan is kept
/// as is rather than replaced by a priority queue.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinkState {}

impl LinkState {

    /// Build the shortest path tree rooted at `source`
    /// Stops early if the frontier runs dry before every vertex is visited
    /// (disconnected graph): the tree then spans the source's component only.
    pub fn compute_tree<C>(&self, graph: &Graph<C>, source: VertexId) -> Result<ShortestPathTree<C>, GraphError>
    where
        C: Zero + PartialOrd + Copy + Debug,
    {
        if source >= graph.len() {
            return Err(GraphError::InvalidSource {
                vertex: source,
                vertex_count: graph.len(),
            });
        }

        let mut visited = vec![false; graph.len()];
        visited[source] = true;
        let mut unvisited = graph.len() - 1;

        let mut tree = ShortestPathTree::new(source);

        while unvisited > 0 {
            let Some(next) = self.closest_candidate(graph, &tree, &visited)? else {
                warn!("{unvisited} vertices unreachable from source {source}, graph is disconnected");
                break;
            };

            let parent_index = tree
                .index_of(next.predecessor)
                .ok_or(GraphError::InvalidVertex { vertex: next.predecessor, vertex_count: graph.len() })?;

            tree.attach(parent_index, next.vertex, next.cost)
                .ok_or(GraphError::InvalidVertex { vertex: next.vertex, vertex_count: graph.len() })?;
            visited[next.vertex] = true;
            unvisited -= 1;

            debug!("attached {} under {} at cost {:?}", next.vertex, next.predecessor, next.cost);
        }

        Ok(tree)
    }

    /// Cheapest candidate over the whole tree
    /// Tree nodes are asked in depth first order, the first minimum wins
    pub fn closest_candidate<C>(&self, graph: &Graph<C>, tree: &ShortestPathTree<C>, visited: &[bool]) -> Result<Option<FrontierCandidate<C>>, GraphError>
    where
        C: Zero + PartialOrd + Copy + Debug,
    {
        let mut closest: Option<FrontierCandidate<C>> = None;

        for index in tree.depth_first() {
            let Some((vertex, cost_to_source)) = tree.node_at(index) else {
                continue;
            };

            if let Some(candidate) = self.node_candidate(graph, vertex, cost_to_source, visited)? {
                trace!("candidate {:?}", candidate);
                // strict comparison: an equal cost found later does not replace
                if closest.is_none_or(|best| best.cost > candidate.cost) {
                    closest = Some(candidate);
                }
            }
        }

        Ok(closest)
    }

    /// Cheapest unvisited neighbor of a single tree node
    /// Neighbors are scanned in insertion order, the last minimum wins
    pub fn node_candidate<C>(&self, graph: &Graph<C>, vertex: VertexId, cost_to_source: C, visited: &[bool]) -> Result<Option<FrontierCandidate<C>>, GraphError>
    where
        C: Zero + PartialOrd + Copy + Debug,
    {
        let mut best: Option<FrontierCandidate<C>> = None;

        for (neighbor, edge_cost) in graph.vertex(vertex)?.links() {
            if visited.get(neighbor).copied().unwrap_or(true) {
                continue;
            }

            let cost = edge_cost + cost_to_source;
            // non-strict comparison: an equal cost found later replaces
            if best.is_none_or(|b| cost <= b.cost) {
                best = Some(FrontierCandidate {
                    vertex: neighbor,
                    predecessor: vertex,
                    cost,
                });
            }
        }

        Ok(best)
    }
}


/// Build the shortest path tree rooted at `source`
pub fn compute_tree<C>(graph: &Graph<C>, source: VertexId) -> Result<ShortestPathTree<C>, GraphError>
where
    C: Zero + PartialOrd + Copy + Debug,
{
    LinkState::default().compute_tree(graph, source)
}
