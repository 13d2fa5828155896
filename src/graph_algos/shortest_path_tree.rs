use crate::graph::VertexId;
use super::{GraphNodeMap, NO_PARENT, shortest_path};

use num_traits::Zero;


/// Shortest path tree rooted at the source vertex
/// Nodes are stored in attach order: index 0 is the root, every later node
/// points at its parent through the index of the parent in the node map.
/// Children are kept per node in attach order, which fixes the depth first
/// order used when scanning the frontier.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPathTree<C> {
    nodes: GraphNodeMap<VertexId, C>,
    children: Vec<Vec<usize>>,
}

impl<C: Zero + Copy> ShortestPathTree<C> {

    /// Tree holding only the root, at cost zero
    pub(crate) fn new(source: VertexId) -> Self {
        let mut nodes = GraphNodeMap::default();
        nodes.insert(source, (NO_PARENT, C::zero()));

        Self {
            nodes,
            children: vec![Vec::new()],
        }
    }

    /// Attach `vertex` under the node at `parent_index`
    /// Returns the index of the new node, or None if the vertex is already in the tree
    pub(crate) fn attach(&mut self, parent_index: usize, vertex: VertexId, cost: C) -> Option<usize> {
        if parent_index >= self.nodes.len() || self.nodes.contains_key(&vertex) {
            return None;
        }

        let (index, _) = self.nodes.insert_full(vertex, (parent_index, cost));
        self.children.push(Vec::new());
        self.children[parent_index].push(index);
        Some(index)
    }

    pub fn source(&self) -> VertexId {
        // the root is inserted on construction and never removed
        self.nodes.get_index(0).map(|(&vertex, _)| vertex).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.nodes.contains_key(&vertex)
    }

    pub(crate) fn index_of(&self, vertex: VertexId) -> Option<usize> {
        self.nodes.get_index_of(&vertex)
    }

    pub(crate) fn node_at(&self, index: usize) -> Option<(VertexId, C)> {
        self.nodes.get_index(index).map(|(&vertex, &(_, cost))| (vertex, cost))
    }

    /// Accumulated cost from the source
    pub fn cost(&self, vertex: VertexId) -> Option<C> {
        self.nodes.get(&vertex).map(|&(_, cost)| cost)
    }

    /// Predecessor of `vertex` on its path, None for the root and for absent vertices
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        let &(parent_index, _) = self.nodes.get(&vertex)?;
        self.nodes.get_index(parent_index).map(|(&parent, _)| parent)
    }

    /// Children of `vertex` in attach order
    pub fn children(&self, vertex: VertexId) -> Vec<VertexId> {
        self.index_of(vertex)
            .map(|index| {
                self.children[index]
                    .iter()
                    .filter_map(|&child| self.nodes.get_index(child).map(|(&v, _)| v))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Vertices in attach order, root first
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes.keys().copied()
    }

    /// Node indices in depth first pre-order, children visited in attach order
    pub(crate) fn depth_first(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![0];

        while let Some(index) = stack.pop() {
            order.push(index);
            // reversed so the first attached child is popped first
            stack.extend(self.children[index].iter().rev().copied());
        }

        order
    }

    /// Vertices in depth first pre-order
    pub fn depth_first_vertices(&self) -> Vec<VertexId> {
        self.depth_first()
            .into_iter()
            .filter_map(|index| self.node_at(index).map(|(vertex, _)| vertex))
            .collect()
    }

    /// Ordered vertices from the source to `vertex`, None if `vertex` is not in the tree
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        let goal_index = self.index_of(vertex)?;
        shortest_path(&self.nodes, goal_index)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ShortestPathTree<u32> {
        //      0
        //    /   \
        //   2     1
        //   |
        //   3
        let mut tree = ShortestPathTree::new(0);
        let two = tree.attach(0, 2, 1).unwrap();
        tree.attach(0, 1, 1).unwrap();
        tree.attach(two, 3, 2).unwrap();
        tree
    }

    #[test]
    fn test_new_tree_has_root_only() {
        let tree: ShortestPathTree<f32> = ShortestPathTree::new(4);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.source(), 4);
        assert_eq!(tree.cost(4), Some(0.0));
        assert_eq!(tree.parent(4), None);
        assert_eq!(tree.path_to(4), Some(vec![4]));
    }

    #[test]
    fn test_attach_links_parent_and_children() {
        let tree = sample_tree();

        assert_eq!(tree.parent(3), Some(2));
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.children(0), vec![2, 1]);
        assert_eq!(tree.children(3), Vec::<VertexId>::new());
        assert_eq!(tree.vertices().collect::<Vec<_>>(), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_attach_rejects_duplicates_and_bad_parent() {
        let mut tree = sample_tree();

        assert_eq!(tree.attach(0, 3, 9), None);
        assert_eq!(tree.attach(10, 5, 9), None);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_depth_first_order() {
        let tree = sample_tree();

        // root, then the subtree of 2 before its later sibling 1
        assert_eq!(tree.depth_first_vertices(), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_path_to() {
        let tree = sample_tree();

        assert_eq!(tree.path_to(3), Some(vec![0, 2, 3]));
        assert_eq!(tree.path_to(1), Some(vec![0, 1]));
        assert_eq!(tree.path_to(7), None);
        assert_eq!(tree.cost(3), Some(2));
        assert_eq!(tree.cost(7), None);
    }
}
