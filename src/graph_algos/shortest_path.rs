use super::{GraphNodeMap, NO_PARENT};

/// Construct the path from the source node to the goal node
/// Returns the ordered path as a vector of nodes from source to goal,
/// or None when the parent chain is broken
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Option<Vec<N>>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to source
    while current_index != NO_PARENT {
        let (node, &(parent_index, _)) = node_map.get_index(current_index)?;
        path.push(node.clone());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return None;
    }

    Some(path)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_reconstruction() {
        let mut node_map: GraphNodeMap<usize, u32> = GraphNodeMap::default();

        let a = node_map.insert_full(0, (NO_PARENT, 0)).0;
        let b = node_map.insert_full(3, (a, 1)).0;
        let c = node_map.insert_full(1, (a, 3)).0;
        let d = node_map.insert_full(2, (c, 4)).0;

        assert_eq!(shortest_path(&node_map, d), Some(vec![0, 1, 2]));
        assert_eq!(shortest_path(&node_map, b), Some(vec![0, 3]));
        assert_eq!(shortest_path(&node_map, a), Some(vec![0]));
    }

    #[test]
    fn test_path_reconstruction_bad_index() {
        let mut node_map: GraphNodeMap<usize, u32> = GraphNodeMap::default();
        node_map.insert(0, (NO_PARENT, 0));
        node_map.insert(1, (7, 2)); // dangling parent

        assert_eq!(shortest_path(&node_map, 1), None);
        assert_eq!(shortest_path(&node_map, 5), None);
    }
}
