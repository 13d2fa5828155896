use crate::errors::GraphError;
use crate::collections::FxIndexMap;

use std::{cmp::Ordering, fmt::Debug};
use num_traits::Zero;


/// Dense vertex identifier in `[0, vertex_count)`
pub type VertexId = usize;


/// Hands out vertex ids in creation order, scoped to one graph build
#[derive(Debug, Default)]
struct VertexIdAllocator {
    next: VertexId,
}

impl VertexIdAllocator {
    fn allocate(&mut self) -> VertexId {
        let id = self.next;
        self.next += 1;
        id
    }
}


/// Graph vertex - owns the costs of its incident edges
#[derive(Clone, Debug)]
pub struct Vertex<C> {
    id: VertexId,
    neighbors: FxIndexMap<VertexId, C>, // neighbor -> edge cost, in insertion order
}

impl<C: Copy> Vertex<C> {

    fn new(id: VertexId) -> Self {
        Self {
            id,
            neighbors: FxIndexMap::default(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Neighbor ids in the order the edges were first added
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors.keys().copied()
    }

    /// Neighbor ids paired with the edge cost to reach them
    pub fn links(&self) -> impl Iterator<Item = (VertexId, C)> + '_ {
        self.neighbors.iter().map(|(&neighbor, &cost)| (neighbor, cost))
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}


/// Undirected weighted graph with a fixed vertex count
/// Edges live inside the vertices, no separate edge list is kept
#[derive(Clone, Debug)]
pub struct Graph<C> {
    vertices: Vec<Vertex<C>>,
}

impl<C> Graph<C>
where
    C: Zero + PartialOrd + Copy + Debug,
{

    /// Create `vertex_count` vertices with ids `0..vertex_count`
    pub fn new(vertex_count: usize) -> Self {
        let mut ids = VertexIdAllocator::default();
        let vertices = (0..vertex_count)
            .map(|_| Vertex::new(ids.allocate()))
            .collect();

        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex<C>] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex<C>, GraphError> {
        self.vertices.get(id).ok_or(GraphError::InvalidVertex {
            vertex: id,
            vertex_count: self.vertices.len(),
        })
    }

    fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex<C>, GraphError> {
        let vertex_count = self.vertices.len();
        self.vertices.get_mut(id).ok_or(GraphError::InvalidVertex {
            vertex: id,
            vertex_count,
        })
    }

    /// Add an undirected edge, a repeated pair overwrites the previous cost
    /// Self loops are stored as given, nothing here rejects them
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, cost: C) -> Result<(), GraphError> {
        // validate both ends before touching either vertex
        self.vertex(a)?;
        self.vertex(b)?;

        match cost.partial_cmp(&C::zero()) {
            Some(Ordering::Greater) | Some(Ordering::Equal) => {}
            _ => return Err(GraphError::InvalidCost { from: a, to: b }),
        }

        self.vertex_mut(a)?.neighbors.insert(b, cost);
        self.vertex_mut(b)?.neighbors.insert(a, cost);
        Ok(())
    }

    pub fn neighbors(&self, v: VertexId) -> Result<impl Iterator<Item = VertexId> + '_, GraphError> {
        Ok(self.vertex(v)?.neighbors())
    }

    pub fn edge_cost(&self, v: VertexId, neighbor: VertexId) -> Result<C, GraphError> {
        self.vertex(v)?
            .neighbors
            .get(&neighbor)
            .copied()
            .ok_or(GraphError::NoSuchEdge { from: v, to: neighbor })
    }
}
