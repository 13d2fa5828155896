use crate::graph::VertexId;


#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Vertex id is outside `[0, vertex_count)`
    #[error("invalid vertex {vertex} (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: VertexId, vertex_count: usize },

    /// Cost requested for a pair that shares no edge
    #[error("no edge between {from} and {to}")]
    NoSuchEdge { from: VertexId, to: VertexId },

    /// Source vertex is outside the graph
    #[error("invalid source {vertex} (graph has {vertex_count} vertices)")]
    InvalidSource { vertex: VertexId, vertex_count: usize },

    /// Edge cost is negative or not a number
    #[error("invalid cost on edge {from} - {to}")]
    InvalidCost { from: VertexId, to: VertexId },
}


#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// Graph description does not follow the grammar
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}


impl From<GraphError> for InputError {
    fn from(error: GraphError) -> Self {
        InputError::MalformedInput(error.to_string())
    }
}
