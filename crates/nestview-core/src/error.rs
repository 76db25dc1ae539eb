use crate::VertexId;
use thiserror::Error;

/// Failures reported by graph model and state machine operations.
///
/// Every error is scoped to the offending vertex or edge: a rejected operation leaves the
/// rest of the model, including previously computed geometry, untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex id {0} is already present")]
    DuplicateId(VertexId),
    #[error("Unknown vertex: {0}")]
    UnknownVertex(VertexId),
    #[error("Edge {src} -> {dst} connects vertices on different levels")]
    CrossLevelEdge { src: VertexId, dst: VertexId },
    #[error("Vertex {0} cannot contain other vertices")]
    NotAContainer(VertexId),
    #[error("Vertex {0} cannot be expanded or collapsed")]
    NotToggleable(VertexId),
}

pub type Result<T> = std::result::Result<T, GraphError>;
