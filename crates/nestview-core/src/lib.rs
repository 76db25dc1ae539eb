use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod error;
pub mod vertex_kind;

pub use config::{ConfigError, EdgeStyle, LayoutConfig, RouterConfig, SessionConfig};
pub use error::{GraphError, Result};
pub use vertex_kind::VertexKind;

/// Identity of a vertex, stable for the lifetime of a session.
///
/// Ids coming from the analysis stream are non-negative. Negative ids are reserved for
/// vertices the model synthesizes itself, such as [`VertexId::ROOT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub i64);

impl VertexId {
    /// The synthetic root vertex that owns the top-level graph.
    pub const ROOT: VertexId = VertexId(-1);

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EdgeKind {
    /// A real control or data flow edge.
    #[default]
    Regular,
    /// Layout artifact that reserves a topological slot. Never drawn.
    Dummy,
}

impl EdgeKind {
    pub fn is_drawn(self) -> bool {
        matches!(self, EdgeKind::Regular)
    }
}
