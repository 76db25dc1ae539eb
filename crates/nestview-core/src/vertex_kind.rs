use serde::{Deserialize, Serialize};

/// What a vertex represents, together with the data that kind carries.
///
/// The kind decides whether a vertex may own a sub-graph, whether the user may toggle it and
/// how it answers a search query. It never changes how the vertex is laid out or routed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VertexKind {
    /// Synthetic owner of the top-level graph.
    Root,
    Method {
        class_name: String,
        method_name: String,
    },
    /// A run of vertices merged into one path.
    Chain,
    Instruction {
        text: String,
        method_name: String,
        index: u32,
    },
    /// Node of a taint trace; may contain a sub-trace.
    Taint { method_names: Vec<String> },
    Error,
}

impl VertexKind {
    pub fn method(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self::Method {
            class_name: class_name.into(),
            method_name: method_name.into(),
        }
    }

    pub fn instruction(text: impl Into<String>, method_name: impl Into<String>, index: u32) -> Self {
        Self::Instruction {
            text: text.into(),
            method_name: method_name.into(),
            index,
        }
    }

    pub fn can_contain(&self) -> bool {
        matches!(
            self,
            VertexKind::Root | VertexKind::Method { .. } | VertexKind::Chain | VertexKind::Taint { .. }
        )
    }

    /// Containers other than the root can be expanded and collapsed.
    pub fn is_toggleable(&self) -> bool {
        self.can_contain() && !matches!(self, VertexKind::Root)
    }

    pub fn default_expanded(&self) -> bool {
        self.can_contain()
    }

    /// Whether this vertex matches a lowercase search needle on its own payload.
    ///
    /// Chains carry no payload; they match through their contents, which the graph model
    /// resolves.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        match self {
            VertexKind::Method { method_name, .. } => method_name.to_lowercase().contains(needle),
            VertexKind::Instruction {
                text, method_name, ..
            } => {
                method_name.to_lowercase().contains(needle) || text.to_lowercase().contains(needle)
            }
            VertexKind::Taint { method_names } => method_names
                .iter()
                .any(|name| name.to_lowercase().contains(needle)),
            VertexKind::Root | VertexKind::Chain | VertexKind::Error => false,
        }
    }
}
