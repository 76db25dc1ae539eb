use crossbeam_channel::{Receiver, Sender, unbounded};
use nestview_core::{EdgeKind, VertexId, VertexKind};
use serde::{Deserialize, Serialize};

/// One element of the stream an analysis parser emits while building a graph.
///
/// Vertex events must name an already declared parent. Edge events may reference vertices
/// declared later in the stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphEvent {
    Vertex {
        id: VertexId,
        /// Containing vertex; `None` places the vertex in the top-level graph
        parent: Option<VertexId>,
        kind: VertexKind,
        label: String,
        /// Measured label size, if the parser knows it
        size: Option<(f32, f32)>,
    },
    Edge {
        source: VertexId,
        target: VertexId,
        kind: EdgeKind,
    },
}

impl GraphEvent {
    pub fn vertex(id: i64, parent: Option<i64>, kind: VertexKind, label: impl Into<String>) -> Self {
        GraphEvent::Vertex {
            id: VertexId(id),
            parent: parent.map(VertexId),
            kind,
            label: label.into(),
            size: None,
        }
    }

    pub fn edge(source: i64, target: i64) -> Self {
        GraphEvent::Edge {
            source: VertexId(source),
            target: VertexId(target),
            kind: EdgeKind::Regular,
        }
    }
}

/// Requests from the UI layer. A session applies them strictly one after another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // Expand / collapse
    Toggle { id: VertexId },
    SetExpanded { id: VertexId, expanded: bool },
    ExpandAll,
    CollapseAll,

    // Search and filter
    Search { query: String },
    ClearSearch,
    HideExcept { keep: Vec<VertexId> },
    ShowAll,

    // Hover
    HoverEnter { id: VertexId },
    HoverLeave { id: VertexId },
}

#[derive(Clone)]
pub struct EventBus {
    tx: Sender<Event>,
    rx: Receiver<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    pub fn receiver(&self) -> Receiver<Event> {
        self.rx.clone()
    }

    pub fn publish(&self, event: Event) {
        let _ = self.tx.send(event);
    }

    /// Dispatch all pending events to a listener, in the order they were published.
    pub fn dispatch_to<L: EventListener>(&self, listener: &mut L) -> usize {
        let mut count = 0;
        while let Ok(event) = self.rx.try_recv() {
            listener.handle_event(&event);
            count += 1;
        }
        if count > 0 {
            tracing::trace!("Dispatched {} events", count);
        }
        count
    }
}

/// Trait for components that respond to events.
/// Implement this to receive events from the EventBus.
pub trait EventListener {
    fn handle_event(&mut self, event: &Event);
}
