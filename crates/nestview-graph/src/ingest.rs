use crate::geometry::Vec2;
use crate::model::{GraphModel, VertexSpec};
use nestview_core::{EdgeKind, GraphError, VertexId};
use nestview_events::GraphEvent;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestReport {
    pub vertices_added: usize,
    pub edges_added: usize,
    /// Edges whose endpoints sat in different levels and were moved to a common one
    pub edges_lifted: usize,
    /// Lifted edges that coincided with an edge already present
    pub edges_merged: usize,
    /// Edges between a container and its own contents
    pub edges_skipped: usize,
    #[serde(skip)]
    pub errors: Vec<GraphError>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Builds a model from the event stream a parser emits.
///
/// Vertex events are applied as they arrive. Edge events are held until [`Ingestor::finish`]
/// because they may name vertices declared later in the stream. Bad events are reported and
/// skipped; they never stop ingestion.
#[derive(Debug, Default)]
pub struct Ingestor {
    pending_edges: Vec<(VertexId, VertexId, EdgeKind)>,
    report: IngestReport,
}

impl Ingestor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, model: &mut GraphModel, event: GraphEvent) {
        match event {
            GraphEvent::Vertex {
                id,
                parent,
                kind,
                label,
                size,
            } => {
                let mut spec = VertexSpec::new(id, kind).label(label);
                spec.size = size.map(|(w, h)| Vec2::new(w, h));
                match model.add_vertex(parent.unwrap_or(VertexId::ROOT), spec) {
                    Ok(_) => self.report.vertices_added += 1,
                    Err(err) => self.reject(err),
                }
            }
            GraphEvent::Edge {
                source,
                target,
                kind,
            } => self.pending_edges.push((source, target, kind)),
        }
    }

    pub fn extend(&mut self, model: &mut GraphModel, events: impl IntoIterator<Item = GraphEvent>) {
        for event in events {
            self.push(model, event);
        }
    }

    /// Resolve the buffered edges and hand back what happened.
    pub fn finish(mut self, model: &mut GraphModel) -> IngestReport {
        for (source, target, kind) in std::mem::take(&mut self.pending_edges) {
            let existing = model.edge_count();
            match model.add_lifted_edge(source, target, kind) {
                Ok(Some(id)) if id.0 >= existing => {
                    self.report.edges_added += 1;
                    let edge = &model[id];
                    if model[edge.source()].id() != source || model[edge.target()].id() != target {
                        self.report.edges_lifted += 1;
                    }
                }
                Ok(Some(_)) => self.report.edges_merged += 1,
                Ok(None) => self.report.edges_skipped += 1,
                Err(err) => self.reject(err),
            }
        }
        model.derive_visibility();

        tracing::debug!(
            "Ingested {} vertices and {} edges ({} lifted, {} rejected)",
            self.report.vertices_added,
            self.report.edges_added,
            self.report.edges_lifted,
            self.report.errors.len()
        );
        self.report
    }

    fn reject(&mut self, err: GraphError) {
        tracing::warn!("Dropping event: {}", err);
        self.report.errors.push(err);
    }
}

/// Build a fresh model from a complete event stream.
pub fn ingest(
    model: &mut GraphModel,
    events: impl IntoIterator<Item = GraphEvent>,
) -> IngestReport {
    let mut ingestor = Ingestor::new();
    ingestor.extend(model, events);
    ingestor.finish(model)
}
