//! Before/after description of a state change, for renderers that animate it.

use crate::geometry::Rect;
use crate::model::GraphModel;
use nestview_core::{EdgeId, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexState {
    /// Rectangle relative to the containing vertex
    pub rect: Rect,
    /// Rectangle in the root frame
    pub absolute: Rect,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexChange {
    pub id: VertexId,
    pub from: VertexState,
    pub to: VertexState,
}

impl VertexChange {
    pub fn moved(&self) -> bool {
        self.from.absolute != self.to.absolute
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeChange {
    pub id: EdgeId,
    pub from_visible: bool,
    pub to_visible: bool,
}

/// Geometry and visibility of every vertex and edge at one instant.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    vertices: Vec<(VertexId, VertexState)>,
    edges: Vec<bool>,
}

impl Frame {
    pub fn capture(model: &GraphModel) -> Self {
        let vertices = model
            .vertex_indices()
            .map(|idx| {
                let vertex = &model[idx];
                let rect = vertex.rect();
                let state = VertexState {
                    rect,
                    absolute: Rect::from_pos_size(model.absolute_origin(idx), rect.size()),
                    visible: vertex.is_visible(),
                };
                (vertex.id(), state)
            })
            .collect();
        let edges = model.edges().map(|e| e.is_visible()).collect();
        Self { vertices, edges }
    }
}

/// Everything that changed between two frames. Unchanged vertices and edges are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Container whose toggle caused the change, if any
    pub trigger: Option<VertexId>,
    pub vertices: Vec<VertexChange>,
    pub edges: Vec<EdgeChange>,
}

impl Transition {
    pub fn between(before: &Frame, after: &Frame, trigger: Option<VertexId>) -> Self {
        // Both frames come from the same model, and the model only ever grows.
        let vertices = before
            .vertices
            .iter()
            .zip(&after.vertices)
            .filter(|((_, from), (_, to))| from != to)
            .map(|(&(id, from), &(_, to))| VertexChange { id, from, to })
            .collect();
        let edges = before
            .edges
            .iter()
            .zip(&after.edges)
            .enumerate()
            .filter(|(_, (from, to))| from != to)
            .map(|(i, (&from_visible, &to_visible))| EdgeChange {
                id: EdgeId(i),
                from_visible,
                to_visible,
            })
            .collect();
        Self {
            trigger,
            vertices,
            edges,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    pub fn change_for(&self, id: VertexId) -> Option<&VertexChange> {
        self.vertices.iter().find(|c| c.id == id)
    }

    /// Edges that need a new path: their visibility changed, an endpoint moved, or the
    /// container holding them moved.
    pub fn affected_edges(&self, model: &GraphModel) -> Vec<EdgeId> {
        let moved: HashSet<VertexId> = self
            .vertices
            .iter()
            .filter(|c| c.moved() || c.from.visible != c.to.visible)
            .map(|c| c.id)
            .collect();
        let toggled: HashSet<EdgeId> =
            self.edges.iter().map(|c| c.id).collect();

        model
            .edges()
            .filter(|e| {
                toggled.contains(&e.id())
                    || moved.contains(&model[e.source()].id())
                    || moved.contains(&model[e.target()].id())
                    || moved.contains(&model[model.level(e.level()).owner()].id())
            })
            .map(|e| e.id())
            .collect()
    }
}
