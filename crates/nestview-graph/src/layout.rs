use crate::geometry::Vec2;
use crate::model::{GraphModel, VertexIndex};
use nestview_core::{LayoutConfig, VertexId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub trait Layouter {
    /// Compute geometry for every visible vertex without touching the model.
    fn execute(&self, model: &GraphModel) -> LayoutResult;
}

/// Geometry assigned to one vertex, relative to its container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec2,
    pub size: Vec2,
    pub subtree_size: Vec2,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub levels_laid_out: usize,
    pub vertices_placed: usize,
    /// Owners of levels that needed more than one traversal root
    pub disconnected_levels: Vec<VertexId>,
    /// Size of the root container
    pub bounds: Vec2,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    pub placements: HashMap<VertexIndex, Placement>,
    pub report: LayoutReport,
}

impl LayoutResult {
    /// Write the computed geometry into the model. Vertices without a placement keep
    /// whatever geometry they had.
    pub fn apply_to(&self, model: &mut GraphModel) {
        for (&idx, placement) in &self.placements {
            let vertex = &mut model[idx];
            vertex.position = placement.position;
            vertex.size = placement.size;
            vertex.subtree_size = placement.subtree_size;
            vertex.placed = true;
        }
    }
}

/// Layout for nested graphs: every level is drawn as a top-down tree grown from a
/// depth-first traversal of its edges, and every expanded container is sized to fit
/// the level it holds.
#[derive(Debug, Clone, Copy)]
pub struct NestingLayouter {
    /// Gap between a container border and its children
    pub margin_padding: f32,
    /// Gap between siblings of one traversal
    pub nodes_padding: f32,
    pub max_depth: u32,
    pub parallel: bool,
}

impl Default for NestingLayouter {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done,
}

/// Everything one container contributes to the final result.
#[derive(Default)]
struct LevelOutcome {
    size: Vec2,
    placements: Vec<(VertexIndex, Placement)>,
    levels: usize,
    disconnected: Vec<VertexId>,
}

/// Scratch state of one level's traversal.
struct LevelPass<'a> {
    model: &'a GraphModel,
    nodes_padding: f32,
    sizes: HashMap<VertexIndex, Vec2>,
    marks: HashMap<VertexIndex, Visit>,
    placed: Vec<(VertexIndex, Placement)>,
}

impl LevelPass<'_> {
    fn size_of(&self, v: VertexIndex) -> Vec2 {
        self.sizes
            .get(&v)
            .copied()
            .unwrap_or(self.model[v].intrinsic_size)
    }

    fn is_unvisited(&self, v: VertexIndex) -> bool {
        matches!(self.marks.get(&v), Some(Visit::Unvisited))
    }

    /// Start visiting `v`, whose subtree box has its top-left at (`left`, `top`).
    fn enter(&mut self, v: VertexIndex, left: f32, top: f32) -> VisitFrame {
        self.marks.insert(v, Visit::InProgress);
        let size = self.size_of(v);

        // Claim every unvisited successor before descending, so a vertex reachable from
        // two siblings hangs under the first one only.
        let mut claimed = Vec::new();
        for succ in self.model.visible_successors(v) {
            if self.is_unvisited(succ) {
                self.marks.insert(succ, Visit::InProgress);
                claimed.push(succ);
            }
        }

        VisitFrame {
            v,
            left,
            top,
            size,
            claimed,
            next_child: 0,
            current_width: 0.0,
            current_height: 0.0,
        }
    }

    /// Place the vertex of a frame whose children are all done and return its subtree box.
    fn finish(&mut self, frame: VisitFrame) -> Vec2 {
        let size = frame.size;
        let subtree = Vec2::new(
            size.x.max(frame.current_width - self.nodes_padding),
            if frame.claimed.is_empty() {
                size.y
            } else {
                self.nodes_padding + size.y + frame.current_height
            },
        );

        self.placed.push((
            frame.v,
            Placement {
                position: Vec2::new(frame.left + (subtree.x - size.x) / 2.0, frame.top),
                size,
                subtree_size: subtree,
            },
        ));
        self.marks.insert(frame.v, Visit::Done);
        subtree
    }

    /// Place the tree grown from `root` with the top-left of its box at (`left`, `top`) and
    /// return that box's size.
    ///
    /// Traversal depth lives on a heap stack, so long chains never grow the thread stack.
    fn visit(&mut self, root: VertexIndex, left: f32, top: f32) -> Vec2 {
        let mut stack = vec![self.enter(root, left, top)];
        while let Some(frame) = stack.last_mut() {
            if let Some(&child) = frame.claimed.get(frame.next_child) {
                frame.next_child += 1;
                let child_left = frame.left + frame.current_width;
                let child_top = frame.top + self.nodes_padding + frame.size.y;
                let child_frame = self.enter(child, child_left, child_top);
                stack.push(child_frame);
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let bbox = self.finish(done);
            match stack.last_mut() {
                Some(parent) => {
                    parent.current_width += bbox.x + self.nodes_padding;
                    parent.current_height = parent.current_height.max(bbox.y);
                }
                None => return bbox,
            }
        }
        Vec2::ZERO
    }
}

/// A vertex whose claimed successors are still being placed.
struct VisitFrame {
    v: VertexIndex,
    left: f32,
    top: f32,
    size: Vec2,
    claimed: Vec<VertexIndex>,
    next_child: usize,
    current_width: f32,
    current_height: f32,
}

impl NestingLayouter {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            margin_padding: config.margin_padding,
            nodes_padding: config.nodes_padding,
            max_depth: config.max_depth,
            parallel: config.parallel,
        }
    }

    /// Compute and apply in one step.
    pub fn layout(&self, model: &mut GraphModel) -> LayoutReport {
        let result = self.execute(model);
        result.apply_to(model);
        result.report
    }

    fn layout_container(&self, model: &GraphModel, owner: VertexIndex, depth: u32) -> LevelOutcome {
        let vertex = &model[owner];
        let intrinsic = LevelOutcome {
            size: vertex.intrinsic_size,
            ..Default::default()
        };

        let Some(level) = vertex.inner else {
            return intrinsic;
        };
        if !vertex.expanded {
            return intrinsic;
        }
        let visible: Vec<VertexIndex> = model
            .level(level)
            .vertices()
            .iter()
            .copied()
            .filter(|&idx| model[idx].visible)
            .collect();
        if visible.is_empty() {
            return intrinsic;
        }
        if depth > self.max_depth {
            tracing::warn!(
                "Maximum nesting depth ({}) exceeded at vertex {}, keeping intrinsic size",
                self.max_depth,
                vertex.id
            );
            return intrinsic;
        }

        // Inner graphs first, so every child knows its own size.
        let inner: Vec<LevelOutcome> = if self.parallel {
            visible
                .par_iter()
                .map(|&child| self.layout_container(model, child, depth + 1))
                .collect()
        } else {
            visible
                .iter()
                .map(|&child| self.layout_container(model, child, depth + 1))
                .collect()
        };

        let mut outcome = LevelOutcome::default();
        let mut sizes = HashMap::with_capacity(visible.len());
        for (&child, child_outcome) in visible.iter().zip(inner) {
            sizes.insert(child, child_outcome.size);
            outcome.placements.extend(child_outcome.placements);
            outcome.levels += child_outcome.levels;
            outcome.disconnected.extend(child_outcome.disconnected);
        }

        let mut pass = LevelPass {
            model,
            nodes_padding: self.nodes_padding,
            sizes,
            marks: visible.iter().map(|&idx| (idx, Visit::Unvisited)).collect(),
            placed: Vec::with_capacity(visible.len()),
        };

        let mut roots_by_id = visible.clone();
        roots_by_id.sort_by_key(|&idx| model[idx].id);

        let mut forests = 0usize;
        let mut left = self.margin_padding;
        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for root in roots_by_id {
            if !pass.is_unvisited(root) {
                continue;
            }
            if forests > 0 {
                left += self.nodes_padding;
                width += self.nodes_padding;
            }
            let bbox = pass.visit(root, left, self.margin_padding);
            left += bbox.x;
            width += bbox.x;
            height = height.max(bbox.y);
            forests += 1;
        }

        if forests > 1 {
            tracing::debug!(
                "Level of vertex {} is disconnected, laid out as {} trees",
                vertex.id,
                forests
            );
            outcome.disconnected.push(vertex.id);
        }

        outcome.placements.extend(pass.placed);
        outcome.levels += 1;
        outcome.size = Vec2::new(
            width + 2.0 * self.margin_padding,
            height + 2.0 * self.margin_padding,
        );
        outcome
    }
}

impl Layouter for NestingLayouter {
    fn execute(&self, model: &GraphModel) -> LayoutResult {
        let root = model.root_index();
        let outcome = self.layout_container(model, root, 0);

        let mut placements: HashMap<VertexIndex, Placement> =
            outcome.placements.into_iter().collect();
        placements.insert(
            root,
            Placement {
                position: Vec2::ZERO,
                size: outcome.size,
                subtree_size: outcome.size,
            },
        );

        let report = LayoutReport {
            levels_laid_out: outcome.levels,
            vertices_placed: placements.len() - 1,
            disconnected_levels: outcome.disconnected,
            bounds: outcome.size,
        };
        tracing::debug!(
            "Laid out {} levels, {} vertices, bounds {:?}",
            report.levels_laid_out,
            report.vertices_placed,
            report.bounds
        );
        LayoutResult { placements, report }
    }
}
