//! Expand/collapse state and the visibility it implies.
//!
//! A vertex is visible exactly when every ancestor is visible and expanded and, while a
//! filter is installed, the filter allows it. Edges are visible when both endpoints are.
//! Every operation here re-derives the flags from the root, so the result never depends on
//! the order in which toggles happened.

use crate::model::{Filter, GraphModel, VertexIndex};
use nestview_core::{EdgeId, GraphError, Result, VertexId};
use std::collections::HashSet;

impl GraphModel {
    /// Check that `id` is a toggleable container with a non-empty inner graph.
    pub fn ensure_toggleable(&self, id: VertexId) -> Result<VertexIndex> {
        let idx = self.lookup(id)?;
        let vertex = &self[idx];
        let has_children = vertex
            .inner()
            .is_some_and(|level| !self.level(level).is_empty());
        if !vertex.kind().is_toggleable() || !has_children {
            return Err(GraphError::NotToggleable(id));
        }
        Ok(idx)
    }

    /// Set the expansion flag of a toggleable container and re-derive visibility.
    /// Returns whether anything changed.
    pub fn set_expanded_state(&mut self, id: VertexId, expanded: bool) -> Result<bool> {
        let idx = self.ensure_toggleable(id)?;
        if self[idx].expanded == expanded {
            return Ok(false);
        }
        self[idx].expanded = expanded;
        self.derive_visibility();
        Ok(true)
    }

    /// Set every toggleable container to `expanded` with a single re-derivation.
    /// Returns the number of containers that changed.
    pub fn set_all_expanded(&mut self, expanded: bool) -> usize {
        let targets: Vec<VertexIndex> = self
            .vertex_indices()
            .filter(|&idx| self.ensure_toggleable(self[idx].id()).is_ok())
            .filter(|&idx| self[idx].expanded != expanded)
            .collect();
        for &idx in &targets {
            self[idx].expanded = expanded;
        }
        if !targets.is_empty() {
            self.derive_visibility();
        }
        targets.len()
    }

    /// Recompute every vertex and edge visibility flag from the root down.
    pub fn derive_visibility(&mut self) {
        let filter = self.filter.take();
        let allowed = |id: VertexId| filter.as_ref().is_none_or(|f| f.reach.contains(&id));
        let opens = |id: VertexId| filter.as_ref().is_some_and(|f| f.keep.contains(&id));

        let root = self.root_index();
        // (vertex, parent shows its children, inside a kept subtree)
        let mut stack = vec![(root, true, filter.is_none())];
        while let Some((idx, shown, open)) = stack.pop() {
            let id = self[idx].id();
            let visible = idx == root || (shown && (open || allowed(id)));
            self[idx].visible = visible;

            let shows_children = visible && self[idx].expanded;
            let child_open = open || opens(id);
            if let Some(level) = self[idx].inner() {
                stack.extend(
                    self.level(level)
                        .vertices()
                        .iter()
                        .map(|&child| (child, shows_children, child_open)),
                );
            }
        }

        for i in 0..self.edge_count() {
            let edge = EdgeId(i);
            let (source, target) = (self[edge].source(), self[edge].target());
            let visible = self[source].visible && self[target].visible;
            self[edge].visible = visible;
        }
        self.filter = filter;
    }

    /// Hide every vertex that is neither in `keep` nor an ancestor of a kept vertex.
    ///
    /// Descendants of kept vertices follow their expansion state as usual. The filter stays
    /// installed until [`GraphModel::show_all`], so later toggles respect it.
    pub fn hide_except(&mut self, keep: &[VertexId]) -> Result<()> {
        let mut filter = Filter::default();
        for &id in keep {
            let mut current = Some(self.lookup(id)?);
            filter.keep.insert(id);
            while let Some(idx) = current {
                let vertex = &self[idx];
                if !filter.reach.insert(vertex.id()) {
                    break;
                }
                current = vertex.parent().and_then(|p| self.lookup(p).ok());
            }
        }
        tracing::debug!(
            "Filter keeps {} vertices, {} with ancestors",
            filter.keep.len(),
            filter.reach.len()
        );
        self.filter = Some(filter);
        self.derive_visibility();
        Ok(())
    }

    /// Drop any filter and derive visibility from expansion state alone.
    pub fn show_all(&mut self) {
        self.filter = None;
        self.derive_visibility();
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Ids of currently visible vertices, root excluded.
    pub fn visible_ids(&self) -> HashSet<VertexId> {
        self.vertices()
            .filter(|v| v.is_visible())
            .map(|v| v.id())
            .collect()
    }
}
