use crate::model::GraphModel;
use nestview_core::{EdgeId, Result, VertexId, VertexKind};
use std::collections::HashSet;

impl GraphModel {
    /// Highlight every vertex matching `query` (case-insensitive substring) and clear the
    /// highlight of every other vertex. Returns the matches in containment pre-order.
    ///
    /// A chain matches when anything inside it matches.
    pub fn highlight_matching(&mut self, query: &str) -> Vec<VertexId> {
        let needle = query.trim().to_lowercase();
        let order = self.descendants(self.root_index());

        // Children come after their container in pre-order, so walking it backwards
        // settles every child before its chain.
        let mut matched = vec![false; order.len()];
        let mut chain_hits = HashSet::new();
        for (slot, &idx) in order.iter().enumerate().rev() {
            let vertex = &self[idx];
            let hit = vertex.kind().matches(&needle)
                || (matches!(vertex.kind(), VertexKind::Chain) && chain_hits.contains(&idx));
            matched[slot] = hit;
            if hit {
                if let Some(parent_idx) = vertex.parent().and_then(|p| self.lookup(p).ok()) {
                    chain_hits.insert(parent_idx);
                }
            }
        }

        let mut found = Vec::new();
        for (&idx, hit) in order.iter().zip(matched) {
            self[idx].highlighted = hit;
            if hit {
                found.push(self[idx].id());
            }
        }
        tracing::debug!("Search {:?} matched {} vertices", query, found.len());
        found
    }

    pub fn clear_highlights(&mut self) {
        for idx in self.vertex_indices().collect::<Vec<_>>() {
            self[idx].highlighted = false;
        }
        for i in 0..self.edge_count() {
            self[EdgeId(i)].highlighted = false;
        }
    }

    pub fn highlighted_vertices(&self) -> Vec<VertexId> {
        self.vertices()
            .filter(|v| v.is_highlighted())
            .map(|v| v.id())
            .collect()
    }

    /// Set the highlight of every visible edge touching `id`, as a hover does.
    pub fn highlight_incident_edges(&mut self, id: VertexId, on: bool) -> Result<Vec<EdgeId>> {
        let idx = self.lookup(id)?;
        let incident: Vec<EdgeId> = self
            .edges()
            .filter(|e| e.is_visible() && (e.source() == idx || e.target() == idx))
            .map(|e| e.id())
            .collect();
        for &edge in &incident {
            self[edge].highlighted = on;
        }
        Ok(incident)
    }
}
