use crate::edge_router::{EdgeShape, RoutedEdge};
use crate::geometry::Vec2;
use crate::model::GraphModel;
use nestview_core::{EdgeId, VertexId};

/// Result of a hit test at a given position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitResult {
    None,
    /// The innermost visible vertex under the point.
    Vertex(VertexId),
    Edge(EdgeId),
}

#[derive(Debug, Clone, Copy)]
pub struct HitTester {
    /// Maximum distance from an edge path that still counts as a hit
    pub edge_tolerance: f32,
    /// Number of samples along curved edges for distance computation
    pub curve_samples: usize,
}

impl Default for HitTester {
    fn default() -> Self {
        Self {
            edge_tolerance: 0.1,
            curve_samples: 24,
        }
    }
}

fn segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b.sub(a);
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let ap = point.sub(a);
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    point.distance(Vec2::new(a.x + ab.x * t, a.y + ab.y * t))
}

impl HitTester {
    /// Deepest visible vertex whose rectangle, in the root frame, contains `point`.
    pub fn vertex_at(&self, model: &GraphModel, point: Vec2) -> Option<VertexId> {
        let mut level = model.root_level();
        let mut local = point;
        let mut found = None;

        loop {
            let hit = model
                .visible_vertices(level)
                .filter(|v| v.is_placed())
                .find(|v| v.rect().contains(local));
            let Some(vertex) = hit else {
                return found;
            };
            found = Some(vertex.id());
            match vertex.inner() {
                Some(inner) if vertex.is_expanded() => {
                    local = local.sub(vertex.position());
                    level = inner;
                }
                _ => return found,
            }
        }
    }

    fn edge_distance(&self, edge: &RoutedEdge, point: Vec2) -> f32 {
        let local = point.sub(edge.origin);
        match edge.path.shape {
            EdgeShape::Line { start, end } => segment_distance(local, start, end),
            EdgeShape::Curve(curve) => {
                let samples = self.curve_samples.max(1);
                let mut previous = curve.start;
                let mut best = f32::INFINITY;
                for i in 1..=samples {
                    let next = curve.sample(i as f32 / samples as f32);
                    best = best.min(segment_distance(local, previous, next));
                    previous = next;
                }
                best
            }
        }
    }

    /// Find the innermost thing under `point`.
    ///
    /// Inside a container, an edge drawn in its inner graph wins over the container itself,
    /// and any child vertex wins over both.
    pub fn hit_test(&self, model: &GraphModel, routes: &[RoutedEdge], point: Vec2) -> HitResult {
        let container = self.vertex_at(model, point);
        let owner = container.unwrap_or(VertexId::ROOT);
        let edge = routes
            .iter()
            .filter(|edge| edge.level_owner == owner)
            .map(|edge| (edge.edge, self.edge_distance(edge, point)))
            .filter(|&(_, distance)| distance <= self.edge_tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match (edge, container) {
            (Some((id, _)), _) => HitResult::Edge(id),
            (None, Some(id)) => HitResult::Vertex(id),
            (None, None) => HitResult::None,
        }
    }
}
