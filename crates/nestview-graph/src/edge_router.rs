use crate::geometry::{QuadCurve, Rect, Vec2, arrowhead, back_angle, exit_point};
use crate::model::{GraphModel, LevelId};
use nestview_core::{EdgeId, EdgeStyle, RouterConfig, VertexId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EdgeShape {
    Line { start: Vec2, end: Vec2 },
    Curve(QuadCurve),
}

/// Drawable path of one edge, in the frame of the level holding the edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgePath {
    pub shape: EdgeShape,
    /// Tip first, then the two base corners
    pub arrowhead: [Vec2; 3],
}

impl EdgePath {
    pub fn start(&self) -> Vec2 {
        match self.shape {
            EdgeShape::Line { start, .. } => start,
            EdgeShape::Curve(curve) => curve.start,
        }
    }

    pub fn end(&self) -> Vec2 {
        match self.shape {
            EdgeShape::Line { end, .. } => end,
            EdgeShape::Curve(curve) => curve.end,
        }
    }

    pub fn translate(&self, offset: Vec2) -> EdgePath {
        let shape = match self.shape {
            EdgeShape::Line { start, end } => EdgeShape::Line {
                start: start.add(offset),
                end: end.add(offset),
            },
            EdgeShape::Curve(curve) => EdgeShape::Curve(QuadCurve {
                start: curve.start.add(offset),
                control: curve.control.add(offset),
                end: curve.end.add(offset),
            }),
        };
        EdgePath {
            shape,
            arrowhead: self.arrowhead.map(|p| p.add(offset)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutedEdge {
    pub edge: EdgeId,
    /// Vertex whose inner graph holds the edge
    pub level_owner: VertexId,
    /// Offset of that level's frame from the root frame
    pub origin: Vec2,
    pub path: EdgePath,
}

impl RoutedEdge {
    /// The path in the root frame.
    pub fn absolute_path(&self) -> EdgePath {
        self.path.translate(self.origin)
    }
}

/// Routes edges between the boundaries of laid-out sibling rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRouter {
    pub style: EdgeStyle,
    pub arrow_length: f32,
    pub arrow_angle_width: f32,
}

impl Default for EdgeRouter {
    fn default() -> Self {
        Self::from_config(&RouterConfig::default())
    }
}

impl EdgeRouter {
    pub fn from_config(config: &RouterConfig) -> Self {
        Self {
            style: config.style,
            arrow_length: config.arrow_length,
            arrow_angle_width: config.arrow_angle_width,
        }
    }

    /// Path from the boundary of `source` to the boundary of `target`.
    pub fn route_rects(&self, source: Rect, target: Rect) -> EdgePath {
        let start = exit_point(source, target);
        let end = exit_point(target, source);

        let (shape, orient) = match self.style {
            EdgeStyle::Straight => (EdgeShape::Line { start, end }, back_angle(start, end)),
            EdgeStyle::Curved => {
                let curve = QuadCurve::new(start, end);
                (EdgeShape::Curve(curve), curve.end_back_angle())
            }
        };

        EdgePath {
            shape,
            arrowhead: arrowhead(end, self.arrow_length, orient, self.arrow_angle_width),
        }
    }

    /// Route one edge in its level's frame.
    ///
    /// Dummy edges, hidden edges and edges touching a hidden or never laid out vertex have
    /// no path.
    pub fn route(&self, model: &GraphModel, id: EdgeId) -> Option<EdgePath> {
        let edge = model.edge(id)?;
        if !edge.kind().is_drawn() || !edge.is_visible() {
            return None;
        }
        let source = &model[edge.source()];
        let target = &model[edge.target()];
        if !(source.is_visible() && target.is_visible()) {
            return None;
        }
        if !(source.is_placed() && target.is_placed()) {
            tracing::trace!("Edge {} has an endpoint without geometry", id);
            return None;
        }
        Some(self.route_rects(source.rect(), target.rect()))
    }

    pub fn route_level(&self, model: &GraphModel, level: LevelId) -> Vec<RoutedEdge> {
        let owner = &model[model.level(level).owner()];
        if !(owner.is_visible() && owner.is_expanded()) {
            return Vec::new();
        }
        let origin = model.level_origin(level);
        model
            .visible_edges(level)
            .filter_map(|edge| {
                self.route(model, edge.id()).map(|path| RoutedEdge {
                    edge: edge.id(),
                    level_owner: owner.id(),
                    origin,
                    path,
                })
            })
            .collect()
    }

    /// Every drawable edge of the model, grouped by level in level order.
    pub fn route_all(&self, model: &GraphModel) -> Vec<RoutedEdge> {
        model
            .levels()
            .flat_map(|(level, _)| self.route_level(model, level))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::NestingLayouter;
    use crate::model::VertexSpec;
    use nestview_core::{EdgeKind, VertexKind};
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    fn leaf(id: i64) -> VertexSpec {
        VertexSpec::new(VertexId(id), VertexKind::instruction("nop", "Main.main", id as u32))
            .size(100.0, 50.0)
    }

    #[test]
    fn test_straight_edge_between_stacked_rects() {
        let router = EdgeRouter::default();
        let path = router.route_rects(rect(0.0, 0.0, 100.0, 50.0), rect(0.0, 100.0, 100.0, 50.0));

        assert_eq!(path.start(), Vec2::new(50.0, 50.0));
        assert_eq!(path.end(), Vec2::new(50.0, 100.0));
        assert_eq!(path.arrowhead[0], path.end());
        // The base of the arrow sits back along the edge, above the tip.
        assert!(path.arrowhead[1].y < 100.0);
        assert!(path.arrowhead[2].y < 100.0);
        assert!((path.arrowhead[1].distance(path.end()) - router.arrow_length).abs() < 1e-5);
    }

    #[test]
    fn test_curved_edge_uses_blended_control_point() {
        let router = EdgeRouter {
            style: EdgeStyle::Curved,
            ..EdgeRouter::default()
        };
        let path = router.route_rects(rect(0.0, 0.0, 10.0, 10.0), rect(30.0, 0.0, 10.0, 10.0));

        let EdgeShape::Curve(curve) = path.shape else {
            panic!("expected a curve, got {:?}", path.shape);
        };
        assert_eq!(curve.start, Vec2::new(10.0, 5.0));
        assert_eq!(curve.end, Vec2::new(30.0, 5.0));
        assert!((curve.control.x - 26.0).abs() < 1e-4);
        assert!((curve.control.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_route_skips_dummy_and_hidden_edges() {
        let mut model = GraphModel::new();
        for id in 1..=3 {
            model.add_vertex(VertexId::ROOT, leaf(id)).unwrap();
        }
        let drawn = model
            .add_edge(VertexId(1), VertexId(2), EdgeKind::Regular)
            .unwrap();
        let dummy = model
            .add_edge(VertexId(2), VertexId(3), EdgeKind::Dummy)
            .unwrap();
        let router = EdgeRouter::default();

        // Nothing is placed before the first layout.
        assert!(router.route(&model, drawn).is_none());

        NestingLayouter::default().layout(&mut model);
        assert!(router.route(&model, drawn).is_some());
        assert!(router.route(&model, dummy).is_none());

        let routed = router.route_all(&model);
        assert_eq!(routed.len(), 1);
        assert_eq!(routed[0].edge, drawn);
        assert_eq!(routed[0].level_owner, VertexId::ROOT);
        assert_eq!(routed[0].origin, Vec2::ZERO);

        model.set_hidden(VertexId(2)).unwrap();
        assert!(router.route(&model, drawn).is_none());
        assert!(router.route_all(&model).is_empty());
    }

    #[test]
    fn test_nested_edges_carry_level_origin() {
        let mut model = GraphModel::new();
        model
            .add_vertex(VertexId::ROOT, VertexSpec::new(VertexId(10), VertexKind::Chain))
            .unwrap();
        model.add_vertex(VertexId(10), leaf(1)).unwrap();
        model.add_vertex(VertexId(10), leaf(2)).unwrap();
        model
            .add_edge(VertexId(1), VertexId(2), EdgeKind::Regular)
            .unwrap();
        NestingLayouter::default().layout(&mut model);

        let routed = EdgeRouter::default().route_all(&model);
        assert_eq!(routed.len(), 1);
        assert_eq!(routed[0].level_owner, VertexId(10));
        assert_eq!(routed[0].origin, Vec2::new(0.25, 0.25));

        let absolute = routed[0].absolute_path();
        assert_eq!(absolute.start(), routed[0].path.start().add(Vec2::new(0.25, 0.25)));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            0.0f32..500.0,
            0.0f32..500.0,
            1.0f32..80.0,
            1.0f32..80.0,
        )
            .prop_map(|(x, y, w, h)| rect(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_route_endpoints_on_rect_boundaries(a in rect_strategy(), b in rect_strategy()) {
            let path = EdgeRouter::default().route_rects(a, b);
            prop_assert!(a.perimeter_distance(path.start()) < 1e-2);
            prop_assert!(b.perimeter_distance(path.end()) < 1e-2);
            prop_assert!(path.arrowhead.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
}
