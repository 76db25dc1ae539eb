use crate::edge_router::{EdgePath, RoutedEdge};
use crate::geometry::{Rect, Vec2};
use crate::model::GraphModel;
use nestview_core::{EdgeId, VertexId, VertexKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexView {
    pub id: VertexId,
    pub parent: Option<VertexId>,
    pub kind: VertexKind,
    pub label: String,
    /// Rectangle in the root frame
    pub rect: Rect,
    pub depth: usize,
    pub expanded: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    pub id: EdgeId,
    pub source: VertexId,
    pub target: VertexId,
    pub level_owner: VertexId,
    pub highlighted: bool,
    /// Path in the root frame
    pub path: EdgePath,
}

/// Everything a renderer needs to paint the current state, in the root frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub bounds: Vec2,
    /// Visible, laid-out vertices, containers before their contents
    pub vertices: Vec<VertexView>,
    pub edges: Vec<EdgeView>,
}

impl Snapshot {
    pub fn capture<'a>(model: &GraphModel, routes: impl IntoIterator<Item = &'a RoutedEdge>) -> Self {
        let mut vertices = Vec::new();
        let mut stack = vec![(model.root_level(), Vec2::ZERO, 0usize)];
        while let Some((level, origin, depth)) = stack.pop() {
            let mut nested = Vec::new();
            for vertex in model.visible_vertices(level).filter(|v| v.is_placed()) {
                let rect = vertex.rect().translate(origin);
                vertices.push(VertexView {
                    id: vertex.id(),
                    parent: vertex.parent(),
                    kind: vertex.kind().clone(),
                    label: vertex.label().to_string(),
                    rect,
                    depth,
                    expanded: vertex.is_expanded(),
                    highlighted: vertex.is_highlighted(),
                });
                if let Some(inner) = vertex.inner().filter(|_| vertex.is_expanded()) {
                    nested.push((inner, rect.min, depth + 1));
                }
            }
            stack.extend(nested.into_iter().rev());
        }

        let edges = routes
            .into_iter()
            .filter_map(|routed| {
                let edge = model.edge(routed.edge)?;
                Some(EdgeView {
                    id: routed.edge,
                    source: model[edge.source()].id(),
                    target: model[edge.target()].id(),
                    level_owner: routed.level_owner,
                    highlighted: edge.is_highlighted(),
                    path: routed.absolute_path(),
                })
            })
            .collect();

        Self {
            bounds: model.root().size(),
            vertices,
            edges,
        }
    }

    pub fn vertex(&self, id: VertexId) -> Option<&VertexView> {
        self.vertices.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge_router::EdgeRouter;
    use crate::layout::NestingLayouter;
    use crate::model::VertexSpec;
    use nestview_core::EdgeKind;

    #[test]
    fn test_snapshot_uses_root_frame() {
        let mut model = GraphModel::new();
        model
            .add_vertex(VertexId::ROOT, VertexSpec::new(VertexId(10), VertexKind::Chain))
            .unwrap();
        for id in [1, 2] {
            model
                .add_vertex(
                    VertexId(10),
                    VertexSpec::new(VertexId(id), VertexKind::instruction("nop", "Main.main", 0))
                        .size(2.0, 1.0),
                )
                .unwrap();
        }
        model
            .add_edge(VertexId(1), VertexId(2), EdgeKind::Regular)
            .unwrap();
        NestingLayouter::default().layout(&mut model);
        let routes = EdgeRouter::default().route_all(&model);

        let snapshot = Snapshot::capture(&model, &routes);

        let ids: Vec<_> = snapshot.vertices.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![VertexId(10), VertexId(1), VertexId(2)]);
        assert_eq!(snapshot.vertex(VertexId(1)).unwrap().rect.min, Vec2::new(0.5, 0.5));
        assert_eq!(snapshot.vertex(VertexId(1)).unwrap().depth, 1);
        assert_eq!(snapshot.edges.len(), 1);
        assert_eq!(snapshot.edges[0].path.start(), Vec2::new(1.5, 1.5));
        assert_eq!(snapshot.bounds, model.root().size());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["vertices"][0]["kind"]["type"], "Chain");
    }
}
