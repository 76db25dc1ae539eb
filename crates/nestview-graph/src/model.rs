use crate::geometry::{Rect, Vec2};
use nestview_core::{EdgeId, EdgeKind, GraphError, LayoutConfig, Result, VertexId, VertexKind};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexIndex(pub usize);

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One graph of the containment hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LevelId(pub usize);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    pub(crate) id: VertexId,
    pub(crate) kind: VertexKind,
    pub(crate) label: String,

    // Geometry, written only by the layout engine
    pub(crate) position: Vec2,
    pub(crate) size: Vec2,
    pub(crate) intrinsic_size: Vec2,
    pub(crate) subtree_size: Vec2,
    pub(crate) placed: bool,

    // Hierarchy
    pub(crate) parent: Option<VertexId>,
    pub(crate) level: Option<LevelId>,
    pub(crate) inner: Option<LevelId>,

    // State, written only by the visibility state machine
    pub(crate) expanded: bool,
    pub(crate) visible: bool,
    pub(crate) highlighted: bool,
}

impl Vertex {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn kind(&self) -> &VertexKind {
        &self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Top-left corner, relative to the containing vertex.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Size the vertex takes when it shows no children.
    pub fn intrinsic_size(&self) -> Vec2 {
        self.intrinsic_size
    }

    /// Box covering the vertex and the adjacency subtree hanging below it in its level.
    pub fn subtree_size(&self) -> Vec2 {
        self.subtree_size
    }

    /// Whether a layout pass has assigned geometry to this vertex.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    pub fn parent(&self) -> Option<VertexId> {
        self.parent
    }

    pub fn level(&self) -> Option<LevelId> {
        self.level
    }

    pub fn inner(&self) -> Option<LevelId> {
        self.inner
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub(crate) id: EdgeId,
    pub(crate) source: VertexIndex,
    pub(crate) target: VertexIndex,
    pub(crate) kind: EdgeKind,
    pub(crate) level: LevelId,
    pub(crate) visible: bool,
    pub(crate) highlighted: bool,
}

impl Edge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> VertexIndex {
        self.source
    }

    pub fn target(&self) -> VertexIndex {
        self.target
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn level(&self) -> LevelId {
        self.level
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// Vertices and edges directly held by one container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    owner: VertexIndex,
    vertices: Vec<VertexIndex>,
    edges: Vec<EdgeId>,
    outgoing: HashMap<VertexIndex, Vec<EdgeId>>,
}

impl Level {
    fn new(owner: VertexIndex) -> Self {
        Self {
            owner,
            vertices: Vec::new(),
            edges: Vec::new(),
            outgoing: HashMap::new(),
        }
    }

    pub fn owner(&self) -> VertexIndex {
        self.owner
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[VertexIndex] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Outgoing edges of `vertex` in insertion order.
    pub fn outgoing(&self, vertex: VertexIndex) -> &[EdgeId] {
        self.outgoing.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Description of a vertex to insert.
#[derive(Debug, Clone)]
pub struct VertexSpec {
    pub id: VertexId,
    pub kind: VertexKind,
    pub label: String,
    pub size: Option<Vec2>,
}

impl VertexSpec {
    pub fn new(id: VertexId, kind: VertexKind) -> Self {
        Self {
            id,
            kind,
            label: String::new(),
            size: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Vec2::new(width, height));
        self
    }
}

/// Keep-set installed by a filter, with the ancestors that must stay visible to reach it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Filter {
    pub(crate) keep: HashSet<VertexId>,
    pub(crate) reach: HashSet<VertexId>,
}

/// Arena holding the whole containment hierarchy of one session.
///
/// Vertices, edges and levels live in vectors and refer to each other by index, so the
/// hierarchy has no ownership cycles and can be cloned or serialized as plain data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphModel {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    levels: Vec<Level>,
    index: HashMap<VertexId, VertexIndex>,
    default_size: Vec2,
    pub(crate) filter: Option<Filter>,
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphModel {
    pub fn new() -> Self {
        Self::with_config(&LayoutConfig::default())
    }

    pub fn with_config(config: &LayoutConfig) -> Self {
        let root = Vertex {
            id: VertexId::ROOT,
            kind: VertexKind::Root,
            label: String::new(),
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            intrinsic_size: Vec2::ZERO,
            subtree_size: Vec2::ZERO,
            placed: false,
            parent: None,
            level: None,
            inner: Some(LevelId(0)),
            expanded: true,
            visible: true,
            highlighted: false,
        };
        let mut index = HashMap::new();
        index.insert(VertexId::ROOT, VertexIndex(0));
        Self {
            vertices: vec![root],
            edges: Vec::new(),
            levels: vec![Level::new(VertexIndex(0))],
            index,
            default_size: Vec2::new(config.default_vertex_width, config.default_vertex_height),
            filter: None,
        }
    }

    pub fn root(&self) -> &Vertex {
        &self.vertices[0]
    }

    pub fn root_index(&self) -> VertexIndex {
        VertexIndex(0)
    }

    /// The top-level graph.
    pub fn root_level(&self) -> LevelId {
        LevelId(0)
    }

    /// Number of vertices, the synthetic root excluded.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert a vertex into the inner graph of `parent` (`VertexId::ROOT` for the top level).
    ///
    /// The vertex starts visible exactly when its parent currently shows its children.
    pub fn add_vertex(&mut self, parent: VertexId, spec: VertexSpec) -> Result<VertexIndex> {
        if self.index.contains_key(&spec.id) {
            return Err(GraphError::DuplicateId(spec.id));
        }
        let parent_idx = self.lookup(parent)?;
        let parent_vertex = &self.vertices[parent_idx.0];
        let Some(level) = parent_vertex.inner else {
            return Err(GraphError::NotAContainer(parent));
        };
        let visible = parent_vertex.visible && parent_vertex.expanded;

        let idx = VertexIndex(self.vertices.len());
        let inner = if spec.kind.can_contain() {
            let inner = LevelId(self.levels.len());
            self.levels.push(Level::new(idx));
            Some(inner)
        } else {
            None
        };
        let size = spec.size.unwrap_or(self.default_size);

        self.vertices.push(Vertex {
            id: spec.id,
            expanded: spec.kind.default_expanded(),
            kind: spec.kind,
            label: spec.label,
            position: Vec2::ZERO,
            size,
            intrinsic_size: size,
            subtree_size: size,
            placed: false,
            parent: Some(parent),
            level: Some(level),
            inner,
            visible,
            highlighted: false,
        });
        self.index.insert(spec.id, idx);
        self.levels[level.0].vertices.push(idx);
        Ok(idx)
    }

    /// Insert an edge between two siblings of one level.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, kind: EdgeKind) -> Result<EdgeId> {
        let src = self.lookup(source)?;
        let dst = self.lookup(target)?;
        let level = match (self.vertices[src.0].level, self.vertices[dst.0].level) {
            (Some(a), Some(b)) if a == b => a,
            _ => {
                return Err(GraphError::CrossLevelEdge {
                    src: source,
                    dst: target,
                });
            }
        };
        Ok(self.push_edge(src, dst, kind, level))
    }

    /// Insert an edge whose endpoints may sit at different depths.
    ///
    /// Each endpoint is replaced by its ancestor inside the nearest level that contains both.
    /// Returns `Ok(None)` when one endpoint contains the other, since such an edge has no
    /// sibling representation. A lifted edge that already exists is not added twice.
    pub fn add_lifted_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        kind: EdgeKind,
    ) -> Result<Option<EdgeId>> {
        let src = self.lookup(source)?;
        let dst = self.lookup(target)?;
        if self.vertices[src.0].level.is_some()
            && self.vertices[src.0].level == self.vertices[dst.0].level
        {
            return self.add_edge(source, target, kind).map(Some);
        }

        let src_chain = self.ancestry(src);
        let dst_chain = self.ancestry(dst);
        let shared = src_chain
            .iter()
            .zip(&dst_chain)
            .take_while(|(a, b)| a == b)
            .count();
        let (Some(&lifted_src), Some(&lifted_dst)) = (src_chain.get(shared), dst_chain.get(shared))
        else {
            tracing::debug!(
                "Skipping edge {} -> {}: one endpoint contains the other",
                source,
                target
            );
            return Ok(None);
        };

        let level = self.vertices[lifted_src.0]
            .level
            .ok_or(GraphError::UnknownVertex(source))?;
        let existing = self.levels[level.0]
            .outgoing(lifted_src)
            .iter()
            .copied()
            .find(|&e| self.edges[e.0].target == lifted_dst && self.edges[e.0].kind == kind);
        if let Some(existing) = existing {
            return Ok(Some(existing));
        }
        Ok(Some(self.push_edge(lifted_src, lifted_dst, kind, level)))
    }

    fn push_edge(&mut self, src: VertexIndex, dst: VertexIndex, kind: EdgeKind, level: LevelId) -> EdgeId {
        let id = EdgeId(self.edges.len());
        let visible = self.vertices[src.0].visible && self.vertices[dst.0].visible;
        self.edges.push(Edge {
            id,
            source: src,
            target: dst,
            kind,
            level,
            visible,
            highlighted: false,
        });
        let level = &mut self.levels[level.0];
        level.edges.push(id);
        level.outgoing.entry(src).or_default().push(id);
        id
    }

    /// Path from the root down to `idx`, both included.
    fn ancestry(&self, idx: VertexIndex) -> Vec<VertexIndex> {
        let mut chain = vec![idx];
        let mut current = idx;
        while let Some(parent) = self.vertices[current.0].parent {
            let Some(&parent_idx) = self.index.get(&parent) else {
                break;
            };
            chain.push(parent_idx);
            current = parent_idx;
        }
        chain.reverse();
        chain
    }

    pub fn lookup(&self, id: VertexId) -> Result<VertexIndex> {
        self.index
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownVertex(id))
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.index.get(&id).map(|&idx| &self.vertices[idx.0])
    }

    pub fn level(&self, level: LevelId) -> &Level {
        &self.levels[level.0]
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// All vertices except the synthetic root, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter().skip(1)
    }

    pub fn vertex_indices(&self) -> impl Iterator<Item = VertexIndex> {
        (1..self.vertices.len()).map(VertexIndex)
    }

    pub fn levels(&self) -> impl Iterator<Item = (LevelId, &Level)> {
        self.levels
            .iter()
            .enumerate()
            .map(|(i, level)| (LevelId(i), level))
    }

    /// Direct children of `id` in insertion order.
    pub fn children(&self, id: VertexId) -> Result<impl Iterator<Item = &Vertex>> {
        let idx = self.lookup(id)?;
        let vertices = self.vertices[idx.0]
            .inner
            .map(|level| self.levels[level.0].vertices.as_slice())
            .unwrap_or(&[]);
        Ok(vertices.iter().map(|&child| &self.vertices[child.0]))
    }

    /// Visible vertices of a level, reflecting the flags at the time of iteration.
    pub fn visible_vertices(&self, level: LevelId) -> impl Iterator<Item = &Vertex> + '_ {
        self.levels[level.0]
            .vertices
            .iter()
            .map(|&idx| &self.vertices[idx.0])
            .filter(|v| v.visible)
    }

    /// Visible edges of a level whose endpoints are both visible.
    pub fn visible_edges(&self, level: LevelId) -> impl Iterator<Item = &Edge> + '_ {
        self.levels[level.0]
            .edges
            .iter()
            .map(|&id| &self.edges[id.0])
            .filter(|e| self.edge_shown(e))
    }

    /// Visible targets of `vertex`'s outgoing edges, dummy edges included, in edge order.
    pub fn visible_successors(&self, vertex: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        let outgoing = self.vertices[vertex.0]
            .level
            .map(|level| self.levels[level.0].outgoing(vertex))
            .unwrap_or(&[]);
        outgoing
            .iter()
            .map(|&id| &self.edges[id.0])
            .filter(|e| self.edge_shown(e))
            .map(|e| e.target)
    }

    fn edge_shown(&self, edge: &Edge) -> bool {
        edge.visible && self.vertices[edge.source.0].visible && self.vertices[edge.target.0].visible
    }

    /// Hide one vertex. Nothing else changes; the next visibility derivation may undo it.
    pub fn set_hidden(&mut self, id: VertexId) -> Result<()> {
        let idx = self.lookup(id)?;
        self.vertices[idx.0].visible = false;
        Ok(())
    }

    /// Show one vertex. Nothing else changes; the next visibility derivation may undo it.
    pub fn set_visible(&mut self, id: VertexId) -> Result<()> {
        let idx = self.lookup(id)?;
        self.vertices[idx.0].visible = true;
        Ok(())
    }

    pub fn is_expanded(&self, id: VertexId) -> Result<bool> {
        let idx = self.lookup(id)?;
        Ok(self.vertices[idx.0].expanded)
    }

    /// Rectangle in the frame of the containing vertex.
    pub fn rect(&self, id: VertexId) -> Option<Rect> {
        self.vertex(id).map(Vertex::rect)
    }

    /// Offset of a vertex's own frame (its top-left corner) from the root frame.
    pub fn absolute_origin(&self, idx: VertexIndex) -> Vec2 {
        let mut origin = Vec2::ZERO;
        let mut current = Some(idx);
        while let Some(c) = current {
            let vertex = &self.vertices[c.0];
            origin = origin.add(vertex.position);
            current = vertex.parent.and_then(|p| self.index.get(&p).copied());
        }
        origin
    }

    /// Offset of a level's frame from the root frame.
    pub fn level_origin(&self, level: LevelId) -> Vec2 {
        self.absolute_origin(self.levels[level.0].owner)
    }

    /// Rectangle in the root frame.
    pub fn absolute_rect(&self, id: VertexId) -> Option<Rect> {
        let idx = self.index.get(&id).copied()?;
        let size = self.vertices[idx.0].size;
        Some(Rect::from_pos_size(self.absolute_origin(idx), size))
    }

    /// All vertices inside `idx`'s inner graph, recursively, in pre-order.
    pub fn descendants(&self, idx: VertexIndex) -> Vec<VertexIndex> {
        let mut out = Vec::new();
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if let Some(level) = self.vertices[current.0].inner {
                for &child in self.levels[level.0].vertices.iter().rev() {
                    stack.push(child);
                }
            }
            if current != idx {
                out.push(current);
            }
        }
        out
    }
}

impl Index<VertexIndex> for GraphModel {
    type Output = Vertex;
    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index.0]
    }
}

impl IndexMut<VertexIndex> for GraphModel {
    fn index_mut(&mut self, index: VertexIndex) -> &mut Self::Output {
        &mut self.vertices[index.0]
    }
}

impl Index<EdgeId> for GraphModel {
    type Output = Edge;
    fn index(&self, index: EdgeId) -> &Self::Output {
        &self.edges[index.0]
    }
}

impl IndexMut<EdgeId> for GraphModel {
    fn index_mut(&mut self, index: EdgeId) -> &mut Self::Output {
        &mut self.edges[index.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(id: i64) -> VertexSpec {
        VertexSpec::new(VertexId(id), VertexKind::method("Main", format!("m{}", id)))
    }

    fn leaf(id: i64) -> VertexSpec {
        VertexSpec::new(
            VertexId(id),
            VertexKind::instruction(format!("i{}", id), "Main.main", id as u32),
        )
    }

    #[test]
    fn test_graph_model() {
        let mut model = GraphModel::new();
        model.add_vertex(VertexId::ROOT, method(1)).unwrap();
        model.add_vertex(VertexId(1), leaf(2)).unwrap();
        model.add_vertex(VertexId(1), leaf(3)).unwrap();
        model
            .add_edge(VertexId(2), VertexId(3), EdgeKind::Regular)
            .unwrap();

        assert_eq!(model.vertex_count(), 3);
        assert_eq!(model.edge_count(), 1);
        let children: Vec<_> = model.children(VertexId(1)).unwrap().map(Vertex::id).collect();
        assert_eq!(children, vec![VertexId(2), VertexId(3)]);
        assert_eq!(model.vertex(VertexId(2)).unwrap().parent(), Some(VertexId(1)));
        assert_eq!(model.root().inner(), Some(model.root_level()));
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let mut model = GraphModel::new();
        model
            .add_vertex(VertexId::ROOT, leaf(1).label("first"))
            .unwrap();
        let err = model
            .add_vertex(VertexId::ROOT, leaf(1).label("second"))
            .unwrap_err();

        assert_eq!(err, GraphError::DuplicateId(VertexId(1)));
        assert_eq!(model.vertex(VertexId(1)).unwrap().label(), "first");
        assert_eq!(model.vertex_count(), 1);
    }

    #[test]
    fn test_unknown_endpoint_rejects_edge() {
        let mut model = GraphModel::new();
        model.add_vertex(VertexId::ROOT, leaf(1)).unwrap();

        let err = model
            .add_edge(VertexId(1), VertexId(9), EdgeKind::Regular)
            .unwrap_err();
        assert_eq!(err, GraphError::UnknownVertex(VertexId(9)));
        assert_eq!(model.edge_count(), 0);
    }

    #[test]
    fn test_leaf_cannot_contain() {
        let mut model = GraphModel::new();
        model.add_vertex(VertexId::ROOT, leaf(1)).unwrap();
        assert_eq!(
            model.add_vertex(VertexId(1), leaf(2)).unwrap_err(),
            GraphError::NotAContainer(VertexId(1))
        );
        assert!(!model.contains(VertexId(2)));
    }

    #[test]
    fn test_cross_level_edge_is_rejected_but_can_be_lifted() {
        let mut model = GraphModel::new();
        model.add_vertex(VertexId::ROOT, method(10)).unwrap();
        model.add_vertex(VertexId::ROOT, method(20)).unwrap();
        model.add_vertex(VertexId(10), leaf(1)).unwrap();
        model.add_vertex(VertexId(20), leaf(2)).unwrap();

        assert_eq!(
            model
                .add_edge(VertexId(1), VertexId(2), EdgeKind::Regular)
                .unwrap_err(),
            GraphError::CrossLevelEdge {
                src: VertexId(1),
                dst: VertexId(2)
            }
        );

        let lifted = model
            .add_lifted_edge(VertexId(1), VertexId(2), EdgeKind::Regular)
            .unwrap()
            .unwrap();
        let edge = &model[lifted];
        assert_eq!(model[edge.source()].id(), VertexId(10));
        assert_eq!(model[edge.target()].id(), VertexId(20));

        let again = model
            .add_lifted_edge(VertexId(1), VertexId(2), EdgeKind::Regular)
            .unwrap();
        assert_eq!(again, Some(lifted));
        assert_eq!(model.edge_count(), 1);
    }

    #[test]
    fn test_lifted_edge_into_own_container_is_skipped() {
        let mut model = GraphModel::new();
        model.add_vertex(VertexId::ROOT, method(10)).unwrap();
        model.add_vertex(VertexId(10), leaf(1)).unwrap();

        assert_eq!(
            model
                .add_lifted_edge(VertexId(10), VertexId(1), EdgeKind::Regular)
                .unwrap(),
            None
        );
        assert_eq!(model.edge_count(), 0);
    }

    #[test]
    fn test_visible_views_follow_flags() {
        let mut model = GraphModel::new();
        model.add_vertex(VertexId::ROOT, leaf(1)).unwrap();
        model.add_vertex(VertexId::ROOT, leaf(2)).unwrap();
        model
            .add_edge(VertexId(1), VertexId(2), EdgeKind::Regular)
            .unwrap();
        let level = model.root_level();

        assert_eq!(model.visible_vertices(level).count(), 2);
        assert_eq!(model.visible_edges(level).count(), 1);

        model.set_hidden(VertexId(2)).unwrap();
        assert_eq!(model.visible_vertices(level).count(), 1);
        assert_eq!(model.visible_edges(level).count(), 0);
        // No cascade: the edge flag itself is untouched.
        assert!(model.edges().all(Edge::is_visible));

        model.set_visible(VertexId(2)).unwrap();
        assert_eq!(model.visible_edges(level).count(), 1);
    }

    #[test]
    fn test_children_of_collapsed_container_start_hidden() {
        let mut model = GraphModel::new();
        model.add_vertex(VertexId::ROOT, method(10)).unwrap();
        let idx = model.lookup(VertexId(10)).unwrap();
        model[idx].expanded = false;
        model.add_vertex(VertexId(10), leaf(1)).unwrap();

        assert!(!model.vertex(VertexId(1)).unwrap().is_visible());
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let mut model = GraphModel::new();
        model.add_vertex(VertexId::ROOT, method(10)).unwrap();
        model.add_vertex(VertexId(10), leaf(1)).unwrap();
        model.add_vertex(VertexId::ROOT, method(20)).unwrap();
        model.add_vertex(VertexId(20), leaf(2)).unwrap();

        let ids: Vec<_> = model
            .descendants(model.root_index())
            .into_iter()
            .map(|idx| model[idx].id())
            .collect();
        assert_eq!(ids, vec![VertexId(10), VertexId(1), VertexId(20), VertexId(2)]);
    }
}
