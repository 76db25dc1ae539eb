use crate::edge_router::{EdgeRouter, RoutedEdge};
use crate::geometry::Vec2;
use crate::hit_tester::{HitResult, HitTester};
use crate::ingest::{IngestReport, Ingestor};
use crate::layout::{LayoutReport, NestingLayouter};
use crate::model::GraphModel;
use crate::snapshot::Snapshot;
use crate::transition::{Frame, Transition};
use nestview_core::{EdgeId, Result, SessionConfig, VertexId};
use nestview_events::{Event, EventListener, GraphEvent};
use std::collections::BTreeMap;

/// One explorable graph together with its layout and routed edges.
///
/// All mutation goes through `&mut Session`, so operations are applied strictly one after
/// another. After every state change the whole tree is laid out again and the edges whose
/// path may have changed are routed again.
pub struct Session {
    config: SessionConfig,
    model: GraphModel,
    layouter: NestingLayouter,
    router: EdgeRouter,
    hit_tester: HitTester,
    routes: BTreeMap<EdgeId, RoutedEdge>,
    report: LayoutReport,
    last_transition: Option<Transition>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            model: GraphModel::with_config(&config.layout),
            layouter: NestingLayouter::from_config(&config.layout),
            router: EdgeRouter::from_config(&config.router),
            hit_tester: HitTester::default(),
            routes: BTreeMap::new(),
            report: LayoutReport::default(),
            last_transition: None,
            config,
        }
    }

    /// Build a session from a complete event stream and lay it out.
    pub fn from_events(
        config: SessionConfig,
        events: impl IntoIterator<Item = GraphEvent>,
    ) -> (Self, IngestReport) {
        let mut session = Self::new(config);
        let report = session.ingest(events);
        (session, report)
    }

    /// Add more of the event stream, then lay out and route everything again.
    pub fn ingest(&mut self, events: impl IntoIterator<Item = GraphEvent>) -> IngestReport {
        let mut ingestor = Ingestor::new();
        ingestor.extend(&mut self.model, events);
        let report = ingestor.finish(&mut self.model);
        self.relayout();
        report
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn layout_report(&self) -> &LayoutReport {
        &self.report
    }

    pub fn last_transition(&self) -> Option<&Transition> {
        self.last_transition.as_ref()
    }

    /// Routed edges in edge id order.
    pub fn routes(&self) -> impl Iterator<Item = &RoutedEdge> {
        self.routes.values()
    }

    pub fn route(&self, edge: EdgeId) -> Option<&RoutedEdge> {
        self.routes.get(&edge)
    }

    /// Lay out the whole tree and route every edge from scratch.
    pub fn relayout(&mut self) -> &LayoutReport {
        self.report = self.layouter.layout(&mut self.model);
        self.routes = self
            .router
            .route_all(&self.model)
            .into_iter()
            .map(|routed| (routed.edge, routed))
            .collect();
        &self.report
    }

    /// Run one fallible state change and produce its transition.
    ///
    /// `change` returns whether it changed anything; when it did not, layout and routes
    /// are left alone and the transition is empty.
    fn apply(
        &mut self,
        trigger: Option<VertexId>,
        change: impl FnOnce(&mut GraphModel) -> Result<bool>,
    ) -> Result<Transition> {
        let before = Frame::capture(&self.model);
        let changed = change(&mut self.model)?;
        Ok(self.commit(trigger, &before, changed))
    }

    /// Lay out and re-route after the model moved on from `before`.
    fn commit(&mut self, trigger: Option<VertexId>, before: &Frame, changed: bool) -> Transition {
        if !changed {
            return Transition {
                trigger,
                ..Transition::default()
            };
        }
        self.report = self.layouter.layout(&mut self.model);
        let after = Frame::capture(&self.model);
        let transition = Transition::between(before, &after, trigger);
        self.reroute(&transition.affected_edges(&self.model));

        tracing::debug!(
            "Applied change to {:?}: {} vertices and {} edges changed",
            trigger,
            transition.vertices.len(),
            transition.edges.len()
        );
        self.last_transition = Some(transition.clone());
        transition
    }

    fn reroute(&mut self, edges: &[EdgeId]) {
        for &id in edges {
            let routed = self.model.edge(id).and_then(|edge| {
                let level = edge.level();
                let path = self.router.route(&self.model, id)?;
                Some(RoutedEdge {
                    edge: id,
                    level_owner: self.model[self.model.level(level).owner()].id(),
                    origin: self.model.level_origin(level),
                    path,
                })
            });
            match routed {
                Some(routed) => {
                    self.routes.insert(id, routed);
                }
                None => {
                    self.routes.remove(&id);
                }
            }
        }
    }

    /// Flip the expansion of a container.
    pub fn toggle(&mut self, id: VertexId) -> Result<Transition> {
        let expanded = self.model.is_expanded(id)?;
        self.apply(Some(id), |model| model.set_expanded_state(id, !expanded))
    }

    pub fn is_expanded(&self, id: VertexId) -> Result<bool> {
        self.model.is_expanded(id)
    }

    /// Expand or collapse a container; a no-op when it is already in that state.
    pub fn set_expanded(&mut self, id: VertexId, expanded: bool) -> Result<Transition> {
        self.apply(Some(id), |model| model.set_expanded_state(id, expanded))
    }

    pub fn expand_all(&mut self) -> Transition {
        self.set_all(true)
    }

    pub fn collapse_all(&mut self) -> Transition {
        self.set_all(false)
    }

    fn set_all(&mut self, expanded: bool) -> Transition {
        let before = Frame::capture(&self.model);
        let changed = self.model.set_all_expanded(expanded) > 0;
        self.commit(None, &before, changed)
    }

    /// Highlight vertices matching `query`. Geometry is unaffected.
    pub fn search(&mut self, query: &str) -> Vec<VertexId> {
        self.model.highlight_matching(query)
    }

    pub fn clear_search(&mut self) {
        self.model.clear_highlights();
    }

    /// Show only `keep`, their ancestors and their expanded contents.
    pub fn hide_except(&mut self, keep: &[VertexId]) -> Result<Transition> {
        self.apply(None, |model| model.hide_except(keep).map(|_| true))
    }

    pub fn show_all(&mut self) -> Transition {
        let before = Frame::capture(&self.model);
        self.model.show_all();
        self.commit(None, &before, true)
    }

    /// Highlight or clear the visible edges touching `id`.
    pub fn hover(&mut self, id: VertexId, on: bool) -> Result<Vec<EdgeId>> {
        self.model.highlight_incident_edges(id, on)
    }

    pub fn vertex_at(&self, point: Vec2) -> Option<VertexId> {
        self.hit_tester.vertex_at(&self.model, point)
    }

    pub fn hit_test(&self, point: Vec2) -> HitResult {
        let routes: Vec<RoutedEdge> = self.routes.values().copied().collect();
        self.hit_tester.hit_test(&self.model, &routes, point)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.model, self.routes.values())
    }

    /// Apply one UI command.
    pub fn handle_command(&mut self, event: &Event) -> Result<Option<Transition>> {
        let transition = match event {
            Event::Toggle { id } => Some(self.toggle(*id)?),
            Event::SetExpanded { id, expanded } => Some(self.set_expanded(*id, *expanded)?),
            Event::ExpandAll => Some(self.expand_all()),
            Event::CollapseAll => Some(self.collapse_all()),
            Event::Search { query } => {
                self.search(query);
                None
            }
            Event::ClearSearch => {
                self.clear_search();
                None
            }
            Event::HideExcept { keep } => Some(self.hide_except(keep)?),
            Event::ShowAll => Some(self.show_all()),
            Event::HoverEnter { id } => {
                self.hover(*id, true)?;
                None
            }
            Event::HoverLeave { id } => {
                self.hover(*id, false)?;
                None
            }
        };
        Ok(transition)
    }
}

impl EventListener for Session {
    fn handle_event(&mut self, event: &Event) {
        if let Err(err) = self.handle_command(event) {
            tracing::warn!("Ignoring {:?}: {}", event, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestview_core::VertexKind;
    use nestview_events::EventBus;

    fn events() -> Vec<GraphEvent> {
        vec![
            GraphEvent::vertex(100, None, VertexKind::method("Main", "main"), "Main.main"),
            GraphEvent::vertex(
                1,
                Some(100),
                VertexKind::instruction("x = 1", "Main.main", 1),
                "x = 1",
            ),
            GraphEvent::vertex(
                2,
                Some(100),
                VertexKind::instruction("y = x", "Main.main", 2),
                "y = x",
            ),
            GraphEvent::vertex(101, None, VertexKind::method("Main", "func"), "Main.func"),
            GraphEvent::vertex(
                3,
                Some(101),
                VertexKind::instruction("return", "Main.func", 3),
                "return",
            ),
            GraphEvent::edge(1, 2),
            GraphEvent::edge(2, 3),
        ]
    }

    fn session() -> Session {
        let (session, report) = Session::from_events(SessionConfig::default(), events());
        assert!(report.is_clean());
        session
    }

    fn fresh_routes(session: &Session) -> Vec<RoutedEdge> {
        let mut routes = EdgeRouter::default().route_all(session.model());
        routes.sort_by_key(|r| r.edge);
        routes
    }

    #[test]
    fn test_session_builds_and_routes() {
        let session = session();
        assert_eq!(session.layout_report().vertices_placed, 5);
        // 1 -> 2 inside main, plus the lifted main -> func.
        assert_eq!(session.routes().count(), 2);
    }

    #[test]
    fn test_toggle_collapses_and_reroutes() {
        let mut session = session();
        let transition = session.toggle(VertexId(100)).unwrap();

        assert!(!session.is_expanded(VertexId(100)).unwrap());
        assert_eq!(transition.trigger, Some(VertexId(100)));
        assert!(!transition.change_for(VertexId(1)).unwrap().to.visible);
        assert_eq!(session.routes().count(), 1);
        assert_eq!(
            session.routes().copied().collect::<Vec<_>>(),
            fresh_routes(&session)
        );

        session.toggle(VertexId(100)).unwrap();
        assert_eq!(session.routes().count(), 2);
        assert_eq!(
            session.routes().copied().collect::<Vec<_>>(),
            fresh_routes(&session)
        );
    }

    #[test]
    fn test_toggle_round_trip_restores_geometry() {
        let mut session = session();
        let before = session.snapshot();
        session.toggle(VertexId(101)).unwrap();
        session.toggle(VertexId(101)).unwrap();
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_failed_toggle_changes_nothing() {
        let mut session = session();
        let before = session.snapshot();
        assert!(session.toggle(VertexId(1)).is_err());
        assert!(session.toggle(VertexId(404)).is_err());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_set_expanded_noop_is_empty() {
        let mut session = session();
        let transition = session.set_expanded(VertexId(100), true).unwrap();
        assert!(transition.is_empty());
        assert!(session.last_transition().is_none());
    }

    #[test]
    fn test_bulk_changes_record_their_transition() {
        let mut session = session();
        let collapsed = session.collapse_all();
        assert!(!collapsed.is_empty());
        assert!(!collapsed.change_for(VertexId(1)).unwrap().to.visible);
        assert_eq!(session.last_transition(), Some(&collapsed));

        // Already collapsed: nothing moves and the last transition stays put.
        assert!(session.collapse_all().is_empty());
        assert_eq!(session.last_transition(), Some(&collapsed));

        session.expand_all();
        session.hide_except(&[VertexId(3)]).unwrap();
        let shown = session.show_all();
        assert!(shown.change_for(VertexId(1)).unwrap().to.visible);
        assert_eq!(session.last_transition(), Some(&shown));
        assert_eq!(
            session.routes().copied().collect::<Vec<_>>(),
            fresh_routes(&session)
        );
    }

    #[test]
    fn test_commands_through_event_bus() {
        let mut session = session();
        let bus = EventBus::new();
        bus.publish(Event::CollapseAll);
        bus.publish(Event::Search {
            query: "func".to_string(),
        });
        bus.publish(Event::Toggle { id: VertexId(999) });

        assert_eq!(bus.dispatch_to(&mut session), 3);
        assert!(!session.is_expanded(VertexId(100)).unwrap());
        assert!(!session.is_expanded(VertexId(101)).unwrap());
        assert_eq!(session.model().highlighted_vertices(), vec![VertexId(101), VertexId(3)]);
    }

    #[test]
    fn test_hide_except_and_show_all() {
        let mut session = session();
        session.hide_except(&[VertexId(3)]).unwrap();
        let visible: Vec<_> = session.snapshot().vertices.iter().map(|v| v.id).collect();
        assert_eq!(visible, vec![VertexId(101), VertexId(3)]);
        assert_eq!(session.routes().count(), 0);

        session.show_all();
        assert_eq!(session.snapshot().vertices.len(), 5);
        assert_eq!(session.routes().count(), 2);
    }

    #[test]
    fn test_hit_test_finds_instruction() {
        let session = session();
        let rect = session.model().absolute_rect(VertexId(2)).unwrap();
        assert_eq!(session.vertex_at(rect.center()), Some(VertexId(2)));
        assert_eq!(session.hit_test(rect.center()), HitResult::Vertex(VertexId(2)));
    }
}
