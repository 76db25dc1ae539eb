pub mod edge_router;
pub mod geometry;
pub mod hit_tester;
pub mod ingest;
pub mod layout;
pub mod model;
pub mod search;
pub mod session;
pub mod snapshot;
pub mod transition;
pub mod visibility;

pub use edge_router::{EdgePath, EdgeRouter, EdgeShape, RoutedEdge};
pub use geometry::{QuadCurve, Rect, Side, Vec2, exit_point, exit_side};
pub use hit_tester::{HitResult, HitTester};
pub use ingest::{IngestReport, Ingestor, ingest};
pub use layout::{LayoutReport, LayoutResult, Layouter, NestingLayouter, Placement};
pub use model::{Edge, GraphModel, Level, LevelId, Vertex, VertexIndex, VertexSpec};
pub use session::Session;
pub use snapshot::{EdgeView, Snapshot, VertexView};
pub use transition::{EdgeChange, Frame, Transition, VertexChange, VertexState};
