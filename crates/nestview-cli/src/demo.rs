use clap::ValueEnum;
use nestview_core::VertexKind;
use nestview_events::GraphEvent;

/// Built-in programs for exploring the engine without a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Six instructions over two methods, in a straight line
    Small,
    /// Sixteen instructions with branches and joins
    Large,
}

pub const MAIN_METHOD: i64 = 100;
pub const FUNC_METHOD: i64 = 101;

impl Demo {
    pub fn events(self) -> Vec<GraphEvent> {
        match self {
            Demo::Small => program(6, 3, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]),
            Demo::Large => program(
                16,
                5,
                &[
                    // Main.main
                    (0, 1),
                    (1, 2),
                    (1, 3),
                    (2, 4),
                    (3, 4),
                    // Main.func
                    (4, 5),
                    (5, 6),
                    (6, 7),
                    (6, 8),
                    (7, 9),
                    (8, 9),
                    (9, 10),
                    (10, 11),
                    (11, 12),
                    (12, 13),
                    (13, 14),
                    (14, 15),
                ],
            ),
        }
    }
}

/// `count` instructions numbered from 1; the first `in_main` belong to `Main.main`, the rest to
/// `Main.func`. Edge endpoints are vertex ids, so an endpoint of 0 names nothing.
fn program(count: u32, in_main: u32, edges: &[(i64, i64)]) -> Vec<GraphEvent> {
    let mut events = vec![
        GraphEvent::vertex(MAIN_METHOD, None, VertexKind::method("Main", "main"), "Main.main"),
        GraphEvent::vertex(FUNC_METHOD, None, VertexKind::method("Main", "func"), "Main.func"),
    ];
    for i in 0..count {
        let (parent, method_name) = if i < in_main {
            (MAIN_METHOD, "Main.main")
        } else {
            (FUNC_METHOD, "Main.func")
        };
        let text = format!("i{} = {}", i, i);
        events.push(GraphEvent::vertex(
            i64::from(i) + 1,
            Some(parent),
            VertexKind::instruction(text.clone(), method_name, i),
            text,
        ));
    }
    events.extend(edges.iter().map(|&(source, target)| GraphEvent::edge(source, target)));
    events
}
