use nestview_core::{VertexId, VertexKind};
use nestview_events::GraphEvent;

/// A program of `method_count` methods with `per_method` instructions each.
///
/// Instructions inside a method form a ladder: every instruction flows to the next one and
/// every third one also branches two ahead. Each method calls the next through its last
/// instruction, which the ingestor lifts to a method-to-method edge.
pub fn generate_synthetic_program(method_count: usize, per_method: usize) -> Vec<GraphEvent> {
    let mut events = Vec::with_capacity(method_count * (per_method * 3 + 2));
    let mut next_id = 1i64;
    let mut previous_last: Option<i64> = None;

    for m in 0..method_count {
        let method_id = 1_000_000 + m as i64;
        let name = format!("method_{}", m);
        events.push(GraphEvent::vertex(
            method_id,
            None,
            VertexKind::method("Bench", name.clone()),
            name.clone(),
        ));

        let first = next_id;
        for i in 0..per_method {
            let text = format!("i{} = {}", i, i);
            events.push(GraphEvent::Vertex {
                id: VertexId(next_id),
                parent: Some(VertexId(method_id)),
                kind: VertexKind::instruction(text.clone(), name.clone(), i as u32),
                label: text,
                size: Some((1.0 + (i % 4) as f32 * 0.5, 1.0)),
            });
            next_id += 1;
        }
        let last = next_id - 1;

        for id in first..last {
            events.push(GraphEvent::edge(id, id + 1));
            if (id - first) % 3 == 0 && id + 2 <= last {
                events.push(GraphEvent::edge(id, id + 2));
            }
        }
        if let Some(previous) = previous_last {
            events.push(GraphEvent::edge(previous, first));
        }
        previous_last = Some(last);
    }
    events
}
