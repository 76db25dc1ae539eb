use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nestview_bench::util::generate_synthetic_program;
use nestview_core::{LayoutConfig, SessionConfig, VertexId};
use nestview_graph::{EdgeRouter, GraphModel, Layouter, NestingLayouter, Session, ingest};

fn bench_nested_layout_2000_vertices(c: &mut Criterion) {
    let mut model = GraphModel::new();
    ingest(&mut model, generate_synthetic_program(40, 50));

    let parallel = NestingLayouter::default();
    let serial = NestingLayouter::from_config(&LayoutConfig {
        parallel: false,
        ..LayoutConfig::default()
    });

    c.bench_function("nested_layout_2000_vertices_parallel", |b| {
        b.iter(|| black_box(parallel.execute(black_box(&model))))
    });
    c.bench_function("nested_layout_2000_vertices_serial", |b| {
        b.iter(|| black_box(serial.execute(black_box(&model))))
    });
}

fn bench_route_all(c: &mut Criterion) {
    let mut model = GraphModel::new();
    ingest(&mut model, generate_synthetic_program(40, 50));
    NestingLayouter::default().layout(&mut model);
    let router = EdgeRouter::default();

    c.bench_function("route_all_2000_vertices", |b| {
        b.iter(|| black_box(router.route_all(black_box(&model))))
    });
}

fn bench_toggle_round_trip(c: &mut Criterion) {
    let (mut session, _) =
        Session::from_events(SessionConfig::default(), generate_synthetic_program(40, 50));
    let target = VertexId(1_000_000 + 20);

    c.bench_function("toggle_round_trip_2000_vertices", |b| {
        b.iter(|| {
            let collapsed = session.toggle(target);
            let expanded = session.toggle(target);
            black_box((collapsed, expanded))
        })
    });
}

criterion_group!(
    benches,
    bench_nested_layout_2000_vertices,
    bench_route_all,
    bench_toggle_round_trip
);
criterion_main!(benches);
