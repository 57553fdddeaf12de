use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use funhouse_scene_editor::{AppController, AppState, Curve};
use glam::{Vec2, Vec3};
use std::hint::black_box;

fn bench_curve_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_compile");

    for &span in &[1.0f32, 4.0, 16.0] {
        group.bench_with_input(
            BenchmarkId::new("recompile", span as u32),
            &span,
            |b, &span| {
                let mut curve = Curve::new([
                    Vec3::new(-span / 2.0, 0.2, 0.0),
                    Vec3::new(0.0, span / 2.0, 0.0),
                    Vec3::new(span / 2.0, 0.2, 0.0),
                ]);
                b.iter(|| {
                    curve.update();
                    curve.compile();
                    black_box(curve.polyline().len())
                })
            },
        );
    }

    group.finish();
}

fn bench_pointer_storm(c: &mut Criterion) {
    c.bench_function("pointer_place_resize_cycle", |b| {
        b.iter(|| {
            let mut controller = AppController::new();
            let mut state = AppState::new();
            for i in 0..32 {
                let x = -0.9 + (i as f32) * 0.05;
                controller
                    .register_pointer_event(&mut state, Vec2::new(x, 0.5), true, false)
                    .expect("Klick sollte durchlaufen");
                controller
                    .register_pointer_event(&mut state, Vec2::new(x, 0.9), true, true)
                    .expect("Drag sollte durchlaufen");
                controller
                    .register_pointer_event(&mut state, Vec2::new(x, 0.9), true, false)
                    .expect("Klick sollte durchlaufen");
            }
            black_box(state.sphere_count())
        })
    });
}

criterion_group!(benches, bench_curve_compile, bench_pointer_storm);
criterion_main!(benches);
