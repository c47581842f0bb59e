use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hermite_keyframe_editor::app::build_render_scene;
use hermite_keyframe_editor::{AppState, EditorOptions, GridLayout, Keyframe, KeyframeTrack};
use std::hint::black_box;

fn build_track(keyframe_count: u32) -> KeyframeTrack {
    KeyframeTrack::from_keyframes((0..keyframe_count).map(|i| {
        let value = 1.0 + (i as f32 * 0.37).sin();
        let slope = (i as f32 * 0.11).cos() * 0.5;
        Keyframe::new(i * 3, value, slope)
    }))
}

fn bench_hermite_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("hermite_evaluate");

    for &keyframe_count in &[5u32, 50, 500] {
        let track = build_track(keyframe_count);
        let last_frame = (keyframe_count - 1) * 3;

        group.bench_with_input(
            BenchmarkId::new("sweep_1000_samples", keyframe_count),
            &track,
            |b, track| {
                b.iter(|| {
                    let mut sum = 0.0;
                    for step in 0..1000 {
                        let frame = last_frame as f32 * step as f32 / 1000.0;
                        sum += track.evaluate(black_box(frame));
                    }
                    black_box(sum)
                })
            },
        );
    }

    group.finish();
}

fn bench_render_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scene");

    for &frame_count in &[30u32, 120] {
        let options = EditorOptions {
            frame_count,
            ..EditorOptions::default()
        };
        let state = AppState::with_track(build_track(frame_count / 3 + 1), options);

        group.bench_with_input(
            BenchmarkId::new("build", frame_count),
            &state,
            |b, state| b.iter(|| black_box(build_render_scene(black_box(state)).commands.len())),
        );
        group.bench_with_input(
            BenchmarkId::new("grid_layout", frame_count),
            &state,
            |b, state| {
                b.iter(|| {
                    let grid = GridLayout::compute(black_box(state.session.mapper()));
                    black_box(grid.frame_ticks.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_hermite_evaluate, bench_render_scene);
criterion_main!(core_benches);
