use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lunar_lander::core::{Lander, RngSource, TerrainConfig, TerrainGenerator};
use lunar_lander::term::{FrameBuffer, SceneView, Viewport};
use lunar_lander::types::{AltitudeMode, Coordinate};

fn bench_generate(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("generate_640x480", |b| {
        b.iter(|| {
            seed += 1;
            TerrainGenerator::new(TerrainConfig::default(), RngSource::seeded(black_box(seed)))
                .generate_points()
        })
    });
}

fn bench_altitude(c: &mut Criterion) {
    let terrain = TerrainGenerator::new(TerrainConfig::default(), RngSource::seeded(12345))
        .generate()
        .unwrap();
    let linear = terrain.clone().with_altitude_mode(AltitudeMode::Linear);

    c.bench_function("altitude_nearest", |b| {
        let mut x = 0;
        b.iter(|| {
            x = (x + 7) % 640;
            terrain.altitude_at(black_box(Coordinate::new(x, 20)))
        })
    });

    c.bench_function("altitude_linear", |b| {
        let mut x = 0;
        b.iter(|| {
            x = (x + 7) % 640;
            linear.altitude_at(black_box(Coordinate::new(x, 20)))
        })
    });
}

fn bench_lander_update(c: &mut Criterion) {
    let terrain = TerrainGenerator::new(TerrainConfig::default(), RngSource::seeded(12345))
        .generate()
        .unwrap();
    let terrain = Arc::new(terrain);

    c.bench_function("lander_update", |b| {
        b.iter(|| {
            let mut lander = Lander::new(Coordinate::new(320, 20));
            lander.attach(Arc::clone(&terrain));
            lander.update()
        })
    });
}

fn bench_draw_scene(c: &mut Criterion) {
    let terrain = TerrainGenerator::new(TerrainConfig::default(), RngSource::seeded(12345))
        .generate()
        .unwrap();
    let view = SceneView::default();
    let mut fb = FrameBuffer::new(1, 1);

    c.bench_function("draw_scene_120x40", |b| {
        b.iter(|| {
            view.begin(&mut fb, Viewport::new(120, 40));
            view.draw_terrain(&mut fb, black_box(terrain.points()));
            view.draw_craft(&mut fb, Coordinate::new(320, 200), 20, 20);
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_altitude,
    bench_lander_update,
    bench_draw_scene
);
criterion_main!(benches);
