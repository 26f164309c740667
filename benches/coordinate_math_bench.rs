use canvas_rs::api::{CanvasEngine, CanvasEngineConfig};
use canvas_rs::core::{translator, GlobalPixel, Level, LocalCoord, ZoomPath};
use canvas_rs::service::NullService;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_section_address_full_path(c: &mut Criterion) {
    let mut path = ZoomPath::new();
    for l in 1..=5u8 {
        let level = Level::new(l).expect("valid level");
        let local = LocalCoord::new(l % 3, (l + 1) % 3).expect("valid local coordinate");
        path.set(level, local).expect("set slot");
    }

    c.bench_function("section_address_full_path", |b| {
        b.iter(|| {
            let _ = translator::section_address(black_box(&path), black_box(Level::TERMINAL));
        })
    });
}

fn bench_interpolate_long_stroke(c: &mut Criterion) {
    let from = GlobalPixel::new(0, 0).expect("valid pixel");
    let to = GlobalPixel::new(728, 300).expect("valid pixel");

    c.bench_function("interpolate_long_stroke", |b| {
        b.iter(|| {
            let _ = translator::interpolate(black_box(from), black_box(to));
        })
    });
}

fn bench_engine_snapshot_json(c: &mut Criterion) {
    let config = CanvasEngineConfig::new(729.0).with_drawing_mode(true);
    let mut engine = CanvasEngine::new(NullService::default(), config).expect("engine init");

    for tap in [0u8, 1, 2, 1, 0] {
        let local = LocalCoord::new(tap, 2 - tap % 3).expect("valid local coordinate");
        engine.zoom_in(local).expect("zoom in");
    }
    for i in 0..500u16 {
        let pixel = GlobalPixel::new(i % 729, (i * 3) % 729).expect("valid pixel");
        engine
            .paint_pixel(pixel, canvas_rs::core::ColorName::Blue, false)
            .expect("paint");
    }

    c.bench_function("engine_snapshot_json_500_overlay", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_section_address_full_path,
    bench_interpolate_long_stroke,
    bench_engine_snapshot_json
);
criterion_main!(benches);
