use std::hint::black_box;
use std::num::{NonZeroU32, NonZeroUsize};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_explorer::{
    EngineConfig, FractalRenderEngine, MandelbrotAlgorithm, MandelbrotConfig, MandelbrotTealRed,
    PixelRect, TileSize, generate_fractal_serial, generate_pixel_buffer,
};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

fn bench_serial_reference(c: &mut Criterion) {
    let pixel_rect = PixelRect::from_size(WIDTH, HEIGHT).unwrap();
    let config = MandelbrotConfig::default();
    let algorithm =
        MandelbrotAlgorithm::from_viewport(pixel_rect, config.window, &config.viewport).unwrap();
    let colour_map = MandelbrotTealRed::new(config.viewport.resolution());

    c.bench_function("serial_reference", |b| {
        b.iter(|| {
            let iterations = generate_fractal_serial(pixel_rect, black_box(&algorithm)).unwrap();
            generate_pixel_buffer(iterations, &colour_map, pixel_rect).unwrap()
        })
    });
}

fn bench_engine_tile_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_tile_size");

    for edge in [10_u32, 50, 100] {
        let mut engine = FractalRenderEngine::new(EngineConfig {
            tile_size: TileSize::square(NonZeroU32::new(edge).unwrap()),
            ..EngineConfig::with_size(WIDTH, HEIGHT)
        })
        .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(edge), &edge, |b, _| {
            b.iter(|| engine.render().unwrap())
        });
    }

    group.finish();
}

fn bench_engine_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_threads");

    for threads in [1_usize, 2, 4, 8] {
        let mut engine = FractalRenderEngine::new(EngineConfig {
            worker_threads: NonZeroUsize::new(threads),
            ..EngineConfig::with_size(WIDTH, HEIGHT)
        })
        .unwrap();
        engine.set_resolution(200).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, _| {
            b.iter(|| engine.render().unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_serial_reference,
    bench_engine_tile_sizes,
    bench_engine_threads
);
criterion_main!(benches);
