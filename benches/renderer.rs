use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use storyboard_renderer::config::Config;
use storyboard_renderer::render::render_svg;
use storyboard_renderer::storyboard::sample_storyboard;

fn bench_resolve(c: &mut Criterion) {
    let config = Config::default();
    let scene = sample_storyboard();
    c.bench_function("resolve", |b| {
        b.iter(|| {
            let resolved = black_box(&scene).resolve(&config).expect("resolve failed");
            black_box(resolved.nodes.len());
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let config = Config::default();
    let resolved = sample_storyboard().resolve(&config).expect("resolve failed");
    c.bench_function("render_svg", |b| {
        b.iter(|| {
            let svg = render_svg(black_box(&resolved), &config);
            black_box(svg.len());
        });
    });
}

fn bench_end_to_end(c: &mut Criterion) {
    let config = Config::default();
    c.bench_function("end_to_end", |b| {
        b.iter(|| {
            let resolved = sample_storyboard().resolve(&config).expect("resolve failed");
            let svg = render_svg(&resolved, &config);
            black_box(svg.len());
        });
    });
}

criterion_group!(benches, bench_resolve, bench_render, bench_end_to_end);
criterion_main!(benches);
