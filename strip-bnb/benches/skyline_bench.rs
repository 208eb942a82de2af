use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use strip_bnb::bnb::skyline::{Skyline, compute_corners, sort_skyline};
use strip_bnb::geometry::primitives::Rect;

criterion_main!(benches);
criterion_group!(benches, skyline_bench);

const N_RECTS: [usize; 3] = [4, 8, 16];

/// Rectangles stacked on a random staircase, as they would appear in a partial packing
fn generate_rects(n: usize, rng: &mut impl Rng) -> Vec<Rect> {
    (0..n)
        .map(|_| {
            let x = rng.random_range(0..20_u32) as f32;
            let y = rng.random_range(0..20_u32) as f32;
            let w = rng.random_range(1..=5_u32) as f32;
            let h = rng.random_range(1..=5_u32) as f32;
            Rect::try_new(x, y, w, h).unwrap()
        })
        .collect()
}

fn skyline_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("corners");
    for n in N_RECTS {
        let rects = generate_rects(n, &mut SmallRng::seed_from_u64(0));
        let new_rect = Rect::try_new(0.0, 25.0, 3.0, 2.0).unwrap();

        group.bench_with_input(BenchmarkId::new("resort", n), &rects, |b, rects| {
            b.iter(|| {
                let mut sorted = rects.clone();
                sorted.push(new_rect);
                sort_skyline(&mut sorted);
                black_box(compute_corners(&sorted))
            })
        });

        let mut skyline = Skyline::with_capacity(n + 1);
        rects.iter().for_each(|r| {
            skyline.insert(*r);
        });
        group.bench_function(BenchmarkId::new("incremental", n), |b| {
            b.iter(|| {
                let idx = skyline.insert(new_rect);
                let corners = compute_corners(skyline.rects());
                skyline.remove(idx);
                black_box(corners)
            })
        });
    }
    group.finish();
}
