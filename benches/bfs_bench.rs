use criterion::{criterion_group, criterion_main, Criterion};
use grid_bfs::{Cell, GridPathfinder};
use std::hint::black_box;

fn full_grid_sweep(c: &mut Criterion) {
    for n in [6, 64] {
        let engine = GridPathfinder::new(n, n, Cell::new(0, 0)).unwrap();
        c.bench_function(format!("{n}x{n} full sweep").as_str(), |b| {
            b.iter(|| {
                for row in 0..n {
                    for col in 0..n {
                        black_box(engine.find_path(Cell::new(row, col)).unwrap());
                    }
                }
            })
        });
    }
}

criterion_group!(benches, full_grid_sweep);
criterion_main!(benches);
