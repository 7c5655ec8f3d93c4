use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use taurus_foundation::pull_offset;

const TOTAL_DRAG_DISTANCES: &[f32] = &[120.0, 315.0];

fn bench_pull_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("pull_offset");
    for &total in TOTAL_DRAG_DISTANCES {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| {
                let mut sum = 0i64;
                for y_diff in 0..1_000 {
                    if let Some(pull) = pull_offset(black_box(y_diff as f32), total) {
                        sum += pull.target_offset as i64;
                    }
                }
                sum
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pull_offset);
criterion_main!(benches);
