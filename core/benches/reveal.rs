use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use minefield_core::*;

fn bench_first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal");

    for difficulty in Difficulty::PRESETS {
        let config = GameConfig::preset(difficulty);
        let center = (config.rows() / 2, config.cols() / 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty),
            &config,
            |b, &config| {
                let mut seed = 0;
                b.iter(|| {
                    seed += 1;
                    let mut session = GameSession::with_seed(config, seed);
                    black_box(session.reveal(center))
                });
            },
        );
    }

    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    // one mine in the corner leaves a single huge zero region
    let config = GameConfig::new(100, 100, 1, Difficulty::Custom).unwrap();

    c.bench_function("flood_fill_100x100", |b| {
        b.iter(|| {
            let mut session = GameSession::from_layout(config, &[(99, 99)]).unwrap();
            black_box(session.reveal((0, 0)))
        });
    });
}

criterion_group!(benches, bench_first_reveal, bench_flood_fill);
criterion_main!(benches);
