use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn bench_generate(c: &mut Criterion) {
    let presets = Presets::default();
    let mut group = c.benchmark_group("generate");

    for difficulty in Difficulty::ALL {
        let config = presets.resolve("16x30", difficulty).unwrap();
        group.bench_with_input(
            BenchmarkId::new("rejection", difficulty),
            &config,
            |b, &config| b.iter(|| RandomBoardGenerator::new(black_box(7)).generate(config)),
        );
        group.bench_with_input(
            BenchmarkId::new("shuffle", difficulty),
            &config,
            |b, &config| b.iter(|| ShuffleBoardGenerator::new(black_box(7)).generate(config)),
        );
    }

    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    // single corner mine, one reveal opens the whole board
    let board = Board::from_mine_coords((16, 30), &[(15, 29)]).unwrap();

    c.bench_function("flood_fill_16x30", |b| {
        b.iter_batched(
            || Game::new(board.clone()),
            |mut game| game.reveal(black_box((0, 0))).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_flood_fill);
criterion_main!(benches);
