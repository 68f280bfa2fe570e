use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shisen_solver::engine::{Board, Position};
use shisen_solver::solver::{generate_playable, is_solvable};

fn bench_can_connect(c: &mut Criterion) {
    let board = Board::generate_with_seed(8, 10, 12345).unwrap();
    let a = Position::new(0, 0);
    let partner = board
        .positions()
        .find(|&p| p != a && board.get_tile(p) == board.get_tile(a))
        .unwrap();

    c.bench_function("can_connect_8x10", |b| {
        b.iter(|| board.can_connect(black_box(a), black_box(partner)))
    });
}

fn bench_find_all_moves(c: &mut Criterion) {
    let board = Board::generate_with_seed(8, 10, 12345).unwrap();

    c.bench_function("find_all_moves_8x10", |b| {
        b.iter(|| black_box(&board).find_all_moves())
    });
}

fn bench_is_solvable(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = generate_playable(6, 6, &mut rng).unwrap();

    c.bench_function("is_solvable_6x6", |b| b.iter(|| is_solvable(black_box(&board))));
}

fn bench_generate_playable(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(99);

    c.bench_function("generate_playable_6x6", |b| {
        b.iter(|| generate_playable(6, 6, &mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    bench_can_connect,
    bench_find_all_moves,
    bench_is_solvable,
    bench_generate_playable
);
criterion_main!(benches);
