use criterion::{black_box, criterion_group, criterion_main, Criterion};

use connect4_engine::board::{Board, Player};
use connect4_engine::evaluator::evaluate;
use connect4_engine::search::Searcher;

fn midgame() -> Board {
    Board::from_moves("4453352").unwrap()
}

fn evaluate_midgame(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| evaluate(black_box(&board), Player::One))
    });
}

fn alpha_beta_empty(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("alpha_beta_depth_4", |b| {
        b.iter(|| Searcher::new(Player::One).alpha_beta(black_box(&board), 4))
    });
}

fn expectimax_empty(c: &mut Criterion) {
    let board = Board::new();
    let mut group = c.benchmark_group("expectimax");
    group.sample_size(10);
    group.bench_function("expectimax_depth_6", |b| {
        b.iter(|| Searcher::new(Player::One).expectimax(black_box(&board), 6))
    });
    group.finish();
}

criterion_group!(benches, evaluate_midgame, alpha_beta_empty, expectimax_empty);
criterion_main!(benches);
