use std::time::Duration;

use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use tictactoe_engine::game::{GameOutcome, Mark, classify, empty_board, find_best_move};

fn bench_opening_search() {
    let board = empty_board();
    std::hint::black_box(find_best_move(&board));
}

fn bench_mid_game_search() {
    let mut board = empty_board();
    board[4] = Mark::X;
    board[0] = Mark::O;
    board[8] = Mark::X;
    std::hint::black_box(find_best_move(&board));
}

fn bench_full_self_play() {
    let mut board = empty_board();
    let mut current = Mark::X;

    while classify(&board) == GameOutcome::InProgress {
        let cell = if current == Mark::X {
            board.iter().position(|&m| m == Mark::Empty)
        } else {
            find_best_move(&board)
        };

        let Some(cell) = cell else {
            break;
        };

        board[cell] = current;
        current = current.opponent().unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("opening_search", |b| b.iter(bench_opening_search));

    group.bench_function("mid_game_search", |b| b.iter(bench_mid_game_search));

    group.bench_function("full_self_play", |b| b.iter(bench_full_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
