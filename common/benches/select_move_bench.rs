use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{evaluate, select_move, Board, BotInput, Mark, TicTacToeGameState, TicTacToeMode};

fn bench_select_move_empty_board(rng: &mut SessionRng) {
    let input = BotInput::new(Board::new(), Mark::O);
    black_box(select_move(&input, rng));
}

fn bench_select_move_mid_game(board: &Board, rng: &mut SessionRng) {
    let input = BotInput::new(*board, Mark::O);
    black_box(select_move(&input, rng));
}

/// Bot against a first-free-cell player until the game ends.
fn bench_full_game(rng: &mut SessionRng) {
    let mut state = TicTacToeGameState::new(TicTacToeMode::VsBot);
    while !state.outcome.is_terminal() {
        if state.is_bot_turn() {
            let _ = state.play_bot_turn(rng);
        } else if let Some(&index) = state.board.empty_cells().first() {
            let _ = state.place_mark(Mark::X, index);
        }
    }
    black_box(state.outcome);
}

fn select_move_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_move");
    let mut rng = SessionRng::new(42);
    let mid_game = Board::parse("X.O/.X./...").unwrap_or_default();
    let draw = Board::parse("XOX/XOO/OXX").unwrap_or_default();

    group.bench_function("empty_board", |b| {
        b.iter(|| bench_select_move_empty_board(&mut rng))
    });

    group.bench_function("mid_game", |b| {
        b.iter(|| bench_select_move_mid_game(&mid_game, &mut rng))
    });

    group.bench_function("full_game", |b| {
        b.iter(|| bench_full_game(&mut rng))
    });

    group.bench_function("evaluate_full_board", |b| {
        b.iter(|| black_box(evaluate(black_box(&draw))))
    });

    group.finish();
}

criterion_group!(benches, select_move_bench);
criterion_main!(benches);
