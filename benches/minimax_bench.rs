use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_core::bot_controller::{BotInput, calculate_minimax_move};
use tictactoe_core::types::{Difficulty, GameMode, Mark};
use tictactoe_core::{Board, GameSession};

fn bench_minimax_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_empty_board", |b| {
        b.iter(|| {
            let input = BotInput {
                board: Board::new(),
                current_mark: Mark::X,
            };
            calculate_minimax_move(&input)
        });
    });
}

fn bench_minimax_midgame(c: &mut Criterion) {
    let mut board = Board::new();
    for (index, mark) in [(4, Mark::X), (0, Mark::O), (8, Mark::X), (2, Mark::O)] {
        board.place(index, mark);
    }

    c.bench_function("minimax_midgame", |b| {
        b.iter(|| {
            let input = BotInput {
                board: board.clone(),
                current_mark: Mark::X,
            };
            calculate_minimax_move(&input)
        });
    });
}

fn bench_hard_self_play_full_game(c: &mut Criterion) {
    c.bench_function("hard_self_play_full_game", |b| {
        b.iter(|| {
            let mut session = GameSession::new(GameMode::MachineVsMachine, Difficulty::Hard, 42);
            session.run_to_completion()
        });
    });
}

criterion_group!(
    benches,
    bench_minimax_empty_board,
    bench_minimax_midgame,
    bench_hard_self_play_full_game
);
criterion_main!(benches);
