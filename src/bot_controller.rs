use crate::board::Board;
use crate::game_state::GameState;
use crate::rng::SessionRng;
use crate::types::{Difficulty, Mark};
use crate::win_detector::has_won;

const X_WIN_SCORE: i32 = -10;
const O_WIN_SCORE: i32 = 10;
const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board.clone(),
            current_mark: state.current_mark,
        }
    }
}

/// Returns `None` only when no empty cell exists, which callers are expected
/// to rule out by checking terminal status first.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Medium => calculate_medium_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(&input),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    Some(available_moves[rng.random_range(0..available_moves.len())])
}

/// One-ply lookahead that only completes the acting mark's own win-in-one.
/// It never blocks the opponent's threats; that asymmetry is inherited from
/// the original rules and kept as-is.
fn calculate_medium_move(mut input: BotInput, rng: &mut SessionRng) -> Option<usize> {
    let mark = input.current_mark;

    for index in input.board.available_moves() {
        let wins = input.board.with_mark(index, mark, |board| has_won(board, mark));
        if wins {
            return Some(index);
        }
    }

    calculate_random_move(&input.board, rng)
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut board = input.board.clone();
    minimax(&mut board, input.current_mark).index
}

struct SearchResult {
    index: Option<usize>,
    score: i32,
}

/// Exhaustive search over the remaining game tree, no pruning, no depth
/// limit; at most 9! leaf evaluations from an empty board.
///
/// The scoring convention is absolute, not relative to the caller: O always
/// maximizes (+10) and X always minimizes (-10) no matter which mark invokes
/// the search, and depth never enters the score, so a shallow win is not
/// preferred over a deep one.
fn minimax(board: &mut Board, to_move: Mark) -> SearchResult {
    if has_won(board, Mark::X) {
        return SearchResult {
            index: None,
            score: X_WIN_SCORE,
        };
    }
    if has_won(board, Mark::O) {
        return SearchResult {
            index: None,
            score: O_WIN_SCORE,
        };
    }

    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return SearchResult {
            index: None,
            score: DRAW_SCORE,
        };
    }

    let opponent = to_move.opponent().unwrap();
    let mut best_index = None;
    let mut best_score = if to_move == Mark::O { i32::MIN } else { i32::MAX };

    for index in available_moves {
        let result = board.with_mark(index, to_move, |board| minimax(board, opponent));

        // Strict comparison keeps the first best seen; with ascending
        // enumeration that breaks ties toward the lowest index.
        let improved = if to_move == Mark::O {
            result.score > best_score
        } else {
            result.score < best_score
        };

        if improved {
            best_score = result.score;
            best_index = Some(index);
        }
    }

    SearchResult {
        index: best_index,
        score: best_score,
    }
}
