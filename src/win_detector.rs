use crate::board::Board;
use crate::types::Mark;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// True iff some winning line is fully occupied by `mark`. Callers pass X or
/// O; the detector trusts its input and does not defend against boards that
/// cannot arise under alternating play.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.mark(index) == mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(_, mark)| mark)
}

/// Like `check_win`, but also reports which triple won, for end-of-game
/// display.
pub fn check_win_with_line(board: &Board) -> Option<([usize; 3], Mark)> {
    for line in WINNING_LINES {
        let mark = board.mark(line[0]);
        if mark != Mark::Empty && line.iter().all(|&index| board.mark(index) == mark) {
            return Some((line, mark));
        }
    }
    None
}

/// True iff every cell is occupied, independent of win status. Callers check
/// wins first; a full board with a winner counts as a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
