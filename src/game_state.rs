use crate::board::{Board, CELL_COUNT};
use crate::types::{GameStatus, Mark};
use crate::win_detector::{check_win, check_win_with_line};

/// Full state of one game: the board, whose turn it is, and whether the game
/// has ended. X always moves first; the turn alternates strictly.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if self.board.mark(index) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(index, self.current_mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        check_win_with_line(&self.board).map(|(line, _)| line)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
