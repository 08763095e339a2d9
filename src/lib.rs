pub mod board;
pub mod bot_controller;
pub mod game_state;
pub mod logger;
pub mod rng;
pub mod session;
pub mod types;
pub mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use game_state::GameState;
pub use rng::SessionRng;
pub use session::{GameSession, SeatController};
pub use types::{Difficulty, GameMode, GameStatus, Mark};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, has_won, is_draw};
