use crate::bot_controller::{BotInput, calculate_move};
use crate::game_state::GameState;
use crate::log;
use crate::rng::SessionRng;
use crate::types::{Difficulty, GameMode, GameStatus, Mark};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatController {
    Human,
    Machine(Difficulty),
}

/// Synchronous game loop: owns the state, knows which seat is
/// machine-controlled, and drives machine turns on demand. Any pacing delay
/// for "thinking time" belongs to the embedder, before it calls in here.
pub struct GameSession {
    state: GameState,
    seats: [SeatController; 2],
    rng: SessionRng,
}

impl GameSession {
    pub fn new(mode: GameMode, difficulty: Difficulty, seed: u64) -> Self {
        // The machine always takes the O seat when playing against a human.
        let seats = match mode {
            GameMode::TwoPlayers => [SeatController::Human, SeatController::Human],
            GameMode::VsMachine => [
                SeatController::Human,
                SeatController::Machine(difficulty),
            ],
            GameMode::MachineVsMachine => [
                SeatController::Machine(difficulty),
                SeatController::Machine(difficulty),
            ],
        };

        Self {
            state: GameState::new(),
            seats,
            rng: SessionRng::new(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn seat_for(&self, mark: Mark) -> SeatController {
        match mark {
            Mark::O => self.seats[1],
            _ => self.seats[0],
        }
    }

    pub fn is_machine_turn(&self) -> bool {
        self.state.status == GameStatus::InProgress
            && matches!(
                self.seat_for(self.state.current_mark),
                SeatController::Machine(_)
            )
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        let mark = self.state.current_mark;
        if let Err(e) = self.state.place_mark(index) {
            log!("{:?} failed to place mark at {}: {}", mark, index, e);
            return Err(e);
        }
        Ok(())
    }

    /// Picks and applies a move for the machine seat whose turn it is.
    /// Returns the chosen cell index.
    pub fn play_machine_turn(&mut self) -> Result<usize, String> {
        let SeatController::Machine(difficulty) = self.seat_for(self.state.current_mark) else {
            return Err("Current seat is not machine-controlled".to_string());
        };

        if self.state.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        let input = BotInput::from_game_state(&self.state);
        let index = calculate_move(difficulty, input, &mut self.rng)
            .ok_or_else(|| "No available moves".to_string())?;

        self.place_mark(index)?;
        Ok(index)
    }

    /// Drives a machine-vs-machine game to its terminal status.
    pub fn run_to_completion(&mut self) -> Result<GameStatus, String> {
        while self.state.status == GameStatus::InProgress {
            if !self.is_machine_turn() {
                return Err("Waiting on a human seat".to_string());
            }
            self.play_machine_turn()?;
        }
        Ok(self.state.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vs_machine_puts_the_machine_on_o() {
        let session = GameSession::new(GameMode::VsMachine, Difficulty::Easy, 1);

        // X (human) opens, so it is not the machine's turn yet.
        assert!(!session.is_machine_turn());
    }

    #[test]
    fn test_machine_answers_after_the_human_move() {
        let mut session = GameSession::new(GameMode::VsMachine, Difficulty::Easy, 1);

        session.place_mark(4).unwrap();
        assert!(session.is_machine_turn());

        let index = session.play_machine_turn().unwrap();
        assert_ne!(index, 4);
        assert_eq!(session.state().board.mark(index), Mark::O);
        assert_eq!(session.state().current_mark, Mark::X);
    }

    #[test]
    fn test_play_machine_turn_rejects_human_seats() {
        let mut session = GameSession::new(GameMode::TwoPlayers, Difficulty::Easy, 1);

        assert!(session.play_machine_turn().is_err());
    }

    #[test]
    fn test_machine_vs_machine_reaches_a_terminal_status() {
        let mut session = GameSession::new(GameMode::MachineVsMachine, Difficulty::Easy, 17);

        let status = session.run_to_completion().unwrap();

        assert_ne!(status, GameStatus::InProgress);
        let moves_played = 9 - session.state().board.available_moves().len();
        assert!(moves_played >= 5);
    }

    #[test]
    fn test_hard_vs_hard_always_draws() {
        for seed in 0..3 {
            let mut session = GameSession::new(GameMode::MachineVsMachine, Difficulty::Hard, seed);

            let status = session.run_to_completion().unwrap();

            assert_eq!(status, GameStatus::Draw);
            assert_eq!(session.state().winner(), None);
        }
    }

    #[test]
    fn test_rejected_move_does_not_advance_the_turn() {
        let mut session = GameSession::new(GameMode::TwoPlayers, Difficulty::Easy, 1);
        session.place_mark(0).unwrap();

        assert!(session.place_mark(0).is_err());
        assert_eq!(session.state().current_mark, Mark::O);
    }
}
