#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Permissive parse: anything unrecognized falls back to `Easy` instead
    /// of failing, so a bad settings value degrades the opponent rather than
    /// breaking the game.
    pub fn from_name(name: &str) -> Difficulty {
        match name.to_ascii_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayers,
    VsMachine,
    MachineVsMachine,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_marks() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_difficulty_from_name_is_case_insensitive() {
        assert_eq!(Difficulty::from_name("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("Medium"), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_from_name_defaults_to_easy() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name(""), Difficulty::Easy);
    }
}
