use super::Choice;

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn determine(player: Choice, opponent: Choice) -> Self {
        if player == opponent {
            Self::Draw
        } else if player.beats() == opponent {
            Self::Win
        } else {
            Self::Lose
        }
    }
    /// The same round seen from the other side of the table.
    pub fn flip(&self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
}

impl From<(Choice, Choice)> for Outcome {
    fn from((player, opponent): (Choice, Choice)) -> Self {
        Self::determine(player, opponent)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "Won!"),
            Self::Lose => write!(f, "Lost!"),
            Self::Draw => write!(f, "Draw!"),
        }
    }
}
