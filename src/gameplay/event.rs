use super::*;
use crate::Knocks;
use crate::Score;
use crate::Streak;

/// Everything the presentation layer needs to render a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub choice: Choice,
    pub opponent: Choice,
    pub outcome: Outcome,
    pub streak: Streak,
    pub record: Score,
    pub raised: bool,
}

/// Notifications emitted by the round controller, in emission order.
/// Fire-and-forget: nothing here feeds back into round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A new round is waiting for a symbol.
    RoundStarted { streak: Streak },
    /// The player picked a symbol and may start knocking.
    ChoiceSelected(Choice),
    /// A knock was counted.
    GestureProgress(Knocks),
    /// Both symbols are revealed.
    RoundResolved(Resolution),
    /// The player walked away mid-gesture.
    RoundAbandoned,
}

impl Event {
    pub fn resolution(&self) -> Option<Resolution> {
        match self {
            Self::RoundResolved(resolution) => Some(*resolution),
            _ => None,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::RoundStarted { streak } => write!(f, "Round {}: pick a symbol", streak),
            Self::ChoiceSelected(choice) => write!(f, "{} chosen, knock 3 times!", choice),
            Self::GestureProgress(knocks) => write!(f, "Knocks: {} / {}", knocks, crate::KNOCKS_REQUIRED),
            Self::RoundResolved(r) => write!(f, "{} vs {}: {}", r.choice, r.opponent, r.outcome),
            Self::RoundAbandoned => write!(f, "Round abandoned"),
        }
    }
}
