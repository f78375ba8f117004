/// Phase of the current round. Exactly one is active at a time.
///
/// - `AwaitingSelection`: symbol buttons are live, the fist is idle
/// - `AwaitingGesture`: a symbol is chosen, knocks are being counted
/// - `Resolving`: both symbols are revealed until the display timeout
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum RoundState {
    #[default]
    AwaitingSelection,
    AwaitingGesture,
    Resolving,
}

impl RoundState {
    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::AwaitingSelection)
    }
    pub fn is_knocking(&self) -> bool {
        matches!(self, Self::AwaitingGesture)
    }
    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingSelection => write!(f, "select"),
            Self::AwaitingGesture => write!(f, "knock"),
            Self::Resolving => write!(f, "reveal"),
        }
    }
}
