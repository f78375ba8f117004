use crate::Arbitrary;

/// A symbol thrown in a round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The symbol this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        Self::all()[rand::random_range(0..3)]
    }
}

impl From<Choice> for usize {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }
}

impl TryFrom<&str> for Choice {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            other => Err(anyhow::anyhow!("invalid choice: {}", other)),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissors => write!(f, "Scissors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_dominance() {
        assert_eq!(Choice::Rock.beats(), Choice::Scissors);
        assert_eq!(Choice::Scissors.beats(), Choice::Paper);
        assert_eq!(Choice::Paper.beats(), Choice::Rock);
        for choice in Choice::all() {
            assert_ne!(choice.beats(), choice);
            assert_eq!(choice.beats().beats().beats(), choice);
        }
    }

    #[test]
    fn parse_names_and_initials() {
        assert_eq!(Choice::try_from("rock").unwrap(), Choice::Rock);
        assert_eq!(Choice::try_from(" P ").unwrap(), Choice::Paper);
        assert_eq!(Choice::try_from("Scissors").unwrap(), Choice::Scissors);
        assert!(Choice::try_from("lizard").is_err());
    }

    #[test]
    fn display_parses_back() {
        for choice in Choice::all() {
            assert_eq!(Choice::try_from(choice.to_string().as_str()).unwrap(), choice);
        }
    }

    #[test]
    fn random_covers_all() {
        let drawn = (0..512)
            .map(|_| Choice::random())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(drawn.len(), 3);
    }
}
