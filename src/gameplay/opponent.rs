use super::Choice;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::VecDeque;

/// Source of the opponent's symbol. Draws never look at the player's choice.
#[derive(Debug, Clone)]
pub enum Opponent {
    /// Uniform draw from all three symbols.
    Random(SmallRng),
    /// Always throws the same symbol.
    Forced(Choice),
    /// Throws the queued symbols in order, then falls back to uniform draws.
    Scripted(VecDeque<Choice>),
}

impl Opponent {
    pub fn seeded(seed: u64) -> Self {
        Self::Random(SmallRng::seed_from_u64(seed))
    }
    pub fn throw(&mut self) -> Choice {
        match self {
            Self::Random(rng) => Choice::all()[rng.random_range(0..3)],
            Self::Forced(choice) => *choice,
            Self::Scripted(queue) => queue
                .pop_front()
                .unwrap_or_else(|| Choice::all()[rand::random_range(0..3)]),
        }
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Self::Random(SmallRng::from_os_rng())
    }
}

impl From<Choice> for Opponent {
    fn from(choice: Choice) -> Self {
        Self::Forced(choice)
    }
}

impl From<Vec<Choice>> for Opponent {
    fn from(script: Vec<Choice>) -> Self {
        Self::Scripted(script.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_repeats() {
        let mut opponent = Opponent::from(Choice::Paper);
        assert!((0..8).all(|_| opponent.throw() == Choice::Paper));
    }

    #[test]
    fn scripted_in_order() {
        let mut opponent = Opponent::from(vec![Choice::Scissors, Choice::Rock]);
        assert_eq!(opponent.throw(), Choice::Scissors);
        assert_eq!(opponent.throw(), Choice::Rock);
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = Opponent::seeded(42);
        let mut b = Opponent::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.throw(), b.throw());
        }
    }

    #[test]
    fn random_is_roughly_uniform() {
        let mut opponent = Opponent::seeded(7);
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            counts[usize::from(opponent.throw())] += 1;
        }
        for count in counts {
            assert!(count > 850 && count < 1150, "{:?}", counts);
        }
    }
}
