use super::Store;
use crate::Score;

/// Process-local store. Forgets everything on exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Memory(Score);

impl From<Score> for Memory {
    fn from(score: Score) -> Self {
        Self(score)
    }
}

impl Store for Memory {
    fn high_score(&self) -> Score {
        self.0
    }
    fn set_high_score(&mut self, score: Score) -> anyhow::Result<()> {
        self.0 = score;
        Ok(())
    }
}
