//! High score persistence.
//!
//! The game reads the record once when a gameplay session starts and writes
//! it back each time a win raises it. Writes are last-write-wins and a
//! failed write only means the value was not saved this time.
mod disk;
mod memory;

pub use disk::*;
pub use memory::*;

use crate::Score;

/// Key-value style persistence for the single high score.
pub trait Store {
    /// Stored high score, 0 when nothing was ever saved.
    fn high_score(&self) -> Score;
    /// Overwrite the stored high score.
    fn set_high_score(&mut self, score: Score) -> anyhow::Result<()>;
}
