//! Round rules and the state machine that drives them.
//!
//! ## Values
//!
//! - [`Choice`]: Rock, Paper or Scissors
//! - [`Outcome`]: Win, Lose or Draw from the player's point of view
//! - [`Session`]: streak and record bookkeeping across rounds
//!
//! ## Control
//!
//! - [`RoundState`]: which phase of the round is active
//! - [`RoundController`]: owns the phase, the session and the knock tracker
//! - [`Opponent`]: where the opponent's symbol comes from
//! - [`Event`]: outbound notifications for the presentation layer
mod choice;
mod controller;
mod event;
mod opponent;
mod outcome;
mod session;
mod state;

pub use choice::*;
pub use controller::*;
pub use event::*;
pub use opponent::*;
pub use outcome::*;
pub use session::*;
pub use state::*;
