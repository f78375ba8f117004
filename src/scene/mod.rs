//! Scenes wiring input, timing and presentation around the round core.
//!
//! ## Scenes
//!
//! - [`Menu`]: start screen: new game, reset the high score
//! - [`GameScene`]: one gameplay session: fists, knocks, reveals
//! - [`Director`]: whichever of the two is on screen, and the moves between them
//!
//! ## Collaborators
//!
//! - [`Pointer`]: touch input in scene coordinates
//! - [`Presenter`]: fire-and-forget visual and audio effects
//! - [`Timer`]: one-shot deadlines on the frame clock
//! - [`Config`]: tuning values for geometry and timing
mod config;
mod director;
mod game;
mod input;
mod menu;
mod presenter;
mod timer;

pub use config::*;
pub use director::*;
pub use game::*;
pub use input::*;
pub use menu::*;
pub use presenter::*;
pub use timer::*;
