//! Terminal front-end: a colored presenter and an interactive human driver.
mod human;
mod screen;

pub use human::*;
pub use screen::*;
