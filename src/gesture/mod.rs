//! Turning a dragged fist into a debounced knock count.
//!
//! The fists are circles, not physics bodies. A [`Contact`] detector
//! reports the rising edge of their overlap, and the
//! [`CollisionGestureTracker`] counts each edge at most once until the
//! fists have been pulled apart again.
mod contact;
mod fist;
mod point;
mod tracker;

pub use contact::*;
pub use fist::*;
pub use point::*;
pub use tracker::*;
