use crate::gesture::Point;

/// Touch input delivered by the platform, in scene coordinates.
/// A cancelled touch is handled exactly like a lifted one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    Down(Point),
    Move(Point),
    Up,
    Cancel,
}
