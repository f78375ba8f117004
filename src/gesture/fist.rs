use super::Point;
use crate::Units;

/// A circular fist that the player can grab and drag.
///
/// Purely kinematic: while held the pointer owns the position outright,
/// and a fist that is not held rests on its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Fist {
    origin: Point,
    position: Point,
    radius: Units,
    held: bool,
}

impl Fist {
    pub fn new(origin: Point, radius: Units) -> Self {
        Self {
            origin,
            position: origin,
            radius,
            held: false,
        }
    }
    pub fn origin(&self) -> Point {
        self.origin
    }
    pub fn position(&self) -> Point {
        self.position
    }
    pub fn radius(&self) -> Units {
        self.radius
    }
    pub fn is_held(&self) -> bool {
        self.held
    }
    pub fn contains(&self, point: &Point) -> bool {
        self.position.distance(point) <= self.radius
    }
    /// Binary touching predicate between two fists.
    pub fn touches(&self, other: &Self) -> bool {
        self.position.distance(&other.position) < self.radius + other.radius
    }

    /// Start holding the fist if the pointer landed on it. A miss never
    /// drops a hold already in progress.
    pub fn grab(&mut self, pointer: Point) -> bool {
        if self.contains(&pointer) {
            self.held = true;
        }
        self.held
    }
    pub fn drag(&mut self, pointer: Point) {
        if self.held {
            self.position = pointer;
        }
    }
    /// Let go and snap back to the origin.
    pub fn release(&mut self) {
        self.held = false;
        self.position = self.origin;
    }
}
