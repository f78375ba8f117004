use crate::Units;

/// A position or displacement in scene space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: Units,
    pub y: Units,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: Units, y: Units) -> Self {
        Self { x, y }
    }
    pub fn distance(&self, other: &Self) -> Units {
        (*self - *other).norm()
    }
    pub fn norm(&self) -> Units {
        (self.x * self.x + self.y * self.y).sqrt()
    }
    pub fn scale(&self, k: Units) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl From<(Units, Units)> for Point {
    fn from((x, y): (Units, Units)) -> Self {
        Self::new(x, y)
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
