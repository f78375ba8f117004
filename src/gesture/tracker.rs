use super::Point;
use crate::KNOCKS_REQUIRED;
use crate::Knocks;
use crate::MIN_DISTANCE;
use crate::Units;

/// What a contact-begin did to the knock count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Knock {
    /// Still latched from an earlier contact, or already complete.
    Suppressed,
    /// Counted, gesture not yet complete.
    Counted(Knocks),
    /// Counted, and this was the final knock.
    Complete,
}

/// True once two fists are far enough apart to re-arm the latch.
pub fn separated(a: &Point, b: &Point, min_distance: Units) -> bool {
    a.distance(b) > min_distance
}

/// Debounced knock counter.
///
/// A contact counts only while the latch is open. The latch closes on
/// every counted contact and reopens only when a position update puts the
/// fists more than `min_distance` apart; contact-end signals are never used.
#[derive(Debug, Clone)]
pub struct CollisionGestureTracker {
    knocks: Knocks,
    latched: bool,
    player: Point,
    opponent: Point,
    min_distance: Units,
}

impl CollisionGestureTracker {
    pub fn new(min_distance: Units) -> Self {
        Self {
            knocks: 0,
            latched: false,
            player: Point::ZERO,
            opponent: Point::ZERO,
            min_distance,
        }
    }
    pub fn knocks(&self) -> Knocks {
        self.knocks
    }
    pub fn is_latched(&self) -> bool {
        self.latched
    }
    pub fn is_complete(&self) -> bool {
        self.knocks >= KNOCKS_REQUIRED
    }
    pub fn min_distance(&self) -> Units {
        self.min_distance
    }
    pub fn positions(&self) -> (Point, Point) {
        (self.player, self.opponent)
    }
    pub fn distance(&self) -> Units {
        self.player.distance(&self.opponent)
    }

    pub fn reset(&mut self) {
        self.knocks = 0;
        self.latched = false;
    }

    pub fn update(&mut self, player: Point, opponent: Point) {
        self.player = player;
        self.opponent = opponent;
        if self.latched && separated(&player, &opponent, self.min_distance) {
            log::trace!("[tracker] re-armed at {:.1}", self.distance());
            self.latched = false;
        }
    }

    pub fn contact(&mut self) -> Knock {
        if self.latched || self.is_complete() {
            return Knock::Suppressed;
        }
        self.latched = true;
        self.knocks += 1;
        log::debug!("[tracker] knock {}/{}", self.knocks, KNOCKS_REQUIRED);
        match self.is_complete() {
            true => Knock::Complete,
            false => Knock::Counted(self.knocks),
        }
    }
}

impl Default for CollisionGestureTracker {
    fn default() -> Self {
        Self::new(MIN_DISTANCE)
    }
}
