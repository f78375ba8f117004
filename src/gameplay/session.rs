use super::Outcome;
use crate::Score;
use crate::Streak;

/// Streak and record bookkeeping for one gameplay session.
///
/// The streak starts at 1, grows with every win, survives draws and
/// falls back to 1 on a loss. The record is the best streak ever observed,
/// seeded from the persistence store and never below the opening streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    streak: Streak,
    record: Score,
}

impl Session {
    pub fn streak(&self) -> Streak {
        self.streak
    }
    pub fn record(&self) -> Score {
        self.record
    }
    /// Apply a round result. Returns true when the record was raised.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Draw => false,
            Outcome::Lose => {
                self.streak = 1;
                false
            }
            Outcome::Win => {
                self.streak += 1;
                if self.streak > self.record {
                    self.record = self.streak;
                    true
                } else {
                    false
                }
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from(0)
    }
}

impl From<Score> for Session {
    fn from(record: Score) -> Self {
        Self {
            streak: 1,
            record: record.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Outcome::*;

    #[test]
    fn starts_at_one() {
        let session = Session::from(7);
        assert_eq!(session.streak(), 1);
        assert_eq!(session.record(), 7);
    }

    #[test]
    fn consecutive_wins() {
        let mut session = Session::default();
        for n in 1..=10 {
            session.apply(Win);
            assert_eq!(session.streak(), n + 1);
        }
    }

    #[test]
    fn loss_resets_streak() {
        let mut session = Session::default();
        (0..5).for_each(|_| {
            session.apply(Win);
        });
        assert!(!session.apply(Lose));
        assert_eq!(session.streak(), 1);
        assert_eq!(session.record(), 6);
    }

    #[test]
    fn fresh_session_record_covers_streak() {
        let mut session = Session::from(0);
        assert_eq!(session.record(), 1);
        assert!(!session.apply(Lose));
        assert!(!session.apply(Draw));
        assert!(session.record() >= session.streak());
        assert!(session.apply(Win));
        assert_eq!(session.record(), 2);
    }

    #[test]
    fn draw_keeps_streak() {
        let mut session = Session::default();
        session.apply(Win);
        session.apply(Draw);
        assert_eq!(session.streak(), 2);
    }

    #[test]
    fn record_raised_only_when_exceeded() {
        let mut session = Session::from(3);
        assert!(!session.apply(Win));
        assert!(!session.apply(Win));
        assert!(session.apply(Win));
        assert_eq!(session.record(), 4);
    }

    #[test]
    fn record_tracks_best_winning_streak() {
        let sequence = [Win, Win, Draw, Lose, Win, Lose, Win, Win, Win, Draw, Lose];
        for initial in [0, 3, 9] {
            let mut session = Session::from(initial);
            let mut best = initial.max(session.streak());
            for outcome in sequence {
                let before = session.record();
                session.apply(outcome);
                best = best.max(session.streak());
                assert!(session.record() >= before);
                assert!(session.record() >= session.streak());
            }
            assert_eq!(session.record(), best);
        }
    }
}
