use super::*;
use crate::Knocks;
use crate::Score;
use crate::Streak;
use crate::gesture::CollisionGestureTracker;
use crate::gesture::Knock;
use crate::gesture::Point;

/// Round state machine.
///
/// Owns the [`RoundState`], the [`Session`] and the knock tracker. Every
/// entry point is total: calls that arrive in the wrong phase are ignored.
/// Outbound [`Event`]s queue up until the owner drains them.
#[derive(Debug)]
pub struct RoundController {
    state: RoundState,
    choice: Option<Choice>,
    session: Session,
    tracker: CollisionGestureTracker,
    opponent: Opponent,
    outbox: Vec<Event>,
}

impl RoundController {
    pub fn new(session: Session, tracker: CollisionGestureTracker, opponent: Opponent) -> Self {
        Self {
            state: RoundState::AwaitingSelection,
            choice: None,
            session,
            tracker,
            opponent,
            outbox: Vec::new(),
        }
    }
    pub fn with_record(record: Score) -> Self {
        Self::new(
            Session::from(record),
            CollisionGestureTracker::default(),
            Opponent::default(),
        )
    }

    pub fn state(&self) -> RoundState {
        self.state
    }
    pub fn choice(&self) -> Option<Choice> {
        self.choice
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn streak(&self) -> Streak {
        self.session.streak()
    }
    pub fn record(&self) -> Score {
        self.session.record()
    }
    pub fn knocks(&self) -> Knocks {
        self.tracker.knocks()
    }
    pub fn tracker(&self) -> &CollisionGestureTracker {
        &self.tracker
    }

    /// Announce the first round.
    pub fn start(&mut self) {
        self.emit(Event::RoundStarted {
            streak: self.streak(),
        });
    }

    pub fn select(&mut self, choice: Choice) {
        if !self.state.is_selecting() {
            log::debug!("[controller] ignoring {} during {}", choice, self.state);
            return;
        }
        log::debug!("[controller] player chose {}", choice);
        self.choice = Some(choice);
        self.tracker.reset();
        self.state = RoundState::AwaitingGesture;
        self.emit(Event::ChoiceSelected(choice));
    }

    /// Per-frame fist positions, forwarded to the tracker in any phase.
    pub fn track(&mut self, player: Point, opponent: Point) {
        self.tracker.update(player, opponent);
    }

    /// A contact between the fists began.
    pub fn knock(&mut self) {
        if !self.state.is_knocking() {
            log::trace!("[controller] ignoring contact during {}", self.state);
            return;
        }
        match self.tracker.contact() {
            Knock::Suppressed => {}
            Knock::Counted(n) => self.emit(Event::GestureProgress(n)),
            Knock::Complete => {
                self.emit(Event::GestureProgress(self.tracker.knocks()));
                self.resolve();
            }
        }
    }

    /// The gesture is complete: reveal and settle the round.
    pub fn resolve(&mut self) {
        let Some(choice) = self.choice.filter(|_| self.state.is_knocking()) else {
            log::debug!("[controller] ignoring resolve during {}", self.state);
            return;
        };
        let opponent = self.opponent.throw();
        let outcome = Outcome::determine(choice, opponent);
        let raised = self.session.apply(outcome);
        let resolution = Resolution {
            choice,
            opponent,
            outcome,
            streak: self.session.streak(),
            record: self.session.record(),
            raised,
        };
        log::info!(
            "{} vs {}: {} (streak {}, record {})",
            choice,
            opponent,
            outcome,
            resolution.streak,
            resolution.record
        );
        self.state = RoundState::Resolving;
        self.emit(Event::RoundResolved(resolution));
    }

    /// The result has been on screen long enough.
    pub fn timeout(&mut self) {
        if !self.state.is_resolving() {
            log::debug!("[controller] ignoring timeout during {}", self.state);
            return;
        }
        self.restart();
    }

    /// Drop the current gesture without scoring it.
    pub fn abandon(&mut self) {
        if !self.state.is_knocking() {
            log::debug!("[controller] ignoring abandon during {}", self.state);
            return;
        }
        log::debug!("[controller] round abandoned after {} knocks", self.knocks());
        self.emit(Event::RoundAbandoned);
        self.restart();
    }

    /// Whether the player may go back to the menu now. A gesture in
    /// progress is abandoned first; a result on screen blocks the exit.
    pub fn leave(&mut self) -> bool {
        match self.state {
            RoundState::AwaitingSelection => true,
            RoundState::AwaitingGesture => {
                self.abandon();
                true
            }
            RoundState::Resolving => false,
        }
    }

    pub fn into_opponent(self) -> Opponent {
        self.opponent
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Event> {
        self.outbox.drain(..)
    }

    fn restart(&mut self) {
        self.choice = None;
        self.tracker.reset();
        self.state = RoundState::AwaitingSelection;
        self.emit(Event::RoundStarted {
            streak: self.streak(),
        });
    }

    fn emit(&mut self, event: Event) {
        log::trace!("[controller] {}", event);
        self.outbox.push(event);
    }
}

impl Default for RoundController {
    fn default() -> Self {
        Self::with_record(0)
    }
}
