use super::*;
use crate::gameplay::*;
use crate::gesture::*;
use crate::save::Store;
use std::time::Duration;

/// One gameplay session.
///
/// Owns the round controller, both fists, the result timer and the two
/// outward collaborators. The platform drives it with [`GameScene::select`]
/// for symbol buttons, [`GameScene::pointer`] for touches and
/// [`GameScene::tick`] once per frame.
#[derive(Debug)]
pub struct GameScene<S, P> {
    controller: RoundController,
    player: Fist,
    opponent: Fist,
    contact: Contact,
    timer: Timer,
    config: Config,
    store: S,
    presenter: P,
}

impl<S, P> GameScene<S, P>
where
    S: Store,
    P: Presenter,
{
    pub fn new(store: S, presenter: P, config: Config, opponent: Opponent) -> Self {
        let record = store.high_score();
        log::debug!("[game] loaded record {}", record);
        let mut scene = Self {
            controller: RoundController::new(Session::from(record), config.tracker(), opponent),
            player: config.player(),
            opponent: config.opponent(),
            contact: Contact::default(),
            timer: Timer::new(config.timer()),
            config,
            store,
            presenter,
        };
        scene.controller.start();
        scene.flush();
        scene
    }

    pub fn state(&self) -> RoundState {
        self.controller.state()
    }
    pub fn controller(&self) -> &RoundController {
        &self.controller
    }
    pub fn player(&self) -> &Fist {
        &self.player
    }
    pub fn opponent(&self) -> &Fist {
        &self.opponent
    }
    pub fn timer(&self) -> &Timer {
        &self.timer
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// A symbol button was tapped.
    pub fn select(&mut self, choice: Choice) {
        self.controller.select(choice);
        self.flush();
    }

    pub fn pointer(&mut self, pointer: Pointer) {
        match pointer {
            Pointer::Down(at) if self.controller.state().is_knocking() => {
                if self.player.grab(at) {
                    log::trace!("[game] grabbed fist at {}", at);
                }
            }
            Pointer::Down(_) => {}
            Pointer::Move(to) if self.controller.state().is_knocking() => self.player.drag(to),
            Pointer::Move(_) => {}
            Pointer::Up | Pointer::Cancel => self.player.release(),
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self, dt: Duration) {
        self.controller
            .track(self.player.position(), self.opponent.position());
        if self.contact.begins(&self.player, &self.opponent) {
            self.controller.knock();
        }
        if self.timer.tick(dt) {
            self.controller.timeout();
        }
        self.flush();
    }

    /// Back button. Abandons a gesture in progress; refused while a
    /// result is on screen.
    pub fn leave(&mut self) -> bool {
        let left = self.controller.leave();
        if left {
            self.player.release();
        }
        self.flush();
        left
    }

    pub fn into_parts(self) -> (S, P, Config, Opponent) {
        (
            self.store,
            self.presenter,
            self.config,
            self.controller.into_opponent(),
        )
    }

    fn flush(&mut self) {
        let events = self.controller.drain().collect::<Vec<_>>();
        for event in events {
            match event {
                Event::RoundResolved(resolution) => {
                    self.player.release();
                    self.contact.clear();
                    self.timer.start_result();
                    if resolution.raised {
                        self.persist(resolution.record);
                    }
                }
                Event::RoundStarted { .. } => {
                    self.player.release();
                    self.contact.clear();
                    self.timer.clear();
                }
                _ => {}
            }
            self.presenter.present(&event);
        }
    }

    fn persist(&mut self, record: crate::Score) {
        match self.store.set_high_score(record) {
            Ok(()) => log::debug!("[game] saved record {}", record),
            Err(e) => log::warn!("[game] record {} not saved: {:#}", record, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::Memory;

    const FRAME: Duration = Duration::from_millis(16);

    struct Broken;

    impl Store for Broken {
        fn high_score(&self) -> crate::Score {
            0
        }
        fn set_high_score(&mut self, _: crate::Score) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("disk full"))
        }
    }

    fn scene<S: Store>(store: S, opponent: impl Into<Opponent>) -> GameScene<S, Recorder> {
        GameScene::new(store, Recorder::default(), Config::default(), opponent.into())
    }

    /// Drag the fist into the opponent and back out again.
    fn knock<S: Store, P: Presenter>(scene: &mut GameScene<S, P>) {
        let origin = scene.player().origin();
        let target = scene.opponent().position();
        scene.pointer(Pointer::Down(origin));
        scene.tick(FRAME);
        scene.pointer(Pointer::Move(Point::new(target.x, target.y - 100.0)));
        scene.tick(FRAME);
        scene.pointer(Pointer::Up);
        scene.tick(FRAME);
    }

    fn wait<S: Store, P: Presenter>(scene: &mut GameScene<S, P>, duration: Duration) {
        let frames = duration.as_millis() / FRAME.as_millis() + 1;
        (0..frames).for_each(|_| scene.tick(FRAME));
    }

    #[test]
    fn announces_first_round() {
        let scene = scene(Memory::from(4), Choice::Rock);
        assert_eq!(scene.presenter().events, vec![Event::RoundStarted { streak: 1 }]);
        assert_eq!(scene.controller().record(), 4);
    }

    #[test]
    fn fist_is_inert_before_selection() {
        let mut scene = scene(Memory::default(), Choice::Rock);
        let origin = scene.player().origin();
        scene.pointer(Pointer::Down(origin));
        scene.pointer(Pointer::Move(Point::new(0.0, 300.0)));
        scene.tick(FRAME);
        assert_eq!(scene.player().position(), origin);
        assert_eq!(scene.controller().knocks(), 0);
    }

    #[test]
    fn three_drags_resolve_and_persist() {
        let mut scene = scene(Memory::default(), Choice::Scissors);
        scene.select(Choice::Rock);
        knock(&mut scene);
        knock(&mut scene);
        assert_eq!(scene.state(), RoundState::AwaitingGesture);
        knock(&mut scene);
        assert_eq!(scene.state(), RoundState::Resolving);
        assert_eq!(scene.presenter().knocks(), vec![1, 2, 3]);
        let resolution = scene.presenter().resolutions()[0];
        assert_eq!(resolution.outcome, Outcome::Win);
        assert!(resolution.raised);
        assert_eq!(scene.store().high_score(), 2);
    }

    #[test]
    fn holding_inside_counts_once() {
        let mut scene = scene(Memory::default(), Choice::Scissors);
        scene.select(Choice::Rock);
        let origin = scene.player().origin();
        scene.pointer(Pointer::Down(origin));
        for y in [200.0, 250.0, 300.0, 100.0, 120.0, 250.0] {
            scene.pointer(Pointer::Move(Point::new(0.0, y)));
            scene.tick(FRAME);
        }
        assert_eq!(scene.controller().knocks(), 1);
    }

    #[test]
    fn shallow_pullback_does_not_rearm() {
        let mut scene = scene(Memory::default(), Choice::Scissors);
        scene.select(Choice::Rock);
        let origin = scene.player().origin();
        scene.pointer(Pointer::Down(origin));
        for y in [200.0, 80.0, 200.0, 80.0, 200.0] {
            scene.pointer(Pointer::Move(Point::new(0.0, y)));
            scene.tick(FRAME);
        }
        assert_eq!(scene.controller().knocks(), 1);
        scene.pointer(Pointer::Move(Point::new(0.0, 0.0)));
        scene.tick(FRAME);
        scene.pointer(Pointer::Move(Point::new(0.0, 200.0)));
        scene.tick(FRAME);
        assert_eq!(scene.controller().knocks(), 2);
    }

    #[test]
    fn cancel_releases_like_up() {
        let mut scene = scene(Memory::default(), Choice::Rock);
        scene.select(Choice::Paper);
        let origin = scene.player().origin();
        scene.pointer(Pointer::Down(origin));
        scene.pointer(Pointer::Move(Point::new(50.0, 0.0)));
        scene.pointer(Pointer::Cancel);
        assert!(!scene.player().is_held());
        assert_eq!(scene.player().position(), origin);
    }

    #[test]
    fn missed_press_keeps_dragging() {
        let mut scene = scene(Memory::default(), Choice::Rock);
        scene.select(Choice::Paper);
        let origin = scene.player().origin();
        scene.pointer(Pointer::Down(origin));
        scene.pointer(Pointer::Move(Point::new(0.0, 200.0)));
        scene.tick(FRAME);
        assert_eq!(scene.controller().knocks(), 1);
        scene.pointer(Pointer::Down(Point::new(900.0, 900.0)));
        scene.pointer(Pointer::Move(origin));
        scene.tick(FRAME);
        assert!(scene.player().is_held());
        assert_eq!(scene.player().position(), origin);
        assert!(!scene.controller().tracker().is_latched());
        scene.pointer(Pointer::Move(Point::new(0.0, 200.0)));
        scene.tick(FRAME);
        assert_eq!(scene.controller().knocks(), 2);
    }

    #[test]
    fn timeout_starts_next_round() {
        let mut scene = scene(Memory::default(), Choice::Rock);
        scene.select(Choice::Rock);
        (0..3).for_each(|_| knock(&mut scene));
        assert_eq!(scene.state(), RoundState::Resolving);
        wait(&mut scene, Duration::from_millis(1000));
        assert_eq!(scene.state(), RoundState::Resolving);
        let result = scene.config().timer().result();
        wait(&mut scene, result);
        assert_eq!(scene.state(), RoundState::AwaitingSelection);
        assert_eq!(
            scene.presenter().events.last(),
            Some(&Event::RoundStarted { streak: 1 })
        );
    }

    #[test]
    fn input_ignored_while_resolving() {
        let mut scene = scene(Memory::default(), Choice::Rock);
        scene.select(Choice::Rock);
        (0..3).for_each(|_| knock(&mut scene));
        scene.select(Choice::Paper);
        knock(&mut scene);
        assert_eq!(scene.state(), RoundState::Resolving);
        assert_eq!(scene.presenter().resolutions().len(), 1);
    }

    #[test]
    fn store_failure_is_not_fatal() {
        let mut scene = scene(Broken, Choice::Scissors);
        scene.select(Choice::Rock);
        (0..3).for_each(|_| knock(&mut scene));
        assert_eq!(scene.controller().record(), 2);
        let result = scene.config().timer().result();
        wait(&mut scene, result);
        assert_eq!(scene.state(), RoundState::AwaitingSelection);
    }

    #[test]
    fn leave_mid_gesture_abandons() {
        let mut scene = scene(Memory::default(), Choice::Rock);
        scene.select(Choice::Rock);
        knock(&mut scene);
        assert!(scene.leave());
        assert_eq!(scene.state(), RoundState::AwaitingSelection);
        assert!(scene.presenter().events.contains(&Event::RoundAbandoned));
    }

    #[test]
    fn leave_refused_while_resolving() {
        let mut scene = scene(Memory::default(), Choice::Rock);
        scene.select(Choice::Rock);
        (0..3).for_each(|_| knock(&mut scene));
        assert!(!scene.leave());
        assert_eq!(scene.state(), RoundState::Resolving);
    }
}
