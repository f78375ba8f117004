use super::SceneKind;
use crate::Knocks;
use crate::Streak;
use crate::gameplay::*;

/// Visual and audio side of the game: textures, labels, particles,
/// sounds, haptics and scene transitions.
///
/// Every method is fire-and-forget and defaults to a no-op, so a missing
/// effect never holds up the round. Nothing here can feed back into
/// round state.
pub trait Presenter {
    fn round_started(&mut self, _streak: Streak) {}
    fn choice_selected(&mut self, _choice: Choice) {}
    /// Doubles as the haptic cue for a counted knock.
    fn gesture_progress(&mut self, _knocks: Knocks) {}
    fn round_resolved(&mut self, _resolution: &Resolution) {}
    fn round_abandoned(&mut self) {}
    fn record_reset(&mut self) {}
    fn transition(&mut self, _to: SceneKind) {}

    fn present(&mut self, event: &Event) {
        match event {
            Event::RoundStarted { streak } => self.round_started(*streak),
            Event::ChoiceSelected(choice) => self.choice_selected(*choice),
            Event::GestureProgress(knocks) => self.gesture_progress(*knocks),
            Event::RoundResolved(resolution) => self.round_resolved(resolution),
            Event::RoundAbandoned => self.round_abandoned(),
        }
    }
}

/// Presentation with every effect missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Presenter for Silent {}

/// Keeps everything it was asked to show. Handy for headless runs.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
    pub transitions: Vec<SceneKind>,
    pub resets: usize,
}

impl Recorder {
    pub fn resolutions(&self) -> Vec<Resolution> {
        self.events.iter().filter_map(Event::resolution).collect()
    }
    pub fn knocks(&self) -> Vec<Knocks> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::GestureProgress(n) => Some(*n),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for Recorder {
    fn present(&mut self, event: &Event) {
        self.events.push(*event);
    }
    fn record_reset(&mut self) {
        self.resets += 1;
    }
    fn transition(&mut self, to: SceneKind) {
        self.transitions.push(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Knocker(Vec<Knocks>);

    impl Presenter for Knocker {
        fn gesture_progress(&mut self, knocks: Knocks) {
            self.0.push(knocks);
        }
    }

    #[test]
    fn present_dispatches_to_hooks() {
        let mut presenter = Knocker::default();
        presenter.present(&Event::RoundStarted { streak: 1 });
        presenter.present(&Event::GestureProgress(1));
        presenter.present(&Event::RoundAbandoned);
        presenter.present(&Event::GestureProgress(2));
        assert_eq!(presenter.0, vec![1, 2]);
    }

    #[test]
    fn silent_accepts_everything() {
        let mut presenter = Silent;
        presenter.present(&Event::ChoiceSelected(Choice::Rock));
        presenter.record_reset();
        presenter.transition(SceneKind::Menu);
    }
}
