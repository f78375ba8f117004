use crate::FRAME;
use crate::Units;
use crate::gameplay::*;
use crate::save::Store;
use crate::scene::*;
use dialoguer::Select;
use tokio::time::Interval;
use tokio::time::MissedTickBehavior;

/// Frames spent dragging the fist from rest into the opponent.
const DRAG_FRAMES: usize = 12;

/// Drives the scenes from terminal prompts.
///
/// Menu and symbol choices are dialoguer selections. Each knock plays out
/// as a pointer drag animated on the frame clock, so contacts, debouncing
/// and timeouts go through exactly the same path as touch input.
pub struct Human {
    frames: Interval,
    rounds: Option<usize>,
    played: usize,
}

impl Human {
    /// Must be called from within a tokio runtime.
    pub fn new(rounds: Option<usize>) -> Self {
        let mut frames = tokio::time::interval(FRAME);
        frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            frames,
            rounds,
            played: 0,
        }
    }

    pub async fn run<S, P>(mut self, mut director: Director<S, P>) -> anyhow::Result<Director<S, P>>
    where
        S: Store,
        P: Presenter,
    {
        log::info!("entering game");
        loop {
            if self.rounds.is_some_and(|n| self.played >= n) {
                return Ok(director);
            }
            director = match director.kind() {
                SceneKind::Menu => {
                    let items = [
                        "New game".to_string(),
                        format!("Reset high score ({})", director.record()),
                        "Quit".to_string(),
                    ];
                    match Select::new().items(&items).default(0).interact()? {
                        0 => director.new_game(),
                        1 => {
                            director.reset_record();
                            director
                        }
                        _ => return Ok(director),
                    }
                }
                SceneKind::Game => self.round(director).await?,
            };
        }
    }

    async fn round<S, P>(&mut self, mut director: Director<S, P>) -> anyhow::Result<Director<S, P>>
    where
        S: Store,
        P: Presenter,
    {
        let items = ["Rock", "Paper", "Scissors", "Back"];
        let pick = Select::new()
            .with_prompt("Pick a symbol")
            .items(&items)
            .default(0)
            .interact()?;
        let Ok(choice) = Choice::try_from(items[pick]) else {
            return Ok(director.back());
        };
        director.select(choice);
        while Self::state(&director) == Some(RoundState::AwaitingGesture) {
            match Select::new().items(&["Knock", "Back"]).default(0).interact()? {
                0 => self.knock(&mut director).await,
                _ => return Ok(director.back()),
            }
        }
        while Self::state(&director) == Some(RoundState::Resolving) {
            self.frame(&mut director).await;
        }
        self.played += 1;
        Ok(director)
    }

    async fn knock<S, P>(&mut self, director: &mut Director<S, P>)
    where
        S: Store,
        P: Presenter,
    {
        let Some((origin, target)) = director
            .game()
            .map(|g| (g.player().origin(), g.opponent().position()))
        else {
            return;
        };
        director.pointer(Pointer::Down(origin));
        self.frame(director).await;
        for step in 1..=DRAG_FRAMES {
            let t = step as Units / DRAG_FRAMES as Units;
            director.pointer(Pointer::Move(origin + (target - origin).scale(t)));
            self.frame(director).await;
        }
        director.pointer(Pointer::Up);
        self.frame(director).await;
    }

    async fn frame<S, P>(&mut self, director: &mut Director<S, P>)
    where
        S: Store,
        P: Presenter,
    {
        self.frames.tick().await;
        director.tick(FRAME);
    }

    fn state<S, P>(director: &Director<S, P>) -> Option<RoundState>
    where
        S: Store,
        P: Presenter,
    {
        director.game().map(GameScene::state)
    }
}
