use super::*;
use crate::gameplay::*;
use crate::save::Store;
use std::time::Duration;

/// Which scene is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Menu,
    Game,
}

impl std::fmt::Display for SceneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Menu => write!(f, "menu"),
            Self::Game => write!(f, "game"),
        }
    }
}

/// The active scene. Transitions consume the current scene and hand the
/// store, presenter, config and opponent over to the next one.
#[derive(Debug)]
pub enum Director<S, P> {
    Menu(Menu<S, P>),
    Game(GameScene<S, P>),
}

impl<S, P> Director<S, P>
where
    S: Store,
    P: Presenter,
{
    pub fn new(store: S, presenter: P, config: Config, opponent: Opponent) -> Self {
        Self::Menu(Menu::new(store, presenter, config, opponent))
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Self::Menu(_) => SceneKind::Menu,
            Self::Game(_) => SceneKind::Game,
        }
    }
    pub fn record(&self) -> crate::Score {
        match self {
            Self::Menu(menu) => menu.record(),
            Self::Game(game) => game.controller().record(),
        }
    }
    pub fn game(&self) -> Option<&GameScene<S, P>> {
        match self {
            Self::Game(game) => Some(game),
            Self::Menu(_) => None,
        }
    }
    pub fn menu(&self) -> Option<&Menu<S, P>> {
        match self {
            Self::Menu(menu) => Some(menu),
            Self::Game(_) => None,
        }
    }

    /// "New game" on the menu.
    pub fn new_game(self) -> Self {
        match self {
            Self::Menu(mut menu) => {
                log::debug!("[director] {} -> {}", SceneKind::Menu, SceneKind::Game);
                menu.presenter_mut().transition(SceneKind::Game);
                Self::Game(GameScene::from(menu))
            }
            game => game,
        }
    }

    /// "Back" in the game. Stays put while a result is on screen.
    pub fn back(self) -> Self {
        match self {
            Self::Game(mut game) => {
                if !game.leave() {
                    log::debug!("[director] back refused during {}", game.state());
                    return Self::Game(game);
                }
                log::debug!("[director] {} -> {}", SceneKind::Game, SceneKind::Menu);
                let mut menu = Menu::from(game);
                menu.presenter_mut().transition(SceneKind::Menu);
                Self::Menu(menu)
            }
            menu => menu,
        }
    }

    pub fn reset_record(&mut self) {
        if let Self::Menu(menu) = self {
            menu.reset_record();
        }
    }
    pub fn select(&mut self, choice: Choice) {
        if let Self::Game(game) = self {
            game.select(choice);
        }
    }
    pub fn pointer(&mut self, pointer: Pointer) {
        if let Self::Game(game) = self {
            game.pointer(pointer);
        }
    }
    pub fn tick(&mut self, dt: Duration) {
        if let Self::Game(game) = self {
            game.tick(dt);
        }
    }
}
