use super::*;
use crate::Score;
use crate::gameplay::Opponent;
use crate::save::Store;

/// Start screen. Offers a new game and a high score reset.
#[derive(Debug)]
pub struct Menu<S, P> {
    store: S,
    presenter: P,
    config: Config,
    opponent: Opponent,
}

impl<S, P> Menu<S, P>
where
    S: Store,
    P: Presenter,
{
    pub fn new(store: S, presenter: P, config: Config, opponent: Opponent) -> Self {
        Self {
            store,
            presenter,
            config,
            opponent,
        }
    }
    pub fn record(&self) -> Score {
        self.store.high_score()
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
    pub fn reset_record(&mut self) {
        match self.store.set_high_score(0) {
            Ok(()) => log::info!("high score reset"),
            Err(e) => log::warn!("[menu] high score not reset: {:#}", e),
        }
        self.presenter.record_reset();
    }
    pub fn into_parts(self) -> (S, P, Config, Opponent) {
        (self.store, self.presenter, self.config, self.opponent)
    }
}

impl<S, P> From<Menu<S, P>> for GameScene<S, P>
where
    S: Store,
    P: Presenter,
{
    fn from(menu: Menu<S, P>) -> Self {
        let (store, presenter, config, opponent) = menu.into_parts();
        GameScene::new(store, presenter, config, opponent)
    }
}

impl<S, P> From<GameScene<S, P>> for Menu<S, P>
where
    S: Store,
    P: Presenter,
{
    fn from(game: GameScene<S, P>) -> Self {
        let (store, presenter, config, opponent) = game.into_parts();
        Menu::new(store, presenter, config, opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::Memory;

    #[test]
    fn reset_clears_store() {
        let mut menu = Menu::new(Memory::from(8), Recorder::default(), Config::default(), Opponent::default());
        assert_eq!(menu.record(), 8);
        menu.reset_record();
        assert_eq!(menu.record(), 0);
        assert_eq!(menu.presenter().resets, 1);
    }

    #[test]
    fn game_reads_reset_record() {
        let mut menu = Menu::new(Memory::from(8), Recorder::default(), Config::default(), Opponent::default());
        menu.reset_record();
        let game = GameScene::from(menu);
        assert_eq!(game.controller().record(), 1);
    }
}
