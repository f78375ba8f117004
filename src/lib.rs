//! Rock Paper Scissors with a "knock three times" reveal.
//!
//! The player picks a symbol, then drags their fist against the opponent's
//! fist three times. Each knock is debounced by distance, and the third knock
//! resolves the round against a randomly drawn opponent symbol.
//!
//! ## Modules
//!
//! - [`gameplay`]: round state machine, session bookkeeping, outcomes
//! - [`gesture`]: fist bodies, contact detection, knock counting
//! - [`scene`]: game and menu scenes wiring input, timers and presentation
//! - [`save`]: high score persistence
pub mod gameplay;
pub mod gesture;
pub mod save;
pub mod scene;
#[cfg(feature = "cli")]
pub mod terminal;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Consecutive rounds won, starting at 1.
pub type Streak = u32;
/// Persisted best streak.
pub type Score = u32;
/// Scene-space length, matching the sprite coordinate system.
pub type Units = f32;
/// Number of debounced knocks counted in the current gesture.
pub type Knocks = u8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for opponents and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GESTURE PARAMETERS
// Tuned to the fist sprite geometry of the game scene.
// ============================================================================
/// Knocks needed to trigger the reveal.
pub const KNOCKS_REQUIRED: Knocks = 3;
/// Fists must separate beyond this distance before the next knock counts.
pub const MIN_DISTANCE: Units = 350.0;
/// Collision radius of either fist.
pub const FIST_RADIUS: Units = 150.0;
/// Resting position of the player's fist.
pub const PLAYER_ORIGIN: (Units, Units) = (0.0, -400.0);
/// Resting position of the opponent's fist.
pub const OPPONENT_ORIGIN: (Units, Units) = (0.0, 400.0);

// ============================================================================
// TIMING
// ============================================================================
/// How long the result stays on screen before fading.
pub const RESULT_DISPLAY: std::time::Duration = std::time::Duration::from_millis(3000);
/// Fade-out of the result label before the next round begins.
pub const RESULT_FADE: std::time::Duration = std::time::Duration::from_millis(500);
/// Frame period of the interactive driver.
pub const FRAME: std::time::Duration = std::time::Duration::from_millis(16);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
