use super::TimerConfig;
use crate::gesture::CollisionGestureTracker;
use crate::gesture::Fist;
use crate::gesture::Point;
use crate::*;
use anyhow::Context;
use std::time::Duration;

/// Scene geometry and timing. Missing fields fall back to the crate constants.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub min_distance: Units,
    pub fist_radius: Units,
    pub player_origin: Point,
    pub opponent_origin: Point,
    pub display_ms: u64,
    pub fade_ms: u64,
}

impl Config {
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
    }
    pub fn timer(&self) -> TimerConfig {
        TimerConfig {
            display: Duration::from_millis(self.display_ms),
            fade: Duration::from_millis(self.fade_ms),
        }
    }
    pub fn tracker(&self) -> CollisionGestureTracker {
        CollisionGestureTracker::new(self.min_distance)
    }
    pub fn player(&self) -> Fist {
        Fist::new(self.player_origin, self.fist_radius)
    }
    pub fn opponent(&self) -> Fist {
        Fist::new(self.opponent_origin, self.fist_radius)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_distance: MIN_DISTANCE,
            fist_radius: FIST_RADIUS,
            player_origin: Point::from(PLAYER_ORIGIN),
            opponent_origin: Point::from(OPPONENT_ORIGIN),
            display_ms: RESULT_DISPLAY.as_millis() as u64,
            fade_ms: RESULT_FADE.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_fists_are_separated() {
        let config = Config::default();
        let distance = config.player_origin.distance(&config.opponent_origin);
        assert!(distance > config.min_distance);
        assert!(!config.player().touches(&config.opponent()));
    }

    #[test]
    fn contact_happens_inside_rearm_distance() {
        let config = Config::default();
        assert!(2.0 * config.fist_radius < config.min_distance);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config = serde_json::from_str::<Config>(r#"{ "min_distance": 200.0 }"#).unwrap();
        assert_eq!(config.min_distance, 200.0);
        assert_eq!(config.fist_radius, FIST_RADIUS);
        assert_eq!(config.timer(), TimerConfig::default());
    }
}
