use crate::RESULT_DISPLAY;
use crate::RESULT_FADE;
use std::time::Duration;

/// Configuration for scene timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub display: Duration,
    pub fade: Duration,
}

impl TimerConfig {
    /// Time from reveal until the next round begins.
    pub fn result(&self) -> Duration {
        self.display + self.fade
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            display: RESULT_DISPLAY,
            fade: RESULT_FADE,
        }
    }
}

/// One-shot deadline on a clock that only advances with frame ticks.
#[derive(Debug, Clone)]
pub struct Timer {
    config: TimerConfig,
    clock: Duration,
    deadline: Option<Duration>,
}

impl Timer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            clock: Duration::ZERO,
            deadline: None,
        }
    }
    pub fn with_defaults() -> Self {
        Self::new(TimerConfig::default())
    }
    pub fn start_result(&mut self) {
        self.deadline = Some(self.clock + self.config.result());
    }
    pub fn clear(&mut self) {
        self.deadline = None;
    }
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_sub(self.clock))
    }
    /// Advance the clock. True exactly once, on the tick that passes the deadline.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.clock += dt;
        match self.deadline {
            Some(deadline) if self.clock >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
