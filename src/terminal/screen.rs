use crate::Knocks;
use crate::KNOCKS_REQUIRED;
use crate::Streak;
use crate::gameplay::*;
use crate::scene::Presenter;
use crate::scene::SceneKind;
use colored::Colorize;

/// Prints every effect as a line of colored text.
#[derive(Debug, Default)]
pub struct Terminal;

impl Presenter for Terminal {
    fn round_started(&mut self, streak: Streak) {
        println!();
        println!("{} {}", "Round".bold(), streak.to_string().bold().cyan());
    }
    fn choice_selected(&mut self, choice: Choice) {
        println!("You hold {}. Knock {} times!", choice.to_string().bold(), KNOCKS_REQUIRED);
    }
    fn gesture_progress(&mut self, knocks: Knocks) {
        println!("{} {}/{}", "*knock*".yellow(), knocks, KNOCKS_REQUIRED);
    }
    fn round_resolved(&mut self, r: &Resolution) {
        let verdict = match r.outcome {
            Outcome::Win => r.outcome.to_string().green().bold(),
            Outcome::Lose => r.outcome.to_string().red().bold(),
            Outcome::Draw => r.outcome.to_string().blue().bold(),
        };
        println!("{} vs {}  {}", r.choice, r.opponent, verdict);
        if r.raised {
            println!("{} {}", "New high score:".magenta(), r.record);
        } else {
            println!("High score: {}", r.record);
        }
    }
    fn round_abandoned(&mut self) {
        println!("{}", "Round abandoned".dimmed());
    }
    fn record_reset(&mut self) {
        println!("{}", "High score reset".magenta());
    }
    fn transition(&mut self, to: SceneKind) {
        println!("{}", format!("~ {} ~", to).dimmed());
    }
}
