//! Interactive Game Binary
//!
//! Plays Rock Paper Scissors against a random opponent in the terminal.
//! The high score persists between runs.
//!
//! Options: --save, --config, --seed, --min-distance, --rounds

use clap::Parser;
use rochambeau::gameplay::Opponent;
use rochambeau::save::Disk;
use rochambeau::scene::Config;
use rochambeau::scene::Director;
use rochambeau::terminal::Human;
use rochambeau::terminal::Terminal;
use rochambeau::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// High score file
    #[arg(long)]
    save: Option<PathBuf>,
    /// JSON scene config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for a reproducible opponent
    #[arg(long)]
    seed: Option<u64>,
    /// Separation required between knocks
    #[arg(long)]
    min_distance: Option<Units>,
    /// Quit after this many resolved rounds
    #[arg(long)]
    rounds: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let mut config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(min_distance) = args.min_distance {
        config.min_distance = min_distance;
    }
    let store = Disk::open(args.save.unwrap_or_else(Disk::default_path));
    let opponent = args.seed.map(Opponent::seeded).unwrap_or_default();
    let director = Director::new(store, Terminal, config, opponent);
    let director = Human::new(args.rounds).run(director).await?;
    log::info!("high score {}", director.record());
    Ok(())
}
