use std::path::PathBuf;

use clap::Parser;
use farmdice::{GameConfig, WIN_SCORE};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Clone, Debug)]
#[command(about = "Simulates games of farm dice and logs every turn")]
pub struct Args {
    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    pub num_games: usize,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// CSV file that receives one row per turn
    #[arg(short, long, default_value = "turns.csv")]
    pub output: PathBuf,

    /// Also record each game's turns as JSON files into this directory
    #[arg(short, long)]
    pub record_games_to_directory: Option<PathBuf>,

    /// Score that wins a game
    #[arg(long, default_value_t = WIN_SCORE)]
    pub win_score: i32,

    /// Abandon games that haven't been won after this many rounds
    #[arg(long)]
    pub max_rounds: Option<u32>,

    /// Never reset hatched dice and never cash out after the first roll
    #[arg(long, default_value_t = false)]
    pub cautious: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            win_score: self.win_score,
            max_rounds: self.max_rounds,
        }
    }
}
