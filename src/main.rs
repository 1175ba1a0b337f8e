use anyhow::Result;
use arcade_snake::game::{Difficulty, GameConfig};
use arcade_snake::modes::HumanMode;
use arcade_snake::score::JsonFileStore;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arcade-snake")]
#[command(version, about = "Arcade snake game for the terminal")]
struct Cli {
    /// Difficulty preset (sets starting speed and obstacles)
    #[arg(long, default_value = "medium")]
    difficulty: DifficultyArg,

    /// Grid width
    #[arg(long, default_value = "25")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "25")]
    height: usize,

    /// Fixed RNG seed, for reproducible rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the high score file
    #[arg(long, default_value = "snake_scores.json")]
    scores: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let difficulty = Difficulty::from(cli.difficulty);
    let config = GameConfig {
        start_speed_divisor: difficulty.speed_divisor(),
        obstacles_enabled: difficulty.has_obstacles(),
        ..GameConfig::new(cli.width, cli.height)
    };

    let store = JsonFileStore::new(cli.scores);
    let mut human_mode = HumanMode::new(config, Box::new(store), cli.seed)?;
    human_mode.run().await?;

    Ok(())
}
