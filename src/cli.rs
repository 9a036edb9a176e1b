//! Command-line interface.
//!
//! Every option has an environment fallback (`YAHTZEE_*`), so a wrapper
//! script can configure the game without flags.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tui_yahtzee::types::{GameMode, DEFAULT_HIGH_SCORE_FILE};

#[derive(Parser, Debug)]
#[command(name = "tui-yahtzee", version)]
#[command(about = "Terminal Yahtzee for one or two players, or against a bot")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub play: PlayArgs,
}

impl Cli {
    /// The subcommand to run; plain `tui-yahtzee` means `play`.
    pub fn into_command(self) -> Command {
        match self.command {
            Some(command) => command,
            None => Command::Play(self.play),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (default)
    Play(PlayArgs),
    /// Print the high-score list
    Scores(ScoresArgs),
    /// Run bot-vs-bot games and print one JSON summary per game
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// High-score file
    #[arg(long, env = "YAHTZEE_HIGH_SCORES", default_value = DEFAULT_HIGH_SCORE_FILE)]
    pub high_scores: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// practice (solo), human (two players) or bot
    #[arg(long, short, default_value = "bot", value_parser = parse_mode)]
    pub mode: GameMode,

    /// Name of player one
    #[arg(long, default_value = "Player 1", value_parser = parse_name)]
    pub player: String,

    /// Name of player two in `human` mode
    #[arg(long, default_value = "Player 2", value_parser = parse_name)]
    pub opponent: String,

    /// Dice seed for a reproducible game
    #[arg(long, env = "YAHTZEE_SEED")]
    pub seed: Option<u64>,

    /// Pause before each bot turn, in milliseconds
    #[arg(long, env = "YAHTZEE_BOT_DELAY_MS", default_value_t = 800)]
    pub bot_delay_ms: u64,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ScoresArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Number of games
    #[arg(long, short, default_value_t = 1)]
    pub games: u32,

    /// Seed of the first game; game N uses seed + N
    #[arg(long, env = "YAHTZEE_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Record results in the high-score file
    #[arg(long)]
    pub record: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

fn parse_mode(s: &str) -> Result<GameMode, String> {
    GameMode::from_str(s).ok_or_else(|| format!("unknown mode {:?} (practice, human, bot)", s))
}

/// Names go into the comma-separated high-score file as is.
fn parse_name(s: &str) -> Result<String, String> {
    if s.contains(|c: char| c == ',' || c.is_control()) {
        return Err(format!("{:?}: names cannot contain commas or control characters", s));
    }
    Ok(s.to_string())
}
