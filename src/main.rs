//! Terminal Yahtzee runner (default binary).
//!
//! `play` runs the interactive game: crossterm for input and the
//! framebuffer renderer for output. `scores` and `simulate` are plain
//! stdout commands. Logs go to stderr (`RUST_LOG`, default `warn`).

mod cli;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_yahtzee::core::highscore::{FileStore, HighScoreStore, MemoryStore};
use tui_yahtzee::core::rng::RandomDice;
use tui_yahtzee::core::session::GameSession;
use tui_yahtzee::engine::{simulate, Controller};
use tui_yahtzee::input::{handle_key_event, should_quit};
use tui_yahtzee::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_yahtzee::types::HIGH_SCORE_LIMIT;

use cli::{Cli, Command, PlayArgs, ScoresArgs, SimulateArgs};

/// Idle poll interval while waiting for a key.
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Cli::parse().into_command() {
        Command::Play(args) => play(args),
        Command::Scores(args) => scores(args),
        Command::Simulate(args) => run_simulation(args),
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let mut session = GameSession::new(FileStore::new(&args.store.high_scores));
    session.new_game_mode(args.mode, &args.player, &args.opponent);
    let dice = match args.seed {
        Some(seed) => RandomDice::seeded(seed),
        None => RandomDice::from_entropy(),
    };
    log::info!("dice seed: {:?}", dice.seed());
    let mut ctl = Controller::new(session, dice);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut ctl, Duration::from_millis(args.bot_delay_ms));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, ctl: &mut Controller, bot_delay: Duration) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;
    let mut bot_due: Option<Instant> = None;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&ctl.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Bot turns play on a timer so the human can follow them.
        if ctl.is_bot_turn() {
            let due = *bot_due.get_or_insert_with(|| Instant::now() + bot_delay);
            if Instant::now() >= due {
                ctl.step_bot();
                bot_due = None;
                dirty = true;
                continue;
            }
        } else {
            bot_due = None;
        }

        let timeout = bot_due
            .map(|due| due.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        ctl.apply(action);
                        dirty = true;
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }
    }
}

fn scores(args: ScoresArgs) -> Result<()> {
    let path = &args.store.high_scores;
    let table = FileStore::new(path)
        .load()
        .with_context(|| format!("reading {}", path.display()))?;

    let mut out = io::stdout().lock();
    if table.is_empty() {
        writeln!(out, "No high scores yet.")?;
        return Ok(());
    }
    for (i, entry) in table.top(HIGH_SCORE_LIMIT).iter().enumerate() {
        if entry.opponent.is_empty() {
            writeln!(out, "{:>2}. {:>4}  {}", i + 1, entry.score, entry.player)?;
        } else {
            writeln!(
                out,
                "{:>2}. {:>4}  {} vs {}",
                i + 1,
                entry.score,
                entry.player,
                entry.opponent
            )?;
        }
    }
    Ok(())
}

fn run_simulation(args: SimulateArgs) -> Result<()> {
    let summaries = if args.record {
        simulate(args.games, args.seed, FileStore::new(&args.store.high_scores))
    } else {
        simulate(args.games, args.seed, MemoryStore::new())
    };

    let mut out = io::stdout().lock();
    for summary in &summaries {
        serde_json::to_writer(&mut out, summary)?;
        writeln!(out)?;
    }
    Ok(())
}
