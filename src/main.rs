//! Terminal runner (default binary).
//!
//! Polls crossterm key events into a per-tick queue, steps the session with
//! the real elapsed time, then draws the frame through the diffing screen.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::core::GameConfig;
use blockfall::engine::Session;
use blockfall::input::{handle_key_event, InputQueue};
use blockfall::term::{FrameBuffer, GameView, Screen, Viewport};
use blockfall::types::{Flow, TICK_MS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece generator. The same seed replays the same pieces.
    /// Random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,
    /// JSON ruleset file; missing fields take their defaults.
    /// Example: `{"grid_width": 12, "clear_animation_ms": 300}`
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write logs to this file (the terminal is busy drawing the game).
    /// Filter with `RUST_LOG`, default `info`.
    #[arg(short, long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    let session = Session::with_config(config, seed).context("invalid game config")?;
    info!(seed, "starting game");

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, session);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

fn run(screen: &mut Screen, mut session: Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut queue = InputQueue::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Collect input until the next tick is due.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(logical) = handle_key_event(key) {
                        queue.push(logical);
                    }
                }
                Event::Resize(_, _) => screen.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() < tick_duration {
            continue;
        }
        let elapsed_ms = u32::try_from(last_tick.elapsed().as_millis()).unwrap_or(u32::MAX);
        last_tick = Instant::now();

        let flow = session.step(queue.as_slice(), elapsed_ms);
        queue.clear();
        if flow == Flow::Quit {
            info!(score = session.engine().score(), "quit");
            return Ok(());
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session, Viewport::new(w, h), &mut fb);
        screen.present(&mut fb)?;
    }
}
