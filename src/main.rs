//! Terminal Tetris runner (default binary).
//!
//! Reads the engine configuration from the environment, then runs a fixed
//! frame loop: poll crossterm input until the frame is due, feed intents and
//! elapsed time to the engine, render the snapshot.
//!
//! Logging is off unless `MINI_TETRIS_LOG` names a file; `RUST_LOG` filters it.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

use mini_tetris::core::{EngineConfig, GameEngine, Snapshot};
use mini_tetris::input::{handle_key_event, should_quit};
use mini_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use mini_tetris::types::FRAME_MS;

const ENV_LOG: &str = "MINI_TETRIS_LOG";

fn main() -> Result<()> {
    init_logging()?;

    let config = EngineConfig::from_env(clock_seed()).context("invalid configuration")?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let score = result?;
    println!("Score: {}", score);
    Ok(())
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(ENV_LOG) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Play until the player quits; returns the final score.
fn run(term: &mut TerminalRenderer, config: EngineConfig) -> Result<u32> {
    let mut engine = GameEngine::new(config);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = engine.snapshot();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        engine.snapshot_into(&mut snap);
        render(term, &view, &snap, &mut fb)?;

        // Input with timeout until the next frame is due.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = engine.score(), "player quit");
                        return Ok(engine.score());
                    }
                    if let Some(intent) = handle_key_event(key) {
                        engine.handle_intent(intent);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            engine.tick(ms);
        }
    }
}

fn render(
    term: &mut TerminalRenderer,
    view: &GameView,
    snap: &Snapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw(fb)
}
