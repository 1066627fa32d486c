//! Terminal Pac-Man runner (default binary).
//!
//! One loop, one thread: poll keys until the next tick, feed the frame's
//! button presses and the elapsed time into the session, then draw.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_pacman::config::GameConfig;
use tui_pacman::core::{Layout, Session};
use tui_pacman::input::{handle_key_event, should_quit, FrameInput};
use tui_pacman::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_pacman::types::{SessionEvent, TICK_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(config.log_path.as_deref())?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(ok = result.is_ok(), "exiting");
    result
}

/// Logs go to a file only; the terminal belongs to the game.
fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut session = Session::with_config(Layout::classic(), config.session);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut frame = FrameInput::new();
    let mut throttle = RenderThrottle::new(config.static_render_ms);

    let clock = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, session.fingerprint(), !session.is_playing()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&session, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(button) = handle_key_event(key) {
                        if !frame.press(button) {
                            debug!(button = button.as_str(), "duplicate press in frame");
                        }
                    }
                }
                // Repeats and releases are ignored: input is edge-triggered.
                Event::Key(_) => {}
                Event::Resize(w, h) => {
                    debug!(w, h, "terminal resized");
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();

            for button in frame.take() {
                session.press(button);
            }
            session.update(elapsed.as_millis().min(u32::MAX as u128) as u32);

            for event in session.take_events() {
                log_event(event);
            }
        }
    }
}

fn log_event(event: SessionEvent) {
    match event {
        SessionEvent::Started => info!("session started"),
        SessionEvent::DifficultySelected(level) => {
            info!(difficulty = level.as_str(), secs = level.countdown_secs(), "difficulty selected")
        }
        SessionEvent::Paused => info!("paused"),
        SessionEvent::Resumed => info!("resumed"),
        SessionEvent::Ended { outcome, score } => {
            info!(outcome = outcome.as_str(), score, "session ended")
        }
        SessionEvent::Restarted => info!("session restarted"),
    }
}
