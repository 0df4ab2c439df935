//! Terminal Lunar Lander runner (default binary).
//!
//! Builds the terrain once, attaches a lander, and hands both to the game loop
//! thread. The main thread only watches the keyboard for the quit key and the
//! process for termination signals; either one stops the loop, restores the
//! terminal and ends the process.

use std::fs::File;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use lunar_lander::core::{Lander, Terrain};
use lunar_lander::engine::{GameConfig, GameLoop, LoopReport, Session};
use lunar_lander::input::{should_quit, ShutdownSignal};
use lunar_lander::term::{SceneView, TerminalRenderer, TerminalScene};

const LOG_FILE_VAR: &str = "LANDER_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "lunar-lander.log";

/// How often the main thread checks whether the loop is still alive.
const INPUT_POLL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    init_logging()?;

    let shutdown = ShutdownSignal::register().context("cannot install signal handlers")?;

    let config = GameConfig::from_env()?;
    log::info!(
        "terrain seed {}, altitude mode {}",
        config
            .seed
            .map_or_else(|| "from entropy".to_string(), |s| s.to_string()),
        config.altitude_mode.as_str()
    );
    let terrain = Arc::new(config.build_terrain()?);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&config, terrain, &shutdown);

    // Always try to restore terminal state.
    let _ = term.exit();

    let report = result?;
    log::info!(
        "session ended after {} frames (last frame {}ms)",
        report.frames,
        report.last_frame_ms
    );
    Ok(())
}

fn init_logging() -> Result<()> {
    // The terminal is in raw alternate-screen mode, so logs go to a file.
    let path = std::env::var(LOG_FILE_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = File::create(&path).with_context(|| format!("cannot open log file {}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(
    config: &GameConfig,
    terrain: Arc<Terrain>,
    shutdown: &ShutdownSignal,
) -> Result<LoopReport> {
    let view = SceneView::new(config.terrain.screen_width, config.terrain.screen_height);
    let scene = TerminalScene::new(view, TerminalRenderer::new());
    let session = Session::new(terrain, Lander::new(config.lander_start()), scene);

    let mut game_loop = GameLoop::new(config.timing);
    let handle = game_loop.handle();
    game_loop.start(session)?;

    while handle.is_running() {
        if shutdown.is_requested() {
            log::info!("termination signal received");
            handle.stop();
            break;
        }
        let ready = match event::poll(INPUT_POLL) {
            Ok(ready) => ready,
            // A signal landed mid-poll; the flag is checked next iteration.
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if !ready {
            continue;
        }
        // Resizes need no handling: the scene re-reads the size every frame.
        if let Event::Key(key) = event::read()? {
            if should_quit(key) {
                handle.stop();
            }
        }
    }

    Ok(game_loop.join()?)
}
