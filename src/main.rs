//! Terminal runner (default binary).
//!
//! Fixed 16ms tick; keyboard input is polled until the next tick is due.
//! Renders with the framebuffer renderer from `blockfall-term`.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use blockfall::input::{map_key, KeyCommand};
use blockfall::scores::HighScoreStore;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;
use blockfall::{Config, ScoreRecorder, Session};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;
    log::info!("starting with seed {}", config.seed);

    let recorder = ScoreRecorder::new(
        HighScoreStore::new(config.scores_path.clone()),
        config.player.clone(),
    );
    let mut session = Session::new(config.seed, recorder);

    let mut term = TerminalRenderer::stdout();
    let result = match term.enter() {
        Ok(()) => run(&mut term, &mut session),
        Err(e) => Err(e),
    };

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log::warn!("terminal restore failed: {:#}", e);
    }
    result
}

/// Send logs to the configured file. Without one, logging stays off since
/// the terminal belongs to the game.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let (snap, hud) = session.frame();
        view.render_into(snap, &hud, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match map_key(key) {
                    Some(KeyCommand::Quit) => {
                        log::info!("quit at score {}", session.game().score());
                        return Ok(());
                    }
                    Some(KeyCommand::Action(action)) => {
                        session.handle(action);
                    }
                    None => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
