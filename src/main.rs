//! Terminal Tetris runner (default binary).
//!
//! This is the external driver around the engine: it schedules `tick()` at
//! the delay the game reports, forwards key presses as commands and renders
//! snapshots. The delay is re-read after every tick and command.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use classic_tetris::config::RunConfig;
use classic_tetris::core::Game;
use classic_tetris::input::{map_key_event, should_quit, should_restart};
use classic_tetris::term::{GameView, TerminalRenderer, Viewport};
use classic_tetris::trace::LandingTrace;

/// How long to block on input while no tick is due (paused or game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    let mut trace = match config.trace_path.as_deref() {
        Some(path) => Some(LandingTrace::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, trace.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    match &result {
        Ok(game) => eprintln!(
            "[tetris] seed {} final score {} level {}{}",
            config.game.seed,
            game.score(),
            game.level(),
            if game.is_game_over() { " (game over)" } else { "" }
        ),
        Err(e) => eprintln!("[tetris] error: {:#}", e),
    }
    result.map(|_| ())
}

fn fall_interval(game: &Game) -> Duration {
    Duration::from_millis(game.fall_delay_ms().max(0) as u64)
}

fn run(
    term: &mut TerminalRenderer,
    config: &RunConfig,
    mut trace: Option<&mut LandingTrace<BufWriter<File>>>,
) -> Result<Game> {
    let mut game = Game::new(config.game);
    let view = GameView::default();
    let mut next_tick = Instant::now() + fall_interval(&game);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(&view.render(&game.snapshot(), Viewport::new(w, h)))?;

        let ticking = !game.is_paused() && !game.is_game_over();
        let timeout = if ticking {
            next_tick.saturating_duration_since(Instant::now())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(game);
                    }
                    if should_restart(key) {
                        game = Game::new(config.game);
                        next_tick = Instant::now() + fall_interval(&game);
                        continue;
                    }
                    if let Some(command) = map_key_event(key) {
                        let was_paused = game.is_paused();
                        game.command(command);
                        if was_paused && !game.is_paused() {
                            next_tick = Instant::now() + fall_interval(&game);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if ticking && Instant::now() >= next_tick {
            game.tick();
            next_tick = Instant::now() + fall_interval(&game);
        }

        if let Some(landing) = game.take_last_landing() {
            if let Some(trace) = trace.as_deref_mut() {
                trace.record(&landing, &game.snapshot())?;
            }
        }
    }
}
