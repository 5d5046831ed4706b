//! Terminal gridfall runner (default binary).
//!
//! Single-threaded driver loop: render, poll for input until the next
//! gravity deadline, then advance the session one gravity step. Gravity and
//! player commands mutate the session from the same loop, which serializes
//! all access to it.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::GameSession;
use gridfall::input::{handle_key_event, should_quit};
use gridfall::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(clock_seed());
    let view = GameView::default();

    let mut last_step = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, Viewport::new(w, h));
        term.draw(&fb)?;

        // The gravity interval follows the current level.
        let interval = Duration::from_millis(session.drop_interval_ms() as u64);
        let timeout = interval
            .checked_sub(last_step.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        session.apply(command);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Gravity step. Ticking stops once the session reports game over;
        // the loop keeps rendering until the quit key.
        if last_step.elapsed() >= interval && !session.game_over() {
            session.tick();
            session.advance_or_spawn();
            last_step = Instant::now();
        }
    }
}
