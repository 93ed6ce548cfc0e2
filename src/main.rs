//! Terminal Blockfall runner (default binary).
//!
//! The game runs on the runtime actor; this loop only forwards keys and
//! redraws when the engine reports a change.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::input::{handle_key_event, KeyInput};
use blockfall::runtime::{Driver, RuntimeConfig};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Most terminals report no key releases; treat a key as released after this
/// long without a press or auto-repeat event.
const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env().with_key_release_timeout_ms(KEY_RELEASE_TIMEOUT_MS);
    let mut driver = Driver::start(config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut driver);

    // Always try to restore terminal state.
    let _ = term.exit();
    let _ = driver.shutdown();
    result
}

fn run(term: &mut TerminalRenderer, driver: &mut Driver) -> Result<()> {
    driver.new_game()?;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        while driver.try_recv().is_some() {
            dirty = true;
        }

        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let snap = driver.snapshot()?;
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match handle_key_event(key) {
                Some(KeyInput::Quit) => return Ok(()),
                Some(KeyInput::Press(k)) => driver.press(k)?,
                Some(KeyInput::Release(k)) => driver.release(k)?,
                Some(KeyInput::TogglePause) => driver.toggle_pause()?,
                Some(KeyInput::NewGame) => {
                    driver.stop()?;
                    driver.new_game()?;
                }
                None => {}
            },
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
