//! Terminal stage runner (default binary).
//!
//! Terminal plumbing around [`Driver`]: polls keys until the next tick, renders
//! every pass, and shows the game-over frame until a quit key.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_stage::config::DriverConfig;
use tui_stage::core::StageSnapshot;
use tui_stage::driver::Driver;
use tui_stage::input::{handle_key_event, should_quit};
use tui_stage::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = DriverConfig::from_env()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Driver::from_config(config));

    // Always try to restore terminal state.
    let _ = term.exit();

    let driver = result?;
    eprintln!(
        "game over: {} pieces locked, {} lines cleared",
        driver.stage().locked_pieces(),
        driver.stage().cleared_lines()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut driver: Driver) -> Result<Driver> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = StageSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        driver.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if driver.is_over() {
            wait_for_quit()?;
            return Ok(driver);
        }

        // Input with timeout until next tick.
        let timeout = driver.interval().saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(driver);
                    }
                    if let Some(k) = handle_key_event(key) {
                        driver.press(k);
                    }
                }
            }
        }

        if last_tick.elapsed() >= driver.interval() {
            last_tick = Instant::now();
            driver.tick();
        }
    }
}

fn wait_for_quit() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && should_quit(key) {
                return Ok(());
            }
        }
    }
}
