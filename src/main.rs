//! CODEBREAK - a terminal bulls-and-cows code breaker
//!
//! Five rows to crack a hidden four-icon code.

mod app;
mod game;
mod tui;

use app::AppCoordinator;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};
use tui::Tui;

fn main() -> io::Result<()> {
    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    // Fresh session with a random active icon set
    let mut coordinator = AppCoordinator::new();

    // Main event loop; the tick drives the staggered score reveal
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        // Calculate timeout for next tick
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        // Poll for events with timeout
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => {
                            coordinator.quit();
                        }
                        KeyCode::Backspace => {
                            coordinator.on_undo();
                        }
                        KeyCode::Char(c @ '1'..='4') => {
                            coordinator.on_symbol(c as usize - '1' as usize);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            coordinator.restart();
                        }
                        _ => {
                            coordinator.on_other_key();
                        }
                    }
                }
            }
        }

        // Advance the reveal animation
        if last_tick.elapsed() >= tick_rate {
            coordinator.tick();
            last_tick = Instant::now();
        }

        // Check for quit
        if coordinator.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
