//! Event types for the TUI

use std::io;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

/// Events that can occur in the TUI
#[derive(Debug)]
pub enum Event {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Nothing happened within the tick interval
    Tick,
}

/// Wait up to `tick` for the next terminal event
pub fn next_event(tick: Duration) -> io::Result<Event> {
    if !event::poll(tick)? {
        return Ok(Event::Tick);
    }
    match event::read()? {
        // Only presses; release/repeat events arrive on some platforms
        event::Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
        event::Event::Resize(w, h) => Ok(Event::Resize(w, h)),
        _ => Ok(Event::Tick),
    }
}
