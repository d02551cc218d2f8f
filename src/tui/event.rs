//! Event handling for the TUI
//!
//! Terminal events are read on a background thread and forwarded over a
//! channel together with periodic ticks.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// Reading from the terminal failed; the reader thread has stopped
    Failed(String),
}

/// Event handler for terminal events
///
/// The reader thread is detached and stops once the receiver is dropped.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                let polled = event::poll(timeout).and_then(|ready| {
                    if ready {
                        event::read().map(Some)
                    } else {
                        Ok(None)
                    }
                });

                let forwarded = match polled {
                    // Release and repeat events show up on some platforms
                    Ok(Some(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        sender.send(Event::Key(key))
                    }
                    Ok(Some(CrosstermEvent::Resize(width, height))) => {
                        sender.send(Event::Resize(width, height))
                    }
                    Ok(_) => Ok(()),
                    Err(e) => {
                        let _ = sender.send(Event::Failed(e.to_string()));
                        return;
                    }
                };
                if forwarded.is_err() {
                    return;
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_delivers_events() {
        let events = EventHandler::new(Duration::from_millis(10));

        // Without a terminal the reader reports the failure instead of ticking
        let event = events.next().unwrap();
        assert!(matches!(event, Event::Tick | Event::Failed(_)), "{:?}", event);
    }
}
