use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::runtime::AppEvent;
use crate::session::{Phase, SessionConfig, SessionController};

/// `r` is ignored for this long after a session ends, so the tail of a
/// word being typed when time ran out cannot dismiss the results
pub const RETRY_GRACE: Duration = Duration::from_millis(750);

/// Whether the event loop should keep going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Translates terminal events into session operations
#[derive(Debug)]
pub struct App {
    pub session: SessionController,
    over_since: Option<Instant>,
}

impl App {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: SessionController::new(config),
            over_since: None,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) -> Flow {
        // the countdown catches up before any input is looked at, so keys
        // arriving after the deadline land on a finished session
        self.session.advance_clock(now);
        self.note_phase(now);

        let flow = match event {
            AppEvent::Tick | AppEvent::Resize => Flow::Continue,
            AppEvent::Key(key) => self.on_key(key, now),
        };
        self.note_phase(now);

        flow
    }

    fn note_phase(&mut self, now: Instant) {
        match (self.session.state().is_over(), self.over_since) {
            (true, None) => self.over_since = Some(now),
            (false, Some(_)) => self.over_since = None,
            _ => {}
        }
    }

    fn on_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
            return Flow::Quit;
        }

        match self.session.state().phase() {
            Phase::Idle => {
                // the first key press stands in for focusing the input field
                self.session.focus_at(now);
                if !matches!(key.code, KeyCode::Enter | KeyCode::Tab) {
                    self.edit(key);
                }
            }
            Phase::Running => self.edit(key),
            Phase::Over => {
                let settled = self
                    .over_since
                    .map_or(true, |since| now.saturating_duration_since(since) >= RETRY_GRACE);
                match key.code {
                    KeyCode::Enter => self.session.reset(),
                    KeyCode::Char('r') if settled => self.session.reset(),
                    _ => debug!(?key, "ignoring key after session end"),
                }
            }
        }

        Flow::Continue
    }

    fn edit(&mut self, key: KeyEvent) {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            debug!(?key, "ignoring modified key");
            return;
        }

        let pending = self.session.state().pending_input();
        match key.code {
            // the delimiter is consumed here and never reaches the input text
            KeyCode::Char(' ') => {
                let typed = pending.to_owned();
                self.session.submit_word(&typed);
            }
            KeyCode::Char(c) => {
                let mut text = pending.to_owned();
                text.push(c);
                self.session.change_input(text);
            }
            KeyCode::Backspace => {
                let mut text = pending.to_owned();
                if text.pop().is_some() {
                    self.session.change_input(text);
                }
            }
            _ => {}
        }
    }
}
