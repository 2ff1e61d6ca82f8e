use std::time::{Duration, Instant};

use strum_macros::Display;
use tracing::{debug, info};

use crate::time_format::format_clock;
use crate::tokenizer::{tokenize, Word, WordResult};

/// The countdown decrements once per interval while the session is running
pub const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    Idle,
    Running,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FinishReason {
    #[strum(serialize = "Time is up")]
    TimeUp,
    #[strum(serialize = "Passage complete")]
    PassageComplete,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub passage: String,
    pub duration_secs: u64,
}

impl SessionConfig {
    pub fn new(passage: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            passage: passage.into(),
            duration_secs,
        }
    }
}

/// Correct/incorrect counts over the words up to and including the current one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
}

impl Tally {
    pub fn of(words: &[Word], current_index: usize) -> Self {
        let (correct, incorrect) = words
            .iter()
            .take(current_index.saturating_add(1))
            .fold((0, 0), |(correct, incorrect), word| match word.result {
                WordResult::Correct => (correct + 1, incorrect),
                WordResult::Incorrect => (correct, incorrect + 1),
                WordResult::Untested => (correct, incorrect),
            });

        Self {
            correct,
            incorrect,
            total: correct + incorrect,
        }
    }
}

/// Handle for the recurring countdown. Only exists while a session is running.
#[derive(Debug, Clone, Copy)]
pub struct CountdownTimer {
    interval: Duration,
    next_due: Instant,
}

impl CountdownTimer {
    pub fn start(now: Instant, interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Consume one elapsed interval, if any is due at `now`
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        true
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}

/// Snapshot of a single typing session, read by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) words: Vec<Word>,
    pub(crate) current_index: usize,
    pub(crate) pending_input: String,
    pub(crate) remaining_secs: u64,
    pub(crate) phase: Phase,
    pub(crate) finish_reason: Option<FinishReason>,
}

impl SessionState {
    pub fn fresh(config: &SessionConfig) -> Self {
        Self {
            words: tokenize(&config.passage),
            current_index: 0,
            pending_input: String::new(),
            remaining_secs: config.duration_secs,
            phase: Phase::Idle,
            finish_reason: None,
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.words.get(self.current_index)
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish_reason
    }

    pub fn tally(&self) -> Tally {
        Tally::of(&self.words, self.current_index)
    }

    pub fn clock(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

/// Sole writer of the session state.
///
/// Transitions that are invalid for the current phase are ignored rather
/// than reported, so the UI can forward every event unconditionally.
#[derive(Debug, Clone)]
pub struct SessionController {
    config: SessionConfig,
    state: SessionState,
    timer: Option<CountdownTimer>,
}

impl SessionController {
    pub fn new(config: SessionConfig) -> Self {
        let state = SessionState::fresh(&config);
        Self {
            config,
            state,
            timer: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn timer(&self) -> Option<&CountdownTimer> {
        self.timer.as_ref()
    }

    pub fn focus(&mut self) {
        self.focus_at(Instant::now());
    }

    /// Idle -> Running, arming the countdown from `now`
    pub fn focus_at(&mut self, now: Instant) {
        if self.state.phase != Phase::Idle {
            return;
        }

        if self.state.words.is_empty() {
            self.finish(FinishReason::PassageComplete);
            return;
        }
        if self.state.remaining_secs == 0 {
            self.finish(FinishReason::TimeUp);
            return;
        }

        self.state.phase = Phase::Running;
        self.timer = Some(CountdownTimer::start(now, COUNTDOWN_INTERVAL));
        info!(
            words = self.state.words.len(),
            duration_secs = self.state.remaining_secs,
            "session started"
        );
    }

    pub fn submit_word(&mut self, typed: &str) {
        if self.state.phase != Phase::Running {
            return;
        }

        let index = self.state.current_index;
        let Some(word) = self.state.words.get_mut(index) else {
            return;
        };

        word.result = if typed == word.text {
            WordResult::Correct
        } else {
            WordResult::Incorrect
        };
        debug!(index, expected = %word.text, typed, result = %word.result, "word submitted");

        self.state.pending_input.clear();

        if index + 1 < self.state.words.len() {
            self.state.current_index = index + 1;
        } else {
            self.finish(FinishReason::PassageComplete);
        }
    }

    pub fn change_input(&mut self, text: impl Into<String>) {
        if self.state.phase == Phase::Over {
            return;
        }
        self.state.pending_input = text.into();
    }

    /// One elapsed second of countdown
    pub fn tick(&mut self) {
        if self.state.phase != Phase::Running {
            return;
        }

        self.state.remaining_secs = self.state.remaining_secs.saturating_sub(1);
        if self.state.remaining_secs == 0 {
            self.finish(FinishReason::TimeUp);
        }
    }

    /// Apply every countdown interval that has elapsed by `now`.
    /// Returns the number of ticks applied.
    pub fn advance_clock(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while self.timer.as_mut().is_some_and(|timer| timer.fire(now)) {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.timer = None;
        self.state = SessionState::fresh(&self.config);
        info!("session reset");
    }

    fn finish(&mut self, reason: FinishReason) {
        self.timer = None;
        self.state.phase = Phase::Over;
        self.state.finish_reason = Some(reason);

        let tally = self.state.tally();
        info!(
            %reason,
            correct = tally.correct,
            incorrect = tally.incorrect,
            remaining_secs = self.state.remaining_secs,
            "session over"
        );
    }
}
