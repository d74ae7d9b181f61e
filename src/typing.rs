use std::time::Duration;

use thiserror::Error;

/// Cursor blink half-period.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

// Deleting runs 1.6x faster than typing: delay * 5 / 8.
const DELETE_NUM: u32 = 5;
const DELETE_DEN: u32 = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    pub type_delay: Duration,
    pub pause: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(60),
            pause: Duration::from_millis(1200),
        }
    }
}

impl TypingTiming {
    pub fn delete_delay(&self) -> Duration {
        self.type_delay * DELETE_NUM / DELETE_DEN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Phrase fully typed, waiting out the pause before deleting.
    Holding,
    Deleting,
}

/// Types a phrase one character at a time, holds it, deletes it, then moves
/// on to the next phrase, forever.
///
/// The driver loop is `sleep(tw.delay()); tw.advance();`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<&'static str>,
    timing: TypingTiming,
    index: usize,
    visible: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &[&'static str], timing: TypingTiming) -> Result<Self, TypingError> {
        if phrases.is_empty() {
            return Err(TypingError::NoPhrases);
        }
        Ok(Self {
            phrases: phrases.to_vec(),
            timing,
            index: 0,
            visible: 0,
            deleting: false,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn current(&self) -> &'static str {
        self.phrases[self.index]
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    pub fn phase(&self) -> Phase {
        if self.deleting {
            Phase::Deleting
        } else if self.visible >= self.current_len() {
            Phase::Holding
        } else {
            Phase::Typing
        }
    }

    /// The visible prefix of the current phrase, cut on char boundaries.
    pub fn text(&self) -> String {
        self.current().chars().take(self.visible).collect()
    }

    pub fn delay(&self) -> Duration {
        match self.phase() {
            Phase::Typing => self.timing.type_delay,
            Phase::Holding => self.timing.pause,
            Phase::Deleting if self.visible > 0 => self.timing.delete_delay(),
            Phase::Deleting => Duration::ZERO,
        }
    }

    pub fn advance(&mut self) {
        match self.phase() {
            Phase::Typing => self.visible += 1,
            Phase::Holding => self.deleting = true,
            Phase::Deleting if self.visible > 0 => self.visible -= 1,
            Phase::Deleting => {
                self.deleting = false;
                self.index = (self.index + 1) % self.phrases.len();
            }
        }
    }
}
