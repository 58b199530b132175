use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePhase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeTimings {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: TypePhase,
    timings: TypeTimings,
}

impl Typewriter {
    pub fn new(
        phrases: &'static [&'static str],
        timings: TypeTimings,
    ) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases,
            index: 0,
            shown: 0,
            phase: TypePhase::Typing,
            timings,
        })
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn first_delay(&self) -> Duration {
        self.timings.type_delay
    }

    pub fn text(&self) -> &'static str {
        let phrase = self.phrases[self.index];
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    fn phrase_len(&self) -> usize {
        self.phrases[self.index].chars().count()
    }

    /// Performs one keystroke and returns how long to wait before the next.
    pub fn step(&mut self) -> Duration {
        match self.phase {
            TypePhase::Typing => {
                if self.shown < self.phrase_len() {
                    self.shown += 1;
                }
                if self.shown >= self.phrase_len() {
                    self.phase = TypePhase::Holding;
                    self.timings.hold
                } else {
                    self.timings.type_delay
                }
            }
            TypePhase::Holding | TypePhase::Deleting => {
                self.phase = TypePhase::Deleting;
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = TypePhase::Typing;
                    self.timings.type_delay
                } else {
                    self.timings.delete_delay
                }
            }
        }
    }
}
