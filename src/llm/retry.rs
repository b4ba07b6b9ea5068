//! Bounded retry for empty completions.
//!
//! The model occasionally answers with nothing at all. `RetryOnEmpty` repeats
//! the identical request until it gets non-blank text or runs out of
//! attempts. Errors are returned immediately and never retried.

use anyhow::Result;

use super::client::CompletionService;
use super::message::ChatMessage;
use crate::config::MAX_ATTEMPTS_CEILING;

/// Decorates a [`CompletionService`] with retry-until-non-empty.
pub struct RetryOnEmpty<S> {
    inner: S,
    max_attempts: u32,
}

impl<S: CompletionService> RetryOnEmpty<S> {
    /// `max_attempts` is clamped to `1..=MAX_ATTEMPTS_CEILING`.
    pub fn new(inner: S, max_attempts: u32) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.clamp(1, MAX_ATTEMPTS_CEILING),
        }
    }
}

impl<S: CompletionService> CompletionService for RetryOnEmpty<S> {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        for attempt in 1..=self.max_attempts {
            let answer = self.inner.complete(messages)?;
            if !answer.trim().is_empty() {
                return Ok(answer);
            }
            if attempt < self.max_attempts {
                crate::log(&format!(
                    "Empty completion (attempt {}/{}), retrying",
                    attempt, self.max_attempts
                ));
            }
        }

        crate::log(&format!(
            "Completion still empty after {} attempt(s)",
            self.max_attempts
        ));
        Ok(String::new())
    }
}
