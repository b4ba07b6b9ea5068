//! In-memory completion services for tests.

use anyhow::Result;
use std::cell::RefCell;
use std::collections::VecDeque;

use super::client::CompletionService;
use super::message::ChatMessage;

/// Replays canned answers in order, then repeats `fallback`.
/// Every request is recorded for later inspection.
pub struct ScriptedCompletion {
    answers: RefCell<VecDeque<String>>,
    fallback: String,
    requests: RefCell<Vec<Vec<ChatMessage>>>,
}

impl ScriptedCompletion {
    pub fn new<I, T>(answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            fallback: String::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Answers every request with `answer`.
    pub fn always(answer: &str) -> Self {
        let mut service = Self::new(Vec::<String>::new());
        service.fallback = answer.to_string();
        service
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.borrow().clone()
    }
}

impl CompletionService for ScriptedCompletion {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.requests.borrow_mut().push(messages.to_vec());
        Ok(self
            .answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}

/// Answers each request by calling a closure with the conversation.
pub struct Responder<F>(pub F);

impl<F> CompletionService for Responder<F>
where
    F: Fn(&[ChatMessage]) -> String,
{
    fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        Ok((self.0)(messages))
    }
}
