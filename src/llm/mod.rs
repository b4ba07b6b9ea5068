//! Access to the language-model completion service.
//!
//! This module provides:
//! - Chat message types in the Chat Completions wire format
//! - The `CompletionService` trait and its blocking HTTP implementation
//! - A bounded retry-on-empty-response policy

pub mod client;
pub mod message;
pub mod retry;
#[cfg(test)]
pub mod testing;

pub use client::{CompletionService, OpenAiClient};
pub use message::ChatMessage;
pub use retry::RetryOnEmpty;
