//! Completion backend clients.

pub mod openai;

pub use openai::OpenAiCompletions;
