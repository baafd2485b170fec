//! OpenAI-style completions client.

mod client;
mod types;

pub use client::OpenAiCompletions;
