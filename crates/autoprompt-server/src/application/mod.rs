//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the history repository and the completion client.

mod prompt_service;

pub use prompt_service::{PromptOutcome, PromptService, PromptStats, TEMPLATE_NOT_FOUND};
