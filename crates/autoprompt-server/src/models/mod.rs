//! AutoPrompt Data Models
//!
//! - Prompt: generation and template requests/responses
//! - History: stored records, queries and stats

mod history;
mod prompt;

pub use history::*;
pub use prompt::*;
