//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - PromptSpec: Structured test automation requirements
//! - HistoryRecord: Audit row for one generate or template invocation

mod history;
mod prompt_spec;

pub use history::*;
pub use prompt_spec::*;
