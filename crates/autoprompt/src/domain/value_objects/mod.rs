//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod ai_result;
mod generation_config;

pub use ai_result::*;
pub use generation_config::*;
