//! AutoPrompt API Routes
//!
//! - /api/prompts/generate - AI prompt generation
//! - /api/prompts/template(s) - Built-in templates
//! - /api/prompts/history - Stored requests and responses
//! - /api/prompts/stats - Usage statistics

pub mod prompt;
pub mod swagger;
