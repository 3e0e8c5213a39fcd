//! AutoPrompt Domain Library
//!
//! Core domain types and interfaces for the AutoPrompt test automation
//! prompt service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (PromptSpec, HistoryRecord)
//!   - `value_objects/`: Immutable value types (AiResult, GenerationConfig)
//!   - `services/`: Pure domain services (prompt assembly, template catalog)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use autoprompt::domain::{PromptSpec, TemplateCatalog};
//! use autoprompt::ports::{CompletionClient, HistoryRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    render_prompt, AiResult, DomainError, GenerationConfig, HistoryRecord, NewHistoryRecord,
    PromptSpec, TemplateCatalog, AI_ERROR_PREFIX, CUSTOM_GENERATION_LABEL, TEMPLATE_MARKER,
};
pub use ports::{CompletionClient, HistoryRepository};
