//! Domain Services
//!
//! Pure, synchronous logic over domain entities.
//! - prompt_assembler: PromptSpec to labeled prompt text
//! - template_catalog: Built-in prompt templates

mod prompt_assembler;
mod template_catalog;

pub use prompt_assembler::*;
pub use template_catalog::*;
