//! Completion Client Port
//!
//! Abstract interface for the generative text provider. Each call is one
//! outbound request with the fixed [`GenerationConfig`].
//!
//! [`GenerationConfig`]: crate::domain::GenerationConfig

use async_trait::async_trait;

use crate::domain::AiResult;

/// Generative text provider
///
/// Implementations never return an error: transport failures, bad statuses
/// and unexpected bodies are reported as [`AiResult::Failed`].
///
/// # Example
///
/// ```rust,ignore
/// use autoprompt::ports::CompletionClient;
///
/// struct GeminiClient { /* ... */ }
///
/// #[async_trait]
/// impl CompletionClient for GeminiClient {
///     async fn complete(&self, prompt: &str) -> AiResult {
///         // POST generateContent
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate text for a prompt
    async fn complete(&self, prompt: &str) -> AiResult;

    /// Provider name for logs (e.g., "gemini")
    fn provider_name(&self) -> &str;
}
