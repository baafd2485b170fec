//! CompletionBackend trait definition.
//!
//! This is the seam between the relay core and the text-generation service.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the concrete
//! implementation lives in chatline-infra.

use chatline_types::completion::{CompletionError, CompletionRequest, CompletionResponse};

/// Trait for text-completion backends.
///
/// The relay issues one non-streaming completion per processing cycle. An
/// empty choice list in the response is a valid value; the caller decides
/// how to treat it.
pub trait CompletionBackend: Send + Sync {
    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, CompletionError>> + Send;
}
