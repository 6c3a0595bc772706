//! Remote fallback resolution via an external chat-completions service.
//!
//! The costlier, rate-limited upgrade path behind the [`RemoteResolver`]
//! seam. One exchange per call, strictly validated against the closed
//! command vocabulary; anything malformed degrades to a benign "not
//! understood" instead of escalating.

mod groq;

pub use groq::GroqResolver;

use async_trait::async_trait;
use voxvault_core::{Language, RemoteResolution};

/// Narrow seam over the remote natural-language service, so the
/// orchestrator's policy stays testable with scripted fakes.
#[async_trait]
pub trait RemoteResolver: Send + Sync {
    /// Classify a transcript. Always settles — success or failure — and
    /// never mutates quota state; the orchestrator owns that.
    async fn resolve_remote(&self, text: &str, lang: Language) -> RemoteResolution;
}

#[async_trait]
impl<T: RemoteResolver + ?Sized> RemoteResolver for std::sync::Arc<T> {
    async fn resolve_remote(&self, text: &str, lang: Language) -> RemoteResolution {
        (**self).resolve_remote(text, lang).await
    }
}
