//! Backend abstraction for the conversational extraction session.

use async_trait::async_trait;

use crate::error::Result;

/// One stateful conversation with a generative backend.
///
/// Implementations wrap a specific provider's chat session and keep the
/// accumulated dialogue; the pipeline only ever sends text and reads text
/// back. Exclusive access (`&mut self`) keeps calls on one session
/// strictly sequential — the backend's conversational state is not safe to
/// interleave, and overlapping calls would corrupt the dialogue order.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one instruction and return the backend's textual reply.
    async fn send(&mut self, message: &str) -> Result<String>;
}
