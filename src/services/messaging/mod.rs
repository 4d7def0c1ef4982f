pub mod interakt;

use async_trait::async_trait;

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()>;
}

/// Stand-in used when no WhatsApp API key is configured; replies still go
/// back over HTTP, outbound delivery is simply skipped.
pub struct NoopProvider;

#[async_trait]
impl MessagingProvider for NoopProvider {
    async fn send_message(&self, to: &str, _body: &str) -> anyhow::Result<()> {
        tracing::debug!(to = %to, "outbound delivery disabled, dropping message");
        Ok(())
    }
}
