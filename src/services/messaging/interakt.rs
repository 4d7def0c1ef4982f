use anyhow::Context;
use async_trait::async_trait;

use super::MessagingProvider;

pub struct InteraktWhatsAppProvider {
    api_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl InteraktWhatsAppProvider {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            api_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MessagingProvider for InteraktWhatsAppProvider {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()> {
        let payload = serde_json::json!({
            "fullPhoneNumber": to,
            "type": "Text",
            "data": { "message": body },
        });

        self.client
            .post(&self.api_url)
            .header("Authorization", format!("Basic {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .context("failed to send WhatsApp message")?
            .error_for_status()
            .context("WhatsApp API returned error")?;

        Ok(())
    }
}
