//! Outbound WhatsApp notifications via the Meta WhatsApp Cloud API.
//!
//! Used to send anonymous clients the manage link for a freshly created
//! appointment. Delivery is best effort: callers log failures and never let
//! them fail the booking request itself.

use eyre::{eyre, Result};
use serde_json::json;

use crate::config::ApiConfig;

const GRAPH_API_BASE: &str = "https://graph.facebook.com/v19.0";

pub struct WhatsAppClient {
    http: reqwest::Client,
    token: String,
    phone_number_id: String,
}

impl WhatsAppClient {
    /// Builds a client from the configured credentials, or `None` when
    /// notifications are not configured.
    pub fn from_config(config: &ApiConfig) -> Option<Self> {
        match (&config.whatsapp_token, &config.whatsapp_phone_number_id) {
            (Some(token), Some(phone_number_id)) => Some(Self {
                http: reqwest::Client::new(),
                token: token.clone(),
                phone_number_id: phone_number_id.clone(),
            }),
            _ => None,
        }
    }

    /// Sends a plain text message to a phone number given as bare E.164
    /// digits (no leading `+`).
    pub async fn send_text(&self, phone_digits: &str, text: &str) -> Result<()> {
        let url = format!("{GRAPH_API_BASE}/{}/messages", self.phone_number_id);
        let payload = json!({
            "messaging_product": "whatsapp",
            "to": format!("+{phone_digits}"),
            "type": "text",
            "text": { "body": text },
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(eyre!("WhatsApp API error: {status} {body}"));
        }

        Ok(())
    }
}
