//! Mattermost incoming webhook client

use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{RelayError, Result};
use crate::message::ChatMessage;

const DELIVERY_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone)]
pub struct MattermostClient {
    client: reqwest::Client,
    webhook_url: String,
}

impl MattermostClient {
    pub fn new(webhook_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gitlab_bot/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(DELIVERY_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
        })
    }

    /// Posts a message once. There is no retry; the caller decides what a
    /// failure means.
    pub async fn send(&self, message: &ChatMessage) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "Mattermost accepted message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Mattermost webhook request failed");
        Err(RelayError::DeliveryRejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Attachment, Color};
    use mockito::Matcher;
    use serde_json::json;

    fn message() -> ChatMessage {
        ChatMessage::single(
            Attachment::new(Color::Blue, "pre".to_string(), "title".to_string()).with_text("body"),
        )
    }

    #[tokio::test]
    async fn posts_message_as_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hooks/abc")
            .match_header("content-type", "application/json")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({ "username": "GitLab Bot" })),
                Matcher::Regex(r##""color":"#27b8d9""##.to_string()),
                Matcher::Regex(r#""text":"body""#.to_string()),
            ]))
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let client = MattermostClient::new(format!("{}/hooks/abc", server.url())).unwrap();
        client.send(&message()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/hooks/abc")
            .with_status(400)
            .with_body("Unable to parse incoming data")
            .create_async()
            .await;

        let client = MattermostClient::new(format!("{}/hooks/abc", server.url())).unwrap();
        let err = client.send(&message()).await.unwrap_err();

        match err {
            RelayError::DeliveryRejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "Unable to parse incoming data");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
