//! Gmail REST API client.

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::provider::MailProvider;
use crate::types::{
    BatchModifyRequest, Label, ListLabelsResponse, ListMessagesResponse, MessageRef, RemoteMessage,
};

const DEFAULT_BASE_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me";

/// Authenticated Gmail API client for a single account.
///
/// Holds a bearer token for its lifetime; obtaining and refreshing the
/// token is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct GmailClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GmailClient {
    /// Create a client with the given bearer token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Override the API base URL (used against local test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self
            .http
            .get(format!("{}/{path}", self.base_url))
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let body = Self::read_success(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn read_success(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

impl MailProvider for GmailClient {
    async fn list_messages(&self, max_results: u32) -> Result<Vec<MessageRef>> {
        let response: ListMessagesResponse = self
            .get_json("messages", &[("maxResults", max_results.to_string())])
            .await?;
        tracing::debug!(count = response.messages.len(), "listed messages");
        Ok(response.messages)
    }

    async fn get_message(&self, id: &str) -> Result<RemoteMessage> {
        self.get_json(&format!("messages/{id}"), &[]).await
    }

    async fn list_labels(&self) -> Result<Vec<Label>> {
        let response: ListLabelsResponse = self.get_json("labels", &[]).await?;
        Ok(response.labels)
    }

    async fn batch_modify(
        &self,
        ids: &[String],
        add_label_ids: &[String],
        remove_label_ids: &[String],
    ) -> Result<()> {
        let body = BatchModifyRequest {
            ids: ids.to_vec(),
            add_label_ids: add_label_ids.to_vec(),
            remove_label_ids: remove_label_ids.to_vec(),
        };
        tracing::debug!(
            ids = ids.len(),
            add = ?add_label_ids,
            remove = ?remove_label_ids,
            "batch modify"
        );
        let response = self
            .http
            .post(format!("{}/messages/batchModify", self.base_url))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        Self::read_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_override() {
        let client = GmailClient::new("tok").with_base_url("http://127.0.0.1:9999/gmail");
        assert_eq!(client.base_url, "http://127.0.0.1:9999/gmail");
    }

    #[test]
    fn default_base_url_points_at_gmail() {
        let client = GmailClient::new("tok");
        assert!(client.base_url.starts_with("https://gmail.googleapis.com"));
    }
}
