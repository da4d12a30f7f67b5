//! Wire types for the Gmail REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Gmail label (folder/tag), identified by an opaque id and a
/// human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Opaque label id (e.g. `INBOX`, `Label_207360853…`).
    pub id: String,
    /// Human-readable name shown in the Gmail UI.
    pub name: String,
}

/// Lightweight reference to a message, as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRef {
    /// Message id.
    pub id: String,
    /// Thread the message belongs to.
    #[serde(default)]
    pub thread_id: String,
}

/// A single RFC 5322 header as the API represents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name (e.g. `From`, `Subject`).
    pub name: String,
    /// Raw header value.
    pub value: String,
}

/// Message payload: the part of the message body structure we consume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Headers of the top-level MIME part.
    #[serde(default)]
    pub headers: Vec<Header>,
}

/// A message as returned by the get endpoint: id, snippet, and the
/// metadata headers needed to build a cached record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteMessage {
    /// Message id.
    pub id: String,
    /// Short plain-text preview of the body.
    #[serde(default)]
    pub snippet: String,
    /// Top-level payload carrying the headers.
    #[serde(default)]
    pub payload: MessagePayload,
}

impl RemoteMessage {
    /// Look up a header value by name, case-insensitively.
    ///
    /// Returns the first occurrence when the header is repeated.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.payload
            .headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Parse the `Date` header as an RFC 2822 timestamp.
    ///
    /// Returns `None` when the header is missing or unparseable.
    #[must_use]
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.header("Date")
            .and_then(|raw| DateTime::parse_from_rfc2822(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Request body for the `messages.batchModify` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchModifyRequest {
    /// Ids of the messages to modify.
    pub ids: Vec<String>,
    /// Label ids to add to every message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_label_ids: Vec<String>,
    /// Label ids to remove from every message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_label_ids: Vec<String>,
}

/// Response body of the list-messages endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListMessagesResponse {
    #[serde(default)]
    pub messages: Vec<MessageRef>,
}

/// Response body of the list-labels endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ListLabelsResponse {
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_message() -> RemoteMessage {
        serde_json::from_str(
            r#"{
                "id": "18f8ea6229f51b87",
                "snippet": "Your invoice is attached",
                "payload": {
                    "headers": [
                        {"name": "From", "value": "billing@example.com"},
                        {"name": "To", "value": "me@example.com"},
                        {"name": "Subject", "value": "Invoice #9"},
                        {"name": "Date", "value": "Fri, 24 May 2024 10:00:00 +0000"}
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let msg = sample_message();
        assert_eq!(msg.header("subject"), Some("Invoice #9"));
        assert_eq!(msg.header("FROM"), Some("billing@example.com"));
        assert_eq!(msg.header("X-Missing"), None);
    }

    #[test]
    fn date_parses_rfc2822() {
        let msg = sample_message();
        let date = msg.date().unwrap();
        assert_eq!(date.to_rfc3339(), "2024-05-24T10:00:00+00:00");
    }

    #[test]
    fn date_is_none_when_header_missing() {
        let msg = RemoteMessage {
            id: "x".to_string(),
            ..RemoteMessage::default()
        };
        assert!(msg.date().is_none());
    }

    #[test]
    fn batch_modify_omits_empty_label_lists() {
        let req = BatchModifyRequest {
            ids: vec!["a".to_string()],
            add_label_ids: vec![],
            remove_label_ids: vec!["UNREAD".to_string()],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("addLabelIds").is_none());
        assert_eq!(json["removeLabelIds"][0], "UNREAD");
    }

    #[test]
    fn list_response_tolerates_missing_messages_key() {
        let resp: ListMessagesResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.messages.is_empty());
    }
}
