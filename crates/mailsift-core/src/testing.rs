//! Shared test fixtures: fixed clock and a recording mail provider.

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use mailsift_gmail::{Error as ProviderError, Label, MailProvider, MessageRef, RemoteMessage};

use crate::clock::Clock;
use crate::store::CachedMessage;

/// Clock pinned to a single instant.
pub(crate) struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A cached message with the given id and subject and harmless defaults.
pub(crate) fn message_with_subject(id: &str, subject: &str) -> CachedMessage {
    CachedMessage {
        message_id: id.to_string(),
        from_addr: "sender@example.com".to_string(),
        to_addr: "me@example.com".to_string(),
        subject: Some(subject.to_string()),
        snippet: Some("...".to_string()),
        date: Some(Utc.with_ymd_and_hms(2024, 5, 19, 12, 0, 0).unwrap()),
    }
}

/// One recorded provider invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProviderCall {
    ListMessages {
        max_results: u32,
    },
    GetMessage {
        id: String,
    },
    ListLabels,
    BatchModify {
        ids: Vec<String>,
        add: Vec<String>,
        remove: Vec<String>,
    },
}

/// In-memory provider that answers from fixtures and records every call.
#[derive(Debug, Default)]
pub(crate) struct MockProvider {
    pub labels: Vec<Label>,
    pub messages: Vec<RemoteMessage>,
    pub calls: Mutex<Vec<ProviderCall>>,
}

impl MockProvider {
    pub fn with_labels(labels: &[(&str, &str)]) -> Self {
        Self {
            labels: labels
                .iter()
                .map(|(id, name)| Label {
                    id: (*id).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: ProviderCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl MailProvider for MockProvider {
    async fn list_messages(&self, max_results: u32) -> mailsift_gmail::Result<Vec<MessageRef>> {
        self.record(ProviderCall::ListMessages { max_results });
        Ok(self
            .messages
            .iter()
            .take(max_results as usize)
            .map(|m| MessageRef {
                id: m.id.clone(),
                thread_id: String::new(),
            })
            .collect())
    }

    async fn get_message(&self, id: &str) -> mailsift_gmail::Result<RemoteMessage> {
        self.record(ProviderCall::GetMessage { id: id.to_string() });
        self.messages
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| ProviderError::Api {
                status: 404,
                message: format!("message {id} not found"),
            })
    }

    async fn list_labels(&self) -> mailsift_gmail::Result<Vec<Label>> {
        self.record(ProviderCall::ListLabels);
        Ok(self.labels.clone())
    }

    async fn batch_modify(
        &self,
        ids: &[String],
        add_label_ids: &[String],
        remove_label_ids: &[String],
    ) -> mailsift_gmail::Result<()> {
        self.record(ProviderCall::BatchModify {
            ids: ids.to_vec(),
            add: add_label_ids.to_vec(),
            remove: remove_label_ids.to_vec(),
        });
        Ok(())
    }
}
