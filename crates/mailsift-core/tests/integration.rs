//! End-to-end rule engine tests: rules file → store → runner → provider.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use mailsift_core::{
    CachedMessage, MessageRepository, RuleRunner, parse_rules, sync_messages,
};
use mailsift_gmail::{Header, Label, MailProvider, MessageRef, RemoteMessage};

/// Provider fake answering from fixtures and recording label mutations.
#[derive(Default)]
struct FakeGmail {
    labels: Vec<Label>,
    messages: Vec<RemoteMessage>,
    modifications: Mutex<Vec<(Vec<String>, Vec<String>, Vec<String>)>>,
}

impl MailProvider for FakeGmail {
    async fn list_messages(&self, max_results: u32) -> mailsift_gmail::Result<Vec<MessageRef>> {
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
        self.messages
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| mailsift_gmail::Error::Api {
                status: 404,
                message: id.to_string(),
            })
    }

    async fn list_labels(&self) -> mailsift_gmail::Result<Vec<Label>> {
        Ok(self.labels.clone())
    }

    async fn batch_modify(
        &self,
        ids: &[String],
        add_label_ids: &[String],
        remove_label_ids: &[String],
    ) -> mailsift_gmail::Result<()> {
        self.modifications.lock().unwrap().push((
            ids.to_vec(),
            add_label_ids.to_vec(),
            remove_label_ids.to_vec(),
        ));
        Ok(())
    }
}

fn remote_message(id: &str, from: &str, subject: &str, date: &str) -> RemoteMessage {
    let mut message = RemoteMessage {
        id: id.to_string(),
        snippet: format!("snippet of {subject}"),
        ..RemoteMessage::default()
    };
    message.payload.headers = [
        ("From", from),
        ("To", "me@example.com"),
        ("Subject", subject),
        ("Date", date),
    ]
    .iter()
    .map(|(name, value)| Header {
        name: (*name).to_string(),
        value: (*value).to_string(),
    })
    .collect();
    message
}

#[tokio::test]
async fn sync_then_apply_rules_moves_matching_messages() {
    let provider = FakeGmail {
        labels: vec![
            Label {
                id: "INBOX".to_string(),
                name: "INBOX".to_string(),
            },
            Label {
                id: "Label_42".to_string(),
                name: "invoices".to_string(),
            },
        ],
        messages: vec![
            remote_message(
                "m1",
                "billing@example.com",
                "Invoice #9",
                "Fri, 24 May 2024 10:00:00 +0000",
            ),
            remote_message(
                "m2",
                "friend@example.com",
                "Lunch tomorrow?",
                "Fri, 24 May 2024 11:00:00 +0000",
            ),
        ],
        ..FakeGmail::default()
    };

    let repo = MessageRepository::in_memory().await.unwrap();
    let stored = sync_messages(&provider, &repo, 20).await.unwrap();
    assert_eq!(stored, 2);

    let rules = parse_rules(
        r#"[
            {
                "predicate": "All",
                "conditions": [
                    {"field_name": "From", "predicate": "contains", "value": "billing"},
                    {"field_name": "Subject", "predicate": "contains", "value": "invoice"}
                ],
                "actions": ["MARK_AS_READ", "MOVE_TO_FOLDER_Invoices"]
            }
        ]"#,
    )
    .unwrap();

    let messages = repo.get_all().await.unwrap();
    let runner = RuleRunner::new(&provider);
    let report = runner.apply_rules(&rules, &messages).await;

    assert!(report.is_clean());
    assert_eq!(report.total_matched, 1);

    let modifications = provider.modifications.lock().unwrap().clone();
    assert_eq!(
        modifications,
        vec![
            // MARK_AS_READ
            (
                vec!["m1".to_string()],
                vec![],
                vec!["UNREAD".to_string()],
            ),
            // MOVE_TO_FOLDER_Invoices: remove INBOX, then add the label.
            (
                vec!["m1".to_string()],
                vec![],
                vec!["INBOX".to_string()],
            ),
            (
                vec!["m1".to_string()],
                vec!["Label_42".to_string()],
                vec![],
            ),
        ]
    );
}

#[tokio::test]
async fn huge_day_offset_fails_its_rule_without_aborting_the_run() {
    let provider = FakeGmail::default();
    let repo = MessageRepository::in_memory().await.unwrap();

    repo.store_messages(&[CachedMessage {
        message_id: "m1".to_string(),
        from_addr: "sender@example.com".to_string(),
        to_addr: "me@example.com".to_string(),
        subject: Some("Invoice #9".to_string()),
        snippet: None,
        date: Some(Utc.with_ymd_and_hms(2024, 5, 19, 0, 0, 0).unwrap()),
    }])
    .await
    .unwrap();

    // The first rule's day offset overflows any representable cutoff; it
    // must fail as a rule, not abort the process, and the second rule
    // still runs.
    let rules = parse_rules(
        r#"[
            {
                "predicate": "All",
                "conditions": [
                    {"field_name": "date", "predicate": "greater than", "value": 100000000}
                ],
                "actions": ["MARK_AS_READ"]
            },
            {
                "predicate": "Any",
                "conditions": [
                    {"field_name": "Subject", "predicate": "contains", "value": "invoice"}
                ],
                "actions": ["MARK_AS_READ"]
            }
        ]"#,
    )
    .unwrap();

    let messages = repo.get_all().await.unwrap();
    let runner = RuleRunner::new(&provider);
    let report = runner.apply_rules(&rules, &messages).await;

    assert!(!report.is_clean());
    assert_eq!(report.rules_failed, 1);
    assert_eq!(report.rules_completed, 1);
    assert_eq!(report.total_matched, 1);
    assert_eq!(provider.modifications.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn rules_run_against_cached_records_without_refetching() {
    let provider = FakeGmail::default();
    let repo = MessageRepository::in_memory().await.unwrap();

    repo.store_messages(&[CachedMessage {
        message_id: "old".to_string(),
        from_addr: "newsletter@example.com".to_string(),
        to_addr: "me@example.com".to_string(),
        subject: Some("Weekly digest".to_string()),
        snippet: None,
        date: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
    }])
    .await
    .unwrap();

    let rules = parse_rules(
        r#"[
            {
                "predicate": "Any",
                "conditions": [
                    {"field_name": "date", "predicate": "greater than", "value": 365}
                ],
                "actions": ["MARK_AS_READ"]
            }
        ]"#,
    )
    .unwrap();

    let messages = repo.get_all().await.unwrap();
    let runner = RuleRunner::new(&provider);
    let report = runner.apply_rules(&rules, &messages).await;

    assert!(report.is_clean());
    assert_eq!(report.total_matched, 1);
    assert_eq!(provider.modifications.lock().unwrap().len(), 1);
}
