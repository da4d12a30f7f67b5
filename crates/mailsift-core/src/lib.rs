//! # mailsift-core
//!
//! Rule evaluation and action dispatch engine for `MailSift`.
//!
//! This crate provides:
//! - Local message store (`SQLite`) for cached header/snippet records
//! - Declarative rule model (All/Any groups of typed conditions) and loader
//! - Type-directed condition evaluator with injectable clock
//! - Rule runner collecting matched message ids per rule
//! - Action dispatcher mapping action names to batch label mutations
//! - Sync service pulling remote messages into the local store

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod actions;
mod clock;
mod error;
pub mod rules;
pub mod service;
pub mod store;
#[cfg(test)]
mod testing;

pub use actions::ActionDispatcher;
pub use clock::{Clock, SystemClock};
pub use error::{Error, Result};
pub use rules::{
    Condition, FieldValue, GroupPredicate, Predicate, RuleGroup, RuleRunner, RuleValue, RunReport,
    evaluate_condition, evaluate_group, load_rules, parse_rules,
};
pub use service::sync_messages;
pub use store::{CachedMessage, MessageRepository};
