//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Mail provider call failed.
    #[error("Provider error: {0}")]
    Provider(#[from] mailsift_gmail::Error),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Rules file could not be parsed.
    #[error("Rule parse error: {0}")]
    RuleParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A condition predicate is unknown or not valid for the value/field
    /// type pair it was applied to.
    #[error("Unsupported predicate {predicate:?}: {context}")]
    UnsupportedPredicate {
        /// The offending predicate string.
        predicate: String,
        /// What made it unsupported.
        context: &'static str,
    },

    /// Rule value and field value types cannot be compared at all.
    #[error("Unsupported field type: cannot compare {value_kind} rule value against {field_kind} field")]
    UnsupportedFieldType {
        /// Kind of the rule value.
        value_kind: &'static str,
        /// Kind of the resolved field value.
        field_kind: &'static str,
    },

    /// A day-offset value is too large to derive a cutoff time from.
    #[error("Day offset out of range: {0}")]
    DayOffsetOutOfRange(i64),

    /// A rule group names a combinator other than All/Any.
    #[error("Invalid group predicate: {0:?}")]
    InvalidGroupPredicate(String),

    /// A rule group has an empty conditions list.
    #[error("Rule group {0} has no conditions")]
    EmptyConditions(usize),

    /// No handler is registered for an action name.
    #[error("Action not recognized: {0:?}")]
    ActionNotRecognized(String),

    /// The read/unread toggle was given a label other than READ/UNREAD.
    #[error("Unknown read state: {0:?}")]
    UnknownReadState(String),

    /// Move-to-folder could not resolve the folder name to a label.
    #[error("Folder not found: {0:?}")]
    FolderNotFound(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
