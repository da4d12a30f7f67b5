//! Action name resolution and dispatch.

use mailsift_gmail::MailProvider;
use regex::Regex;

use super::handlers;
use crate::error::{Error, Result};

/// How a route key matches an action name.
#[derive(Debug)]
enum Matcher {
    /// Literal equality.
    Exact(&'static str),
    /// Compiled pattern, tried in registration order.
    Pattern(Regex),
}

/// The handler a route resolves to.
#[derive(Debug, Clone, Copy)]
enum Handler {
    MarkReadUnread,
    MoveToFolder,
}

/// Resolves action names to handlers and invokes them with matched ids.
///
/// Resolution tries exact keys first across the whole table, then patterns
/// in registration order; the first matching pattern wins. The provider is
/// passed in at dispatch time rather than held as process state.
#[derive(Debug)]
pub struct ActionDispatcher {
    routes: Vec<(Matcher, Handler)>,
}

impl ActionDispatcher {
    /// Create a dispatcher with the built-in routes: `MARK_AS_READ`,
    /// `MARK_AS_UNREAD`, and the `MOVE_TO_FOLDER_<name>` pattern.
    #[must_use]
    #[allow(clippy::expect_used)] // the pattern is a literal and always compiles
    pub fn new() -> Self {
        Self {
            routes: vec![
                (Matcher::Exact("MARK_AS_READ"), Handler::MarkReadUnread),
                (Matcher::Exact("MARK_AS_UNREAD"), Handler::MarkReadUnread),
                (
                    Matcher::Pattern(
                        Regex::new("^MOVE_TO_FOLDER_.*").expect("literal pattern"),
                    ),
                    Handler::MoveToFolder,
                ),
            ],
        }
    }

    fn resolve(&self, action: &str) -> Option<Handler> {
        for (matcher, handler) in &self.routes {
            if let Matcher::Exact(key) = matcher
                && *key == action
            {
                return Some(*handler);
            }
        }
        for (matcher, handler) in &self.routes {
            if let Matcher::Pattern(pattern) = matcher
                && pattern.is_match(action)
            {
                return Some(*handler);
            }
        }
        None
    }

    /// Dispatch every action of a rule, in declared order, against the
    /// matched message ids.
    ///
    /// The label argument handed to the handler is the segment after the
    /// action name's final underscore. The first unresolvable action
    /// abandons the rest of the list; actions already dispatched are not
    /// rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ActionNotRecognized`] for an unregistered action
    /// name, and propagates handler and provider errors.
    pub async fn dispatch<P: MailProvider>(
        &self,
        actions: &[String],
        matched_ids: &[String],
        provider: &P,
    ) -> Result<()> {
        for action in actions {
            let handler = self
                .resolve(action)
                .ok_or_else(|| Error::ActionNotRecognized(action.clone()))?;
            let label = action.rsplit('_').next().unwrap_or(action.as_str());

            tracing::info!(action, ids = matched_ids.len(), "dispatching action");
            match handler {
                Handler::MarkReadUnread => {
                    handlers::mark_read_unread(provider, matched_ids, label).await?;
                }
                Handler::MoveToFolder => {
                    handlers::move_to_folder(provider, matched_ids, label).await?;
                }
            }
        }
        Ok(())
    }
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
