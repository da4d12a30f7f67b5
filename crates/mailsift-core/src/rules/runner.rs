//! Rule execution: filtering cached messages and dispatching actions.

use mailsift_gmail::MailProvider;

use super::evaluator::evaluate_group;
use super::model::RuleGroup;
use crate::actions::ActionDispatcher;
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::store::CachedMessage;

/// Outcome of applying a rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Rules that ran to completion.
    pub rules_completed: usize,
    /// Rules aborted by an evaluation or dispatch error.
    pub rules_failed: usize,
    /// Total matched message ids across completed rules.
    pub total_matched: usize,
}

impl RunReport {
    /// Whether every rule ran to completion.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.rules_failed == 0
    }
}

/// Runs rule groups against cached messages and dispatches actions on
/// matches.
///
/// Single-threaded and strictly sequential: one rule group runs to
/// completion before the next begins, and within a group actions dispatch
/// one after another. The message set is read-only for the duration of a
/// pass.
pub struct RuleRunner<'a, P, C = SystemClock> {
    dispatcher: ActionDispatcher,
    provider: &'a P,
    clock: C,
}

impl<'a, P: MailProvider> RuleRunner<'a, P> {
    /// Create a runner using the system clock.
    #[must_use]
    pub fn new(provider: &'a P) -> Self {
        Self::with_clock(provider, SystemClock)
    }
}

impl<'a, P: MailProvider, C: Clock> RuleRunner<'a, P, C> {
    /// Create a runner with an explicit clock.
    #[must_use]
    pub fn with_clock(provider: &'a P, clock: C) -> Self {
        Self {
            dispatcher: ActionDispatcher::new(),
            provider,
            clock,
        }
    }

    /// Run one rule group over the messages.
    ///
    /// Messages are visited in their given order and matched ids collected
    /// in that order (ids are unique at source, so no dedup happens). With
    /// at least one match the group's actions are dispatched once with the
    /// full id list; with none, nothing is dispatched and the empty list is
    /// returned.
    ///
    /// # Errors
    ///
    /// Propagates condition evaluation errors and action dispatch errors.
    pub async fn run(
        &self,
        group: &RuleGroup,
        messages: &[CachedMessage],
    ) -> Result<Vec<String>> {
        let mut matched = Vec::new();
        for message in messages {
            if evaluate_group(message, group, &self.clock)? {
                matched.push(message.message_id.clone());
            }
        }

        if matched.is_empty() {
            tracing::info!(predicate = group.predicate.as_str(), "no messages matched rule");
            return Ok(matched);
        }

        tracing::info!(
            predicate = group.predicate.as_str(),
            matched = matched.len(),
            "dispatching rule actions"
        );
        self.dispatcher
            .dispatch(&group.actions, &matched, self.provider)
            .await?;
        Ok(matched)
    }

    /// Apply a whole rule set, one group after another.
    ///
    /// A failing rule is logged with its index and aborts only itself; the
    /// remaining rules still run. The report says whether any rule failed,
    /// which callers surface as a non-zero completion status.
    pub async fn apply_rules(
        &self,
        rules: &[RuleGroup],
        messages: &[CachedMessage],
    ) -> RunReport {
        if rules.is_empty() {
            tracing::info!("no rules to apply");
            return RunReport::default();
        }
        if messages.is_empty() {
            tracing::info!("no cached messages to evaluate");
        }

        let mut report = RunReport::default();
        for (index, rule) in rules.iter().enumerate() {
            match self.run(rule, messages).await {
                Ok(matched) => {
                    report.rules_completed += 1;
                    report.total_matched += matched.len();
                }
                Err(error) => {
                    tracing::error!(rule = index, %error, "rule failed, continuing with next");
                    report.rules_failed += 1;
                }
            }
        }
        report
    }
}
