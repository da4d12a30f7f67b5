//! Condition and group evaluation.
//!
//! Dispatch is over the combined kinds of the declared rule value and the
//! resolved field value: string-vs-string comparisons and day-offset-vs-
//! timestamp comparisons are the only supported pairings, every other
//! combination is a hard [`Error::UnsupportedFieldType`].

use chrono::Duration;

use super::model::{Condition, FieldValue, GroupPredicate, Predicate, RuleGroup, RuleValue};
use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::store::CachedMessage;

/// Evaluate a single typed condition.
///
/// String comparisons are case-insensitive. Day-offset comparisons read the
/// clock once and compare the message timestamp against `now - value days`:
/// `less than` holds when the message is newer than the cutoff, `greater
/// than` when it is older. A timestamp exactly on the cutoff matches
/// neither.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPredicate`] when the predicate does not
/// apply to the value/field pairing, [`Error::UnsupportedFieldType`] when
/// the pairing itself is not comparable, and
/// [`Error::DayOffsetOutOfRange`] when the day offset is too large to
/// subtract from the current time.
pub fn evaluate_condition<C: Clock>(
    value: &RuleValue,
    field: &FieldValue,
    predicate: Predicate,
    clock: &C,
) -> Result<bool> {
    match (value, field) {
        (RuleValue::Text(value), FieldValue::Text(field)) => {
            let value = value.to_lowercase();
            let field = field.to_lowercase();
            match predicate {
                Predicate::Contains => Ok(field.contains(&value)),
                Predicate::NotContains => Ok(!field.contains(&value)),
                Predicate::Equals => Ok(field == value),
                Predicate::NotEquals => Ok(field != value),
                other => Err(Error::UnsupportedPredicate {
                    predicate: other.as_str().to_string(),
                    context: "not valid for string comparison",
                }),
            }
        }
        (RuleValue::Days(days), FieldValue::Timestamp(timestamp)) => {
            let cutoff = Duration::try_days(*days)
                .and_then(|delta| clock.now().checked_sub_signed(delta))
                .ok_or(Error::DayOffsetOutOfRange(*days))?;
            match predicate {
                Predicate::LessThan => Ok(cutoff < *timestamp),
                Predicate::GreaterThan => Ok(cutoff > *timestamp),
                other => Err(Error::UnsupportedPredicate {
                    predicate: other.as_str().to_string(),
                    context: "not valid for date comparison",
                }),
            }
        }
        (value, field) => Err(Error::UnsupportedFieldType {
            value_kind: value.kind(),
            field_kind: field.kind(),
        }),
    }
}

/// Resolve a condition's field name against a cached message.
///
/// Matching is case-insensitive. Absent, null, and unknown names resolve
/// to an empty string, the same fallback the field-typed comparisons use.
fn resolve_field(message: &CachedMessage, field_name: &str) -> FieldValue {
    match field_name.to_lowercase().as_str() {
        "from" | "from_addr" => FieldValue::Text(message.from_addr.clone()),
        "to" | "to_addr" => FieldValue::Text(message.to_addr.clone()),
        "subject" => FieldValue::Text(message.subject.clone().unwrap_or_default()),
        "message" | "snippet" => FieldValue::Text(message.snippet.clone().unwrap_or_default()),
        "date" => message
            .date
            .map_or_else(|| FieldValue::Text(String::new()), FieldValue::Timestamp),
        other => {
            tracing::debug!(field = other, "unknown field name, resolving to empty string");
            FieldValue::Text(String::new())
        }
    }
}

fn evaluate_single<C: Clock>(
    message: &CachedMessage,
    condition: &Condition,
    clock: &C,
) -> Result<bool> {
    let field = resolve_field(message, &condition.field_name);
    evaluate_condition(&condition.value, &field, condition.predicate, clock)
}

/// Evaluate a rule group against one message.
///
/// `All` is a short-circuiting conjunction, `Any` a short-circuiting
/// disjunction; conditions are evaluated in declared order and no condition
/// after the deciding one is touched. With no conditions, `All` is
/// vacuously true and `Any` false (the loader rejects empty condition
/// lists, so this arises only for groups built in code).
///
/// # Errors
///
/// Propagates the first condition evaluation error.
pub fn evaluate_group<C: Clock>(
    message: &CachedMessage,
    group: &RuleGroup,
    clock: &C,
) -> Result<bool> {
    match group.predicate {
        GroupPredicate::All => {
            for condition in &group.conditions {
                if !evaluate_single(message, condition, clock)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        GroupPredicate::Any => {
            for condition in &group.conditions {
                if evaluate_single(message, condition, clock)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}
