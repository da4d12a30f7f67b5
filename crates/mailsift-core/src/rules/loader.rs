//! Rules file loading and validation.
//!
//! The rules file is a JSON array of rule objects. Structural requirements
//! (required fields, value types, no additional properties) are enforced by
//! serde; predicate strings and the non-empty-conditions rule are checked
//! here, so invalid configuration fails before any rule runs.

use std::path::Path;

use serde::Deserialize;

use super::model::{Condition, GroupPredicate, Predicate, RuleGroup, RuleValue};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRule {
    predicate: String,
    conditions: Vec<RawCondition>,
    actions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCondition {
    field_name: String,
    predicate: String,
    value: RawValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Days(i64),
    Text(String),
}

/// Load and validate a rules file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<RuleGroup>> {
    let raw = std::fs::read_to_string(path)?;
    parse_rules(&raw)
}

/// Parse and validate a rules document.
///
/// An empty array is valid and yields an empty rule set.
///
/// # Errors
///
/// Returns [`Error::RuleParse`] for malformed JSON or schema violations,
/// [`Error::InvalidGroupPredicate`] / [`Error::UnsupportedPredicate`] for
/// unknown predicate strings, and [`Error::EmptyConditions`] when a rule
/// declares no conditions.
pub fn parse_rules(raw: &str) -> Result<Vec<RuleGroup>> {
    let raw_rules: Vec<RawRule> = serde_json::from_str(raw)?;

    raw_rules
        .into_iter()
        .enumerate()
        .map(|(index, rule)| validate_rule(index, rule))
        .collect()
}

fn validate_rule(index: usize, raw: RawRule) -> Result<RuleGroup> {
    let predicate = GroupPredicate::parse(&raw.predicate)
        .ok_or_else(|| Error::InvalidGroupPredicate(raw.predicate.clone()))?;

    if raw.conditions.is_empty() {
        return Err(Error::EmptyConditions(index));
    }

    let conditions = raw
        .conditions
        .into_iter()
        .map(|c| {
            let predicate =
                Predicate::parse(&c.predicate).ok_or_else(|| Error::UnsupportedPredicate {
                    predicate: c.predicate.clone(),
                    context: "not a known predicate",
                })?;
            let value = match c.value {
                RawValue::Days(n) => RuleValue::Days(n),
                RawValue::Text(s) => RuleValue::Text(s),
            };
            Ok(Condition {
                field_name: c.field_name,
                predicate,
                value,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RuleGroup {
        predicate,
        conditions,
        actions: raw.actions,
    })
}
