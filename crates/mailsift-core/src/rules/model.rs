//! Rule data models.

use chrono::{DateTime, Utc};

/// How a rule group combines its conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPredicate {
    /// Conjunction: every condition must hold.
    All,
    /// Disjunction: at least one condition must hold.
    Any,
}

impl GroupPredicate {
    /// Parse from the rules-file string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "All" => Some(Self::All),
            "Any" => Some(Self::Any),
            _ => None,
        }
    }

    /// Convert to the rules-file string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Any => "Any",
        }
    }
}

/// Comparison applied by a single condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring match (string fields).
    Contains,
    /// Negated substring match (string fields).
    NotContains,
    /// Case-insensitive equality (string fields).
    Equals,
    /// Negated equality (string fields).
    NotEquals,
    /// Message is newer than N days (date fields).
    LessThan,
    /// Message is older than N days (date fields).
    GreaterThan,
}

impl Predicate {
    /// Parse from the rules-file string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "contains" => Some(Self::Contains),
            "not contains" => Some(Self::NotContains),
            "equals" => Some(Self::Equals),
            "not equals" => Some(Self::NotEquals),
            "less than" => Some(Self::LessThan),
            "greater than" => Some(Self::GreaterThan),
            _ => None,
        }
    }

    /// Convert to the rules-file string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::NotContains => "not contains",
            Self::Equals => "equals",
            Self::NotEquals => "not equals",
            Self::LessThan => "less than",
            Self::GreaterThan => "greater than",
        }
    }
}

/// The comparison value declared in a condition.
///
/// The rules file carries either a JSON string (compared against string
/// fields) or a JSON integer (a day offset compared against date fields).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValue {
    /// String comparison value.
    Text(String),
    /// Day-offset comparison value.
    Days(i64),
}

impl RuleValue {
    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Days(_) => "integer",
        }
    }
}

/// One field/predicate/value triple evaluated against a cached message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Name of the message attribute to compare (case-insensitive).
    pub field_name: String,
    /// Comparison to apply.
    pub predicate: Predicate,
    /// Declared comparison value.
    pub value: RuleValue,
}

/// One declarative rule: conditions combined under All/Any plus the
/// actions to run on matched messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    /// How conditions are combined.
    pub predicate: GroupPredicate,
    /// Conditions in declared order.
    pub conditions: Vec<Condition>,
    /// Action names in declared order.
    pub actions: Vec<String>,
}

/// A message attribute resolved for comparison.
///
/// Absent, null, and unknown attributes resolve to an empty string, the
/// behavior a typo'd `field_name` falls back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// String-typed attribute (from, to, subject, snippet).
    Text(String),
    /// Date-typed attribute.
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Timestamp(_) => "timestamp",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn group_predicate_parse_is_exact() {
        assert_eq!(GroupPredicate::parse("All"), Some(GroupPredicate::All));
        assert_eq!(GroupPredicate::parse("Any"), Some(GroupPredicate::Any));
        assert_eq!(GroupPredicate::parse("all"), None);
        assert_eq!(GroupPredicate::parse("None"), None);
    }

    #[test]
    fn predicate_round_trips_through_strings() {
        for p in [
            Predicate::Contains,
            Predicate::NotContains,
            Predicate::Equals,
            Predicate::NotEquals,
            Predicate::LessThan,
            Predicate::GreaterThan,
        ] {
            assert_eq!(Predicate::parse(p.as_str()), Some(p));
        }
        assert_eq!(Predicate::parse("matches"), None);
    }
}
