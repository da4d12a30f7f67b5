//! Declarative rule model, loader, evaluators, and runner.
//!
//! A rule set is an ordered list of [`RuleGroup`]s. Each group combines
//! typed [`Condition`]s under an All/Any predicate and names the actions to
//! run on matched messages. Groups are evaluated strictly one after
//! another; a failing group aborts only itself.

mod evaluator;
mod loader;
mod model;
mod runner;

pub use evaluator::{evaluate_condition, evaluate_group};
pub use loader::{load_rules, parse_rules};
pub use model::{Condition, FieldValue, GroupPredicate, Predicate, RuleGroup, RuleValue};
pub use runner::{RuleRunner, RunReport};
