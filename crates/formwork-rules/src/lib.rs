//! Validation rule sets for formwork forms
//!
//! A [`RuleSet`] is a pure, immutable description of per-field
//! constraints: which paths are required, which have length bounds or
//! patterns, and in what order failures are reported. Evaluation has
//! no side effects; the form session owns all mutable state.

pub mod rule;
pub mod ruleset;

pub use rule::{CustomCheck, FailureReason, ValidationRule, is_blank};
pub use ruleset::{RuleSet, RuleSetBuilder};
