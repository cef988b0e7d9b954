//! Ordered per-path rule sequences with first-failure-wins evaluation

use crate::rule::{FailureReason, ValidationRule};
use std::collections::BTreeMap;

/// An immutable mapping from field path to an ordered sequence of
/// rules.
///
/// Declared order is evaluation order: the first rule that fails
/// determines the reported [`FailureReason`]. A rule set is loaded
/// once per form-session lifetime and never mutated by the session.
///
/// # Examples
///
/// ```
/// use formwork_rules::{RuleSet, ValidationRule};
/// use serde_json::json;
///
/// let rules = RuleSet::builder()
/// 	.field("firstName", [ValidationRule::required(), ValidationRule::length(3, 40)])
/// 	.build();
///
/// assert!(rules.validate("firstName", &json!("Ada")).is_ok());
/// assert!(rules.validate("firstName", &json!("")).is_err());
/// // Paths without rules are trivially valid.
/// assert!(rules.validate("nickname", &json!("")).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
	rules: BTreeMap<String, Vec<ValidationRule>>,
}

impl RuleSet {
	/// Start building a rule set.
	pub fn builder() -> RuleSetBuilder {
		RuleSetBuilder::default()
	}

	/// An empty rule set (every value is valid).
	pub fn empty() -> Self {
		Self::default()
	}

	/// Rules declared for a path, in evaluation order.
	pub fn rules_for(&self, field_path: &str) -> &[ValidationRule] {
		self.rules
			.get(field_path)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// Whether any rules are declared for a path.
	pub fn has_rules(&self, field_path: &str) -> bool {
		self.rules.contains_key(field_path)
	}

	/// All field paths with declared rules.
	pub fn field_paths(&self) -> impl Iterator<Item = &str> {
		self.rules.keys().map(String::as_str)
	}

	/// Evaluate the rules for `field_path` against `value`.
	///
	/// Pure and deterministic: returns the first failing rule's reason,
	/// or `Ok` when no rule fails or no rules exist for the path.
	/// Missing values are passed as `Value::Null`.
	pub fn validate(
		&self,
		field_path: &str,
		value: &serde_json::Value,
	) -> Result<(), FailureReason> {
		for rule in self.rules_for(field_path) {
			rule.check(value)?;
		}
		Ok(())
	}

	/// Evaluate every declared path, looking values up through
	/// `lookup`, and collect the failures.
	///
	/// This is the wholesale form backing models use when they
	/// batch-validate.
	pub fn validate_all<F>(&self, mut lookup: F) -> BTreeMap<String, FailureReason>
	where
		F: FnMut(&str) -> serde_json::Value,
	{
		let mut failures = BTreeMap::new();
		for path in self.rules.keys() {
			let value = lookup(path);
			if let Err(reason) = self.validate(path, &value) {
				failures.insert(path.clone(), reason);
			}
		}
		failures
	}
}

/// Builder for [`RuleSet`].
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
	rules: BTreeMap<String, Vec<ValidationRule>>,
}

impl RuleSetBuilder {
	/// Declare the rules for a field path. Repeated calls for the same
	/// path append, preserving declaration order.
	pub fn field(
		mut self,
		field_path: impl Into<String>,
		rules: impl IntoIterator<Item = ValidationRule>,
	) -> Self {
		self.rules
			.entry(field_path.into())
			.or_default()
			.extend(rules);
		self
	}

	/// Declare a single rule for a field path.
	pub fn rule(self, field_path: impl Into<String>, rule: ValidationRule) -> Self {
		self.field(field_path, [rule])
	}

	/// Freeze the rule set.
	pub fn build(self) -> RuleSet {
		RuleSet { rules: self.rules }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_first_declared_failure_wins() {
		// Arrange: Required is declared before the length rule
		let rules = RuleSet::builder()
			.field(
				"name",
				[ValidationRule::required(), ValidationRule::min_length(3)],
			)
			.build();

		// Act: blank violates both rules
		let result = rules.validate("name", &json!(""));

		// Assert: the Required failure is reported, not MinLength
		assert_eq!(result, Err(FailureReason::Required));
	}

	#[rstest]
	fn test_later_rule_reported_when_earlier_passes() {
		let rules = RuleSet::builder()
			.field(
				"name",
				[ValidationRule::required(), ValidationRule::min_length(3)],
			)
			.build();

		assert_eq!(
			rules.validate("name", &json!("ab")),
			Err(FailureReason::MinLength {
				min: 3,
				max: None,
				actual: 2
			})
		);
	}

	#[rstest]
	fn test_path_without_rules_is_valid() {
		let rules = RuleSet::empty();
		assert!(rules.validate("anything", &json!(null)).is_ok());
	}

	#[rstest]
	fn test_repeated_field_declarations_append_in_order() {
		let rules = RuleSet::builder()
			.rule("name", ValidationRule::required())
			.rule("name", ValidationRule::min_length(3))
			.build();

		assert_eq!(rules.rules_for("name").len(), 2);
		assert_eq!(rules.validate("name", &json!("")), Err(FailureReason::Required));
	}

	#[rstest]
	fn test_validate_all_collects_only_failures() {
		// Arrange
		let rules = RuleSet::builder()
			.rule("firstName", ValidationRule::required())
			.rule("lastName", ValidationRule::required())
			.build();

		// Act
		let failures = rules.validate_all(|path| match path {
			"firstName" => json!("Ada"),
			_ => json!(null),
		});

		// Assert
		assert_eq!(failures.len(), 1);
		assert_eq!(failures.get("lastName"), Some(&FailureReason::Required));
	}

	#[rstest]
	fn test_validate_is_deterministic() {
		let rules = RuleSet::builder()
			.rule("name", ValidationRule::length(3, 40))
			.build();

		let first = rules.validate("name", &json!("x"));
		let second = rules.validate("name", &json!("x"));
		assert_eq!(first, second);
	}
}
