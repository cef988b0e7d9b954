//! Per-field validation rules and failure values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Predicate type for [`ValidationRule::Custom`] rules.
pub type CustomCheck = Arc<dyn Fn(&serde_json::Value) -> bool + Send + Sync>;

/// A single constraint on one field path.
///
/// Rules are pure descriptions: evaluating one never mutates anything,
/// and a rule set is frozen once built. Length rules count characters,
/// not bytes, so multi-byte input (CJK, emoji) is measured the way a
/// user perceives it.
#[derive(Clone)]
pub enum ValidationRule {
	/// Value must be present and non-blank (whitespace-only is blank).
	Required,
	/// Value must have at least `min` characters. When `max` is also
	/// given the rule is a range and a violation of either side reports
	/// the full range.
	MinLength { min: usize, max: Option<usize> },
	/// Value must have at most `max` characters.
	MaxLength { max: usize },
	/// String form of the value must match the pattern.
	Pattern { pattern: regex::Regex },
	/// Caller-supplied predicate with its own failure message.
	Custom { message: String, check: CustomCheck },
}

impl ValidationRule {
	/// A `Required` rule.
	///
	/// # Examples
	///
	/// ```
	/// use formwork_rules::ValidationRule;
	/// use serde_json::json;
	///
	/// let rule = ValidationRule::required();
	/// assert!(rule.check(&json!("x")).is_ok());
	/// assert!(rule.check(&json!("   ")).is_err());
	/// ```
	pub fn required() -> Self {
		Self::Required
	}

	/// A minimum-length rule without an upper bound.
	pub fn min_length(min: usize) -> Self {
		Self::MinLength { min, max: None }
	}

	/// A bounded length rule; failures on either side report the range.
	///
	/// # Examples
	///
	/// ```
	/// use formwork_rules::{FailureReason, ValidationRule};
	/// use serde_json::json;
	///
	/// let rule = ValidationRule::length(3, 40);
	/// assert!(rule.check(&json!("abc")).is_ok());
	/// assert_eq!(
	/// 	rule.check(&json!("x")),
	/// 	Err(FailureReason::MinLength { min: 3, max: Some(40), actual: 1 })
	/// );
	/// ```
	pub fn length(min: usize, max: usize) -> Self {
		Self::MinLength {
			min,
			max: Some(max),
		}
	}

	/// A maximum-length rule.
	pub fn max_length(max: usize) -> Self {
		Self::MaxLength { max }
	}

	/// A pattern rule. Fails at construction time on an invalid pattern,
	/// not at validation time.
	///
	/// # Examples
	///
	/// ```
	/// use formwork_rules::ValidationRule;
	/// use serde_json::json;
	///
	/// let rule = ValidationRule::pattern(r"^[a-z]+$").unwrap();
	/// assert!(rule.check(&json!("abc")).is_ok());
	/// assert!(rule.check(&json!("ABC")).is_err());
	/// ```
	pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
		Ok(Self::Pattern {
			pattern: regex::Regex::new(pattern)?,
		})
	}

	/// A custom rule with a caller-supplied predicate.
	///
	/// The message may reference `{label}`, which the presentation layer
	/// substitutes with the field's display label.
	pub fn custom<F>(message: impl Into<String>, check: F) -> Self
	where
		F: Fn(&serde_json::Value) -> bool + Send + Sync + 'static,
	{
		Self::Custom {
			message: message.into(),
			check: Arc::new(check),
		}
	}

	/// Evaluate this rule against a value.
	///
	/// Missing model values are represented as `Value::Null`.
	pub fn check(&self, value: &serde_json::Value) -> Result<(), FailureReason> {
		match self {
			Self::Required => {
				if is_blank(value) {
					Err(FailureReason::Required)
				} else {
					Ok(())
				}
			}
			Self::MinLength { min, max } => {
				let actual = value_length(value);
				let below = actual < *min;
				let above = max.is_some_and(|max| actual > max);
				if below || above {
					Err(FailureReason::MinLength {
						min: *min,
						max: *max,
						actual,
					})
				} else {
					Ok(())
				}
			}
			Self::MaxLength { max } => {
				let actual = value_length(value);
				if actual > *max {
					Err(FailureReason::MaxLength { max: *max, actual })
				} else {
					Ok(())
				}
			}
			Self::Pattern { pattern } => {
				if pattern.is_match(&string_form(value)) {
					Ok(())
				} else {
					Err(FailureReason::Pattern)
				}
			}
			Self::Custom { message, check } => {
				if check(value) {
					Ok(())
				} else {
					Err(FailureReason::Custom {
						message: message.clone(),
					})
				}
			}
		}
	}
}

impl fmt::Debug for ValidationRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Required => write!(f, "Required"),
			Self::MinLength { min, max } => f
				.debug_struct("MinLength")
				.field("min", min)
				.field("max", max)
				.finish(),
			Self::MaxLength { max } => f.debug_struct("MaxLength").field("max", max).finish(),
			Self::Pattern { pattern } => f
				.debug_struct("Pattern")
				.field("pattern", &pattern.as_str())
				.finish(),
			Self::Custom { message, .. } => {
				f.debug_struct("Custom").field("message", message).finish()
			}
		}
	}
}

/// Why a field failed validation: the first failing rule's kind plus
/// the parameters the presentation layer needs to render a message.
///
/// A `FailureReason` is a value, never a fault — it flows through the
/// session's error state and out to an inline message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
	Required,
	MinLength {
		min: usize,
		max: Option<usize>,
		actual: usize,
	},
	MaxLength {
		max: usize,
		actual: usize,
	},
	Pattern,
	Custom {
		message: String,
	},
}

/// Whether a value counts as blank for `Required`.
///
/// Null, a missing value (callers pass `Null` for missing), and
/// whitespace-only strings are blank; every other value is present.
pub fn is_blank(value: &serde_json::Value) -> bool {
	match value {
		serde_json::Value::Null => true,
		serde_json::Value::String(s) => s.trim().is_empty(),
		_ => false,
	}
}

/// Character length used by the length rules.
fn value_length(value: &serde_json::Value) -> usize {
	string_form(value).chars().count()
}

/// String form a user would have typed: strings as-is, null empty,
/// everything else via its JSON rendering.
fn string_form(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::Null => String::new(),
		serde_json::Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(null))]
	#[case(json!(""))]
	#[case(json!("   "))]
	#[case(json!("\t\n"))]
	fn test_required_rejects_blank(#[case] value: serde_json::Value) {
		// Arrange
		let rule = ValidationRule::required();

		// Act
		let result = rule.check(&value);

		// Assert
		assert_eq!(result, Err(FailureReason::Required));
	}

	#[rstest]
	#[case(json!("x"))]
	#[case(json!(0))]
	#[case(json!(false))]
	#[case(json!([1, 2]))]
	fn test_required_accepts_present(#[case] value: serde_json::Value) {
		let rule = ValidationRule::required();
		assert!(rule.check(&value).is_ok());
	}

	#[rstest]
	#[case("abc", true)] // lower boundary is valid
	#[case("ab", false)]
	#[case("abcd", true)]
	fn test_min_length_boundary(#[case] value: &str, #[case] valid: bool) {
		let rule = ValidationRule::min_length(3);
		assert_eq!(rule.check(&json!(value)).is_ok(), valid);
	}

	#[rstest]
	#[case("abcde", true)] // upper boundary is valid
	#[case("abcdef", false)]
	#[case("", true)]
	fn test_max_length_boundary(#[case] value: &str, #[case] valid: bool) {
		let rule = ValidationRule::max_length(5);
		assert_eq!(rule.check(&json!(value)).is_ok(), valid);
	}

	#[rstest]
	fn test_length_range_reports_range_on_both_sides() {
		// Arrange
		let rule = ValidationRule::length(3, 5);

		// Act + Assert: too short and too long both carry (min, max)
		assert_eq!(
			rule.check(&json!("ab")),
			Err(FailureReason::MinLength {
				min: 3,
				max: Some(5),
				actual: 2
			})
		);
		assert_eq!(
			rule.check(&json!("abcdef")),
			Err(FailureReason::MinLength {
				min: 3,
				max: Some(5),
				actual: 6
			})
		);
		assert!(rule.check(&json!("abc")).is_ok());
		assert!(rule.check(&json!("abcde")).is_ok());
	}

	#[rstest]
	fn test_length_counts_characters_not_bytes() {
		let rule = ValidationRule::max_length(5);

		// 5 CJK characters are 15 bytes but still within the limit
		assert!(rule.check(&json!("こんにちは")).is_ok());
		assert!(rule.check(&json!("こんにちはX")).is_err());
	}

	#[rstest]
	fn test_pattern_matches_string_form() {
		let rule = ValidationRule::pattern(r"^\d+$").unwrap();

		assert!(rule.check(&json!("123")).is_ok());
		assert!(rule.check(&json!(123)).is_ok());
		assert_eq!(rule.check(&json!("12a")), Err(FailureReason::Pattern));
	}

	#[rstest]
	fn test_pattern_invalid_regex_fails_at_construction() {
		assert!(ValidationRule::pattern("([unclosed").is_err());
	}

	#[rstest]
	fn test_custom_rule_carries_its_message() {
		// Arrange
		let rule = ValidationRule::custom("{label} must be even", |v| {
			v.as_u64().is_some_and(|n| n % 2 == 0)
		});

		// Act + Assert
		assert!(rule.check(&json!(4)).is_ok());
		assert_eq!(
			rule.check(&json!(3)),
			Err(FailureReason::Custom {
				message: "{label} must be even".to_string()
			})
		);
	}

	#[rstest]
	fn test_failure_reason_serializes_tagged() {
		let reason = FailureReason::MinLength {
			min: 3,
			max: Some(40),
			actual: 1,
		};

		let json = serde_json::to_string(&reason).unwrap();
		assert!(json.contains("\"kind\":\"min_length\""));

		let back: FailureReason = serde_json::from_str(&json).unwrap();
		assert_eq!(back, reason);
	}
}
