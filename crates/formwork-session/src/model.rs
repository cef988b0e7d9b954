//! Backing-model collaborator contract
//!
//! The session never knows how pending edits are diffed against a
//! canonical record; it only relies on `get`/`set`/`validate`. Models
//! that batch-validate implement [`BackingModel::validate`] themselves;
//! the default implementation falls back to field-by-field rule
//! evaluation.

use formwork_rules::{FailureReason, RuleSet};
use std::collections::{BTreeMap, HashMap};

/// Failure inside the backing-model collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
	#[error("backing model rejected read of '{path}': {reason}")]
	Read { path: String, reason: String },
	#[error("backing model rejected write of '{path}': {reason}")]
	Write { path: String, reason: String },
}

/// The storage collaborator a form session is bound to.
///
/// The contract with the session: only `FieldBinding` changes and
/// `OptionGroup` selections write through `set`; the session itself
/// never mutates the model on any other path.
pub trait BackingModel {
	/// Read the value at a field path. `None` means the path has no
	/// value, which validation treats as `Null`.
	fn get(&self, path: &str) -> Result<Option<serde_json::Value>, ModelError>;

	/// Write a value at a field path.
	fn set(&mut self, path: &str, value: serde_json::Value) -> Result<(), ModelError>;

	/// Validate every path the rule set declares, returning the
	/// failures. Batch-validating models override this; the default
	/// evaluates field by field through `get`.
	fn validate(&self, rules: &RuleSet) -> Result<BTreeMap<String, FailureReason>, ModelError> {
		let mut failures = BTreeMap::new();
		for path in rules.field_paths() {
			let value = self.get(path)?.unwrap_or(serde_json::Value::Null);
			if let Err(reason) = rules.validate(path, &value) {
				failures.insert(path.to_string(), reason);
			}
		}
		Ok(failures)
	}
}

/// In-memory changeset-style model: pending edits layered over
/// canonical values.
///
/// Stands in for an external changeset collaborator in tests and
/// simple hosts. Reads see pending edits first; `commit` folds them
/// into the canonical record, `rollback` discards them.
///
/// # Examples
///
/// ```
/// use formwork_session::{BackingModel, MemoryModel};
/// use serde_json::json;
///
/// let mut model = MemoryModel::from_value(json!({"firstName": "Ada"})).unwrap();
/// model.set("firstName", json!("Grace")).unwrap();
///
/// assert_eq!(model.get("firstName").unwrap(), Some(json!("Grace")));
/// assert!(model.is_dirty());
///
/// model.rollback();
/// assert_eq!(model.get("firstName").unwrap(), Some(json!("Ada")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryModel {
	canonical: HashMap<String, serde_json::Value>,
	edits: HashMap<String, serde_json::Value>,
}

impl MemoryModel {
	/// An empty model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a model from a JSON object; each top-level key becomes a
	/// field path.
	pub fn from_value(value: serde_json::Value) -> Result<Self, ModelError> {
		match value {
			serde_json::Value::Object(map) => Ok(Self {
				canonical: map.into_iter().collect(),
				edits: HashMap::new(),
			}),
			other => Err(ModelError::Write {
				path: String::new(),
				reason: format!("expected a JSON object, got {other}"),
			}),
		}
	}

	/// Whether any pending edits exist.
	pub fn is_dirty(&self) -> bool {
		!self.edits.is_empty()
	}

	/// The pending edits, path → value.
	pub fn pending(&self) -> &HashMap<String, serde_json::Value> {
		&self.edits
	}

	/// Fold pending edits into the canonical record.
	pub fn commit(&mut self) {
		self.canonical.extend(self.edits.drain());
	}

	/// Discard pending edits.
	pub fn rollback(&mut self) {
		self.edits.clear();
	}
}

impl BackingModel for MemoryModel {
	fn get(&self, path: &str) -> Result<Option<serde_json::Value>, ModelError> {
		Ok(self
			.edits
			.get(path)
			.or_else(|| self.canonical.get(path))
			.cloned())
	}

	fn set(&mut self, path: &str, value: serde_json::Value) -> Result<(), ModelError> {
		self.edits.insert(path.to_string(), value);
		Ok(())
	}
}
