//! Form session: the top-level orchestrator
//!
//! A session owns the backing model handle, every field binding and
//! option group registered during composition, per-field error state,
//! and the submit gate. All user interaction funnels through session
//! methods (`change`, `blur`, `select`, `submit`), each of which runs
//! synchronously to completion — events are serialized by the hosting
//! event loop, so there is no interior locking.

use crate::binding::FieldBinding;
use crate::compose::InputSpec;
use crate::error::{FormError, FormResult};
use crate::group::{OptionGroup, SelectionUpdate};
use crate::model::BackingModel;
use formwork_rules::{FailureReason, RuleSet};
use tracing::{debug, warn};

/// Label key used when a submit button is declared without a label;
/// translated by the presentation layer when a collaborator knows it,
/// rendered literally otherwise.
pub const DEFAULT_SUBMIT_LABEL_KEY: &str = "label.save";

/// What to do with a field's displayed error when the user edits the
/// field again before the next blur or submit.
///
/// The source behavior this engine was distilled from is ambiguous
/// here, so it is an explicit choice rather than a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorRetention {
	/// The error stays visible until the next blur/submit revalidates
	/// the field.
	#[default]
	Sticky,
	/// Editing a field immediately clears its displayed error; the
	/// next blur/submit may reinstate it.
	ClearOnChange,
}

/// Session-level configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
	pub error_retention: ErrorRetention,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Every field validated clean; the on-submit callback ran once.
	Submitted,
	/// At least one field failed; no callback, errors left visible.
	Rejected { failures: usize },
}

impl SubmitOutcome {
	pub fn is_submitted(&self) -> bool {
		matches!(self, Self::Submitted)
	}
}

type SubmitCallback<M> = Box<dyn Fn(&M) + Send + Sync>;

/// A live form bound to a model and a rule set.
///
/// The session is the sole owner of the bindings and groups it
/// creates; nothing else may mutate their state. It is created when a
/// form is composed and dropped when the form leaves the view.
///
/// # Examples
///
/// ```
/// use formwork_rules::{RuleSet, ValidationRule};
/// use formwork_session::{FormSession, InputSpec, MemoryModel};
/// use serde_json::json;
///
/// let model = MemoryModel::from_value(json!({"firstName": "x"})).unwrap();
/// let rules = RuleSet::builder()
/// 	.rule("firstName", ValidationRule::length(3, 40))
/// 	.build();
///
/// let mut session = FormSession::new(model, rules);
/// session.input(InputSpec::text("firstName").with_label("First name")).unwrap();
/// session.submit_button(None).unwrap();
///
/// // Nothing is shown before the first blur or submit.
/// assert!(session.field("firstName").unwrap().error().is_none());
///
/// let outcome = session.submit().unwrap();
/// assert!(!outcome.is_submitted());
/// assert!(session.field("firstName").unwrap().error().is_some());
/// ```
pub struct FormSession<M: BackingModel> {
	model: M,
	rules: RuleSet,
	fields: Vec<FieldBinding>,
	groups: Vec<OptionGroup>,
	submit_attempted: bool,
	config: SessionConfig,
	on_submit: Option<SubmitCallback<M>>,
}

impl<M: BackingModel> FormSession<M> {
	/// Create a session bound to a model and a rule set.
	pub fn new(model: M, rules: RuleSet) -> Self {
		Self {
			model,
			rules,
			fields: Vec::new(),
			groups: Vec::new(),
			submit_attempted: false,
			config: SessionConfig::default(),
			on_submit: None,
		}
	}

	pub fn with_config(mut self, config: SessionConfig) -> Self {
		self.config = config;
		self
	}

	/// Register the external on-submit action. The session invokes it
	/// synchronously and never awaits any work the callback kicks off;
	/// in-flight/resubmit guarding is the caller's concern.
	pub fn with_on_submit<F>(mut self, callback: F) -> Self
	where
		F: Fn(&M) + Send + Sync + 'static,
	{
		self.on_submit = Some(Box::new(callback));
		self
	}

	/// Declare an input. Composition-time only.
	///
	/// Idempotent under re-registration with the same path and kind
	/// (re-render safety); a conflicting kind at the same path is a
	/// composition error and leaves the existing binding untouched.
	///
	/// The binding's value is seeded from the model; a group's initial
	/// `selected-key` is applied without firing any change, so mounting
	/// a form never triggers a validation storm.
	pub fn input(&mut self, spec: InputSpec) -> FormResult<()> {
		let path = spec.field_path().to_string();
		if let Some(existing) = self.fields.iter().find(|f| f.field_path() == path) {
			if existing.input_kind() == spec.kind() {
				return Ok(());
			}
			warn!(
				field_path = %path,
				existing = ?existing.input_kind(),
				requested = ?spec.kind(),
				"conflicting re-registration of form field"
			);
			return Err(FormError::Composition(format!(
				"field '{path}' already registered with a different input kind"
			)));
		}

		let group_kind = spec.group_kind();
		let (mut binding, options, selected_key) = spec.into_parts();

		let initial = self.model.get(&path)?;
		binding.set_value(initial.unwrap_or(serde_json::Value::Null));

		if let Some(kind) = group_kind {
			let mut group =
				OptionGroup::new(binding.name(), kind, options).with_field_path(&path);
			if let Some(key) = selected_key {
				group = group.with_selected_key(key);
			}
			self.groups.push(group);
		}
		self.fields.push(binding);
		Ok(())
	}

	/// Declare the submit button. Without a label the
	/// [`DEFAULT_SUBMIT_LABEL_KEY`] is used, which the presentation
	/// layer translates when it can.
	pub fn submit_button(&mut self, label: Option<&str>) -> FormResult<()> {
		self.input(
			InputSpec::submit().with_label(label.unwrap_or(DEFAULT_SUBMIT_LABEL_KEY)),
		)
	}

	/// The binding registered at a field path.
	pub fn field(&self, field_path: &str) -> Option<&FieldBinding> {
		self.fields.iter().find(|f| f.field_path() == field_path)
	}

	/// All bindings, in declaration order.
	pub fn fields(&self) -> &[FieldBinding] {
		&self.fields
	}

	/// The option group registered under a group name.
	pub fn group(&self, group_name: &str) -> Option<&OptionGroup> {
		self.groups.iter().find(|g| g.group_name() == group_name)
	}

	pub fn groups(&self) -> &[OptionGroup] {
		&self.groups
	}

	pub fn model(&self) -> &M {
		&self.model
	}

	/// Tear down the session, recovering the model handle.
	pub fn into_model(self) -> M {
		self.model
	}

	pub fn submit_attempted(&self) -> bool {
		self.submit_attempted
	}

	/// Currently displayed errors, path → reason.
	pub fn errors(&self) -> impl Iterator<Item = (&str, &FailureReason)> {
		self.fields
			.iter()
			.filter_map(|f| f.error().map(|e| (f.field_path(), e)))
	}

	pub fn has_errors(&self) -> bool {
		self.fields.iter().any(FieldBinding::has_error)
	}

	/// The user edited a field: update the binding and write through to
	/// the model. Validation is deferred to blur/submit — editing never
	/// validates per keystroke.
	pub fn change(&mut self, field_path: &str, value: serde_json::Value) -> FormResult<()> {
		let idx = self.field_index(field_path)?;
		self.model.set(field_path, value.clone())?;
		let binding = &mut self.fields[idx];
		binding.set_value(value);
		if self.config.error_retention == ErrorRetention::ClearOnChange {
			binding.set_error(None);
		}
		Ok(())
	}

	/// The user left a field: mark it touched and validate its current
	/// value. A passing run clears any prior error.
	pub fn blur(&mut self, field_path: &str) -> FormResult<()> {
		let idx = self.field_index(field_path)?;
		self.fields[idx].touch();
		debug!(field_path, "field blurred, validating");
		self.validate_field(idx);
		Ok(())
	}

	/// Re-run validation for one field unconditionally. Used by submit
	/// and by cross-field revalidation when a sibling edit can affect
	/// this field's validity.
	pub fn revalidate(&mut self, field_path: &str) -> FormResult<()> {
		let idx = self.field_index(field_path)?;
		self.validate_field(idx);
		Ok(())
	}

	/// Select an option in a group. Always forwards the key to the
	/// owning binding's change — selection is not value-compared, so
	/// re-confirming the current key is observable as another change.
	pub fn select(&mut self, group_name: &str, key: &serde_json::Value) -> FormResult<()> {
		let field_path = self.select_in_group(group_name, key)?;
		self.change(&field_path, key.clone())
	}

	/// Route a slot's update handle back to its group.
	pub fn apply(&mut self, update: &SelectionUpdate) -> FormResult<()> {
		self.select(&update.group_name, &update.key)
	}

	/// Route a generic group's nested child selection: selects the
	/// option the handle was issued for, but forwards the nested
	/// payload value to the binding instead of the option key.
	pub fn apply_with_payload(
		&mut self,
		update: &SelectionUpdate,
		value: serde_json::Value,
	) -> FormResult<()> {
		let field_path = self.select_in_group(&update.group_name, &update.key)?;
		self.change(&field_path, value)
	}

	/// Attempt submission.
	///
	/// Marks every non-submit field touched, revalidates all of them
	/// wholesale through the model collaborator, and fires the
	/// on-submit callback with the model handle only when no field
	/// holds an error. This is the one path that surfaces every
	/// field's error at once; a blur only ever surfaces one.
	pub fn submit(&mut self) -> FormResult<SubmitOutcome> {
		self.submit_attempted = true;
		for binding in &mut self.fields {
			if !binding.input_kind().is_submit() {
				binding.touch();
			}
		}

		let failures = self.model.validate(&self.rules)?;
		for binding in &mut self.fields {
			if binding.input_kind().is_submit() {
				continue;
			}
			binding.set_error(failures.get(binding.field_path()).cloned());
		}

		let failed = self.fields.iter().filter(|f| f.has_error()).count();
		if failed > 0 {
			debug!(failures = failed, "submit rejected by validation");
			return Ok(SubmitOutcome::Rejected { failures: failed });
		}

		debug!("submit accepted, invoking on-submit action");
		if let Some(callback) = &self.on_submit {
			callback(&self.model);
		}
		Ok(SubmitOutcome::Submitted)
	}

	fn field_index(&self, field_path: &str) -> FormResult<usize> {
		self.fields
			.iter()
			.position(|f| f.field_path() == field_path)
			.ok_or_else(|| {
				warn!(field_path, "event addressed an unregistered field");
				FormError::Composition(format!(
					"no field registered at path '{field_path}'"
				))
			})
	}

	/// Validate one field against the rule set and record the result,
	/// honoring the display gate: a failure is only stored once the
	/// field is touched or a submit was attempted.
	fn validate_field(&mut self, idx: usize) {
		let binding = &self.fields[idx];
		if binding.input_kind().is_submit() {
			return;
		}
		let result = self.rules.validate(binding.field_path(), binding.value());
		let gate_open = binding.is_touched() || self.submit_attempted;
		let error = match result {
			Err(reason) if gate_open => Some(reason),
			_ => None,
		};
		self.fields[idx].set_error(error);
	}

	fn select_in_group(
		&mut self,
		group_name: &str,
		key: &serde_json::Value,
	) -> FormResult<String> {
		let group = self
			.groups
			.iter_mut()
			.find(|g| g.group_name() == group_name)
			.ok_or_else(|| {
				warn!(group_name, "selection addressed an unregistered group");
				FormError::Composition(format!("no option group named '{group_name}'"))
			})?;
		group.select(key)?;
		Ok(group.field_path().to_string())
	}
}
