//! Field bindings: one form field bound to a model path

use formwork_rules::FailureReason;

/// What kind of input a binding renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
	Text,
	Textarea,
	RadioGroup,
	GenericGroup,
	Submit,
}

impl InputKind {
	/// Submit bindings carry a button, not a model-backed value, and
	/// are skipped by validation.
	pub fn is_submit(&self) -> bool {
		matches!(self, Self::Submit)
	}

	/// Whether this kind owns an option group.
	pub fn is_group(&self) -> bool {
		matches!(self, Self::RadioGroup | Self::GenericGroup)
	}
}

/// Lifecycle state of a binding.
///
/// `Pristine → Touched → (Valid | Invalid)`, with the submit-forced
/// shortcut `Pristine → Invalid` when a submit attempt fails
/// validation on a never-touched field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
	Pristine,
	Valid,
	Invalid,
}

/// One form field connected to a path in the backing model.
///
/// Owned exclusively by the session that created it; all mutation goes
/// through session events (change, blur, submit, select).
#[derive(Debug, Clone)]
pub struct FieldBinding {
	name: String,
	field_path: String,
	label: Option<String>,
	hint: Option<String>,
	placeholder: Option<String>,
	input_kind: InputKind,
	current_value: serde_json::Value,
	error: Option<FailureReason>,
	touched: bool,
}

impl FieldBinding {
	/// Create a binding; the field path defaults to the name.
	///
	/// # Examples
	///
	/// ```
	/// use formwork_session::{FieldBinding, InputKind};
	///
	/// let binding = FieldBinding::new("firstName", InputKind::Text)
	/// 	.with_label("First name");
	///
	/// assert_eq!(binding.field_path(), "firstName");
	/// assert_eq!(binding.label(), Some("First name"));
	/// assert!(!binding.is_touched());
	/// assert!(binding.error().is_none());
	/// ```
	pub fn new(name: impl Into<String>, input_kind: InputKind) -> Self {
		let name = name.into();
		Self {
			field_path: name.clone(),
			name,
			label: None,
			hint: None,
			placeholder: None,
			input_kind,
			current_value: serde_json::Value::Null,
			error: None,
			touched: false,
		}
	}

	/// Bind to a model path different from the field name.
	pub fn with_field_path(mut self, field_path: impl Into<String>) -> Self {
		self.field_path = field_path.into();
		self
	}

	/// Display label, or a translation key.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Hint text rendered separately from any error message.
	pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
		self.hint = Some(hint.into());
		self
	}

	/// Placeholder text for text-like inputs.
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn field_path(&self) -> &str {
		&self.field_path
	}

	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	pub fn hint(&self) -> Option<&str> {
		self.hint.as_deref()
	}

	pub fn placeholder(&self) -> Option<&str> {
		self.placeholder.as_deref()
	}

	pub fn input_kind(&self) -> InputKind {
		self.input_kind
	}

	/// The value as of the last change event (mirrors the model).
	pub fn value(&self) -> &serde_json::Value {
		&self.current_value
	}

	/// Displayable validation failure, if any.
	///
	/// Non-empty if and only if the most recent validation run failed
	/// and the field was touched or a submit was attempted — the
	/// session enforces that gate when recording results, so renderers
	/// can trust this directly.
	pub fn error(&self) -> Option<&FailureReason> {
		self.error.as_ref()
	}

	pub fn has_error(&self) -> bool {
		self.error.is_some()
	}

	/// Whether the field has been blurred (or swept up by a submit).
	pub fn is_touched(&self) -> bool {
		self.touched
	}

	pub fn state(&self) -> BindingState {
		if self.error.is_some() {
			BindingState::Invalid
		} else if self.touched {
			BindingState::Valid
		} else {
			BindingState::Pristine
		}
	}

	pub(crate) fn set_value(&mut self, value: serde_json::Value) {
		self.current_value = value;
	}

	pub(crate) fn touch(&mut self) {
		self.touched = true;
	}

	pub(crate) fn set_error(&mut self, error: Option<FailureReason>) {
		self.error = error;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_binding_starts_pristine() {
		let binding = FieldBinding::new("email", InputKind::Text);

		assert_eq!(binding.state(), BindingState::Pristine);
		assert_eq!(binding.value(), &serde_json::Value::Null);
	}

	#[rstest]
	fn test_state_transitions() {
		let mut binding = FieldBinding::new("email", InputKind::Text);

		binding.touch();
		assert_eq!(binding.state(), BindingState::Valid);

		binding.set_error(Some(FailureReason::Required));
		assert_eq!(binding.state(), BindingState::Invalid);

		binding.set_error(None);
		assert_eq!(binding.state(), BindingState::Valid);
	}

	#[rstest]
	fn test_submit_forced_invalid_without_touch() {
		// A failed submit can push a pristine binding straight to
		// Invalid.
		let mut binding = FieldBinding::new("email", InputKind::Text);
		binding.set_error(Some(FailureReason::Required));

		assert_eq!(binding.state(), BindingState::Invalid);
		assert!(!binding.is_touched());
	}

	#[rstest]
	fn test_builder_fields() {
		let binding = FieldBinding::new("bio", InputKind::Textarea)
			.with_field_path("profile.bio")
			.with_label("Biography")
			.with_hint("Not your middle name!")
			.with_placeholder("Tell us about yourself");

		assert_eq!(binding.name(), "bio");
		assert_eq!(binding.field_path(), "profile.bio");
		assert_eq!(binding.label(), Some("Biography"));
		assert_eq!(binding.hint(), Some("Not your middle name!"));
		assert_eq!(binding.placeholder(), Some("Tell us about yourself"));
	}

	#[rstest]
	#[case(InputKind::Text, false, false)]
	#[case(InputKind::Textarea, false, false)]
	#[case(InputKind::RadioGroup, false, true)]
	#[case(InputKind::GenericGroup, false, true)]
	#[case(InputKind::Submit, true, false)]
	fn test_input_kind_queries(
		#[case] kind: InputKind,
		#[case] is_submit: bool,
		#[case] is_group: bool,
	) {
		assert_eq!(kind.is_submit(), is_submit);
		assert_eq!(kind.is_group(), is_group);
	}

	#[rstest]
	fn test_value_mirrors_last_change() {
		let mut binding = FieldBinding::new("name", InputKind::Text);
		binding.set_value(json!("Ada"));
		assert_eq!(binding.value(), &json!("Ada"));
	}
}
