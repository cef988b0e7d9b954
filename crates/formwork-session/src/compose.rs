//! Composition surface: input declarations
//!
//! A caller declares a form once — model, rule set, on-submit action,
//! then a sequence of `input(...)` / `submit_button(...)` declarations
//! — and arranges the resulting bindings into whatever layout the
//! rendering layer produces. `InputSpec` is the markup-independent
//! declaration.

use crate::binding::{FieldBinding, InputKind};
use crate::group::{GroupKind, GroupOption};

/// Declaration of one form input.
///
/// # Examples
///
/// ```
/// use formwork_session::InputSpec;
///
/// let spec = InputSpec::text("firstName")
/// 	.with_label("First name")
/// 	.with_hint("Not your middle name!");
///
/// assert_eq!(spec.name(), "firstName");
/// ```
#[derive(Debug, Clone)]
pub struct InputSpec {
	name: String,
	field_path: Option<String>,
	kind: InputKind,
	label: Option<String>,
	hint: Option<String>,
	placeholder: Option<String>,
	options: Vec<GroupOption>,
	selected_key: Option<serde_json::Value>,
}

impl InputSpec {
	fn new(name: impl Into<String>, kind: InputKind) -> Self {
		Self {
			name: name.into(),
			field_path: None,
			kind,
			label: None,
			hint: None,
			placeholder: None,
			options: Vec::new(),
			selected_key: None,
		}
	}

	/// A single-line text input.
	pub fn text(name: impl Into<String>) -> Self {
		Self::new(name, InputKind::Text)
	}

	/// A multi-line text area.
	pub fn textarea(name: impl Into<String>) -> Self {
		Self::new(name, InputKind::Textarea)
	}

	/// The form's submit button. Registered under the fixed name
	/// `submit` so duplicate declarations are caught like any other
	/// field.
	pub fn submit() -> Self {
		Self::new("submit", InputKind::Submit)
	}

	/// A flat radio-style option group.
	pub fn radio_group(name: impl Into<String>, options: Vec<GroupOption>) -> Self {
		let mut spec = Self::new(name, InputKind::RadioGroup);
		spec.options = options;
		spec
	}

	/// A generic option group whose options carry nested,
	/// caller-composed content.
	pub fn generic_group(name: impl Into<String>, options: Vec<GroupOption>) -> Self {
		let mut spec = Self::new(name, InputKind::GenericGroup);
		spec.options = options;
		spec
	}

	/// Bind to a model path different from the input name.
	pub fn with_field_path(mut self, field_path: impl Into<String>) -> Self {
		self.field_path = Some(field_path.into());
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

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Initial selection for a group input. Applied at registration
	/// without firing any change notification; a key matching no
	/// option is ignored.
	pub fn with_selected_key(mut self, key: impl Into<serde_json::Value>) -> Self {
		self.selected_key = Some(key.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> InputKind {
		self.kind
	}

	pub(crate) fn field_path(&self) -> &str {
		self.field_path.as_deref().unwrap_or(&self.name)
	}

	pub(crate) fn group_kind(&self) -> Option<GroupKind> {
		match self.kind {
			InputKind::RadioGroup => Some(GroupKind::Radio),
			InputKind::GenericGroup => Some(GroupKind::Generic),
			_ => None,
		}
	}

	pub(crate) fn into_parts(
		self,
	) -> (
		FieldBinding,
		Vec<GroupOption>,
		Option<serde_json::Value>,
	) {
		let mut binding = FieldBinding::new(self.name, self.kind);
		if let Some(path) = self.field_path {
			binding = binding.with_field_path(path);
		}
		if let Some(label) = self.label {
			binding = binding.with_label(label);
		}
		if let Some(hint) = self.hint {
			binding = binding.with_hint(hint);
		}
		if let Some(placeholder) = self.placeholder {
			binding = binding.with_placeholder(placeholder);
		}
		(binding, self.options, self.selected_key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_field_path_defaults_to_name() {
		let spec = InputSpec::text("firstName");
		assert_eq!(spec.field_path(), "firstName");

		let spec = InputSpec::text("firstName").with_field_path("person.first");
		assert_eq!(spec.field_path(), "person.first");
	}

	#[rstest]
	fn test_into_parts_carries_declaration() {
		let spec = InputSpec::radio_group(
			"color",
			vec![GroupOption::new("r", "Red"), GroupOption::new("b", "Blue")],
		)
		.with_label("Color")
		.with_selected_key("b");

		let (binding, options, selected) = spec.into_parts();

		assert_eq!(binding.name(), "color");
		assert_eq!(binding.label(), Some("Color"));
		assert_eq!(options.len(), 2);
		assert_eq!(selected, Some(json!("b")));
	}

	#[rstest]
	fn test_group_kind_mapping() {
		assert_eq!(InputSpec::text("a").group_kind(), None);
		assert_eq!(
			InputSpec::radio_group("a", vec![]).group_kind(),
			Some(GroupKind::Radio)
		);
		assert_eq!(
			InputSpec::generic_group("a", vec![]).group_kind(),
			Some(GroupKind::Generic)
		);
	}
}
