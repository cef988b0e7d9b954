//! Single-selection option groups (radio and generic)

use crate::error::{FormError, FormResult};

/// How a group composes its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
	/// Flat radio-style options.
	Radio,
	/// Options carrying a payload with one nested level of
	/// caller-composed content (e.g. a sub-select per option).
	Generic,
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOption {
	key: serde_json::Value,
	label: String,
	payload: serde_json::Value,
}

impl GroupOption {
	/// # Examples
	///
	/// ```
	/// use formwork_session::GroupOption;
	/// use serde_json::json;
	///
	/// let option = GroupOption::new(1, "Option 1")
	/// 	.with_payload(json!([{"value": 10, "label": "Suboption 1-1"}]));
	///
	/// assert_eq!(option.key(), &json!(1));
	/// assert_eq!(option.label(), "Option 1");
	/// ```
	pub fn new(key: impl Into<serde_json::Value>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			payload: serde_json::Value::Null,
		}
	}

	/// Attach nested content for generic groups (e.g. a sub-option
	/// list the composed child widget selects from).
	pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
		self.payload = payload;
		self
	}

	pub fn key(&self) -> &serde_json::Value {
		&self.key
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn payload(&self) -> &serde_json::Value {
		&self.payload
	}
}

/// A routing handle handed to caller-supplied option renderers.
///
/// The core guarantees nothing about what is rendered per option —
/// only that feeding the handle back into
/// [`FormSession::apply`](crate::FormSession::apply) (or
/// `apply_with_payload`) selects the option it was issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionUpdate {
	pub(crate) group_name: String,
	pub(crate) key: serde_json::Value,
}

impl SelectionUpdate {
	pub fn group_name(&self) -> &str {
		&self.group_name
	}

	pub fn key(&self) -> &serde_json::Value {
		&self.key
	}
}

/// Per-option view handed to a rendering callback: the option plus the
/// update handle that routes a selection back to the session.
#[derive(Debug)]
pub struct OptionSlot<'a> {
	pub option: &'a GroupOption,
	pub update: SelectionUpdate,
}

/// Selection state over an ordered option list.
///
/// At most one key is selected; `selected_key` is only ever written
/// through [`select`](Self::select) (driven by the owning session).
#[derive(Debug, Clone)]
pub struct OptionGroup {
	group_name: String,
	field_path: String,
	kind: GroupKind,
	options: Vec<GroupOption>,
	selected_key: Option<serde_json::Value>,
}

impl OptionGroup {
	pub fn new(
		group_name: impl Into<String>,
		kind: GroupKind,
		options: Vec<GroupOption>,
	) -> Self {
		let group_name = group_name.into();
		Self {
			field_path: group_name.clone(),
			group_name,
			kind,
			options,
			selected_key: None,
		}
	}

	pub(crate) fn with_field_path(mut self, field_path: impl Into<String>) -> Self {
		self.field_path = field_path.into();
		self
	}

	/// Seed the initial selection without firing any change
	/// notification. A key matching no option is ignored: absence of
	/// selection is valid unless a Required rule says otherwise.
	///
	/// # Examples
	///
	/// ```
	/// use formwork_session::{GroupKind, GroupOption, OptionGroup};
	/// use serde_json::json;
	///
	/// let options = vec![
	/// 	GroupOption::new(1, "Option 1"),
	/// 	GroupOption::new(2, "Option 2"),
	/// 	GroupOption::new(3, "Option 3"),
	/// ];
	/// let group = OptionGroup::new("testOptions", GroupKind::Radio, options)
	/// 	.with_selected_key(json!(2));
	///
	/// assert!(group.is_selected(&json!(2)));
	/// assert!(!group.is_selected(&json!(1)));
	///
	/// // Unknown keys leave the group unselected.
	/// let group = group.with_selected_key(json!(99));
	/// assert_eq!(group.selected_key(), Some(&json!(2)));
	/// ```
	pub fn with_selected_key(mut self, key: serde_json::Value) -> Self {
		if self.option(&key).is_some() {
			self.selected_key = Some(key);
		}
		self
	}

	pub fn group_name(&self) -> &str {
		&self.group_name
	}

	pub fn field_path(&self) -> &str {
		&self.field_path
	}

	pub fn kind(&self) -> GroupKind {
		self.kind
	}

	pub fn options(&self) -> &[GroupOption] {
		&self.options
	}

	/// Look up an option by key.
	pub fn option(&self, key: &serde_json::Value) -> Option<&GroupOption> {
		self.options.iter().find(|o| o.key() == key)
	}

	pub fn selected_key(&self) -> Option<&serde_json::Value> {
		self.selected_key.as_ref()
	}

	/// Render-time decoration query: is this option's key the selected
	/// one?
	pub fn is_selected(&self, key: &serde_json::Value) -> bool {
		self.selected_key.as_ref() == Some(key)
	}

	/// The currently selected option, if any.
	pub fn selected_option(&self) -> Option<&GroupOption> {
		self.selected_key.as_ref().and_then(|k| self.option(k))
	}

	/// Per-option `{option, update}` slots for a caller-supplied
	/// rendering function. Order matches the declared option order.
	pub fn slots(&self) -> Vec<OptionSlot<'_>> {
		self.options
			.iter()
			.map(|option| OptionSlot {
				option,
				update: SelectionUpdate {
					group_name: self.group_name.clone(),
					key: option.key().clone(),
				},
			})
			.collect()
	}

	/// Set the selection. Selecting an unknown key is API misuse and
	/// reported as a composition error; the prior selection stands.
	///
	/// Selection is not value-compared: re-selecting the current key
	/// succeeds and the owning session fires change again.
	pub(crate) fn select(&mut self, key: &serde_json::Value) -> FormResult<&GroupOption> {
		let Some(idx) = self.options.iter().position(|o| o.key() == key) else {
			return Err(FormError::Composition(format!(
				"option group '{}' has no option with key {key}",
				self.group_name
			)));
		};
		self.selected_key = Some(key.clone());
		Ok(&self.options[idx])
	}
}
