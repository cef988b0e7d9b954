//! Error presentation: turns a binding's recorded failure into
//! user-facing text.
//!
//! The presenter is the only place that knows message wording.
//! Validation stores structured [`FailureReason`] values; rendering
//! resolves them here, through the optional translation collaborator,
//! at display time. Switching locale re-renders without revalidating.

use crate::binding::FieldBinding;
use formwork_i18n::{Translate, is_translation_key};
use formwork_rules::FailureReason;

/// A displayable error for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedError {
	pub label_text: String,
	pub message_text: String,
}

/// Resolves binding labels and failure reasons to display text.
///
/// Without a translation collaborator every label renders literally
/// and every message uses the built-in English template. With one,
/// dotted lowercase labels and the per-kind template keys are looked
/// up first, falling back to the literal/built-in form when the
/// catalog does not know them.
///
/// # Examples
///
/// ```
/// use formwork_i18n::MessageCatalog;
/// use formwork_session::{ErrorPresenter, FieldBinding, InputKind};
///
/// let mut catalog = MessageCatalog::new("en");
/// catalog.add("label.first-name", "First name");
/// let presenter = ErrorPresenter::new().with_translator(&catalog);
///
/// let binding = FieldBinding::new("firstName", InputKind::Text)
/// 	.with_label("label.first-name");
/// assert_eq!(presenter.label_for(&binding), "First name");
///
/// // Unknown keys render literally instead of disappearing.
/// let binding = FieldBinding::new("x", InputKind::Text).with_label("label.unknown");
/// assert_eq!(presenter.label_for(&binding), "label.unknown");
/// ```
#[derive(Default)]
pub struct ErrorPresenter<'a> {
	translator: Option<&'a dyn Translate>,
}

impl<'a> ErrorPresenter<'a> {
	pub fn new() -> Self {
		Self { translator: None }
	}

	pub fn with_translator(mut self, translator: &'a dyn Translate) -> Self {
		self.translator = Some(translator);
		self
	}

	/// The error to display for a binding, or nothing.
	///
	/// Returns `Some` exactly when the binding holds a recorded error;
	/// the session only records one once the field is touched or a
	/// submit was attempted, so callers can render the result
	/// unconditionally.
	pub fn present(&self, binding: &FieldBinding) -> Option<PresentedError> {
		let reason = binding.error()?;
		let label_text = self.label_for(binding);
		let message_text = self.message_for(&label_text, reason);
		Some(PresentedError { label_text, message_text })
	}

	/// The display label for a binding: its declared label resolved
	/// through the collaborator, or the humanized field name when no
	/// label was declared.
	pub fn label_for(&self, binding: &FieldBinding) -> String {
		match binding.label() {
			Some(label) => self.display_text(label),
			None => humanize(binding.name()),
		}
	}

	/// Resolve any label-ish string: translated when it looks like a
	/// translation key and the collaborator knows it, literal
	/// otherwise. Also used for submit button labels.
	pub fn display_text(&self, label: &str) -> String {
		if is_translation_key(label) {
			if let Some(translated) = self.translate(label) {
				return translated;
			}
		}
		label.to_string()
	}

	fn message_for(&self, label: &str, reason: &FailureReason) -> String {
		let rendered = match reason {
			FailureReason::Required => self
				.template("error.required", "{label} can't be blank"),
			FailureReason::MinLength { max: Some(_), .. } => self.template(
				"error.between",
				"{label} must be between {min} and {max} characters",
			),
			FailureReason::MinLength { max: None, .. } => self.template(
				"error.too-short",
				"{label} must be at least {min} characters",
			),
			FailureReason::MaxLength { .. } => self.template(
				"error.too-long",
				"{label} must be no more than {max} characters",
			),
			FailureReason::Pattern => self.template("error.invalid", "{label} is invalid"),
			FailureReason::Custom { message } => message.clone(),
		};
		substitute(&rendered, label, reason)
	}

	fn template(&self, key: &str, fallback: &str) -> String {
		self.translate(key).unwrap_or_else(|| fallback.to_string())
	}

	fn translate(&self, key: &str) -> Option<String> {
		self.translator.and_then(|t| t.translate(key))
	}
}

fn substitute(template: &str, label: &str, reason: &FailureReason) -> String {
	let mut text = template.replace("{label}", label);
	match reason {
		FailureReason::MinLength { min, max, .. } => {
			text = text.replace("{min}", &min.to_string());
			if let Some(max) = max {
				text = text.replace("{max}", &max.to_string());
			}
		}
		FailureReason::MaxLength { max, .. } => {
			text = text.replace("{max}", &max.to_string());
		}
		_ => {}
	}
	text
}

/// Derive a display label from a field name: `firstName` → `First
/// name`, `first_name` → `First name`.
fn humanize(name: &str) -> String {
	let mut words: Vec<String> = Vec::new();
	let mut current = String::new();
	for ch in name.chars() {
		if ch == '_' || ch == '-' || ch == '.' || ch == ' ' {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
		} else if ch.is_uppercase() && !current.is_empty() {
			words.push(std::mem::take(&mut current));
			current.extend(ch.to_lowercase());
		} else {
			current.extend(ch.to_lowercase());
		}
	}
	if !current.is_empty() {
		words.push(current);
	}

	let mut out = words.join(" ");
	if let Some(first) = out.get(..1) {
		let upper = first.to_uppercase();
		out.replace_range(..1, &upper);
	}
	out
}
