//! Translation collaborator contract for formwork
//!
//! The form engine never resolves translations itself: it asks an
//! injected [`Translate`] collaborator and falls back to the literal
//! key when the collaborator has nothing. This crate defines that
//! contract, a [`MessageCatalog`] in-memory implementation, and the
//! heuristic for deciding whether a label is a translation key.

pub mod catalog;

pub use catalog::MessageCatalog;

use std::sync::LazyLock;

/// Optional-result translation lookup.
///
/// `None` means "no translation available, use the key literally" —
/// deliberately distinct from a key that translates to an empty
/// string.
pub trait Translate {
	fn translate(&self, key: &str) -> Option<String>;
}

impl<T: Translate + ?Sized> Translate for &T {
	fn translate(&self, key: &str) -> Option<String> {
		(**self).translate(key)
	}
}

// Dotted lowercase segments, e.g. "label.save" or "error.min_length".
// Display labels like "First name" never match.
static KEY_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
	regex::Regex::new(r"^[a-z0-9_-]+(\.[a-z0-9_-]+)+$").expect("KEY_REGEX: invalid regex pattern")
});

/// Whether a label string looks like a translation key rather than
/// display text.
///
/// # Examples
///
/// ```
/// use formwork_i18n::is_translation_key;
///
/// assert!(is_translation_key("label.save"));
/// assert!(is_translation_key("error.min_length"));
/// assert!(!is_translation_key("First name"));
/// assert!(!is_translation_key("save"));
/// ```
pub fn is_translation_key(label: &str) -> bool {
	KEY_REGEX.is_match(label)
}
