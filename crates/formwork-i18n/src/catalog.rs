//! In-memory message catalog

use crate::Translate;
use std::collections::HashMap;

/// A message catalog holding translations for one locale.
///
/// The simplest [`Translate`] implementation: a flat key → string map.
/// Lookup returns `None` for unknown keys, which callers treat as "use
/// the key literally" — distinct from a key that translates to an
/// empty string.
///
/// # Examples
///
/// ```
/// use formwork_i18n::{MessageCatalog, Translate};
///
/// let mut catalog = MessageCatalog::new("de");
/// catalog.add("label.save", "Speichern");
///
/// assert_eq!(catalog.translate("label.save"), Some("Speichern".to_string()));
/// assert_eq!(catalog.translate("label.cancel"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create an empty catalog for the given locale.
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			messages: HashMap::new(),
		}
	}

	/// The locale this catalog holds translations for.
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a translation.
	pub fn add(&mut self, key: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(key.into(), translation.into());
	}

	/// Number of translations in the catalog.
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// Whether the catalog holds no translations.
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	/// Load a catalog from a flat JSON object of key → string.
	///
	/// # Examples
	///
	/// ```
	/// use formwork_i18n::{MessageCatalog, Translate};
	///
	/// let catalog = MessageCatalog::from_json(
	/// 	"fr",
	/// 	r#"{"label.save": "Enregistrer", "error.required": "{label} est obligatoire"}"#,
	/// )
	/// .unwrap();
	///
	/// assert_eq!(catalog.translate("label.save"), Some("Enregistrer".to_string()));
	/// ```
	pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self, serde_json::Error> {
		let messages: HashMap<String, String> = serde_json::from_str(json)?;
		Ok(Self {
			locale: locale.into(),
			messages,
		})
	}
}

impl Translate for MessageCatalog {
	fn translate(&self, key: &str) -> Option<String> {
		self.messages.get(key).cloned()
	}
}
