//! Formwork: a declarative form construction and validation engine.
//!
//! The engine is split into three crates, re-exported here as a single
//! facade:
//!
//! - [`rules`]: validation rule sets and structured failure reasons.
//! - [`i18n`]: the translation collaborator contract and an in-memory
//!   message catalog.
//! - [`session`]: the form session orchestrator, field bindings,
//!   option groups, and the error presenter.
//!
//! # Examples
//!
//! ```
//! use formwork::prelude::*;
//! use serde_json::json;
//!
//! let rules = RuleSet::builder()
//! 	.rule("firstName", ValidationRule::required())
//! 	.rule("firstName", ValidationRule::length(3, 40))
//! 	.build();
//!
//! let model = MemoryModel::from_value(json!({"firstName": ""}))?;
//! let mut session = FormSession::new(model, rules);
//! session.input(InputSpec::text("firstName").with_label("First name"))?;
//! session.submit_button(None)?;
//!
//! session.change("firstName", json!("x"))?;
//! session.blur("firstName")?;
//!
//! let presenter = ErrorPresenter::new();
//! let error = presenter
//! 	.present(session.field("firstName").unwrap())
//! 	.unwrap();
//! assert_eq!(
//! 	error.message_text,
//! 	"First name must be between 3 and 40 characters"
//! );
//! # Ok::<(), formwork::session::FormError>(())
//! ```

pub use formwork_i18n as i18n;
pub use formwork_rules as rules;
pub use formwork_session as session;

/// One-stop imports for composing and driving forms.
pub mod prelude {
	pub use formwork_i18n::{MessageCatalog, Translate};
	pub use formwork_rules::{FailureReason, RuleSet, RuleSetBuilder, ValidationRule};
	pub use formwork_session::{
		BackingModel, BindingState, ErrorPresenter, ErrorRetention, FieldBinding,
		FormError, FormResult, FormSession, GroupKind, GroupOption, InputKind, InputSpec,
		MemoryModel, OptionGroup, OptionSlot, PresentedError, SelectionUpdate,
		SessionConfig, SubmitOutcome,
	};
}
