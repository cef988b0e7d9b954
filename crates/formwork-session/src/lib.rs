//! Form session orchestration for the formwork engine.
//!
//! This crate ties the pieces together: a [`FormSession`] owns a
//! backing model handle and the field bindings and option groups
//! declared against it, routes change/blur/select/submit events, and
//! enforces when validation failures become visible. Presentation is
//! split out into [`ErrorPresenter`], which renders recorded failures
//! to text through an optional translation collaborator.
//!
//! # Examples
//!
//! ```
//! use formwork_rules::{RuleSet, ValidationRule};
//! use formwork_session::{ErrorPresenter, FormSession, InputSpec, MemoryModel};
//! use serde_json::json;
//!
//! let rules = RuleSet::builder()
//! 	.rule("firstName", ValidationRule::required())
//! 	.build();
//! let mut session = FormSession::new(MemoryModel::new(), rules);
//! session.input(InputSpec::text("firstName")).unwrap();
//!
//! session.blur("firstName").unwrap();
//!
//! let presenter = ErrorPresenter::new();
//! let error = presenter
//! 	.present(session.field("firstName").unwrap())
//! 	.unwrap();
//! assert_eq!(error.message_text, "First name can't be blank");
//! ```

pub mod binding;
pub mod compose;
pub mod error;
pub mod group;
pub mod model;
pub mod present;
pub mod session;

pub use binding::{BindingState, FieldBinding, InputKind};
pub use compose::InputSpec;
pub use error::{FormError, FormResult};
pub use group::{GroupKind, GroupOption, OptionGroup, OptionSlot, SelectionUpdate};
pub use model::{BackingModel, MemoryModel, ModelError};
pub use present::{ErrorPresenter, PresentedError};
pub use session::{
	DEFAULT_SUBMIT_LABEL_KEY, ErrorRetention, FormSession, SessionConfig, SubmitOutcome,
};
