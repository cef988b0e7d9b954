//! Session error taxonomy

use crate::model::ModelError;

/// Faults a form session can surface to its caller.
///
/// Validation failures are deliberately absent: they are expected,
/// user-correctable values ([`formwork_rules::FailureReason`]) that
/// flow through per-field error state, never through `Err`.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	/// Programmer error in form composition: conflicting
	/// re-registration, selecting an unknown option key, addressing an
	/// unregistered field. Reported and logged, but the form keeps
	/// working.
	#[error("composition error: {0}")]
	Composition(String),

	/// The backing-model collaborator failed. Propagated unchanged;
	/// the session has no authority over model semantics and does not
	/// attempt recovery.
	#[error(transparent)]
	Collaborator(#[from] ModelError),
}

pub type FormResult<T> = Result<T, FormError>;
