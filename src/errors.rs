//! Unified error type for all Regra failure modes.
//!
//! The taxonomy is deliberately small. A failed membership test is NOT an
//! error here: it is a normal [`ValidationResult`](crate::validate::ValidationResult)
//! value. Errors are reserved for programmer-error contract violations
//! (`MalformedPattern`, `UnknownField`, `PatternEvaluation`) and for the one
//! expected control-flow outcome that callers must handle (`SubmissionRejected`).

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegraError>;

#[derive(Error, Diagnostic, Debug)]
pub enum RegraError {
    /// A catalog entry's pattern failed to compile. Fatal at initialization:
    /// the catalog is a fixed literal table, so this is always a bug in the
    /// table, never a user error.
    #[error("malformed pattern for field '{id}'")]
    #[diagnostic(code(regra::catalog::malformed_pattern))]
    MalformedPattern {
        id: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// A caller referenced a field id absent from the catalog. Propagated to
    /// the caller unchanged, never silently ignored.
    #[error("unknown field '{id}'")]
    #[diagnostic(
        code(regra::catalog::unknown_field),
        help("run `regra fields` to list the registered field ids")
    )]
    UnknownField { id: String },

    /// The regex engine refused a match attempt at runtime (backtracking
    /// limit). Classed with programmer errors: it indicates a catalog pattern
    /// whose evaluation exceeds engine limits, not a bad input.
    #[error("pattern evaluation failed for field '{id}'")]
    #[diagnostic(code(regra::matcher::evaluation))]
    PatternEvaluation {
        id: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// `submit()` was called while the form is not submittable. Form state is
    /// left unchanged; the per-field messages already stored in the form
    /// explain what to fix.
    #[error("submission rejected: field(s) not valid: {}", .invalid_fields.join(", "))]
    #[diagnostic(
        code(regra::form::submission_rejected),
        help("fix the listed fields; their violation messages are stored in the form state")
    )]
    SubmissionRejected { invalid_fields: Vec<String> },
}

impl RegraError {
    pub fn unknown_field(id: impl Into<String>) -> Self {
        RegraError::UnknownField { id: id.into() }
    }

    pub fn malformed_pattern(id: impl Into<String>, source: fancy_regex::Error) -> Self {
        RegraError::MalformedPattern {
            id: id.into(),
            source: Box::new(source),
        }
    }

    pub fn pattern_evaluation(id: impl Into<String>, source: fancy_regex::Error) -> Self {
        RegraError::PatternEvaluation {
            id: id.into(),
            source: Box::new(source),
        }
    }
}
