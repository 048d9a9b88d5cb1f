//! Per-field validation: the pure core of the engine.
//!
//! [`validate_field`] is a pure function of `(raw, pattern, optional)` — no
//! hidden state, no history dependence. "Touched" tracking lives in the form
//! coordinator and is display-only; it never influences correctness here.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::errors::{RegraError, Result};

/// Validation status of a single field.
///
/// # Examples
///
/// ```rust
/// use regra::validate::Status;
/// assert!(Status::Valid.is_valid());
/// assert!(!Status::Untouched.is_invalid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Status {
    /// No edit has been applied yet. Only the coordinator produces this; the
    /// validator itself never returns it.
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl Status {
    pub fn is_valid(&self) -> bool {
        matches!(self, Status::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Status::Invalid)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Untouched => "untouched",
            Status::Valid => "valid",
            Status::Invalid => "invalid",
        };
        write!(f, "{}", s)
    }
}

/// The outcome of validating one field value.
///
/// `message` is empty unless `status` is `Invalid`, in which case it carries
/// the field's fixed violation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    status: Status,
    message: String,
}

impl ValidationResult {
    pub fn untouched() -> Self {
        Self {
            status: Status::Untouched,
            message: String::new(),
        }
    }

    pub fn valid() -> Self {
        Self {
            status: Status::Valid,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            status: Status::Invalid,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::untouched()
    }
}

/// Validates a candidate value for one field against the catalog.
///
/// Optionality is an explicit bypass: an empty value on an optional field is
/// Valid without consulting the pattern at all (it does not mean "the pattern
/// also matches the empty string"). An empty value on a required field is
/// Invalid — never Untouched; that distinction belongs to the coordinator.
///
/// The only failure modes are [`RegraError::UnknownField`] for an id absent
/// from the catalog and [`RegraError::PatternEvaluation`] if the regex engine
/// hits a runtime limit.
pub fn validate_field(catalog: &Catalog, id: &str, raw: &str) -> Result<ValidationResult> {
    let spec = catalog.lookup(id)?;

    if raw.is_empty() {
        return Ok(if spec.optional() {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(spec.violation_message())
        });
    }

    let member = spec
        .pattern()
        .matches(raw)
        .map_err(|e| RegraError::pattern_evaluation(id, e))?;
    Ok(if member {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(spec.violation_message())
    })
}
