pub use crate::catalog::{default_catalog, Catalog, FieldSpec};
pub use crate::errors::{RegraError, Result};
pub use crate::form::{FieldValue, FormSnapshot, FormState};
pub use crate::validate::{validate_field, Status, ValidationResult};

pub mod catalog;
pub mod cli;
pub mod errors;
pub mod form;
pub mod matcher;
pub mod repl;
pub mod validate;
