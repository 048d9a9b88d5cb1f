//! The form validation coordinator.
//!
//! [`FormState`] owns one `(FieldValue, ValidationResult)` pair per catalog
//! entry and keeps them in sync with user edits: every `set_value` stores the
//! raw text, re-validates that field from scratch (no memoization — inputs
//! are short and evaluation is cheap), and recomputes the whole-form
//! submittability flag before returning. One writer, fully-settled reads
//! between edits; no locking needed.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::catalog::Catalog;
use crate::errors::{RegraError, Result};
use crate::validate::{validate_field, Status, ValidationResult};

/// The live value of one field, owned by the coordinator.
#[derive(Debug, Clone)]
pub struct FieldValue {
    id: String,
    raw: String,
    touched: bool,
}

impl FieldValue {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            raw: String::new(),
            touched: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True once the user has produced at least one edit. Display-only:
    /// validation correctness never reads this.
    pub fn touched(&self) -> bool {
        self.touched
    }
}

/// An immutable snapshot of all raw values at submission time, keyed by
/// field id in catalog order. Serializes as a JSON object for the
/// submission notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    values: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // serde_json maps lose declaration order; serialize the pairs
        // directly so the notifier sees fields in catalog order.
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (id, raw) in &self.values {
            map.serialize_entry(id, raw)?;
        }
        map.end()
    }
}

/// Live validation state for one form instance over a borrowed catalog.
///
/// Per-field state machine: `Untouched --(first edit)--> {Valid, Invalid}`,
/// then `Valid <-> Invalid` on every subsequent edit. A field returns to
/// `Untouched` only by rebuilding the `FormState` itself.
///
/// # Examples
///
/// ```rust
/// use regra::catalog::default_catalog;
/// use regra::form::FormState;
/// use regra::validate::Status;
///
/// let mut form = FormState::new(default_catalog());
/// form.set_value("cpf", "123.456.789-09").unwrap();
/// assert_eq!(form.result("cpf").unwrap().status(), Status::Valid);
/// assert!(form.is_submittable());
/// ```
#[derive(Debug, Clone)]
pub struct FormState<'c> {
    catalog: &'c Catalog,
    fields: Vec<(FieldValue, ValidationResult)>,
    index: HashMap<String, usize>,
    submittable: bool,
}

impl<'c> FormState<'c> {
    /// Creates a fresh form: one entry per catalog field, `raw = ""`,
    /// `status = Untouched`.
    pub fn new(catalog: &'c Catalog) -> Self {
        let mut fields = Vec::with_capacity(catalog.len());
        let mut index = HashMap::with_capacity(catalog.len());
        for spec in catalog.iter() {
            index.insert(spec.id().to_string(), fields.len());
            fields.push((FieldValue::new(spec.id()), ValidationResult::untouched()));
        }
        let mut form = Self {
            catalog,
            fields,
            index,
            submittable: false,
        };
        form.submittable = form.derive_submittable();
        form
    }

    /// Applies one user edit: stores the raw text, marks the field touched,
    /// re-validates it synchronously and recomputes submittability.
    ///
    /// Atomic on failure: an [`RegraError::UnknownField`] (or an engine
    /// runtime error) leaves all prior state untouched.
    pub fn set_value(&mut self, id: &str, raw: &str) -> Result<()> {
        let idx = *self
            .index
            .get(id)
            .ok_or_else(|| RegraError::unknown_field(id))?;
        // Validate before mutating anything.
        let result = validate_field(self.catalog, id, raw)?;

        let (value, stored) = &mut self.fields[idx];
        value.raw = raw.to_string();
        value.touched = true;
        *stored = result;
        self.submittable = self.derive_submittable();
        Ok(())
    }

    /// Pure read of a field's current result.
    pub fn result(&self, id: &str) -> Result<&ValidationResult> {
        self.lookup(id).map(|(_, result)| result)
    }

    /// Pure read of a field's current value.
    pub fn value(&self, id: &str) -> Result<&FieldValue> {
        self.lookup(id).map(|(value, _)| value)
    }

    /// Iterates `(value, result)` pairs in catalog order, for rendering.
    pub fn fields(&self) -> impl Iterator<Item = (&FieldValue, &ValidationResult)> {
        self.fields.iter().map(|(v, r)| (v, r))
    }

    /// The registered field ids in catalog order.
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.catalog.field_ids()
    }

    /// True iff every required field is Valid and every optional field is
    /// Valid, or Untouched with an empty raw value.
    pub fn is_submittable(&self) -> bool {
        self.submittable
    }

    /// Produces an immutable snapshot of all current raw values, or fails
    /// with [`RegraError::SubmissionRejected`] listing the offending fields.
    /// Rejection has no side effect; form state is unchanged either way.
    pub fn submit(&self) -> Result<FormSnapshot> {
        if !self.submittable {
            let invalid_fields = self
                .fields
                .iter()
                .zip(self.catalog.iter())
                .filter(|((value, result), spec)| {
                    !Self::field_ok(spec.optional(), value, result)
                })
                .map(|((value, _), _)| value.id.clone())
                .collect();
            return Err(RegraError::SubmissionRejected { invalid_fields });
        }
        Ok(FormSnapshot {
            values: self
                .fields
                .iter()
                .map(|(value, _)| (value.id.clone(), value.raw.clone()))
                .collect(),
        })
    }

    fn lookup(&self, id: &str) -> Result<&(FieldValue, ValidationResult)> {
        self.index
            .get(id)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| RegraError::unknown_field(id))
    }

    fn field_ok(optional: bool, value: &FieldValue, result: &ValidationResult) -> bool {
        match result.status() {
            Status::Valid => true,
            Status::Untouched => optional && value.raw.is_empty(),
            Status::Invalid => false,
        }
    }

    fn derive_submittable(&self) -> bool {
        self.fields
            .iter()
            .zip(self.catalog.iter())
            .all(|((value, result), spec)| Self::field_ok(spec.optional(), value, result))
    }
}
