//! The pattern catalog: the engine's single source of truth for field rules.
//!
//! Catalog Invariant: the catalog is built once at the entrypoint and passed
//! by reference to all validation code. It is read-only after construction;
//! every id maps to exactly one [`FieldSpec`] for its lifetime. Never build a
//! local/hidden catalog inside validation code. See validate.rs and form.rs
//! for enforcement.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::{RegraError, Result};
use crate::matcher::Pattern;

/// The default field table. The pattern texts are the compatibility
/// contract and must stay bit-exact.
///
/// Columns: id, pattern (anchor-inclusive, full-string match), optional.
/// Every field is optional in the source; that is deliberate behavior, not a
/// bug, until a consumer re-specifies required fields via [`Catalog::build`].
///
/// The seven `q2*` fields validate "family arrangement" words over the
/// alphabet {H, M, h, m}: uppercase for the adult couple, lowercase for
/// children, age decreasing left to right.
const DEFAULT_FIELDS: &[(&str, &str, bool)] = &[
    ("nome", r"^[A-Z][a-z]+(\s[A-Z][a-z]+)*\s[A-Z][a-z]+$", true),
    ("email", r"^[a-z]+@[a-z]+(.com.br|.com)$", true),
    ("senha", r"^(?=.*[A-Z])(?=.*\d)[a-zA-Z\d]{8}$", true),
    ("cpf", r"^\d{3}\.\d{3}\.\d{3}-\d{2}$", true),
    (
        "telefone",
        r"^(\(\d{2}\) 9\d{4}-\d{4}|\(\d{2}\) 9\d{4}\d{4}|\d{2} 9\d{4}\d{4})$",
        true,
    ),
    ("dataHora", r"^\d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2}$", true),
    ("numero", r"^(\+|-|)\d+(\.\d+)?$", true),
    (
        "q2a",
        r"^(HM|MH)((mmm*|h+)|((?=.*m)(?=.*h.*h)(?!.*m.*m)[hm]*))$",
        true,
    ),
    ("q2b", r"^(HM|MH)h*m(h*mh*mh*)*$", true),
    ("q2c", r"^(HM|MH)m[hm]*h$", true),
    ("q2d", r"^(MM|HH)(hm|mh)[hm]*(hm|mh|mm|hh)+[hm]*(hm|mh)$", true),
    ("q2e", r"^(MM|HH)(m((hm)*h|(hm)+)|h((mh)*m|(mh)+))$", true),
    ("q2f", r"^(MM|HH)(m|hm)*h?$", true),
    ("q2g", r"^([HM]{1,3})[hm]*$(?<!hhh$)", true),
];

/// One field's validation rule. Immutable after catalog construction.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    id: String,
    pattern: Pattern,
    optional: bool,
    violation_message: String,
}

impl FieldSpec {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// When true, an empty value is automatically Valid; the pattern is
    /// never consulted for the empty string.
    pub fn optional(&self) -> bool {
        self.optional
    }

    /// The fixed text shown when membership fails.
    pub fn violation_message(&self) -> &str {
        &self.violation_message
    }
}

/// Immutable table of field id → [`FieldSpec`], preserving declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    fields: Vec<FieldSpec>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from an `(id, pattern, optional)` table, compiling
    /// every pattern up front.
    ///
    /// Fails with [`RegraError::MalformedPattern`] naming the offending id if
    /// any pattern does not compile. That is a programmer error in the table
    /// and must abort initialization, never be recovered.
    pub fn build(entries: &[(&str, &str, bool)]) -> Result<Self> {
        let mut fields = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        for &(id, source, optional) in entries {
            let pattern = Pattern::compile(source)
                .map_err(|e| RegraError::malformed_pattern(id, e))?;
            index.insert(id.to_string(), fields.len());
            fields.push(FieldSpec {
                id: id.to_string(),
                pattern,
                optional,
                // Violation message text is always the pattern prefixed
                // with "Regex: ", for every field.
                violation_message: format!("Regex: {source}"),
            });
        }
        Ok(Self { fields, index })
    }

    /// Looks up a field by id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use regra::catalog::default_catalog;
    /// let spec = default_catalog().lookup("cpf").unwrap();
    /// assert!(spec.optional());
    /// assert!(default_catalog().lookup("rg").is_err());
    /// ```
    pub fn lookup(&self, id: &str) -> Result<&FieldSpec> {
        self.index
            .get(id)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| RegraError::unknown_field(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates the specs in declaration order, for rendering.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Iterates the registered field ids in declaration order.
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    // The table is a compile-time constant, so a failure here is a bug in
    // DEFAULT_FIELDS; aborting at first use is the specified behavior.
    Catalog::build(DEFAULT_FIELDS).expect("default catalog patterns must compile")
});

/// The process-wide default catalog, built on first use.
///
/// Prefer taking a `&Catalog` parameter over calling this in library code;
/// tests build independent catalogs via [`Catalog::build`].
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}
