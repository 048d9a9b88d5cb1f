//! Catalog construction, lookup, and the literal table's contract.

use regra::{default_catalog, Catalog, RegraError};

#[test]
fn default_catalog_has_the_fourteen_fields_in_order() {
    let ids: Vec<&str> = default_catalog().field_ids().collect();
    assert_eq!(
        ids,
        vec![
            "nome", "email", "senha", "cpf", "telefone", "dataHora", "numero", "q2a", "q2b",
            "q2c", "q2d", "q2e", "q2f", "q2g",
        ]
    );
    assert_eq!(default_catalog().len(), 14);
}

#[test]
fn every_default_field_is_optional() {
    // Deliberate source behavior: empty input always validates, for every
    // field, until a consumer re-specifies required fields.
    assert!(default_catalog().iter().all(|spec| spec.optional()));
}

#[test]
fn lookup_returns_the_spec_for_a_known_id() {
    let spec = default_catalog().lookup("cpf").unwrap();
    assert_eq!(spec.id(), "cpf");
    assert_eq!(spec.pattern().source(), r"^\d{3}\.\d{3}\.\d{3}-\d{2}$");
}

#[test]
fn lookup_fails_with_unknown_field() {
    let err = default_catalog().lookup("rg").unwrap_err();
    assert!(matches!(err, RegraError::UnknownField { ref id } if id == "rg"));
    assert!(format!("{}", err).contains("unknown field 'rg'"));
}

#[test]
fn violation_message_is_the_regex_prefixed_pattern() {
    let spec = default_catalog().lookup("numero").unwrap();
    assert_eq!(spec.violation_message(), r"Regex: ^(\+|-|)\d+(\.\d+)?$");
}

#[test]
fn contains_matches_lookup() {
    assert!(default_catalog().contains("q2g"));
    assert!(!default_catalog().contains("q2h"));
}

#[test]
fn malformed_pattern_aborts_construction_naming_the_field() {
    let err = Catalog::build(&[
        ("ok", r"^a$", true),
        ("quebrado", r"^(unclosed$", true),
    ])
    .unwrap_err();
    assert!(matches!(err, RegraError::MalformedPattern { ref id, .. } if id == "quebrado"));
}

#[test]
fn custom_catalogs_are_independent_of_the_default() {
    let catalog = Catalog::build(&[("codigo", r"^[a-z]{3}$", false)]).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(!catalog.lookup("codigo").unwrap().optional());
    assert!(catalog.lookup("nome").is_err());
}
