use v2fhir_models::Coding;
use v2fhir_terminology::systems::{self, IDENTIFIER_TYPE, ID_TYPE};
use v2fhir_terminology::{Lookup, StaticLookup};

fn lookup() -> StaticLookup {
    StaticLookup::default()
}

#[test]
fn resolves_coding_system_names() {
    let l = lookup();
    assert_eq!(l.resolve_system("LN").as_deref(), Some(systems::LOINC));
    assert_eq!(l.resolve_system("ln").as_deref(), Some(systems::LOINC));
    assert_eq!(l.resolve_system(" SCT ").as_deref(), Some(systems::SNOMED));
    assert_eq!(l.resolve_system("CVX").as_deref(), Some(systems::CVX));
    assert_eq!(l.resolve_system("HL70292").as_deref(), Some(systems::CVX));
    assert_eq!(l.resolve_system("I10").as_deref(), Some(systems::ICD10CM));
}

#[test]
fn resolves_hl7_tables() {
    let l = lookup();
    assert_eq!(l.resolve_system("HL70203").as_deref(), Some(IDENTIFIER_TYPE));
    assert_eq!(l.resolve_system("hl70301").as_deref(), Some(ID_TYPE));
    assert_eq!(l.resolve_system(IDENTIFIER_TYPE).as_deref(), Some(IDENTIFIER_TYPE));
}

#[test]
fn bare_numbers_are_not_table_systems() {
    let l = lookup();
    assert_eq!(l.resolve_system("0301"), None);
    assert_eq!(l.resolve_system("0042"), None);
    assert_eq!(l.resolve_system("HL7042"), None);
    // Display lookups name a table, so the bare number still works there.
    assert_eq!(l.display_for("MR", "0203").as_deref(), Some("Medical record number"));
}

#[test]
fn resolves_oids_with_and_without_prefix() {
    let l = lookup();
    assert_eq!(
        l.resolve_system("2.16.840.1.113883.6.1").as_deref(),
        Some(systems::LOINC)
    );
    assert_eq!(
        l.resolve_system("urn:oid:2.16.840.1.113883.6.96").as_deref(),
        Some(systems::SNOMED)
    );
    assert_eq!(
        l.resolve_system("urn:oid:2.16.840.1.113883.12.4").as_deref(),
        Some("http://terminology.hl7.org/CodeSystem/v2-0004")
    );
}

#[test]
fn canonical_uris_resolve_to_themselves() {
    let l = lookup();
    assert_eq!(l.resolve_system(systems::UCUM).as_deref(), Some(systems::UCUM));
    assert_eq!(l.resolve_system("http://loinc.org").as_deref(), Some(systems::LOINC));
}

#[test]
fn unknown_hints_are_not_resolved() {
    let l = lookup();
    assert_eq!(l.resolve_system(""), None);
    assert_eq!(l.resolve_system("   "), None);
    assert_eq!(l.resolve_system("L"), None);
    assert_eq!(l.resolve_system("99zzz"), None);
    assert_eq!(l.resolve_system("http://example.org/fhir/local"), None);
    assert_eq!(l.resolve_system("1.2.3.4"), None);
}

#[test]
fn builder_entries_take_precedence() {
    let l = StaticLookup::builder()
        .system("LN", "http://example.org/not-loinc")
        .system("local", "http://example.org/local")
        .build();
    assert_eq!(
        l.resolve_system("LN").as_deref(),
        Some("http://example.org/not-loinc")
    );
    assert_eq!(
        l.resolve_system("LOCAL").as_deref(),
        Some("http://example.org/local")
    );
    assert_eq!(l.resolve_system("SCT").as_deref(), Some(systems::SNOMED));
}

#[test]
fn displays_from_builtin_tables() {
    let l = lookup();
    assert_eq!(
        l.display_for("MR", "0203").as_deref(),
        Some("Medical record number")
    );
    assert_eq!(l.display_for("MR", IDENTIFIER_TYPE).as_deref(), Some("Medical record number"));
    assert_eq!(l.display_for("ISO", "HL70301").as_deref(), Some(
        "An International Standards Organization Object Identifier (OID)"
    ));
    assert_eq!(l.display_for("ADT", "0076").as_deref(), Some("ADT message"));
    assert_eq!(l.display_for("ADT_A01", "0354").as_deref(), Some("A01, A04, A08, A13"));
    assert_eq!(l.display_for("ZZZ", "0203"), None);
    assert_eq!(l.display_for("MR", "LN"), None);
    assert_eq!(l.display_for("", "0203"), None);
}

#[test]
fn custom_displays_for_local_tables() {
    let l = StaticLookup::builder()
        .system("LOCALTYPES", "http://example.org/types")
        .display("http://example.org/types", "A", "Alpha")
        .build();
    assert_eq!(l.display_for("A", "localtypes").as_deref(), Some("Alpha"));
    assert_eq!(l.display_for("B", "localtypes"), None);
}

#[test]
fn units_canonicalize_to_ucum() {
    let l = lookup();
    let coding = l.unit_for("MG").unwrap();
    assert_eq!(coding.system.as_deref(), Some(systems::UCUM));
    assert_eq!(coding.code.as_deref(), Some("mg"));
    assert_eq!(coding.display.as_deref(), Some("milligram"));

    assert_eq!(l.unit_for("lbs").unwrap().code.as_deref(), Some("[lb_av]"));
    assert_eq!(l.unit_for("furlongs"), None);
    assert_eq!(l.unit_for("m g"), None);
    assert_eq!(l.unit_for(""), None);
}

#[test]
fn custom_units_override_ucum() {
    let custom = Coding::new(
        Some("http://example.org/units".into()),
        Some("tab".into()),
        Some("tablet".into()),
    );
    let l = StaticLookup::builder().unit("tabs", custom.clone()).build();
    assert_eq!(l.unit_for("TABS"), Some(custom));
    assert_eq!(l.unit_for("mg").unwrap().code.as_deref(), Some("mg"));
}
