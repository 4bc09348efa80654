use v2fhir_ucum::{resolve, Error};

#[test]
fn resolve_rejects_non_ascii() {
    let err = resolve("Âµg").unwrap_err();
    assert!(matches!(err, Error::NonAscii));
}

#[test]
fn resolve_rejects_whitespace_and_empty() {
    assert_eq!(resolve("mg dL").unwrap_err(), Error::ContainsWhitespace);
    assert_eq!(resolve("   ").unwrap_err(), Error::Empty);
}

#[test]
fn exact_codes_resolve_to_themselves() {
    let u = resolve("mg/dL").unwrap();
    assert_eq!(u.code, "mg/dL");
    assert_eq!(u.display, "milligram per deciliter");
}

#[test]
fn v2_spellings_are_canonicalized() {
    assert_eq!(resolve("MG").unwrap().code, "mg");
    assert_eq!(resolve("lbs").unwrap().code, "[lb_av]");
    assert_eq!(resolve("Years").unwrap().code, "a");
    assert_eq!(resolve("mmHg").unwrap().code, "mm[Hg]");
}

#[test]
fn unknown_units_are_reported() {
    assert_eq!(
        resolve("furlongs").unwrap_err(),
        Error::UnknownUnit("furlongs".into())
    );
}
