use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;
use v2fhir_models::common::{
    Address, AddressUse, CodeableConcept, Coding, ContactPoint, ContactPointSystem, Identifier,
    Quantity, TemporalPrecision, TemporalValue,
};

#[test]
fn address_uses_fhir_field_names() {
    let addr = Address::default()
        .with_line(Some("100 Main St".into()))
        .with_city(Some("Springfield".into()))
        .with_state(Some("IL".into()))
        .with_postal_code(Some("62704".into()))
        .with_use(Some(AddressUse::Home));

    let value = serde_json::to_value(&addr).unwrap();
    assert_eq!(
        value,
        json!({
            "use": "home",
            "line": ["100 Main St"],
            "city": "Springfield",
            "state": "IL",
            "postalCode": "62704"
        })
    );
}

#[test]
fn identifier_type_serializes_as_type() {
    let id = Identifier::default()
        .with_value(Some("12345-6".into()))
        .with_type(Some(CodeableConcept::default().with_coding(Some(Coding::new(
            Some("http://terminology.hl7.org/CodeSystem/v2-0203".into()),
            Some("MR".into()),
            None,
        )))));

    let value = serde_json::to_value(&id).unwrap();
    assert_eq!(value["type"]["coding"][0]["code"], "MR");
    assert_eq!(value["value"], "12345-6");
    assert!(value.get("system").is_none());
}

#[test]
fn temporal_value_serializes_at_precision() {
    let dt = NaiveDate::from_ymd_opt(2020, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let v = TemporalValue::new(dt, TemporalPrecision::Month, None);
    assert_eq!(serde_json::to_value(v).unwrap(), json!("2020-03"));
}

#[test]
fn quantity_and_contact_point_round_trip() {
    let qty = Quantity::default()
        .with_value(Some(Decimal::from_str("12.5").unwrap()))
        .with_code(Some("mg".into()))
        .with_unit(Some("milligram".into()))
        .with_system(Some("http://unitsofmeasure.org".into()));
    let back: Quantity = serde_json::from_value(serde_json::to_value(&qty).unwrap()).unwrap();
    assert_eq!(back, qty);

    let cp = ContactPoint {
        system: Some(ContactPointSystem::Email),
        value: Some("someone@example.org".into()),
        use_: None,
    };
    assert_eq!(
        serde_json::to_value(&cp).unwrap(),
        json!({"system": "email", "value": "someone@example.org"})
    );
}
