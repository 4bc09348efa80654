//! Quantity parser

use crate::adapter::{adjust, adjust_at};
use crate::coding::to_codeable_concept;
use crate::v2::{V2Tag, V2Type};
use rust_decimal::Decimal;
use std::str::FromStr;
use v2fhir_models::Quantity;
use v2fhir_terminology::systems::UCUM;
use v2fhir_terminology::Lookup;
use v2fhir_ucum::fhir::compare_unit_systems;

/// Converts a V2 value to a Quantity.
///
/// Primitives are read as `<magnitude> [<unit>]`. `CQ` composites take the magnitude
/// from component 0 and the unit from the coded component 1.
pub fn to_quantity(value: &V2Type, lookup: &dyn Lookup) -> Option<Quantity> {
    let qt = match adjust(value)? {
        V2Type::Primitive(p) => quantity_from_text(p.value.as_deref()?, lookup)?,
        V2Type::Composite(c) if c.tag == V2Tag::CQ && !c.components.is_empty() => {
            let qt = adjust_at(&c.components, 0)
                .and_then(V2Type::text)
                .and_then(|text| quantity_from_text(text, lookup))
                .unwrap_or_default();
            match c.components.get(1) {
                Some(unit) => with_units(qt, unit, lookup),
                None => qt,
            }
        }
        _ => return None,
    };
    (!qt.is_empty()).then_some(qt)
}

/// [`to_quantity`] forced to a length of stay in days.
pub fn to_quantity_length_of_stay(value: &V2Type, lookup: &dyn Lookup) -> Option<Quantity> {
    let mut qt = to_quantity(value, lookup)?;
    qt.code = Some("d".to_string());
    qt.unit = Some("days".to_string());
    qt.system = Some(UCUM.to_string());
    Some(qt)
}

/// Parses a decimal in plain or scientific notation.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn quantity_from_text(text: &str, lookup: &dyn Lookup) -> Option<Quantity> {
    let mut parts = text.split_whitespace();
    let magnitude = parse_decimal(parts.next()?)?;
    let qt = Quantity::default().with_value(Some(magnitude));

    let Some(token) = parts.next() else {
        return Some(qt);
    };
    match lookup.unit_for(token) {
        Some(unit) => Some(
            qt.with_code(unit.code)
                .with_unit(unit.display)
                .with_system(unit.system),
        ),
        None => {
            tracing::debug!(unit = %token, "unit not recognized, keeping it as text");
            Some(qt.with_unit(Some(token.to_string())))
        }
    }
}

/// Picks the preferred unit coding of `unit` and fixes the system to UCUM.
fn with_units(qt: Quantity, unit: &V2Type, lookup: &dyn Lookup) -> Quantity {
    let Some(cc) = to_codeable_concept(unit, None, lookup) else {
        return qt;
    };
    let mut codings = cc.coding;
    codings.sort_by(|a, b| compare_unit_systems(a.system.as_deref(), b.system.as_deref()));
    let Some(best) = codings.into_iter().next() else {
        return qt;
    };
    let unit_text = best.display.or_else(|| best.code.clone());
    qt.with_code(best.code)
        .with_unit(unit_text)
        .with_system(Some(UCUM.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_in_both_notations() {
        assert_eq!(parse_decimal("12.50"), Decimal::from_str("12.50").ok());
        assert_eq!(parse_decimal("1e3"), Decimal::from_str("1000").ok());
        assert_eq!(parse_decimal("-0.5"), Decimal::from_str("-0.5").ok());
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
    }
}
