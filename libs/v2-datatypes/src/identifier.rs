//! Identifier parser
//!
//! Extracts value, check digit, system and identifier type from the V2 identifier
//! variants. Systems often arrive as a hierarchic designator (`HD`) embedded at some
//! offset of a larger composite; [`systems_from_hd`] reads one wherever it sits.

use crate::adapter::{adjust, adjust_at, string_at, text_at};
use crate::coding::{canonical_system, to_coding};
use crate::v2::{V2Tag, V2Type};
use v2fhir_models::{CodeableConcept, Coding, Identifier};
use v2fhir_terminology::systems::{is_id_type, is_identifier_type, IDENTIFIER_TYPE, ID_TYPE, IETF};
use v2fhir_terminology::Lookup;

/// Component offsets of an identifier inside a composite.
struct IdentifierLayout {
    /// Value positions, first non-blank wins.
    values: &'static [usize],
    check_digit: Option<usize>,
    id_type: Option<usize>,
    /// System candidates in priority order.
    systems: &'static [usize],
}

const CX: IdentifierLayout = IdentifierLayout {
    values: &[0],
    check_digit: Some(1),
    id_type: Some(4),
    systems: &[3, 9, 8],
};

// CNN.9 to CNN.11 carry the assigning authority as a flattened HD. CNN.8 is a
// source table, not a system.
const CNN: IdentifierLayout = IdentifierLayout {
    values: &[0],
    check_digit: None,
    id_type: None,
    systems: &[9, 8],
};

const XCN: IdentifierLayout = IdentifierLayout {
    values: &[0],
    check_digit: Some(10),
    id_type: Some(12),
    systems: &[22, 21, 8],
};

// XON.10 organization identifier, falling back to the deprecated XON.3 ID number.
// XON.4 holds the check digit.
const XON: IdentifierLayout = IdentifierLayout {
    values: &[9, 2],
    check_digit: Some(3),
    id_type: Some(6),
    systems: &[5, 7],
};

/// Converts a V2 value to an Identifier.
pub fn to_identifier(value: &V2Type, lookup: &dyn Lookup) -> Option<Identifier> {
    let value = adjust(value)?;
    let id = match value {
        V2Type::Primitive(p) => Identifier::default().with_value(
            p.value.as_deref().map(|v| v.trim().to_string()),
        ),
        V2Type::Composite(c) => {
            let components = &c.components;
            if components.is_empty() {
                return None;
            }
            match c.tag {
                V2Tag::EIP => return to_identifier(&components[0], lookup),
                V2Tag::HD => hd_identifier(components, 0, lookup),
                V2Tag::EI => hd_identifier(components, 1, lookup).with_value(string_at(components, 0)),
                tag if tag.is_coded_element() => {
                    let coding = to_coding(value, None, lookup)?;
                    Identifier::default()
                        .with_value(coding.code)
                        .with_system(coding.system)
                }
                V2Tag::CX => extract(components, &CX, lookup),
                V2Tag::CNN => extract(components, &CNN, lookup),
                V2Tag::XCN => extract(components, &XCN, lookup),
                V2Tag::XON => extract(components, &XON, lookup),
                _ => return None,
            }
        }
        V2Type::Varies(_) => return None,
    };
    (!id.is_empty()).then_some(id)
}

/// Candidate system names from an HD laid out at `offset`, `offset + 1`, `offset + 2`
/// (namespace ID, universal ID, universal ID type).
///
/// Returns `[local, unique]` with blank entries left out. The universal ID gets a
/// `urn:oid:` prefix for type `ISO` and `urn:uuid:` for `GUID`/`UUID`.
pub fn systems_from_hd(components: &[V2Type], offset: usize) -> Vec<String> {
    let mut names = Vec::with_capacity(2);
    if let Some(namespace) = string_at(components, offset) {
        names.push(namespace);
    }
    if let Some(universal) = string_at(components, offset + 1) {
        let universal_type = string_at(components, offset + 2).map(|t| t.to_ascii_uppercase());
        let prefix = match universal_type.as_deref() {
            Some("ISO") => "urn:oid:",
            Some("GUID") | Some("UUID") => "urn:uuid:",
            _ => "",
        };
        if universal.starts_with(prefix) {
            names.push(universal);
        } else {
            names.push(format!("{prefix}{universal}"));
        }
    }
    names
}

/// Identifier carrying only the system and type an HD at `offset` implies.
///
/// The last candidate becomes the system. The first is a type hint: URIs are typed
/// under IETF, known universal ID types under table 0301, known identifier types
/// under table 0203, and anything else is kept as a bare code.
fn hd_identifier(components: &[V2Type], offset: usize, lookup: &dyn Lookup) -> Identifier {
    let names = systems_from_hd(components, offset);
    let system = names.last().map(|name| canonical_system(name, lookup));
    let type_ = names.first().map(|hint| {
        let coding = if hint.contains(':') {
            Coding::new(Some(IETF.to_string()), Some(hint.clone()), None)
        } else if is_id_type(hint) {
            Coding::new(
                Some(ID_TYPE.to_string()),
                Some(hint.clone()),
                lookup.display_for(hint, ID_TYPE),
            )
        } else if is_identifier_type(hint) {
            Coding::new(
                Some(IDENTIFIER_TYPE.to_string()),
                Some(hint.clone()),
                lookup.display_for(hint, IDENTIFIER_TYPE),
            )
        } else {
            Coding::new(None, Some(hint.clone()), None)
        };
        CodeableConcept::default().with_coding(Some(coding))
    });
    Identifier::default().with_system(system).with_type(type_)
}

fn extract(components: &[V2Type], layout: &IdentifierLayout, lookup: &dyn Lookup) -> Identifier {
    let value = layout
        .values
        .iter()
        .find_map(|&i| string_at(components, i))
        .map(|value| match layout.check_digit.and_then(|i| string_at(components, i)) {
            Some(check_digit) => format!("{value}-{check_digit}"),
            None => value,
        });

    let id_type = layout
        .id_type
        .and_then(|i| text_at(components, i))
        .map(|code| {
            let display = lookup.display_for(&code, IDENTIFIER_TYPE);
            CodeableConcept::default().with_coding(Some(Coding::new(
                Some(IDENTIFIER_TYPE.to_string()),
                Some(code),
                display,
            )))
        });

    Identifier::default()
        .with_value(value)
        .with_system(select_system(components, layout.systems, lookup))
        .with_type(id_type)
}

/// First candidate the lookup resolves, else the raw name of the last populated one.
fn select_system(components: &[V2Type], candidates: &[usize], lookup: &dyn Lookup) -> Option<String> {
    let mut fallback = None;
    for &index in candidates {
        let names = match adjust_at(components, index) {
            Some(V2Type::Primitive(_)) => string_at(components, index).into_iter().collect(),
            Some(V2Type::Composite(hd)) if hd.tag == V2Tag::HD => systems_from_hd(&hd.components, 0),
            _ => Vec::new(),
        };
        if let Some(resolved) = names.iter().find_map(|name| lookup.resolve_system(name)) {
            return Some(resolved);
        }
        if let Some(last) = names.last() {
            fallback = Some(last.clone());
        }
    }
    fallback
}
