//! Coded-value parser
//!
//! Maps coded V2 values (`CE`, `CF`, `CNE`, `CWE`, plus the identifier-like and
//! primitive variants) to [`Coding`] and [`CodeableConcept`].

use crate::adapter::{adjust, string_at, text_at};
use crate::identifier::to_identifier;
use crate::v2::{V2Tag, V2Type};
use v2fhir_models::{CodeableConcept, Coding};
use v2fhir_terminology::systems::{v2_table, ID_TYPE};
use v2fhir_terminology::Lookup;

/// Component offsets of one coding triplet inside a coded element.
struct TripletLayout {
    code: usize,
    version: usize,
    system_oid: usize,
}

const PRIMARY: TripletLayout = TripletLayout {
    code: 0,
    version: 6,
    system_oid: 13,
};

const ALTERNATE: TripletLayout = TripletLayout {
    code: 3,
    version: 7,
    system_oid: 16,
};

/// Component holding the original text of a coded element.
const ORIGINAL_TEXT: usize = 8;

/// Converts a coded value to a CodeableConcept.
///
/// `table` names the code system for `IS`/`ST`/`ID` primitives, which carry none of
/// their own.
pub fn to_codeable_concept(
    value: &V2Type,
    table: Option<&str>,
    lookup: &dyn Lookup,
) -> Option<CodeableConcept> {
    let value = adjust(value)?;
    let tag = value.tag();

    let cc = match value {
        V2Type::Composite(c) if tag.is_coded_element() => CodeableConcept::default()
            .with_coding(coding_at(&c.components, &PRIMARY, lookup))
            .with_coding(coding_at(&c.components, &ALTERNATE, lookup))
            .with_text(text_at(&c.components, ORIGINAL_TEXT)),
        V2Type::Composite(c) if tag == V2Tag::CQ => {
            return c
                .components
                .get(1)
                .and_then(|unit| to_codeable_concept(unit, None, lookup));
        }
        V2Type::Composite(_) if matches!(tag, V2Tag::CX | V2Tag::EI | V2Tag::EIP | V2Tag::HD) => {
            let id = to_identifier(value, lookup)?;
            CodeableConcept::default().with_coding(Some(Coding::new(id.system, id.value, None)))
        }
        V2Type::Primitive(p) if tag == V2Tag::ID => {
            let system = match table {
                Some(table) => table_system(table, lookup),
                None => ID_TYPE.to_string(),
            };
            CodeableConcept::default().with_coding(Some(Coding::new(
                Some(system),
                trimmed(p.value.as_deref()),
                None,
            )))
        }
        V2Type::Primitive(p) if matches!(tag, V2Tag::IS | V2Tag::ST) => {
            let system = table.map(|t| table_system(t, lookup));
            CodeableConcept::default().with_coding(Some(Coding::new(
                system,
                trimmed(p.value.as_deref()),
                None,
            )))
        }
        _ => return None,
    };

    (!cc.is_empty()).then_some(cc)
}

/// First coding of [`to_codeable_concept`].
///
/// When `table` is given and the coding has no system, the table becomes its system.
pub fn to_coding(value: &V2Type, table: Option<&str>, lookup: &dyn Lookup) -> Option<Coding> {
    let cc = to_codeable_concept(value, table, lookup)?;
    let mut coding = cc.coding.into_iter().next()?;
    if coding.system.is_none() {
        if let Some(table) = table {
            coding.system = Some(table_system(table, lookup));
        }
    }
    (!coding.is_empty()).then_some(coding)
}

/// A primitive's stripped value, otherwise the code of [`to_coding`].
pub fn to_code(value: &V2Type, lookup: &dyn Lookup) -> Option<String> {
    match adjust(value)? {
        V2Type::Primitive(p) => trimmed(p.value.as_deref()),
        other => to_coding(other, None, lookup)?.code,
    }
}

/// Message code (MSG.1, table 0076).
pub fn to_coding_from_message_code(value: &V2Type, lookup: &dyn Lookup) -> Option<Coding> {
    message_coding(value, 0, "0076", lookup)
}

/// Trigger event (MSG.2, table 0003).
pub fn to_coding_from_trigger_event(value: &V2Type, lookup: &dyn Lookup) -> Option<Coding> {
    message_coding(value, 1, "0003", lookup)
}

/// Message structure (MSG.3, table 0354).
pub fn to_coding_from_message_structure(value: &V2Type, lookup: &dyn Lookup) -> Option<Coding> {
    message_coding(value, 2, "0354", lookup)
}

fn message_coding(value: &V2Type, index: usize, table: &str, lookup: &dyn Lookup) -> Option<Coding> {
    let code = string_at(adjust(value)?.components(), index)?;
    let system = table_system(table, lookup);
    let display = lookup.display_for(&code, table);
    Some(Coding::new(Some(system), Some(code), display))
}

/// System URI for a caller-named table. A bare `nnnn` is an HL7 table number here.
fn table_system(table: &str, lookup: &dyn Lookup) -> String {
    let table = table.trim();
    if table.len() == 4 && table.bytes().all(|b| b.is_ascii_digit()) {
        return lookup
            .resolve_system(&format!("HL7{table}"))
            .unwrap_or_else(|| v2_table(table));
    }
    canonical_system(table, lookup)
}

/// Canonical URI for a system hint, or the hint itself when no mapping is known.
///
/// Bare OIDs that no table knows become `urn:oid:` URIs.
pub(crate) fn canonical_system(hint: &str, lookup: &dyn Lookup) -> String {
    let hint = hint.trim();
    if let Some(uri) = lookup.resolve_system(hint) {
        return uri;
    }
    if is_oid(hint) {
        return format!("urn:oid:{hint}");
    }
    hint.to_string()
}

fn is_oid(s: &str) -> bool {
    s.contains('.')
        && s.split('.')
            .all(|arc| !arc.is_empty() && arc.bytes().all(|b| b.is_ascii_digit()))
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn coding_at(components: &[V2Type], layout: &TripletLayout, lookup: &dyn Lookup) -> Option<Coding> {
    if layout.code >= components.len() {
        return None;
    }
    let code = text_at(components, layout.code);
    let display = text_at(components, layout.code + 1);
    let system = text_at(components, layout.system_oid)
        .or_else(|| text_at(components, layout.code + 2))
        .map(|raw| canonical_system(&raw, lookup));
    let version = text_at(components, layout.version);

    // Missing or echoed displays come from the code system table when it has one.
    let display = match (&code, display) {
        (Some(code), d) if d.as_deref().map_or(true, |d| d == code.as_str()) => system
            .as_deref()
            .and_then(|system| lookup.display_for(code, system))
            .or(d),
        (_, d) => d,
    };

    let coding = Coding::new(system, code, display).with_version(version);
    (!coding.is_empty()).then_some(coding)
}
