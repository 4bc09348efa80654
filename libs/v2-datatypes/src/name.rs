//! Person name parser

use crate::adapter::{adjust, adjust_at, string_at, text_at};
use crate::parser::DatatypeParser;
use crate::v2::{V2Tag, V2Type};
use phf::{phf_set, Set};
use v2fhir_models::{HumanName, NameUse};

static PREFIXES: Set<&'static str> = phf_set! {
    "MR", "MRS", "MS", "MISS", "MX", "DR", "PROF", "REV", "FR", "SR", "SIR", "HON",
};

static SUFFIXES: Set<&'static str> = phf_set! {
    "JR", "SR", "II", "III", "IV", "V", "MD", "DO", "PHD", "RN", "NP", "PA", "DDS", "ESQ",
};

/// Converts `XPN`, `XCN`, `CNN` and `PN` composites and free-text primitives to
/// [`HumanName`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NameParser;

impl DatatypeParser for NameParser {
    type Output = HumanName;

    fn convert(&self, value: &V2Type) -> Option<HumanName> {
        let name = match adjust(value)? {
            V2Type::Primitive(p) => parse_text(p.value.as_deref()?)?,
            V2Type::Composite(c) => match c.tag {
                V2Tag::XPN | V2Tag::PN => parse_components(&c.components, 0),
                V2Tag::XCN | V2Tag::CNN => parse_components(&c.components, 1),
                _ => return None,
            },
            V2Type::Varies(_) => return None,
        };
        (!name.is_empty()).then_some(name)
    }
}

/// Maps a name type code (table 0200) to a FHIR name use.
pub fn name_use(code: &str) -> Option<NameUse> {
    match code.trim().to_ascii_uppercase().as_str() {
        "L" => Some(NameUse::Official),
        "D" => Some(NameUse::Usual),
        "M" => Some(NameUse::Maiden),
        "N" => Some(NameUse::Nickname),
        "A" | "S" => Some(NameUse::Anonymous),
        "B" | "BAD" => Some(NameUse::Old),
        _ => None,
    }
}

/// Family name at `offset`, then given, second given, suffix, prefix, degree and
/// name type code.
fn parse_components(components: &[V2Type], offset: usize) -> HumanName {
    let family = match adjust_at(components, offset) {
        // FN: surname is its first component
        Some(V2Type::Composite(fname)) => string_at(&fname.components, 0),
        _ => text_at(components, offset),
    };
    let given: Vec<String> = [offset + 1, offset + 2]
        .into_iter()
        .filter_map(|i| text_at(components, i))
        .collect();
    let suffix: Vec<String> = [offset + 3, offset + 5]
        .into_iter()
        .filter_map(|i| text_at(components, i))
        .collect();

    HumanName {
        use_: text_at(components, offset + 6).and_then(|code| name_use(&code)),
        text: None,
        family,
        given,
        prefix: text_at(components, offset + 4).into_iter().collect(),
        suffix,
    }
}

/// Splits a free-text name: leading titles become prefixes, trailing honorifics
/// suffixes, the last remaining word the family name and the rest given names.
fn parse_text(text: &str) -> Option<HumanName> {
    if text.trim().is_empty() {
        return None;
    }
    let mut words: Vec<&str> = text.split_whitespace().collect();

    let leading = words
        .iter()
        .take_while(|w| PREFIXES.contains(title_key(w).as_str()))
        .count();
    let prefix: Vec<String> = words.drain(..leading).map(str::to_string).collect();

    let mut suffix = Vec::new();
    while words.len() > 1 && words.last().is_some_and(|w| SUFFIXES.contains(title_key(w).as_str())) {
        if let Some(w) = words.pop() {
            suffix.insert(0, w.trim_end_matches(',').to_string());
        }
    }

    let family = words.pop().map(|w| w.trim_end_matches(',').to_string());
    Some(HumanName {
        use_: None,
        text: Some(text.to_string()),
        family,
        given: words.into_iter().map(str::to_string).collect(),
        prefix,
        suffix,
    })
}

fn title_key(word: &str) -> String {
    word.trim_end_matches(['.', ',']).to_ascii_uppercase()
}
