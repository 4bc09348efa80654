//! Contact point parser

use crate::adapter::{adjust, string_at, text_at};
use crate::parser::DatatypeParser;
use crate::v2::{V2Tag, V2Type};
use v2fhir_models::{ContactPoint, ContactPointSystem, ContactPointUse};

const FORMATTED: usize = 0;
const USE_CODE: usize = 1;
const EQUIPMENT: usize = 2;
const EMAIL: usize = 3;
const COUNTRY: usize = 4;
const AREA: usize = 5;
const LOCAL: usize = 6;
const EXTENSION: usize = 7;
const UNFORMATTED: usize = 11;

const URL_SCHEMES: &[&str] = &["http://", "https://", "ftp://", "mailto:", "tel:", "urn:"];

/// Converts `XTN` composites and free-text primitives to [`ContactPoint`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactPointParser;

impl DatatypeParser for ContactPointParser {
    type Output = ContactPoint;

    fn convert(&self, value: &V2Type) -> Option<ContactPoint> {
        let cp = match adjust(value)? {
            V2Type::Primitive(p) => parse_text(p.value.as_deref()?)?,
            V2Type::Composite(c) if c.tag == V2Tag::XTN => parse_components(&c.components),
            _ => return None,
        };
        (!cp.is_empty()).then_some(cp)
    }
}

/// Maps a telecommunication use code (table 0201).
pub fn contact_use(code: &str) -> Option<ContactPointUse> {
    match code.trim().to_ascii_uppercase().as_str() {
        "PRN" | "ORN" => Some(ContactPointUse::Home),
        "WPN" => Some(ContactPointUse::Work),
        "VHN" => Some(ContactPointUse::Temp),
        "PRS" => Some(ContactPointUse::Mobile),
        _ => None,
    }
}

fn parse_components(components: &[V2Type]) -> ContactPoint {
    let mut use_ = text_at(components, USE_CODE).and_then(|code| contact_use(&code));

    let email = text_at(components, EMAIL);
    let value = email.clone().or_else(|| {
        assemble_number(components)
            .or_else(|| string_at(components, FORMATTED))
            .or_else(|| text_at(components, UNFORMATTED))
    });

    let equipment = text_at(components, EQUIPMENT).map(|e| e.to_ascii_uppercase());
    let system = match equipment.as_deref() {
        _ if email.is_some() => Some(ContactPointSystem::Email),
        Some("PH") => Some(ContactPointSystem::Phone),
        Some("CP") => {
            use_ = use_.or(Some(ContactPointUse::Mobile));
            Some(ContactPointSystem::Phone)
        }
        Some("FX") => Some(ContactPointSystem::Fax),
        Some("BP") => Some(ContactPointSystem::Pager),
        Some("INTERNET") | Some("X.400") => Some(match value.as_deref() {
            Some(v) if looks_like_url(v) => ContactPointSystem::Url,
            _ => ContactPointSystem::Email,
        }),
        Some(_) => Some(ContactPointSystem::Other),
        None => value.as_deref().map(classify),
    };

    ContactPoint { system, value, use_ }
}

/// `+<country> (<area>) <local> ext. <ext>` from whichever parts are present.
fn assemble_number(components: &[V2Type]) -> Option<String> {
    let local = text_at(components, LOCAL)?;
    let mut parts = Vec::with_capacity(4);
    if let Some(country) = text_at(components, COUNTRY) {
        parts.push(format!("+{}", country.trim_start_matches('+')));
    }
    if let Some(area) = text_at(components, AREA) {
        parts.push(format!("({area})"));
    }
    parts.push(local);
    if let Some(ext) = text_at(components, EXTENSION) {
        parts.push(format!("ext. {ext}"));
    }
    Some(parts.join(" "))
}

fn parse_text(text: &str) -> Option<ContactPoint> {
    let value = text.trim();
    if value.is_empty() {
        return None;
    }
    Some(ContactPoint {
        system: Some(classify(value)),
        value: Some(value.to_string()),
        use_: None,
    })
}

fn classify(value: &str) -> ContactPointSystem {
    if looks_like_url(value) {
        ContactPointSystem::Url
    } else if value.contains('@') {
        ContactPointSystem::Email
    } else {
        ContactPointSystem::Phone
    }
}

fn looks_like_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    URL_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) && !lower.starts_with("mailto:")
}
