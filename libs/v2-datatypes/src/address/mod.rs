//! Heuristic address parser
//!
//! Structured `AD`/`XAD` composites map positionally. Free text is split into lines
//! and each line is classified against term dictionaries (street suffixes, unit
//! designators, directionals, countries, states) and postal-code patterns.

mod terms;

use crate::adapter::{adjust, string_at, text_at};
use crate::parser::DatatypeParser;
use crate::v2::{V2Tag, V2Type};
use once_cell::sync::Lazy;
use regex::Regex;
use terms::{COUNTRIES, DIRECTIONALS, STATES, STREET_SUFFIXES, UNIT_DESIGNATORS};
use v2fhir_models::{Address, AddressUse};

/// US ZIP, ZIP+4, or a hyphenated Canadian postal code.
static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{5}$|^\d{5}-\d{4}$|^[A-Za-z]\d[A-Za-z]-\d[A-Za-z]\d$")
        .expect("postal code pattern is valid")
});

/// First half of a space-separated Canadian postal code (`K1A`).
static CA_POSTAL_FIRST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]\d[A-Za-z]$").expect("postal code pattern is valid"));

/// Second half of a space-separated Canadian postal code (`0B1`).
static CA_POSTAL_SECOND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d[A-Za-z]\d$").expect("postal code pattern is valid"));

/// Longest state or province name, in words.
const MAX_STATE_WORDS: usize = 3;

/// Converts `AD`/`XAD` composites and free-text primitives to [`Address`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressParser;

impl DatatypeParser for AddressParser {
    type Output = Address;

    fn convert(&self, value: &V2Type) -> Option<Address> {
        let addr = match adjust(value)? {
            V2Type::Primitive(p) => parse_text(p.value.as_deref()?)?,
            V2Type::Composite(c) if matches!(c.tag, V2Tag::AD | V2Tag::XAD) => {
                parse_components(&c.components)
            }
            _ => return None,
        };
        (!addr.is_empty()).then_some(addr)
    }
}

/// Maps an address type code (table 0190) to a FHIR address use.
///
/// Only business, billing, current and home addresses have a FHIR use; permanent,
/// mailing, legal, birth, shipping and other types map to `None`.
pub fn address_use(code: &str) -> Option<AddressUse> {
    match code.trim().to_ascii_uppercase().as_str() {
        "B" | "O" => Some(AddressUse::Work),
        "BI" => Some(AddressUse::Billing),
        "C" => Some(AddressUse::Temp),
        "H" => Some(AddressUse::Home),
        _ => None,
    }
}

/// Positional mapping of an `AD`/`XAD` composite.
pub fn parse_components(components: &[V2Type]) -> Address {
    Address::default()
        .with_line(string_at(components, 0))
        .with_line(text_at(components, 1))
        .with_city(text_at(components, 2))
        .with_state(text_at(components, 3))
        .with_postal_code(text_at(components, 4))
        .with_country(text_at(components, 5))
        .with_use(text_at(components, 6).and_then(|code| address_use(&code)))
        .with_district(text_at(components, 8))
}

/// Decomposes a free-text address. The input is kept verbatim as the address text.
pub fn parse_text(text: &str) -> Option<Address> {
    if text.trim().is_empty() {
        return None;
    }

    let mut lines: Vec<String> = text
        .split(['\n', '\r'])
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() == 1 {
        lines = lines[0].split(',').map(|p| p.trim().to_string()).collect();
    }

    let mut addr = Address::default().with_text(Some(text.to_string()));
    let mut unclassified: Option<&str> = None;

    for part in lines.iter().map(String::as_str).filter(|p| !p.is_empty()) {
        if addr.line.is_empty() {
            addr = addr.with_line(Some(part.to_string()));
        } else if is_address_line(part) {
            addr = addr.with_line(Some(part.to_string()));
        } else if addr.country.is_none() && COUNTRIES.contains(part.to_uppercase().as_str()) {
            addr = addr.with_country(Some(part.to_string()));
        } else if addr.postal_code.is_none() {
            let found = city_state_postal(part);
            if found.is_empty() {
                unclassified = Some(part);
                continue;
            }
            let city = found.city.or_else(|| unclassified.map(str::to_string));
            addr = addr
                .with_postal_code(found.postal_code)
                .with_state(found.state)
                .with_city(city);
        }
    }
    Some(addr)
}

#[derive(Debug, Default)]
struct CityStatePostal {
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
}

impl CityStatePostal {
    fn is_empty(&self) -> bool {
        self.state.is_none() && self.postal_code.is_none()
    }
}

/// Pulls a postal code and a state out of `part`; what remains is the city.
fn city_state_postal(part: &str) -> CityStatePostal {
    let mut tokens: Vec<&str> = part
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    let postal_code = take_postal_code(&mut tokens);
    let state = take_state(&mut tokens);
    let city = if postal_code.is_some() || state.is_some() {
        Some(tokens.join(" ")).filter(|c| !c.is_empty())
    } else {
        None
    };
    CityStatePostal {
        city,
        state,
        postal_code,
    }
}

fn take_postal_code(tokens: &mut Vec<&str>) -> Option<String> {
    for i in 0..tokens.len() {
        if POSTAL_CODE.is_match(tokens[i]) {
            return Some(tokens.remove(i).to_string());
        }
        let pair = tokens.get(i + 1).copied().filter(|second| {
            CA_POSTAL_FIRST.is_match(tokens[i]) && CA_POSTAL_SECOND.is_match(second)
        });
        if let Some(second) = pair {
            let first = tokens[i];
            tokens.drain(i..=i + 1);
            return Some(format!("{first} {second}"));
        }
    }
    None
}

/// Removes the right-most state name, preferring the longest multi-word match.
fn take_state(tokens: &mut Vec<&str>) -> Option<String> {
    for end in (0..tokens.len()).rev() {
        for words in (1..=MAX_STATE_WORDS.min(end + 1)).rev() {
            let start = end + 1 - words;
            let candidate = tokens[start..=end].join(" ");
            if STATES.contains(candidate.to_uppercase().as_str()) {
                tokens.drain(start..=end);
                return Some(candidate);
            }
        }
    }
    None
}

fn is_address_line(part: &str) -> bool {
    let upper = part.to_uppercase();
    if STREET_SUFFIXES.contains(upper.as_str())
        || DIRECTIONALS.contains(upper.as_str())
        || UNIT_DESIGNATORS.contains(upper.as_str())
    {
        return true;
    }

    let tokens: Vec<&str> = upper
        .split_whitespace()
        .map(|t| t.trim_end_matches(['.', ',']))
        .collect();
    let leading = match tokens.as_slice() {
        // "Apt 4B", "Suite 200", "Unit B"
        [first, second, ..] if UNIT_DESIGNATORS.contains(*first) => {
            second.len() == 1 || second.bytes().any(|b| b.is_ascii_digit())
        }
        // "200 Oak Ave", "12 Elm St NW"
        [first, .., last] if first.starts_with(|c: char| c.is_ascii_digit()) => {
            STREET_SUFFIXES.contains(*last) || DIRECTIONALS.contains(*last)
        }
        _ => false,
    };
    if leading {
        return true;
    }

    // "Fort Worth TX 76101" names a place even though FORT is a street suffix.
    if !city_state_postal(part).is_empty() {
        return false;
    }
    // "PO Box 12", "North Building"
    tokens
        .iter()
        .skip(1)
        .any(|t| STREET_SUFFIXES.contains(*t) || UNIT_DESIGNATORS.contains(*t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_codes() {
        assert_eq!(address_use("h"), Some(AddressUse::Home));
        assert_eq!(address_use("O"), Some(AddressUse::Work));
        assert_eq!(address_use("BI"), Some(AddressUse::Billing));
        assert_eq!(address_use("C"), Some(AddressUse::Temp));
        assert_eq!(address_use("M"), None);
        assert_eq!(address_use("P"), None);
    }

    #[test]
    fn canadian_postal_code_pair() {
        let mut tokens = vec!["Ottawa", "ON", "K1A", "0B1"];
        assert_eq!(take_postal_code(&mut tokens).as_deref(), Some("K1A 0B1"));
        assert_eq!(tokens, vec!["Ottawa", "ON"]);
    }

    #[test]
    fn multi_word_states() {
        let mut tokens = vec!["Albany", "New", "York"];
        assert_eq!(take_state(&mut tokens).as_deref(), Some("New York"));
        assert_eq!(tokens, vec!["Albany"]);

        let mut tokens = vec!["Washington", "DC"];
        assert_eq!(take_state(&mut tokens).as_deref(), Some("DC"));
    }

    #[test]
    fn address_line_classification() {
        assert!(is_address_line("Apt 4B"));
        assert!(is_address_line("Suite 200"));
        assert!(is_address_line("200 Oak Ave."));
        assert!(is_address_line("REAR"));
        assert!(is_address_line("PO Box 12"));
        assert!(is_address_line("North Building"));
        assert!(is_address_line("Rear Lobby"));
        assert!(!is_address_line("Key West"));
        assert!(!is_address_line("Key West FL 33040"));
        assert!(!is_address_line("Fort Worth TX 76101"));
        assert!(!is_address_line("Virginia Beach, VA"));
        assert!(!is_address_line("IL 62704"));
    }
}
