//! FHIR complex datatypes
//!
//! Plain value types with FHIR JSON field names. No validation - just data representation.
//! Every type offers `is_empty()` so producers can collapse results that carry nothing.
//!
//! The `with_*` methods are "set if present" combinators: a `None` or blank argument
//! leaves the field untouched, so optional source fields can be folded into a value
//! without branching at every call site.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns the string if it carries any non-whitespace text.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn set_if_present(slot: &mut Option<String>, value: Option<String>) {
    if let Some(v) = present(value) {
        *slot = Some(v);
    }
}

/// Coding - a reference to a code defined by a terminology system
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Coding {
    pub fn new(system: Option<String>, code: Option<String>, display: Option<String>) -> Self {
        Self::default()
            .with_system(system)
            .with_code(code)
            .with_display(display)
    }

    pub fn with_system(mut self, system: Option<String>) -> Self {
        set_if_present(&mut self.system, system);
        self
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        set_if_present(&mut self.version, version);
        self
    }

    pub fn with_code(mut self, code: Option<String>) -> Self {
        set_if_present(&mut self.code, code);
        self
    }

    pub fn with_display(mut self, display: Option<String>) -> Self {
        set_if_present(&mut self.display, display);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.system.is_none() && self.version.is_none() && self.code.is_none() && self.display.is_none()
    }
}

/// CodeableConcept - a set of codings plus optional free text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CodeableConcept {
    /// Appends the coding unless it is empty.
    pub fn with_coding(mut self, coding: Option<Coding>) -> Self {
        if let Some(c) = coding.filter(|c| !c.is_empty()) {
            self.coding.push(c);
        }
        self
    }

    pub fn with_text(mut self, text: Option<String>) -> Self {
        set_if_present(&mut self.text, text);
        self
    }

    pub fn first_coding(&self) -> Option<&Coding> {
        self.coding.first()
    }

    pub fn is_empty(&self) -> bool {
        self.coding.is_empty() && self.text.is_none()
    }
}

/// Identifier - a business identifier with its namespace
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Identifier {
    pub fn with_value(mut self, value: Option<String>) -> Self {
        set_if_present(&mut self.value, value);
        self
    }

    pub fn with_system(mut self, system: Option<String>) -> Self {
        set_if_present(&mut self.system, system);
        self
    }

    pub fn with_type(mut self, type_: Option<CodeableConcept>) -> Self {
        if let Some(t) = type_.filter(|t| !t.is_empty()) {
            self.type_ = Some(t);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.type_.is_none() && self.system.is_none() && self.value.is_none()
    }
}

/// Quantity - a measured amount
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Quantity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Quantity {
    pub fn with_value(mut self, value: Option<Decimal>) -> Self {
        if value.is_some() {
            self.value = value;
        }
        self
    }

    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        set_if_present(&mut self.unit, unit);
        self
    }

    pub fn with_system(mut self, system: Option<String>) -> Self {
        set_if_present(&mut self.system, system);
        self
    }

    pub fn with_code(mut self, code: Option<String>) -> Self {
        set_if_present(&mut self.code, code);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.unit.is_none() && self.system.is_none() && self.code.is_none()
    }
}

/// Address use (home | work | temp | old | billing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressUse {
    Home,
    Work,
    Temp,
    Old,
    Billing,
}

/// Address - a postal address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<AddressUse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    pub fn with_line(mut self, line: Option<String>) -> Self {
        if let Some(l) = present(line) {
            self.line.push(l);
        }
        self
    }

    pub fn with_text(mut self, text: Option<String>) -> Self {
        set_if_present(&mut self.text, text);
        self
    }

    pub fn with_city(mut self, city: Option<String>) -> Self {
        set_if_present(&mut self.city, city);
        self
    }

    pub fn with_district(mut self, district: Option<String>) -> Self {
        set_if_present(&mut self.district, district);
        self
    }

    pub fn with_state(mut self, state: Option<String>) -> Self {
        set_if_present(&mut self.state, state);
        self
    }

    pub fn with_postal_code(mut self, postal_code: Option<String>) -> Self {
        set_if_present(&mut self.postal_code, postal_code);
        self
    }

    pub fn with_country(mut self, country: Option<String>) -> Self {
        set_if_present(&mut self.country, country);
        self
    }

    pub fn with_use(mut self, use_: Option<AddressUse>) -> Self {
        if use_.is_some() {
            self.use_ = use_;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.use_.is_none()
            && self.text.is_none()
            && self.line.is_empty()
            && self.city.is_none()
            && self.district.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
    }
}

/// Contact point system (phone | fax | email | pager | url | sms | other)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPointSystem {
    Phone,
    Fax,
    Email,
    Pager,
    Url,
    Sms,
    Other,
}

/// Contact point use (home | work | temp | old | mobile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPointUse {
    Home,
    Work,
    Temp,
    Old,
    Mobile,
}

/// Contact point (phone, email, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<ContactPointSystem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<ContactPointUse>,
}

impl ContactPoint {
    pub fn is_empty(&self) -> bool {
        self.system.is_none() && self.value.is_none() && self.use_.is_none()
    }
}

/// Name use (usual | official | temp | nickname | anonymous | old | maiden)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameUse {
    Usual,
    Official,
    Temp,
    Nickname,
    Anonymous,
    Old,
    Maiden,
}

/// HumanName - a person's name with its parts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HumanName {
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<NameUse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suffix: Vec<String>,
}

impl HumanName {
    pub fn is_empty(&self) -> bool {
        self.use_.is_none()
            && self.text.is_none()
            && self.family.is_none()
            && self.given.is_empty()
            && self.prefix.is_empty()
            && self.suffix.is_empty()
    }
}
