//! Dispatcher: routes a requested FHIR type to the parser that produces it.

use crate::address::AddressParser;
use crate::adapter::adjust;
use crate::coding::{
    to_code, to_codeable_concept, to_coding, to_coding_from_message_code,
    to_coding_from_message_structure, to_coding_from_trigger_event,
};
use crate::contact::ContactPointParser;
use crate::error::{Error, Result};
use crate::identifier::to_identifier;
use crate::name::NameParser;
use crate::numeric::{cast_numeric, Numeric, NumericKind};
use crate::parser::DatatypeParser;
use crate::quantity::{to_quantity, to_quantity_length_of_stay};
use crate::temporal::{cast_date_time, to_instant, to_time, TemporalKind};
use crate::v2::{V2Tag, V2Type};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use v2fhir_models::{
    Address, CodeableConcept, Coding, ContactPoint, FhirTime, HumanName, Identifier, Quantity,
    TemporalValue,
};
use v2fhir_terminology::{Lookup, StaticLookup};

/// FHIR datatypes the converter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FhirType {
    Address,
    CodeableConcept,
    Code,
    Coding,
    ContactPoint,
    DateTime,
    Date,
    Decimal,
    HumanName,
    Identifier,
    Id,
    Instant,
    Integer,
    PositiveInt,
    Quantity,
    String,
    Time,
    UnsignedInt,
    Uri,
}

impl FhirType {
    pub const ALL: [FhirType; 19] = [
        FhirType::Address,
        FhirType::CodeableConcept,
        FhirType::Code,
        FhirType::Coding,
        FhirType::ContactPoint,
        FhirType::DateTime,
        FhirType::Date,
        FhirType::Decimal,
        FhirType::HumanName,
        FhirType::Identifier,
        FhirType::Id,
        FhirType::Instant,
        FhirType::Integer,
        FhirType::PositiveInt,
        FhirType::Quantity,
        FhirType::String,
        FhirType::Time,
        FhirType::UnsignedInt,
        FhirType::Uri,
    ];

    /// FHIR type name (`dateTime`, `CodeableConcept`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            FhirType::Address => "Address",
            FhirType::CodeableConcept => "CodeableConcept",
            FhirType::Code => "code",
            FhirType::Coding => "Coding",
            FhirType::ContactPoint => "ContactPoint",
            FhirType::DateTime => "dateTime",
            FhirType::Date => "date",
            FhirType::Decimal => "decimal",
            FhirType::HumanName => "HumanName",
            FhirType::Identifier => "Identifier",
            FhirType::Id => "id",
            FhirType::Instant => "instant",
            FhirType::Integer => "integer",
            FhirType::PositiveInt => "positiveInt",
            FhirType::Quantity => "Quantity",
            FhirType::String => "string",
            FhirType::Time => "time",
            FhirType::UnsignedInt => "unsignedInt",
            FhirType::Uri => "uri",
        }
    }
}

impl FromStr for FhirType {
    type Err = Error;

    /// Accepts the FHIR name (`integer`, `Identifier`) and the class spelling
    /// (`IntegerType`), ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        let base = match name.len().checked_sub(4) {
            Some(n) if n > 0 && name.is_char_boundary(n) && name[n..].eq_ignore_ascii_case("type") => {
                &name[..n]
            }
            _ => name,
        };
        FhirType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(base))
            .ok_or_else(|| Error::UnsupportedType(s.to_string()))
    }
}

impl fmt::Display for FhirType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A converted value, tagged with its FHIR type.
#[derive(Debug, Clone, PartialEq)]
pub enum FhirValue {
    Address(Address),
    CodeableConcept(CodeableConcept),
    Code(String),
    Coding(Coding),
    ContactPoint(ContactPoint),
    DateTime(TemporalValue),
    Date(TemporalValue),
    Decimal(Decimal),
    HumanName(HumanName),
    Identifier(Identifier),
    Id(String),
    Instant(TemporalValue),
    Integer(i32),
    PositiveInt(u32),
    Quantity(Quantity),
    String(String),
    Time(FhirTime),
    UnsignedInt(u32),
    Uri(String),
}

impl FhirValue {
    pub fn fhir_type(&self) -> FhirType {
        match self {
            FhirValue::Address(_) => FhirType::Address,
            FhirValue::CodeableConcept(_) => FhirType::CodeableConcept,
            FhirValue::Code(_) => FhirType::Code,
            FhirValue::Coding(_) => FhirType::Coding,
            FhirValue::ContactPoint(_) => FhirType::ContactPoint,
            FhirValue::DateTime(_) => FhirType::DateTime,
            FhirValue::Date(_) => FhirType::Date,
            FhirValue::Decimal(_) => FhirType::Decimal,
            FhirValue::HumanName(_) => FhirType::HumanName,
            FhirValue::Identifier(_) => FhirType::Identifier,
            FhirValue::Id(_) => FhirType::Id,
            FhirValue::Instant(_) => FhirType::Instant,
            FhirValue::Integer(_) => FhirType::Integer,
            FhirValue::PositiveInt(_) => FhirType::PositiveInt,
            FhirValue::Quantity(_) => FhirType::Quantity,
            FhirValue::String(_) => FhirType::String,
            FhirValue::Time(_) => FhirType::Time,
            FhirValue::UnsignedInt(_) => FhirType::UnsignedInt,
            FhirValue::Uri(_) => FhirType::Uri,
        }
    }
}

/// Per-call conversion options.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Code system for `IS`/`ST`/`ID` values converted to coded types.
    pub table: Option<String>,
}

impl ConvertOptions {
    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
        }
    }
}

/// Entry point of the conversion engine.
///
/// Holds only the lookup services; every conversion is a pure function of its input,
/// so a converter can be shared across threads.
///
/// # Example
///
/// ```rust
/// use v2fhir_datatypes::{DatatypeConverter, FhirType, FhirValue, V2Tag, V2Type};
///
/// let converter = DatatypeConverter::default();
/// let value = V2Type::primitive(V2Tag::NM, "42.9");
/// assert_eq!(converter.convert(FhirType::Integer, &value), Some(FhirValue::Integer(42)));
/// ```
#[derive(Clone)]
pub struct DatatypeConverter {
    lookup: Arc<dyn Lookup>,
}

impl Default for DatatypeConverter {
    fn default() -> Self {
        Self::new(StaticLookup::shared())
    }
}

impl fmt::Debug for DatatypeConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatatypeConverter").finish_non_exhaustive()
    }
}

impl DatatypeConverter {
    pub fn new(lookup: Arc<dyn Lookup>) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &dyn Lookup {
        self.lookup.as_ref()
    }

    /// Converts `value` into `target`, or `None` when nothing usable was found.
    pub fn convert(&self, target: FhirType, value: &V2Type) -> Option<FhirValue> {
        self.convert_with(target, value, &ConvertOptions::default())
    }

    pub fn convert_with(
        &self,
        target: FhirType,
        value: &V2Type,
        options: &ConvertOptions,
    ) -> Option<FhirValue> {
        let table = options.table.as_deref();
        match target {
            FhirType::Address => self.to_address(value).map(FhirValue::Address),
            FhirType::CodeableConcept => self
                .to_codeable_concept(value, table)
                .map(FhirValue::CodeableConcept),
            FhirType::Code => self.to_code(value).map(FhirValue::Code),
            FhirType::Coding => self.to_coding(value, table).map(FhirValue::Coding),
            FhirType::ContactPoint => self.to_contact_point(value).map(FhirValue::ContactPoint),
            FhirType::DateTime => self.to_date_time(value).map(FhirValue::DateTime),
            FhirType::Date => self.to_date(value).map(FhirValue::Date),
            FhirType::Decimal => self.to_decimal(value).map(FhirValue::Decimal),
            FhirType::HumanName => self.to_human_name(value).map(FhirValue::HumanName),
            FhirType::Identifier => self.to_identifier(value).map(FhirValue::Identifier),
            FhirType::Id => self.to_id(value).map(FhirValue::Id),
            FhirType::Instant => self.to_instant(value).map(FhirValue::Instant),
            FhirType::Integer => self.to_integer(value).map(FhirValue::Integer),
            FhirType::PositiveInt => self.to_positive_int(value).map(FhirValue::PositiveInt),
            FhirType::Quantity => self.to_quantity(value).map(FhirValue::Quantity),
            FhirType::String => self.to_string(value).map(FhirValue::String),
            FhirType::Time => self.to_time(value).map(FhirValue::Time),
            FhirType::UnsignedInt => self.to_unsigned_int(value).map(FhirValue::UnsignedInt),
            FhirType::Uri => self.to_uri(value).map(FhirValue::Uri),
        }
    }

    /// [`convert`](Self::convert) with the target given by name.
    pub fn convert_named(&self, target: &str, value: &V2Type) -> Result<Option<FhirValue>> {
        let target = target.parse::<FhirType>()?;
        Ok(self.convert(target, value))
    }

    /// A reusable conversion function for one target type.
    pub fn converter(&self, target: FhirType) -> impl Fn(&V2Type) -> Option<FhirValue> + '_ {
        move |value| self.convert(target, value)
    }

    pub fn to_address(&self, value: &V2Type) -> Option<Address> {
        AddressParser.convert(value)
    }

    pub fn to_codeable_concept(&self, value: &V2Type, table: Option<&str>) -> Option<CodeableConcept> {
        to_codeable_concept(value, table, self.lookup())
    }

    pub fn to_code(&self, value: &V2Type) -> Option<String> {
        to_code(value, self.lookup())
    }

    pub fn to_coding(&self, value: &V2Type, table: Option<&str>) -> Option<Coding> {
        to_coding(value, table, self.lookup())
    }

    pub fn to_coding_from_message_code(&self, value: &V2Type) -> Option<Coding> {
        to_coding_from_message_code(value, self.lookup())
    }

    pub fn to_coding_from_trigger_event(&self, value: &V2Type) -> Option<Coding> {
        to_coding_from_trigger_event(value, self.lookup())
    }

    pub fn to_coding_from_message_structure(&self, value: &V2Type) -> Option<Coding> {
        to_coding_from_message_structure(value, self.lookup())
    }

    pub fn to_contact_point(&self, value: &V2Type) -> Option<ContactPoint> {
        ContactPointParser.convert(value)
    }

    pub fn to_date_time(&self, value: &V2Type) -> Option<TemporalValue> {
        to_instant(value).map(|v| cast_date_time(v, TemporalKind::DateTime))
    }

    pub fn to_date(&self, value: &V2Type) -> Option<TemporalValue> {
        to_instant(value).map(|v| cast_date_time(v, TemporalKind::Date))
    }

    /// Magnitude of the [`Quantity`] reading of `value`.
    pub fn to_decimal(&self, value: &V2Type) -> Option<Decimal> {
        self.to_quantity(value)?.value
    }

    pub fn to_human_name(&self, value: &V2Type) -> Option<HumanName> {
        NameParser.convert(value)
    }

    pub fn to_identifier(&self, value: &V2Type) -> Option<Identifier> {
        to_identifier(value, self.lookup())
    }

    pub fn to_id(&self, value: &V2Type) -> Option<String> {
        adjust(value)?
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn to_instant(&self, value: &V2Type) -> Option<TemporalValue> {
        to_instant(value).map(|v| cast_date_time(v, TemporalKind::Instant))
    }

    pub fn to_integer(&self, value: &V2Type) -> Option<i32> {
        match self.cast(value, NumericKind::Integer)? {
            Numeric::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Zero is accepted; negative values are rejected.
    pub fn to_positive_int(&self, value: &V2Type) -> Option<u32> {
        let integer = self.to_integer(value)?;
        match cast_numeric(Numeric::Integer(integer), NumericKind::PositiveInt)? {
            Numeric::PositiveInt(u) => Some(u),
            _ => None,
        }
    }

    pub fn to_unsigned_int(&self, value: &V2Type) -> Option<u32> {
        match self.cast(value, NumericKind::UnsignedInt)? {
            Numeric::UnsignedInt(u) => Some(u),
            _ => None,
        }
    }

    pub fn to_quantity(&self, value: &V2Type) -> Option<Quantity> {
        to_quantity(value, self.lookup())
    }

    /// Length of stay in days (`d`).
    pub fn to_quantity_length_of_stay(&self, value: &V2Type) -> Option<Quantity> {
        to_quantity_length_of_stay(value, self.lookup())
    }

    /// String rendering of `value`.
    ///
    /// Primitives give their value. Coded elements give their text, else the first
    /// display, else the first code. `CQ` gives `<value> <unit>` and `ERL` its
    /// encoded form. Other composites have no string rendering.
    pub fn to_string(&self, value: &V2Type) -> Option<String> {
        let s = match adjust(value)? {
            V2Type::Primitive(p) => p.value.clone(),
            V2Type::Composite(c) => match c.tag {
                tag if tag.is_coded_element() => {
                    let cc = self.to_codeable_concept(value, None)?;
                    cc.text.clone().or_else(|| {
                        let coding = cc.first_coding()?;
                        coding.display.clone().or_else(|| coding.code.clone())
                    })
                }
                V2Tag::CQ => {
                    let qt = self.to_quantity(value)?;
                    let parts: Vec<String> = qt
                        .value
                        .map(|v| v.to_string())
                        .into_iter()
                        .chain(qt.unit.or(qt.code))
                        .collect();
                    Some(parts.join(" "))
                }
                V2Tag::ERL => Some(value.encode()),
                _ => None,
            },
            V2Type::Varies(_) => None,
        };
        s.filter(|s| !s.is_empty())
    }

    pub fn to_time(&self, value: &V2Type) -> Option<FhirTime> {
        to_time(value)
    }

    /// Stripped primitive value, or the system an `HD` names.
    pub fn to_uri(&self, value: &V2Type) -> Option<String> {
        let value = adjust(value)?;
        match value {
            V2Type::Primitive(p) => p
                .value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            V2Type::Composite(c) if c.tag == V2Tag::HD => self.to_identifier(value)?.system,
            _ => None,
        }
    }

    fn cast(&self, value: &V2Type, to: NumericKind) -> Option<Numeric> {
        let decimal = self.to_decimal(value)?;
        cast_numeric(Numeric::Decimal(decimal), to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!("Identifier".parse::<FhirType>(), Ok(FhirType::Identifier));
        assert_eq!("integer".parse::<FhirType>(), Ok(FhirType::Integer));
        assert_eq!("IntegerType".parse::<FhirType>(), Ok(FhirType::Integer));
        assert_eq!("DateTimeType".parse::<FhirType>(), Ok(FhirType::DateTime));
        assert_eq!("dateTime".parse::<FhirType>(), Ok(FhirType::DateTime));
        assert_eq!("CodeType".parse::<FhirType>(), Ok(FhirType::Code));
        assert_eq!(
            "Reference".parse::<FhirType>(),
            Err(Error::UnsupportedType("Reference".to_string()))
        );
        assert!("Type".parse::<FhirType>().is_err());
    }

    #[test]
    fn names_round_trip() {
        for ty in FhirType::ALL {
            assert_eq!(ty.to_string().parse::<FhirType>(), Ok(ty));
        }
    }
}
