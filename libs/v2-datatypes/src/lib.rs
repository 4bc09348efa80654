//! V2 to FHIR datatype conversion engine
//!
//! Maps field values of a parsed HL7 V2 message (primitive and composite V2 datatypes)
//! to FHIR datatypes: codings, identifiers, quantities, names, addresses, contact
//! points and temporal values.
//!
//! # Architecture Overview
//!
//! ```text
//! DatatypeConverter::convert(FhirType, &V2Type)
//!      |
//!   adapter::adjust (unwrap Varies)
//!      |
//!   coding | identifier | temporal | quantity | address | name | contact
//!      |
//!   v2fhir_terminology::Lookup (system URIs, displays, units)
//! ```
//!
//! Conversions never fail on bad data. They return `None` and log through `tracing`.
//! The only error is asking for a FHIR type the engine does not produce.
//!
//! # Example
//!
//! ```rust
//! use v2fhir_datatypes::{DatatypeConverter, V2Tag, V2Type};
//!
//! let cwe = V2Type::composite(
//!     V2Tag::CWE,
//!     [
//!         V2Type::primitive(V2Tag::ST, "8480-6"),
//!         V2Type::primitive(V2Tag::ST, "Systolic blood pressure"),
//!         V2Type::primitive(V2Tag::ST, "LN"),
//!     ],
//! );
//!
//! let converter = DatatypeConverter::default();
//! let coding = converter.to_coding(&cwe, None).unwrap();
//! assert_eq!(coding.system.as_deref(), Some("http://loinc.org"));
//! assert_eq!(coding.code.as_deref(), Some("8480-6"));
//! ```

pub mod adapter;
pub mod address;
pub mod coding;
pub mod contact;
pub mod dispatch;
pub mod error;
pub mod identifier;
pub mod name;
pub mod numeric;
pub mod parser;
pub mod quantity;
pub mod temporal;
pub mod v2;

// Re-export main types
pub use address::AddressParser;
pub use contact::ContactPointParser;
pub use dispatch::{ConvertOptions, DatatypeConverter, FhirType, FhirValue};
pub use error::{Error, Result, TimestampError};
pub use name::NameParser;
pub use numeric::{cast_numeric, Numeric, NumericKind};
pub use parser::DatatypeParser;
pub use temporal::{parse_instant, parse_time, remove_iso_punct, TemporalKind};
pub use v2::{V2Tag, V2Type};
