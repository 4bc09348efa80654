//! Terminology lookups for V2 to FHIR datatype conversion
//!
//! The datatype converter never hard-codes how a V2 coding-system name, HL7 table number
//! or OID becomes a FHIR system URI. It asks a [`Lookup`] instead:
//!
//! - `resolve_system`: `"LN"`, `"HL70203"`, `"2.16.840.1.113883.6.1"` -> canonical URI
//! - `display_for`: display text of a code in a table
//! - `unit_for`: free-text unit token -> UCUM coding
//!
//! [`StaticLookup`] answers from built-in tables and can be extended through its builder.
//! All lookups are total: `None` means "no mapping known".

pub mod provider;
pub mod static_lookup;
pub mod systems;
mod tables;

pub use provider::Lookup;
pub use static_lookup::{StaticLookup, StaticLookupBuilder};
