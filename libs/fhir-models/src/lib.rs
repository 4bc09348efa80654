//! FHIR datatype models
//!
//! This crate provides the strongly-typed FHIR datatypes produced by the V2 datatype
//! converter: codings, identifiers, quantities, names, addresses, contact points and
//! temporal values.
//!
//! # Module Organization
//!
//! - `common`: Version-agnostic datatypes that work across FHIR R4, R4B, and R5
//!
//! # Design Philosophy
//!
//! - **Values, not aggregates**: every type is a plain immutable value built fresh per conversion
//! - **Never empty**: `is_empty()` lets producers collapse meaningless results to `None`
//! - **Serializable**: field names follow FHIR JSON (`postalCode`, `use`, ...)
//!
//! # Example
//!
//! ```rust
//! use v2fhir_models::common::{Coding, Identifier};
//!
//! let id = Identifier::default()
//!     .with_value(Some("12345-6".to_string()))
//!     .with_system(Some("urn:oid:2.16.840.1.113883.19".to_string()));
//!
//! assert!(!id.is_empty());
//! assert!(Coding::default().is_empty());
//! ```

pub mod common;

// Re-export commonly used types
pub use common::*;
