//! Version-agnostic FHIR datatypes
//!
//! Types that work across FHIR R4, R4B, and R5

pub mod complex;
pub mod temporal;

// Re-export commonly used types
pub use complex::*;
pub use temporal::*;
