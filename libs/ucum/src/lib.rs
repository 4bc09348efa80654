#![forbid(unsafe_code)]

mod error;
mod units;

#[cfg(feature = "ucum-fhir")]
pub mod fhir;

pub use error::{Error, Result};
pub use units::{resolve, Unit};

/// Canonical URI of the UCUM code system.
pub const UCUM_SYSTEM: &str = "http://unitsofmeasure.org";
