use crate::v2::V2Type;

/// A heuristic converter from one V2 value to one FHIR datatype.
///
/// Implementations dispatch on primitive (free text) versus composite (structured)
/// input and return `None` when nothing could be extracted.
pub trait DatatypeParser {
    type Output;

    fn convert(&self, value: &V2Type) -> Option<Self::Output>;
}
