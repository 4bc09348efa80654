//! Well-known code system URIs

use crate::tables::{TABLE_0203, TABLE_0301};

/// Prefix of every HL7 V2 table code system.
pub const V2_TABLE_PREFIX: &str = "http://terminology.hl7.org/CodeSystem/v2-";

/// HL7 table 0203 (identifier type).
pub const IDENTIFIER_TYPE: &str = "http://terminology.hl7.org/CodeSystem/v2-0203";
/// HL7 table 0301 (universal ID type).
pub const ID_TYPE: &str = "http://terminology.hl7.org/CodeSystem/v2-0301";
/// Code system for codes that are themselves URIs.
pub const IETF: &str = "urn:ietf:rfc:3986";

pub const UCUM: &str = v2fhir_ucum::UCUM_SYSTEM;
pub const LOINC: &str = "http://loinc.org";
pub const SNOMED: &str = "http://snomed.info/sct";
pub const CVX: &str = "http://hl7.org/fhir/sid/cvx";
pub const MVX: &str = "http://hl7.org/fhir/sid/mvx";
pub const NDC: &str = "http://hl7.org/fhir/sid/ndc";
pub const RXNORM: &str = "http://www.nlm.nih.gov/research/umls/rxnorm";
pub const ICD9CM: &str = "http://hl7.org/fhir/sid/icd-9-cm";
pub const ICD10CM: &str = "http://hl7.org/fhir/sid/icd-10-cm";
pub const CPT: &str = "http://www.ama-assn.org/go/cpt";
pub const NPI: &str = "http://hl7.org/fhir/sid/us-npi";
pub const SSN: &str = "http://hl7.org/fhir/sid/us-ssn";

/// URI of HL7 V2 table `nnnn` (zero padded to four digits).
pub fn v2_table(table: &str) -> String {
    format!("{V2_TABLE_PREFIX}{table:0>4}")
}

/// Table number of a V2 table URI, e.g. `0203` for `.../v2-0203`.
pub fn v2_table_number(uri: &str) -> Option<&str> {
    uri.strip_prefix(V2_TABLE_PREFIX)
}

/// Whether `code` is a universal ID type (table 0301).
pub fn is_id_type(code: &str) -> bool {
    TABLE_0301.contains_key(code)
}

/// Whether `code` is an identifier type (table 0203).
pub fn is_identifier_type(code: &str) -> bool {
    TABLE_0203.contains_key(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_uris_are_padded() {
        assert_eq!(v2_table("203"), IDENTIFIER_TYPE);
        assert_eq!(v2_table("0301"), ID_TYPE);
        assert_eq!(v2_table_number(IDENTIFIER_TYPE), Some("0203"));
    }

    #[test]
    fn type_dictionaries_are_distinct() {
        assert!(is_id_type("ISO"));
        assert!(!is_identifier_type("ISO"));
        assert!(is_identifier_type("MR"));
        assert!(!is_id_type("MR"));
    }
}
