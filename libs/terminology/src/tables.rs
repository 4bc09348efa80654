//! Built-in lookup tables.
//!
//! Keys of the name tables are upper case; OIDs are stored without the `urn:oid:` prefix.

use crate::systems::*;
use phf::phf_map;

/// HL7 table 0396 coding-system names (and common local spellings) -> URI.
pub(crate) static NAMED_SYSTEMS: phf::Map<&'static str, &'static str> = phf_map! {
    "LN" => LOINC,
    "LOINC" => LOINC,
    "SCT" => SNOMED,
    "SNM" => SNOMED,
    "SNOMED" => SNOMED,
    "SNOMEDCT" => SNOMED,
    "CVX" => CVX,
    "HL70292" => CVX,
    "MVX" => MVX,
    "HL70227" => MVX,
    "NDC" => NDC,
    "RXNORM" => RXNORM,
    "RXN" => RXNORM,
    "I9" => ICD9CM,
    "I9C" => ICD9CM,
    "I9CDX" => ICD9CM,
    "ICD9" => ICD9CM,
    "I10" => ICD10CM,
    "I10C" => ICD10CM,
    "ICD10" => ICD10CM,
    "ICD10CM" => ICD10CM,
    "C4" => CPT,
    "CPT" => CPT,
    "UCUM" => UCUM,
    "NPI" => NPI,
    "SSN" => SSN,
};

/// OID -> URI.
pub(crate) static OID_SYSTEMS: phf::Map<&'static str, &'static str> = phf_map! {
    "2.16.840.1.113883.6.1" => LOINC,
    "2.16.840.1.113883.6.96" => SNOMED,
    "2.16.840.1.113883.12.292" => CVX,
    "2.16.840.1.113883.12.227" => MVX,
    "2.16.840.1.113883.6.69" => NDC,
    "2.16.840.1.113883.6.88" => RXNORM,
    "2.16.840.1.113883.6.103" => ICD9CM,
    "2.16.840.1.113883.6.90" => ICD10CM,
    "2.16.840.1.113883.6.12" => CPT,
    "2.16.840.1.113883.6.8" => UCUM,
    "2.16.840.1.113883.4.6" => NPI,
    "2.16.840.1.113883.4.1" => SSN,
};

/// Arc under which HL7 publishes the OIDs of its V2 tables.
pub(crate) const V2_TABLE_OID_ARC: &str = "2.16.840.1.113883.12.";

/// Canonical URIs that resolve to themselves.
pub(crate) static CANONICAL_SYSTEMS: phf::Set<&'static str> = phf::phf_set! {
    "http://loinc.org",
    "http://snomed.info/sct",
    "http://hl7.org/fhir/sid/cvx",
    "http://hl7.org/fhir/sid/mvx",
    "http://hl7.org/fhir/sid/ndc",
    "http://www.nlm.nih.gov/research/umls/rxnorm",
    "http://hl7.org/fhir/sid/icd-9-cm",
    "http://hl7.org/fhir/sid/icd-10-cm",
    "http://www.ama-assn.org/go/cpt",
    "http://unitsofmeasure.org",
    "http://hl7.org/fhir/sid/us-npi",
    "http://hl7.org/fhir/sid/us-ssn",
    "urn:ietf:rfc:3986",
};

/// Identifier type.
pub(crate) static TABLE_0203: phf::Map<&'static str, &'static str> = phf_map! {
    "AN" => "Account number",
    "BR" => "Birth registry number",
    "DL" => "Driver's license number",
    "DN" => "Doctor number",
    "DR" => "Donor Registration Number",
    "EI" => "Employee number",
    "EN" => "Employer number",
    "FI" => "Facility ID",
    "JHN" => "Jurisdictional health number (Canada)",
    "MA" => "Patient Medicaid number",
    "MC" => "Patient's Medicare number",
    "MD" => "Medical License number",
    "MR" => "Medical record number",
    "NI" => "National unique individual identifier",
    "NPI" => "National provider identifier",
    "PI" => "Patient internal identifier",
    "PN" => "Person number",
    "PPN" => "Passport number",
    "PRN" => "Provider number",
    "PT" => "Patient external identifier",
    "RRI" => "Regional registry ID",
    "SR" => "State registry ID",
    "SS" => "Social Security number",
    "TAX" => "Tax ID number",
    "U" => "Unspecified identifier",
    "VN" => "Visit number",
    "WC" => "WIC identifier",
    "XX" => "Organization identifier",
};

/// Universal ID type.
pub(crate) static TABLE_0301: phf::Map<&'static str, &'static str> = phf_map! {
    "CLIA" => "Clinical Laboratory Improvement Amendments",
    "CLIP" => "Clinical laboratory Improvement Program",
    "DNS" => "An Internet dotted name",
    "EUI64" => "IEEE 64-bit Extended Unique Identifier",
    "GUID" => "Same as UUID",
    "HCD" => "The CEN Healthcare Coding Scheme Designator",
    "HL7" => "Reserved for future HL7 registration schemes",
    "ISO" => "An International Standards Organization Object Identifier (OID)",
    "L" => "Local",
    "M" => "Local",
    "N" => "Local",
    "Random" => "Usually a base64 encoded string of random bits",
    "URI" => "Uniform Resource Identifier",
    "UUID" => "The DCE Universal Unique Identifier",
    "x400" => "An X.400 MHS identifier",
    "x500" => "An X.500 directory name",
};

/// Message type.
pub(crate) static TABLE_0076: phf::Map<&'static str, &'static str> = phf_map! {
    "ACK" => "General acknowledgment message",
    "ADT" => "ADT message",
    "DFT" => "Detailed financial transaction",
    "MDM" => "Medical document management",
    "OML" => "Laboratory order message",
    "ORM" => "Pharmacy/treatment order message",
    "ORU" => "Unsolicited transmission of an observation message",
    "QBP" => "Query by parameter",
    "RDE" => "Pharmacy/treatment encoded order message",
    "RSP" => "Segment pattern response",
    "SIU" => "Schedule information unsolicited",
    "VXU" => "Unsolicited vaccination record update",
};

/// Event type.
pub(crate) static TABLE_0003: phf::Map<&'static str, &'static str> = phf_map! {
    "A01" => "ADT/ACK - Admit/visit notification",
    "A03" => "ADT/ACK - Discharge/end visit",
    "A04" => "ADT/ACK - Register a patient",
    "A08" => "ADT/ACK - Update patient information",
    "A28" => "ADT/ACK - Add person information",
    "A31" => "ADT/ACK - Update person information",
    "K11" => "RSP - Segment pattern response in response to QBP^Q11",
    "O01" => "ORM - Order message",
    "Q11" => "QBP - Query by parameter requesting an RSP segment pattern response",
    "R01" => "ORU/ACK - Unsolicited transmission of an observation message",
    "V04" => "VXU - Unsolicited vaccination record update",
};

/// Message structure.
pub(crate) static TABLE_0354: phf::Map<&'static str, &'static str> = phf_map! {
    "ACK" => "Varies",
    "ADT_A01" => "A01, A04, A08, A13",
    "ADT_A03" => "A03",
    "ADT_A05" => "A05, A14, A28, A31",
    "ORM_O01" => "O01",
    "ORU_R01" => "R01",
    "QBP_Q11" => "Q11",
    "RSP_K11" => "K11",
    "VXU_V04" => "V04",
};

/// Display table for an HL7 table number.
pub(crate) fn v2_display_table(table: &str) -> Option<&'static phf::Map<&'static str, &'static str>> {
    match table {
        "0003" => Some(&TABLE_0003),
        "0076" => Some(&TABLE_0076),
        "0203" => Some(&TABLE_0203),
        "0301" => Some(&TABLE_0301),
        "0354" => Some(&TABLE_0354),
        _ => None,
    }
}
