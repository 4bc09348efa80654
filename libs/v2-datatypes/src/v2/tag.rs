use std::fmt;
use std::str::FromStr;

/// V2 datatype names read by the converter.
///
/// Tags outside this set parse to [`V2Tag::Unknown`] and are never mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum V2Tag {
    /// Address
    AD,
    /// Coded element
    CE,
    /// Coded element with formatted values
    CF,
    /// Coded with no exceptions
    CNE,
    /// Composite ID number and name simplified
    CNN,
    /// Composite quantity with units
    CQ,
    /// Coded with exceptions
    CWE,
    /// Extended composite ID with check digit
    CX,
    /// Date
    DT,
    /// Date/time
    DTM,
    /// Entity identifier
    EI,
    /// Entity identifier pair
    EIP,
    /// Error location
    ERL,
    /// Family name
    FN,
    /// Formatted text
    FT,
    /// Hierarchic designator
    HD,
    /// Coded value for HL7 tables
    ID,
    /// Coded value for user-defined tables
    IS,
    /// Message type
    MSG,
    /// Numeric
    NM,
    /// Person name
    PN,
    /// Street address
    SAD,
    /// Sequence ID
    SI,
    /// String data
    ST,
    /// Time
    TM,
    /// Time stamp
    TS,
    /// Text data
    TX,
    /// Extended address
    XAD,
    /// Extended composite ID number and name for persons
    XCN,
    /// Extended composite name and identification number for organizations
    XON,
    /// Extended person name
    XPN,
    /// Extended telecommunication number
    XTN,
    Unknown,
}

impl V2Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            V2Tag::AD => "AD",
            V2Tag::CE => "CE",
            V2Tag::CF => "CF",
            V2Tag::CNE => "CNE",
            V2Tag::CNN => "CNN",
            V2Tag::CQ => "CQ",
            V2Tag::CWE => "CWE",
            V2Tag::CX => "CX",
            V2Tag::DT => "DT",
            V2Tag::DTM => "DTM",
            V2Tag::EI => "EI",
            V2Tag::EIP => "EIP",
            V2Tag::ERL => "ERL",
            V2Tag::FN => "FN",
            V2Tag::FT => "FT",
            V2Tag::HD => "HD",
            V2Tag::ID => "ID",
            V2Tag::IS => "IS",
            V2Tag::MSG => "MSG",
            V2Tag::NM => "NM",
            V2Tag::PN => "PN",
            V2Tag::SAD => "SAD",
            V2Tag::SI => "SI",
            V2Tag::ST => "ST",
            V2Tag::TM => "TM",
            V2Tag::TS => "TS",
            V2Tag::TX => "TX",
            V2Tag::XAD => "XAD",
            V2Tag::XCN => "XCN",
            V2Tag::XON => "XON",
            V2Tag::XPN => "XPN",
            V2Tag::XTN => "XTN",
            V2Tag::Unknown => "UNKNOWN",
        }
    }

    /// The coded-element family, which shares one component layout.
    pub fn is_coded_element(&self) -> bool {
        matches!(self, V2Tag::CE | V2Tag::CF | V2Tag::CNE | V2Tag::CWE)
    }
}

impl FromStr for V2Tag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "AD" => V2Tag::AD,
            "CE" => V2Tag::CE,
            "CF" => V2Tag::CF,
            "CNE" => V2Tag::CNE,
            "CNN" => V2Tag::CNN,
            "CQ" => V2Tag::CQ,
            "CWE" => V2Tag::CWE,
            "CX" => V2Tag::CX,
            "DT" => V2Tag::DT,
            "DTM" => V2Tag::DTM,
            "EI" => V2Tag::EI,
            "EIP" => V2Tag::EIP,
            "ERL" => V2Tag::ERL,
            "FN" => V2Tag::FN,
            "FT" => V2Tag::FT,
            "HD" => V2Tag::HD,
            "ID" => V2Tag::ID,
            "IS" => V2Tag::IS,
            "MSG" => V2Tag::MSG,
            "NM" => V2Tag::NM,
            "PN" => V2Tag::PN,
            "SAD" => V2Tag::SAD,
            "SI" => V2Tag::SI,
            "ST" => V2Tag::ST,
            "TM" => V2Tag::TM,
            "TS" => V2Tag::TS,
            "TX" => V2Tag::TX,
            "XAD" => V2Tag::XAD,
            "XCN" => V2Tag::XCN,
            "XON" => V2Tag::XON,
            "XPN" => V2Tag::XPN,
            "XTN" => V2Tag::XTN,
            _ => V2Tag::Unknown,
        })
    }
}

impl fmt::Display for V2Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_and_unknown_tags() {
        assert_eq!("cwe".parse::<V2Tag>().unwrap(), V2Tag::CWE);
        assert_eq!("XAD".parse::<V2Tag>().unwrap(), V2Tag::XAD);
        assert_eq!("ZZZ".parse::<V2Tag>().unwrap(), V2Tag::Unknown);
    }

    #[test]
    fn coded_element_family() {
        assert!(V2Tag::CNE.is_coded_element());
        assert!(!V2Tag::CX.is_coded_element());
    }
}
