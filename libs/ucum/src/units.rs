//! Unit table used to canonicalize free-text unit tokens.
//!
//! Tokens are matched case-sensitively against UCUM codes first, then case-insensitively
//! against the spellings commonly found in V2 messages (`MG`, `LBS`, `YEARS`, `mmHg`, ...).

use crate::error::{Error, Result};
use phf::phf_map;

/// A resolved UCUM unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub code: &'static str,
    pub display: &'static str,
}

/// UCUM code -> display name.
static UNITS: phf::Map<&'static str, &'static str> = phf_map! {
    "%" => "percent",
    "1" => "unity",
    "/min" => "per minute",
    "Cel" => "degree Celsius",
    "[degF]" => "degree Fahrenheit",
    "[in_i]" => "inch",
    "[ft_i]" => "foot",
    "[lb_av]" => "pound",
    "[oz_av]" => "ounce",
    "[IU]" => "international unit",
    "[iU]" => "international unit",
    "[drp]" => "drop",
    "U" => "unit",
    "a" => "year",
    "mo" => "month",
    "wk" => "week",
    "d" => "day",
    "h" => "hour",
    "min" => "minute",
    "s" => "second",
    "ms" => "millisecond",
    "g" => "gram",
    "kg" => "kilogram",
    "mg" => "milligram",
    "ug" => "microgram",
    "ng" => "nanogram",
    "L" => "liter",
    "dL" => "deciliter",
    "mL" => "milliliter",
    "uL" => "microliter",
    "m" => "meter",
    "cm" => "centimeter",
    "mm" => "millimeter",
    "kg/m2" => "kilogram per square meter",
    "mg/dL" => "milligram per deciliter",
    "g/dL" => "gram per deciliter",
    "mg/L" => "milligram per liter",
    "ng/mL" => "nanogram per milliliter",
    "mmol/L" => "millimole per liter",
    "umol/L" => "micromole per liter",
    "meq/L" => "milliequivalent per liter",
    "mm[Hg]" => "millimeter of mercury",
    "mL/min" => "milliliter per minute",
    "mL/h" => "milliliter per hour",
    "mg/kg" => "milligram per kilogram",
    "10*3/uL" => "thousand per microliter",
    "10*6/uL" => "million per microliter",
};

/// Upper-cased V2 spelling -> UCUM code.
static ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "PERCENT" => "%",
    "PCT" => "%",
    "BPM" => "/min",
    "/MIN" => "/min",
    "CEL" => "Cel",
    "DEGC" => "Cel",
    "[DEGF]" => "[degF]",
    "DEGF" => "[degF]",
    "[IN_I]" => "[in_i]",
    "IN" => "[in_i]",
    "INCH" => "[in_i]",
    "INCHES" => "[in_i]",
    "[FT_I]" => "[ft_i]",
    "FT" => "[ft_i]",
    "FOOT" => "[ft_i]",
    "FEET" => "[ft_i]",
    "[LB_AV]" => "[lb_av]",
    "LB" => "[lb_av]",
    "LBS" => "[lb_av]",
    "POUND" => "[lb_av]",
    "POUNDS" => "[lb_av]",
    "[OZ_AV]" => "[oz_av]",
    "OZ" => "[oz_av]",
    "[IU]" => "[IU]",
    "IU" => "[IU]",
    "[DRP]" => "[drp]",
    "DROP" => "[drp]",
    "DROPS" => "[drp]",
    "U" => "U",
    "UNIT" => "U",
    "UNITS" => "U",
    "A" => "a",
    "YR" => "a",
    "YRS" => "a",
    "YEAR" => "a",
    "YEARS" => "a",
    "MO" => "mo",
    "MON" => "mo",
    "MONTH" => "mo",
    "MONTHS" => "mo",
    "WK" => "wk",
    "WEEK" => "wk",
    "WEEKS" => "wk",
    "D" => "d",
    "DAY" => "d",
    "DAYS" => "d",
    "H" => "h",
    "HR" => "h",
    "HRS" => "h",
    "HOUR" => "h",
    "HOURS" => "h",
    "MIN" => "min",
    "MINUTE" => "min",
    "MINUTES" => "min",
    "S" => "s",
    "SEC" => "s",
    "SECOND" => "s",
    "SECONDS" => "s",
    "MS" => "ms",
    "G" => "g",
    "GM" => "g",
    "GRAM" => "g",
    "GRAMS" => "g",
    "KG" => "kg",
    "KILOGRAM" => "kg",
    "KILOGRAMS" => "kg",
    "MG" => "mg",
    "UG" => "ug",
    "MCG" => "ug",
    "NG" => "ng",
    "L" => "L",
    "LITER" => "L",
    "LITERS" => "L",
    "DL" => "dL",
    "ML" => "mL",
    "CC" => "mL",
    "UL" => "uL",
    "M" => "m",
    "CM" => "cm",
    "MM" => "mm",
    "KG/M2" => "kg/m2",
    "MG/DL" => "mg/dL",
    "G/DL" => "g/dL",
    "MG/L" => "mg/L",
    "NG/ML" => "ng/mL",
    "MMOL/L" => "mmol/L",
    "UMOL/L" => "umol/L",
    "MEQ/L" => "meq/L",
    "MM[HG]" => "mm[Hg]",
    "MMHG" => "mm[Hg]",
    "ML/MIN" => "mL/min",
    "ML/H" => "mL/h",
    "ML/HR" => "mL/h",
    "MG/KG" => "mg/kg",
    "10*3/UL" => "10*3/uL",
    "10*6/UL" => "10*6/uL",
};

/// Resolves a unit token to its UCUM code and display name.
pub fn resolve(token: &str) -> Result<Unit> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::Empty);
    }
    if !token.is_ascii() {
        return Err(Error::NonAscii);
    }
    if token.chars().any(char::is_whitespace) {
        return Err(Error::ContainsWhitespace);
    }

    let code = if UNITS.contains_key(token) {
        token
    } else {
        ALIASES
            .get(token.to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| Error::UnknownUnit(token.to_string()))?
    };

    UNITS
        .get_entry(code)
        .map(|(code, display)| Unit { code, display })
        .ok_or_else(|| Error::UnknownUnit(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alias_targets_a_known_unit() {
        for (alias, code) in ALIASES.entries() {
            assert!(UNITS.contains_key(code), "alias {alias} -> unknown {code}");
        }
    }

    #[test]
    fn exact_code_is_case_sensitive() {
        assert_eq!(resolve("mo").unwrap().display, "month");
        assert_eq!(resolve("ms").unwrap().display, "millisecond");
        assert_eq!(resolve("MS").unwrap().code, "ms");
    }
}
