//! Precision-aware temporal values
//!
//! FHIR date, dateTime and instant values may be partial. A [`TemporalValue`] keeps the
//! wall-clock value together with the precision the source actually populated, so a
//! year-only source renders as `2020` and never as a full timestamp.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::{Serialize, Serializer};
use std::fmt;

/// How much of a temporal value was populated in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemporalPrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    Month,
    /// Full date (YYYY-MM-DD)
    Day,
    /// Date with hour and minute (YYYY-MM-DDThh:mm)
    Minute,
    /// Date with time to seconds (YYYY-MM-DDThh:mm:ss)
    Second,
    /// Full datetime with sub-second precision (YYYY-MM-DDThh:mm:ss.sss)
    Millisecond,
}

/// A date, dateTime or instant value at a known precision.
///
/// `value` is the wall-clock time in `offset` when an offset is known. Fields finer than
/// `precision` are zero (month and day default to 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalValue {
    pub value: NaiveDateTime,
    pub precision: TemporalPrecision,
    pub offset: Option<FixedOffset>,
}

impl TemporalValue {
    pub fn new(value: NaiveDateTime, precision: TemporalPrecision, offset: Option<FixedOffset>) -> Self {
        Self {
            value,
            precision,
            offset,
        }
    }

    /// Returns a copy whose precision is no finer than `max`.
    pub fn capped(mut self, max: TemporalPrecision) -> Self {
        if self.precision > max {
            self.precision = max;
        }
        self
    }

    /// The absolute instant, available only when the offset is known.
    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        let offset = self.offset?;
        offset.from_local_datetime(&self.value).single()
    }

    /// FHIR string rendering at this value's precision.
    pub fn to_fhir_string(&self) -> String {
        let pattern = match self.precision {
            TemporalPrecision::Year => "%Y",
            TemporalPrecision::Month => "%Y-%m",
            TemporalPrecision::Day => "%Y-%m-%d",
            TemporalPrecision::Minute => "%Y-%m-%dT%H:%M",
            TemporalPrecision::Second => "%Y-%m-%dT%H:%M:%S",
            TemporalPrecision::Millisecond => "%Y-%m-%dT%H:%M:%S%.3f",
        };
        let mut out = self.value.format(pattern).to_string();
        if self.precision > TemporalPrecision::Day {
            if let Some(offset) = self.offset {
                out.push_str(&offset.to_string());
            }
        }
        out
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fhir_string())
    }
}

impl Serialize for TemporalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fhir_string())
    }
}

/// A FHIR time value (`hh[:mm[:ss[.sss]]]`, optionally followed by an offset).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FhirTime(pub String);

impl FhirTime {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FhirTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
    }

    #[test]
    fn renders_at_precision() {
        let v = at(2020, 3, 1, 12, 30, 15, 123);
        let cases = [
            (TemporalPrecision::Year, "2020"),
            (TemporalPrecision::Month, "2020-03"),
            (TemporalPrecision::Day, "2020-03-01"),
            (TemporalPrecision::Minute, "2020-03-01T12:30"),
            (TemporalPrecision::Second, "2020-03-01T12:30:15"),
            (TemporalPrecision::Millisecond, "2020-03-01T12:30:15.123"),
        ];
        for (precision, expected) in cases {
            assert_eq!(TemporalValue::new(v, precision, None).to_fhir_string(), expected);
        }
    }

    #[test]
    fn offset_only_rendered_with_time() {
        let offset = FixedOffset::west_opt(5 * 3600);
        let v = at(2020, 3, 1, 12, 30, 0, 0);
        assert_eq!(
            TemporalValue::new(v, TemporalPrecision::Minute, offset).to_fhir_string(),
            "2020-03-01T12:30-05:00"
        );
        assert_eq!(
            TemporalValue::new(v, TemporalPrecision::Day, offset).to_fhir_string(),
            "2020-03-01"
        );
    }

    #[test]
    fn capping_never_refines() {
        let v = TemporalValue::new(at(2020, 1, 1, 0, 0, 0, 0), TemporalPrecision::Year, None);
        assert_eq!(v.capped(TemporalPrecision::Day).precision, TemporalPrecision::Year);

        let v = TemporalValue::new(v.value, TemporalPrecision::Second, None);
        assert_eq!(v.capped(TemporalPrecision::Day).precision, TemporalPrecision::Day);
    }
}
