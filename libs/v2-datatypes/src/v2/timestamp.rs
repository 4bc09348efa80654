//! Native parser for the V2 `DTM` format: `YYYY[MM[DD[HH[MM[SS[.S[S[S[S]]]]]]]]][+/-ZZZZ]`.

use crate::error::TimestampError;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use v2fhir_models::{TemporalPrecision, TemporalValue};

/// Parses a compact V2 timestamp.
///
/// Fields the source leaves out default to the start of the period, so `"2020"` is
/// 2020-01-01T00:00 at [`TemporalPrecision::Year`].
pub fn parse_v2_timestamp(input: &str) -> Result<TemporalValue, TimestampError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(TimestampError::Empty);
    }

    let (body, offset) = split_zone(value)?;
    let (digits, fraction) = match body.split_once('.') {
        Some((d, f)) => (d, Some(f)),
        None => (body, None),
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::malformed(value, "non-digit characters"));
    }
    let precision = match digits.len() {
        4 => TemporalPrecision::Year,
        6 => TemporalPrecision::Month,
        8 => TemporalPrecision::Day,
        10 | 12 => TemporalPrecision::Minute,
        14 => TemporalPrecision::Second,
        _ => return Err(TimestampError::malformed(value, "unexpected number of digits")),
    };

    let nanos = match fraction {
        None => 0,
        Some(_) if digits.len() != 14 => {
            return Err(TimestampError::malformed(value, "fraction requires seconds"));
        }
        Some(f) if f.is_empty() || f.len() > 4 || !f.bytes().all(|b| b.is_ascii_digit()) => {
            return Err(TimestampError::malformed(value, "fraction must be 1 to 4 digits"));
        }
        Some(f) => format!("{f:0<9}")
            .parse::<u32>()
            .map_err(|_| TimestampError::malformed(value, "fraction must be 1 to 4 digits"))?,
    };
    let precision = if fraction.is_some() {
        TemporalPrecision::Millisecond
    } else {
        precision
    };

    let field = |from: usize, default: u32| -> u32 {
        digits
            .get(from..from + 2)
            .and_then(|s| s.parse().ok())
            .unwrap_or(default)
    };
    let year: i32 = digits[0..4]
        .parse()
        .map_err(|_| TimestampError::malformed(value, "invalid year"))?;

    let date = NaiveDate::from_ymd_opt(year, field(4, 1), field(6, 1))
        .ok_or_else(|| TimestampError::OutOfRange(value.to_string()))?;
    let time = NaiveTime::from_hms_nano_opt(field(8, 0), field(10, 0), field(12, 0), nanos)
        .ok_or_else(|| TimestampError::OutOfRange(value.to_string()))?;

    Ok(TemporalValue::new(
        NaiveDateTime::new(date, time),
        precision,
        offset,
    ))
}

fn split_zone(value: &str) -> Result<(&str, Option<FixedOffset>), TimestampError> {
    let Some(pos) = value.rfind(['+', '-']) else {
        return Ok((value, None));
    };
    if pos == 0 {
        return Err(TimestampError::malformed(value, "missing date"));
    }
    let (body, zone) = value.split_at(pos);
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let digits = &zone[1..];
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::malformed(value, "zone must be +/-HHMM"));
    }
    let hours: i32 = digits[0..2]
        .parse()
        .map_err(|_| TimestampError::malformed(value, "invalid zone hours"))?;
    let minutes: i32 = digits[2..4]
        .parse()
        .map_err(|_| TimestampError::malformed(value, "invalid zone minutes"))?;
    if hours > 23 || minutes > 59 {
        return Err(TimestampError::OutOfRange(value.to_string()));
    }
    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| TimestampError::OutOfRange(value.to_string()))?;
    Ok((body, Some(offset)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_only_starts_on_january_first() {
        let v = parse_v2_timestamp("2020").unwrap();
        assert_eq!(v.precision, TemporalPrecision::Year);
        assert_eq!(v.value.to_string(), "2020-01-01 00:00:00");
    }

    #[test]
    fn precision_follows_digit_count() {
        let cases = [
            ("202003", TemporalPrecision::Month),
            ("20200301", TemporalPrecision::Day),
            ("2020030112", TemporalPrecision::Minute),
            ("202003011230", TemporalPrecision::Minute),
            ("20200301123015", TemporalPrecision::Second),
            ("20200301123015.1", TemporalPrecision::Millisecond),
            ("20200301123015.1234", TemporalPrecision::Millisecond),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_v2_timestamp(input).unwrap().precision, expected, "{input}");
        }
    }

    #[test]
    fn zone_is_kept() {
        let v = parse_v2_timestamp("202003011230-0500").unwrap();
        assert_eq!(v.offset, FixedOffset::west_opt(5 * 3600));
        assert_eq!(v.to_fhir_string(), "2020-03-01T12:30-05:00");
    }

    #[test]
    fn rejects_malformed_values() {
        for input in [
            "",
            "20",
            "2020030",
            "2020-03-01",
            "20200301.5",
            "20200301123015.12345",
            "20201301",
            "20200230",
            "202003011230+05",
            "20200301123000Z",
            "-0500",
        ] {
            assert!(parse_v2_timestamp(input).is_err(), "{input}");
        }
    }
}
