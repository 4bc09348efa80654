//! Temporal parser
//!
//! Strings are parsed by an ordered list of strategies; the first success wins:
//!
//! 1. `v2`: the native V2 `DTM` parser over the value with ISO punctuation removed
//! 2. `iso8601`: a generic ISO-8601 parser over the value as given
//!
//! Both report the precision the source actually populated, so `"2020"` stays a year.

use crate::adapter::adjust;
use crate::error::TimestampError;
use crate::v2::timestamp::parse_v2_timestamp;
use crate::v2::{V2Tag, V2Type};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use v2fhir_models::{FhirTime, TemporalPrecision, TemporalValue};

type Strategy = fn(&str) -> Result<TemporalValue, TimestampError>;

const STRATEGIES: &[(&str, Strategy)] = &[("v2", parse_compact), ("iso8601", parse_iso8601)];

/// `HH[MM[SS[.S[S[S[S]]]]]][+/-ZZ[ZZ]]` after `:` and spaces are removed.
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})(?:([0-9]{2})(?:([0-9]{2})(?:\.([0-9]{1,4}))?)?)?(?:([+-])([0-9]{2})([0-9]{2})?)?$")
        .expect("time pattern is valid")
});

/// The FHIR temporal type a value is being recast into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    Instant,
    DateTime,
    /// Capped at day precision.
    Date,
}

/// Parses a date, dateTime or instant string in V2 or ISO-8601 form.
pub fn parse_instant(value: &str) -> Option<TemporalValue> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    for (name, strategy) in STRATEGIES {
        match strategy(value) {
            Ok(parsed) => return Some(parsed),
            Err(err) => {
                tracing::debug!(strategy = %name, value = %value, error = %err, "timestamp strategy failed");
            }
        }
    }
    tracing::warn!(value = %value, "value is not a recognizable timestamp");
    None
}

/// Converts a V2 value to a temporal value.
///
/// `DTM` primitives go through their native timestamp accessor; `TS` composites use
/// their first component. Anything else is read as a string.
pub fn to_instant(value: &V2Type) -> Option<TemporalValue> {
    let value = adjust(value)?;
    match value {
        V2Type::Primitive(p) => match p.timestamp() {
            Some(Ok(parsed)) => Some(parsed),
            Some(Err(TimestampError::Empty)) => None,
            Some(Err(err)) => {
                tracing::error!(value = ?p.value, error = %err, "unexpected failure reading DTM value");
                None
            }
            None => parse_instant(p.value.as_deref()?),
        },
        V2Type::Composite(c) if c.tag == V2Tag::TS => to_instant(c.components.first()?),
        other => parse_instant(other.text()?),
    }
}

/// Recasts a temporal value between instant, dateTime and date.
pub fn cast_date_time(value: TemporalValue, to: TemporalKind) -> TemporalValue {
    match to {
        TemporalKind::Instant | TemporalKind::DateTime => value,
        TemporalKind::Date => value.capped(TemporalPrecision::Day),
    }
}

/// Removes ISO-8601 punctuation (`-`, `T`, `:`) while keeping the fraction marker and
/// the sign of a zone offset: `2020-03-01T12:30:00-05:00` becomes `20200301123000-0500`.
pub fn remove_iso_punct(value: &str) -> String {
    let value = value.trim().to_ascii_uppercase();

    // Dashes inside an ISO date are separators, not zone signs.
    let mut date_len = if value.as_bytes().get(4) == Some(&b'-') {
        value.len().min(11)
    } else {
        0
    };
    while !value.is_char_boundary(date_len) {
        date_len -= 1;
    }
    let (date, rest) = value.split_at(date_len);

    let mut out: String = date.chars().filter(|c| *c != '-' && *c != 'T').collect();
    let (time, zone) = match rest.find(['+', '-']) {
        Some(pos) => rest.split_at(pos),
        None => match rest.strip_suffix('Z') {
            Some(time) => (time, "Z"),
            None => (rest, ""),
        },
    };
    out.extend(time.chars().filter(|c| *c != ':'));
    out.extend(zone.chars().filter(|c| *c != ':'));
    out
}

/// Parses a V2 time string into a FHIR time.
pub fn parse_time(value: &str) -> Option<FhirTime> {
    let compact: String = value.chars().filter(|c| *c != ':' && *c != ' ').collect();
    if compact.is_empty() {
        return None;
    }
    if compact.ends_with(['+', '-']) {
        tracing::warn!(value = %value, "time zone sign without offset");
        return None;
    }
    let Some(caps) = TIME_PATTERN.captures(&compact) else {
        tracing::warn!(value = %value, "value does not match V2 time pattern HH[MM[SS[.S[S[S[S]]]]]][+/-ZZZZ]");
        return None;
    };
    let group = |i: usize| caps.get(i).map(|m| m.as_str());

    let hour = group(1)?;
    let minute = group(2);
    let second = group(3);
    if !check_time(hour, minute, second, value, "time") {
        return None;
    }

    let mut out = hour.to_string();
    if let Some(minute) = minute {
        out.push(':');
        out.push_str(minute);
    }
    if let Some(second) = second {
        out.push(':');
        out.push_str(second);
    }
    if let Some(fraction) = group(4) {
        out.push('.');
        out.push_str(&format!("{:0<3.3}", fraction));
    }

    if let (Some(sign), Some(zone_hour)) = (group(5), group(6)) {
        let zone_minute = group(7);
        if !check_time(zone_hour, zone_minute, None, value, "timezone") {
            return None;
        }
        out.push_str(sign);
        out.push_str(zone_hour);
        out.push(':');
        out.push_str(zone_minute.unwrap_or("00"));
    }

    Some(FhirTime(out))
}

/// Converts a V2 value to a FHIR time through its generic string view.
pub fn to_time(value: &V2Type) -> Option<FhirTime> {
    parse_time(adjust(value)?.text()?)
}

/// Hours must be 00-23. Minutes and seconds accept 60.
fn check_time(hour: &str, minute: Option<&str>, second: Option<&str>, value: &str, part: &str) -> bool {
    let parse = |s: &str| s.parse::<u32>().unwrap_or(u32::MAX);
    if parse(hour) > 23 {
        tracing::warn!(value = %value, part = %part, "invalid hour");
        return false;
    }
    for (name, field) in [("minute", minute), ("second", second)] {
        if field.is_some_and(|f| parse(f) > 60) {
            tracing::warn!(value = %value, part = %part, field = %name, "invalid time field");
            return false;
        }
    }
    true
}

fn parse_compact(value: &str) -> Result<TemporalValue, TimestampError> {
    parse_v2_timestamp(&remove_iso_punct(value))
}

fn parse_iso8601(value: &str) -> Result<TemporalValue, TimestampError> {
    let (date_part, time_part) = match value.split_once(['T', 't']) {
        Some((date, time)) => (date, Some(time)),
        None => (value, None),
    };
    let (date, date_precision) = parse_iso_date(date_part)
        .ok_or_else(|| TimestampError::malformed(value, "not an ISO-8601 date"))?;

    let Some(time_part) = time_part else {
        return Ok(TemporalValue::new(
            NaiveDateTime::new(date, NaiveTime::MIN),
            date_precision,
            None,
        ));
    };
    if date_precision != TemporalPrecision::Day {
        return Err(TimestampError::malformed(value, "time requires a full date"));
    }

    let (time_part, offset) = split_iso_zone(time_part)
        .ok_or_else(|| TimestampError::malformed(value, "invalid ISO-8601 zone"))?;
    let (time, precision) = parse_iso_time(time_part)
        .ok_or_else(|| TimestampError::malformed(value, "invalid ISO-8601 time"))?;

    Ok(TemporalValue::new(NaiveDateTime::new(date, time), precision, offset))
}

fn parse_iso_date(s: &str) -> Option<(NaiveDate, TemporalPrecision)> {
    let parts: Vec<&str> = s.split('-').collect();
    let digits = |p: &str, len: usize| p.len() == len && p.bytes().all(|b| b.is_ascii_digit());
    let number = |p: &str| p.parse::<u32>().ok();

    match parts.as_slice() {
        [y] if digits(y, 4) => Some((
            NaiveDate::from_ymd_opt(y.parse().ok()?, 1, 1)?,
            TemporalPrecision::Year,
        )),
        [y, m] if digits(y, 4) && digits(m, 2) => Some((
            NaiveDate::from_ymd_opt(y.parse().ok()?, number(m)?, 1)?,
            TemporalPrecision::Month,
        )),
        [y, m, d] if digits(y, 4) && digits(m, 2) && digits(d, 2) => Some((
            NaiveDate::from_ymd_opt(y.parse().ok()?, number(m)?, number(d)?)?,
            TemporalPrecision::Day,
        )),
        _ => None,
    }
}

fn split_iso_zone(rest: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(time) = rest.strip_suffix(['Z', 'z']) {
        return Some((time, FixedOffset::east_opt(0)));
    }
    let Some(pos) = rest.rfind(['+', '-']) else {
        return Some((rest, None));
    };
    let (time, zone) = rest.split_at(pos);
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let zone: String = zone[1..].chars().filter(|c| *c != ':').collect();
    if !(zone.len() == 2 || zone.len() == 4) || !zone.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = zone[0..2].parse().ok()?;
    let minutes: i32 = zone.get(2..4).map_or(Some(0), |m| m.parse().ok())?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some((time, Some(FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?)))
}

fn parse_iso_time(s: &str) -> Option<(NaiveTime, TemporalPrecision)> {
    let (main, fraction) = match s.split_once('.') {
        Some((main, fraction)) => (main, Some(fraction)),
        None => (s, None),
    };
    let fields: Vec<u32> = main
        .split(':')
        .map(|f| {
            (f.len() == 2 && f.bytes().all(|b| b.is_ascii_digit()))
                .then(|| f.parse().ok())
                .flatten()
        })
        .collect::<Option<Vec<_>>>()?;

    let (hour, minute, second, precision) = match (fields.as_slice(), fraction) {
        ([h, m], None) => (*h, *m, 0, TemporalPrecision::Minute),
        ([h, m, s], None) => (*h, *m, *s, TemporalPrecision::Second),
        ([h, m, s], Some(_)) => (*h, *m, *s, TemporalPrecision::Millisecond),
        _ => return None,
    };

    let nanos = match fraction {
        Some(f) if !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{:0<9.9}", f).parse().ok()?
        }
        Some(_) => return None,
        None => 0,
    };
    Some((NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)?, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_removal_keeps_zone_sign() {
        assert_eq!(remove_iso_punct("2020-03-01"), "20200301");
        assert_eq!(
            remove_iso_punct("2020-03-01T12:30:00-05:00"),
            "20200301123000-0500"
        );
        assert_eq!(remove_iso_punct("2020-03-01T12:30:00.123Z"), "20200301123000.123Z");
        assert_eq!(remove_iso_punct("20200301-0500"), "20200301-0500");
        assert_eq!(remove_iso_punct("2020"), "2020");
    }

    #[test]
    fn iso_strategy_handles_zulu() {
        let v = parse_instant("2020-03-01T12:30:00Z").unwrap();
        assert_eq!(v.precision, TemporalPrecision::Second);
        assert_eq!(v.offset, FixedOffset::east_opt(0));
    }

    #[test]
    fn iso_dates_and_times() {
        assert_eq!(
            parse_iso8601("2020-03").unwrap().precision,
            TemporalPrecision::Month
        );
        assert_eq!(
            parse_iso8601("2020-03-01T12:30").unwrap().precision,
            TemporalPrecision::Minute
        );
        assert!(parse_iso8601("2020-03T12:30").is_err());
        assert!(parse_iso8601("March 1").is_err());
    }

    #[test]
    fn time_rendering_mirrors_input() {
        assert_eq!(parse_time("12").unwrap().as_str(), "12");
        assert_eq!(parse_time("1230").unwrap().as_str(), "12:30");
        assert_eq!(parse_time("12:30:15").unwrap().as_str(), "12:30:15");
        assert_eq!(parse_time("123015.1").unwrap().as_str(), "12:30:15.100");
        assert_eq!(parse_time("123015.1234").unwrap().as_str(), "12:30:15.123");
        assert_eq!(parse_time("1230-0500").unwrap().as_str(), "12:30-05:00");
        assert_eq!(parse_time("1230+05").unwrap().as_str(), "12:30+05:00");
    }
}
