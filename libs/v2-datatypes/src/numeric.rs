//! Numeric cast layer
//!
//! Casts between FHIR `decimal` and the integer family. Decimal to integer truncates
//! toward zero and then must fit the target exactly. Range and sign violations are
//! logged and yield `None`; nothing wraps or saturates.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// A FHIR numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeric {
    Decimal(Decimal),
    Integer(i32),
    /// `unsignedInt`: 0..=i32::MAX
    UnsignedInt(u32),
    /// `positiveInt`: non-negative here; zero is accepted
    PositiveInt(u32),
}

/// Target of a [`cast_numeric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Decimal,
    Integer,
    UnsignedInt,
    PositiveInt,
}

impl Numeric {
    pub fn kind(&self) -> NumericKind {
        match self {
            Numeric::Decimal(_) => NumericKind::Decimal,
            Numeric::Integer(_) => NumericKind::Integer,
            Numeric::UnsignedInt(_) => NumericKind::UnsignedInt,
            Numeric::PositiveInt(_) => NumericKind::PositiveInt,
        }
    }

    pub fn to_decimal(&self) -> Decimal {
        match *self {
            Numeric::Decimal(d) => d,
            Numeric::Integer(i) => Decimal::from(i),
            Numeric::UnsignedInt(u) | Numeric::PositiveInt(u) => Decimal::from(u),
        }
    }
}

/// Largest value accepted as `unsignedInt`.
const MAX_UNSIGNED: i32 = i32::MAX;

/// Casts `from` into the `to` representation.
pub fn cast_numeric(from: Numeric, to: NumericKind) -> Option<Numeric> {
    let value = from.to_decimal();
    match to {
        NumericKind::Decimal => Some(Numeric::Decimal(value)),
        NumericKind::Integer => truncate(value).map(Numeric::Integer),
        NumericKind::UnsignedInt => {
            if value.is_sign_negative() && !value.is_zero() {
                tracing::warn!(value = %value, "negative value for unsignedInt");
                return None;
            }
            if value > Decimal::from(MAX_UNSIGNED) {
                tracing::warn!(value = %value, "unsignedInt overflow");
                return None;
            }
            truncate(value)
                .and_then(|i| u32::try_from(i).ok())
                .map(Numeric::UnsignedInt)
        }
        NumericKind::PositiveInt => {
            let i = truncate(value)?;
            match u32::try_from(i) {
                Ok(u) => Some(Numeric::PositiveInt(u)),
                Err(_) => {
                    tracing::warn!(value = %value, "negative value for positiveInt");
                    None
                }
            }
        }
    }
}

fn truncate(value: Decimal) -> Option<i32> {
    let truncated = value.trunc();
    match truncated.to_i32() {
        Some(i) => Some(i),
        None => {
            tracing::warn!(value = %value, "integer overflow");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Numeric {
        Numeric::Decimal(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(cast_numeric(dec("3.9"), NumericKind::Integer), Some(Numeric::Integer(3)));
        assert_eq!(cast_numeric(dec("-3.9"), NumericKind::Integer), Some(Numeric::Integer(-3)));
    }

    #[test]
    fn integer_overflow_is_absent() {
        assert_eq!(cast_numeric(dec("2147483648"), NumericKind::Integer), None);
        assert_eq!(cast_numeric(dec("-2147483649"), NumericKind::Integer), None);
        assert_eq!(
            cast_numeric(dec("2147483647.9"), NumericKind::Integer),
            Some(Numeric::Integer(i32::MAX))
        );
    }

    #[test]
    fn unsigned_bounds() {
        assert_eq!(cast_numeric(dec("-1"), NumericKind::UnsignedInt), None);
        assert_eq!(cast_numeric(dec("2147483647.5"), NumericKind::UnsignedInt), None);
        assert_eq!(
            cast_numeric(dec("0"), NumericKind::UnsignedInt),
            Some(Numeric::UnsignedInt(0))
        );
        assert_eq!(
            cast_numeric(dec("-0.0"), NumericKind::UnsignedInt),
            Some(Numeric::UnsignedInt(0))
        );
    }

    #[test]
    fn positive_accepts_zero_rejects_negative() {
        assert_eq!(
            cast_numeric(Numeric::Integer(0), NumericKind::PositiveInt),
            Some(Numeric::PositiveInt(0))
        );
        assert_eq!(cast_numeric(Numeric::Integer(-5), NumericKind::PositiveInt), None);
    }
}
