use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive as _, Zero as _};
use chrono::{DateTime, Utc};
use serde::Serializer;

pub const MONEY_SCALE: i64 = 2;
pub const MONTHS_IN_YEAR: i32 = 12;
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rounds to cents, ties to even.
pub fn round_money(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(MONEY_SCALE, RoundingMode::HalfEven)
}

/// Floored division: the quotient rounds toward negative infinity and the
/// remainder takes the sign of `divisor`.
pub fn floor_div_rem(
    dividend: &BigDecimal,
    divisor: &BigDecimal,
) -> (BigDecimal, BigDecimal) {
    let mut quotient =
        (dividend / divisor).with_scale_round(0, RoundingMode::Floor);
    let mut remainder = dividend - &(&quotient * divisor);

    // the quotient comes from a finite-precision division, nudge it back
    // when the approximation lands on the wrong side of an integer
    let zero = BigDecimal::zero();
    if divisor > &zero {
        while remainder < zero {
            quotient -= BigDecimal::from(1);
            remainder += divisor;
        }
        while &remainder >= divisor {
            quotient += BigDecimal::from(1);
            remainder -= divisor;
        }
    }

    (quotient, remainder)
}

/// Whole installments needed to cover `balance`: floor division plus one
/// when a remainder is left over, never below zero.
pub fn installments_left(
    balance: &BigDecimal,
    emi_amount: &BigDecimal,
) -> i64 {
    let zero = BigDecimal::zero();
    if emi_amount <= &zero {
        return 0;
    }

    let (quotient, remainder) = floor_div_rem(balance, emi_amount);
    let count = if remainder > zero {
        quotient + BigDecimal::from(1)
    } else {
        quotient
    };

    if count <= zero {
        return 0;
    }

    count.to_i64().unwrap_or(i64::MAX)
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn serialize_timestamp<S>(
    at: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(at))
}

/// Cents with exactly two places; zero renders as `0.00`.
pub fn format_money(value: &BigDecimal) -> String {
    format!("{:.2}", round_money(value))
}

pub fn serialize_money<S>(
    value: &BigDecimal,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_money(value))
}
