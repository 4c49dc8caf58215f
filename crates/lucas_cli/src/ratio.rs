//! Exact ratios of consecutive terms and their decimal rendering.
//!
//! Ratios are kept as `BigRational`, so the convergence test compares exact
//! values and only the printed form is rounded.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, One, Signed, Zero};

/// `term(i) / term(i - 1)`, or `Undefined` when the previous term is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ratio {
    Defined(BigRational),
    Undefined,
}

impl Ratio {
    pub fn of(current: &BigInt, previous: &BigInt) -> Self {
        if previous.is_zero() {
            Self::Undefined
        } else {
            Self::Defined(BigRational::new(current.clone(), previous.clone()))
        }
    }

    pub fn value(&self) -> Option<&BigRational> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined => None,
        }
    }

    /// True when both ratios are defined and differ by less than `tolerance`.
    pub fn is_within(&self, other: &Ratio, tolerance: &BigRational) -> bool {
        match (self, other) {
            (Self::Defined(a), Self::Defined(b)) => (a - b).abs() < *tolerance,
            _ => false,
        }
    }

    /// Decimal string with `digits` significant digits; `nan` when undefined.
    pub fn to_decimal_string(&self, digits: u32) -> String {
        match self {
            Self::Defined(value) => format_significant(value, digits),
            Self::Undefined => "nan".to_string(),
        }
    }
}

/// `10^-precision`, the gap below which two ratios count as the same.
pub fn tolerance(precision: u32) -> BigRational {
    pow10(-i64::from(precision))
}

/// Round `value` to `digits` significant digits.
///
/// Fixed notation is used while the decimal exponent lies strictly between
/// `min(-(digits / 3), -5)` and `digits`; scientific notation otherwise.
/// Trailing zeros are dropped but at least one fractional digit is kept.
pub fn format_significant(value: &BigRational, digits: u32) -> String {
    let digits = i64::from(digits.max(1));
    if value.is_zero() {
        return "0.0".to_string();
    }

    let sign = if value.is_negative() { "-" } else { "" };
    let magnitude = value.abs();
    let mut exponent = decimal_exponent(&magnitude);

    // ties round away from zero
    let mut mantissa = (magnitude * pow10(digits - 1 - exponent))
        .round()
        .to_integer();
    if mantissa >= pow10(digits).to_integer() {
        // 9.99.. rounded up to 10.0..
        mantissa /= BigInt::from(10);
        exponent += 1;
    }
    let text = mantissa.to_string();

    let min_fixed = (-(digits / 3)).min(-5);
    let (body, exponent) = if min_fixed < exponent && exponent < digits {
        let body = if exponent < 0 {
            format!("0.{}{}", "0".repeat((-exponent - 1) as usize), text)
        } else {
            let split = exponent as usize + 1;
            format!("{}.{}", &text[..split], &text[split..])
        };
        (body, 0)
    } else {
        (format!("{}.{}", &text[..1], &text[1..]), exponent)
    };

    let mut body = body.trim_end_matches('0').to_string();
    if body.ends_with('.') {
        body.push('0');
    }

    match exponent {
        0 => format!("{sign}{body}"),
        e if e > 0 => format!("{sign}{body}e+{e}"),
        e => format!("{sign}{body}e{e}"),
    }
}

/// `floor(log10(magnitude))` for a positive rational.
fn decimal_exponent(magnitude: &BigRational) -> i64 {
    let numer_digits = magnitude.numer().to_string().len() as i64;
    let denom_digits = magnitude.denom().to_string().len() as i64;
    // the value lies in [10^(e - 1), 10^(e + 1))
    let exponent = numer_digits - denom_digits;
    if *magnitude < pow10(exponent) {
        exponent - 1
    } else {
        exponent
    }
}

fn pow10(exponent: i64) -> BigRational {
    let power = pow(BigInt::from(10), exponent.unsigned_abs() as usize);
    if exponent >= 0 {
        BigRational::from_integer(power)
    } else {
        BigRational::new(BigInt::one(), power)
    }
}
