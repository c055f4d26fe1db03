// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Positional numerals in bases 2 through 36.
//!
//! Digits are `0-9` followed by `a-z` (letters are case-insensitive). Values are
//! accumulated directly into a `BigInt`, so a 40-digit base-3 string or a 25-digit
//! base-36 string decodes exactly.

use crate::errors::{RecoveryError, RecoveryResult};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base: ten decimal digits plus twenty-six letters.
pub const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> RecoveryResult<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(RecoveryError::InvalidBase {
            base: base.to_string(),
        })
    }
}

/// Parses the textual base of a share (`"16"`, `" 3 "`).
pub fn parse_base(text: &str) -> RecoveryResult<u32> {
    let base = text
        .trim()
        .parse::<u32>()
        .map_err(|_| RecoveryError::InvalidBase {
            base: text.to_string(),
        })?;
    check_base(base)?;
    Ok(base)
}

/// Decodes `digits`, written most significant digit first, in the given `base`.
///
/// # Errors
///
/// * `InvalidBase` if `base` is outside `2..=36`.
/// * `EmptyValue` if `digits` is empty.
/// * `InvalidDigit` for the first character that is not a digit of `base`, including
///   signs, whitespace and non-ASCII characters.
pub fn decode(base: u32, digits: &str) -> RecoveryResult<BigInt> {
    check_base(base)?;
    if digits.is_empty() {
        return Err(RecoveryError::EmptyValue);
    }

    let radix = BigInt::from(base);
    let mut value = BigInt::zero();
    for (position, digit) in digits.chars().enumerate() {
        let d = match digit.to_digit(MAX_BASE) {
            Some(d) if d < base => d,
            _ => {
                return Err(RecoveryError::InvalidDigit {
                    digit,
                    position,
                    base,
                })
            }
        };
        value = value * &radix + d;
    }

    Ok(value)
}

/// Writes a non-negative `value` in `base` with lowercase digits.
pub fn encode(base: u32, value: &BigInt) -> RecoveryResult<String> {
    check_base(base)?;
    if value.sign() == Sign::Minus {
        return Err(RecoveryError::NegativeValue {
            value: value.clone(),
        });
    }
    Ok(value.to_str_radix(base))
}
