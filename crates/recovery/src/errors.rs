// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for secret reconstruction
//!
//! Every failure carries the value that caused it (the digit and its position, the
//! repeated abscissa, the leftover fraction) so callers can report it precisely. Nothing
//! here is retryable: the computation is deterministic.

use num_bigint::BigInt;
use sr_polynomial::PolynomialError;
use thiserror::Error;

/// Main error type for decoding, share validation and interpolation
#[derive(Error, Debug)]
pub enum RecoveryError {
    /// Base outside the supported alphabet (2..=36) or not an integer at all
    #[error("Invalid base: {base} (expected an integer between 2 and 36)")]
    InvalidBase { base: String },

    /// Character that is not a digit of the stated base
    #[error("Invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    /// Digit string with no digits
    #[error("Empty digit string")]
    EmptyValue,

    /// Two shares with the same abscissa
    #[error("Duplicate share for x = {x}")]
    DuplicateX { x: BigInt },

    /// Fewer shares than the threshold requires
    #[error("Insufficient shares: {available} available, {required} required")]
    InsufficientShares { available: usize, required: usize },

    /// The accumulated Lagrange sum is not an integer, so the shares do not lie on one
    /// integer polynomial
    #[error("Interpolation did not produce an integer: {numerator}/{denominator}")]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },

    /// Declared threshold violates 1 <= k <= n
    #[error("Invalid threshold: k = {k}, n = {n} (need 1 <= k <= n)")]
    InvalidThreshold { n: usize, k: usize },

    /// Share key that is not a decimal integer
    #[error("Invalid x coordinate: {key:?}")]
    InvalidX { key: String },

    /// Only non-negative values have a digit-string form
    #[error("Cannot encode negative value {value}")]
    NegativeValue { value: BigInt },

    /// Document without the `keys` record holding `n` and `k`
    #[error("Missing `keys` record with n and k")]
    MissingKeys,

    /// Failure while decoding one share of a document
    #[error("Invalid share at x = {key}")]
    Share {
        key: String,
        #[source]
        source: Box<RecoveryError>,
    },

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Polynomial construction failure while generating shares
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

/// Result type alias for reconstruction operations
pub type RecoveryResult<T> = Result<T, RecoveryError>;

impl RecoveryError {
    /// Wrap an error raised while processing the share keyed by `key`.
    pub fn in_share(key: impl Into<String>, source: RecoveryError) -> Self {
        RecoveryError::Share {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through per-share context.
    pub fn root(&self) -> &RecoveryError {
        match self {
            RecoveryError::Share { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_share_context_keeps_source() {
        let err = RecoveryError::in_share(
            "7",
            RecoveryError::InvalidDigit {
                digit: 'z',
                position: 3,
                base: 16,
            },
        );

        assert_eq!(err.to_string(), "Invalid share at x = 7");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("Invalid digit 'z' at position 3 for base 16".to_string())
        );
        assert!(matches!(
            err.root(),
            RecoveryError::InvalidDigit { digit: 'z', .. }
        ));
    }

    #[test]
    fn test_root_of_plain_error_is_itself() {
        let err = RecoveryError::InsufficientShares {
            available: 2,
            required: 3,
        };
        assert!(matches!(
            err.root(),
            RecoveryError::InsufficientShares {
                available: 2,
                required: 3
            }
        ));
    }
}
