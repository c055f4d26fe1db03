// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lagrange interpolation at `x = 0` over the integers.
//!
//! ## Mathematical Background
//!
//! For `k` points `(x_i, y_i)` with distinct `x_i`, the unique polynomial of degree at most
//! `k - 1` through them takes at zero the value
//!
//! ```text
//! P(0) = Σ_i  y_i · Π_{j≠i} (-x_j)  /  Π_{j≠i} (x_i - x_j)
//! ```
//!
//! `P(0)` is an integer for genuine shares even though the individual terms usually are
//! not. Each term is therefore kept as an exact fraction, the fractions are summed over
//! their least common denominator, and the only division happens at the very end, where
//! it must leave no remainder.

use crate::errors::{RecoveryError, RecoveryResult};
use crate::share::Share;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Exact running sum `numerator / denominator` with a positive denominator, kept in
/// lowest terms.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    /// `denominator` must be non-zero.
    fn new(numerator: BigInt, denominator: BigInt) -> Self {
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let gcd = numerator.gcd(&denominator);
        if gcd.is_one() || gcd.is_zero() {
            Self {
                numerator,
                denominator,
            }
        } else {
            Self {
                numerator: numerator / &gcd,
                denominator: denominator / &gcd,
            }
        }
    }

    fn add(&self, other: &Fraction) -> Fraction {
        let common = self.denominator.lcm(&other.denominator);
        let numerator = &self.numerator * (&common / &self.denominator)
            + &other.numerator * (&common / &other.denominator);
        Fraction::new(numerator, common)
    }

    /// The single division of the algorithm, checked for exactness.
    fn into_integer(self) -> RecoveryResult<BigInt> {
        let (quotient, remainder) = self.numerator.div_rem(&self.denominator);
        if remainder.is_zero() {
            Ok(quotient)
        } else {
            Err(RecoveryError::NonIntegerResult {
                numerator: self.numerator,
                denominator: self.denominator,
            })
        }
    }
}

/// The `i`-th Lagrange term `y_i · Π(-x_j) / Π(x_i - x_j)` as an exact fraction.
fn lagrange_term(points: &[Share], i: usize) -> RecoveryResult<Fraction> {
    let current = &points[i];
    let mut numerator = current.y.clone();
    let mut denominator = BigInt::one();

    for (j, other) in points.iter().enumerate() {
        if i == j {
            continue;
        }
        numerator *= -&other.x;
        denominator *= &current.x - &other.x;
    }

    if denominator.is_zero() {
        return Err(RecoveryError::DuplicateX {
            x: current.x.clone(),
        });
    }

    Ok(Fraction::new(numerator, denominator))
}

/// Interpolates the polynomial through `points` and evaluates it at zero.
///
/// Every point is used; narrowing to `k` shares is the caller's job
/// (see [`select`](crate::select)).
///
/// # Errors
///
/// * `InsufficientShares` if `points` is empty.
/// * `DuplicateX` if two points share an abscissa.
/// * `NonIntegerResult` if the exact sum is not an integer, which means the points do not
///   lie on a single integer polynomial of degree below `points.len()`.
pub fn interpolate_at_zero(points: &[Share]) -> RecoveryResult<BigInt> {
    if points.is_empty() {
        return Err(RecoveryError::InsufficientShares {
            available: 0,
            required: 1,
        });
    }

    let mut sum = Fraction::zero();
    for i in 0..points.len() {
        sum = sum.add(&lagrange_term(points, i)?);
    }

    sum.into_integer()
}
