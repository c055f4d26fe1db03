// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer polynomials for dealing shares.

use crate::errors::PolynomialError;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

/// `a_0 + a_1·x + ... + a_d·x^d` with arbitrary precision coefficients.
///
/// Coefficients are stored constant term first, so `coefficients()[0]` is the value at
/// `x = 0` and `coefficients()[i]` multiplies `x^i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Builds a polynomial from coefficients given constant term first.
    pub fn from_coefficients(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial of exactly `degree` whose constant term is `constant`.
    ///
    /// Every other coefficient is drawn uniformly from `[2^(bits-1), 2^bits)`, so the
    /// leading coefficient is never zero and the degree is exact.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidPolynomial` if `bits` is zero while `degree > 0`.
    pub fn random_with_constant<R: Rng + ?Sized>(
        constant: BigInt,
        degree: usize,
        bits: u64,
        rng: &mut R,
    ) -> Result<Self, PolynomialError> {
        if degree == 0 {
            return Ok(Self::from_coefficients(vec![constant]));
        }
        if bits == 0 {
            return Err(PolynomialError::InvalidPolynomial {
                message: "random coefficients need at least one bit".to_string(),
            });
        }

        let top_bit = BigUint::one() << (bits - 1);
        let coefficients = std::iter::once(constant)
            .chain((0..degree).map(|_| BigInt::from(rng.gen_biguint(bits) | &top_bit)))
            .collect();

        Ok(Self { coefficients })
    }

    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Index of the last stored coefficient; 0 for an empty polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn constant_term(&self) -> BigInt {
        self.coefficients.first().cloned().unwrap_or_else(BigInt::zero)
    }

    /// Exact value at `x` by Horner's rule.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
    }
}
