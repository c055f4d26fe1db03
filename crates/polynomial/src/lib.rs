// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomials over the integers with `num-bigint` coefficients.
//!
//! A dealer splitting a secret picks a polynomial whose constant term is the secret and
//! whose other coefficients are random values hundreds of bits wide, then hands out its
//! values at distinct points. Evaluation here is exact.

pub mod errors;
pub mod polynomial;

pub use errors::PolynomialError;
pub use polynomial::Polynomial;
