// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exact reconstruction of Shamir secrets.
//!
//! A dealer evaluates a polynomial of degree `k - 1` at `n` distinct points and hands out
//! the `(x, y)` pairs, each `y` written as a digit string in some base between 2 and 36.
//! Any `k` of those shares determine the polynomial, and its value at `x = 0` is the secret.
//!
//! The pipeline is:
//!
//! 1. [`decoder::decode`] turns every digit string into a [`BigInt`](num_bigint::BigInt).
//! 2. [`ShareSet`] checks the threshold and rejects duplicate abscissas.
//! 3. [`selector::select`] keeps the `k` shares with the smallest `x`.
//! 4. [`interpolation::interpolate_at_zero`] runs Lagrange interpolation with exact
//!    rational accumulation and a single, verified final division.
//!
//! All arithmetic stays in arbitrary precision from the first digit to the final
//! division; nothing passes through a machine-width integer or a float.
//!
//! ## Example
//!
//! ```
//! use sr_recovery::reconstruct_json;
//!
//! let json = r#"{
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }"#;
//!
//! let result = reconstruct_json(json).unwrap();
//! assert_eq!(result.secret.to_string(), "3");
//! assert_eq!(result.polynomial_degree, 2);
//! ```

pub mod decoder;
pub mod errors;
pub mod fixture;
pub mod input;
pub mod interpolation;
pub mod reconstruct;
pub mod selector;
pub mod share;

pub use decoder::{decode, encode, MAX_BASE, MIN_BASE};
pub use errors::{RecoveryError, RecoveryResult};
pub use fixture::split;
pub use input::{EncodedShare, Keys, ShareDocument};
pub use interpolation::interpolate_at_zero;
pub use reconstruct::{reconstruct, reconstruct_json, ReconstructionResult};
pub use selector::select;
pub use share::{Share, ShareSet};
