// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Share generation for fixtures and demos.
//!
//! This is the dealer side of the scheme: pick a random polynomial whose constant term is
//! the secret, evaluate it at `x = 1..=n` and write each value in a randomly chosen base.

use crate::decoder::{encode, MAX_BASE, MIN_BASE};
use crate::errors::{RecoveryError, RecoveryResult};
use crate::input::{EncodedShare, Keys, ShareDocument};
use num_bigint::{BigInt, Sign};
use rand::Rng;
use sr_polynomial::Polynomial;
use tracing::debug;

/// Splits `secret` into `n` shares, any `k` of which reconstruct it.
///
/// The `k - 1` random coefficients are exactly `bits` bits wide. Passing a seeded RNG
/// (e.g. `ChaCha20Rng::seed_from_u64`) makes the output reproducible.
///
/// # Errors
///
/// * `InvalidThreshold` unless `1 <= k <= n`.
/// * `NegativeValue` for a negative secret, which has no digit-string form.
/// * `Polynomial` if `bits` is zero while `k > 1`.
pub fn split<R: Rng + ?Sized>(
    secret: &BigInt,
    n: usize,
    k: usize,
    bits: u64,
    rng: &mut R,
) -> RecoveryResult<ShareDocument> {
    if k == 0 || k > n {
        return Err(RecoveryError::InvalidThreshold { n, k });
    }
    if secret.sign() == Sign::Minus {
        return Err(RecoveryError::NegativeValue {
            value: secret.clone(),
        });
    }

    let polynomial = Polynomial::random_with_constant(secret.clone(), k - 1, bits, rng)?;
    debug!("Dealing {} shares of a degree {} polynomial", n, k - 1);

    let mut shares = Vec::with_capacity(n);
    for x in 1..=n {
        let x = BigInt::from(x);
        let y = polynomial.evaluate(&x);
        let base = rng.gen_range(MIN_BASE..=MAX_BASE);
        shares.push((x.to_string(), EncodedShare::new(base, encode(base, &y)?)));
    }

    Ok(ShareDocument::new(Keys { n, k }, shares))
}
