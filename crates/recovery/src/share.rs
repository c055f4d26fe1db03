// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Decoded shares and the validated set they are reconstructed from.

use crate::errors::{RecoveryError, RecoveryResult};
use crate::selector::select;
use num_bigint::BigInt;
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// One sample `(x, f(x))` of the sharing polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    pub x: BigInt,
    pub y: BigInt,
}

impl Share {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Shares of a single secret together with the declared `n` and threshold `k`.
///
/// Construction enforces `1 <= k <= n`, pairwise distinct `x` and at least `k` shares.
/// The set is immutable afterwards and keeps the shares in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSet {
    n: usize,
    k: usize,
    shares: Vec<Share>,
}

impl ShareSet {
    /// Validates and builds a share set.
    ///
    /// # Errors
    ///
    /// * `InvalidThreshold` if `k == 0`.
    /// * `DuplicateX` for the first abscissa seen twice.
    /// * `InsufficientShares` if fewer than `k` shares are supplied.
    /// * `InvalidThreshold` if `k > n` although at least `k` shares are present.
    pub fn new(n: usize, k: usize, shares: Vec<Share>) -> RecoveryResult<Self> {
        if k == 0 {
            return Err(RecoveryError::InvalidThreshold { n, k });
        }

        let mut seen = HashSet::with_capacity(shares.len());
        for share in &shares {
            if !seen.insert(&share.x) {
                return Err(RecoveryError::DuplicateX {
                    x: share.x.clone(),
                });
            }
        }

        if shares.len() < k {
            return Err(RecoveryError::InsufficientShares {
                available: shares.len(),
                required: k,
            });
        }

        if k > n {
            return Err(RecoveryError::InvalidThreshold { n, k });
        }

        if shares.len() != n {
            warn!(
                "Declared n = {} but {} shares were supplied; reporting n as declared",
                n,
                shares.len()
            );
        }

        Ok(Self { n, k, shares })
    }

    /// Declared total number of shares.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Threshold: shares needed to reconstruct.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// The `k` shares with the smallest `x`, ascending.
    pub fn select(&self) -> RecoveryResult<Vec<Share>> {
        select(&self.shares, self.k)
    }
}
