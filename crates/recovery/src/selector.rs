// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Deterministic choice of the shares used for reconstruction.
//!
//! The policy is fixed: sort ascending by `x` and keep the first `k`. For shares that lie
//! on one polynomial any `k` of them give the same secret, so the policy only makes runs
//! reproducible. It does not detect or route around inconsistent shares.

use crate::errors::{RecoveryError, RecoveryResult};
use crate::share::Share;

/// Returns the `k` shares with the smallest `x`, in ascending order of `x`.
///
/// The sort is stable; inputs coming from a [`ShareSet`](crate::ShareSet) never contain
/// equal abscissas, so no further tie-break is needed.
///
/// # Errors
///
/// `InsufficientShares` if `shares` holds fewer than `k` entries.
pub fn select(shares: &[Share], k: usize) -> RecoveryResult<Vec<Share>> {
    if shares.len() < k {
        return Err(RecoveryError::InsufficientShares {
            available: shares.len(),
            required: k,
        });
    }

    let mut ordered: Vec<&Share> = shares.iter().collect();
    ordered.sort_by(|a, b| a.x.cmp(&b.x));

    Ok(ordered.into_iter().take(k).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use proptest::prelude::*;

    #[test]
    fn test_select_smallest_x() {
        let shares = vec![
            Share::new(6, 39),
            Share::new(2, 7),
            Share::new(3, 12),
            Share::new(1, 4),
        ];
        let selected = select(&shares, 3).unwrap();
        assert_eq!(
            selected,
            vec![Share::new(1, 4), Share::new(2, 7), Share::new(3, 12)]
        );
    }

    #[test]
    fn test_select_orders_negative_and_large_x() {
        let big: BigInt = BigInt::from(1u8) << 100usize;
        let shares = vec![
            Share::new(big.clone(), 1),
            Share::new(-5, 2),
            Share::new(0, 3),
        ];
        let xs: Vec<BigInt> = select(&shares, 3)
            .unwrap()
            .into_iter()
            .map(|s| s.x)
            .collect();
        assert_eq!(xs, vec![BigInt::from(-5), BigInt::from(0), big]);
    }

    #[test]
    fn test_select_all_and_none() {
        let shares = vec![Share::new(2, 7), Share::new(1, 4)];
        assert_eq!(select(&shares, 2).unwrap().len(), 2);
        assert!(select(&shares, 0).unwrap().is_empty());
    }

    #[test]
    fn test_select_insufficient() {
        let shares = vec![Share::new(1, 4)];
        assert!(matches!(
            select(&shares, 2),
            Err(RecoveryError::InsufficientShares {
                available: 1,
                required: 2
            })
        ));
    }

    proptest! {
        #[test]
        fn select_ignores_input_order(
            (xs, k, order) in prop::collection::btree_set(-1000i64..1000, 1..20)
                .prop_flat_map(|xs| {
                    let len = xs.len();
                    let xs: Vec<i64> = xs.into_iter().collect();
                    (Just(xs.clone()), 1..=len, Just(xs).prop_shuffle())
                })
        ) {
            let shares: Vec<Share> = order.iter().map(|x| Share::new(*x, *x * 3)).collect();
            let selected = select(&shares, k).unwrap();

            let expected: Vec<Share> = xs.iter().take(k).map(|x| Share::new(*x, *x * 3)).collect();
            prop_assert_eq!(selected, expected);
        }
    }
}
