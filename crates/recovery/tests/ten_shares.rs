// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use sr_recovery::{interpolate_at_zero, reconstruct_json, RecoveryError, Share, ShareDocument};
use std::str::FromStr;

const TEN_SHARES: &str = include_str!("fixtures/ten_shares.json");

const DECODED: [&str; 10] = [
    "995085094601491",
    "21394886326566393",
    "196563650089608567",
    "1016509518118225951",
    "3711974121218449851",
    "10788619898233492461",
    "26709394976508342463",
    "58725075613853308713",
    "117852986202006511971",
    "220003896831595324801",
];

fn big(text: &str) -> BigInt {
    BigInt::from_str(text).unwrap()
}

fn decoded_shares() -> Vec<Share> {
    ShareDocument::from_json(TEN_SHARES)
        .unwrap()
        .into_share_set()
        .unwrap()
        .shares()
        .to_vec()
}

fn points(xs: &[u32]) -> Vec<Share> {
    let shares = decoded_shares();
    xs.iter().map(|x| shares[*x as usize - 1].clone()).collect()
}

#[test]
fn test_decodes_every_share_exactly() {
    let shares = decoded_shares();
    assert_eq!(shares.len(), 10);
    for (i, share) in shares.iter().enumerate() {
        assert_eq!(share.x, BigInt::from(i + 1));
        assert_eq!(share.y, big(DECODED[i]), "share at x = {}", i + 1);
    }
    // Several of these exceed u64::MAX.
    assert!(shares[9].y > BigInt::from(u64::MAX));
}

#[test]
fn test_reconstructs_from_smallest_seven() {
    let result = reconstruct_json(TEN_SHARES).unwrap();
    assert_eq!(result.secret, big("79836264049851"));
    assert_eq!(result.polynomial_degree, 6);
    assert_eq!(result.points_used, 7);
    assert_eq!(result.total_points, 10);
}

#[test]
fn test_document_order_does_not_matter() {
    let doc = ShareDocument::from_json(TEN_SHARES).unwrap();
    let mut shares = doc.shares().to_vec();
    shares.reverse();
    let reversed = ShareDocument::new(doc.keys(), shares);

    let json = reversed.to_json_pretty().unwrap();
    assert_eq!(
        reconstruct_json(&json).unwrap(),
        reconstruct_json(TEN_SHARES).unwrap()
    );
}

#[test]
fn test_inconsistent_subset_is_not_an_integer() {
    let err = interpolate_at_zero(&points(&[2, 3, 4, 6, 7, 8, 9])).unwrap_err();
    match err {
        RecoveryError::NonIntegerResult {
            numerator,
            denominator,
        } => {
            assert_eq!(numerator, big("399181320248121"));
            assert_eq!(denominator, BigInt::from(5));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_other_subsets_disagree() {
    // The fixture is not consistent across all ten shares, so the fixed
    // selection policy is what makes the answer reproducible.
    let upper = interpolate_at_zero(&points(&[4, 5, 6, 7, 8, 9, 10])).unwrap();
    assert_eq!(upper, big("79836264059301"));
    assert_ne!(upper, big("79836264049851"));
}
