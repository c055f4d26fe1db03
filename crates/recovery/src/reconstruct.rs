// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The end-to-end reconstruction pipeline.

use crate::errors::RecoveryResult;
use crate::input::ShareDocument;
use crate::interpolation::interpolate_at_zero;
use crate::share::ShareSet;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a successful reconstruction.
///
/// Serializes as
/// `{"secret": "<decimal>", "polynomialDegree": k-1, "pointsUsed": k, "totalPoints": n}`;
/// the secret is a string so that JSON consumers never round it through a float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconstructionResult {
    #[serde(with = "decimal")]
    pub secret: BigInt,
    pub polynomial_degree: usize,
    pub points_used: usize,
    pub total_points: usize,
}

/// Selects `k` shares from `shares` and interpolates the secret.
#[instrument(skip_all)]
pub fn reconstruct(shares: &ShareSet) -> RecoveryResult<ReconstructionResult> {
    let k = shares.k();
    debug!("Processing: n={}, k={}", shares.n(), k);

    let selected = shares.select()?;
    debug!(
        "Using {} points with x = [{}]",
        selected.len(),
        selected
            .iter()
            .map(|s| s.x.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let secret = interpolate_at_zero(&selected)?;
    info!(
        "Reconstructed secret from {} of {} shares (degree {})",
        k,
        shares.n(),
        k - 1
    );

    Ok(ReconstructionResult {
        secret,
        polynomial_degree: k - 1,
        points_used: selected.len(),
        total_points: shares.n(),
    })
}

/// Parses a JSON share document, decodes it and reconstructs the secret.
pub fn reconstruct_json(json: &str) -> RecoveryResult<ReconstructionResult> {
    let shares = ShareDocument::from_json(json)?.into_share_set()?;
    reconstruct(&shares)
}

mod decimal {
    use num_bigint::BigInt;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<BigInt>().map_err(de::Error::custom)
    }
}
