// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use num_bigint::BigInt;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sr_recovery::{split, ShareDocument};
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub fn execute(
    secret: &str,
    n: usize,
    k: usize,
    bits: u64,
    seed: Option<u64>,
    out: Option<PathBuf>,
) -> Result<()> {
    let document = deal(secret, n, k, bits, seed)?;
    let json = document.to_json_pretty()?;

    match out {
        Some(path) => {
            fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("Could not write {}", path.display()))?;
            info!("Wrote {} shares to {}", n, path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn deal(secret: &str, n: usize, k: usize, bits: u64, seed: Option<u64>) -> Result<ShareDocument> {
    let secret: BigInt = secret
        .parse()
        .with_context(|| format!("'{secret}' is not a decimal integer"))?;

    let mut rng = match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    Ok(split(&secret, n, k, bits, &mut rng)?)
}
