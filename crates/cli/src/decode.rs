// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use num_bigint::BigInt;
use sr_recovery::decoder::{decode, parse_base};

pub fn execute(base: &str, digits: &str) -> Result<()> {
    println!("{}", decode_to_decimal(base, digits)?);
    Ok(())
}

fn decode_to_decimal(base: &str, digits: &str) -> Result<BigInt> {
    let value = decode(parse_base(base)?, digits)?;
    Ok(value)
}
