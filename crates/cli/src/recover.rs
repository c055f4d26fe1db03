// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use sr_config::RecoverConfig;
use sr_recovery::{reconstruct_json, ReconstructionResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn execute(config: &RecoverConfig, files: &[PathBuf]) -> Result<()> {
    for file in files {
        let result = recover_file(file)?;
        let json = to_json(&result, config.pretty())?;
        println!("{}", json);

        if let Some(dir) = config.output_dir() {
            let written = write_result(dir, file, &json)?;
            info!("Wrote {}", written.display());
        }
    }

    Ok(())
}

fn recover_file(file: &Path) -> Result<ReconstructionResult> {
    debug!("Reading shares from {}", file.display());
    let json = fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;
    let result = reconstruct_json(&json)
        .with_context(|| format!("Could not recover the secret in {}", file.display()))?;
    Ok(result)
}

fn to_json(result: &ReconstructionResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Writes `json` to `<dir>/<stem>.result.json` and returns that path.
fn write_result(dir: &Path, file: &Path, json: &str) -> Result<PathBuf> {
    let stem = file
        .file_stem()
        .with_context(|| format!("{} has no file name", file.display()))?;
    let mut name = stem.to_os_string();
    name.push(".result.json");

    fs::create_dir_all(dir).with_context(|| format!("Could not create {}", dir.display()))?;
    let path = dir.join(name);
    fs::write(&path, format!("{json}\n"))
        .with_context(|| format!("Could not write {}", path.display()))?;
    Ok(path)
}
