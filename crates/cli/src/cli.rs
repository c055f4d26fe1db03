// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::helpers::telemetry::setup_simple_tracing;
use crate::{decode, recover, split};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use sr_config::{load_config, CliOverrides, RecoverConfig};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "shamir-recover", version)]
#[command(about = "Reconstruct Shamir secrets from base-encoded shares", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `shamir-recover -vvv`
    /// will give you trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    /// Flags win over the configured level, which wins over `WARN`.
    pub fn log_level(&self, config: &RecoverConfig) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => config.log_level().unwrap_or(Level::WARN),
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    pub fn execute(self) -> Result<()> {
        let config = self.load_config()?;

        setup_simple_tracing(self.log_level(&config));
        if let Some(path) = config.config_file() {
            info!("Config loaded from: {}", path.display());
        }

        match self.command {
            Commands::Recover { files, .. } => recover::execute(&config, &files)?,
            Commands::Decode { base, digits } => decode::execute(&base, &digits)?,
            Commands::Split {
                secret,
                n,
                k,
                bits,
                seed,
                out,
            } => split::execute(&secret, n, k, bits, seed, out)?,
        }

        Ok(())
    }

    pub fn load_config(&self) -> Result<RecoverConfig> {
        let config = load_config(self.config.clone(), self.overrides())?;
        Ok(config)
    }

    fn overrides(&self) -> CliOverrides {
        match &self.command {
            Commands::Recover {
                pretty, output_dir, ..
            } => CliOverrides {
                pretty: pretty.then_some(true),
                output_dir: output_dir.clone(),
            },
            _ => CliOverrides::default(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconstruct the secret from one or more JSON share documents
    Recover {
        /// Share documents of the form `{"keys": {"n": .., "k": ..}, "1": {"base": .., "value": ..}, ..}`
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Pretty-print the result JSON
        #[arg(long)]
        pretty: bool,

        /// Also write `<stem>.result.json` for every document into this directory
        #[arg(long = "output-dir", short = 'o')]
        output_dir: Option<PathBuf>,
    },

    /// Print the decimal value of a digit string
    Decode {
        /// Radix between 2 and 36
        #[arg(long, short = 'b')]
        base: String,

        /// Digits, case-insensitive beyond 9
        digits: String,
    },

    /// Deal a fresh set of shares for a secret
    Split {
        /// The secret as a non-negative decimal integer
        #[arg(long, short = 's')]
        secret: String,

        /// Number of shares to deal
        #[arg(short = 'n')]
        n: usize,

        /// Number of shares needed to reconstruct
        #[arg(short = 'k')]
        k: usize,

        /// Bit size of the random coefficients
        #[arg(long, default_value_t = 256)]
        bits: u64,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write the document here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
