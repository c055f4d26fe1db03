// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use clap::Parser;
use cli::Cli;

mod cli;
mod decode;
pub mod helpers;
mod recover;
mod split;

pub fn main() {
    if let Err(err) = Cli::parse().execute() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
