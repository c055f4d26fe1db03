// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Configuration for the `shamir-recover` binary.
//!
//! Values are layered with `figment`: built-in defaults, then an optional YAML file, then
//! `SHAMIR_RECOVER_*` environment variables, then whatever the command line sets.

mod errors;
pub mod load_config;
mod recover_config;

pub use errors::{ConfigError, ConfigResult};
pub use recover_config::*;
