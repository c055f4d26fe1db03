// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not determine the working directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("Could not parse configuration")]
    Parse(#[from] Box<figment::Error>),

    #[error("Unknown log level '{value}'; expected one of error, warn, info, debug, trace")]
    InvalidLogLevel { value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
