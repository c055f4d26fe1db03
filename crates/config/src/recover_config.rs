// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{ConfigError, ConfigResult};
use crate::load_config::{find_in_parent, resolve_config_path};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::Level;

/// File looked up from the working directory upwards when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "shamir-recover.yaml";

/// Prefix of the environment variables read into [`RecoverConfig`],
/// e.g. `SHAMIR_RECOVER_PRETTY=true`.
pub const ENV_PREFIX: &str = "SHAMIR_RECOVER_";

/// Settings for the `shamir-recover` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoverConfig {
    /// Log level used when no `-v` or `-q` flag is given
    log_level: Option<String>,
    /// Pretty-print result JSON
    pretty: bool,
    /// Directory receiving one `<stem>.result.json` per recovered document
    output_dir: Option<PathBuf>,
    /// The file the configuration was read from, if any
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl RecoverConfig {
    pub fn log_level(&self) -> Option<Level> {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(level) = &self.log_level {
            if level.parse::<Level>().is_err() {
                return Err(ConfigError::InvalidLogLevel {
                    value: level.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Values set on the command line. `None` leaves the lower layers untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Loads the configuration relative to the current working directory.
pub fn load_config(
    config_file: Option<PathBuf>,
    overrides: CliOverrides,
) -> ConfigResult<RecoverConfig> {
    let cwd = env::current_dir().map_err(ConfigError::CurrentDir)?;
    load_config_from(&cwd, config_file.as_deref(), overrides)
}

/// Loads the configuration, resolving `config_file` and the default file against `cwd`.
///
/// A missing default file is fine; a missing explicit file is `NotFound`.
pub fn load_config_from(
    cwd: &Path,
    config_file: Option<&Path>,
    overrides: CliOverrides,
) -> ConfigResult<RecoverConfig> {
    let resolved = resolve_config_path(find_in_parent, cwd, DEFAULT_CONFIG_NAME, config_file);

    let mut figment = Figment::from(Serialized::defaults(RecoverConfig::default()));
    if let Some(path) = &resolved {
        if !path.is_file() {
            return Err(ConfigError::NotFound { path: path.clone() });
        }
        figment = figment.merge(Yaml::file(path));
    }

    let mut config: RecoverConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()
        .map_err(Box::new)?;
    config.validate()?;
    config.config_file = resolved;

    Ok(config)
}
