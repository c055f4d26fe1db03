// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Walks from `path` up to the filesystem root looking for `filename`.
pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = path.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.is_file() {
            return Some(file_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Picks the configuration file to read.
///
/// An explicit `cli_file` always wins and is resolved against `cwd` when relative. Without
/// one, `default_filename` is searched for from `cwd` upwards; `None` means there is no file
/// and the defaults apply.
pub fn resolve_config_path(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_filename: &str,
    cli_file: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(cli_file) = cli_file {
        if cli_file.is_absolute() {
            return Some(cli_file.to_path_buf());
        }
        return Some(cwd.join(cli_file));
    }

    find_in_parent(cwd, default_filename)
}
