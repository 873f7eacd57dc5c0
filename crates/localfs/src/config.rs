// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Environment variable consulted by [`StorageConfig::from_env`]
pub const WORKDIR_ENV: &str = "LOCALFS_WORKDIR";

/// Configuration for a local storage instance.
///
/// Example YAML:
///
/// ```yaml
/// work_dir: ~/data
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root that relative logical paths are resolved against
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,
}

fn default_work_dir() -> PathBuf {
    PathBuf::from("/")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            work_dir: default_work_dir(),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(work_dir: P) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    /// Work dir from `LOCALFS_WORKDIR`, or the current directory when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(WORKDIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(Self::new(dir)),
            _ => std::env::current_dir()
                .map(Self::new)
                .map_err(|e| Error::InvalidWorkDir(format!("cannot read current dir: {e}"))),
        }
    }

    /// Load a configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io("read config", path, e))?;
        serde_yaml_ng::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The absolute, lexically cleaned work dir.
    ///
    /// A leading `~` expands to `$HOME`. Relative paths are taken against
    /// the current directory. The directory itself is not required to exist.
    pub fn resolved_work_dir(&self) -> Result<PathBuf> {
        let expanded = expand_home(&self.work_dir)?;
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            let cwd = std::env::current_dir()
                .map_err(|e| Error::InvalidWorkDir(format!("cannot read current dir: {e}")))?;
            cwd.join(expanded)
        };
        Ok(clean_native(&absolute))
    }
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = std::env::var_os("HOME")
                .filter(|h| !h.is_empty())
                .ok_or_else(|| Error::InvalidWorkDir("HOME is not set".to_string()))?;
            Ok(PathBuf::from(home).join(components.as_path()))
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Drop `.` components and fold `..` into its parent
fn clean_native(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
