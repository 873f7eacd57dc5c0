// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Result, anyhow};
use localfs::{DeleteOptions, Storage, Storager};

/// Remove each path in turn, stopping at the first failure
pub fn rm_command(storage: &Storage, paths: &[String]) -> Result<()> {
    for path in paths {
        diagnostics::log_debug!("rm_command: {path}", path: path.as_str());
        storage
            .delete(path, DeleteOptions)
            .map_err(|e| anyhow!("Failed to remove '{}': {}", path, e))?;
    }
    Ok(())
}
