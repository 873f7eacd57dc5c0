// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Result, anyhow};
use localfs::{Copier, CopyOptions, Storage};

pub fn copy_command(storage: &Storage, source: &str, dest: &str) -> Result<()> {
    diagnostics::log_debug!("copy_command: {source} -> {dest}", source: source, dest: dest);

    storage
        .copy(source, dest, CopyOptions)
        .map_err(|e| anyhow!("Failed to copy '{}' to '{}': {}", source, dest, e))
}
