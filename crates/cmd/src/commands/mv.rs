// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Result, anyhow};
use localfs::{MoveOptions, Mover, Storage};

pub fn mv_command(storage: &Storage, source: &str, dest: &str) -> Result<()> {
    diagnostics::log_debug!("mv_command: {source} -> {dest}", source: source, dest: dest);

    storage
        .move_to(source, dest, MoveOptions)
        .map_err(|e| anyhow!("Failed to move '{}' to '{}': {}", source, dest, e))
}
