// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Result, anyhow};
use localfs::{StatOptions, Storage, Storager};

use crate::common::render_object;

/// Describe one object, as a display line or as JSON
pub fn stat_command(
    storage: &Storage,
    path: &str,
    json: bool,
    mut handler: impl FnMut(String),
) -> Result<()> {
    diagnostics::log_debug!("stat_command called with path: {path}", path: path);

    let object = storage
        .stat(path, StatOptions)
        .map_err(|e| anyhow!("Failed to stat '{}': {}", path, e))?;

    handler(render_object(&object, json)?);
    Ok(())
}
