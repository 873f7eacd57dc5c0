// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use anyhow::{Result, anyhow};
use localfs::{Storage, Storager, WriteOptions};

use crate::common::Progress;

/// Store everything from `input` (or exactly `size` bytes of it) at `path`
pub fn write_command(
    storage: &Storage,
    path: &str,
    size: Option<u64>,
    progress: Option<&Progress>,
    input: &mut dyn Read,
) -> Result<u64> {
    diagnostics::log_debug!("write_command called with path: {path}", path: path);

    let mut opts = WriteOptions::new();
    if let Some(size) = size {
        opts = opts.with_size(size);
    }
    if let Some(progress) = progress {
        opts = opts.with_read_callback(progress.callback());
    }

    let written = storage
        .write(path, input, opts)
        .map_err(|e| anyhow!("Failed to write '{}': {}", path, e))?;

    diagnostics::log_info!("Wrote {bytes} bytes to {path}", bytes: written, path: path);
    Ok(written)
}
