// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::{Result, anyhow};
use localfs::{ReadOptions, Storage, Storager};

use crate::common::Progress;

/// Stream an object (or a byte range of it) to `output`
pub fn cat_command(
    storage: &Storage,
    path: &str,
    offset: Option<u64>,
    size: Option<u64>,
    progress: Option<&Progress>,
    output: &mut dyn Write,
) -> Result<u64> {
    diagnostics::log_debug!("cat_command called with path: {path}", path: path);

    let mut opts = ReadOptions::new();
    if let Some(offset) = offset {
        opts = opts.with_offset(offset);
    }
    if let Some(size) = size {
        opts = opts.with_size(size);
    }
    if let Some(progress) = progress {
        opts = opts.with_read_callback(progress.callback());
    }

    let mut reader = storage
        .read(path, opts)
        .map_err(|e| anyhow!("Failed to open '{}': {}", path, e))?;

    let copied = localfs::iowrap::copy_all(output, &mut reader)
        .map_err(|e| anyhow!("Failed to read '{}': {}", path, e))?;
    output
        .flush()
        .map_err(|e| anyhow!("Failed to flush output: {}", e))?;

    diagnostics::log_info!("Read {bytes} bytes from {path}", bytes: copied, path: path);
    Ok(copied)
}
