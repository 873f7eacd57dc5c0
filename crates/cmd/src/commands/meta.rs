// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Result, anyhow};
use localfs::{MetadataOptions, Storage, Storager};

/// Show storage-level metadata
pub fn meta_command(storage: &Storage, json: bool, mut handler: impl FnMut(String)) -> Result<()> {
    let meta = storage.metadata(MetadataOptions);
    if json {
        handler(
            serde_json::to_string(&meta)
                .map_err(|e| anyhow!("Failed to encode metadata: {}", e))?,
        );
    } else {
        handler(format!("{}", storage));
        handler(format!("work_dir: {}", meta.work_dir));
    }
    Ok(())
}
