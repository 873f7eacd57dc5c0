// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use anyhow::{Result, anyhow};
use localfs::{ListDirOptions, Object, Storage, Storager};

use crate::common::render_object;

/// List one directory level.
///
/// Directories come first, then files, each group sorted by name.
pub fn list_command(
    storage: &Storage,
    dir: &str,
    follow_links: bool,
    json: bool,
    mut handler: impl FnMut(String),
) -> Result<()> {
    diagnostics::log_debug!("list_command called with dir: {dir}", dir: dir);

    let dirs: RefCell<Vec<Object>> = RefCell::new(Vec::new());
    let files: RefCell<Vec<Object>> = RefCell::new(Vec::new());

    storage
        .list_dir(
            dir,
            ListDirOptions::new()
                .follow_links(follow_links)
                .on_dir(|o| dirs.borrow_mut().push(o))
                .on_file(|o| files.borrow_mut().push(o)),
        )
        .map_err(|e| anyhow!("Failed to list '{}': {}", dir, e))?;

    let mut dirs = dirs.into_inner();
    let mut files = files.into_inner();
    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));

    for object in dirs.iter().chain(files.iter()) {
        handler(render_object(object, json)?);
    }
    Ok(())
}
