// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, IoContext, Result};
use crate::object::{Object, ObjectType, detect_content_type};
use crate::path::{join_logical, to_slash};
use diagnostics::*;
use std::fs::{self, DirEntry, ReadDir};
use std::path::PathBuf;

/// Lazy, single-level walk of a host directory.
///
/// Yields one [`Object`] per child in the order the OS enumerates them.
/// Symlinks are skipped unless `follow_links` is set, in which case they
/// are resolved to their final target. The first error ends the walk.
pub struct Entries {
    read_dir: ReadDir,
    /// Host path of the directory being listed
    dir_path: PathBuf,
    /// Slash-separated logical name of that directory
    logical_dir: String,
    follow_links: bool,
    done: bool,
}

impl Entries {
    pub(crate) fn open(dir_path: PathBuf, logical_dir: &str, follow_links: bool) -> Result<Self> {
        let read_dir = fs::read_dir(&dir_path).op_context("readdir", &dir_path)?;
        Ok(Self {
            read_dir,
            dir_path,
            logical_dir: to_slash(logical_dir),
            follow_links,
            done: false,
        })
    }

    fn build(&self, entry: &DirEntry) -> Result<Option<Object>> {
        let file_name = entry.file_name();
        let id = self.dir_path.join(&file_name);
        let file_type = entry.file_type().op_context("stat", &id)?;

        // Links are resolved to their final target and re-stat'ed; the
        // entry keeps its own id and name.
        let target = if file_type.is_symlink() {
            if !self.follow_links {
                let path = id.display().to_string();
                debug!("list: skipping symlink {path}", path: path);
                return Ok(None);
            }
            let real = fs::canonicalize(&id).op_context("readlink", &id)?;
            fs::metadata(&real).op_context("stat", &real)?
        } else {
            entry.metadata().op_context("stat", &id)?
        };

        let file_name = file_name.to_string_lossy();
        let name = join_logical(&self.logical_dir, &file_name);

        if target.is_dir() {
            return Ok(Some(
                Object::new(id, name, ObjectType::Dir).with_fs_metadata(&target),
            ));
        }

        Ok(Some(
            Object::new(id, name, ObjectType::File)
                .with_fs_metadata(&target)
                .with_content_type(detect_content_type(&file_name)),
        ))
    }
}

impl Iterator for Entries {
    type Item = Result<Object>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let entry = match self.read_dir.next() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(Error::io("readdir", &self.dir_path, e)));
                }
            };

            match self.build(&entry) {
                Ok(Some(object)) => return Some(Ok(object)),
                Ok(None) => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Entries {}
