// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Result;
use crate::object::{Object, StorageMeta};
use crate::options::{
    CopyOptions, DeleteOptions, ListDirOptions, MetadataOptions, MoveOptions, ReadOptions,
    StatOptions, WriteOptions,
};
use std::io::Read;

/// The operations every storage backend offers.
///
/// Paths are logical: `/`-separated and relative to the backend's own root.
/// All calls block until the backend has finished.
pub trait Storager: Send + Sync + std::fmt::Display {
    /// Remove a single entry. Missing entries are an error.
    fn delete(&self, path: &str, opts: DeleteOptions) -> Result<()>;

    /// Walk one directory level, handing each entry to the matching callback
    fn list_dir(&self, dir: &str, opts: ListDirOptions<'_>) -> Result<()>;

    fn metadata(&self, opts: MetadataOptions) -> StorageMeta;

    /// Open an object for reading. Dropping the reader releases it.
    fn read(&self, path: &str, opts: ReadOptions) -> Result<Box<dyn Read + Send>>;

    fn stat(&self, path: &str, opts: StatOptions) -> Result<Object>;

    /// Store everything `src` yields (or exactly `opts.size` bytes) and
    /// return the number of bytes written.
    fn write(&self, path: &str, src: &mut dyn Read, opts: WriteOptions) -> Result<u64>;
}

/// Server-side copy within one backend
pub trait Copier {
    fn copy(&self, src: &str, dst: &str, opts: CopyOptions) -> Result<()>;
}

/// Server-side move within one backend
pub trait Mover {
    fn move_to(&self, src: &str, dst: &str, opts: MoveOptions) -> Result<()>;
}
