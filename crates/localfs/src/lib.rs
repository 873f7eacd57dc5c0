// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! localfs -- the host filesystem as a storage backend
//!
//! [`Storage`] exposes a directory tree through the same operations an
//! object-store backend offers: read, write, stat, list, delete, copy and
//! move. Callers address objects by logical, `/`-separated names relative
//! to a configured work dir; the adapter maps them to native host paths.
//!
//! The path `-` is special for `read`, `write` and `stat`: it stands for
//! the process's standard input (read) or standard output (write) and never
//! touches the filesystem.
//!
//! Everything is synchronous. Returned readers own their file handle and
//! release it when dropped.

mod backend;
mod config;
mod error;
pub mod iowrap;
mod list;
mod object;
mod options;
pub mod path;
mod storage;


pub use backend::{Copier, Mover, Storager};
pub use config::{StorageConfig, WORKDIR_ENV};
pub use error::{Error, Result};
pub use list::Entries;
pub use object::{Object, ObjectType, StorageMeta, detect_content_type};
pub use options::{
    CopyOptions, DeleteOptions, ListDirOptions, MetadataOptions, MoveOptions, ObjectCallback,
    ReadCallback, ReadOptions, StatOptions, WriteOptions,
};
pub use path::{LogicalPath, STD_STREAM};
pub use storage::Storage;

/// Create a storage rooted at the given work dir.
///
/// The directory does not have to exist; operations that need it will
/// fail with the host's not-found error.
pub fn new_storage<P: Into<std::path::PathBuf>>(work_dir: P) -> Result<Storage> {
    Storage::new(&StorageConfig::new(work_dir))
}
