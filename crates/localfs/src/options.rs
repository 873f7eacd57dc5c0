// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Per-call options for each storage operation.
//!
//! Options are plain values built by the caller for a single call and
//! dropped when it returns. Every field is optional.

use crate::object::Object;

/// Progress hook receiving the byte count of each underlying transfer
pub type ReadCallback = Box<dyn FnMut(usize) + Send>;

/// Per-entry hook for `list_dir`
pub type ObjectCallback<'a> = Box<dyn FnMut(Object) + 'a>;

#[derive(Default)]
pub struct ReadOptions {
    pub offset: Option<u64>,
    pub size: Option<u64>,
    pub read_callback: Option<ReadCallback>,
}

impl ReadOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_read_callback<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.read_callback = Some(Box::new(f));
        self
    }
}

#[derive(Default)]
pub struct WriteOptions {
    /// Copy exactly this many bytes from the source
    pub size: Option<u64>,
    pub read_callback: Option<ReadCallback>,
}

impl WriteOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_read_callback<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.read_callback = Some(Box::new(f));
        self
    }
}

/// Options for `list_dir`.
///
/// Symlinks are skipped unless `follow_links` is set.
#[derive(Default)]
pub struct ListDirOptions<'a> {
    pub follow_links: bool,
    pub on_dir: Option<ObjectCallback<'a>>,
    pub on_file: Option<ObjectCallback<'a>>,
}

impl<'a> ListDirOptions<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    #[must_use]
    pub fn on_dir<F>(mut self, f: F) -> Self
    where
        F: FnMut(Object) + 'a,
    {
        self.on_dir = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_file<F>(mut self, f: F) -> Self
    where
        F: FnMut(Object) + 'a,
    {
        self.on_file = Some(Box::new(f));
        self
    }
}

// Operations below currently take no options; the structs keep every
// operation's signature uniform.

#[derive(Debug, Default, Clone, Copy)]
pub struct StatOptions;

#[derive(Debug, Default, Clone, Copy)]
pub struct DeleteOptions;

#[derive(Debug, Default, Clone, Copy)]
pub struct CopyOptions;

#[derive(Debug, Default, Clone, Copy)]
pub struct MoveOptions;

#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataOptions;

impl std::fmt::Debug for ReadOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadOptions")
            .field("offset", &self.offset)
            .field("size", &self.size)
            .field("read_callback", &self.read_callback.is_some())
            .finish()
    }
}

impl std::fmt::Debug for WriteOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteOptions")
            .field("size", &self.size)
            .field("read_callback", &self.read_callback.is_some())
            .finish()
    }
}
