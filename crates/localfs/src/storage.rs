// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::backend::{Copier, Mover, Storager};
use crate::config::StorageConfig;
use crate::error::{Error, IoContext, Result};
use crate::iowrap::{self, CallbackReader};
use crate::list::Entries;
use crate::object::{Object, ObjectType, StorageMeta, detect_content_type};
use crate::options::{
    CopyOptions, DeleteOptions, ListDirOptions, MetadataOptions, MoveOptions, ReadCallback,
    ReadOptions, StatOptions, WriteOptions,
};
use crate::path::{LogicalPath, Resolver, STD_STREAM, to_slash};
use diagnostics::*;
use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Local filesystem storage rooted at a work dir.
///
/// Holds nothing but the resolved work dir, so it can be cloned and shared
/// between threads freely. Every call goes straight to the host filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    resolver: Resolver,
}

impl Storage {
    /// Create a storage from its configuration.
    ///
    /// The work dir is normalized but not checked: it need not exist yet.
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let work_dir = config.resolved_work_dir()?;
        let dir = work_dir.display().to_string();
        debug!("localfs: new storage at {work_dir}", work_dir: dir);
        Ok(Self {
            resolver: Resolver::new(work_dir),
        })
    }

    #[must_use]
    pub fn work_dir(&self) -> &Path {
        self.resolver.work_dir()
    }

    /// Host path for a logical name
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.resolver.resolve(path)
    }

    /// Logical `/`-separated name for a host path below the work dir
    pub fn to_logical_name<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        self.resolver.to_logical_name(path)
    }

    /// Lazy listing of one directory level; see [`Entries`]
    pub fn entries(&self, dir: &str, follow_links: bool) -> Result<Entries> {
        Entries::open(self.resolve(dir), dir, follow_links)
    }

    fn stat_path(&self, name: &str) -> Result<Object> {
        let rp = self.resolve(name);
        let meta = fs::metadata(&rp).op_context("stat", &rp)?;
        let file_type = meta.file_type();

        let object = Object::new(rp, to_slash(name), ObjectType::Invalid).with_fs_metadata(&meta);

        if file_type.is_dir() {
            return Ok(Object {
                object_type: ObjectType::Dir,
                ..object
            });
        }
        if file_type.is_file() {
            return Ok(Object {
                object_type: ObjectType::File,
                ..object
            }
            .with_content_type(detect_content_type(name)));
        }
        if is_stream_type(&file_type) {
            return Ok(Object {
                object_type: ObjectType::Stream,
                ..object
            });
        }
        Ok(object)
    }

    fn open_file(&self, name: &str, offset: Option<u64>) -> Result<File> {
        let rp = self.resolve(name);
        let mut file = File::open(&rp).op_context("open", &rp)?;
        if let Some(offset) = offset {
            let _ = file.seek(SeekFrom::Start(offset)).op_context("seek", &rp)?;
        }
        Ok(file)
    }

    fn create_file(&self, name: &str) -> Result<File> {
        self.resolver.ensure_parent(name)?;
        let rp = self.resolve(name);
        File::create(&rp).op_context("create", &rp)
    }
}

impl std::fmt::Display for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Storager localfs {{WorkDir: {}}}", self.work_dir().display())
    }
}

impl Storager for Storage {
    fn delete(&self, path: &str, _opts: DeleteOptions) -> Result<()> {
        let rp = self.resolve(path);
        let rp_str = rp.display().to_string();
        debug!("localfs: delete {path}", path: rp_str);

        // Single entry only: a file, a link, or an empty directory.
        let meta = fs::symlink_metadata(&rp).op_context("remove", &rp)?;
        if meta.is_dir() {
            fs::remove_dir(&rp).op_context("remove", &rp)
        } else {
            fs::remove_file(&rp).op_context("remove", &rp)
        }
    }

    fn list_dir(&self, dir: &str, mut opts: ListDirOptions<'_>) -> Result<()> {
        let rp = self.resolve(dir).display().to_string();
        let follow = opts.follow_links;
        debug!("localfs: list {dir} follow_links={follow}", dir: rp, follow: follow);

        for object in self.entries(dir, opts.follow_links)? {
            let object = object?;
            let callback = if object.is_dir() {
                opts.on_dir.as_mut()
            } else {
                opts.on_file.as_mut()
            };
            if let Some(callback) = callback {
                callback(object);
            }
        }
        Ok(())
    }

    fn metadata(&self, _opts: MetadataOptions) -> StorageMeta {
        StorageMeta {
            work_dir: self.work_dir().display().to_string(),
            ..StorageMeta::default()
        }
    }

    fn read(&self, path: &str, opts: ReadOptions) -> Result<Box<dyn Read + Send>> {
        let ReadOptions {
            offset,
            size,
            read_callback,
        } = opts;

        let reader: Box<dyn Read + Send> = match LogicalPath::parse(path) {
            LogicalPath::Std => {
                debug!("localfs: read from stdin");
                Box::new(io::stdin())
            }
            LogicalPath::Named(name) => {
                let rp = self.resolve(name).display().to_string();
                debug!("localfs: read {path}", path: rp);
                Box::new(self.open_file(name, offset)?)
            }
        };

        Ok(limit_reader(reader, size, read_callback))
    }

    fn stat(&self, path: &str, _opts: StatOptions) -> Result<Object> {
        match LogicalPath::parse(path) {
            LogicalPath::Std => Ok(Object::new(
                PathBuf::from(STD_STREAM),
                STD_STREAM.to_string(),
                ObjectType::Stream,
            )),
            LogicalPath::Named(name) => self.stat_path(name),
        }
    }

    fn write(&self, path: &str, src: &mut dyn Read, opts: WriteOptions) -> Result<u64> {
        let WriteOptions {
            size,
            read_callback,
        } = opts;

        let mut src: Box<dyn Read + '_> = match read_callback {
            Some(callback) => Box::new(CallbackReader::new(src, callback)),
            None => Box::new(src),
        };

        match LogicalPath::parse(path) {
            LogicalPath::Std => {
                debug!("localfs: write to stdout");
                let stdout = io::stdout();
                let mut out = stdout.lock();
                let written = copy_into(&mut out, &mut src, size, Path::new(STD_STREAM))?;
                out.flush().op_context("flush", STD_STREAM)?;
                Ok(written)
            }
            LogicalPath::Named(name) => {
                let rp = self.resolve(name);
                let mut file = self.create_file(name)?;
                let written = copy_into(&mut file, &mut src, size, &rp)?;
                let rp_str = rp.display().to_string();
                debug!("localfs: wrote {bytes} bytes to {path}", bytes: written, path: rp_str);
                Ok(written)
            }
        }
    }
}

impl Copier for Storage {
    fn copy(&self, src: &str, dst: &str, _opts: CopyOptions) -> Result<()> {
        let rs = self.resolve(src);
        let rd = self.resolve(dst);

        self.resolver.ensure_parent(dst)?;

        // Both handles are closed on drop, on every return path.
        let mut src_file = File::open(&rs).op_context("open", &rs)?;
        let mut dst_file = File::create(&rd).op_context("create", &rd)?;
        let copied = iowrap::copy_all(&mut dst_file, &mut src_file).op_context("copy", &rd)?;

        let (from, to) = (rs.display().to_string(), rd.display().to_string());
        debug!("localfs: copied {bytes} bytes {from} -> {to}", bytes: copied, from: from, to: to);
        Ok(())
    }
}

impl Mover for Storage {
    fn move_to(&self, src: &str, dst: &str, _opts: MoveOptions) -> Result<()> {
        let rs = self.resolve(src);
        let rd = self.resolve(dst);

        self.resolver.ensure_parent(dst)?;
        fs::rename(&rs, &rd).op_context("rename", &rs)?;

        let (from, to) = (rs.display().to_string(), rd.display().to_string());
        debug!("localfs: moved {from} -> {to}", from: from, to: to);
        Ok(())
    }
}

/// Apply the size bound, then the progress callback, to an opened source.
///
/// Stdin and files go through the same wrapping.
pub(crate) fn limit_reader(
    reader: Box<dyn Read + Send>,
    size: Option<u64>,
    read_callback: Option<ReadCallback>,
) -> Box<dyn Read + Send> {
    let reader: Box<dyn Read + Send> = match size {
        Some(size) => Box::new(reader.take(size)),
        None => reader,
    };
    match read_callback {
        Some(callback) => Box::new(CallbackReader::new(reader, callback)),
        None => reader,
    }
}

/// Copy `src` into `dst`, either exactly `size` bytes or until exhausted
fn copy_into(
    dst: &mut dyn Write,
    src: &mut dyn Read,
    size: Option<u64>,
    path: &Path,
) -> Result<u64> {
    match size {
        Some(expected) => {
            let copied = iowrap::copy_n(dst, src, expected).op_context("write", path)?;
            if copied < expected {
                return Err(Error::ShortCopy { expected, copied });
            }
            Ok(copied)
        }
        None => iowrap::copy_all(dst, src).op_context("write", path),
    }
}

#[cfg(unix)]
fn is_stream_type(file_type: &fs::FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;
    file_type.is_fifo()
        || file_type.is_socket()
        || file_type.is_block_device()
        || file_type.is_char_device()
}

#[cfg(not(unix))]
fn is_stream_type(_file_type: &fs::FileType) -> bool {
    false
}
