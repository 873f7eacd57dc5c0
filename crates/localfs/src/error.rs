// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

// Error types for local storage operations
use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the local storage adapter.
///
/// Filesystem failures are never classified or retried here; the OS error
/// is carried unchanged in `Io::source` together with the operation and
/// the absolute path it was applied to.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{op} '{}': {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Short copy: expected {expected} bytes, source ended after {copied}")]
    ShortCopy { expected: u64, copied: u64 },

    #[error("Path '{}' is outside work dir '{}'", path.display(), work_dir.display())]
    OutsideWorkDir { path: PathBuf, work_dir: PathBuf },

    #[error("Invalid work dir: {0}")]
    InvalidWorkDir(String),

    #[error("Cannot parse config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub fn io<P: AsRef<Path>>(op: &'static str, path: P, source: io::Error) -> Self {
        Error::Io {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn outside_work_dir<P: AsRef<Path>, W: AsRef<Path>>(path: P, work_dir: W) -> Self {
        Error::OutsideWorkDir {
            path: path.as_ref().to_path_buf(),
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    /// The OS-level classification of this error, if it has one.
    ///
    /// A short sized copy reports `UnexpectedEof`, matching what
    /// `Read::read_exact` would have said.
    #[must_use]
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Io { source, .. } => Some(source.kind()),
            Error::ShortCopy { .. } => Some(io::ErrorKind::UnexpectedEof),
            Error::OutsideWorkDir { .. } | Error::InvalidWorkDir(_) | Error::Config { .. } => {
                None
            }
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(io::ErrorKind::NotFound)
    }
}

/// Attach an operation name and path to a raw `io::Result`.
pub(crate) trait IoContext<T> {
    fn op_context<P: AsRef<Path>>(self, op: &'static str, path: P) -> Result<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn op_context<P: AsRef<Path>>(self, op: &'static str, path: P) -> Result<T> {
        self.map_err(|e| Error::io(op, path, e))
    }
}
