// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Stream wrappers and bounded copies used by read, write and copy.

use std::io::{self, Read, Write};

/// Intermediate buffer size for unbounded copies
pub const COPY_BUFFER_SIZE: usize = 1024 * 1024;

/// A reader that reports the byte count of every underlying read.
///
/// The data passes through untouched; the hook only observes. Reads that
/// return zero bytes (end of stream) are not reported.
pub struct CallbackReader<R, F> {
    inner: R,
    callback: F,
}

impl<R, F> CallbackReader<R, F>
where
    R: Read,
    F: FnMut(usize),
{
    #[must_use]
    pub fn new(inner: R, callback: F) -> Self {
        Self { inner, callback }
    }

    /// Consume the wrapper and return the inner reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R, F> Read for CallbackReader<R, F>
where
    R: Read,
    F: FnMut(usize),
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            (self.callback)(n);
        }
        Ok(n)
    }
}

/// Copy until `src` is exhausted through a caller-provided buffer.
///
/// Peak memory stays at `buf.len()` regardless of how much is moved.
pub fn copy_buffer<R, W>(dst: &mut W, src: &mut R, buf: &mut [u8]) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut total: u64 = 0;
    loop {
        let n = match src.read(buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        dst.write_all(&buf[..n])?;
        total += n as u64;
    }
}

/// Copy until `src` is exhausted through a freshly allocated 1 MiB buffer
pub fn copy_all<R, W>(dst: &mut W, src: &mut R) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    copy_buffer(dst, src, &mut buf)
}

/// Copy at most `n` bytes and return how many were actually moved.
///
/// The caller decides whether a short count is an error.
pub fn copy_n<R, W>(dst: &mut W, src: &mut R, n: u64) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    io::copy(&mut src.take(n), dst)
}
