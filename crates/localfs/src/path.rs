// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Logical object paths and their mapping to host paths.
//!
//! Object names are always `/`-separated. Host paths keep the native form.

use crate::error::{Error, IoContext, Result};
use std::path::{Path, PathBuf};

/// The literal path that stands for the process's standard streams
pub const STD_STREAM: &str = "-";

/// A logical path as supplied by a caller.
///
/// Any string equal to `-` parses as [`LogicalPath::Std`], so a real file
/// literally named `-` directly under the work dir cannot be addressed by
/// that spelling. Use `./-` to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalPath<'a> {
    /// A name resolved against the work dir
    Named(&'a str),
    /// Standard input for reads, standard output for writes
    Std,
}

impl<'a> LogicalPath<'a> {
    #[must_use]
    pub fn parse(path: &'a str) -> Self {
        if path == STD_STREAM {
            LogicalPath::Std
        } else {
            LogicalPath::Named(path)
        }
    }

    #[must_use]
    pub fn is_std(&self) -> bool {
        matches!(self, LogicalPath::Std)
    }
}

impl<'a> From<&'a str> for LogicalPath<'a> {
    fn from(path: &'a str) -> Self {
        Self::parse(path)
    }
}

/// Convert a host path to a `/`-separated string
#[must_use]
pub fn to_slash<P: AsRef<Path>>(path: P) -> String {
    let s = path.as_ref().to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Lexically clean a `/`-separated name.
///
/// Empty and `.` segments are dropped, `..` removes the previous segment
/// when there is one (and is dropped at the root of an absolute name).
/// An empty relative result is returned as `.`.
#[must_use]
pub fn clean_logical(name: &str) -> String {
    let rooted = name.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for seg in name.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    let _ = parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Join a logical directory and an entry name, then clean the result
#[must_use]
pub fn join_logical(dir: &str, name: &str) -> String {
    match (dir.is_empty(), name.is_empty()) {
        (true, true) => String::new(),
        (true, false) => clean_logical(name),
        (false, true) => clean_logical(dir),
        (false, false) => clean_logical(&format!("{dir}/{name}")),
    }
}

/// The `/`-separated name of `path` relative to `root`, if it lies below it.
///
/// `root` itself maps to the empty string.
#[must_use]
pub fn relative_logical<P: AsRef<Path>, R: AsRef<Path>>(path: P, root: R) -> Option<String> {
    let rel = path.as_ref().strip_prefix(root.as_ref()).ok()?;
    let name = clean_logical(&to_slash(rel));
    Some(if name == "." { String::new() } else { name })
}

/// Maps logical names onto host paths below a fixed work dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    work_dir: PathBuf,
}

impl Resolver {
    /// `work_dir` should already be absolute; see `StorageConfig::resolved_work_dir`
    #[must_use]
    pub fn new(work_dir: PathBuf) -> Self {
        Self { work_dir }
    }

    #[must_use]
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Host path for a logical name.
    ///
    /// The name is lexically cleaned first, then each `/`-separated segment
    /// becomes one native component. A `..` left over after cleaning climbs
    /// out of the work dir, stopping at the filesystem root. Absolute names
    /// are used as-is.
    #[must_use]
    pub fn resolve(&self, name: &str) -> PathBuf {
        if Path::new(name).is_absolute() {
            return PathBuf::from(name);
        }
        let cleaned = clean_logical(name);
        let mut out = self.work_dir.clone();
        for seg in cleaned.split('/').filter(|s| !s.is_empty() && *s != ".") {
            if seg == ".." {
                let _ = out.pop();
            } else {
                out.push(seg);
            }
        }
        out
    }

    /// Logical name for a host path below the work dir
    pub fn to_logical_name<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        relative_logical(path, &self.work_dir)
            .ok_or_else(|| Error::outside_work_dir(path, &self.work_dir))
    }

    /// Create every missing directory above the target of `name`
    pub fn ensure_parent(&self, name: &str) -> Result<()> {
        let target = self.resolve(name);
        match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).op_context("mkdir", parent)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(LogicalPath::parse("-"), LogicalPath::Std);
        assert!(LogicalPath::parse("-").is_std());
        assert_eq!(LogicalPath::parse("./-"), LogicalPath::Named("./-"));
        assert_eq!(LogicalPath::parse("--"), LogicalPath::Named("--"));
        assert_eq!(LogicalPath::parse(""), LogicalPath::Named(""));
    }

    #[test]
    fn test_clean_logical() {
        assert_eq!(clean_logical("a/b/c"), "a/b/c");
        assert_eq!(clean_logical("a//b/./c/"), "a/b/c");
        assert_eq!(clean_logical("./a"), "a");
        assert_eq!(clean_logical("a/../b"), "b");
        assert_eq!(clean_logical("../a"), "../a");
        assert_eq!(clean_logical("/../a"), "/a");
        assert_eq!(clean_logical("/"), "/");
        assert_eq!(clean_logical(""), ".");
        assert_eq!(clean_logical("a/.."), ".");
    }

    #[test]
    fn test_join_logical() {
        assert_eq!(join_logical("", "a.txt"), "a.txt");
        assert_eq!(join_logical(".", "a.txt"), "a.txt");
        assert_eq!(join_logical("dir", "a.txt"), "dir/a.txt");
        assert_eq!(join_logical("dir/", "a.txt"), "dir/a.txt");
        assert_eq!(join_logical("/abs/dir", "b"), "/abs/dir/b");
        assert_eq!(join_logical("", ""), "");
    }

    #[test]
    fn test_relative_logical() {
        let root = PathBuf::from("/srv/data");
        assert_eq!(
            relative_logical(root.join("a").join("b.txt"), &root).as_deref(),
            Some("a/b.txt")
        );
        assert_eq!(relative_logical(&root, &root).as_deref(), Some(""));
        assert_eq!(relative_logical("/etc/passwd", &root), None);
    }

    #[test]
    fn test_resolve_joins_segments() {
        let root = std::env::temp_dir().join("lfs-root");
        let resolver = Resolver::new(root.clone());
        assert_eq!(
            resolver.resolve("a/b/c.txt"),
            root.join("a").join("b").join("c.txt")
        );
        assert_eq!(resolver.resolve("./a//b"), root.join("a").join("b"));
        assert_eq!(resolver.resolve(""), root);
    }

    #[test]
    fn test_resolve_folds_parent_segments() {
        let root = std::env::temp_dir().join("lfs-root");
        let resolver = Resolver::new(root.clone());
        assert_eq!(resolver.resolve("a/../b"), root.join("b"));
        assert_eq!(resolver.resolve("a/b/../../c.txt"), root.join("c.txt"));
        assert_eq!(resolver.resolve("a/.."), root);
        assert_eq!(
            resolver.resolve("../x"),
            root.parent().map(|p| p.join("x")).unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_parent_stops_at_filesystem_root() {
        let resolver = Resolver::new(PathBuf::from("/"));
        assert_eq!(resolver.resolve("../../etc"), PathBuf::from("/etc"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_absolute_passthrough() {
        let resolver = Resolver::new(PathBuf::from("/srv/data"));
        assert_eq!(resolver.resolve("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn test_logical_name_round_trip() {
        let resolver = Resolver::new(std::env::temp_dir().join("lfs-root"));
        for name in ["a.txt", "dir/sub/file.bin", "./x//y/", "deep/./er/z"] {
            let abs = resolver.resolve(name);
            assert_eq!(
                resolver.to_logical_name(&abs).unwrap(),
                clean_logical(name),
                "round trip of {name}"
            );
        }
    }

    #[test]
    fn test_resolve_is_injective_for_distinct_names() {
        let resolver = Resolver::new(std::env::temp_dir().join("lfs-root"));
        let names = ["a", "b", "a/b", "b/a", "ab", "a.b"];
        let resolved: std::collections::HashSet<_> =
            names.iter().map(|n| resolver.resolve(n)).collect();
        assert_eq!(resolved.len(), names.len());
    }

    #[test]
    fn test_to_logical_name_outside() {
        let resolver = Resolver::new(std::env::temp_dir().join("lfs-root"));
        let err = resolver
            .to_logical_name(std::env::temp_dir().join("elsewhere"))
            .unwrap_err();
        assert!(matches!(err, Error::OutsideWorkDir { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_to_slash_unix_identity() {
        assert_eq!(to_slash("/a/b/c"), "/a/b/c");
        assert_eq!(to_slash("a\\b"), "a\\b");
    }
}
