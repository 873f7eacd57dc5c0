// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::SystemTime;

/// What kind of host entry an [`Object`] describes.
///
/// Serialized in lowercase (`"file"`, `"dir"`, `"stream"`, `"invalid"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Regular file
    File,
    /// Directory
    Dir,
    /// Standard input/output, named pipe, socket or device
    Stream,
    /// Anything the adapter could not classify
    Invalid,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::File => "file",
            ObjectType::Dir => "dir",
            ObjectType::Stream => "stream",
            ObjectType::Invalid => "invalid",
        }
    }

    /// Parse ObjectType from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "file" => Ok(ObjectType::File),
            "dir" => Ok(ObjectType::Dir),
            "stream" => Ok(ObjectType::Stream),
            "invalid" => Ok(ObjectType::Invalid),
            other => Err(format!("Unknown object type: {}", other)),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s)
    }
}

/// A storage entry as seen through the adapter.
///
/// Built fresh for every query and handed to the caller by value; the
/// adapter keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Host-native absolute path ("-" for the standard stream)
    pub id: PathBuf,

    /// Logical name, always separated by `/`
    pub name: String,

    #[serde(rename = "type")]
    pub object_type: ObjectType,

    /// Size in bytes (0 for the standard stream)
    pub size: u64,

    /// Last modification time, when the platform reports one
    pub updated_at: Option<DateTime<Utc>>,

    /// MIME type inferred from the name's extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Additional attributes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Object {
    #[must_use]
    pub fn new(id: PathBuf, name: String, object_type: ObjectType) -> Self {
        Self {
            id,
            name,
            object_type,
            size: 0,
            updated_at: None,
            content_type: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Fill size and modification time from host metadata
    #[must_use]
    pub(crate) fn with_fs_metadata(mut self, meta: &std::fs::Metadata) -> Self {
        self.size = meta.len();
        self.updated_at = meta.modified().ok().map(system_time_to_utc);
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.object_type == ObjectType::Dir
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        self.object_type == ObjectType::File
    }
}

/// Adapter-level metadata returned by `Storager::metadata`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageMeta {
    /// Bucket-style name; always empty for local storage
    pub name: String,
    pub work_dir: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

fn system_time_to_utc(t: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(t)
}

/// Infer a MIME type from the extension of a file name or path.
///
/// Returns `None` for names without an extension or with an unknown one.
#[must_use]
pub fn detect_content_type(name: &str) -> Option<String> {
    let ext = std::path::Path::new(name).extension()?.to_str()?;
    mime_guess::from_ext(ext)
        .first()
        .map(|mime| mime.essence_str().to_string())
}
