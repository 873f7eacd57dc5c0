// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Result, anyhow};
use localfs::{Object, ObjectType, Storage, StorageConfig};

/// Where the storage root comes from, in priority order:
/// explicit `--work-dir`, then `--config` file, then `LOCALFS_WORKDIR`,
/// then the current directory.
#[derive(Debug, Clone, Default)]
pub struct StorageContext {
    pub work_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl StorageContext {
    pub fn new(work_dir: Option<PathBuf>, config: Option<PathBuf>) -> Self {
        Self { work_dir, config }
    }

    pub fn storage_config(&self) -> Result<StorageConfig> {
        if let Some(dir) = &self.work_dir {
            return Ok(StorageConfig::new(dir.clone()));
        }
        if let Some(path) = &self.config {
            return StorageConfig::from_yaml_file(path)
                .map_err(|e| anyhow!("Failed to load config '{}': {}", path.display(), e));
        }
        StorageConfig::from_env().map_err(|e| anyhow!("Failed to determine work dir: {}", e))
    }

    pub fn open_storage(&self) -> Result<Storage> {
        let config = self.storage_config()?;
        Storage::new(&config).map_err(|e| {
            anyhow!(
                "Failed to open storage at '{}': {}",
                config.work_dir.display(),
                e
            )
        })
    }
}

/// Shared byte counter fed by a storage progress callback
#[derive(Debug, Clone, Default)]
pub struct Progress {
    total: Arc<AtomicU64>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback suitable for `ReadOptions`/`WriteOptions`
    pub fn callback(&self) -> impl FnMut(usize) + Send + 'static {
        let total = self.total.clone();
        move |n| {
            let so_far = total.fetch_add(n as u64, Ordering::Relaxed) + n as u64;
            diagnostics::log_debug!("transferred {so_far} bytes", so_far: so_far);
        }
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }
}

/// Helper function to format file sizes
pub fn format_file_size(size: u64) -> String {
    if size >= 1024 * 1024 * 1024 {
        format!("{:.1}GB", size as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if size >= 1024 * 1024 {
        format!("{:.1}MB", size as f64 / (1024.0 * 1024.0))
    } else if size >= 1024 {
        format!("{:.1}KB", size as f64 / 1024.0)
    } else {
        format!("{}B", size)
    }
}

/// One-line human readable rendering of an object
pub fn format_object_line(object: &Object) -> String {
    let type_symbol = match object.object_type {
        ObjectType::Dir => "📁",
        ObjectType::File => "📄",
        ObjectType::Stream => "🔀",
        ObjectType::Invalid => "❓",
    };

    let size_str = if object.object_type == ObjectType::Dir {
        "-".to_string()
    } else {
        format_file_size(object.size)
    };

    let time_str = object
        .updated_at
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let content_type = object.content_type.as_deref().unwrap_or("-");

    format!(
        "{} {:>8} {} {:<24} {}",
        type_symbol, size_str, time_str, content_type, object.name
    )
}

/// Render an object either as JSON or as a display line
pub fn render_object(object: &Object, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(object).map_err(|e| anyhow!("Failed to encode object: {}", e))
    } else {
        Ok(format_object_line(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0B");
        assert_eq!(format_file_size(1023), "1023B");
        assert_eq!(format_file_size(1536), "1.5KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0GB");
    }

    #[test]
    fn test_format_object_line() {
        let mut object = Object::new(
            PathBuf::from("/srv/a.txt"),
            "a.txt".to_string(),
            ObjectType::File,
        );
        object.size = 2048;
        object.content_type = Some("text/plain".to_string());
        let line = format_object_line(&object);
        assert!(line.contains("2.0KB"), "got {line}");
        assert!(line.contains("text/plain"));
        assert!(line.ends_with("a.txt"));
        assert!(line.contains("unknown"));
    }

    #[test]
    fn test_progress_accumulates() {
        let progress = Progress::new();
        let mut cb = progress.callback();
        cb(10);
        cb(5);
        assert_eq!(progress.total(), 15);
    }

    #[test]
    fn test_context_prefers_work_dir() {
        let ctx = StorageContext::new(
            Some(PathBuf::from("/srv/objects")),
            Some(PathBuf::from("/nonexistent.yaml")),
        );
        let config = ctx.storage_config().unwrap();
        assert_eq!(config.work_dir, PathBuf::from("/srv/objects"));
    }
}
