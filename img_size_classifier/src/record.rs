//! One source image and the metadata derived from it during a run.

use shared_utils::common_utils::file_name_lossy;
use shared_utils::FileSize;
use std::path::{Path, PathBuf};

/// Reference JPEG produced (or reused) for a source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JpegInfo {
    pub path: PathBuf,
    pub size: FileSize,
}

/// 源图像记录
///
/// JPEG fields stay unset until the conversion step runs; `percentile` is
/// meaningful only after classification.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Basename including the extension, e.g. `scan01.bmp`.
    pub name: String,
    pub size: FileSize,
    jpeg: Option<JpegInfo>,
    percentile: f64,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, size: FileSize) -> Self {
        let path = path.into();
        let name = file_name_lossy(&path);
        Self {
            path,
            name,
            size,
            jpeg: None,
            percentile: 0.0,
        }
    }

    /// Build a record from a file on disk, reading its byte size.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(path, FileSize::of_path(path)?))
    }

    pub fn attach_jpeg(&mut self, path: PathBuf, size: FileSize) {
        self.jpeg = Some(JpegInfo { path, size });
    }

    pub fn jpeg(&self) -> Option<&JpegInfo> {
        self.jpeg.as_ref()
    }

    pub fn jpeg_size(&self) -> Option<FileSize> {
        self.jpeg.as_ref().map(|j| j.size)
    }

    /// Basename of the cached JPEG, `<name>.jpg`, when one is attached.
    pub fn jpeg_name(&self) -> Option<String> {
        self.jpeg.as_ref().map(|j| file_name_lossy(&j.path))
    }

    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    pub fn set_percentile(&mut self, percentile: f64) {
        self.percentile = percentile;
    }
}
