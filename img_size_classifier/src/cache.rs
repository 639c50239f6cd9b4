//! JPEG cache under `<work>/jpg/`: idempotency check and convert-or-reuse.
//!
//! A cache is reused only when the set of cached JPEG stems equals the set of
//! source file names. Any difference purges the whole folder so every image is
//! converted again; there is no per-file diffing.

use crate::config::WorkConfig;
use crate::converter::JpegConverter;
use crate::error::{ClassifierError, Result};
use crate::settings::ClassifierSettings;
use shared_utils::common_utils::{file_stem_lossy, is_hidden_file};
use shared_utils::{create_progress_bar, BatchResult, FileSize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No cache folder yet.
    Missing,
    /// Cache folder existed but did not match the sources; it has been deleted.
    Stale,
    /// Cache matches the sources exactly and can be reused.
    Consistent,
}

impl CacheState {
    pub fn is_reusable(self) -> bool {
        matches!(self, CacheState::Consistent)
    }
}

/// `<cache>/<name>.jpg`, where `name` keeps the source extension.
pub fn cached_jpeg_path(cache_dir: &Path, name: &str, settings: &ClassifierSettings) -> PathBuf {
    cache_dir.join(format!("{}.{}", name, settings.jpeg_extension))
}

/// Stems of the JPEG files currently in `cache_dir`.
///
/// Hidden entries (including interrupted `.partial-*` writes) are ignored.
/// The extension must match exactly, so `a.png.JPG` does not count as `a.png`.
pub fn cached_names(cache_dir: &Path, settings: &ClassifierSettings) -> Result<BTreeSet<String>> {
    let entries =
        fs::read_dir(cache_dir).map_err(|e| ClassifierError::io("reading", cache_dir, e))?;

    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| ClassifierError::io("reading", cache_dir, e))?;
        let path = entry.path();
        if !path.is_file() || is_hidden_file(&path) {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(settings.jpeg_extension) {
            names.insert(file_stem_lossy(&path));
        }
    }
    Ok(names)
}

/// Decide whether the cache can be reused, deleting it when it is stale.
pub fn inspect_cache(config: &WorkConfig, settings: &ClassifierSettings) -> Result<CacheState> {
    let cache_dir = config.cache_dir();
    if !cache_dir.is_dir() {
        debug!(path = %cache_dir.display(), "No JPEG cache found");
        return Ok(CacheState::Missing);
    }

    let cached = cached_names(cache_dir, settings)?;
    let sources: BTreeSet<String> = config.files().iter().map(|f| f.name.clone()).collect();

    if cached == sources {
        info!(path = %cache_dir.display(), count = cached.len(), "JPEG cache is consistent");
        return Ok(CacheState::Consistent);
    }

    warn!(
        path = %cache_dir.display(),
        cached = cached.len(),
        sources = sources.len(),
        "JPEG cache does not match the source images, deleting it"
    );
    fs::remove_dir_all(cache_dir).map_err(|e| ClassifierError::io("deleting", cache_dir, e))?;
    Ok(CacheState::Stale)
}

/// Attach the already cached JPEG to every record without converting.
///
/// Only valid after [`inspect_cache`] returned [`CacheState::Consistent`].
pub fn reuse_cached(config: &mut WorkConfig, settings: &ClassifierSettings) -> Result<BatchResult> {
    let cache_dir = config.cache_dir().to_path_buf();
    let mut result = BatchResult::new();

    for record in config.files_mut() {
        let jpeg_path = cached_jpeg_path(&cache_dir, &record.name, settings);
        let size = FileSize::of_path(&jpeg_path)
            .map_err(|e| ClassifierError::io("reading", &jpeg_path, e))?;
        debug!(file = %record.name, jpeg_size = size.bytes(), "Reusing cached JPEG");
        record.attach_jpeg(jpeg_path, size);
        result.skip();
    }
    Ok(result)
}

/// Convert every source image into the cache and attach the result.
///
/// Each JPEG is written to a hidden temporary file in the cache folder and
/// renamed into place once complete. The first failure aborts the batch.
pub fn convert_all<C: JpegConverter + ?Sized>(
    config: &mut WorkConfig,
    converter: &C,
    settings: &ClassifierSettings,
    hide_progress: bool,
) -> Result<BatchResult> {
    let cache_dir = config.cache_dir().to_path_buf();
    fs::create_dir_all(&cache_dir).map_err(|e| ClassifierError::io("creating", &cache_dir, e))?;

    let total = config.count();
    let pb = create_progress_bar(total as u64, "Converting", hide_progress);
    let mut result = BatchResult::new();

    for (index, record) in config.files_mut().iter_mut().enumerate() {
        let jpeg_path = cached_jpeg_path(&cache_dir, &record.name, settings);
        info!(
            "[{}/{}] Converting: '{}' -> '{}'",
            index + 1,
            total,
            record.path.display(),
            jpeg_path.display()
        );
        pb.set_message(record.name.clone());

        let partial = tempfile::Builder::new()
            .prefix(".partial-")
            .suffix(".jpg")
            .tempfile_in(&cache_dir)
            .map_err(|e| ClassifierError::io("creating", &cache_dir, e))?;

        if let Err(source) = converter.convert(&record.path, partial.path()) {
            pb.abandon();
            return Err(ClassifierError::Conversion {
                path: record.path.clone(),
                source,
            });
        }

        partial
            .persist(&jpeg_path)
            .map_err(|e| ClassifierError::io("writing", &jpeg_path, e.error))?;

        let size = FileSize::of_path(&jpeg_path)
            .map_err(|e| ClassifierError::io("reading", &jpeg_path, e))?;
        if size.is_zero() {
            warn!(file = %record.name, "Converter produced an empty JPEG");
        }
        record.attach_jpeg(jpeg_path, size);
        result.success();
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(result)
}
