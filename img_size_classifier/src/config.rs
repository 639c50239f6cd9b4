//! Work configuration: the resolved working folder and its matching images.

use crate::error::ConfigError;
use crate::record::FileRecord;
use crate::settings::{ClassifierSettings, SourceFormat};
use shared_utils::{check_dangerous_directory, collect_files};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct WorkConfig {
    work_dir: PathBuf,
    format: SourceFormat,
    cache_dir: PathBuf,
    files: Vec<FileRecord>,
    keep_cache: bool,
}

impl WorkConfig {
    /// Validate `work_dir` and enumerate its images of `format`.
    ///
    /// Non-recursive and case-insensitive on the extension. Files are ordered
    /// by name. Nothing is written to disk.
    pub fn resolve(
        work_dir: &Path,
        format: SourceFormat,
        keep_cache: bool,
        settings: &ClassifierSettings,
    ) -> Result<Self, ConfigError> {
        if !work_dir.exists() {
            return Err(ConfigError::DirectoryNotFound {
                path: work_dir.to_path_buf(),
            });
        }
        if !work_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: work_dir.to_path_buf(),
            });
        }
        check_dangerous_directory(work_dir).map_err(|reason| ConfigError::ProtectedDirectory {
            path: work_dir.to_path_buf(),
            reason,
        })?;
        if !settings.is_accepted(format) {
            return Err(ConfigError::UnsupportedFormat(format.extension().to_string()));
        }

        let paths = collect_files(work_dir, &[format.extension()], false);
        if paths.is_empty() {
            return Err(ConfigError::NoMatchingFiles {
                path: work_dir.to_path_buf(),
                format: format.label().to_string(),
            });
        }

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let record = FileRecord::from_path(&path)
                .map_err(|source| ConfigError::Unreadable { path, source })?;
            debug!(file = %record.name, size = record.size.bytes(), "Matched source image");
            files.push(record);
        }

        info!(
            path = %work_dir.display(),
            format = format.label(),
            count = files.len(),
            "Work folder resolved"
        );

        Ok(Self {
            work_dir: work_dir.to_path_buf(),
            format,
            cache_dir: work_dir.join(settings.cache_dir_name),
            files,
            keep_cache,
        })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut [FileRecord] {
        &mut self.files
    }

    pub fn count(&self) -> usize {
        self.files.len()
    }

    pub fn keep_cache(&self) -> bool {
        self.keep_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn settings() -> ClassifierSettings {
        ClassifierSettings::default()
    }

    #[test]
    fn test_resolve_matches_extension_case_insensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.TIF"), b"12").unwrap();
        fs::write(dir.path().join("a.tif"), b"1").unwrap();
        fs::write(dir.path().join("c.png"), b"1").unwrap();

        let config = WorkConfig::resolve(dir.path(), SourceFormat::Tif, false, &settings()).unwrap();
        assert_eq!(config.count(), 2);
        let names: Vec<_> = config.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.tif", "b.TIF"]);
        assert_eq!(config.cache_dir(), dir.path().join("jpg"));
        assert!(!config.keep_cache());
    }

    #[test]
    fn test_resolve_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = WorkConfig::resolve(&missing, SourceFormat::Png, false, &settings()).unwrap_err();
        assert!(matches!(err, ConfigError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_resolve_file_is_not_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.png");
        fs::write(&file, b"1").unwrap();
        let err = WorkConfig::resolve(&file, SourceFormat::Png, false, &settings()).unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory { .. }));
    }

    #[test]
    fn test_resolve_no_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.png"), b"1").unwrap();
        let err = WorkConfig::resolve(dir.path(), SourceFormat::Bmp, true, &settings()).unwrap_err();
        match err {
            ConfigError::NoMatchingFiles { format, .. } => assert_eq!(format, "BMP"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("a.png"), b"1").unwrap();
        let err = WorkConfig::resolve(dir.path(), SourceFormat::Png, false, &settings()).unwrap_err();
        assert!(matches!(err, ConfigError::NoMatchingFiles { .. }));
    }

    #[test]
    fn test_resolve_refuses_filesystem_root() {
        let err = WorkConfig::resolve(Path::new("/"), SourceFormat::Png, false, &settings())
            .unwrap_err();
        assert!(matches!(err, ConfigError::ProtectedDirectory { .. }));
    }

    #[test]
    fn test_resolve_accepts_home_like_folder() {
        let root = TempDir::new().unwrap();
        let home = root.path().join("home").join("someone");
        fs::create_dir_all(&home).unwrap();
        fs::write(home.join("a.png"), b"1").unwrap();

        let config = WorkConfig::resolve(&home, SourceFormat::Png, false, &settings()).unwrap();
        assert_eq!(config.count(), 1);
    }

    #[test]
    fn test_resolve_rejects_format_outside_settings() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.bmp"), b"1").unwrap();
        let restricted = ClassifierSettings {
            accepted_formats: vec![SourceFormat::Png],
            ..ClassifierSettings::default()
        };
        let err = WorkConfig::resolve(dir.path(), SourceFormat::Bmp, false, &restricted).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
