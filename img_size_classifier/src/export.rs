//! Copying the selected images into `<work>/selected_<N>/`.

use crate::error::{ClassifierError, Result};
use crate::record::FileRecord;
use crate::settings::ClassifierSettings;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported { dir: PathBuf, copied: usize },
    /// The folder was already there; nothing was written.
    AlreadyExists { dir: PathBuf },
}

impl ExportOutcome {
    pub fn dir(&self) -> &Path {
        match self {
            ExportOutcome::Exported { dir, .. } | ExportOutcome::AlreadyExists { dir } => dir,
        }
    }

    pub fn copied(&self) -> usize {
        match self {
            ExportOutcome::Exported { copied, .. } => *copied,
            ExportOutcome::AlreadyExists { .. } => 0,
        }
    }
}

pub fn export_dir(work_dir: &Path, threshold: u8, settings: &ClassifierSettings) -> PathBuf {
    work_dir.join(settings.export_dir_name(threshold))
}

/// Copy source images with `percentile >= threshold` into `dir`.
///
/// `records` must be sorted by JPEG size, largest first: the walk stops at the
/// first record below the threshold. `dir` must already exist.
pub fn copy_selected(records: &[FileRecord], dir: &Path, threshold: u8) -> Result<usize> {
    let threshold = f64::from(threshold);
    let mut copied = 0;

    for record in records.iter().take_while(|r| r.percentile() >= threshold) {
        let target = dir.join(&record.name);
        fs::copy(&record.path, &target).map_err(|e| ClassifierError::io("copying", &record.path, e))?;
        debug!(file = %record.name, percentile = record.percentile(), "Exported");
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_utils::FileSize;
    use tempfile::TempDir;

    fn sorted_records(dir: &Path, percentiles: &[f64]) -> Vec<FileRecord> {
        percentiles
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let path = dir.join(format!("{i}.png"));
                fs::write(&path, format!("image {i}")).unwrap();
                let mut r = FileRecord::new(path, FileSize::new(8));
                r.attach_jpeg(dir.join(format!("jpg/{i}.png.jpg")), FileSize::new(100 - i as u64));
                r.set_percentile(p);
                r
            })
            .collect()
    }

    #[test]
    fn test_export_short_circuits() {
        let dir = TempDir::new().unwrap();
        let recs = sorted_records(dir.path(), &[100.0, 80.0, 60.0, 40.0, 20.0, 0.0]);
        let out = export_dir(dir.path(), 50, &ClassifierSettings::default());
        fs::create_dir(&out).unwrap();

        assert_eq!(copy_selected(&recs, &out, 50).unwrap(), 3);
        assert!(out.join("0.png").exists());
        assert!(out.join("1.png").exists());
        assert!(out.join("2.png").exists());
        assert!(!out.join("3.png").exists());
        assert_eq!(fs::read_to_string(out.join("1.png")).unwrap(), "image 1");
    }

    #[test]
    fn test_export_stops_at_first_record_below_threshold() {
        let dir = TempDir::new().unwrap();
        let recs = sorted_records(dir.path(), &[100.0, 30.0, 90.0]);
        let out = dir.path().join("selected_50");
        fs::create_dir(&out).unwrap();

        assert_eq!(copy_selected(&recs, &out, 50).unwrap(), 1);
        assert!(out.join("0.png").exists());
        assert!(!out.join("2.png").exists(), "walk ends at 1.png");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let dir = TempDir::new().unwrap();
        let recs = sorted_records(dir.path(), &[100.0, 44.4444, 0.0]);
        let out = dir.path().join("selected_100");
        fs::create_dir(&out).unwrap();
        assert_eq!(copy_selected(&recs, &out, 100).unwrap(), 1);
    }

    #[test]
    fn test_export_dir_name() {
        let dir = export_dir(Path::new("/work"), 40, &ClassifierSettings::default());
        assert_eq!(dir, PathBuf::from("/work/selected_40"));
    }

    #[test]
    fn test_outcome_accessors() {
        let skipped = ExportOutcome::AlreadyExists {
            dir: PathBuf::from("/w/selected_5"),
        };
        assert_eq!(skipped.copied(), 0);
        assert_eq!(skipped.dir(), Path::new("/w/selected_5"));
    }
}
