//! Run orchestration.
//!
//! `Validating → Converting | Reusing → Classifying → Summarizing → Selecting
//! → CacheCleanup → Done`. Any error before `Selecting` aborts the run; bad
//! operator input inside `Selecting` only re-prompts.

use crate::cache::{convert_all, inspect_cache, reuse_cached};
use crate::chart::ChartRenderer;
use crate::classifier::{classify, Classification};
use crate::config::WorkConfig;
use crate::converter::JpegConverter;
use crate::error::{ClassifierError, Result};
use crate::export::{copy_selected, export_dir, ExportOutcome};
use crate::selection::{Selection, SelectionPrompt};
use crate::settings::{ClassifierSettings, SourceFormat};
use crate::summary::{sample_series, sampling_interval, sort_by_jpeg_size_desc, write_tier_table};
use shared_utils::modern_ui::symbols;
use shared_utils::{BatchResult, FileSize};
use std::fmt;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What the operator asked for on the command line.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub work_dir: PathBuf,
    pub format: SourceFormat,
    pub keep_cache: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Validating,
    Converting,
    Reusing,
    Classifying,
    Summarizing,
    Selecting,
    CacheCleanup,
    Done,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunStage::Validating => "validating",
            RunStage::Converting => "converting",
            RunStage::Reusing => "reusing",
            RunStage::Classifying => "classifying",
            RunStage::Summarizing => "summarizing",
            RunStage::Selecting => "selecting",
            RunStage::CacheCleanup => "cache-cleanup",
            RunStage::Done => "done",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub service: &'static str,
    pub files: usize,
    /// `succeeded` counts conversions, `skipped` counts reused cache entries.
    pub batch: BatchResult,
    pub input_bytes: u64,
    pub jpeg_bytes: u64,
    pub classification: Option<Classification>,
    pub exports: Vec<ExportOutcome>,
    pub cache_kept: bool,
    pub duration: Duration,
}

impl RunReport {
    fn inventory(service: &'static str, config: &WorkConfig, duration: Duration) -> Self {
        Self {
            service,
            files: config.count(),
            batch: BatchResult::new(),
            input_bytes: total_source_size(config).bytes(),
            jpeg_bytes: 0,
            classification: None,
            exports: Vec::new(),
            cache_kept: true,
            duration,
        }
    }
}

fn total_source_size(config: &WorkConfig) -> FileSize {
    config.files().iter().map(|f| f.size).sum()
}

fn total_jpeg_size(config: &WorkConfig) -> FileSize {
    config.files().iter().filter_map(|f| f.jpeg_size()).sum()
}

fn output_error(e: std::io::Error) -> ClassifierError {
    ClassifierError::io("writing", "stdout", e)
}

/// A classifier run over one work folder.
///
/// Shared steps have default implementations; variants implement
/// [`ClassifierService::execute`].
pub trait ClassifierService {
    fn name(&self) -> &'static str;

    fn settings(&self) -> &ClassifierSettings;

    fn validate(&self, request: &RunRequest) -> Result<WorkConfig> {
        let config = WorkConfig::resolve(
            &request.work_dir,
            request.format,
            request.keep_cache,
            self.settings(),
        )?;
        Ok(config)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| ClassifierError::io("creating", path, e))?;
        debug!(path = %path.display(), "Directory created");
        Ok(())
    }

    fn delete_dir(&self, path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_dir_all(path).map_err(|e| ClassifierError::io("deleting", path, e))?;
            debug!(path = %path.display(), "Directory deleted");
        }
        Ok(())
    }

    fn execute(&mut self, request: &RunRequest) -> Result<RunReport>;
}

/// Full pipeline: convert, classify, chart, then interactive export.
pub struct SizeClassifierService<C, R, I, O> {
    settings: ClassifierSettings,
    converter: C,
    chart: R,
    input: I,
    output: O,
    show_progress: bool,
    stage: RunStage,
}

impl<C, R, I, O> SizeClassifierService<C, R, I, O>
where
    C: JpegConverter,
    R: ChartRenderer,
    I: BufRead,
    O: Write,
{
    pub fn new(settings: ClassifierSettings, converter: C, chart: R, input: I, output: O) -> Self {
        Self {
            settings,
            converter,
            chart,
            input,
            output,
            show_progress: false,
            stage: RunStage::Validating,
        }
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Stage reached so far; after a failure, the stage that failed.
    pub fn stage(&self) -> RunStage {
        self.stage
    }

    fn enter(&mut self, stage: RunStage) {
        debug!(service = self.name(), from = %self.stage, to = %stage, "Stage transition");
        self.stage = stage;
    }

    fn say(&mut self, message: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", message).map_err(output_error)
    }

    fn prepare(&mut self, config: &mut WorkConfig) -> Result<BatchResult> {
        let jpg = self.settings.jpeg_extension.to_uppercase();
        let result = if inspect_cache(config, &self.settings)?.is_reusable() {
            self.enter(RunStage::Reusing);
            self.say("Work already done has been found in this directory!")?;
            reuse_cached(config, &self.settings)?
        } else {
            self.enter(RunStage::Converting);
            self.say(format!("[START] Conversion {} to {}.", config.format(), jpg))?;
            let result =
                convert_all(config, &self.converter, &self.settings, !self.show_progress)?;
            self.say(format!("[END] Conversion {} to {}.", config.format(), jpg))?;
            result
        };
        self.say(format!(
            "{} Successfully generated {} {} images!",
            symbols::SUCCESS,
            result.succeeded + result.skipped,
            jpg
        ))?;
        Ok(result)
    }

    fn summarize(&mut self, config: &mut WorkConfig, classification: &Classification) -> Result<()> {
        sort_by_jpeg_size_desc(config.files_mut());
        let interval = sampling_interval(config.count(), self.settings.max_plot_points);
        let series = sample_series(config.files(), interval);
        debug!(points = series.len(), interval, "Sampled distribution curve");

        self.say(format!("{} Drawing plot...", symbols::CHART))?;
        self.chart.plot(&mut self.output, &series).map_err(output_error)?;
        write_tier_table(&mut self.output, &classification.tiers).map_err(output_error)
    }

    fn select(&mut self, config: &WorkConfig) -> Result<Vec<ExportOutcome>> {
        let mut exports = Vec::new();

        loop {
            let selection =
                SelectionPrompt::new(&mut self.input, &mut self.output).next_selection()?;
            let threshold = match selection {
                Selection::Finish => break,
                Selection::Threshold(t) => t,
            };

            let dir = export_dir(config.work_dir(), threshold, &self.settings);
            if dir.exists() {
                warn!(threshold, path = %dir.display(), "Export folder already exists, skipping");
                self.say(format!(
                    "{} {} already exist!",
                    symbols::WARNING,
                    self.settings.export_dir_name(threshold)
                ))?;
                exports.push(ExportOutcome::AlreadyExists { dir });
                continue;
            }

            self.create_dir(&dir)?;
            self.say(format!(
                "Selecting between {} images with >= {}%...",
                config.count(),
                threshold
            ))?;
            let copied = copy_selected(config.files(), &dir, threshold)?;
            info!(threshold, copied, path = %dir.display(), "Selection exported");
            self.say(format!(
                "{} DONE - Results with {}% in '{}'!",
                symbols::SAVE,
                threshold,
                dir.display()
            ))?;
            exports.push(ExportOutcome::Exported { dir, copied });
        }

        Ok(exports)
    }
}

impl<C, R, I, O> ClassifierService for SizeClassifierService<C, R, I, O>
where
    C: JpegConverter,
    R: ChartRenderer,
    I: BufRead,
    O: Write,
{
    fn name(&self) -> &'static str {
        "size-classifier"
    }

    fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    fn execute(&mut self, request: &RunRequest) -> Result<RunReport> {
        let started = Instant::now();

        self.enter(RunStage::Validating);
        let mut config = self.validate(request)?;
        self.say(format!("{} Work folder: '{}'.", symbols::FOLDER, config.work_dir().display()))?;
        self.say(format!(
            "{} Found {} {} images.",
            symbols::IMAGE,
            config.count(),
            config.format()
        ))?;
        self.say(format!("JPG folder: '{}'.", config.cache_dir().display()))?;

        let batch = self.prepare(&mut config)?;

        self.enter(RunStage::Classifying);
        let classification = classify(config.files_mut(), &self.settings)?;

        self.enter(RunStage::Summarizing);
        self.summarize(&mut config, &classification)?;

        self.enter(RunStage::Selecting);
        let exports = self.select(&config)?;

        self.enter(RunStage::CacheCleanup);
        let cache_kept = config.keep_cache();
        if cache_kept {
            info!(path = %config.cache_dir().display(), "Keeping JPEG cache for future runs");
            self.say(format!(
                "Folder '{}' hasn't been deleted because it has been decided to keep it for future runs.",
                config.cache_dir().display()
            ))?;
        } else {
            self.say(format!("Deleting '{}' path...", config.cache_dir().display()))?;
            self.delete_dir(config.cache_dir())?;
        }

        self.enter(RunStage::Done);
        Ok(RunReport {
            service: self.name(),
            files: config.count(),
            batch,
            input_bytes: total_source_size(&config).bytes(),
            jpeg_bytes: total_jpeg_size(&config).bytes(),
            classification: Some(classification),
            exports,
            cache_kept,
            duration: started.elapsed(),
        })
    }
}

/// Validates the work folder and reports what it holds, without converting.
pub struct InventoryService<O> {
    settings: ClassifierSettings,
    output: O,
}

impl<O: Write> InventoryService<O> {
    pub fn new(settings: ClassifierSettings, output: O) -> Self {
        Self { settings, output }
    }
}

impl<O: Write> ClassifierService for InventoryService<O> {
    fn name(&self) -> &'static str {
        "inventory"
    }

    fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    fn execute(&mut self, request: &RunRequest) -> Result<RunReport> {
        let started = Instant::now();
        let config = self.validate(request)?;
        let total = total_source_size(&config);

        writeln!(self.output, "{} Work folder: '{}'.", symbols::FOLDER, config.work_dir().display())
            .map_err(output_error)?;
        writeln!(
            self.output,
            "{} Found {} {} images ({}).",
            symbols::IMAGE,
            config.count(),
            config.format(),
            total
        )
        .map_err(output_error)?;
        for record in config.files() {
            writeln!(self.output, "  - {} ({})", record.name, record.size).map_err(output_error)?;
        }

        info!(count = config.count(), bytes = total.bytes(), "Inventory complete");
        Ok(RunReport::inventory(self.name(), &config, started.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::TerminalChart;
    use crate::test_support::SizedConverter;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_stage_display() {
        assert_eq!(RunStage::CacheCleanup.to_string(), "cache-cleanup");
        assert_eq!(RunStage::Done.to_string(), "done");
    }

    #[test]
    fn test_inventory_lists_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.png"), vec![0u8; 10]).unwrap();
        fs::write(dir.path().join("b.png"), vec![0u8; 20]).unwrap();

        let mut out = Vec::new();
        let report = InventoryService::new(ClassifierSettings::default(), &mut out)
            .execute(&RunRequest {
                work_dir: dir.path().to_path_buf(),
                format: SourceFormat::Png,
                keep_cache: false,
            })
            .unwrap();

        assert_eq!(report.service, "inventory");
        assert_eq!(report.files, 2);
        assert_eq!(report.input_bytes, 30);
        assert!(report.classification.is_none());
        assert!(!dir.path().join("jpg").exists());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Found 2 PNG images"));
        assert!(text.contains("  - a.png"));
    }

    #[test]
    fn test_validation_failure_stops_in_validating() {
        let dir = TempDir::new().unwrap();
        let mut service = SizeClassifierService::new(
            ClassifierSettings::default(),
            SizedConverter::new(&[]),
            TerminalChart::default(),
            Cursor::new(""),
            Vec::new(),
        );
        let err = service
            .execute(&RunRequest {
                work_dir: dir.path().to_path_buf(),
                format: SourceFormat::Tiff,
                keep_cache: false,
            })
            .unwrap_err();
        assert!(matches!(err, ClassifierError::Config(_)));
        assert_eq!(service.stage(), RunStage::Validating);
    }

    #[test]
    fn test_default_dir_helpers() {
        let dir = TempDir::new().unwrap();
        let service = InventoryService::new(ClassifierSettings::default(), Vec::new());
        let nested = dir.path().join("a").join("b");

        service.create_dir(&nested).unwrap();
        assert!(nested.is_dir());
        service.delete_dir(&dir.path().join("a")).unwrap();
        assert!(!nested.exists());
        service.delete_dir(&dir.path().join("missing")).unwrap();
    }
}
