//! Run-wide constants, gathered into one immutable settings object that is
//! passed explicitly to every stage.

use clap::ValueEnum;
use std::fmt;
use tracing::Level;

/// Source image formats accepted by `--extension`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SourceFormat {
    Tif,
    Tiff,
    Bmp,
    Png,
}

impl SourceFormat {
    pub const ALL: &'static [SourceFormat] = &[
        SourceFormat::Tif,
        SourceFormat::Tiff,
        SourceFormat::Bmp,
        SourceFormat::Png,
    ];

    /// Lowercase file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Tif => "tif",
            SourceFormat::Tiff => "tiff",
            SourceFormat::Bmp => "bmp",
            SourceFormat::Png => "png",
        }
    }

    /// Uppercase label used in operator-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            SourceFormat::Tif => "TIF",
            SourceFormat::Tiff => "TIFF",
            SourceFormat::Bmp => "BMP",
            SourceFormat::Png => "PNG",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct ClassifierSettings {
    pub accepted_formats: Vec<SourceFormat>,
    /// Cache subdirectory created under the work folder.
    pub cache_dir_name: &'static str,
    pub jpeg_extension: &'static str,
    /// Export folders are named `<prefix><threshold>`.
    pub export_dir_prefix: &'static str,
    /// Width of one tier; boundaries run `0, interval, 2*interval, ...` below 100.
    pub tier_interval: u32,
    pub max_plot_points: usize,
    pub jpeg_quality: u8,
    /// Indexed by the number of `-v` flags, saturating at the last entry.
    pub verbosity_levels: [Level; 4],
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            accepted_formats: SourceFormat::ALL.to_vec(),
            cache_dir_name: "jpg",
            jpeg_extension: "jpg",
            export_dir_prefix: "selected_",
            tier_interval: 10,
            max_plot_points: 100,
            jpeg_quality: 75,
            verbosity_levels: [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG],
        }
    }
}

impl ClassifierSettings {
    pub fn is_accepted(&self, format: SourceFormat) -> bool {
        self.accepted_formats.contains(&format)
    }

    pub fn tier_boundaries(&self) -> Vec<u32> {
        (0..100).step_by(self.tier_interval.max(1) as usize).collect()
    }

    pub fn level_for_verbosity(&self, verbosity: u8) -> Level {
        let index = (verbosity as usize).min(self.verbosity_levels.len() - 1);
        self.verbosity_levels[index]
    }

    pub fn export_dir_name(&self, threshold: u8) -> String {
        format!("{}{}", self.export_dir_prefix, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tier_boundaries() {
        let settings = ClassifierSettings::default();
        assert_eq!(
            settings.tier_boundaries(),
            vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90]
        );
    }

    #[test]
    fn test_custom_tier_interval() {
        let settings = ClassifierSettings {
            tier_interval: 25,
            ..ClassifierSettings::default()
        };
        assert_eq!(settings.tier_boundaries(), vec![0, 25, 50, 75]);
    }

    #[test]
    fn test_level_for_verbosity_saturates() {
        let settings = ClassifierSettings::default();
        assert_eq!(settings.level_for_verbosity(0), Level::ERROR);
        assert_eq!(settings.level_for_verbosity(1), Level::WARN);
        assert_eq!(settings.level_for_verbosity(2), Level::INFO);
        assert_eq!(settings.level_for_verbosity(3), Level::DEBUG);
        assert_eq!(settings.level_for_verbosity(9), Level::DEBUG);
    }

    #[test]
    fn test_export_dir_name() {
        let settings = ClassifierSettings::default();
        assert_eq!(settings.export_dir_name(40), "selected_40");
    }

    #[test]
    fn test_source_format_labels() {
        assert_eq!(SourceFormat::Tiff.extension(), "tiff");
        assert_eq!(SourceFormat::Bmp.label(), "BMP");
        assert_eq!(SourceFormat::Png.to_string(), "PNG");
        assert!(ClassifierSettings::default().is_accepted(SourceFormat::Tif));
    }

    #[test]
    fn test_restricted_formats() {
        let settings = ClassifierSettings {
            accepted_formats: vec![SourceFormat::Png],
            ..ClassifierSettings::default()
        };
        assert!(settings.is_accepted(SourceFormat::Png));
        assert!(!settings.is_accepted(SourceFormat::Bmp));
    }
}
