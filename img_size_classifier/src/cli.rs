use crate::service::RunRequest;
use crate::settings::SourceFormat;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "img-size-classifier")]
#[command(version, about = "Classify images by reference JPEG size and export percentile tiers", long_about = None)]
pub struct Cli {
    /// Work folder containing the source images
    #[arg(short, long, value_name = "DIR")]
    pub path: PathBuf,

    /// Source image format (case-insensitive)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub extension: SourceFormat,

    /// Keep the JPEG cache folder for future runs
    #[arg(short, long)]
    pub keep: bool,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Which service to run
    #[arg(long, value_enum, default_value_t = ServiceKind::Size)]
    pub service: ServiceKind,

    /// Directory for the rolling log file (default: system temp dir)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceKind {
    /// Convert, classify and export interactively
    Size,
    /// Only validate the folder and list its images
    Inventory,
}

impl Cli {
    pub fn request(&self) -> RunRequest {
        RunRequest {
            work_dir: self.path.clone(),
            format: self.extension,
            keep_cache: self.keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("img-size-classifier").chain(args.iter().copied()))
    }

    #[test]
    fn test_minimal_args() {
        let cli = parse(&["--path", "/data/scans", "--extension", "bmp"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("/data/scans"));
        assert_eq!(cli.extension, SourceFormat::Bmp);
        assert!(!cli.keep);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.service, ServiceKind::Size);
        assert!(cli.log_dir.is_none());
    }

    #[test]
    fn test_extension_ignores_case() {
        let cli = parse(&["--path", "x", "--extension", "TIFF"]).unwrap();
        assert_eq!(cli.extension, SourceFormat::Tiff);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(parse(&["--path", "x", "--extension", "gif"]).is_err());
    }

    #[test]
    fn test_required_args() {
        assert!(parse(&["--extension", "png"]).is_err());
        assert!(parse(&["--path", "x"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = parse(&[
            "-p", "w", "-e", "png", "-k", "-vvv", "--service", "inventory", "--log-dir", "/tmp/logs",
        ])
        .unwrap();
        assert!(cli.keep);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.service, ServiceKind::Inventory);
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));

        let request = cli.request();
        assert!(request.keep_cache);
        assert_eq!(request.format, SourceFormat::Png);
    }
}
