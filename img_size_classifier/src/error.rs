//! Error types for the classifier pipeline.
//!
//! Every variant maps to a [`ErrorCategory`]: only bad interactive input is
//! recoverable, everything else aborts the run with exit code 1.

use shared_utils::ErrorCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by [`crate::converter::JpegConverter`] implementations.
pub type ConversionFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Invalid work configuration, detected before anything is written.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Work folder '{}' does not exist", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Work folder '{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Work folder '{}' is protected: {reason}", .path.display())]
    ProtectedDirectory { path: PathBuf, reason: String },

    #[error("Work folder '{}' doesn't have any {format} image", .path.display())]
    NoMatchingFiles { path: PathBuf, format: String },

    #[error("Extension '{0}' is not an accepted source format")]
    UnsupportedFormat(String),

    #[error("Could not read '{}'", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("All images have the same size ({size} bytes), percentiles are undefined")]
    DegenerateRange { size: u64 },

    #[error("No converted images to classify")]
    EmptyInput,

    #[error("'{}' has no converted JPEG", .path.display())]
    NotConverted { path: PathBuf },

    #[error("Failed to convert '{}' to JPEG", .path.display())]
    Conversion {
        path: PathBuf,
        #[source]
        source: ConversionFailure,
    },

    #[error("Please, enter a NUMBER between 0 and 100 (got '{input}')")]
    InputParse { input: String },

    #[error("Interrupted by operator")]
    Interrupted,

    #[error("I/O error while {operation} '{}'", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClassifierError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClassifierError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClassifierError::InputParse { .. } => ErrorCategory::Recoverable,
            _ => ErrorCategory::Fatal,
        }
    }

    pub fn is_interrupt(&self) -> bool {
        matches!(self, ClassifierError::Interrupted)
    }

    /// Operator-facing text, with a hint line where one helps.
    pub fn user_message(&self) -> String {
        match self {
            ClassifierError::Config(ConfigError::NoMatchingFiles { .. }) => {
                format!("{}\n💡 Check --path and --extension", self)
            }
            ClassifierError::DegenerateRange { .. } => {
                format!("{}\n💡 Add images of different sizes to the work folder", self)
            }
            ClassifierError::Conversion { path, source } => format!(
                "JPEG conversion failed: {}\n   File: {}\n💡 The file may be corrupt or in an unsupported variant",
                source,
                path.display()
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
