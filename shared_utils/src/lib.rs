//! Shared Utilities for the image size classifier tools
//!
//! This crate provides common functionality shared across the workspace tools:
//! - Logging setup (stderr + rolling log file)
//! - Error categories and loud error reporting
//! - Progress bar and terminal UI helpers
//! - Safety checks (dangerous directory detection)
//! - Batch file collection and summary reporting
//! - Type-safe file sizes

pub mod batch;
pub mod common_utils;
pub mod error_handler;
pub mod logging;
pub mod modern_ui;
pub mod progress;
pub mod report;
pub mod safety;
pub mod types;

pub use batch::{collect_files, BatchResult};
pub use error_handler::{install_panic_handler, report_error, ErrorCategory};
pub use modern_ui::{
    colors, print_error, print_info, print_stage, print_success, print_warning, symbols,
};
pub use progress::{create_progress_bar, format_bytes, format_duration};
pub use report::{print_summary_report, size_ratio_percent};
pub use safety::check_dangerous_directory;
pub use types::FileSize;
