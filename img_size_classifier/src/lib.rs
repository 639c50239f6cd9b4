//! Image size classifier
//!
//! Converts every source image of a folder to a reference JPEG, ranks the
//! JPEG sizes as percentiles of the observed range, draws the distribution and
//! lets the operator export the images at or above a chosen percentile.

pub mod cache;
pub mod chart;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod export;
pub mod interrupt;
pub mod record;
pub mod selection;
pub mod service;
pub mod settings;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use chart::{ChartRenderer, TerminalChart};
pub use classifier::{classify, percentile_rank, Classification, TierTable};
pub use config::WorkConfig;
pub use converter::{ImageCrateConverter, JpegConverter};
pub use error::{ClassifierError, ConfigError};
pub use record::FileRecord;
pub use service::{
    ClassifierService, InventoryService, RunReport, RunRequest, RunStage, SizeClassifierService,
};
pub use settings::{ClassifierSettings, SourceFormat};

pub const TITLE_BANNER: &str = " - IMAGE SIZE CLASSIFIER - ";
pub const DONE_BANNER: &str = " - DONE - ";
pub const INTERRUPTED_BANNER: &str = " - INTERRUPTED - ";
