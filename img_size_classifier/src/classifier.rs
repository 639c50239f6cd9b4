//! Percentile classification of reference JPEG sizes.
//!
//! 百分位 = (jpg - min) * 100 / (max - min)，保留 4 位小数。
//! 层级表为反向累积直方图：每个边界统计百分位 ≥ 该边界的图像数量。

use crate::error::{ClassifierError, Result};
use crate::record::FileRecord;
use crate::settings::ClassifierSettings;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Round to four decimal places.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Position of `size` within `[min, max]` on a 0..=100 scale.
///
/// Callers guarantee `min < max`.
pub fn percentile_rank(size: u64, min: u64, max: u64) -> f64 {
    let offset = size.saturating_sub(min) as f64;
    let range = (max - min) as f64;
    round4(offset * 100.0 / range)
}

/// Boundary → number of images whose percentile is at or above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    counts: BTreeMap<u32, usize>,
}

impl TierTable {
    pub fn new(boundaries: &[u32]) -> Self {
        Self {
            counts: boundaries.iter().map(|&b| (b, 0)).collect(),
        }
    }

    pub fn record(&mut self, percentile: f64) {
        for (boundary, count) in self.counts.iter_mut() {
            if f64::from(*boundary) <= percentile {
                *count += 1;
            }
        }
    }

    pub fn count(&self, boundary: u32) -> Option<usize> {
        self.counts.get(&boundary).copied()
    }

    /// Tiers in ascending boundary order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(&b, &c)| (b, c))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Classification {
    pub tiers: TierTable,
    pub min_size: u64,
    pub max_size: u64,
    pub count: usize,
}

/// Compute every record's percentile and the tier table.
///
/// All records must already carry a JPEG. Fails on an empty set and when every
/// JPEG has the same size.
pub fn classify(records: &mut [FileRecord], settings: &ClassifierSettings) -> Result<Classification> {
    if records.is_empty() {
        return Err(ClassifierError::EmptyInput);
    }

    let mut sizes = Vec::with_capacity(records.len());
    for record in records.iter() {
        let size = record
            .jpeg_size()
            .ok_or_else(|| ClassifierError::NotConverted {
                path: record.path.clone(),
            })?;
        sizes.push(size.bytes());
    }

    let min_size = sizes.iter().copied().min().unwrap_or_default();
    let max_size = sizes.iter().copied().max().unwrap_or_default();
    if min_size == max_size {
        return Err(ClassifierError::DegenerateRange { size: min_size });
    }

    let mut tiers = TierTable::new(&settings.tier_boundaries());
    for (record, size) in records.iter_mut().zip(sizes) {
        let percentile = percentile_rank(size, min_size, max_size);
        record.set_percentile(percentile);
        tiers.record(percentile);
        debug!(file = %record.name, jpeg_size = size, percentile, "Classified");
    }

    info!(
        count = records.len(),
        min_size,
        max_size,
        "Percentile classification complete"
    );

    Ok(Classification {
        tiers,
        min_size,
        max_size,
        count: records.len(),
    })
}
