//! Ordering and sampling of classified records for display.

use crate::classifier::TierTable;
use crate::record::FileRecord;
use console::style;
use std::cmp::Reverse;
use std::io::{self, Write};

/// One point of the size distribution curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub label: String,
    pub percentile: f64,
}

/// Largest JPEG first. Stable, so equal sizes keep their name order.
pub fn sort_by_jpeg_size_desc(records: &mut [FileRecord]) {
    records.sort_by_key(|r| Reverse(r.jpeg_size().map(|s| s.bytes()).unwrap_or(0)));
}

/// Step between plotted records: `count / max_points`, at least 1.
///
/// Integer division means the series can hold somewhat more than
/// `max_points` entries (e.g. 199 records sample every record).
pub fn sampling_interval(count: usize, max_points: usize) -> usize {
    (count / max_points.max(1)).max(1)
}

/// Every `interval`-th record, starting with the first, as plot points.
pub fn sample_series(records: &[FileRecord], interval: usize) -> Vec<PlotPoint> {
    records
        .iter()
        .step_by(interval.max(1))
        .map(|r| PlotPoint {
            label: r.jpeg_name().unwrap_or_else(|| r.name.clone()),
            percentile: r.percentile(),
        })
        .collect()
}

/// `* TIER n%: m images.` lines, lowest boundary first.
pub fn write_tier_table<W: Write>(out: &mut W, tiers: &TierTable) -> io::Result<()> {
    writeln!(out, "Results:")?;
    for (boundary, count) in tiers.iter() {
        writeln!(
            out,
            "* TIER {}%: {} images.",
            style(boundary).cyan().bold(),
            style(count).green()
        )?;
    }
    Ok(())
}
