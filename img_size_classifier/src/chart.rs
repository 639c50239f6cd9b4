//! Size distribution curve.

use crate::summary::PlotPoint;
use console::style;
use std::io::{self, Write};

/// Draws the (label, percentile) series. Must return without waiting for the
/// operator.
pub trait ChartRenderer {
    fn plot(&self, out: &mut dyn Write, points: &[PlotPoint]) -> io::Result<()>;
}

/// Fixed-height text chart: one row per 10%, one column per sampled image.
#[derive(Debug, Clone, Copy)]
pub struct TerminalChart {
    max_width: usize,
}

impl TerminalChart {
    const ROWS: [u32; 11] = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 0];

    pub fn new(max_width: usize) -> Self {
        Self {
            max_width: max_width.max(1),
        }
    }

    /// Row value a percentile snaps to.
    fn snap(percentile: f64) -> u32 {
        ((percentile.clamp(0.0, 100.0) / 10.0).round() as u32) * 10
    }

    fn columns(&self, points: &[PlotPoint]) -> Vec<u32> {
        let width = points.len().min(self.max_width);
        (0..width)
            .map(|c| Self::snap(points[c * points.len() / width].percentile))
            .collect()
    }
}

impl Default for TerminalChart {
    fn default() -> Self {
        Self::new(100)
    }
}

impl ChartRenderer for TerminalChart {
    fn plot(&self, out: &mut dyn Write, points: &[PlotPoint]) -> io::Result<()> {
        if points.is_empty() {
            return writeln!(out, "(no data to plot)");
        }

        let columns = self.columns(points);
        writeln!(out, "{}", style("(%) Size").bold())?;
        for row in Self::ROWS {
            let line: String = columns
                .iter()
                .map(|&value| if value == row { '●' } else { '·' })
                .collect();
            writeln!(out, "{:>4} │{}", row, style(line).cyan())?;
        }
        writeln!(out, "     └{}", "─".repeat(columns.len()))?;
        writeln!(
            out,
            "      {} ({} → {})",
            style("Images").bold(),
            points[0].label,
            points[points.len() - 1].label
        )?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f64]) -> Vec<PlotPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &p)| PlotPoint {
                label: format!("{i}.png.jpg"),
                percentile: p,
            })
            .collect()
    }

    fn render(chart: &TerminalChart, values: &[f64]) -> Vec<String> {
        console::set_colors_enabled(false);
        let mut out = Vec::new();
        chart.plot(&mut out, &points(values)).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_curve_rows() {
        let lines = render(&TerminalChart::default(), &[100.0, 44.4444, 0.0]);
        assert_eq!(lines[0], "(%) Size");
        assert_eq!(lines[1], " 100 │●··");
        assert_eq!(lines[7], "  40 │·●·");
        assert_eq!(lines[11], "   0 │··●");
        assert_eq!(lines[12], "     └───");
        assert!(lines[13].contains("Images"));
        assert!(lines[13].contains("0.png.jpg → 2.png.jpg"));
    }

    #[test]
    fn test_width_is_capped() {
        let values: Vec<f64> = (0..500).map(|i| 100.0 - i as f64 / 5.0).collect();
        let lines = render(&TerminalChart::new(50), &values);
        assert_eq!(lines[1].chars().count(), " 100 │".chars().count() + 50);
    }

    #[test]
    fn test_empty_series() {
        let lines = render(&TerminalChart::default(), &[]);
        assert_eq!(lines, vec!["(no data to plot)".to_string()]);
    }

    #[test]
    fn test_snap() {
        assert_eq!(TerminalChart::snap(44.4444), 40);
        assert_eq!(TerminalChart::snap(45.0), 50);
        assert_eq!(TerminalChart::snap(120.0), 100);
    }
}
