//! Report Module
//!
//! Provides summary reporting functionality for batch operations

use crate::batch::BatchResult;
use crate::progress::{format_bytes, format_duration};
use std::time::Duration;

/// Percentage of `output_bytes` relative to `input_bytes` (0 when input is empty).
pub fn size_ratio_percent(input_bytes: u64, output_bytes: u64) -> f64 {
    if input_bytes > 0 {
        output_bytes as f64 / input_bytes as f64 * 100.0
    } else {
        0.0
    }
}

pub fn print_summary_report(
    result: &BatchResult,
    duration: Duration,
    input_bytes: u64,
    output_bytes: u64,
    operation_name: &str,
) {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  📊 {:<57}║", format!("{} Summary Report", operation_name));
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  📁 Files:              {:>10}                           ║", result.total);
    println!("║  ✅ Processed:          {:>10}                           ║", result.succeeded);
    println!("║  ♻️  Reused:             {:>10}                           ║", result.skipped);
    println!(
        "║  📈 Processed Rate:     {:>9.1}%                           ║",
        result.success_rate()
    );
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!(
        "║  💾 Input Size:         {:>10}                           ║",
        format_bytes(input_bytes)
    );
    println!(
        "║  💾 Output Size:        {:>10}                           ║",
        format_bytes(output_bytes)
    );
    println!(
        "║  📉 Output / Input:     {:>9.1}%                           ║",
        size_ratio_percent(input_bytes, output_bytes)
    );
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!(
        "║  ⏱️  Total Time:         {:>10}                           ║",
        format_duration(duration)
    );
    println!("╚══════════════════════════════════════════════════════════════╝");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_summary_report_no_panic() {
        let mut result = BatchResult::new();
        result.success();
        result.skip();

        print_summary_report(&result, Duration::from_secs(10), 1000, 500, "Test");
    }

    #[test]
    fn test_print_summary_report_zero_input() {
        let result = BatchResult::new();
        print_summary_report(&result, Duration::from_secs(1), 0, 0, "Test");
    }

    #[test]
    fn test_size_ratio_percent() {
        assert!((size_ratio_percent(1000, 500) - 50.0).abs() < 0.01);
        assert!((size_ratio_percent(1000, 250) - 25.0).abs() < 0.01);
        assert!((size_ratio_percent(500, 1000) - 200.0).abs() < 0.01);
        assert_eq!(size_ratio_percent(0, 1000), 0.0);
    }
}
