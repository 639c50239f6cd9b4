//! 终端 UI 模块
//!
//! 提供统一的终端视觉效果：
//! - ANSI 颜色与 Unicode 符号常量
//! - 统一进度条样式模板
//! - 状态消息输出（成功 / 警告 / 错误 / 信息）

use std::io::{self, Write};

// ═══════════════════════════════════════════════════════════════
// 🎨 颜色和样式常量
// ═══════════════════════════════════════════════════════════════

/// ANSI 颜色代码
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

/// Unicode 符号
pub mod symbols {
    pub const CHART: &str = "📊";
    pub const FOLDER: &str = "📁";
    pub const IMAGE: &str = "🖼️";
    pub const SAVE: &str = "💾";
    pub const WARNING: &str = "⚠️";
    pub const ERROR: &str = "❌";
    pub const SUCCESS: &str = "✅";
    pub const INFO: &str = "ℹ️";
}

/// 统一进度条样式常量 - 全项目使用
pub mod progress_style {
    /// indicatif 需要 3 个字符: (filled, current, empty)
    pub const PROGRESS_CHARS: &str = "█▓░";

    /// Spinner 字符序列
    pub const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

    /// 批量处理进度条
    pub const BATCH_TEMPLATE: &str = "{spinner:.green} {prefix:.cyan.bold} ▕{bar:35.green/black}▏ {percent:>3}% • {pos}/{len} • ⏱️ {elapsed_precise} (ETA: {eta}) • {msg}";
}

// ═══════════════════════════════════════════════════════════════
// 📣 状态消息
// ═══════════════════════════════════════════════════════════════

/// 显示阶段标题
pub fn print_stage(title: &str) {
    use colors::*;
    eprintln!("{}📍{} {}{}{}", DIM, RESET, BOLD, title, RESET);
    let _ = io::stderr().flush();
}

/// 成功消息
pub fn print_success(msg: &str) {
    use colors::*;
    eprintln!("{}{} {}{}", BRIGHT_GREEN, symbols::SUCCESS, msg, RESET);
}

/// 警告消息
pub fn print_warning(msg: &str) {
    use colors::*;
    eprintln!("{}{} {}{}", BRIGHT_YELLOW, symbols::WARNING, msg, RESET);
}

/// 错误消息
pub fn print_error(msg: &str) {
    use colors::*;
    eprintln!("{}{} {}{}", BRIGHT_RED, symbols::ERROR, msg, RESET);
}

/// 信息消息
pub fn print_info(msg: &str) {
    use colors::*;
    eprintln!("{}{} {}{}", BRIGHT_CYAN, symbols::INFO, msg, RESET);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_helpers_no_panic() {
        print_stage("Converting");
        print_success("done");
        print_warning("careful");
        print_error("broken");
        print_info("fyi");
    }

    #[test]
    fn test_progress_chars_have_three_glyphs() {
        assert_eq!(progress_style::PROGRESS_CHARS.chars().count(), 3);
    }
}
