//! Unified Error Handler Module - 统一错误处理策略
//!
//! ## 错误分类
//! - Recoverable: 可恢复错误（例如交互输入错误），提示后继续
//! - Fatal: 致命错误，传播错误并中断，进程以非零状态退出
//!
//! ## 错误报告功能
//! - `report_error()`: 把错误及完整的 cause 链写入日志文件（终端只显示一次用户提示）
//! - Panic handler: 在程序崩溃前记录详细信息

use crate::logging::FILE_ONLY_TARGET;
use std::fmt;
use std::panic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Recoverable,
    Fatal,
}

impl ErrorCategory {
    pub fn is_fatal(self) -> bool {
        matches!(self, ErrorCategory::Fatal)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Recoverable => write!(f, "RECOVERABLE"),
            ErrorCategory::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Record an error and its cause chain in the log file.
///
/// Nothing reaches the terminal; callers print their own user-facing message.
pub fn report_error<E: std::error::Error + ?Sized>(error: &E) {
    tracing::error!(target: FILE_ONLY_TARGET, error = %error, "Error occurred");

    let mut source = error.source();
    let mut level = 1;
    while let Some(err) = source {
        tracing::error!(target: FILE_ONLY_TARGET, level, cause = %err, "Caused by");
        source = err.source();
        level += 1;
    }
}

pub fn install_panic_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic payload".to_string()
        };

        let location = if let Some(loc) = panic_info.location() {
            format!("{}:{}:{}", loc.file(), loc.line(), loc.column())
        } else {
            "Unknown location".to_string()
        };

        eprintln!("💥 PANIC occurred!");
        eprintln!("   Message: {}", message);
        eprintln!("   Location: {}", location);
        eprintln!("   This is a bug! Please report it.");

        tracing::error!(message = %message, location = %location, "PANIC");

        default_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Recoverable), "RECOVERABLE");
        assert_eq!(format!("{}", ErrorCategory::Fatal), "FATAL");
    }

    #[test]
    fn test_is_fatal() {
        assert!(ErrorCategory::Fatal.is_fatal());
        assert!(!ErrorCategory::Recoverable.is_fatal());
    }

    #[test]
    fn test_report_error() {
        let error = io::Error::new(io::ErrorKind::NotFound, "test file not found");
        report_error(&error);
    }

    #[test]
    fn test_error_chain_reporting() {
        let outer_error: Box<dyn std::error::Error> =
            Box::new(io::Error::other("outer error with inner cause"));

        report_error(outer_error.as_ref());
    }

    #[test]
    fn test_install_panic_handler() {
        install_panic_handler();
    }
}
