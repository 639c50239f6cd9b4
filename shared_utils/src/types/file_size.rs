//! FileSize Type-Safe Wrapper
//!
//! 提供类型安全的文件大小操作，防止溢出和负数。

use std::fmt;
use std::path::Path;

// ============================================================================
// FileSize Newtype
// ============================================================================

/// 类型安全的文件大小（字节）
///
/// # Examples
/// ```
/// use shared_utils::types::file_size::FileSize;
///
/// let size = FileSize::new(1024 * 1024);
/// assert_eq!(size.bytes(), 1048576);
/// assert_eq!(size.display(), "1.00 MB");
///
/// let smaller = FileSize::new(500);
/// assert_eq!(smaller.saturating_sub(size).bytes(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileSize(u64);

impl FileSize {
    /// 零大小
    pub const ZERO: FileSize = FileSize(0);

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Size of the file at `path`, read from its metadata.
    pub fn of_path(path: &Path) -> std::io::Result<Self> {
        std::fs::metadata(path).map(|m| Self(m.len()))
    }

    /// 获取原始字节数
    #[inline]
    pub const fn bytes(&self) -> u64 {
        self.0
    }

    /// 安全减法（不会下溢）
    #[inline]
    pub fn saturating_sub(&self, other: FileSize) -> FileSize {
        FileSize(self.0.saturating_sub(other.0))
    }

    /// 安全加法（不会溢出）
    #[inline]
    pub fn saturating_add(&self, other: FileSize) -> FileSize {
        FileSize(self.0.saturating_add(other.0))
    }

    /// 格式化显示（自动选择单位）
    pub fn display(&self) -> String {
        crate::progress::format_bytes(self.0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileSize({} = {})", self.0, self.display())
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Default for FileSize {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.0
    }
}

impl std::iter::Sum for FileSize {
    fn sum<I: Iterator<Item = FileSize>>(iter: I) -> Self {
        iter.fold(FileSize::ZERO, |acc, s| acc.saturating_add(s))
    }
}

// ============================================================================
// Tests
// ============================================================================
