//! Common Utilities Module
//!
//! 本模块提取了项目中重复出现的常见模式：
//! - 文件扩展名与文件名处理
//! - 隐藏文件判断

use std::path::Path;

/// 安全地获取文件扩展名（小写）
///
/// # Examples
/// ```
/// use std::path::Path;
/// use shared_utils::common_utils::get_extension_lowercase;
///
/// assert_eq!(get_extension_lowercase(Path::new("test.TIF")), "tif");
/// assert_eq!(get_extension_lowercase(Path::new("scan.bmp")), "bmp");
/// assert_eq!(get_extension_lowercase(Path::new("noext")), "");
/// ```
pub fn get_extension_lowercase(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// 检查文件扩展名是否在给定列表中（不区分大小写）
///
/// # Examples
/// ```
/// use std::path::Path;
/// use shared_utils::common_utils::has_extension;
///
/// let extensions = &["tif", "png"];
/// assert!(has_extension(Path::new("photo.TIF"), extensions));
/// assert!(has_extension(Path::new("image.png"), extensions));
/// assert!(!has_extension(Path::new("image.bmp"), extensions));
/// ```
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    let ext = get_extension_lowercase(path);
    extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
}

/// 检查文件是否为隐藏文件（以点号开头）
///
/// # Examples
/// ```
/// use std::path::Path;
/// use shared_utils::common_utils::is_hidden_file;
///
/// assert!(is_hidden_file(Path::new(".DS_Store")));
/// assert!(!is_hidden_file(Path::new("normal.png")));
/// ```
pub fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

/// File name as an owned string, lossy for non-UTF-8 names.
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File stem (name without the last extension) as an owned string.
///
/// ```
/// use std::path::Path;
/// use shared_utils::common_utils::file_stem_lossy;
///
/// assert_eq!(file_stem_lossy(Path::new("/cache/a.bmp.jpg")), "a.bmp");
/// ```
pub fn file_stem_lossy(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
