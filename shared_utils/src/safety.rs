//! Safety Module
//!
//! Tools in this workspace create and delete folders beneath the directory
//! they are pointed at. Any ordinary folder is fine, but the filesystem root
//! itself is refused.

use std::path::Path;

/// Refuse the filesystem root (`/`, or a drive root on Windows).
///
/// Symlinks and `..` are resolved first, so `/usr/..` is refused as well.
pub fn check_dangerous_directory(path: &Path) -> Result<(), String> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

    if canonical.has_root() && canonical.parent().is_none() {
        return Err(format!(
            "🚨 DANGEROUS OPERATION BLOCKED!\n\
             ❌ Target directory '{}' is the filesystem root.\n\
             💡 Please specify a folder that contains your images instead.",
            path.display()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_root_blocked() {
        assert!(check_dangerous_directory(Path::new("/")).is_err());
        assert!(check_dangerous_directory(Path::new("/usr/..")).is_err());
    }

    #[test]
    fn test_system_and_home_folders_allowed() {
        assert!(check_dangerous_directory(Path::new("/tmp")).is_ok());
        assert!(check_dangerous_directory(Path::new("/opt")).is_ok());
        assert!(check_dangerous_directory(Path::new("/home/someone")).is_ok());
        assert!(check_dangerous_directory(Path::new("/Users/test/Documents/photos")).is_ok());
    }

    #[test]
    fn test_relative_and_temp_paths_allowed() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(check_dangerous_directory(temp.path()).is_ok());
        assert!(check_dangerous_directory(Path::new("photos")).is_ok());
    }
}
