//! Type-Safe Wrappers Module
//!
//! 提供类型安全的包装器，将数学假设从注释提升到类型系统层面。
//!
//! ## 模块列表
//! - `file_size`: 文件大小类型安全包装

pub mod file_size;

pub use file_size::FileSize;
