//! # 统一错误处理模块
//!
//! 定义 multi-rename 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::path::PathBuf;
use thiserror::Error;

/// 冲突名称列表在消息中最多展示的数量
pub const MAX_LISTED_NAMES: usize = 3;

/// multi-rename 统一错误类型
#[derive(Error, Debug)]
pub enum RenameError {
    // ─────────────────────────────────────────────────────────────
    // 重命名计划错误
    // ─────────────────────────────────────────────────────────────
    #[error("No files in the list")]
    EmptyList,

    #[error("Duplicate file names in rename plan: {}", summarize_names(.names))]
    DuplicateNames { names: Vec<String> },

    #[error("Files with the same name already exist: {}", summarize_names(.names))]
    DestinationExists { names: Vec<String> },

    #[error("Failed to rename {}: {source}", .path.display())]
    RenameFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        /// 中止前已完成的重命名数量
        renamed: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path} (folder mode expects a single folder)")]
    NotADirectory { path: String },

    #[error("Folder is empty: {path}")]
    EmptyFolder { path: String },

    #[error("No supported files among {count} input path(s)")]
    UnsupportedFiles { count: usize },

    // ─────────────────────────────────────────────────────────────
    // 设置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Settings error ({path}): {reason}")]
    SettingsError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Rename cancelled by user")]
    Aborted,

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl RenameError {
    /// 是否为部分成功（已有文件被重命名后才失败）
    pub fn is_partial(&self) -> bool {
        matches!(self, RenameError::RenameFailed { renamed, .. } if *renamed > 0)
    }
}

/// 将名称列表压缩为 "a, b, c and N more" 形式
pub fn summarize_names(names: &[String]) -> String {
    let shown = names
        .iter()
        .take(MAX_LISTED_NAMES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if names.len() > MAX_LISTED_NAMES {
        format!("{} and {} more", shown, names.len() - MAX_LISTED_NAMES)
    } else {
        shown
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RenameError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{:03}.jpg", i)).collect()
    }

    #[test]
    fn test_summarize_short_list() {
        assert_eq!(summarize_names(&names(1)), "001.jpg");
        assert_eq!(summarize_names(&names(3)), "001.jpg, 002.jpg, 003.jpg");
    }

    #[test]
    fn test_summarize_truncates_after_three() {
        assert_eq!(
            summarize_names(&names(5)),
            "001.jpg, 002.jpg, 003.jpg and 2 more"
        );
    }

    #[test]
    fn test_collision_message_keeps_full_list() {
        let err = RenameError::DestinationExists { names: names(4) };
        assert_eq!(
            err.to_string(),
            "Files with the same name already exist: 001.jpg, 002.jpg, 003.jpg and 1 more"
        );
        if let RenameError::DestinationExists { names } = err {
            assert_eq!(names.len(), 4);
        }
    }

    #[test]
    fn test_partial_failure() {
        let io = || std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let partial = RenameError::RenameFailed {
            path: PathBuf::from("a.jpg"),
            source: io(),
            renamed: 3,
        };
        let total = RenameError::RenameFailed {
            path: PathBuf::from("a.jpg"),
            source: io(),
            renamed: 0,
        };
        assert!(partial.is_partial());
        assert!(!total.is_partial());
        assert!(!RenameError::EmptyList.is_partial());
    }
}
