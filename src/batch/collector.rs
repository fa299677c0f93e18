//! # 文件收集器
//!
//! 将拖放或命令行传入的原始路径列表整理为待重命名的文件列表。
//!
//! ## 功能
//! - 普通模式：按支持的扩展名过滤，目录展开一层（非递归）
//! - 文件夹模式：第一个路径必须是目录，其直接子文件为列表，目录名为源文件夹名
//! - 可选 glob 模式过滤文件名
//!
//! ## 依赖关系
//! - 被 `workspace.rs`, `commands/` 调用
//! - 使用 `walkdir` 展开目录
//! - 使用 `glob` 匹配文件名

use crate::error::{RenameError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 支持的扩展名（小写，不含点）
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tga", "tif", "tiff", "psd", "mp4", "mov", "avi", "mkv",
    "webm", "wmv", "flv", "f4v", "m4v", "ogg", "mp3", "wav", "webp", "svg",
];

/// 文件选择对话框使用的扩展名分组
pub const EXTENSION_GROUPS: &[(&str, &[&str])] = &[
    (
        "Images",
        &[
            "jpg", "jpeg", "png", "gif", "bmp", "tga", "tif", "tiff", "psd", "webp", "svg",
        ],
    ),
    (
        "Videos",
        &["mp4", "mov", "avi", "mkv", "webm", "wmv", "flv", "f4v", "m4v"],
    ),
    ("Audio", &["ogg", "mp3", "wav"]),
];

/// 收集结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    /// 文件路径（保持输入顺序）
    pub files: Vec<PathBuf>,
    /// 文件夹模式下的源文件夹名
    pub source_folder: Option<String>,
}

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    inputs: Vec<PathBuf>,
    /// 文件名匹配模式
    pattern: Option<glob::Pattern>,
    /// 是否只接受支持的扩展名
    filter_extensions: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            pattern: None,
            filter_extensions: true,
        }
    }

    /// 设置文件名匹配模式
    pub fn with_pattern(mut self, pattern: Option<&str>) -> Result<Self> {
        self.pattern = match pattern {
            Some(p) => Some(glob::Pattern::new(p).map_err(|e| {
                RenameError::InvalidArgument(format!("Invalid pattern '{}': {}", p, e))
            })?),
            None => None,
        };
        Ok(self)
    }

    /// 是否按支持的扩展名过滤
    pub fn filter_extensions(mut self, enabled: bool) -> Self {
        self.filter_extensions = enabled;
        self
    }

    /// 普通模式收集
    pub fn collect(&self) -> Result<Collected> {
        let mut files = Vec::new();

        for input in &self.inputs {
            if input.is_dir() {
                files.extend(
                    expand_directory(input)?
                        .into_iter()
                        .filter(|path| self.accepts(path)),
                );
            } else if input.is_file() && self.accepts(input) {
                files.push(input.clone());
            } else {
                log::debug!("Skipping {}", input.display());
            }
        }

        if files.is_empty() && !self.inputs.is_empty() {
            return Err(RenameError::UnsupportedFiles {
                count: self.inputs.len(),
            });
        }

        Ok(Collected {
            files,
            source_folder: None,
        })
    }

    /// 文件夹模式收集：只看第一个路径
    pub fn collect_folder(&self) -> Result<Collected> {
        let folder = self.inputs.first().ok_or(RenameError::EmptyList)?;

        if !folder.exists() {
            return Err(RenameError::DirectoryNotFound {
                path: folder.display().to_string(),
            });
        }
        if !is_directory(folder) {
            return Err(RenameError::NotADirectory {
                path: folder.display().to_string(),
            });
        }
        if self.inputs.len() > 1 {
            log::warn!(
                "Folder mode uses only the first path; ignoring {} other(s)",
                self.inputs.len() - 1
            );
        }

        let files: Vec<PathBuf> = expand_directory(folder)?
            .into_iter()
            .filter(|path| self.matches_pattern(path))
            .collect();

        if files.is_empty() {
            return Err(RenameError::EmptyFolder {
                path: folder.display().to_string(),
            });
        }

        let source_folder = folder
            .canonicalize()
            .unwrap_or_else(|_| folder.clone())
            .file_name()
            .map(|n| n.to_string_lossy().to_string());

        Ok(Collected {
            files,
            source_folder,
        })
    }

    /// 文件是否符合扩展名与模式过滤
    fn accepts(&self, path: &Path) -> bool {
        (!self.filter_extensions || is_supported(path)) && self.matches_pattern(path)
    }

    fn matches_pattern(&self, path: &Path) -> bool {
        let Some(pattern) = &self.pattern else {
            return true;
        };
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|name| pattern.matches(name))
            .unwrap_or(false)
    }
}

/// 扩展名是否受支持（忽略大小写）
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// 路径是否为目录
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

/// 列出目录的直接子文件（非递归，按文件名排序）
pub fn expand_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| RenameError::FileReadError {
            path: dir.display().to_string(),
            source: e.into(),
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
