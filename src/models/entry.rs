//! # 文件条目与命名模式
//!
//! 定义工作列表中的文件条目、命名模式和模板参数。
//!
//! ## 依赖关系
//! - 被 `naming/`, `batch/`, `workspace.rs` 使用
//! - 被 `settings.rs` 序列化（`RenameMode`）

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认自定义模板
pub const DEFAULT_TEMPLATE: &str = "{filename}_{date:%Y%m%d}_{num}";

/// 工作列表中的单个文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// 源文件路径
    pub path: PathBuf,
    /// 不含扩展名的文件名
    pub base_name: String,
    /// 扩展名（不含点，可能为空）
    pub extension: String,
    /// 导入时的文件名，导入后不再改变
    original_base_name: String,
}

impl FileEntry {
    /// 从路径创建文件条目
    ///
    /// 以最后一个 `.` 分割扩展名；以点开头的文件名（如 `.bashrc`）没有扩展名。
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let base_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            original_base_name: base_name.clone(),
            path,
            base_name,
            extension,
        }
    }

    /// 导入时捕获的原始文件名
    pub fn original_base_name(&self) -> &str {
        &self.original_base_name
    }

    /// 文件名是否为合法 UTF-8（否则新文件名中会出现替换字符）
    pub fn has_utf8_name(path: &Path) -> bool {
        path.file_name().map_or(false, |n| n.to_str().is_some())
    }

}

/// 拼接文件名与扩展名，扩展名为空时只返回文件名
pub fn with_extension(base: &str, extension: &str) -> String {
    if extension.is_empty() {
        base.to_string()
    } else {
        format!("{}.{}", base, extension)
    }
}

/// 命名模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameMode {
    /// 仅序号: 001, 002, ...
    #[default]
    SerialOnly,
    /// 序号前缀: 001_name
    SerialPrefix,
    /// 序号后缀: name_001
    SerialSuffix,
    /// 自定义模板
    Custom,
    /// 文件夹名 + 序号
    FolderRename,
}

impl std::fmt::Display for RenameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenameMode::SerialOnly => write!(f, "serial_only"),
            RenameMode::SerialPrefix => write!(f, "serial_prefix"),
            RenameMode::SerialSuffix => write!(f, "serial_suffix"),
            RenameMode::Custom => write!(f, "custom"),
            RenameMode::FolderRename => write!(f, "folder_rename"),
        }
    }
}

/// 命名参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParameters {
    /// 自定义模板（仅 Custom 模式使用）
    pub template: String,
    /// 起始序号（≥ 1）
    pub start_number: u32,
    /// 源文件夹名（仅 FolderRename 模式使用）
    pub source_folder_name: Option<String>,
}

impl Default for TemplateParameters {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            start_number: 1,
            source_folder_name: None,
        }
    }
}

impl TemplateParameters {
    /// 设置起始序号，非正数按 1 处理
    pub fn with_start_number(mut self, start: i64) -> Self {
        self.start_number = clamp_start_number(start);
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_source_folder(mut self, name: Option<String>) -> Self {
        self.source_folder_name = name;
        self
    }
}

/// 起始序号下限为 1
pub fn clamp_start_number(start: i64) -> u32 {
    if start < 1 {
        1
    } else {
        u32::try_from(start).unwrap_or(u32::MAX)
    }
}

/// 解析用户输入的起始序号；非数字或非正数时回退为 1
pub fn parse_start_number(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(n) if n >= 1 => clamp_start_number(n),
        _ => {
            log::warn!("Start number '{}' is not a positive integer, using 1", input);
            1
        }
    }
}
