//! # preview / run 子命令 CLI 定义
//!
//! 两个子命令共用文件输入与命名参数，`run` 额外有确认和并行参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/preview.rs`, `commands/run.rs`

use crate::models::RenameMode;
use crate::naming::SortColumn;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 命名模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ModeArg {
    /// 001, 002, ...
    #[value(alias = "serial_only")]
    SerialOnly,
    /// 001_name, 002_name, ...
    #[value(alias = "serial_prefix")]
    SerialPrefix,
    /// name_001, name_002, ...
    #[value(alias = "serial_suffix")]
    SerialSuffix,
    /// Expand --template for every file
    Custom,
    /// folder_001, folder_002, ... for the files of one folder
    #[value(alias = "folder_rename")]
    FolderRename,
}

impl From<ModeArg> for RenameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::SerialOnly => RenameMode::SerialOnly,
            ModeArg::SerialPrefix => RenameMode::SerialPrefix,
            ModeArg::SerialSuffix => RenameMode::SerialSuffix,
            ModeArg::Custom => RenameMode::Custom,
            ModeArg::FolderRename => RenameMode::FolderRename,
        }
    }
}

/// 命名参数（覆盖保存的设置）
#[derive(Args, Debug, Clone, Default)]
pub struct NamingArgs {
    /// Naming mode (defaults to the saved setting)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Template for custom mode: {filename}, {num[:000]}, {date[:%Y%m%d]}
    #[arg(short, long)]
    pub template: Option<String>,

    /// First sequence number (non-positive or non-numeric values fall back to 1)
    #[arg(short, long, allow_hyphen_values = true)]
    pub start: Option<String>,
}

/// preview 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Files or folders to rename (folder mode: a single folder)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub naming: NamingArgs,

    /// Sort the list; repeat a column to toggle ascending/descending
    #[arg(long, value_enum)]
    pub sort: Vec<SortColumn>,

    /// Leave out rows of the preview table (1-based, after sorting), e.g. --skip 2,5
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<usize>,

    /// Glob pattern the file names must match
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Accept every file, not only supported media extensions
    #[arg(long, default_value_t = false)]
    pub all_extensions: bool,

    /// Write the rename plan to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub rename: RenameArgs,

    /// Rename without asking for confirmation
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    /// Number of parallel renames within a batch (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
