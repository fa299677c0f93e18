//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `preview`: 预览新文件名
//! - `run`: 执行批量重命名
//! - `config`: 查看/修改保存的命名设置
//! - `extensions`: 列出支持的扩展名
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename, config

pub mod config;
pub mod rename;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// multi-rename - 批量文件重命名工具
#[derive(Parser)]
#[command(name = "multi-rename")]
#[command(version)]
#[command(about = "Batch-rename files with serial numbers, templates or folder names", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to the user config directory)
    #[arg(long, env = "MULTI_RENAME_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Show the new names without touching any file
    Preview(rename::RenameArgs),

    /// Rename the files
    Run(rename::RunArgs),

    /// Show or change the saved naming settings
    Config(config::ConfigArgs),

    /// List the supported file extensions
    Extensions,
}
