//! # config 子命令 CLI 定义
//!
//! 查看、修改、重置保存的命名设置
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/config.rs`

use super::rename::NamingArgs;
use clap::{Args, Subcommand};

/// config 主命令参数
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// config 子命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the saved settings
    Show,

    /// Change the saved settings
    Set(NamingArgs),

    /// Restore the default settings
    Reset,
}
