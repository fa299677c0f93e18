//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `settings.rs`, `workspace.rs`, `batch/`, `utils/`
//! - 子模块: common, preview, run, config, extensions

pub mod common;
pub mod config;
pub mod extensions;
pub mod preview;
pub mod run;

use crate::cli::Commands;
use crate::error::Result;
use crate::settings::JsonSettingsStore;

/// 执行命令
pub fn run(cmd: Commands, store: &mut JsonSettingsStore) -> Result<()> {
    match cmd {
        Commands::Preview(args) => preview::execute(args, store),
        Commands::Run(args) => run::execute(args, store),
        Commands::Config(args) => config::execute(args, store),
        Commands::Extensions => extensions::execute(),
    }
}
