//! # multi-rename - 批量文件重命名工具
//!
//! 为一组文件生成新文件名（序号、模板或文件夹名），检测冲突后分批并行重命名。
//!
//! ## 子命令
//! - `preview` - 预览新文件名与冲突
//! - `run` - 执行批量重命名
//! - `config` - 查看/修改保存的命名设置
//! - `extensions` - 列出支持的扩展名
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── workspace.rs (文件列表与命名状态)
//!   │     ├── naming/      (新文件名生成与排序)
//!   │     ├── batch/       (收集、冲突检测、批量执行)
//!   │     ├── settings.rs  (设置持久化)
//!   │     └── models/      (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod naming;
mod settings;
mod utils;
mod workspace;

use clap::Parser;
use cli::Cli;
use settings::JsonSettingsStore;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    let config_path = cli.config.unwrap_or_else(JsonSettingsStore::default_path);
    log::debug!("Settings file: {}", config_path.display());
    let mut store = JsonSettingsStore::open(config_path);

    if let Err(e) = commands::run(cli.command, &mut store) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
