//! # extensions 子命令实现
//!
//! 按分组列出支持的扩展名。

use crate::batch::EXTENSION_GROUPS;
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    group: &'static str,
    #[tabled(rename = "Extensions")]
    extensions: String,
}

/// 执行 extensions 子命令
pub fn execute() -> Result<()> {
    output::print_header("Supported Extensions");

    let rows: Vec<GroupRow> = EXTENSION_GROUPS
        .iter()
        .map(|&(group, exts)| GroupRow {
            group,
            extensions: exts.join(", "),
        })
        .collect();
    println!("{}", Table::new(rows));

    output::print_info("Use --all-extensions to accept any file");
    Ok(())
}
