//! # preview 子命令实现
//!
//! 显示新文件名与冲突情况，不修改任何文件。
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `commands/common.rs`, `batch/collision.rs`

use super::common;
use crate::batch::{detect_collisions, LocalFs};
use crate::cli::rename::RenameArgs;
use crate::error::{summarize_names, Result};
use crate::settings::SettingsStore;
use crate::utils::output;

/// 执行预览
pub fn execute(args: RenameArgs, store: &mut dyn SettingsStore) -> Result<()> {
    let settings = common::resolve_settings(&args.naming, store)?;
    let workspace = common::build_workspace(&args, &settings)?;
    let plan = workspace.plan()?;

    output::print_header(&format!(
        "Preview: {} file(s), mode {}",
        plan.len(),
        workspace.mode()
    ));
    common::print_plan(&plan);

    let report = detect_collisions(&plan, &LocalFs);
    if !report.duplicates.is_empty() {
        output::print_warning(&format!(
            "Duplicate new names: {}",
            summarize_names(&report.duplicates)
        ));
    }
    if !report.existing.is_empty() {
        output::print_warning(&format!(
            "Already exist: {}",
            summarize_names(&report.existing)
        ));
    }
    if report.is_clear() {
        output::print_info("No conflicts; ready to run");
    }

    if let Some(path) = &args.export {
        plan.to_csv(path)?;
        output::print_success(&format!("Plan saved to '{}'", path.display()));
    }

    Ok(())
}
