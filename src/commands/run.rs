//! # run 子命令实现
//!
//! 显示预览、确认后执行批量重命名，并用进度条显示进度。
//!
//! ## 功能
//! - 未指定 `--yes` 时在终端询问确认；非交互终端直接拒绝
//! - 执行器在工作线程运行，主线程消费进度事件
//! - 部分完成的失败会提示已重命名的数量（不回滚）
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/runner.rs`, `utils/progress.rs`
//! - 使用 `console` 读取确认

use super::common;
use crate::batch::BatchRenamer;
use crate::cli::rename::RunArgs;
use crate::error::{RenameError, Result};
use crate::settings::SettingsStore;
use crate::utils::{output, progress};

use console::Term;
use std::thread;

/// 执行重命名
pub fn execute(args: RunArgs, store: &mut dyn SettingsStore) -> Result<()> {
    let settings = common::resolve_settings(&args.rename.naming, store)?;
    let workspace = common::build_workspace(&args.rename, &settings)?;
    let plan = workspace.plan()?;

    output::print_header(&format!(
        "Renaming {} file(s), mode {}",
        plan.len(),
        workspace.mode()
    ));
    common::print_plan(&plan);

    if let Some(path) = &args.rename.export {
        plan.to_csv(path)?;
        output::print_success(&format!("Plan saved to '{}'", path.display()));
    }

    if !args.yes && !confirm(plan.len())? {
        return Err(RenameError::Aborted);
    }

    let mut renamer = BatchRenamer::new(args.jobs);
    let events = renamer.subscribe();
    let pb = progress::create_progress_bar(plan.len() as u64, "Renaming");

    let plan_ref = &plan;
    let result = thread::scope(|s| {
        let worker = s.spawn(move || {
            let outcome = renamer.run(plan_ref);
            // 关闭进度流，主线程的进度循环随之结束
            renamer.unsubscribe();
            outcome
        });
        progress::render_events(&pb, events);
        worker
            .join()
            .unwrap_or_else(|_| Err(RenameError::Other("Rename worker panicked".to_string())))
    });

    match result {
        Ok(summary) => {
            pb.finish_and_clear();
            output::print_done(&format!(
                "Renamed {} file(s) in {} batch(es)",
                summary.renamed, summary.batches
            ));
            Ok(())
        }
        Err(err) => {
            pb.abandon();
            if err.is_partial() {
                if let RenameError::RenameFailed { renamed, .. } = &err {
                    output::print_warning(&format!(
                        "{} of {} file(s) were renamed before the failure and keep their new names",
                        renamed,
                        plan.len()
                    ));
                }
            }
            Err(err)
        }
    }
}

/// 询问确认；不在终端中运行时拒绝执行
fn confirm(count: usize) -> Result<bool> {
    let term = Term::stdout();
    if !term.is_term() {
        return Err(RenameError::InvalidArgument(
            "Not running in a terminal; pass --yes to rename without confirmation".to_string(),
        ));
    }

    term.write_str(&format!("Rename {} file(s)? [y/N] ", count))
        .and_then(|_| term.flush())
        .map_err(|e| RenameError::Other(format!("Cannot write prompt: {}", e)))?;
    let answer = term
        .read_line()
        .map_err(|e| RenameError::Other(format!("Cannot read answer: {}", e)))?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
