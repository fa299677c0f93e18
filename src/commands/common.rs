//! # 子命令公共逻辑
//!
//! ## 功能
//! - 将命令行命名参数合并到保存的设置，有变化时写回
//! - 根据输入路径构建工作区，应用 `--sort` 和 `--skip`
//! - 生成预览表格
//!
//! ## 依赖关系
//! - 被 `commands/preview.rs`, `commands/run.rs`, `commands/config.rs` 使用

use crate::batch::FileCollector;
use crate::cli::rename::{NamingArgs, RenameArgs};
use crate::error::Result;
use crate::models::{parse_start_number, RenamePlan};
use crate::settings::{RenameSettings, SettingsStore};
use crate::workspace::Workspace;

use tabled::{Table, Tabled};

/// 预览表格行
#[derive(Debug, Clone, Tabled)]
pub struct PreviewRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Original")]
    pub original: String,
    #[tabled(rename = "New name")]
    pub new_name: String,
}

/// 将命令行参数应用到设置，返回是否有变化
pub fn apply_naming(settings: &mut RenameSettings, naming: &NamingArgs) -> bool {
    let before = settings.clone();

    if let Some(mode) = naming.mode {
        settings.mode = mode.into();
    }
    if let Some(template) = &naming.template {
        settings.template = template.clone();
    }
    if let Some(start) = &naming.start {
        settings.start_number = parse_start_number(start);
    }

    *settings != before
}

/// 加载设置并合并命令行参数；有变化时持久化
pub fn resolve_settings(
    naming: &NamingArgs,
    store: &mut dyn SettingsStore,
) -> Result<RenameSettings> {
    let mut settings = RenameSettings::load(&*store);
    if apply_naming(&mut settings, naming) {
        settings.save(store)?;
        log::info!(
            "Saved settings: mode={}, start={}, template={}",
            settings.mode,
            settings.start_number,
            settings.template
        );
    }
    Ok(settings)
}

/// 导入路径并按 `--sort` 依次排序
pub fn build_workspace(args: &RenameArgs, settings: &RenameSettings) -> Result<Workspace> {
    let mut workspace = Workspace::new(settings.mode, settings.parameters(None));

    let collector = FileCollector::new(args.paths.clone())
        .with_pattern(args.pattern.as_deref())?
        .filter_extensions(!args.all_extensions);

    let added = workspace.ingest(&collector)?;
    log::info!("Collected {} file(s)", added);

    for column in &args.sort {
        let ascending = workspace.sort_by(*column);
        log::debug!(
            "Sorted by {:?} ({})",
            column,
            if ascending { "ascending" } else { "descending" }
        );
    }

    if !args.skip.is_empty() {
        let indices: Vec<usize> = args
            .skip
            .iter()
            .filter(|&&row| row > 0)
            .map(|row| row - 1)
            .collect();
        let removed = workspace.remove(&indices);
        log::info!("Left out {} file(s)", removed);
    }

    Ok(workspace)
}

/// 计划对应的预览行
pub fn preview_rows(plan: &RenamePlan) -> Vec<PreviewRow> {
    plan.items()
        .iter()
        .enumerate()
        .map(|(i, item)| PreviewRow {
            index: i + 1,
            original: item
                .source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            new_name: item.proposed_name.clone(),
        })
        .collect()
}

/// 打印预览表格
pub fn print_plan(plan: &RenamePlan) {
    let table = Table::new(preview_rows(plan));
    println!("{}", table);
}
