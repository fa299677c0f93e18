//! # 新文件名生成器
//!
//! 纯函数：由（文件列表, 命名模式, 参数）计算新文件名列表，不做任何 I/O。
//!
//! ## 命名规则
//! | 模式 | 文件名 |
//! |---|---|
//! | SerialOnly | `001` |
//! | SerialPrefix | `001_原文件名` |
//! | SerialSuffix | `原文件名_001` |
//! | FolderRename | `文件夹名_001`（未设置文件夹时为空） |
//! | Custom | 模板展开 |
//!
//! 原扩展名非空时以 `.` 追加。
//!
//! ## 依赖关系
//! - 被 `naming/sort.rs`, `workspace.rs`, `commands/` 调用
//! - 使用 `naming/template.rs` 展开模板

use crate::models::{with_extension, FileEntry, RenameMode, TemplateParameters};
use crate::naming::template::{format_number, Template};

use chrono::NaiveDateTime;

/// 固定模式下序号的位数
pub const SERIAL_WIDTH: usize = 3;

/// 生成新文件名；`now` 为模板中 `{date}` 使用的时间
pub fn generate_names(
    files: &[FileEntry],
    mode: RenameMode,
    params: &TemplateParameters,
    now: NaiveDateTime,
) -> Vec<String> {
    let template = match mode {
        RenameMode::Custom => Some(Template::parse(&params.template)),
        _ => None,
    };
    let folder = params
        .source_folder_name
        .as_deref()
        .filter(|name| !name.is_empty());

    files
        .iter()
        .enumerate()
        .map(|(index, file)| {
            let number = params.start_number.saturating_add(index as u32);
            let serial = format_number(number, Some(SERIAL_WIDTH));
            let original = file.original_base_name();

            let base = match mode {
                RenameMode::SerialOnly => serial,
                RenameMode::SerialPrefix => format!("{}_{}", serial, original),
                RenameMode::SerialSuffix => format!("{}_{}", original, serial),
                RenameMode::FolderRename => match folder {
                    Some(name) => format!("{}_{}", name, serial),
                    None => String::new(),
                },
                RenameMode::Custom => template
                    .as_ref()
                    .map(|t| t.render(original, number, &now))
                    .unwrap_or_default(),
            };

            with_extension(&base, &file.extension)
        })
        .collect()
}
