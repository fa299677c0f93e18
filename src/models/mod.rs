//! # 数据模型模块
//!
//! 定义文件条目、命名模式、重命名计划和进度事件。
//!
//! ## 依赖关系
//! - 被 `naming/`, `batch/`, `commands/` 使用
//! - 子模块: entry, plan

pub mod entry;
pub mod plan;

pub use entry::{
    parse_start_number, with_extension, FileEntry, RenameMode, TemplateParameters, DEFAULT_TEMPLATE,
};
pub use plan::{PlanItem, ProgressEvent, RenamePlan};
