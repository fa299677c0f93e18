//! # 命名模块
//!
//! 新文件名的计算：模板解析、按模式生成、显示排序。全部为纯函数。
//!
//! ## 依赖关系
//! - 被 `workspace.rs`, `commands/` 使用
//! - 使用 `models/`
//! - 子模块: template, generator, sort

pub mod generator;
pub mod sort;
pub mod template;

pub use generator::generate_names;
pub use sort::{sort_by_original, sort_by_proposed, SortColumn, SortState};
