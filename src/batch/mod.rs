//! # 批量处理模块
//!
//! 重命名计划的收集、校验与执行。
//!
//! ## 功能
//! - 收集输入文件（扩展名过滤、目录展开、文件夹模式）
//! - 执行前冲突检测
//! - 分批并行重命名与进度推送
//!
//! ## 依赖关系
//! - 被 `workspace.rs`, `commands/` 使用
//! - 使用 `rayon` 进行批内并行
//! - 使用 `walkdir` 展开目录

pub mod backend;
pub mod collector;
pub mod collision;
pub mod runner;

pub use backend::LocalFs;
pub use collector::{FileCollector, EXTENSION_GROUPS};
pub use collision::detect_collisions;
pub use runner::BatchRenamer;
