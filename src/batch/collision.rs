//! # 冲突检测
//!
//! 执行前对整个计划进行检查：
//! - 内部冲突：计划中两个以上条目生成了相同的新文件名（不访问文件系统）
//! - 外部冲突：目标路径已存在且不是该条目自身的源文件
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/preview.rs` 调用
//! - 使用 `batch/backend.rs` 查询文件是否存在

use crate::batch::backend::FileSystem;
use crate::error::RenameError;
use crate::models::RenamePlan;

use std::collections::{HashMap, HashSet};

/// 冲突检测结果（保留完整名称列表）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// 计划内重复的新文件名（按首次出现顺序，每个名称一次）
    pub duplicates: Vec<String>,
    /// 目标已存在的新文件名
    pub existing: Vec<String>,
}

impl CollisionReport {
    pub fn is_clear(&self) -> bool {
        self.duplicates.is_empty() && self.existing.is_empty()
    }

    /// 转换为错误；内部冲突优先
    pub fn into_error(self) -> Option<RenameError> {
        if !self.duplicates.is_empty() {
            Some(RenameError::DuplicateNames {
                names: self.duplicates,
            })
        } else if !self.existing.is_empty() {
            Some(RenameError::DestinationExists {
                names: self.existing,
            })
        } else {
            None
        }
    }
}

/// 检测计划内重复的新文件名
pub fn find_duplicates(plan: &RenamePlan) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in plan.items() {
        *counts.entry(item.proposed_name.as_str()).or_default() += 1;
    }

    let mut reported = HashSet::new();
    plan.items()
        .iter()
        .map(|item| item.proposed_name.as_str())
        .filter(|name| counts[name] > 1 && reported.insert(*name))
        .map(str::to_string)
        .collect()
}

/// 检测目标路径已存在的条目（新旧路径相同的不算冲突）
pub fn find_existing<F: FileSystem + ?Sized>(plan: &RenamePlan, fs: &F) -> Vec<String> {
    plan.items()
        .iter()
        .filter(|item| !item.is_noop() && fs.exists(&item.destination()))
        .map(|item| item.proposed_name.clone())
        .collect()
}

/// 完整冲突检测
pub fn detect_collisions<F: FileSystem + ?Sized>(plan: &RenamePlan, fs: &F) -> CollisionReport {
    CollisionReport {
        duplicates: find_duplicates(plan),
        existing: find_existing(plan, fs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::backend::memory::MemoryFs;
    use crate::models::{PlanItem, RenameMode, TemplateParameters};
    use crate::workspace::Workspace;

    fn plan(pairs: &[(&str, &str)]) -> RenamePlan {
        RenamePlan::new(pairs.iter().map(|(s, n)| PlanItem::new(*s, *n)).collect())
    }

    #[test]
    fn test_internal_duplicates_without_filesystem() {
        let p = plan(&[
            ("/d/a.jpg", "same.jpg"),
            ("/d/b.jpg", "other.jpg"),
            ("/d/c.jpg", "same.jpg"),
            ("/d/e.jpg", "same.jpg"),
        ]);
        assert_eq!(find_duplicates(&p), vec!["same.jpg"]);
    }

    #[test]
    fn test_template_collisions_flagged_together() {
        let params = TemplateParameters::default().with_template("x");
        let mut workspace = Workspace::new(RenameMode::Custom, params);
        workspace.add_paths(
            vec!["/d/a.jpg".into(), "/d/b.jpg".into(), "/d/c.png".into()],
            false,
        );

        let plan = workspace.plan().unwrap();
        assert_eq!(find_duplicates(&plan), vec!["x.jpg"]);

        let fs = MemoryFs::default();
        match detect_collisions(&plan, &fs).into_error() {
            Some(RenameError::DuplicateNames { names }) => assert_eq!(names, vec!["x.jpg"]),
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(fs.io_calls(), 3);
    }

    #[test]
    fn test_existing_destination_is_collision() {
        let fs = MemoryFs::with_files(["/d/a.jpg", "/d/b.jpg", "/d/001.jpg"]);
        let p = plan(&[("/d/a.jpg", "001.jpg"), ("/d/b.jpg", "002.jpg")]);

        let report = detect_collisions(&p, &fs);
        assert!(report.duplicates.is_empty());
        assert_eq!(report.existing, vec!["001.jpg"]);
        assert!(!report.is_clear());
    }

    #[test]
    fn test_noop_rename_is_not_collision() {
        let fs = MemoryFs::with_files(["/d/001.jpg"]);
        let p = plan(&[("/d/001.jpg", "001.jpg")]);

        let report = detect_collisions(&p, &fs);
        assert!(report.is_clear());
        assert!(report.into_error().is_none());
    }

    #[test]
    fn test_duplicates_reported_before_existing() {
        let fs = MemoryFs::with_files(["/d/a.jpg", "/d/b.jpg", "/d/taken.jpg"]);
        let p = plan(&[
            ("/d/a.jpg", "dup.jpg"),
            ("/d/b.jpg", "dup.jpg"),
            ("/d/c.jpg", "taken.jpg"),
        ]);

        match detect_collisions(&p, &fs).into_error() {
            Some(RenameError::DuplicateNames { names }) => assert_eq!(names, vec!["dup.jpg"]),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_all_offending_names_available() {
        let existing: Vec<String> = (1..=5).map(|i| format!("/d/{:03}.jpg", i)).collect();
        let fs = MemoryFs::with_files(existing);
        let pairs: Vec<(String, String)> = (1..=5)
            .map(|i| (format!("/d/src{}.jpg", i), format!("{:03}.jpg", i)))
            .collect();
        let p = RenamePlan::new(pairs.iter().map(|(s, n)| PlanItem::new(s, n.as_str())).collect());

        let err = detect_collisions(&p, &fs).into_error().unwrap();
        assert!(err.to_string().ends_with("001.jpg, 002.jpg, 003.jpg and 2 more"));
        match err {
            RenameError::DestinationExists { names } => assert_eq!(names.len(), 5),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
