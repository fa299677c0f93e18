//! # 重命名计划与进度事件
//!
//! 定义提交执行的重命名计划（源路径 → 新文件名）和执行中的进度事件。
//!
//! ## 依赖关系
//! - 被 `batch/collision.rs`, `batch/runner.rs` 使用
//! - 使用 `csv` 导出计划

use crate::error::{RenameError, Result};
use crate::models::FileEntry;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 计划中的单项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanItem {
    /// 源文件路径
    pub source: PathBuf,
    /// 新文件名（不含目录）
    pub proposed_name: String,
}

impl PlanItem {
    pub fn new(source: impl Into<PathBuf>, proposed_name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            proposed_name: proposed_name.into(),
        }
    }

    /// 目标路径：源文件所在目录 + 新文件名
    pub fn destination(&self) -> PathBuf {
        self.source
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&self.proposed_name)
    }

    /// 新旧路径相同（无需重命名）
    pub fn is_noop(&self) -> bool {
        self.destination() == self.source
    }
}

/// 重命名计划，与提交时的工作列表一一对应
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    items: Vec<PlanItem>,
}

impl RenamePlan {
    pub fn new(items: Vec<PlanItem>) -> Self {
        Self { items }
    }

    /// 由文件列表与生成的新文件名配对构建
    pub fn from_entries(files: &[FileEntry], names: &[String]) -> Result<Self> {
        if files.len() != names.len() {
            return Err(RenameError::Other(format!(
                "Plan mismatch: {} files but {} names",
                files.len(),
                names.len()
            )));
        }

        let items = files
            .iter()
            .zip(names)
            .map(|(file, name)| PlanItem::new(file.path.clone(), name.clone()))
            .collect();

        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[PlanItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 导出计划为 CSV（source, destination）
    pub fn to_csv(&self, output_path: &Path) -> Result<()> {
        #[derive(Serialize)]
        struct Row<'a> {
            source: String,
            destination: String,
            proposed_name: &'a str,
        }

        let mut wtr = csv::Writer::from_path(output_path)?;

        for item in &self.items {
            wtr.serialize(Row {
                source: item.source.display().to_string(),
                destination: item.destination().display().to_string(),
                proposed_name: &item.proposed_name,
            })?;
        }

        wtr.flush().map_err(|e| RenameError::FileWriteError {
            path: output_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }
}

/// 单次重命名完成后推送的进度事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    /// 已完成数量（单调递增）
    pub processed: usize,
    /// 计划总数
    pub total: usize,
    /// round(processed / total * 100)
    pub percentage: u8,
    /// 刚完成的新文件名
    pub current_file: String,
}

impl ProgressEvent {
    pub fn new(processed: usize, total: usize, current_file: impl Into<String>) -> Self {
        let percentage = if total == 0 {
            100
        } else {
            ((processed as f64 / total as f64) * 100.0).round() as u8
        };

        Self {
            processed,
            total,
            percentage,
            current_file: current_file.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_stays_in_source_directory() {
        let item = PlanItem::new("/photos/trip/IMG_1.jpg", "001.jpg");
        assert_eq!(item.destination(), PathBuf::from("/photos/trip/001.jpg"));
        assert!(!item.is_noop());
        assert!(PlanItem::new("/photos/a.jpg", "a.jpg").is_noop());
    }

    #[test]
    fn test_plan_from_entries_requires_same_length() {
        let files = vec![FileEntry::from_path("/a/x.png")];
        assert!(RenamePlan::from_entries(&files, &[]).is_err());

        let plan = RenamePlan::from_entries(&files, &["001.png".to_string()]).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.items()[0].proposed_name, "001.png");
    }

    #[test]
    fn test_progress_percentage_rounds() {
        assert_eq!(ProgressEvent::new(1, 3, "a").percentage, 33);
        assert_eq!(ProgressEvent::new(2, 3, "b").percentage, 67);
        assert_eq!(ProgressEvent::new(120, 120, "c").percentage, 100);
    }

    #[test]
    fn test_export_csv() {
        let dir = std::env::temp_dir().join(format!("multi-rename-plan-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let out = dir.join("plan.csv");

        let plan = RenamePlan::new(vec![
            PlanItem::new("/m/a.jpg", "001.jpg"),
            PlanItem::new("/m/b.jpg", "002.jpg"),
        ]);
        plan.to_csv(&out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("source,destination,proposed_name"));
        assert_eq!(lines.next(), Some("/m/a.jpg,/m/001.jpg,001.jpg"));
        assert_eq!(lines.count(), 1);

        std::fs::remove_dir_all(&dir).ok();
    }
}
