//! # 工作区
//!
//! 组合层状态：工作文件列表、命名模式、参数、源文件夹和排序方向。
//! 命令执行时由设置构建，不使用全局状态。
//!
//! 文件名不是合法 UTF-8 的文件在导入时跳过，避免新文件名被替换字符改写。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `naming/` 生成新文件名和排序
//! - 使用 `batch/collector.rs` 导入文件

use crate::batch::collector::{Collected, FileCollector};
use crate::error::{RenameError, Result};
use crate::models::{FileEntry, RenameMode, RenamePlan, TemplateParameters};
use crate::naming::{generate_names, sort_by_original, sort_by_proposed, SortColumn, SortState};

use chrono::{Local, NaiveDateTime};
use std::collections::HashSet;
use std::path::PathBuf;

/// 工作区
#[derive(Debug, Clone)]
pub struct Workspace {
    files: Vec<FileEntry>,
    mode: RenameMode,
    params: TemplateParameters,
    sort_state: SortState,
    /// 预览与执行共用的时间戳
    clock: NaiveDateTime,
}

impl Workspace {
    pub fn new(mode: RenameMode, params: TemplateParameters) -> Self {
        Self {
            files: Vec::new(),
            mode,
            params,
            sort_state: SortState::default(),
            clock: Local::now().naive_local(),
        }
    }

    pub fn mode(&self) -> RenameMode {
        self.mode
    }

    /// 通过收集器导入路径
    ///
    /// 文件夹模式下记录源文件夹名并保持目录顺序；其他模式导入后按原文件名排序。
    pub fn ingest(&mut self, collector: &FileCollector) -> Result<usize> {
        if self.mode == RenameMode::FolderRename {
            let Collected {
                files,
                source_folder,
            } = collector.collect_folder()?;
            self.params.source_folder_name = source_folder;
            Ok(self.add_paths(files, true))
        } else {
            let collected = collector.collect()?;
            Ok(self.add_paths(collected.files, false))
        }
    }

    /// 添加路径（跳过已在列表中的路径），返回新增数量
    pub fn add_paths(&mut self, paths: Vec<PathBuf>, is_folder_content: bool) -> usize {
        let mut known: HashSet<PathBuf> = self.files.iter().map(|f| f.path.clone()).collect();
        let before = self.files.len();

        for path in paths {
            if !FileEntry::has_utf8_name(&path) {
                log::warn!("Skipping {}: file name is not valid UTF-8", path.display());
                continue;
            }
            if known.insert(path.clone()) {
                self.files.push(FileEntry::from_path(path));
            }
        }

        let added = self.files.len() - before;
        if added > 0 && !is_folder_content {
            self.sort_by(SortColumn::Original);
        }
        added
    }

    /// 按索引移除条目，返回移除数量
    pub fn remove(&mut self, indices: &[usize]) -> usize {
        let selected: HashSet<usize> = indices.iter().copied().collect();
        let before = self.files.len();
        let mut index = 0;
        self.files.retain(|_| {
            let keep = !selected.contains(&index);
            index += 1;
            keep
        });
        before - self.files.len()
    }

    /// 按列排序，同列重复调用切换方向；返回本次是否升序
    pub fn sort_by(&mut self, column: SortColumn) -> bool {
        let ascending = self.sort_state.toggle(column);
        self.files = match column {
            SortColumn::Original => sort_by_original(&self.files, ascending),
            SortColumn::Converted => {
                sort_by_proposed(&self.files, self.mode, &self.params, self.clock, ascending)
            }
        };
        ascending
    }

    /// 当前列表的新文件名
    pub fn preview(&self) -> Vec<String> {
        generate_names(&self.files, self.mode, &self.params, self.clock)
    }

    /// 构建重命名计划
    pub fn plan(&self) -> Result<RenamePlan> {
        if self.files.is_empty() {
            return Err(RenameError::EmptyList);
        }
        RenamePlan::from_entries(&self.files, &self.preview())
    }
}
