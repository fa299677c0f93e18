//! # 批量重命名执行器
//!
//! 状态机：`Idle → Validating → Executing → {Completed | Failed}`
//!
//! ## 功能
//! - 执行前对整个计划做冲突检测，任何冲突都不会修改文件系统
//! - 按 50 个一批顺序处理，批内基于 rayon 并行重命名
//! - 每完成一个重命名推送一次进度事件
//! - 首个失败即中止：批内不再启动新的重命名，后续批次不再执行，不回滚
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `batch/collision.rs` 做执行前检查
//! - 使用 `rayon` 进行批内并行

use crate::batch::backend::{FileSystem, LocalFs};
use crate::batch::collision::detect_collisions;
use crate::error::{RenameError, Result};
use crate::models::{PlanItem, ProgressEvent, RenamePlan};

use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::time::Duration;

/// 每批重命名数量
pub const BATCH_SIZE: usize = 50;

/// 批次之间的让步时间，留给进度显示刷新
pub const BATCH_PAUSE: Duration = Duration::from_millis(10);

/// 执行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameState {
    Idle,
    Validating,
    Executing,
    Completed,
    Failed,
}

/// 全部成功时的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSummary {
    /// 完成的重命名数量
    pub renamed: usize,
    /// 执行的批次数
    pub batches: usize,
}

/// 进度计数与推送，计数递增与发送在同一把锁内完成
struct ProgressTracker {
    processed: usize,
    total: usize,
    sender: Option<Sender<ProgressEvent>>,
}

impl ProgressTracker {
    fn record(&mut self, current_file: &str) {
        self.processed += 1;
        if let Some(sender) = &self.sender {
            let event = ProgressEvent::new(self.processed, self.total, current_file);
            // 订阅方已断开时忽略
            if sender.send(event).is_err() {
                self.sender = None;
            }
        }
    }
}

/// 批量重命名执行器
pub struct BatchRenamer<F: FileSystem = LocalFs> {
    fs: F,
    /// 批内并行数
    jobs: usize,
    batch_size: usize,
    progress: Option<Sender<ProgressEvent>>,
}

impl BatchRenamer<LocalFs> {
    /// 创建操作本地磁盘的执行器（jobs = 0 时使用 CPU 核数）
    pub fn new(jobs: usize) -> Self {
        Self::with_fs(LocalFs, jobs)
    }
}

impl<F: FileSystem> BatchRenamer<F> {
    pub fn with_fs(fs: F, jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            fs,
            jobs: jobs.min(BATCH_SIZE),
            batch_size: BATCH_SIZE,
            progress: None,
        }
    }

    /// 订阅进度事件；再次订阅会替换之前的订阅
    pub fn subscribe(&mut self) -> Receiver<ProgressEvent> {
        let (tx, rx) = mpsc::channel();
        self.progress = Some(tx);
        rx
    }

    /// 取消订阅，接收端随之结束
    pub fn unsubscribe(&mut self) {
        self.progress = None;
    }

    /// 执行重命名计划
    ///
    /// 失败时返回首个错误；`RenameFailed.renamed` 为中止前已完成的数量。
    pub fn run(&self, plan: &RenamePlan) -> Result<RenameSummary> {
        let mut state = RenameState::Idle;

        if plan.is_empty() {
            transition(&mut state, RenameState::Failed);
            return Err(RenameError::EmptyList);
        }

        transition(&mut state, RenameState::Validating);
        if let Some(err) = detect_collisions(plan, &self.fs).into_error() {
            transition(&mut state, RenameState::Failed);
            return Err(err);
        }

        transition(&mut state, RenameState::Executing);
        let result = self.execute(plan);
        match &result {
            Ok(summary) => {
                transition(&mut state, RenameState::Completed);
                log::info!(
                    "Renamed {} file(s) in {} batch(es)",
                    summary.renamed,
                    summary.batches
                );
            }
            Err(err) => {
                transition(&mut state, RenameState::Failed);
                log::info!("Rename aborted: {}", err);
            }
        }

        result
    }

    fn execute(&self, plan: &RenamePlan) -> Result<RenameSummary> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| RenameError::Other(format!("Failed to start worker pool: {}", e)))?;

        let tracker = Mutex::new(ProgressTracker {
            processed: 0,
            total: plan.len(),
            sender: self.progress.clone(),
        });

        let batches: Vec<&[PlanItem]> = plan.items().chunks(self.batch_size).collect();
        let batch_count = batches.len();

        for (index, batch) in batches.into_iter().enumerate() {
            log::debug!(
                "Batch {}/{}: {} rename(s)",
                index + 1,
                batch_count,
                batch.len()
            );

            let outcome: std::result::Result<(), (PathBuf, std::io::Error)> = pool.install(|| {
                batch.par_iter().try_for_each(|item| {
                    self.fs
                        .rename(&item.source, &item.destination())
                        .map_err(|e| (item.source.clone(), e))?;

                    tracker
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner())
                        .record(&item.proposed_name);
                    Ok(())
                })
            });

            if let Err((path, source)) = outcome {
                let renamed = processed(&tracker);
                return Err(RenameError::RenameFailed {
                    path,
                    source,
                    renamed,
                });
            }

            if index + 1 < batch_count {
                std::thread::sleep(BATCH_PAUSE);
            }
        }

        Ok(RenameSummary {
            renamed: processed(&tracker),
            batches: batch_count,
        })
    }
}

fn processed(tracker: &Mutex<ProgressTracker>) -> usize {
    tracker
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .processed
}

fn transition(state: &mut RenameState, next: RenameState) {
    log::debug!("Rename state: {:?} -> {:?}", state, next);
    *state = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::backend::memory::MemoryFs;

    use std::fs;
    use std::path::Path;
    use std::sync::atomic::Ordering;

    fn numbered_plan(count: usize) -> (Vec<PathBuf>, RenamePlan) {
        let sources: Vec<PathBuf> = (1..=count)
            .map(|i| PathBuf::from(format!("/media/IMG_{}.jpg", i)))
            .collect();
        let items = sources
            .iter()
            .enumerate()
            .map(|(i, s)| PlanItem::new(s.clone(), format!("{:03}.jpg", i + 1)))
            .collect();
        (sources, RenamePlan::new(items))
    }

    #[test]
    fn test_empty_plan_fails_without_io() {
        let fs = MemoryFs::default();
        let err = BatchRenamer::with_fs(&fs, 1)
            .run(&RenamePlan::default())
            .unwrap_err();
        assert!(matches!(err, RenameError::EmptyList));
        assert_eq!(fs.io_calls(), 0);
    }

    #[test]
    fn test_collision_gate_blocks_all_renames() {
        let (sources, plan) = numbered_plan(3);
        let mut files: Vec<PathBuf> = sources.clone();
        files.push(PathBuf::from("/media/002.jpg"));

        let fs = MemoryFs::with_files(files);
        let mut r = BatchRenamer::with_fs(&fs, 2);
        let rx = r.subscribe();
        let err = r.run(&plan).unwrap_err();

        assert!(matches!(err, RenameError::DestinationExists { ref names } if names == &["002.jpg"]));
        assert_eq!(fs.renames.load(Ordering::SeqCst), 0);
        drop(r);
        assert_eq!(rx.iter().count(), 0);
    }

    #[test]
    fn test_duplicate_names_block_execution() {
        let plan = RenamePlan::new(vec![
            PlanItem::new("/m/a.jpg", "x.jpg"),
            PlanItem::new("/n/b.jpg", "x.jpg"),
        ]);
        let fs = MemoryFs::with_files(["/m/a.jpg", "/n/b.jpg"]);
        let err = BatchRenamer::with_fs(&fs, 1).run(&plan).unwrap_err();
        assert!(matches!(err, RenameError::DuplicateNames { .. }));
        assert!(fs.contains("/m/a.jpg"));
        assert_eq!(fs.renames.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_completes_and_reports_progress() {
        let (sources, plan) = numbered_plan(120);
        let fs = MemoryFs::with_files(sources.clone());
        let mut r = BatchRenamer::with_fs(&fs, 4);
        let rx = r.subscribe();

        let summary = r.run(&plan).unwrap();
        assert_eq!(summary, RenameSummary { renamed: 120, batches: 3 });

        r.unsubscribe();
        let events: Vec<ProgressEvent> = rx.iter().collect();
        assert_eq!(events.len(), 120);
        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.processed, i + 1);
            assert_eq!(event.total, 120);
        }
        assert_eq!(events.last().map(|e| e.percentage), Some(100));

        assert!(fs.contains("/media/120.jpg"));
        assert!(!fs.contains(&sources[0]));
    }

    #[test]
    fn test_abort_on_first_failure() {
        let (sources, plan) = numbered_plan(120);
        let fs = MemoryFs::with_files(sources.clone()).failing_on(sources[72].clone());
        let mut r = BatchRenamer::with_fs(&fs, 1);
        let rx = r.subscribe();

        let err = r.run(&plan).unwrap_err();
        match &err {
            RenameError::RenameFailed { path, renamed, .. } => {
                assert_eq!(path, &sources[72]);
                assert_eq!(*renamed, 72);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(err.is_partial());

        r.unsubscribe();
        let events: Vec<ProgressEvent> = rx.iter().collect();
        assert_eq!(events.len(), 72);
        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.processed, i + 1);
            assert_eq!(event.current_file, format!("{:03}.jpg", i + 1));
        }

        for (i, source) in sources.iter().enumerate() {
            let target = format!("/media/{:03}.jpg", i + 1);
            if i < 72 {
                assert!(fs.contains(&target), "file {} should be renamed", i + 1);
            } else {
                assert!(fs.contains(source), "file {} should be untouched", i + 1);
                assert!(!fs.contains(&target));
            }
        }
    }

    #[test]
    fn test_parallel_abort_skips_later_batches() {
        let (sources, plan) = numbered_plan(120);
        let fs = MemoryFs::with_files(sources.clone()).failing_on(sources[72].clone());

        let err = BatchRenamer::with_fs(&fs, 8).run(&plan).unwrap_err();
        let renamed = match err {
            RenameError::RenameFailed { renamed, .. } => renamed,
            other => panic!("unexpected: {:?}", other),
        };
        assert!((50..100).contains(&renamed));

        // 第三批从未开始
        for source in &sources[100..] {
            assert!(fs.contains(source));
        }
        assert!(fs.contains(&sources[72]));
    }

    #[test]
    fn test_renames_on_disk() {
        let dir = std::env::temp_dir().join(format!("multi-rename-runner-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let names = ["b.png", "a.png", "keep.png"];
        for name in names {
            fs::write(dir.join(name), name).unwrap();
        }
        let plan = RenamePlan::new(vec![
            PlanItem::new(dir.join("b.png"), "001.png"),
            PlanItem::new(dir.join("a.png"), "002.png"),
            PlanItem::new(dir.join("keep.png"), "keep.png"),
        ]);

        let summary = BatchRenamer::new(2).run(&plan).unwrap();
        assert_eq!(summary.renamed, 3);
        assert_eq!(fs::read_to_string(dir.join("001.png")).unwrap(), "b.png");
        assert_eq!(fs::read_to_string(dir.join("002.png")).unwrap(), "a.png");
        assert!(Path::new(&dir.join("keep.png")).exists());
        assert!(!dir.join("b.png").exists());

        fs::remove_dir_all(&dir).ok();
    }
}
