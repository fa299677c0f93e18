//! # 文件系统接口
//!
//! 冲突检测与批量重命名只通过 `FileSystem` 访问磁盘，便于在测试中替换。
//!
//! ## 依赖关系
//! - 被 `batch/collision.rs`, `batch/runner.rs` 使用

use std::fs;
use std::io;
use std::path::Path;

/// 重命名引擎所需的文件系统操作
pub trait FileSystem: Sync {
    /// 路径是否存在
    fn exists(&self, path: &Path) -> bool;

    /// 重命名（同目录内移动）
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// 本地磁盘
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        // 悬空符号链接也视为已占用
        path.symlink_metadata().is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }
}
