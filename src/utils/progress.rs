//! # 进度条工具
//!
//! 封装 `indicatif`，将重命名进度事件渲染为进度条。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `indicatif` crate

use crate::models::ProgressEvent;

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::mpsc::Receiver;

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// 消费进度事件直到发送端关闭，返回收到的最后一个事件
pub fn render_events(pb: &ProgressBar, events: Receiver<ProgressEvent>) -> Option<ProgressEvent> {
    let mut last = None;
    for event in events {
        pb.set_length(event.total as u64);
        pb.set_position(event.processed as u64);
        pb.set_message(event.current_file.clone());
        log::trace!("{}% {}", event.percentage, event.current_file);
        last = Some(event);
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_render_events_tracks_last_event() {
        let (tx, rx) = mpsc::channel();
        for i in 1..=3 {
            tx.send(ProgressEvent::new(i, 3, format!("{:03}.jpg", i))).unwrap();
        }
        drop(tx);

        let pb = ProgressBar::hidden();
        let last = render_events(&pb, rx).unwrap();
        assert_eq!(last.processed, 3);
        assert_eq!(pb.position(), 3);
        assert_eq!(pb.length(), Some(3));
    }
}
