//! # 日志初始化
//!
//! 使用 `env_logger`；`RUST_LOG` 优先，否则由 `-v` 次数决定级别。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use log::LevelFilter;

/// 由 `-v` 次数得到日志级别
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// 初始化全局日志
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity));
    builder.parse_default_env();
    builder.format_timestamp(None);
    // 重复初始化（如测试中）时忽略
    builder.try_init().ok();
}
