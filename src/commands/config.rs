//! # config 子命令实现
//!
//! 查看、修改、重置保存的命名设置。
//!
//! ## 依赖关系
//! - 使用 `cli/config.rs` 定义的参数
//! - 使用 `settings.rs`

use super::common;
use crate::cli::config::{ConfigArgs, ConfigCommands};
use crate::error::Result;
use crate::settings::{JsonSettingsStore, RenameSettings};
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct SettingRow {
    #[tabled(rename = "Setting")]
    key: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 config 子命令
pub fn execute(args: ConfigArgs, store: &mut JsonSettingsStore) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            output::print_header("Saved Settings");
            show(&RenameSettings::load(&*store));
            output::print_info(&format!("Stored in '{}'", store.path().display()));
        }
        ConfigCommands::Set(naming) => {
            let mut settings = RenameSettings::load(&*store);
            if common::apply_naming(&mut settings, &naming) {
                settings.save(store)?;
                output::print_success(&format!(
                    "Settings saved to '{}'",
                    store.path().display()
                ));
            } else {
                output::print_info("Nothing changed");
            }
            show(&settings);
        }
        ConfigCommands::Reset => {
            let settings = RenameSettings::default();
            settings.save(store)?;
            output::print_success("Settings restored to defaults");
            show(&settings);
        }
    }
    Ok(())
}

fn show(settings: &RenameSettings) {
    let rows = vec![
        SettingRow {
            key: "mode",
            value: settings.mode.to_string(),
        },
        SettingRow {
            key: "startNumber",
            value: settings.start_number.to_string(),
        },
        SettingRow {
            key: "template",
            value: settings.template.clone(),
        },
    ];
    println!("{}", Table::new(rows));
}
