//! # 用户设置
//!
//! 键值设置存储，以 JSON 文件持久化。唯一使用的键为 `renameTool`，
//! 保存 `{ mode, startNumber, template }`。
//!
//! 启动时加载一次为 `RenameSettings`，由调用方显式传递，
//! 命名模式或参数变化时写回。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/` 使用
//! - 使用 `serde_json` 序列化，`dirs` 定位配置目录

use crate::error::{RenameError, Result};
use crate::models::{parse_start_number, RenameMode, TemplateParameters, DEFAULT_TEMPLATE};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// 设置键
pub const SETTINGS_KEY: &str = "renameTool";

/// 键值设置存储
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// 基于 JSON 文件的设置存储
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonSettingsStore {
    /// 打开设置文件；不存在或无法解析时从空设置开始
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Map<String, Value>>(&content) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                    Map::new()
                }
            },
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Cannot read settings {}: {}", path.display(), e);
                }
                Map::new()
            }
        };

        Self { path, values }
    }

    /// 默认设置文件位置
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("multi-rename").join("config.json"),
            None => PathBuf::from(".").join("multi-rename.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| RenameError::FileWriteError {
                    path: parent.display().to_string(),
                    source: e,
                })?;
            }
        }

        let content =
            serde_json::to_string_pretty(&self.values).map_err(|e| RenameError::SettingsError {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| RenameError::FileWriteError {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

impl SettingsStore for JsonSettingsStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.save()
    }
}

/// 持久化的命名设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenameSettings {
    pub mode: RenameMode,
    #[serde(deserialize_with = "lenient_start_number")]
    pub start_number: u32,
    pub template: String,
}

impl Default for RenameSettings {
    fn default() -> Self {
        Self {
            mode: RenameMode::default(),
            start_number: 1,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl RenameSettings {
    /// 从存储加载；缺失或格式错误时使用默认值
    pub fn load(store: &dyn SettingsStore) -> Self {
        let Some(value) = store.get(SETTINGS_KEY) else {
            return Self::default();
        };

        match serde_json::from_value::<RenameSettings>(value) {
            Ok(mut settings) => {
                if settings.template.is_empty() {
                    settings.template = DEFAULT_TEMPLATE.to_string();
                }
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed '{}' settings: {}", SETTINGS_KEY, e);
                Self::default()
            }
        }
    }

    /// 写回存储
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<()> {
        let value = serde_json::to_value(self).map_err(|e| RenameError::SettingsError {
            path: SETTINGS_KEY.to_string(),
            reason: e.to_string(),
        })?;
        store.set(SETTINGS_KEY, value)
    }

    /// 转换为命名参数
    pub fn parameters(&self, source_folder_name: Option<String>) -> TemplateParameters {
        TemplateParameters::default()
            .with_template(self.template.clone())
            .with_start_number(i64::from(self.start_number))
            .with_source_folder(source_folder_name)
    }
}

/// 起始序号按用户输入的规则解析：负数、小数、字符串等都不会使整个设置失效
fn lenient_start_number<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::String(text) => parse_start_number(text),
        other => parse_start_number(&other.to_string()),
    })
}
