// ==========================================
// AirVonment 空气质量决策支持 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、快照
// 存储: JSON 配置文件（所有字段可缺省）
// 查找顺序: $AIRVONMENT_CONFIG → {config_dir}/airvonment/config.json → 内置默认值
// ==========================================

use crate::config::config_reader::{DashboardConfigReader, LoadKind};
use crate::domain::types::{DashboardMode, ForecastRange};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "AIRVONMENT_CONFIG";

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误 ({path}): {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置值非法 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    #[error("配置序列化失败: {0}")]
    SerializeError(#[from] serde_json::Error),
}

// ==========================================
// SimulatedLatency - 模拟加载延迟（毫秒）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedLatency {
    #[serde(default = "default_recommendations_ms")]
    pub recommendations_ms: u64,
    #[serde(default = "default_forecast_range_ms")]
    pub forecast_range_ms: u64,
    #[serde(default = "default_forecast_refresh_ms")]
    pub forecast_refresh_ms: u64,
}

fn default_recommendations_ms() -> u64 {
    1500
}
fn default_forecast_range_ms() -> u64 {
    1000
}
fn default_forecast_refresh_ms() -> u64 {
    800
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            recommendations_ms: default_recommendations_ms(),
            forecast_range_ms: default_forecast_range_ms(),
            forecast_refresh_ms: default_forecast_refresh_ms(),
        }
    }
}

impl SimulatedLatency {
    /// 全部为零（测试用）
    pub fn zero() -> Self {
        Self {
            recommendations_ms: 0,
            forecast_range_ms: 0,
            forecast_refresh_ms: 0,
        }
    }

    pub fn for_kind(&self, kind: LoadKind) -> Duration {
        let ms = match kind {
            LoadKind::Recommendations => self.recommendations_ms,
            LoadKind::ForecastRange => self.forecast_range_ms,
            LoadKind::ForecastRefresh => self.forecast_refresh_ms,
        };
        Duration::from_millis(ms)
    }
}

// ==========================================
// DashboardConfig - 驾驶舱配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub default_mode: DashboardMode,
    #[serde(default)]
    pub default_forecast_range: ForecastRange,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub latency: SimulatedLatency,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_mode: DashboardMode::default(),
            default_forecast_range: ForecastRange::default(),
            locale: default_locale(),
            latency: SimulatedLatency::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl DashboardConfig {
    /// 校验配置值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !crate::i18n::SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "locale".to_string(),
                value: self.locale.clone(),
                message: format!("支持的语言: {:?}", crate::i18n::SUPPORTED_LOCALES),
            });
        }
        Ok(())
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: DashboardConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 从配置文件创建
    ///
    /// # 参数
    /// - path: 配置文件路径（必须存在）
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path_str.clone(),
            source,
        })?;
        let config: DashboardConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::ParseError {
                path: path_str.clone(),
                source,
            })?;
        config.validate()?;

        tracing::info!(path = %path_str, "配置已加载");
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 使用内置默认值
    pub fn from_config(config: DashboardConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 按查找顺序加载配置; 文件不存在时回退到默认值
    pub fn load_default() -> Result<Self, ConfigError> {
        match resolve_config_path() {
            Some(path) if path.exists() => Self::new(path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "配置文件不存在,使用默认配置");
                Ok(Self::from_config(DashboardConfig::default()))
            }
            None => Ok(Self::from_config(DashboardConfig::default())),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// 配置来源文件（默认配置时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 获取配置快照（JSON）
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}

/// 解析配置文件路径
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_PATH_ENV) {
        let p = p.trim();
        if !p.is_empty() {
            return Some(PathBuf::from(p));
        }
    }
    dirs::config_dir().map(|dir| dir.join("airvonment").join("config.json"))
}

#[async_trait]
impl DashboardConfigReader for ConfigManager {
    async fn get_default_mode(&self) -> Result<DashboardMode, ConfigError> {
        Ok(self.config.default_mode)
    }

    async fn get_default_forecast_range(&self) -> Result<ForecastRange, ConfigError> {
        Ok(self.config.default_forecast_range)
    }

    async fn get_locale(&self) -> Result<String, ConfigError> {
        Ok(self.config.locale.clone())
    }

    async fn get_simulated_latency(&self, kind: LoadKind) -> Result<Duration, ConfigError> {
        Ok(self.config.latency.for_kind(kind))
    }
}
