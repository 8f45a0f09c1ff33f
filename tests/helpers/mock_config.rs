// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use airvonment::config::{ConfigError, DashboardConfigReader, LoadKind};
use airvonment::domain::types::{DashboardMode, ForecastRange};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub mode: DashboardMode,
    pub forecast_range: ForecastRange,
    pub locale: String,
    pub latencies: HashMap<LoadKind, Duration>,
}

impl MockConfig {
    /// 所有加载零延迟
    pub fn instant() -> Self {
        Self {
            mode: DashboardMode::Citizen,
            forecast_range: ForecastRange::H24,
            locale: "en".to_string(),
            latencies: HashMap::new(),
        }
    }

    /// 为某类加载设置延迟
    pub fn with_latency(mut self, kind: LoadKind, millis: u64) -> Self {
        self.latencies.insert(kind, Duration::from_millis(millis));
        self
    }
}

#[async_trait]
impl DashboardConfigReader for MockConfig {
    async fn get_default_mode(&self) -> Result<DashboardMode, ConfigError> {
        Ok(self.mode)
    }

    async fn get_default_forecast_range(&self) -> Result<ForecastRange, ConfigError> {
        Ok(self.forecast_range)
    }

    async fn get_locale(&self) -> Result<String, ConfigError> {
        Ok(self.locale.clone())
    }

    async fn get_simulated_latency(&self, kind: LoadKind) -> Result<Duration, ConfigError> {
        Ok(self.latencies.get(&kind).copied().unwrap_or(Duration::ZERO))
    }
}
