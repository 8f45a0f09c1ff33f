// ==========================================
// AirVonment 空气质量决策支持 - AQI 预报领域模型
// ==========================================
// 职责: 逐小时预报样本与预报序列
// 红线: 序列整体替换,不做增量修改
// ==========================================

use crate::domain::types::{AqiCategory, ForecastRange, Pollutant};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ForecastSample - 逐小时预报样本
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub hour_offset: u32,          // 相对"现在"的小时偏移
    pub timestamp: DateTime<Utc>,  // 样本时间
    pub aqi: i32,                  // AQI (惯例 0-500, 不截断)
    pub temperature_c: i32,        // 温度
    pub humidity_pct: i32,         // 湿度
    pub wind_speed_kmh: i32,       // 风速
    pub visibility_km: i32,        // 能见度
    #[serde(default)]
    pub pollutants: Vec<Pollutant>, // 主要污染物 (由 AQI 推导)
}

impl ForecastSample {
    /// 创建样本,污染物列表按 AQI 推导
    pub fn new(
        base: DateTime<Utc>,
        hour_offset: u32,
        aqi: i32,
        temperature_c: i32,
        humidity_pct: i32,
        wind_speed_kmh: i32,
        visibility_km: i32,
    ) -> Self {
        Self {
            hour_offset,
            timestamp: base + Duration::hours(hour_offset as i64),
            aqi,
            temperature_c,
            humidity_pct,
            wind_speed_kmh,
            visibility_km,
            pollutants: derive_pollutants(aqi),
        }
    }

    pub fn category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.aqi)
    }
}

/// 由 AQI 推导主要污染物
///
/// # 规则
/// - AQI > 100: PM2.5 / PM10 / NO2
/// - AQI > 50: PM2.5 / PM10
/// - 其余: PM2.5
pub fn derive_pollutants(aqi: i32) -> Vec<Pollutant> {
    if aqi > 100 {
        vec![Pollutant::Pm25, Pollutant::Pm10, Pollutant::No2]
    } else if aqi > 50 {
        vec![Pollutant::Pm25, Pollutant::Pm10]
    } else {
        vec![Pollutant::Pm25]
    }
}

// ==========================================
// ForecastSeries - 预报序列
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub range: ForecastRange,
    pub generated_at: DateTime<Utc>,
    pub samples: Vec<ForecastSample>,
}

impl ForecastSeries {
    /// 构造序列,样本按 hour_offset 排序
    pub fn new(
        range: ForecastRange,
        generated_at: DateTime<Utc>,
        mut samples: Vec<ForecastSample>,
    ) -> Self {
        samples.sort_by_key(|s| s.hour_offset);
        Self {
            range,
            generated_at,
            samples,
        }
    }

    /// AQI 序列（供统计引擎使用）
    pub fn aqi_values(&self) -> Vec<i32> {
        self.samples.iter().map(|s| s.aqi).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 样本数是否覆盖所选时间范围
    pub fn covers_range(&self) -> bool {
        self.samples.len() >= self.range.hours()
    }
}
