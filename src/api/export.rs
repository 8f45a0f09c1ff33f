// ==========================================
// AirVonment 空气质量决策支持 - 导出
// ==========================================
// 职责: 预报序列导出 CSV,推荐/热点导出 JSON
// 约定: 表头按当前语言翻译; 行顺序与输入一致
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::forecast::ForecastSeries;
use crate::domain::hotspot::Hotspot;
use crate::domain::recommendation::Recommendation;
use crate::domain::types::ForecastRange;
use crate::i18n::t;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// CSV 表头键（按顺序）
pub const FORECAST_CSV_HEADER_KEYS: [&str; 7] = [
    "export.time",
    "export.date",
    "export.aqi",
    "export.temperature",
    "export.humidity",
    "export.wind_speed",
    "export.visibility",
];

/// 默认导出文件名: aqi-forecast-{range}-{YYYY-MM-DD}.csv
pub fn default_forecast_filename(range: ForecastRange, at: DateTime<Utc>) -> String {
    format!("aqi-forecast-{}-{}.csv", range.as_key(), at.format("%Y-%m-%d"))
}

/// 导出预报序列为 CSV
///
/// # 返回
/// - 写出的数据行数（不含表头）
pub fn export_forecast_csv<W: Write>(series: &ForecastSeries, writer: W) -> ApiResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let header: Vec<String> = FORECAST_CSV_HEADER_KEYS.iter().map(|k| t(k)).collect();
    csv_writer.write_record(&header)?;

    for sample in &series.samples {
        csv_writer.write_record(&[
            sample.timestamp.format("%H:%M").to_string(),
            sample.timestamp.format("%d %b").to_string(),
            sample.aqi.to_string(),
            sample.temperature_c.to_string(),
            sample.humidity_pct.to_string(),
            sample.wind_speed_kmh.to_string(),
            sample.visibility_km.to_string(),
        ])?;
    }
    csv_writer.flush()?;

    debug!(rows = series.len(), range = %series.range.as_key(), "预报 CSV 已导出");
    Ok(series.len())
}

fn export_json<W: Write, T: Serialize + ?Sized>(items: &T, mut writer: W) -> ApiResult<()> {
    serde_json::to_writer_pretty(&mut writer, items)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// 导出推荐列表为 JSON 数组
pub fn export_recommendations_json<W: Write>(
    records: &[&Recommendation],
    writer: W,
) -> ApiResult<usize> {
    export_json(records, writer)?;
    debug!(count = records.len(), "推荐 JSON 已导出");
    Ok(records.len())
}

/// 导出热点列表为 JSON 数组
pub fn export_hotspots_json<W: Write>(hotspots: &[&Hotspot], writer: W) -> ApiResult<usize> {
    export_json(hotspots, writer)?;
    debug!(count = hotspots.len(), "热点 JSON 已导出");
    Ok(hotspots.len())
}
