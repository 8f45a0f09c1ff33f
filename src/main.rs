// AirVonment dashboard engine command line.
//
// Usage:
//   airvonment recommendations <file.json> [key=value ...]
//   airvonment hotspots <file.json> [toggle ...]
//   airvonment stats <aqi> [aqi ...]
//   airvonment forecast <file.json> [--csv <dir>]
//
// Results are printed as pretty JSON on stdout; logs go to stderr.

use airvonment::api::{load_forecast, load_hotspots, load_recommendations, DashboardApi, DashboardDataset};
use airvonment::app::{DashboardSession, DashboardView, DeferredLoader};
use airvonment::config::{ConfigManager, DashboardConfigReader, LoadKind};
use airvonment::domain::{HotspotToggles, RecommendationFilterState};
use airvonment::{engine, i18n, logging};
use anyhow::{bail, Context};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const USAGE: &str = "usage: airvonment <recommendations|hotspots|stats|forecast> ...";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigManager::load_default().context("failed to load configuration")?;
    logging::init_with_filter(&config.config().log_filter);
    i18n::set_locale(&config.get_locale().await?);

    let mut args = std::env::args().skip(1);
    let command = args.next().context(USAGE)?;
    let rest: Vec<String> = args.collect();

    match command.as_str() {
        "recommendations" => run_recommendations(&rest),
        "hotspots" => run_hotspots(&rest),
        "stats" => run_stats(&rest),
        "forecast" => run_forecast(&rest, config).await,
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_recommendations(args: &[String]) -> anyhow::Result<()> {
    let (path, pairs) = args
        .split_first()
        .context("usage: airvonment recommendations <file.json> [key=value ...]")?;

    let mut state = RecommendationFilterState::default();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("expected key=value, got '{}'", pair))?;
        state = state.with(key.trim(), value.trim());
    }

    let records = load_recommendations(path)?;
    let dataset = DashboardDataset::new(records, Vec::new(), None, Utc::now())?;
    let api = DashboardApi::new(Arc::new(dataset));

    let filtered = api.filter_recommendations(&state);
    for note in &filtered.ignored {
        eprintln!("ignored: {}", note);
    }
    print_json(&filtered)
}

fn run_hotspots(args: &[String]) -> anyhow::Result<()> {
    let (path, keys) = args
        .split_first()
        .context("usage: airvonment hotspots <file.json> [toggle ...]")?;

    let now = Utc::now();
    let toggles = if keys.is_empty() {
        HotspotToggles::default()
    } else {
        HotspotToggles::from_pairs(keys.iter().map(|k| (k.as_str(), true)))
    };

    let hotspots = load_hotspots(path, now)?;
    let dataset = DashboardDataset::new(Vec::new(), hotspots, None, now)?;
    let api = DashboardApi::new(Arc::new(dataset));
    print_json(&api.filter_hotspots(&toggles, now))
}

fn run_stats(args: &[String]) -> anyhow::Result<()> {
    let values = args
        .iter()
        .map(|v| {
            v.parse::<i32>()
                .with_context(|| format!("not an integer AQI value: '{}'", v))
        })
        .collect::<anyhow::Result<Vec<i32>>>()?;
    print_json(&engine::compute_stats(&values)?)
}

async fn run_forecast(args: &[String], config: ConfigManager) -> anyhow::Result<()> {
    let path = args
        .first()
        .context("usage: airvonment forecast <file.json> [--csv <dir>]")?;
    let csv_dir = match args.get(1).map(String::as_str) {
        Some("--csv") => Some(PathBuf::from(
            args.get(2).context("--csv requires a directory")?,
        )),
        Some(other) => bail!("unexpected argument '{}'", other),
        None => None,
    };

    let series = load_forecast(path)?;
    let session = Arc::new(Mutex::new(DashboardSession::from_config(config.config())));
    let loader = DeferredLoader::new(session, Arc::new(config));

    let outcome = loader
        .load(DashboardView::Forecast, LoadKind::ForecastRefresh, move |_snapshot| {
            let dataset = DashboardDataset {
                forecast: Some(series),
                ..DashboardDataset::default()
            };
            Ok(DashboardApi::new(Arc::new(dataset)))
        })
        .await?;
    let api = outcome
        .into_value()
        .context("forecast refresh was superseded")?;

    print_json(&api.forecast_summary()?)?;

    if let Some(dir) = csv_dir {
        let written = api.export_forecast_csv(&dir, Utc::now())?;
        eprintln!("wrote {}", written.display());
    }
    Ok(())
}
