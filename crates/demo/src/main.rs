// File: crates/demo/src/main.rs
// Summary: Renders a JSON chart config, optionally fed from a CSV file, to a PNG.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use stepline_core::{Chart, ChartOptions, Series, SeriesType};
use stepline_render_skia::SkiaHost;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stepline-demo", version, about = "Render a stepline chart to PNG")]
struct Cli {
    /// Chart options as JSON. Without one, the defaults are used.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// CSV file whose first column is x and every further numeric column a series.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Output PNG (default target/out/chart_<stem>.png).
    #[arg(short, long)]
    out: Option<PathBuf>,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 500)]
    height: u32,
    /// Curve applied to every CSV series.
    #[arg(long = "type", value_parser = parse_series_type)]
    series_type: Option<SeriesType>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            if used_alt {
                warn!(path = %path.display(), "extension swapped between .json/.jsn");
            }
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            ChartOptions::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ChartOptions::default(),
    };

    if let Some(path) = &cli.csv {
        let mut series = load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        if series.is_empty() {
            anyhow::bail!("no numeric columns in {}", path.display());
        }
        if let Some(kind) = cli.series_type {
            series = series.into_iter().map(|s| s.with_type(kind)).collect();
        }
        info!(series = series.len(), points = series[0].values.len(), "loaded CSV");
        options.data.extend(series);
    }

    let body = options.bindto.body.clone();
    let host = SkiaHost::default().with_target(&body, cli.width as f64, cli.height as f64);
    let chart = Chart::new(options, host)?;

    let input = cli.csv.as_deref().or(cli.config.as_deref());
    let out = cli.out.clone().unwrap_or_else(|| out_name(input));
    chart.host().save_png(&body, &out)?;
    info!(width = chart.width(), height = chart.height(), "wrote {}", out.display());
    Ok(())
}

fn parse_series_type(raw: &str) -> std::result::Result<SeriesType, String> {
    match raw.to_ascii_lowercase().as_str() {
        "line" => Ok(SeriesType::Line),
        "spline" => Ok(SeriesType::Spline),
        "step" => Ok(SeriesType::Step),
        other => Err(format!("unknown series type '{other}' (line, spline, step)")),
    }
}

/// Resolve path, trying the .json/.jsn swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", raw.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let alt = match p.extension()?.to_str()? {
        "json" => "jsn",
        "jsn" => "json",
        _ => return None,
    };
    Some(p.with_extension(alt))
}

/// target/out/chart_<stem>.png
fn out_name(input: Option<&Path>) -> PathBuf {
    let stem = input.and_then(|p| p.file_stem()).and_then(|s| s.to_str()).unwrap_or("");
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push("chart.png");
    } else {
        out.push(format!("chart_{stem}.png"));
    }
    out
}

/// One series per numeric column after the first; the first column is x.
/// Rows whose x does not parse are skipped, as are empty cells.
fn load_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    info!(?headers, "CSV headers");
    let mut columns: Vec<Vec<(f64, f64)>> = vec![Vec::new(); headers.len().saturating_sub(1)];

    for rec in rdr.records() {
        let rec = rec?;
        let Some(x) = rec.get(0).and_then(|s| s.parse::<f64>().ok()) else {
            continue;
        };
        for (col, values) in columns.iter_mut().enumerate() {
            if let Some(y) = rec.get(col + 1).and_then(|s| s.parse::<f64>().ok()) {
                values.push((x, y));
            }
        }
    }

    Ok(columns
        .into_iter()
        .zip(headers.iter().skip(1))
        .filter(|(values, _)| !values.is_empty())
        .map(|(values, title)| Series::new(values).with_title(title.as_str()))
        .collect())
}
