//! Model performance report
//!
//! Fits one performance result per evaluation CSV (`y,y_hat[,residuals]`),
//! prints the measures as JSON lines and optionally the residual chart.
//!
//! # Usage
//! ```sh
//! cargo run --bin model_performance -- --input lm.csv --input rf.csv --model-type regression --show
//! ```
//!
//! # Environment Variables
//! - `MODEL_PERFORMANCE_TYPE` - Default model type
//! - `MODEL_PERFORMANCE_CUTOFF` - Classification cutoff (default: 0.5)
//! - `MODEL_PERFORMANCE_TITLE` - Chart title
//! - `MODEL_PERFORMANCE_SHOW` - Show the chart window (default: false)

use anyhow::{Context, Result};
use clap::Parser;
use modelperf::config::PerformanceEnvConfig;
use modelperf::domain::performance::{PerformanceResult, ResidualSource};
use modelperf::infrastructure::csv_source::load_explainer;
use serde_json::json;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Evaluation CSV with `y`, `y_hat` and optional `residuals` columns (repeatable)
    #[arg(long, required = true)]
    input: Vec<PathBuf>,

    /// Label per input, in order. Defaults to the file stem.
    #[arg(long)]
    label: Vec<String>,

    /// `regression` or `classification`
    #[arg(long)]
    model_type: Option<String>,

    /// Classification cutoff in (0, 1)
    #[arg(long)]
    cutoff: Option<f64>,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Open the chart in a window
    #[arg(long)]
    show: bool,

    /// Print the chart as JSON
    #[arg(long)]
    chart_json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the report, logs go to stderr
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();
    let env_config = PerformanceEnvConfig::from_env()?;

    let model_type = args
        .model_type
        .clone()
        .or_else(|| env_config.model_type.clone())
        .context("No model type given (use --model-type or MODEL_PERFORMANCE_TYPE)")?;
    let cutoff = args.cutoff.unwrap_or(env_config.cutoff);

    info!("Model performance {} starting...", env!("CARGO_PKG_VERSION"));

    let mut results = Vec::with_capacity(args.input.len());
    for (i, path) in args.input.iter().enumerate() {
        let explainer = load_explainer(path, args.label.get(i).map(String::as_str))
            .with_context(|| format!("Failed to load {:?}", path))?;

        let mut result = PerformanceResult::from_config(&model_type, cutoff)?;
        result
            .fit(&explainer)
            .with_context(|| format!("Failed to fit {:?}", path))?;

        println!(
            "{}",
            json!({
                "label": result.label(),
                "model_type": result.model_type(),
                "cutoff": result.cutoff(),
                "metrics": result.metrics_table(),
                "confusion": result.confusion(),
            })
        );
        results.push(result);
    }

    if !(args.show || args.chart_json || env_config.show) {
        return Ok(());
    }

    let mut plot_config = env_config.plot_config();
    if let Some(title) = args.title {
        plot_config.title = title;
    }
    plot_config.show = args.show || env_config.show;

    let (primary, peers) = results
        .split_first()
        .context("No results to plot")?;
    let peers: Vec<&dyn ResidualSource> = peers.iter().map(|r| r as &dyn ResidualSource).collect();

    if args.chart_json {
        let chart = modelperf::interfaces::plot::PerformancePlotter::new(plot_config.clone())
            .build(primary, &peers)?;
        println!("{}", chart.to_json()?);
    }
    if plot_config.show {
        primary.plot(&peers, plot_config)?;
    }

    Ok(())
}
