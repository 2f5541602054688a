use super::chart::{
    AxisConfig, DEFAULT_PALETTE, DEFAULT_TITLE, LineShape, PerformanceChart, StepTrace, TickFormat,
};
use super::render::{ChartRenderer, DisplayConfig, default_renderer};
use crate::domain::errors::{PerformanceError, Result};
use crate::domain::performance::{Ecdf, PerformanceResult, ResidualSource};
use tracing::{debug, info, warn};

const FONT_COLOR: &str = "#371ea3";

/// Caller-facing plot options.
///
/// `show = false` (the default) returns the chart for further editing;
/// `show = true` displays it and returns nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub title: String,
    pub show: bool,
    pub display: DisplayConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            show: false,
            display: DisplayConfig::default(),
        }
    }
}

/// Overlays the reverse ECDF of |residual| of several performance results.
pub struct PerformancePlotter {
    config: PlotConfig,
}

impl PerformancePlotter {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Build the overlay chart: `primary` first, then `peers` in order.
    ///
    /// Series positions count from 0 for `primary`. Any source without a
    /// non-empty residual table aborts the whole call.
    pub fn build(
        &self,
        primary: &dyn ResidualSource,
        peers: &[&dyn ResidualSource],
    ) -> Result<PerformanceChart> {
        let sources: Vec<&dyn ResidualSource> =
            std::iter::once(primary).chain(peers.iter().copied()).collect();

        let traces = sources
            .iter()
            .enumerate()
            .map(|(index, source)| reverse_ecdf_trace(index, *source))
            .collect::<Result<Vec<_>>>()?;

        let x_max = traces
            .iter()
            .filter_map(|t| t.x.last().copied())
            .fold(0.0_f64, f64::max);
        let x_max = if x_max > 0.0 { x_max } else { 1.0 };

        info!(series = traces.len(), "Residual distribution chart built");

        Ok(PerformanceChart {
            title: self.config.title.clone(),
            traces,
            x_axis: AxisConfig {
                title: Some("|residual|".to_string()),
                range: [0.0, x_max],
                fixed_range: true,
                tick_format: TickFormat::Plain,
            },
            y_axis: AxisConfig {
                title: None,
                range: [0.0, 1.0],
                fixed_range: true,
                tick_format: TickFormat::Percent,
            },
            font_color: FONT_COLOR.to_string(),
        })
    }

    /// Build the chart, then either return it or show it with the default renderer.
    pub fn plot(
        &self,
        primary: &dyn ResidualSource,
        peers: &[&dyn ResidualSource],
    ) -> Result<Option<PerformanceChart>> {
        let renderer = default_renderer();
        self.plot_with(primary, peers, renderer.as_ref())
    }

    pub fn plot_with(
        &self,
        primary: &dyn ResidualSource,
        peers: &[&dyn ResidualSource],
        renderer: &dyn ChartRenderer,
    ) -> Result<Option<PerformanceChart>> {
        let chart = self.build(primary, peers)?;
        if !self.config.show {
            return Ok(Some(chart));
        }
        renderer.render(&chart, &self.config.display)?;
        Ok(None)
    }
}

fn reverse_ecdf_trace(index: usize, source: &dyn ResidualSource) -> Result<StepTrace> {
    let table = source
        .residuals_table()
        .ok_or_else(|| PerformanceError::TypeMismatch {
            index,
            reason: "residuals table is missing (was fit called?)".to_string(),
        })?;
    let label = table.label().ok_or_else(|| PerformanceError::TypeMismatch {
        index,
        reason: "residuals table is empty".to_string(),
    })?;

    let ecdf = Ecdf::new(&table.abs_residuals())?;
    // non-finite residuals still count in the denominator but get no point
    let (x, dropped): (Vec<f64>, Vec<f64>) = ecdf
        .unique_values()
        .into_iter()
        .partition(|v| v.is_finite());
    if !dropped.is_empty() {
        warn!(label, "non-finite residuals left out of the plotted range");
    }
    let y = ecdf.reverse_many(&x);
    debug!(label, points = x.len(), "reverse ECDF computed");

    Ok(StepTrace {
        name: label.to_string(),
        x,
        y,
        line_shape: LineShape::Hv,
        color: DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()].to_string(),
    })
}

impl PerformanceResult {
    /// Plot this result's residual distribution alongside `peers`.
    pub fn plot(
        &self,
        peers: &[&dyn ResidualSource],
        config: PlotConfig,
    ) -> Result<Option<PerformanceChart>> {
        PerformancePlotter::new(config).plot(self, peers)
    }

    /// Single-peer form of [`PerformanceResult::plot`].
    pub fn plot_against(
        &self,
        peer: &dyn ResidualSource,
        config: PlotConfig,
    ) -> Result<Option<PerformanceChart>> {
        self.plot(&[peer], config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::explainer::PrecomputedExplainer;
    use crate::domain::performance::{ModelType, ResidualsTable};
    use std::cell::Cell;

    fn fitted(label: &str, y_hat: Vec<f64>) -> PerformanceResult {
        let y = vec![0.0; y_hat.len()];
        let mut result = PerformanceResult::new(ModelType::Regression);
        result
            .fit(&PrecomputedExplainer::new(label, y, y_hat))
            .unwrap();
        result
    }

    struct RecordingRenderer {
        calls: Cell<usize>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&self, _chart: &PerformanceChart, _display: &DisplayConfig) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_single_series_values() {
        let a = fitted("A", vec![0.0, 0.0, 0.0, 1.0]);

        let chart = a.plot(&[], PlotConfig::default()).unwrap().unwrap();

        assert_eq!(chart.traces.len(), 1);
        let trace = &chart.traces[0];
        assert_eq!(trace.name, "A");
        assert_eq!(trace.x, vec![0.0, 1.0]);
        assert_eq!(trace.y, vec![0.25, 0.0]);
        assert_eq!(trace.line_shape, LineShape::Hv);
        assert_eq!(chart.title, DEFAULT_TITLE);
        assert_eq!(chart.y_axis.range, [0.0, 1.0]);
        assert!(chart.x_axis.fixed_range && chart.y_axis.fixed_range);
    }

    #[test]
    fn test_two_series_in_call_order() {
        let a = fitted("A", vec![0.1, -0.2, 0.3]);
        let b = fitted("B", vec![1.0, 2.0, -3.0]);

        let ab = a.plot_against(&b, PlotConfig::default()).unwrap().unwrap();
        let ba = b.plot_against(&a, PlotConfig::default()).unwrap().unwrap();

        assert_eq!(ab.trace_names(), vec!["A", "B"]);
        assert_eq!(ba.trace_names(), vec!["B", "A"]);
        let (a_first, a_second) = (ab.trace("A").unwrap(), ba.trace("A").unwrap());
        assert_eq!(a_first.x, a_second.x);
        assert_eq!(a_first.y, a_second.y);
        assert_eq!(ab.x_axis.range, [0.0, 3.0]);
    }

    #[test]
    fn test_unfitted_peer_aborts_plot() {
        let a = fitted("A", vec![0.1, 0.2]);
        let b = fitted("B", vec![0.3]);
        let unfitted = PerformanceResult::new(ModelType::Regression);

        let err = a
            .plot(&[&b, &unfitted], PlotConfig::default())
            .unwrap_err();
        assert!(matches!(err, PerformanceError::TypeMismatch { index: 2, .. }));
    }

    #[test]
    fn test_empty_table_is_incompatible() {
        let a = fitted("A", vec![0.1]);
        let empty = ResidualsTable::default();

        let err = a.plot(&[&empty], PlotConfig::default()).unwrap_err();
        assert!(matches!(err, PerformanceError::TypeMismatch { index: 1, .. }));
    }

    #[test]
    fn test_show_renders_and_returns_nothing() {
        let a = fitted("A", vec![0.1, 0.2]);
        let renderer = RecordingRenderer {
            calls: Cell::new(0),
        };
        let plotter = PerformancePlotter::new(PlotConfig {
            show: true,
            ..PlotConfig::default()
        });

        let out = plotter.plot_with(&a, &[], &renderer).unwrap();
        assert!(out.is_none());
        assert_eq!(renderer.calls.get(), 1);
    }

    #[test]
    fn test_custom_title_and_palette_cycle() {
        let results: Vec<PerformanceResult> = (0..9)
            .map(|i| fitted(&format!("m{}", i), vec![i as f64]))
            .collect();
        let peers: Vec<&dyn ResidualSource> =
            results[1..].iter().map(|r| r as &dyn ResidualSource).collect();

        let chart = PerformancePlotter::new(PlotConfig {
            title: "Residuals".to_string(),
            ..PlotConfig::default()
        })
        .build(&results[0], &peers)
        .unwrap();

        assert_eq!(chart.title, "Residuals");
        assert_eq!(chart.traces.len(), 9);
        assert_eq!(chart.traces[7].color, chart.traces[0].color);
    }

    #[test]
    fn test_non_finite_residuals_keep_curve_non_increasing() {
        let a = fitted("A", vec![0.5, f64::NAN, 1.0, f64::INFINITY]);

        let chart = a.plot(&[], PlotConfig::default()).unwrap().unwrap();

        let trace = &chart.traces[0];
        assert_eq!(trace.x, vec![0.5, 1.0]);
        assert_eq!(trace.y, vec![0.75, 0.5]);
        assert!(trace.y.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(chart.x_axis.range, [0.0, 1.0]);
        let json: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
        assert_eq!(json["x_axis"]["range"], serde_json::json!([0.0, 1.0]));
    }
}
