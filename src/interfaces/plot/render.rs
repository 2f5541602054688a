use super::chart::PerformanceChart;
use crate::domain::errors::{PerformanceError, Result};
use serde::{Deserialize, Serialize};

/// Presentation options handed to a renderer.
///
/// These never change computed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub width: f32,
    pub height: f32,
    pub show_legend: bool,
    pub show_grid: bool,
    pub allow_zoom: bool,
    pub allow_drag: bool,
    pub allow_scroll: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            show_legend: true,
            show_grid: true,
            allow_zoom: false,
            allow_drag: false,
            allow_scroll: false,
        }
    }
}

/// Something that can display a finished chart.
pub trait ChartRenderer {
    fn render(&self, chart: &PerformanceChart, display: &DisplayConfig) -> Result<()>;
}

/// Renderer used when no display backend is compiled in.
pub struct UnavailableRenderer;

impl ChartRenderer for UnavailableRenderer {
    fn render(&self, _chart: &PerformanceChart, _display: &DisplayConfig) -> Result<()> {
        Err(PerformanceError::Render {
            reason: "ui feature is not enabled".to_string(),
        })
    }
}

#[cfg(feature = "ui")]
pub fn default_renderer() -> Box<dyn ChartRenderer> {
    Box::new(crate::interfaces::ui::EguiChartRenderer)
}

#[cfg(not(feature = "ui"))]
pub fn default_renderer() -> Box<dyn ChartRenderer> {
    Box::new(UnavailableRenderer)
}
