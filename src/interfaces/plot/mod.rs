//! Residual distribution charts.
//!
//! The plotter turns fitted results into a [`PerformanceChart`]; rendering
//! is delegated to a [`ChartRenderer`] so charts can be built headless.

pub mod chart;
pub mod plotter;
pub mod render;

pub use chart::{AxisConfig, DEFAULT_TITLE, LineShape, PerformanceChart, StepTrace, TickFormat};
pub use plotter::{PerformancePlotter, PlotConfig};
pub use render::{ChartRenderer, DisplayConfig, UnavailableRenderer, default_renderer};
