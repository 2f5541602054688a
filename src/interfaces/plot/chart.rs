use crate::domain::errors::{PerformanceError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Reverse cumulative distribution of |residual|";

/// Sequential palette assigned to traces in registration order.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#8bdcbe", "#f05a71", "#371ea3", "#46bac2", "#ae2c87", "#ffa58c", "#4378bf",
];

/// How consecutive points of a trace are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineShape {
    Linear,
    /// Horizontal then vertical: a right-continuous staircase.
    Hv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickFormat {
    Plain,
    Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub title: Option<String>,
    pub range: [f64; 2],
    /// Locked against zooming and panning.
    pub fixed_range: bool,
    pub tick_format: TickFormat,
}

impl AxisConfig {
    pub fn format_tick(&self, value: f64) -> String {
        match self.tick_format {
            TickFormat::Plain => format!("{}", value),
            TickFormat::Percent => format!("{:.0}%", value * 100.0),
        }
    }
}

/// One series of the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepTrace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub line_shape: LineShape,
    pub color: String,
}

impl StepTrace {
    /// Polyline vertices that draw this trace with its line shape.
    pub fn step_points(&self) -> Vec<[f64; 2]> {
        let points = self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y]);
        match self.line_shape {
            LineShape::Linear => points.collect(),
            LineShape::Hv => {
                let mut out: Vec<[f64; 2]> = Vec::with_capacity(self.x.len() * 2);
                for point in points {
                    if let Some(&[_, prev_y]) = out.last() {
                        out.push([point[0], prev_y]);
                    }
                    out.push(point);
                }
                out
            }
        }
    }
}

/// Editable chart produced by the plotter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceChart {
    pub title: String,
    pub traces: Vec<StepTrace>,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub font_color: String,
}

impl PerformanceChart {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn trace(&self, name: &str) -> Option<&StepTrace> {
        self.traces.iter().find(|t| t.name == name)
    }

    pub fn trace_names(&self) -> Vec<&str> {
        self.traces.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PerformanceError::Render {
            reason: format!("chart serialization failed: {}", e),
        })
    }
}
