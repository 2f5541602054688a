use crate::domain::errors::{PerformanceError, Result};
use crate::interfaces::plot::{ChartRenderer, DisplayConfig, PerformanceChart};
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Opens a native window showing the chart until it is closed.
pub struct EguiChartRenderer;

impl ChartRenderer for EguiChartRenderer {
    fn render(&self, chart: &PerformanceChart, display: &DisplayConfig) -> Result<()> {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([display.width, display.height])
                .with_title(chart.title.clone()),
            ..Default::default()
        };

        let window = ChartWindow {
            chart: chart.clone(),
            display: display.clone(),
        };

        eframe::run_native(
            &chart.title,
            native_options,
            Box::new(|_cc| Ok(Box::new(window))),
        )
        .map_err(|e| PerformanceError::Render {
            reason: format!("Eframe error: {}", e),
        })
    }
}

struct ChartWindow {
    chart: PerformanceChart,
    display: DisplayConfig,
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                egui::RichText::new(&self.chart.title)
                    .size(18.0)
                    .strong()
                    .color(hex_color(&self.chart.font_color)),
            );
            ui.add_space(8.0);
            render_chart(ui, &self.chart, &self.display);
        });
    }
}

/// Draw the chart into an existing egui layout.
pub fn render_chart(ui: &mut egui::Ui, chart: &PerformanceChart, display: &DisplayConfig) {
    let y_axis = chart.y_axis.clone();
    let x_axis = chart.x_axis.clone();
    let x_label = x_axis.title.clone().unwrap_or_default();

    let mut plot = Plot::new("residual_distribution_plot")
        .show_grid([display.show_grid, display.show_grid])
        .allow_zoom(display.allow_zoom && !x_axis.fixed_range)
        .allow_drag(display.allow_drag && !x_axis.fixed_range)
        .allow_scroll(display.allow_scroll && !y_axis.fixed_range)
        .include_x(x_axis.range[0])
        .include_x(x_axis.range[1])
        .include_y(y_axis.range[0])
        .include_y(y_axis.range[1])
        .x_axis_label(x_label)
        .x_axis_formatter(move |mark, _range| x_axis.format_tick(mark.value))
        .y_axis_formatter(move |mark, _range| y_axis.format_tick(mark.value));
    if display.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for trace in &chart.traces {
            plot_ui.line(
                Line::new(trace.name.clone(), PlotPoints::from(trace.step_points()))
                    .color(hex_color(&trace.color))
                    .width(2.0),
            );
        }
    });
}

fn hex_color(hex: &str) -> egui::Color32 {
    egui::Color32::from_hex(hex).unwrap_or(egui::Color32::GRAY)
}
