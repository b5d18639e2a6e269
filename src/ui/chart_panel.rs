use eframe::egui;
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::chart::ChartState;

const LINE_WIDTH: f32 = 1.5;
const MARKER_RADIUS: f32 = 3.0;

/// Render a single channel chart: title row above a gridded line plot.
/// `size` is the full cell allotted to this chart, title included.
pub fn show_chart_panel(chart: &ChartState, ui: &mut egui::Ui, size: egui::Vec2) {
    ui.allocate_ui(size, |ui| {
        ui.vertical(|ui| {
            ui.set_width(size.x);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(&chart.title).strong().size(16.0));
            });

            let color = chart.color32();
            // Whatever the title row and its spacing left over.
            let plot_height = ui.available_height().max(0.0);

            Plot::new(("chart", chart.grid_row, chart.grid_col))
                .width(size.x)
                .height(plot_height)
                .show_grid(true)
                .x_axis_label(chart.x_label.clone())
                .y_axis_label(chart.y_label.clone())
                .show(ui, |plot_ui| {
                    let line = Line::new(PlotPoints::new(chart.points.clone()))
                        .color(color)
                        .width(LINE_WIDTH);
                    plot_ui.line(line);

                    let markers = Points::new(PlotPoints::new(chart.points.clone()))
                        .shape(MarkerShape::Circle)
                        .radius(MARKER_RADIUS)
                        .filled(true)
                        .color(color);
                    plot_ui.points(markers);
                });
        });
    });
}
