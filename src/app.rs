use eframe::egui;

use crate::state::figure::{FigureState, FIGURE_COLS, FIGURE_ROWS};
use crate::ui::chart_panel;

const CELL_SPACING: f32 = 12.0;

/// Displays one prebuilt figure; nothing is edited after startup.
pub struct SensorPlotApp {
    pub figure: FigureState,
}

impl SensorPlotApp {
    pub fn new(cc: &eframe::CreationContext<'_>, figure: FigureState) -> Self {
        Self::configure_style(&cc.egui_ctx);
        Self { figure }
    }

    fn configure_style(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(14.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::proportional(12.0),
        );
        style.spacing.item_spacing = egui::vec2(CELL_SPACING, CELL_SPACING);

        ctx.set_style(style);
        // White figure background, like a printed chart.
        ctx.set_visuals(egui::Visuals::light());
    }

    /// Cell size for one chart so the grid fills the panel without overlap.
    fn cell_size(available: egui::Vec2) -> egui::Vec2 {
        let cols = FIGURE_COLS as f32;
        let rows = FIGURE_ROWS as f32;
        egui::vec2(
            ((available.x - CELL_SPACING * (cols - 1.0)) / cols).max(0.0),
            ((available.y - CELL_SPACING * (rows - 1.0)) / rows).max(0.0),
        )
    }

    /// Lay the six charts out row by row so the grid exactly fills `ui`.
    fn show_figure(figure: &FigureState, ui: &mut egui::Ui) {
        let cell = Self::cell_size(ui.available_size());
        for row in 0..FIGURE_ROWS {
            ui.horizontal(|ui| {
                for col in 0..FIGURE_COLS {
                    if let Some(chart) = figure.chart_at(row, col) {
                        chart_panel::show_chart_panel(chart, ui, cell);
                    }
                }
            });
        }
    }
}

impl eframe::App for SensorPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Self::show_figure(&self.figure, ui);
        });
    }
}
