mod config;
mod error;
mod data;
mod state;
mod ui;
mod app;

use anyhow::Context;
use app::SensorPlotApp;
use config::{ViewerConfig, WINDOW_HEIGHT, WINDOW_WIDTH};
use data::loader;
use eframe::egui;
use eframe::egui_wgpu;
use state::figure::FigureState;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    ExitCode::from(exit_status(&run()))
}

/// Errors are reported once, through the log, and mapped to the exit status.
fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{e:#}");
            1
        }
    }
}

fn run() -> anyhow::Result<()> {
    let figure = build_figure()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&figure.title)
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([600.0, 400.0]),
        wgpu_options: egui_wgpu::WgpuConfiguration {
            present_mode: eframe::wgpu::PresentMode::AutoVsync,
            wgpu_setup: egui_wgpu::WgpuSetup::CreateNew(egui_wgpu::WgpuSetupCreateNew {
                instance_descriptor: eframe::wgpu::InstanceDescriptor {
                    backends: eframe::wgpu::Backends::DX12
                        | eframe::wgpu::Backends::VULKAN
                        | eframe::wgpu::Backends::METAL
                        | eframe::wgpu::Backends::GL,
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        },
        ..Default::default()
    };

    let title = figure.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(SensorPlotApp::new(cc, figure)))),
    )
    .map_err(|e| anyhow::anyhow!("display failed: {e}"))
}

/// Load the configured log and derive the six charts. Any failure here is
/// fatal and happens before a window is created.
fn build_figure() -> anyhow::Result<FigureState> {
    let config = ViewerConfig::from_constants()?;
    let log = loader::load_sensor_log(&config.input_path)
        .with_context(|| format!("failed to load sensor log '{}'", config.input_path.display()))?;
    let figure = FigureState::build(&log, &config)?;
    tracing::info!(
        "Built {} charts against '{}'",
        figure.charts.len(),
        config.x_axis_label()
    );
    tracing::debug!("Chart titles: {:?}", figure.titles());
    Ok(figure)
}
