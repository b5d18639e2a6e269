use std::path::PathBuf;
use crate::error::ChartError;

/// CSV file written by the datalogger, relative to the working directory.
/// Points at the bundled sample so `cargo run` works from the repo root.
pub const INPUT_FILE: &str = "demos/sensor_log1.csv";
/// 0 = sample number, 1 = time in seconds.
pub const X_AXIS_FLAG: u8 = 0;
/// X-axis label used when plotting against the sample index.
pub const SAMPLE_AXIS_LABEL: &str = "Sample number";
pub const TIME_AXIS_LABEL: &str = "Time (s)";
pub const Y_AXIS_LABEL: &str = "Amplitude";

pub const WINDOW_WIDTH: f32 = 1500.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

/// Which log column every chart uses as its X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSelection {
    SampleIndex,
    Time,
}

impl AxisSelection {
    pub fn from_flag(flag: u8) -> Result<Self, ChartError> {
        match flag {
            0 => Ok(AxisSelection::SampleIndex),
            1 => Ok(AxisSelection::Time),
            other => Err(ChartError::InvalidAxisFlag(other)),
        }
    }

    /// Column index in the sensor log.
    pub fn column(&self) -> usize {
        match self {
            AxisSelection::SampleIndex => 0,
            AxisSelection::Time => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub input_path: PathBuf,
    pub x_axis: AxisSelection,
    pub sample_axis_label: String,
}

impl ViewerConfig {
    pub fn new(input_path: impl Into<PathBuf>, x_axis: AxisSelection) -> Self {
        Self {
            input_path: input_path.into(),
            x_axis,
            sample_axis_label: SAMPLE_AXIS_LABEL.to_string(),
        }
    }

    pub fn from_constants() -> Result<Self, ChartError> {
        Ok(Self::new(INPUT_FILE, AxisSelection::from_flag(X_AXIS_FLAG)?))
    }

    /// X-axis label shared by all six charts.
    pub fn x_axis_label(&self) -> &str {
        match self.x_axis {
            AxisSelection::SampleIndex => &self.sample_axis_label,
            AxisSelection::Time => TIME_AXIS_LABEL,
        }
    }
}
