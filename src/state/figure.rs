use crate::config::{ViewerConfig, Y_AXIS_LABEL};
use crate::data::loader::{SensorLog, REQUIRED_COLUMNS};
use crate::error::ChartError;
use crate::state::chart::{color_for_index, ChartState};

pub const FIGURE_ROWS: usize = 2;
pub const FIGURE_COLS: usize = 3;
/// First channel column; columns 0 and 1 are the sample index and time.
pub const FIRST_CHANNEL_COLUMN: usize = 2;
pub const CHANNEL_COUNT: usize = FIGURE_ROWS * FIGURE_COLS;

/// The whole window: six channel charts laid out row-major in a 2x3 grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureState {
    pub title: String,
    pub charts: Vec<ChartState>,
}

impl FigureState {
    /// Build every chart from a loaded log.
    pub fn build(log: &SensorLog, config: &ViewerConfig) -> Result<Self, ChartError> {
        let missing = || ChartError::MissingColumns {
            found: log.column_count(),
            required: REQUIRED_COLUMNS,
        };
        let x_col = config.x_axis.column();
        let x_name = log.column_name(x_col).unwrap_or_default();
        let x_values = log.column(x_col).ok_or_else(missing)?;

        let charts = (0..CHANNEL_COUNT)
            .map(|index| {
                let y_col = FIRST_CHANNEL_COLUMN + index;
                let y_name = log.column_name(y_col).unwrap_or_default();
                let y_values = log.column(y_col).ok_or_else(missing)?;
                let points: Vec<[f64; 2]> = x_values
                    .iter()
                    .zip(y_values)
                    .map(|(&x, y)| [x, y])
                    .collect();

                let chart = ChartState {
                    title: format!("{y_name} x {x_name}"),
                    x_label: config.x_axis_label().to_string(),
                    y_label: Y_AXIS_LABEL.to_string(),
                    color: color_for_index(index),
                    grid_row: index / FIGURE_COLS,
                    grid_col: index % FIGURE_COLS,
                    points,
                };
                tracing::debug!(
                    "Chart '{}' at ({}, {}) with {} points",
                    chart.title,
                    chart.grid_row,
                    chart.grid_col,
                    chart.point_count()
                );
                Ok(chart)
            })
            .collect::<Result<Vec<_>, ChartError>>()?;

        let title = match config.input_path.file_name() {
            Some(name) => format!("Sensor Log - {}", name.to_string_lossy()),
            None => "Sensor Log".to_string(),
        };

        Ok(Self { title, charts })
    }

    pub fn chart_at(&self, row: usize, col: usize) -> Option<&ChartState> {
        self.charts
            .iter()
            .find(|c| c.grid_row == row && c.grid_col == col)
    }

    pub fn titles(&self) -> Vec<String> {
        self.charts.iter().map(|c| c.title.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisSelection;
    use crate::data::loader::read_sensor_log;

    fn letters_log(rows: usize) -> SensorLog {
        let mut csv = String::from("a,b,c,d,e,f,g,h\n");
        for i in 0..rows {
            let t = i as f64 * 0.1;
            csv.push_str(&format!("{i},{t},{},{},{},{},{},{}\n", i, i + 1, i + 2, i + 3, i + 4, i + 5));
        }
        read_sensor_log(csv.as_bytes()).unwrap()
    }

    #[test]
    fn six_charts_titled_against_sample_column() {
        let log = letters_log(4);
        let figure = FigureState::build(&log, &ViewerConfig::new("a.csv", AxisSelection::SampleIndex)).unwrap();
        assert_eq!(
            figure.titles(),
            vec!["c x a", "d x a", "e x a", "f x a", "g x a", "h x a"]
        );
        assert!(figure.charts.iter().all(|c| c.x_label == "Sample number"));
    }

    #[test]
    fn six_charts_titled_against_time_column() {
        let log = letters_log(4);
        let figure = FigureState::build(&log, &ViewerConfig::new("a.csv", AxisSelection::Time)).unwrap();
        assert_eq!(
            figure.titles(),
            vec!["c x b", "d x b", "e x b", "f x b", "g x b", "h x b"]
        );
        assert!(figure.charts.iter().all(|c| c.x_label == "Time (s)"));
    }

    #[test]
    fn y_label_and_colors_are_fixed() {
        let log = letters_log(2);
        let figure = FigureState::build(&log, &ViewerConfig::new("a.csv", AxisSelection::Time)).unwrap();
        let colors: Vec<[u8; 4]> = figure.charts.iter().map(|c| c.color).collect();
        assert_eq!(colors, crate::state::chart::CHANNEL_PALETTE.to_vec());
        assert!(figure.charts.iter().all(|c| c.y_label == "Amplitude"));
    }

    #[test]
    fn charts_fill_grid_row_major() {
        let log = letters_log(2);
        let figure = FigureState::build(&log, &ViewerConfig::new("a.csv", AxisSelection::SampleIndex)).unwrap();
        assert_eq!(figure.chart_at(0, 0).unwrap().title, "c x a");
        assert_eq!(figure.chart_at(0, 2).unwrap().title, "e x a");
        assert_eq!(figure.chart_at(1, 0).unwrap().title, "f x a");
        assert_eq!(figure.chart_at(1, 2).unwrap().title, "h x a");
        assert!(figure.chart_at(2, 0).is_none());
    }

    #[test]
    fn plots_selected_x_against_channel() {
        let csv = "idx,t,ax,ay,az,gx,gy,gz\n0,0.0,1,2,3,4,5,6\n1,0.1,7,8,9,10,11,12\n";
        let log = read_sensor_log(csv.as_bytes()).unwrap();

        let by_sample = FigureState::build(&log, &ViewerConfig::new("log.csv", AxisSelection::SampleIndex)).unwrap();
        let ax = by_sample.chart_at(0, 0).unwrap();
        assert_eq!(ax.title, "ax x idx");
        assert_eq!(ax.xs(), vec![0.0, 1.0]);
        assert_eq!(ax.ys(), vec![1.0, 7.0]);

        let by_time = FigureState::build(&log, &ViewerConfig::new("log.csv", AxisSelection::Time)).unwrap();
        let gz = by_time.chart_at(1, 2).unwrap();
        assert_eq!(gz.title, "gz x t");
        assert_eq!(gz.points, vec![[0.0, 6.0], [0.1, 12.0]]);
    }

    #[test]
    fn narrow_log_is_rejected_by_the_builder() {
        let log = SensorLog {
            columns: ["idx", "t", "ax", "ay", "az"].iter().map(|c| c.to_string()).collect(),
            rows: vec![vec![0.0, 0.0, 1.0, 2.0, 3.0]],
        };
        let config = ViewerConfig::new("log.csv", AxisSelection::SampleIndex);
        assert!(matches!(
            FigureState::build(&log, &config),
            Err(ChartError::MissingColumns { found: 5, required: 8 })
        ));
    }

    #[test]
    fn window_title_uses_file_name() {
        let log = letters_log(1);
        let figure = FigureState::build(&log, &ViewerConfig::new("logs/sensor_log1.csv", AxisSelection::SampleIndex)).unwrap();
        assert_eq!(figure.title, "Sensor Log - sensor_log1.csv");
    }

    #[test]
    fn malformed_log_never_reaches_the_builder() {
        let csv = "idx,t,ax,ay,az,gx,gy,gz\n0,0.0,1,2,3,4,5\n";
        assert!(matches!(
            read_sensor_log(csv.as_bytes()),
            Err(ChartError::RaggedRow { .. })
        ));
    }
}
