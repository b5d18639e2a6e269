/// Channel colors in chart order: blue, green, red, cyan, magenta, yellow.
pub const CHANNEL_PALETTE: [[u8; 4]; 6] = [
    [0, 0, 255, 255],   // Blue
    [0, 128, 0, 255],   // Green
    [255, 0, 0, 255],   // Red
    [0, 191, 191, 255], // Cyan
    [191, 0, 191, 255], // Magenta
    [191, 191, 0, 255], // Yellow
];

pub fn color_for_index(index: usize) -> [u8; 4] {
    CHANNEL_PALETTE[index % CHANNEL_PALETTE.len()]
}

/// One channel plotted against the shared X column.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: [u8; 4],
    pub grid_row: usize,
    pub grid_col: usize,
    pub points: Vec<[f64; 2]>,
}

impl ChartState {
    pub fn color32(&self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.color[0], self.color[1], self.color[2], self.color[3])
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
impl ChartState {
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p[0]).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p[1]).collect()
    }
}
