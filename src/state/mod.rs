pub mod chart;
pub mod figure;
