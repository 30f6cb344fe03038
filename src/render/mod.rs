pub mod bars;
pub mod chart;
pub mod scale;

pub use bars::{bar, build_legend, build_row, build_rows};
pub use chart::{Chart, render_chart};
pub use scale::{ScaledTable, scale};
